use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::extractors::{
    build_client, MetadataSource, PageMetadataFetcher, RawFragment, TranscriptProvider, VideoMetadata,
    VideoReference, YoutubeTranscriptProvider,
};
use crate::output::{self, TranscriptDocument};
use crate::TranscriptorError;

pub mod keywords;
pub mod processor;

pub use keywords::extract_keywords;
pub use processor::{group_blocks, FragmentRecord, TranscriptBlock};

/// Fetch, aggregate and export pipeline
pub struct TranscriptPipeline {
    config: Config,
    metadata: Box<dyn MetadataSource>,
    transcripts: Box<dyn TranscriptProvider>,
}

impl TranscriptPipeline {
    /// Create a pipeline backed by the YouTube fetchers, sharing one keep-alive client
    pub fn new(config: Config) -> crate::Result<Self> {
        let client = build_client(&config.fetch).context("Failed to build HTTP client")?;

        let metadata = PageMetadataFetcher::new(client.clone());
        let transcripts = YoutubeTranscriptProvider::new(client, config.fetch.languages.clone());

        Ok(Self::with_sources(config, Box::new(metadata), Box::new(transcripts)))
    }

    pub fn with_sources(
        config: Config,
        metadata: Box<dyn MetadataSource>,
        transcripts: Box<dyn TranscriptProvider>,
    ) -> Self {
        Self {
            config,
            metadata,
            transcripts,
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output.dir
    }

    /// Run the metadata and transcript fetches concurrently.
    ///
    /// A transcript failure returns immediately and the metadata result is dropped.
    /// Metadata cannot fail; its source falls back to defaults.
    pub async fn fetch(&self, video: &VideoReference) -> Result<(VideoMetadata, Vec<RawFragment>), TranscriptorError> {
        let source_url = video.source_url();
        tracing::info!(
            "Fetching metadata and transcript for {} via {}",
            video.id(),
            self.transcripts.provider_name()
        );

        let metadata = async { Ok::<_, TranscriptorError>(self.metadata.fetch_metadata(&source_url).await) };
        let transcript = self.transcripts.fetch_transcript(video.id());

        tokio::try_join!(metadata, transcript)
    }

    /// Aggregate fragments and derive keywords into an immutable document
    pub fn build_document(
        &self,
        video: &VideoReference,
        metadata: VideoMetadata,
        fragments: &[RawFragment],
    ) -> crate::Result<TranscriptDocument> {
        let blocks = group_blocks(fragments).context("Failed to group transcript fragments")?;
        let keywords = extract_keywords(&processor::full_text(&blocks), self.config.keywords.count);

        tracing::info!(
            "Grouped {} fragments into {} blocks, {} keywords",
            fragments.len(),
            blocks.len(),
            keywords.len()
        );

        Ok(TranscriptDocument {
            source_url: video.source_url(),
            video_id: video.id().to_string(),
            title: metadata.title,
            channel: metadata.channel,
            blocks,
            keywords,
        })
    }

    /// Fetch, process and write the document, returning the written path
    pub async fn process(&self, video: &VideoReference) -> Result<PathBuf, TranscriptorError> {
        let (metadata, fragments) = self.fetch(video).await?;

        let document = self
            .build_document(video, metadata, &fragments)
            .map_err(TranscriptorError::Processing)?;

        output::save_markdown(&document, self.output_dir())
            .context("Failed to export transcript")
            .map_err(TranscriptorError::Processing)
    }
}
