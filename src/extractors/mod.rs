use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

pub mod metadata;
pub mod video_id;
pub mod youtube;

pub use metadata::PageMetadataFetcher;
pub use video_id::{resolve, VideoReference};
pub use youtube::YoutubeTranscriptProvider;

use crate::config::FetchConfig;
use crate::TranscriptorError;

pub const DEFAULT_TITLE: &str = "YouTube Transcript";
pub const DEFAULT_CHANNEL: &str = "Unknown Channel";

/// One time-coded caption fragment as delivered by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawFragment {
    /// Start offset in seconds
    pub start: f64,

    /// Fragment text, often only a few words
    pub text: String,
}

impl RawFragment {
    pub fn new(start: f64, text: impl Into<String>) -> Self {
        Self {
            start,
            text: text.into(),
        }
    }
}

/// Page metadata scraped from the watch page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub channel: String,
}

impl Default for VideoMetadata {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            channel: DEFAULT_CHANNEL.to_string(),
        }
    }
}

/// Best-effort source of page metadata. Never fails: implementations fall back to defaults.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn fetch_metadata(&self, url: &str) -> VideoMetadata;
}

/// Source of raw caption fragments for a video identifier
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    /// Fetch the ordered fragment sequence or one of the transcript failure kinds
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<RawFragment>, TranscriptorError>;

    /// Get the name of this provider
    fn provider_name(&self) -> &'static str;
}

/// Build the shared keep-alive client used by both fetchers
pub fn build_client(config: &FetchConfig) -> crate::Result<Client> {
    let client = Client::builder()
        .timeout(std::time::Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.as_str())
        .build()?;

    Ok(client)
}
