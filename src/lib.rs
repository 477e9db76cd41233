//! yt-transcript - A Rust CLI tool for turning YouTube transcripts into research notes
//!
//! This library fetches a video's caption fragments and page metadata concurrently,
//! regroups the fragments into minute-long paragraphs, derives frequency-based keywords
//! and renders a Markdown document whose headings deep-link back into the video.

pub mod cli;
pub mod config;
pub mod extractors;
pub mod output;
pub mod transcribe;
pub mod utils;

pub use cli::Cli;
pub use config::Config;
pub use extractors::{MetadataSource, RawFragment, TranscriptProvider, VideoMetadata, VideoReference};
pub use output::TranscriptDocument;
pub use transcribe::{TranscriptBlock, TranscriptPipeline};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the transcript tool
#[derive(thiserror::Error, Debug)]
pub enum TranscriptorError {
    #[error("Invalid YouTube URL or video ID: '{0}'")]
    InvalidReference(String),

    #[error("Transcripts are disabled for this video (owner choice).")]
    TranscriptsDisabled,

    #[error("No transcript was found for this video in the requested language.")]
    NoTranscriptFound,

    #[error("This video is unavailable (private, deleted, or region-locked).")]
    VideoUnavailable,

    #[error("Could not fetch the transcript (network block or anti-bot).")]
    RetrievalBlocked,

    #[error("Unexpected transcript API failure: {0}")]
    UnexpectedFailure(String),

    #[error("Processing failure: {0:#}")]
    Processing(anyhow::Error),

    #[error("Configuration error: {0:#}")]
    Config(anyhow::Error),
}
