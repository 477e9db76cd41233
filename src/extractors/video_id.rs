use regex::Regex;
use std::fmt;
use std::sync::OnceLock;
use url::Url;

use crate::TranscriptorError;

const ID_LEN: usize = 11;

/// Watch, embed, short and youtu.be forms; group 1 is the identifier.
fn video_id_regex() -> &'static Regex {
    static VIDEO_ID: OnceLock<Regex> = OnceLock::new();
    VIDEO_ID.get_or_init(|| {
        Regex::new(
            r"(?:https?://)?(?:www\.|m\.)?(?:youtube\.com/(?:[^/\s]+/\S+/|(?:v|e(?:mbed)?|shorts|live)/|\S*?[?&]v=)|youtu\.be/)([a-zA-Z0-9_-]{11})",
        )
        .expect("static video id regex is valid")
    })
}

/// A resolved video: the 11-character identifier plus the input it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    id: String,
    input: String,
}

impl VideoReference {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The string the reference was resolved from, untouched
    pub fn input(&self) -> &str {
        &self.input
    }

    /// URL used for scraping and deep links.
    ///
    /// Inputs that parse as http(s) URLs are kept (scheme and host normalised, query
    /// untouched), scheme-less URLs get `https://`, and anything else, bare identifiers
    /// included, becomes the canonical watch URL.
    pub fn source_url(&self) -> String {
        if self.input == self.id {
            return watch_url(&self.id);
        }

        Url::parse(&self.input)
            .ok()
            .filter(|url| matches!(url.scheme(), "http" | "https"))
            .or_else(|| {
                Url::parse(&format!("https://{}", self.input))
                    .ok()
                    .filter(|url| url.host_str().is_some())
            })
            .map(String::from)
            .unwrap_or_else(|| watch_url(&self.id))
    }
}

impl fmt::Display for VideoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={}", video_id)
}

fn is_bare_id(input: &str) -> bool {
    input.len() == ID_LEN
        && input
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Extract the video identifier from a URL or bare ID. No network access.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    if let Some(captures) = video_id_regex().captures(input) {
        return captures.get(1).map(|m| m.as_str().to_string());
    }

    is_bare_id(input).then(|| input.to_string())
}

/// Resolve user input into a [`VideoReference`]
pub fn resolve(input: &str) -> Result<VideoReference, TranscriptorError> {
    let id = extract_video_id(input)
        .ok_or_else(|| TranscriptorError::InvalidReference(input.to_string()))?;

    Ok(VideoReference {
        id,
        input: input.trim().to_string(),
    })
}
