use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use std::sync::OnceLock;

use super::{MetadataSource, VideoMetadata};
use crate::Result;

const TITLE_SUFFIX: &str = " - YouTube";

/// Scrapes title and channel name from the watch page HTML
#[derive(Clone)]
pub struct PageMetadataFetcher {
    client: Client,
}

impl PageMetadataFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn fetch_html(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch page: HTTP {}", response.status());
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl MetadataSource for PageMetadataFetcher {
    async fn fetch_metadata(&self, url: &str) -> VideoMetadata {
        tracing::debug!("Fetching page metadata from: {}", url);

        match self.fetch_html(url).await {
            Ok(html) => parse_metadata(&html),
            Err(e) => {
                tracing::warn!("Metadata fetch failed, using defaults: {:#}", e);
                VideoMetadata::default()
            }
        }
    }
}

fn title_selector() -> &'static Selector {
    static TITLE: OnceLock<Selector> = OnceLock::new();
    TITLE.get_or_init(|| Selector::parse("title").expect("static 'title' CSS selector is valid"))
}

fn channel_selector() -> &'static Selector {
    static CHANNEL: OnceLock<Selector> = OnceLock::new();
    CHANNEL.get_or_init(|| {
        Selector::parse(r#"link[itemprop="name"]"#).expect("static channel CSS selector is valid")
    })
}

fn author_regex() -> &'static Regex {
    static AUTHOR: OnceLock<Regex> = OnceLock::new();
    AUTHOR.get_or_init(|| Regex::new(r#""author":"(.*?)""#).expect("static author regex is valid"))
}

/// Pull title and channel out of a watch page, keeping defaults for whatever is missing
pub fn parse_metadata(html: &str) -> VideoMetadata {
    let document = Html::parse_document(html);
    let mut metadata = VideoMetadata::default();

    if let Some(element) = document.select(title_selector()).next() {
        let raw: String = element.text().collect();
        let title = raw.replace(TITLE_SUFFIX, "");
        let title = title.trim();
        if !title.is_empty() {
            metadata.title = title.to_string();
        }
    }

    // Standard schema.org markup first, then the author field of the embedded player JSON
    let channel = document
        .select(channel_selector())
        .filter_map(|element| element.value().attr("content"))
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(str::to_string)
        .or_else(|| {
            author_regex()
                .captures(html)
                .and_then(|captures| captures.get(1))
                .map(|m| m.as_str().trim().to_string())
                .filter(|name| !name.is_empty())
        });

    if let Some(channel) = channel {
        metadata.channel = channel;
    }

    metadata
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::{DEFAULT_CHANNEL, DEFAULT_TITLE};

    #[test]
    fn test_parse_schema_channel() {
        let html = r#"<html><head><title>Rust in 100 Seconds - YouTube</title></head>
            <body><span itemprop="author"><link itemprop="name" content="Fireship"></span>
            <script>var x = {"author":"Someone Else"};</script></body></html>"#;

        let metadata = parse_metadata(html);
        assert_eq!(metadata.title, "Rust in 100 Seconds");
        assert_eq!(metadata.channel, "Fireship");
    }

    #[test]
    fn test_parse_author_fallback() {
        let html = r#"<html><head><title>Lo-fi beats - YouTube</title></head>
            <body><script>var ytInitialPlayerResponse = {"videoDetails":{"author":"Chill Channel"}};</script></body></html>"#;

        let metadata = parse_metadata(html);
        assert_eq!(metadata.title, "Lo-fi beats");
        assert_eq!(metadata.channel, "Chill Channel");
    }

    #[test]
    fn test_parse_missing_fields() {
        let metadata = parse_metadata("<html><head><title> - YouTube</title></head><body></body></html>");
        assert_eq!(metadata.title, DEFAULT_TITLE);
        assert_eq!(metadata.channel, DEFAULT_CHANNEL);

        let metadata = parse_metadata("not html at all");
        assert_eq!(metadata, VideoMetadata::default());
    }

    #[test]
    fn test_title_entities_decoded() {
        let metadata = parse_metadata("<title>Tom &amp; Jerry &quot;Live&quot; - YouTube</title>");
        assert_eq!(metadata.title, "Tom & Jerry \"Live\"");
    }

    #[tokio::test]
    async fn test_network_failure_falls_back_to_defaults() {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(2))
            .build()
            .unwrap();
        let fetcher = PageMetadataFetcher::new(client);

        // Port 9 (discard) is closed on test machines, so the connection is refused
        let metadata = fetcher.fetch_metadata("http://127.0.0.1:9/watch?v=dQw4w9WgXcQ").await;
        assert_eq!(metadata, VideoMetadata::default());
    }
}
