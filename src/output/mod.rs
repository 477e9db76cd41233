use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use url::Url;

use crate::transcribe::TranscriptBlock;
use crate::utils::sanitize_filename;

/// Everything that ends up in one Markdown file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptDocument {
    /// URL the deep links are built from
    pub source_url: String,

    /// 11-character video identifier, used when the title yields no file name
    pub video_id: String,

    pub title: String,

    pub channel: String,

    pub blocks: Vec<TranscriptBlock>,

    pub keywords: Vec<String>,
}

impl TranscriptDocument {
    /// File name (without extension) derived from the title
    pub fn file_stem(&self) -> String {
        let stem = sanitize_filename(&self.title);
        if stem.is_empty() {
            format!("transcript_{}", self.video_id)
        } else {
            stem
        }
    }
}

/// Link into the video at `start` seconds.
///
/// Any `t` parameter already on the source URL is dropped and a single `t=<n>s` is
/// appended, after `?` when no other query parameters remain and `&` otherwise.
pub fn deep_link(source_url: &str, start: f64) -> String {
    let offset = format!("{}s", start.max(0.0) as u64);

    let Ok(mut url) = Url::parse(source_url) else {
        let separator = if source_url.contains('?') { '&' } else { '?' };
        return format!("{}{}t={}", source_url, separator, offset);
    };

    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| key != "t")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    url.set_query(None);
    url.query_pairs_mut().extend_pairs(kept).append_pair("t", &offset);

    url.into()
}

/// JSON string literal, which is also a valid double-quoted YAML scalar
fn quoted(value: &str) -> Result<String> {
    serde_json::to_string(value).context("Failed to encode header value")
}

/// Render front matter plus one linked heading per block
pub fn render_markdown(document: &TranscriptDocument) -> Result<String> {
    let mut markdown = String::new();

    writeln!(markdown, "---")?;
    writeln!(markdown, "title: {}", quoted(&document.title)?)?;
    writeln!(markdown, "channel: {}", quoted(&document.channel)?)?;
    writeln!(markdown, "url: {}", quoted(&document.source_url)?)?;
    writeln!(
        markdown,
        "keywords: {}",
        serde_json::to_string(&document.keywords).context("Failed to encode keywords")?
    )?;
    writeln!(markdown, "---\n")?;

    writeln!(markdown, "# {}\n", document.title)?;
    writeln!(markdown, "**Channel:** {}  ", document.channel)?;
    writeln!(markdown, "**Source URL:** {}\n", document.source_url)?;
    writeln!(markdown, "---\n")?;

    writeln!(markdown, "## 🔑 Top Keywords")?;
    let keywords = document
        .keywords
        .iter()
        .map(|keyword| format!("`{}`", keyword))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(markdown, "{}\n", keywords)?;
    writeln!(markdown, "---\n")?;

    let sections = document
        .blocks
        .iter()
        .map(|block| {
            format!(
                "### [{}]({})\n\n{}\n",
                block.timestamp,
                deep_link(&document.source_url, block.start),
                block.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n");
    markdown.push_str(&sections);

    Ok(markdown)
}

/// Write the document to `<output_dir>/<file stem>.md`, creating the directory if needed
pub fn save_markdown(document: &TranscriptDocument, output_dir: &Path) -> Result<PathBuf> {
    let content = render_markdown(document)?;

    fs_err::create_dir_all(output_dir)?;
    let path = output_dir.join(format!("{}.md", document.file_stem()));

    fs_err::write(&path, content)?;
    tracing::debug!("Wrote {} blocks to {}", document.blocks.len(), path.display());

    Ok(path)
}
