use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::extractors::RawFragment;
use crate::utils::format_timestamp;

const BUCKET_SECONDS: f64 = 60.0;

/// A paragraph covering one minute of the video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptBlock {
    /// `MM:SS` or `HH:MM:SS` label of the first fragment
    pub timestamp: String,

    /// Start offset of the first fragment in seconds
    pub start: f64,

    /// Space-joined fragment texts
    pub text: String,
}

/// Uniform view over the fragment shapes a provider can hand back
pub trait FragmentRecord {
    /// Start offset in seconds and the fragment text
    fn parts(&self) -> Result<(f64, &str)>;
}

impl FragmentRecord for RawFragment {
    fn parts(&self) -> Result<(f64, &str)> {
        Ok((self.start, &self.text))
    }
}

impl<T: FragmentRecord + ?Sized> FragmentRecord for &T {
    fn parts(&self) -> Result<(f64, &str)> {
        (**self).parts()
    }
}

/// Mapping-style record: `{"start": <number>, "text": <string>}`
impl FragmentRecord for Value {
    fn parts(&self) -> Result<(f64, &str)> {
        let start = self
            .get("start")
            .and_then(Value::as_f64)
            .ok_or_else(|| anyhow::anyhow!("fragment record has no numeric 'start': {}", self))?;
        let text = self
            .get("text")
            .and_then(Value::as_str)
            .ok_or_else(|| anyhow::anyhow!("fragment record has no string 'text': {}", self))?;

        Ok((start, text))
    }
}

/// Block under construction
struct PendingBlock {
    bucket: i64,
    start: f64,
    texts: Vec<String>,
}

impl PendingBlock {
    fn finish(self) -> TranscriptBlock {
        TranscriptBlock {
            timestamp: format_timestamp(self.start),
            start: self.start,
            text: self.texts.join(" "),
        }
    }
}

/// Group fragments into minute-bucketed paragraphs.
///
/// A block is closed as soon as a fragment lands in a later minute bucket, and the
/// trailing block is always flushed. Fragments whose bucket is lower than the open
/// block's (out-of-order provider data) are folded into the open block.
pub fn group_blocks<I>(fragments: I) -> Result<Vec<TranscriptBlock>>
where
    I: IntoIterator,
    I::Item: FragmentRecord,
{
    let mut blocks = Vec::new();
    let mut pending: Option<PendingBlock> = None;

    for fragment in fragments {
        let (start, text) = fragment.parts()?;
        let bucket = (start / BUCKET_SECONDS).floor() as i64;
        let text = text.trim().to_string();

        if let Some(block) = pending.as_mut() {
            if bucket <= block.bucket {
                block.texts.push(text);
                continue;
            }
        }

        if let Some(block) = pending.take() {
            blocks.push(block.finish());
        }
        pending = Some(PendingBlock {
            bucket,
            start,
            texts: vec![text],
        });
    }

    if let Some(block) = pending {
        blocks.push(block.finish());
    }

    Ok(blocks)
}

/// Space-joined text of all blocks, the keyword extractor's input
pub fn full_text(blocks: &[TranscriptBlock]) -> String {
    blocks
        .iter()
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
