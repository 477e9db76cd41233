use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "yt-transcript",
    about = "Fetch a YouTube transcript and save it as timestamp-linked Markdown",
    version,
    long_about = "Fetches the transcript and page metadata of a YouTube video concurrently, groups the caption fragments into one paragraph per minute, extracts the most frequent keywords and writes a Markdown document whose headings jump straight to that point in the video."
)]
pub struct Cli {
    /// YouTube URL (watch, short, embed or youtu.be link) or a bare 11-character video ID
    #[arg(value_name = "URL_OR_ID")]
    pub input: String,

    /// Directory the Markdown file is written to (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Number of keywords to put in the document header
    #[arg(short, long, value_name = "COUNT")]
    pub keywords: Option<usize>,

    /// Preferred transcript language, repeat for fallbacks (e.g. -l de -l en)
    #[arg(short, long = "language", value_name = "LANG")]
    pub languages: Vec<String>,

    /// Path to a YAML config file
    #[arg(short, long, value_name = "FILE", env = "YT_TRANSCRIPT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable progress indicators
    #[arg(short, long)]
    pub quiet: bool,
}
