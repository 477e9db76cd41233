use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use yt_transcript::cli::Cli;
use yt_transcript::config::Config;
use yt_transcript::extractors::resolve;
use yt_transcript::{TranscriptPipeline, TranscriptorError};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version go to stdout with status 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    // Initialize tracing
    let default_filter = if cli.verbose { "yt_transcript=debug" } else { "yt_transcript=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli).await {
        Ok(path) => {
            println!("Success! Transcript saved to: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<PathBuf, TranscriptorError> {
    // Resolve before anything touches the network
    let video = resolve(&cli.input)?;

    let mut config = Config::load(cli.config.as_deref()).map_err(TranscriptorError::Config)?;
    if let Some(dir) = cli.output_dir {
        config.output.dir = dir;
    }
    if let Some(count) = cli.keywords {
        config.keywords.count = count;
    }
    if !cli.languages.is_empty() {
        config.fetch.languages = cli.languages;
    }
    config.validate().map_err(TranscriptorError::Config)?;

    let pipeline = TranscriptPipeline::new(config).map_err(TranscriptorError::Processing)?;

    let progress = if cli.quiet {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
            spinner.set_style(style);
        }
        spinner.enable_steady_tick(Duration::from_millis(100));
        spinner
    };
    progress.set_message(format!("Fetching metadata and transcript for: {}...", video));

    let result = pipeline.process(&video).await;
    progress.finish_and_clear();

    result
}
