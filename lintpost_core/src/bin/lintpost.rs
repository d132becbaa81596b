use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use lintpost_core::posting::{OutputFormat, PostContext};
use lintpost_core::{load_config, read_comments, PostingConfig, PostingService};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Print analyzer findings read as JSON lines in a review-comment text format
#[derive(Parser)]
#[command(name = "lintpost")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format (overrides the config file)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<Utf8PathBuf>,

    /// Read comments from this file instead of stdin
    #[arg(short, long)]
    input: Option<Utf8PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PostingConfig::default(),
    };
    if let Some(format) = cli.format {
        config.format = format;
    }

    let mut comments = match &cli.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("failed to open {path}"))?;
            read_comments(BufReader::new(file))?
        }
        None => read_comments(io::stdin().lock())?,
    };
    for comment in &mut comments {
        config.apply_defaults(comment);
    }

    let mut stdout = io::stdout().lock();
    let ctx = PostContext::background();
    PostingService::local(config.format, &mut stdout)
        .post_all(&ctx, &comments)
        .context("failed to write comments")?;
    stdout.flush().context("failed to flush stdout")?;

    Ok(())
}

// A non-empty RUST_LOG is used as-is; otherwise --verbose picks DEBUG over WARN.
fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}
