pub mod fetch;
pub mod parse;
pub mod schema;

use crate::config::{Config, OutputFormat};
use crate::error::PrReaderError;
use crate::output::{self, View};
use crate::parser::{self, RawComment};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "pr-reader")]
#[command(
    author,
    version,
    about = "Normalize and triage GitHub pull request review comments"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (default: ./pr-reader.yaml if present)
    #[arg(short, long, global = true, env = "PR_READER_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize review comments from a JSON file produced by `gh api`
    Parse(ParseArgs),

    /// Fetch review comments for a pull request URL via `gh`, then summarize
    Fetch(FetchArgs),

    /// Print JSON Schema for config validation
    Schema,
}

#[derive(Parser, Clone)]
pub struct ParseArgs {
    /// JSON file from `gh api repos/{owner}/{repo}/pulls/{n}/comments`
    #[arg(value_name = "JSON_FILE")]
    pub file: PathBuf,

    /// Only keep comments whose reviewer login contains this (case-insensitive)
    #[arg(value_name = "REVIEWER")]
    pub reviewer: Option<String>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Parser, Clone)]
pub struct FetchArgs {
    /// Pull request URL, e.g. https://github.com/owner/repo/pull/42
    #[arg(value_name = "PR_URL")]
    pub url: String,

    /// Only keep comments whose reviewer login contains this (case-insensitive)
    #[arg(long)]
    pub reviewer: Option<String>,

    /// Also write the raw JSON returned by `gh` to this file
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

#[derive(Args, Clone, Default)]
pub struct DisplayArgs {
    /// Output format (overrides config)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Truncate each body to this many characters in text output (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub max_chars: Option<u64>,

    /// List the most severe comments first
    #[arg(long)]
    pub by_severity: bool,
}

impl DisplayArgs {
    /// Merge CLI flags over config values.
    fn view(&self, config: &Config, source: String, reviewer_filter: Option<String>) -> View {
        View {
            format: self.format.unwrap_or(config.format),
            excerpt_chars: self
                .max_chars
                .map(|n| n as usize)
                .unwrap_or(config.excerpt_chars),
            by_severity: self.by_severity || config.by_severity,
            source,
            reviewer_filter,
        }
    }
}

/// Normalize and print to stdout. Shared tail of `parse` and `fetch`.
fn present(
    raw: &[RawComment],
    reviewer: Option<String>,
    display: &DisplayArgs,
    config: &Config,
    source: String,
) -> Result<(), PrReaderError> {
    let reviewer = reviewer.or_else(|| config.reviewer.clone());
    let comments = parser::normalize(raw, reviewer.as_deref());
    info!(
        "{} of {} records kept as code review comments",
        comments.len(),
        raw.len()
    );

    let view = display.view(config, source, reviewer);
    let stdout = std::io::stdout();
    output::render(&mut stdout.lock(), &comments, &view)?;
    Ok(())
}
