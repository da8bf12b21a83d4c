use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod github;
mod output;
mod parser;

use cli::{Cli, Commands};
use config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - only show logs with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("pr_reader=debug")
    } else {
        EnvFilter::new("pr_reader=warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Parse(args) => {
            let config = Config::resolve(cli.config.as_deref())?;
            cli::parse::execute(args, &config)
        }
        Commands::Fetch(args) => {
            let config = Config::resolve(cli.config.as_deref())?;
            cli::fetch::execute(args, &config)
        }
        Commands::Schema => cli::schema::execute(),
    }
}
