use super::{present, FetchArgs};
use crate::config::Config;
use crate::github::{GhClient, PullRequestLocator};
use crate::parser::parse_comments_str;
use anyhow::Context;
use tracing::info;

pub fn execute(args: FetchArgs, config: &Config) -> anyhow::Result<()> {
    let locator = PullRequestLocator::parse(&args.url)?;
    info!("Fetching review comments for {}", locator);

    let client = GhClient::new(config.gh_binary.clone());
    let json = client.fetch_comments(&locator)?;

    if let Some(path) = &args.save {
        std::fs::write(path, &json)
            .with_context(|| format!("Failed to save raw comments to {:?}", path))?;
        info!("Saved raw comments to {:?}", path);
    }

    let raw = parse_comments_str(&json)?;
    present(&raw, args.reviewer, &args.display, config, args.url)?;
    Ok(())
}
