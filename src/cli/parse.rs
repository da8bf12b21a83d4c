use super::{present, ParseArgs};
use crate::config::Config;
use crate::parser::load_comments;
use tracing::info;

pub fn execute(args: ParseArgs, config: &Config) -> anyhow::Result<()> {
    info!("Reading review comments from {:?}", args.file);
    let raw = load_comments(&args.file)?;

    present(
        &raw,
        args.reviewer,
        &args.display,
        config,
        args.file.display().to_string(),
    )?;
    Ok(())
}
