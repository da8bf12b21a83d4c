use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct Config {
    /// Default reviewer filter (case-insensitive substring of the login)
    #[serde(default)]
    pub reviewer: Option<String>,

    /// Maximum characters of each comment body shown in the text summary
    #[serde(default = "default_excerpt_chars")]
    pub excerpt_chars: usize,

    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// List comments most-severe first instead of in review order
    #[serde(default = "default_false")]
    pub by_severity: bool,

    #[serde(default = "default_gh_binary")]
    pub gh_binary: PathBuf,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
