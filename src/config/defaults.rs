use super::OutputFormat;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "pr-reader.yaml";

pub fn default_excerpt_chars() -> usize {
    500
}

pub fn default_format() -> OutputFormat {
    OutputFormat::Text
}

pub fn default_gh_binary() -> PathBuf {
    PathBuf::from("gh")
}

pub fn default_false() -> bool {
    false
}
