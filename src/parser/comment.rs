use super::markup::clean_body;
use super::severity::Severity;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const UNKNOWN_REVIEWER: &str = "unknown";

/// One element of `gh api repos/{owner}/{repo}/pulls/{n}/comments`.
/// Only the fields we read are modelled; everything else is ignored.
/// A field of the wrong type reads as absent instead of rejecting the record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComment {
    #[serde(default, deserialize_with = "lenient")]
    pub path: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub line: Option<u64>,

    #[serde(default, deserialize_with = "lenient")]
    pub original_line: Option<u64>,

    #[serde(default, deserialize_with = "lenient")]
    pub body: Option<String>,

    #[serde(default, deserialize_with = "lenient")]
    pub user: Option<RawUser>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
    #[serde(default, deserialize_with = "lenient")]
    pub login: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl RawComment {
    /// File the comment is attached to. Empty paths count as absent.
    pub fn file(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.is_empty())
    }

    pub fn login(&self) -> Option<&str> {
        self.user.as_ref().and_then(|u| u.login.as_deref())
    }

    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }

    /// Prefer the line in the original diff; GitHub nulls `line` once a thread is outdated
    pub fn resolved_line(&self) -> Option<u64> {
        self.original_line.or(self.line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedComment {
    pub id: usize,
    pub file: String,
    pub line: Option<u64>,
    pub severity: Severity,
    pub reviewer: String,
    pub body: String,
}

impl NormalizedComment {
    /// Build from a code comment; `None` for general PR comments without a path.
    pub fn from_raw(id: usize, raw: &RawComment) -> Option<Self> {
        let file = raw.file()?;
        let body = raw.body();

        Some(Self {
            id,
            file: file.to_string(),
            line: raw.resolved_line(),
            severity: Severity::detect(body),
            reviewer: raw.login().unwrap_or(UNKNOWN_REVIEWER).to_string(),
            body: clean_body(body),
        })
    }

    pub fn line_label(&self) -> String {
        self.line
            .map(|l| l.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}
