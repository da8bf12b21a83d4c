use super::markup::{tokenize, Token};
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Bare bracketed marker in plain text: `[HIGH]`, or `![critical]` with no image target.
/// Must not be glued to a preceding word so `levels[high]` stays plain code.
static BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[^\w\]])\[\s*(critical|high|medium)\s*\]")
        .expect("marker pattern is valid")
});

/// Triage severity. Variants are ordered most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Unknown,
}

impl Severity {
    /// Detection precedence.
    pub const RANKED: [Severity; 3] = [Severity::Critical, Severity::High, Severity::Medium];

    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Unknown,
    ];

    fn keyword(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Unknown => "unknown",
        }
    }

    fn emoji(self) -> Option<char> {
        match self {
            Severity::Critical => Some('🔴'),
            Severity::High => Some('🟠'),
            Severity::Medium => Some('🟡'),
            Severity::Unknown => None,
        }
    }

    /// Classify a comment body. The highest ranked marker present wins,
    /// regardless of where it appears.
    pub fn detect(body: &str) -> Severity {
        let mut markers: HashSet<String> = HashSet::new();
        for token in tokenize(body) {
            match token {
                Token::Image { alt } => {
                    markers.insert(alt.trim().to_lowercase());
                }
                Token::Text(text) => markers.extend(
                    BRACKET_RE
                        .captures_iter(text)
                        .filter_map(|caps| caps.get(1))
                        .map(|m| m.as_str().to_lowercase()),
                ),
                Token::HtmlImage => {}
            }
        }

        Self::RANKED
            .into_iter()
            .find(|severity| {
                markers.contains(severity.keyword())
                    || severity.emoji().is_some_and(|e| body.contains(e))
            })
            .unwrap_or(Severity::Unknown)
    }

    pub fn as_str(self) -> &'static str {
        self.keyword()
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Critical => write!(f, "🔴 CRITICAL"),
            Severity::High => write!(f, "🟠 HIGH"),
            Severity::Medium => write!(f, "🟡 MEDIUM"),
            Severity::Unknown => write!(f, "Unknown"),
        }
    }
}
