use super::severity_counts;
use crate::parser::NormalizedComment;
use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

/// Machine-readable envelope around normalized comments.
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: String,
    pub source: &'a str,
    pub reviewer_filter: Option<&'a str>,
    pub total: usize,
    pub counts: BTreeMap<&'static str, usize>,
    pub comments: &'a [NormalizedComment],
}

impl<'a> JsonReport<'a> {
    pub fn new(
        comments: &'a [NormalizedComment],
        source: &'a str,
        reviewer_filter: Option<&'a str>,
    ) -> Self {
        let counts = severity_counts(comments)
            .into_iter()
            .map(|(severity, n)| (severity.as_str(), n))
            .collect();

        Self {
            generated_at: Utc::now().to_rfc3339(),
            source,
            reviewer_filter,
            total: comments.len(),
            counts,
            comments,
        }
    }
}
