mod comment;
mod markup;
mod severity;

pub use comment::{NormalizedComment, RawComment};
pub use severity::Severity;

use crate::error::InputError;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Filter-map raw review comments into display records.
///
/// General comments (no `path`) are dropped, then the optional reviewer
/// filter is applied as a case-insensitive substring match. Ids are dense
/// over the survivors, in input order.
pub fn normalize(raw: &[RawComment], reviewer_filter: Option<&str>) -> Vec<NormalizedComment> {
    let needle = reviewer_filter
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase);

    raw.iter()
        .filter(|c| c.file().is_some())
        .filter(|c| match &needle {
            Some(needle) => c.login().unwrap_or("").to_lowercase().contains(needle),
            None => true,
        })
        .enumerate()
        .filter_map(|(i, c)| NormalizedComment::from_raw(i + 1, c))
        .collect()
}

/// Read review comments from a JSON file.
pub fn load_comments(path: &Path) -> Result<Vec<RawComment>, InputError> {
    if !path.exists() {
        return Err(InputError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_comments_str(&content)
}

/// Parse one or more top-level JSON arrays of comments.
///
/// `gh api --paginate` prints one array per page back to back, so a stream
/// of arrays is accepted and flattened. Blank input is zero comments;
/// anything else that is not an array is an error.
pub fn parse_comments_str(content: &str) -> Result<Vec<RawComment>, InputError> {
    if content.trim().is_empty() {
        debug!("Input is empty, treating as zero comments");
        return Ok(Vec::new());
    }

    let mut comments = Vec::new();
    for (page, value) in serde_json::Deserializer::from_str(content)
        .into_iter::<Value>()
        .enumerate()
    {
        let records = match value? {
            Value::Array(records) => records,
            other => return Err(InputError::NotAnArray(json_kind(&other))),
        };
        debug!("Page {} holds {} records", page + 1, records.len());

        for (index, record) in records.into_iter().enumerate() {
            if !record.is_object() {
                warn!(
                    "Skipping record {} on page {}: expected an object, found {}",
                    index,
                    page + 1,
                    json_kind(&record)
                );
                continue;
            }
            match serde_json::from_value::<RawComment>(record) {
                Ok(comment) => comments.push(comment),
                Err(e) => warn!("Skipping record {} on page {}: {}", index, page + 1, e),
            }
        }
    }

    Ok(comments)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
