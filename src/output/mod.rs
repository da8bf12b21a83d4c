mod report;
mod summary;

use report::JsonReport;
use summary::write_summary;

use crate::config::OutputFormat;
use crate::error::OutputError;
use crate::parser::{NormalizedComment, Severity};
use std::io::Write;

/// How normalized comments are presented.
#[derive(Debug, Clone)]
pub struct View {
    pub format: OutputFormat,
    pub excerpt_chars: usize,
    pub by_severity: bool,
    /// File path or PR URL the comments came from
    pub source: String,
    pub reviewer_filter: Option<String>,
}

pub fn render<W: Write>(
    out: &mut W,
    comments: &[NormalizedComment],
    view: &View,
) -> Result<(), OutputError> {
    let ordered = display_order(comments, view.by_severity);

    match view.format {
        OutputFormat::Text => write_summary(out, &ordered, view.excerpt_chars)?,
        OutputFormat::Json => {
            let report = JsonReport::new(&ordered, &view.source, view.reviewer_filter.as_deref());
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}

/// Stable sort most-severe first; ids are left untouched.
fn display_order(comments: &[NormalizedComment], by_severity: bool) -> Vec<NormalizedComment> {
    let mut ordered = comments.to_vec();
    if by_severity {
        ordered.sort_by_key(|c| c.severity);
    }
    ordered
}

pub fn severity_counts(comments: &[NormalizedComment]) -> Vec<(Severity, usize)> {
    Severity::ALL
        .into_iter()
        .map(|s| (s, comments.iter().filter(|c| c.severity == s).count()))
        .collect()
}
