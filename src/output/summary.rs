use super::severity_counts;
use crate::parser::NormalizedComment;
use std::io::{self, Write};

const RULE_WIDTH: usize = 80;

/// Write the human-readable summary: a header with the total, then one block per comment.
pub fn write_summary<W: Write>(
    out: &mut W,
    comments: &[NormalizedComment],
    excerpt_chars: usize,
) -> io::Result<()> {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "─".repeat(RULE_WIDTH);

    writeln!(out, "\n{}", heavy)?;
    writeln!(out, "Found {} review comments", comments.len())?;
    writeln!(out, "{}\n", heavy)?;

    if !comments.is_empty() {
        let counts = severity_counts(comments)
            .into_iter()
            .map(|(severity, n)| format!("{}: {}", severity, n))
            .collect::<Vec<_>>()
            .join(" | ");
        writeln!(out, "{}\n", counts)?;
    }

    for comment in comments {
        writeln!(out, "{} - Comment #{}", comment.severity, comment.id)?;
        writeln!(out, "{}", light)?;
        writeln!(out, "File: {}", comment.file)?;
        writeln!(out, "Line: {}", comment.line_label())?;
        writeln!(out, "Reviewer: {}", comment.reviewer)?;

        let (text, truncated) = excerpt(&comment.body, excerpt_chars);
        writeln!(out, "\n{}", text)?;
        if truncated {
            writeln!(out, "...")?;
        }
        writeln!(out)?;
    }

    Ok(())
}

/// First `max_chars` characters of `body`, never splitting a code point.
fn excerpt(body: &str, max_chars: usize) -> (&str, bool) {
    match body.char_indices().nth(max_chars) {
        Some((cut, _)) => (&body[..cut], true),
        None => (body, false),
    }
}
