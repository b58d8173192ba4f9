//! Whitespace cleanup for extracted text.
//!
//! Extractors hand over raw runs and blocks with whatever spacing the
//! source format carried; everything funnels through here so the combined
//! prompt has single spaces within lines and single blank lines between
//! blocks.

use regex::Regex;
use std::sync::LazyLock;

/// Regex to collapse runs of spaces and tabs into one space.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());

/// Collapse internal whitespace to single spaces and trim the line.
pub fn collapse_line(line: &str) -> String {
    WHITESPACE_COLLAPSE_REGEX
        .replace_all(line, " ")
        .trim()
        .to_string()
}

/// Clean a sequence of raw text runs: collapse whitespace, trim, and drop
/// entries that end up empty. Run order is preserved.
pub fn clean_runs<I>(runs: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    runs.into_iter()
        .map(|run| collapse_line(run.as_ref()))
        .filter(|run| !run.is_empty())
        .collect()
}

/// Normalize a multi-line block.
///
/// Line endings become `\n`, whitespace within each line is collapsed, and
/// runs of blank lines fold into a single blank line. Leading and trailing
/// blank lines are dropped; interior blank lines survive as block
/// separators (e.g. page breaks in PDF output).
pub fn clean_block(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();
    let mut blank_pending = false;

    for raw in normalized.lines() {
        let line = collapse_line(raw);
        if line.is_empty() {
            blank_pending = !lines.is_empty();
        } else {
            if blank_pending {
                lines.push(String::new());
                blank_pending = false;
            }
            lines.push(line);
        }
    }

    lines.join("\n")
}
