//! Textual wrapping of render invocations in test sources.
//!
//! Each [`WrapRule`] describes one substitution pass: find every
//! `invocation(<Target ...>...</Target>);` call and re-emit it with the
//! captured markup enclosed in a wrapper element. [`rewrite_text`] applies
//! the rules as independent sequential passes over a string;
//! [`rewrite_file`] runs them against a file on disk and writes the result
//! back to the same path.

pub mod rule;

pub use rule::{WrapLayout, WrapRule, timeline_toast_rules};

use std::path::{Path, PathBuf};

use crate::io::{self, IoError};

/// Outcome of one substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    /// Invocation name the pass rewrote (`render`, `rerender`, ...).
    pub invocation: String,
    /// Number of non-overlapping matches replaced.
    pub replacements: usize,
}

/// Result of rewriting a text in memory.
#[derive(Debug)]
pub struct RewriteOutcome {
    /// The fully transformed text (equal to the input when nothing matched).
    pub text: String,
    /// One report per rule, in application order.
    pub passes: Vec<PassReport>,
}

/// Result of rewriting a file on disk.
#[derive(Debug)]
pub struct RewriteReport {
    /// The rewritten file.
    pub path: PathBuf,
    /// One report per rule, in application order.
    pub passes: Vec<PassReport>,
}

impl RewriteReport {
    /// Total replacements across all passes.
    pub fn total(&self) -> usize {
        self.passes.iter().map(|p| p.replacements).sum()
    }

    /// True when the rewrite changed the file's text. Every replacement
    /// inserts wrapper markup, so any replacement implies a change.
    pub fn changed(&self) -> bool {
        self.total() > 0
    }
}

/// Apply every rule to `input` as an independent sequential pass.
///
/// Each pass replaces all of its non-overlapping matches left-to-right;
/// later passes operate on the output of earlier ones. A pass that matches
/// nothing leaves the text byte-identical.
pub fn rewrite_text(input: &str, rules: &[WrapRule]) -> RewriteOutcome {
    let mut text = input.to_owned();
    let mut passes = Vec::with_capacity(rules.len());

    for rule in rules {
        let (next, replacements) = rule.apply(&text);
        text = next;
        passes.push(PassReport {
            invocation: rule.invocation().to_owned(),
            replacements,
        });
    }

    RewriteOutcome { text, passes }
}

/// Rewrite the file at `path` in place.
///
/// Loads the full text, applies the rules, and writes the result back to
/// the same path. The write happens even when nothing matched, reproducing
/// the original content unchanged.
pub fn rewrite_file(path: &Path, rules: &[WrapRule]) -> Result<RewriteReport, IoError> {
    let source = io::read_source(path)?;
    let outcome = rewrite_text(&source, rules);
    io::write_source(path, &outcome.text)?;

    Ok(RewriteReport {
        path: path.to_path_buf(),
        passes: outcome.passes,
    })
}
