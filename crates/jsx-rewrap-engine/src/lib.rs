pub mod io;
pub mod rewrite;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use rewrite::{
    PassReport, RewriteOutcome, RewriteReport, WrapLayout, WrapRule, rewrite_file, rewrite_text,
    timeline_toast_rules,
};
