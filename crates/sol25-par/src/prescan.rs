//! Raw-text duplicate-method-header pre-scan
//! (`spec.md` §4.2 "Pre-scan duplicate detection").
//!
//! Runs over the untouched source text, line by line, *before* lexing even
//! starts. This is a separate, cheaper detector from the parser's own
//! selector-based duplicate check in `class.rs` — either may fire first
//! depending on what shape the offending input takes, and `sol25-drv` runs
//! this one first.

use std::sync::LazyLock;

use regex::Regex;
use sol25_util::{SolError, SolResult};

static METHOD_HEADER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w:]+ *\[\w*(?::\w+)*\|.*?\]").unwrap());

/// Scans each line of `source` for something that looks like a method
/// header (`selector [ params | ...`) and reports an error if the same
/// candidate selector text appears to head more than one line.
pub fn check_duplicate_headers(source: &str) -> SolResult<()> {
    let mut seen: Vec<String> = Vec::new();

    for line in source.lines() {
        let trimmed = line.trim();
        let Some(m) = METHOD_HEADER_LINE.find(trimmed) else { continue };
        let matched = m.as_str();
        let Some(bracket) = matched.find('[') else { continue };
        let candidate = matched[..bracket].trim_end().to_string();

        if seen.contains(&candidate) {
            return Err(SolError::other(format!(
                "duplicate method header '{candidate}' detected before lexing"
            )));
        }
        seen.push(candidate);
    }

    Ok(())
}
