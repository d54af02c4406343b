//! Leading documentation comment extraction (`spec.md` §6 "Leading
//! documentation comment").
//!
//! First-match-wins over the raw source text, exactly as the original's
//! `re.search(r'"([^"]*)"', input_code)`: the first double-quoted span —
//! lexically a comment, since SOL25 string literals use single quotes — is
//! captured verbatim, with no unescaping. This runs over raw text rather
//! than tokens because it is an output-shaping concern outside the lexer's
//! closed token set, not a lexical category of its own.

/// Returns the text between the first pair of double quotes in `source`,
/// or `None` if there is no such pair.
pub fn extract_description(source: &str) -> Option<String> {
    let start = source.find('"')?;
    let after_open = &source[start + 1..];
    let end = after_open.find('"')?;
    Some(after_open[..end].to_string())
}
