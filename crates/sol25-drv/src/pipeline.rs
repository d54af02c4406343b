//! Wires the five crates together in the order `spec.md` §2/§5 describes:
//! the raw-text duplicate-header pre-scan, then C1 → C2 (with C2's own
//! inline checks) → C3 → C4.
//!
//! `spec.md` §12 (supplemented behavior): the pre-scan runs on the raw
//! input text before lexing even starts, as a detector separate from the
//! parser's own selector-based duplicate check — either may fire first
//! depending on the input.

use sol25_util::SolResult;

use crate::doc_comment::extract_description;

/// Runs the full pipeline over `source`, returning the pretty-printed XML
/// document on success.
pub fn run_pipeline(source: &str) -> SolResult<String> {
    tracing::debug!("pre-scan: checking for duplicate method headers");
    sol25_par::check_duplicate_headers(source)?;

    tracing::debug!("lexing {} bytes of source", source.len());
    let tokens = sol25_lex::Lexer::new(source).tokenize()?;

    tracing::debug!("parsing {} tokens", tokens.len());
    let (program, symtab) = sol25_par::parse(&tokens)?;

    tracing::debug!("analyzing {} classes", program.classes.len());
    sol25_sem::validate(&symtab)?;

    tracing::debug!("serializing to XML");
    let description = extract_description(source);
    let xml = sol25_xml::serialize_program(&program, description.as_deref()).to_pretty_xml();

    Ok(xml)
}
