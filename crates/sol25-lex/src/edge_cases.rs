//! Boundary-condition tests for the lexer, kept separate from the main
//! unit tests the way the teacher workspace separates `edge_cases.rs` from
//! in-module `#[cfg(test)]` blocks.

use crate::{Lexer, TokenKind};

fn kinds(src: &str) -> Vec<TokenKind> {
    Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.kind).collect()
}

#[test]
fn empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
}

#[test]
fn whitespace_only_source_is_just_eof() {
    assert_eq!(kinds("   \n\t  \n"), vec![TokenKind::Eof]);
}

#[test]
fn selector_part_adjacency_requires_no_gap() {
    // "foo :" (space before colon) is *not* a single SELECTOR_PART at the
    // lexer level — the lexer only fuses `name:` with zero characters
    // between them. A space means IDENTIFIER then COLON, and it is the
    // parser's job (not the lexer's) to reject that as a syntax error.
    assert_eq!(kinds("foo :"), vec![TokenKind::Identifier, TokenKind::Colon, TokenKind::Eof]);
    assert_eq!(kinds("foo:"), vec![TokenKind::SelectorPart, TokenKind::Eof]);
}

#[test]
fn chained_selector_parts_lex_independently() {
    assert_eq!(
        kinds("between:and:"),
        vec![TokenKind::SelectorPart, TokenKind::SelectorPart, TokenKind::Eof]
    );
}

#[test]
fn reserved_words_as_selector_parts_are_not_keywords() {
    assert_eq!(kinds("class:"), vec![TokenKind::SelectorPart, TokenKind::Eof]);
}

#[test]
fn negative_integer_literal() {
    let tokens = Lexer::new("-42").tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Int);
    assert_eq!(tokens[0].lexeme.as_str(), "-42");
}

#[test]
fn plus_prefixed_integer_literal() {
    let tokens = Lexer::new("+7").tokenize().unwrap();
    assert_eq!(tokens[0].lexeme.as_str(), "+7");
}

#[test]
fn empty_string_literal() {
    let tokens = Lexer::new("''").tokenize().unwrap();
    assert_eq!(tokens[0].kind, TokenKind::Str);
    assert_eq!(tokens[0].lexeme.as_str(), "");
}

#[test]
fn invalid_escape_is_lexical_error() {
    assert!(Lexer::new(r"'\t'").tokenize().is_err());
}

#[test]
fn unterminated_string_at_eof_is_lexical_error() {
    assert!(Lexer::new("'abc").tokenize().is_err());
}

#[test]
fn adjacent_comments_are_both_dropped() {
    assert_eq!(kinds(r#""a""b" self"#), vec![TokenKind::SelfKw, TokenKind::Eof]);
}
