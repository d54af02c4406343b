//! The SOL25 lexer: source text in, a finished token stream out.
//!
//! Follows the teacher's direct-coded dispatch shape (one `match` on the
//! current character, delegating to small per-category functions) rather
//! than a table-driven or regex-based lexer, matching `faxc-lex`'s own
//! stated preference for hand-written dispatch.

use sol25_util::error::Location;
use sol25_util::{SolError, SolResult};

use crate::cursor::Cursor;
use crate::token::{keyword_kind, Token, TokenKind};

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source) }
    }

    /// Tokenize the entire input, returning the full stream terminated by
    /// a trailing `Eof` token (`spec.md` §4.1).
    pub fn tokenize(mut self) -> SolResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                return Ok(tokens);
            }
        }
    }

    fn loc(&self) -> Location {
        Location::new(self.cursor.line(), self.cursor.column())
    }

    fn next_token(&mut self) -> SolResult<Token> {
        self.skip_whitespace_and_comments()?;

        if self.cursor.is_at_end() {
            return Ok(Token::new(TokenKind::Eof, "", self.cursor.line(), self.cursor.column()));
        }

        match self.cursor.current_char() {
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '|' => self.single(TokenKind::Pipe),
            '.' => self.single(TokenKind::Dot),
            ':' => self.lex_colon_or_assign(),
            '\'' => self.lex_string(),
            c if c == '+' || c == '-' => self.lex_signed_integer_or_error(),
            c if c.is_ascii_digit() => self.lex_integer(),
            c if c.is_ascii_uppercase() => self.lex_class_id(),
            c if c.is_ascii_lowercase() || c == '_' => self.lex_lower_identifier_like(),
            c => Err(SolError::lexical(self.loc(), format!("unexpected character '{c}'"))),
        }
    }

    fn single(&mut self, kind: TokenKind) -> SolResult<Token> {
        let c = self.cursor.current_char();
        self.cursor.advance();
        Ok(Token::new(kind, c.to_string(), self.cursor.line(), self.cursor.column()))
    }

    fn lex_colon_or_assign(&mut self) -> SolResult<Token> {
        if self.cursor.peek_char(1) == '=' {
            self.cursor.advance_n(2);
            Ok(Token::new(TokenKind::Assign, ":=", self.cursor.line(), self.cursor.column()))
        } else {
            self.cursor.advance();
            Ok(Token::new(TokenKind::Colon, ":", self.cursor.line(), self.cursor.column()))
        }
    }

    /// A class reference: uppercase start, alphanumeric continuation only
    /// (no underscore — `spec.md` §4.1).
    fn lex_class_id(&mut self) -> SolResult<Token> {
        let start = self.cursor.position();
        self.cursor.advance();
        while self.cursor.current_char().is_ascii_alphanumeric() {
            self.cursor.advance();
        }
        let text = self.slice_from(start);
        Ok(Token::new(TokenKind::ClassId, text, self.cursor.line(), self.cursor.column()))
    }

    /// Identifiers, keywords, and selector parts all begin the same way
    /// (lowercase letter or `_`); which token falls out depends on what
    /// follows the maximal identifier run.
    fn lex_lower_identifier_like(&mut self) -> SolResult<Token> {
        let start = self.cursor.position();
        self.cursor.advance();
        while {
            let c = self.cursor.current_char();
            c.is_ascii_alphanumeric() || c == '_'
        } {
            self.cursor.advance();
        }
        let text = self.slice_from(start).to_string();

        if self.cursor.current_char() == ':' {
            self.cursor.advance();
            let lexeme = format!("{text}:");
            return Ok(Token::new(TokenKind::SelectorPart, lexeme, self.cursor.line(), self.cursor.column()));
        }

        let kind = keyword_kind(&text).unwrap_or(TokenKind::Identifier);
        Ok(Token::new(kind, text, self.cursor.line(), self.cursor.column()))
    }

    /// `+`/`-` start an integer literal only when immediately followed by a
    /// digit; otherwise they are not a recognized character at all
    /// (`spec.md` §4.1 "Numeric literals").
    fn lex_signed_integer_or_error(&mut self) -> SolResult<Token> {
        if self.cursor.peek_char(1).is_ascii_digit() {
            self.lex_integer()
        } else {
            let c = self.cursor.current_char();
            Err(SolError::lexical(self.loc(), format!("unexpected character '{c}'")))
        }
    }

    fn lex_integer(&mut self) -> SolResult<Token> {
        let start = self.cursor.position();
        if self.cursor.current_char() == '+' || self.cursor.current_char() == '-' {
            self.cursor.advance();
        }
        while self.cursor.current_char().is_ascii_digit() {
            self.cursor.advance();
        }
        let text = self.slice_from(start);
        Ok(Token::new(TokenKind::Int, text, self.cursor.line(), self.cursor.column()))
    }

    /// String literals: single-quoted, with only `\'`, `\n`, `\\` as valid
    /// escapes. The stored lexeme keeps escapes in their two-character
    /// source form (backslash preserved) so the serializer can re-escape
    /// for XML without first having to re-escape a decoded value.
    fn lex_string(&mut self) -> SolResult<Token> {
        let open_loc = self.loc();
        self.cursor.advance(); // opening quote
        let mut content = String::new();

        loop {
            if self.cursor.is_at_end() {
                return Err(SolError::lexical(open_loc, "unterminated string literal"));
            }
            match self.cursor.current_char() {
                '\\' => {
                    self.cursor.advance();
                    match self.cursor.current_char() {
                        '\'' => content.push_str("\\'"),
                        'n' => content.push_str("\\n"),
                        '\\' => content.push_str("\\\\"),
                        _ if self.cursor.is_at_end() => {
                            return Err(SolError::lexical(open_loc, "unterminated string literal"))
                        }
                        other => {
                            return Err(SolError::lexical(
                                self.loc(),
                                format!("invalid escape sequence '\\{other}'"),
                            ))
                        }
                    }
                    self.cursor.advance();
                }
                '\'' => {
                    self.cursor.advance();
                    return Ok(Token::new(TokenKind::Str, content, self.cursor.line(), self.cursor.column()));
                }
                '\n' => return Err(SolError::lexical(self.loc(), "newline in string literal")),
                c => {
                    content.push(c);
                    self.cursor.advance();
                }
            }
        }
    }

    fn slice_from(&self, start: usize) -> &'a str {
        self.cursor.source_slice(start, self.cursor.position())
    }

    fn skip_whitespace_and_comments(&mut self) -> SolResult<()> {
        loop {
            if self.cursor.current_char().is_whitespace() {
                self.cursor.advance();
                continue;
            }
            if self.cursor.current_char() == '"' {
                let open_loc = self.loc();
                self.cursor.advance();
                loop {
                    if self.cursor.is_at_end() {
                        return Err(SolError::lexical(open_loc, "unterminated comment"));
                    }
                    if self.cursor.current_char() == '"' {
                        self.cursor.advance();
                        break;
                    }
                    self.cursor.advance();
                }
                continue;
            }
            break;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        Lexer::new(src).tokenize().unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn keywords_require_a_non_ident_boundary() {
        assert_eq!(kinds("self"), vec![TokenKind::SelfKw, TokenKind::Eof]);
        assert_eq!(kinds("selfish"), vec![TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(kinds("self:"), vec![TokenKind::SelectorPart, TokenKind::Eof]);
    }

    #[test]
    fn assign_takes_priority_over_colon_then_equals() {
        assert_eq!(kinds(":="), vec![TokenKind::Assign, TokenKind::Eof]);
        assert_eq!(kinds(":"), vec![TokenKind::Colon, TokenKind::Eof]);
    }

    #[test]
    fn class_id_has_no_underscore_continuation() {
        let tokens = Lexer::new("Foo_Bar").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::ClassId);
        assert_eq!(tokens[0].lexeme.as_str(), "Foo");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn sign_without_digit_is_lexical_error() {
        assert!(Lexer::new("+x").tokenize().is_err());
        assert!(Lexer::new("-").tokenize().is_err());
    }

    #[test]
    fn string_escapes_keep_backslash_form() {
        let tokens = Lexer::new(r"'a\nb\'c\\d'").tokenize().unwrap();
        assert_eq!(tokens[0].lexeme.as_str(), r"a\nb\'c\\d");
    }

    #[test]
    fn newline_in_string_is_lexical_error() {
        assert!(Lexer::new("'a\nb'").tokenize().is_err());
    }

    #[test]
    fn unterminated_comment_is_lexical_error() {
        assert!(Lexer::new("\"never closes").tokenize().is_err());
    }

    #[test]
    fn comment_spans_newlines_and_is_dropped() {
        let tokens = Lexer::new("\"line one\nline two\" self").tokenize().unwrap();
        assert_eq!(tokens[0].kind, TokenKind::SelfKw);
    }

    #[test]
    fn column_is_recorded_after_the_token() {
        let tokens = Lexer::new("ab").tokenize().unwrap();
        assert_eq!(tokens[0].column, 3);
    }
}
