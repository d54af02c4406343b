//! Method-header selector assembly (`spec.md` §4.2 "Selector").
//!
//! A method header's selector is either a single identifier-like token with
//! arity 0, or one-or-more directly-adjacent `SelectorPart` tokens with
//! arity equal to their count. This is distinct from a keyword message
//! *send* inside an expression (`expr.rs`'s `KeywordTail`), which interleaves
//! `SelectorPart` tokens with argument expressions.

use sol25_util::error::Location;
use sol25_util::{SolError, SolResult, Symbol};

use sol25_lex::TokenKind;

use crate::parser::Parser;

pub struct SelectorInfo {
    pub name: Symbol,
    pub selector: Symbol,
    pub arity: usize,
}

const UNARY_LEAD_KINDS: &[TokenKind] = &[
    TokenKind::Identifier,
    TokenKind::SelfKw,
    TokenKind::Super,
    TokenKind::Nil,
    TokenKind::True,
    TokenKind::False,
];

impl<'t> Parser<'t> {
    pub(crate) fn parse_method_selector(&mut self) -> SolResult<SelectorInfo> {
        let lead = self.peek();

        if UNARY_LEAD_KINDS.contains(&lead.kind) {
            self.advance();
            if self.peek().kind != TokenKind::Colon {
                let text = lead.lexeme.as_str().to_string();
                return Ok(SelectorInfo {
                    name: Symbol::intern(&text),
                    selector: Symbol::intern(&text),
                    arity: 0,
                });
            }

            let colon = self.peek();
            let lead_start_col = lead.column - lead.lexeme.as_str().len() as u32;
            if lead.line != colon.line || lead_start_col != colon.column - 1 {
                return Err(SolError::syntax(
                    Location::new(colon.line, colon.column),
                    "unexpected whitespace between identifier and ':' in method selector",
                ));
            }
            self.advance(); // consume the colon

            let mut parts = vec![format!("{}:", lead.lexeme.as_str())];
            self.collect_selector_continuation(&mut parts)?;
            let selector = parts.concat();
            let name = selector.replace(':', "");
            return Ok(SelectorInfo {
                name: Symbol::intern(&name),
                selector: Symbol::intern(&selector),
                arity: parts.len(),
            });
        }

        if lead.kind == TokenKind::SelectorPart {
            self.advance();
            let mut parts = vec![lead.lexeme.as_str().to_string()];
            self.collect_selector_continuation(&mut parts)?;
            let selector = parts.concat();
            let name = selector.replace(':', "");
            return Ok(SelectorInfo {
                name: Symbol::intern(&name),
                selector: Symbol::intern(&selector),
                arity: parts.len(),
            });
        }

        Err(SolError::syntax(self.loc(), "expected a method selector"))
    }

    /// Chains further `SelectorPart` tokens onto an already-started keyword
    /// selector. A bare `Identifier` immediately followed by `Colon` here
    /// means whitespace crept in between a would-be selector part's name and
    /// its colon (`spec.md`'s explicit "outside tokenization" rejection) —
    /// adjacent without whitespace, the lexer would already have fused the
    /// two into one `SelectorPart` token.
    fn collect_selector_continuation(&mut self, parts: &mut Vec<String>) -> SolResult<()> {
        loop {
            match self.peek().kind {
                TokenKind::LBracket => return Ok(()),
                TokenKind::SelectorPart => {
                    let t = self.advance();
                    parts.push(t.lexeme.as_str().to_string());
                }
                TokenKind::Identifier if self.peek_at(1).kind == TokenKind::Colon => {
                    return Err(SolError::syntax(
                        self.loc(),
                        "unexpected whitespace inside a chained method selector",
                    ));
                }
                _ => return Ok(()),
            }
        }
    }
}
