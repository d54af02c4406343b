//! `expr.rs` — expressions and message sends
//! (`spec.md` §4.2 "Expr", "ExprTail").
//!
//! A send has at most one tail appended to its base: either a single unary
//! message (a bare `Identifier`) or exactly one keyword part with a single
//! recursively-parsed argument. Because the argument is parsed with a full
//! recursive `parse_expr`, a run of keyword parts like `a compute: b and: c
//! and: d` does *not* collapse into one three-argument send — it nests,
//! with each further keyword part captured inside the previous one's
//! argument: `a compute: (b and: (c and: d))`. `sol25-xml` is what
//! recognizes the `compute:and:and:`/`ifTrue:ifFalse:` shapes of this
//! nesting and re-flattens them for output; the AST here stays as literally
//! produced by one keyword part per `Send` node. Unary sends do not
//! themselves chain — `x foo bar` is not valid SOL25.

use sol25_util::{SolError, SolResult, Symbol};

use sol25_lex::TokenKind;

use crate::ast::{Expr, LiteralClass};
use crate::parser::Parser;

impl<'t> Parser<'t> {
    pub(crate) fn parse_expr(&mut self) -> SolResult<Expr> {
        let base = self.parse_expr_base()?;
        match self.peek().kind {
            TokenKind::Identifier | TokenKind::SelectorPart => self.parse_expr_tail(base),
            _ => Ok(base),
        }
    }

    fn parse_expr_base(&mut self) -> SolResult<Expr> {
        let t = self.peek();
        match t.kind {
            TokenKind::Int => {
                self.advance();
                Ok(Expr::Literal { class: LiteralClass::Integer, value: t.lexeme })
            }
            TokenKind::Str => {
                self.advance();
                Ok(Expr::Literal { class: LiteralClass::String, value: t.lexeme })
            }
            TokenKind::Nil => {
                self.advance();
                Ok(Expr::Literal { class: LiteralClass::Nil, value: Symbol::intern("nil") })
            }
            TokenKind::True => {
                self.advance();
                Ok(Expr::Literal { class: LiteralClass::True, value: Symbol::intern("true") })
            }
            TokenKind::False => {
                self.advance();
                Ok(Expr::Literal { class: LiteralClass::False, value: Symbol::intern("false") })
            }
            TokenKind::SelfKw | TokenKind::Super | TokenKind::Identifier => {
                self.advance();
                Ok(Expr::Var { name: t.lexeme })
            }
            TokenKind::ClassId => {
                self.advance();
                Ok(Expr::Literal { class: LiteralClass::Class, value: t.lexeme })
            }
            TokenKind::LBracket => Ok(Expr::Block(self.parse_block()?)),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_expr()?;
                self.expect(TokenKind::RParen)?;
                Ok(inner)
            }
            _ => Err(SolError::syntax(self.loc(), "expected an expression")),
        }
    }

    fn parse_expr_tail(&mut self, receiver: Expr) -> SolResult<Expr> {
        match self.peek().kind {
            TokenKind::Identifier => {
                let t = self.advance();
                Ok(Expr::Send { receiver: Box::new(receiver), selector: t.lexeme, arguments: Vec::new() })
            }
            TokenKind::SelectorPart => {
                let t = self.advance();
                // The argument is parsed with a full `parse_expr`, so any
                // further keyword part is absorbed into *its* tail rather
                // than this one's — this loop body runs exactly once.
                let argument = self.parse_expr()?;
                Ok(Expr::Send {
                    receiver: Box::new(receiver),
                    selector: t.lexeme,
                    arguments: vec![argument],
                })
            }
            _ => Err(SolError::syntax(self.loc(), "expected a message selector")),
        }
    }
}
