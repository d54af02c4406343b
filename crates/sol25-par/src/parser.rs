//! The `Parser` struct and its lowest-level token-stream plumbing.
//!
//! Grammar methods live in sibling modules (`class.rs`, `selector.rs`,
//! `block.rs`, `expr.rs`) as `impl<'t> Parser<'t>` blocks, mirroring the
//! teacher's own split of a single `Parser` type's methods across
//! `items.rs`/`stmt.rs`/`expr.rs`.

use indexmap::IndexSet;
use sol25_util::error::Location;
use sol25_util::{SolError, SolResult};

use sol25_lex::{Token, TokenKind};

use crate::ast::{Class, Program};
use crate::symtab::SymbolTable;

pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    pub(crate) symtab: SymbolTable,
    pub(crate) defined_classes: IndexSet<sol25_util::Symbol>,
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            pos: 0,
            symtab: SymbolTable::new(),
            defined_classes: IndexSet::new(),
        }
    }

    pub fn parse(mut self) -> SolResult<(Program, SymbolTable)> {
        let program = self.parse_program()?;
        Ok((program, self.symtab))
    }

    pub(crate) fn peek(&self) -> Token {
        self.tokens[self.pos]
    }

    pub(crate) fn peek_at(&self, offset: usize) -> Token {
        self.tokens[(self.pos + offset).min(self.tokens.len() - 1)]
    }

    pub(crate) fn advance(&mut self) -> Token {
        let t = self.tokens[self.pos];
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        t
    }

    pub(crate) fn loc(&self) -> Location {
        let t = self.peek();
        Location::new(t.line, t.column)
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> SolResult<Token> {
        let t = self.peek();
        if t.kind == kind {
            Ok(self.advance())
        } else {
            Err(SolError::syntax(
                self.loc(),
                format!("expected {kind:?}, found {:?} ({})", t.kind, t.lexeme),
            ))
        }
    }

    pub(crate) fn save(&self) -> usize {
        self.pos
    }

    pub(crate) fn restore(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// `Program := Class*`, terminated by `Eof`.
    fn parse_program(&mut self) -> SolResult<Program> {
        let mut classes = Vec::new();
        while self.peek().kind != TokenKind::Eof {
            if self.peek().kind != TokenKind::Class {
                return Err(SolError::syntax(
                    self.loc(),
                    "expected 'class' declaration or end of input",
                ));
            }
            classes.push(self.parse_class()?);
        }
        Ok(Program { classes })
    }
}
