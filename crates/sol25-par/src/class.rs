//! `class.rs` — class and method headers (`spec.md` §4.2 "Class", "Method").

use indexmap::{IndexMap, IndexSet};
use sol25_util::{SolError, SolResult, Symbol};

use sol25_lex::TokenKind;

use crate::ast::{Class, Method};
use crate::parser::Parser;
use crate::symtab::{ClassEntry, MethodEntry};

/// Method names a program may never declare, regardless of arity
/// (`spec.md` §4.2 "Reserved method names").
const RESERVED_METHOD_NAMES: &[&str] = &["self", "super", "nil", "true", "false", "class"];

impl<'t> Parser<'t> {
    /// `Class := "class" ClassId ":" ClassId "{" Method* "}"`
    pub(crate) fn parse_class(&mut self) -> SolResult<Class> {
        self.expect(TokenKind::Class)?;
        let name_tok = self.expect(TokenKind::ClassId)?;
        self.expect(TokenKind::Colon)?;
        let parent_tok = self.expect(TokenKind::ClassId)?;
        self.expect(TokenKind::LBrace)?;

        let name: Symbol = name_tok.lexeme;
        let parent: Symbol = parent_tok.lexeme;

        let mut methods = Vec::new();
        let mut seen_selectors: IndexSet<Symbol> = IndexSet::new();
        let mut method_entries: IndexMap<Symbol, MethodEntry> = IndexMap::new();

        while self.peek().kind != TokenKind::RBrace {
            let method = self.parse_method()?;
            if !seen_selectors.insert(method.selector) {
                return Err(SolError::other(format!(
                    "duplicate method selector '{}' in class '{}'",
                    method.selector, name
                )));
            }
            method_entries.insert(method.name, MethodEntry::from(&method));
            methods.push(method);
        }
        self.expect(TokenKind::RBrace)?;

        if self.symtab.contains_key(&name) {
            return Err(SolError::other(format!("duplicate class '{name}'")));
        }
        self.defined_classes.insert(name);
        self.symtab.insert(name, ClassEntry { parent, methods: method_entries });

        Ok(Class { name, parent, methods })
    }

    /// `Method := Selector Block`, immediately adjacent (no other token
    /// between the selector and the block's opening `[`).
    fn parse_method(&mut self) -> SolResult<Method> {
        let info = self.parse_method_selector()?;

        if RESERVED_METHOD_NAMES.contains(&info.name.as_str()) {
            return Err(SolError::syntax(
                self.loc(),
                format!("'{}' is a reserved word and cannot name a method", info.name),
            ));
        }

        if self.peek().kind != TokenKind::LBracket {
            return Err(SolError::syntax(
                self.loc(),
                "expected a block to immediately follow the method selector",
            ));
        }

        let block = self.parse_block()?;
        if block.arity != info.arity {
            return Err(SolError::arity(
                self.loc(),
                format!(
                    "selector '{}' has arity {} but its block declares {} parameter(s)",
                    info.selector, info.arity, block.arity
                ),
            ));
        }

        Ok(Method { name: info.name, selector: info.selector, arity: info.arity, block })
    }
}
