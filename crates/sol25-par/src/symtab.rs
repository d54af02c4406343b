//! The symbol table built alongside the AST during parsing.
//!
//! Kept as a parallel, lookup-oriented view of the same information the AST
//! already carries (`spec.md` §3 "Symbol table"): one entry per class,
//! methods keyed by colon-stripped name for O(1) lookup by the semantic
//! analyzer, while still preserving declaration order (`IndexMap`) the way
//! the teacher's own symbol tables do for deterministic iteration.

use indexmap::IndexMap;
use sol25_util::Symbol;

use crate::ast::{Method, Parameter, Statement};

/// Built-in classes every program may reference as a parent or as the
/// receiver of a class method, without a corresponding `Class` node.
pub const BUILTIN_CLASSES: &[&str] =
    &["Object", "Nil", "True", "False", "Integer", "String", "Block"];

pub fn is_builtin_class(name: &str) -> bool {
    BUILTIN_CLASSES.contains(&name)
}

#[derive(Debug, Clone)]
pub struct MethodEntry {
    pub selector: Symbol,
    pub parameters: Vec<Parameter>,
    pub statements: Vec<Statement>,
    pub arity: usize,
}

impl From<&Method> for MethodEntry {
    fn from(m: &Method) -> Self {
        MethodEntry {
            selector: m.selector,
            parameters: m.block.parameters.clone(),
            statements: m.block.statements.clone(),
            arity: m.arity,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassEntry {
    pub parent: Symbol,
    pub methods: IndexMap<Symbol, MethodEntry>,
}

pub type SymbolTable = IndexMap<Symbol, ClassEntry>;
