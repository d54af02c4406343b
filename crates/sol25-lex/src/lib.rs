//! sol25-lex - Lexical analysis for SOL25.
//!
//! Transforms raw UTF-8 source text into the closed token stream described
//! by `spec.md` §3/§4.1: a single pass, no lookahead beyond one character
//! (two when disambiguating `:=` from `:`), terminated by `Eof`.

pub mod cursor;
pub mod lexer;
pub mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};

#[cfg(test)]
mod edge_cases;
