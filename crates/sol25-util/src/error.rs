//! Core error taxonomy shared by every pipeline stage.
//!
//! Every fallible operation in `sol25-lex`, `sol25-par`, `sol25-sem` and
//! `sol25-xml` returns `Result<_, SolError>`. Only the driver binary
//! (`sol25-drv`) ever calls `std::process::exit`; library code always
//! propagates with `?`, matching the teacher workspace's convention of
//! confining `process::exit` to its own driver crate.

use thiserror::Error;

/// A location in the source text, used only for diagnostic messages.
///
/// `spec.md` explicitly excludes source-location preservation from the
/// *output*, but a line/column is still useful in the process's stderr
/// message — the exit code carries the contract, the message does not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The full error taxonomy from `spec.md` §7, one variant per exit code
/// that the core (as opposed to the CLI collaborator) can raise.
#[derive(Debug, Error)]
pub enum SolError {
    #[error("lexical error at {loc}: {message}")]
    Lexical { loc: Location, message: String },

    #[error("syntax error at {loc}: {message}")]
    Syntax { loc: Location, message: String },

    #[error("missing entry point: {message}")]
    MissingMain { message: String },

    #[error("undefined reference at {loc}: {message}")]
    Undefined { loc: Location, message: String },

    #[error("arity mismatch at {loc}: {message}")]
    Arity { loc: Location, message: String },

    #[error("invalid assignment at {loc}: {message}")]
    Collision { loc: Location, message: String },

    #[error("{message}")]
    Other { message: String },
}

impl SolError {
    /// The process exit code mandated by `spec.md` §6 for this error class.
    pub const fn exit_code(&self) -> i32 {
        match self {
            SolError::Lexical { .. } => 21,
            SolError::Syntax { .. } => 22,
            SolError::MissingMain { .. } => 31,
            SolError::Undefined { .. } => 32,
            SolError::Arity { .. } => 33,
            SolError::Collision { .. } => 34,
            SolError::Other { .. } => 35,
        }
    }

    pub fn lexical(loc: Location, message: impl Into<String>) -> Self {
        SolError::Lexical { loc, message: message.into() }
    }

    pub fn syntax(loc: Location, message: impl Into<String>) -> Self {
        SolError::Syntax { loc, message: message.into() }
    }

    pub fn missing_main(message: impl Into<String>) -> Self {
        SolError::MissingMain { message: message.into() }
    }

    pub fn undefined(loc: Location, message: impl Into<String>) -> Self {
        SolError::Undefined { loc, message: message.into() }
    }

    pub fn arity(loc: Location, message: impl Into<String>) -> Self {
        SolError::Arity { loc, message: message.into() }
    }

    pub fn collision(loc: Location, message: impl Into<String>) -> Self {
        SolError::Collision { loc, message: message.into() }
    }

    pub fn other(message: impl Into<String>) -> Self {
        SolError::Other { message: message.into() }
    }
}

/// Invocation-level exit codes, raised only by the CLI collaborator
/// (`sol25-drv`), not by the core pipeline. Kept here so the full exit-code
/// table from `spec.md` §6 lives in one place.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const PARAM: i32 = 10;
    pub const INPUT_FILE: i32 = 11;
    pub const OUTPUT_FILE: i32 = 12;
}

pub type SolResult<T> = std::result::Result<T, SolError>;
