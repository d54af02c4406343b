//! sol25-drv - The SOL25 front-end driver.
//!
//! Owns everything `spec.md` treats as an external collaborator (§1, §6):
//! the CLI surface, stdin/stdout plumbing, leading-doc-comment extraction,
//! and the exit-code mapping from [`SolError`] — plus the glue that wires
//! the pipeline stages together in order (lex → pre-scan duplicate check →
//! parse → analyze → serialize). Every library crate below this one
//! returns `Result`; this is the one place that calls
//! `std::process::exit`.

pub mod config;
pub mod doc_comment;
pub mod logging;
pub mod pipeline;

pub use config::{classify_args, CliAction};
pub use doc_comment::extract_description;
pub use logging::init_tracing;
pub use pipeline::run_pipeline;

pub const USAGE: &str = "\
sol25c - SOL25 front-end (lexer, parser, semantic analyzer, XML serializer)

USAGE:
    sol25c
        Reads SOL25 source from stdin, writes its XML representation to
        stdout.

    sol25c --help | -h
        Prints this message and exits.
";
