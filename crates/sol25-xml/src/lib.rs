//! sol25-xml - AST serialization to the external SOL25 XML format.
//!
//! Consumes the AST `sol25-par` built and `sol25-sem` validated and emits a
//! pretty-printed XML document (`spec.md` §6 "Output"). Carries the two
//! structural rewrites `spec.md` §4.4 pins down (`flatten.rs`) and nothing
//! else — every other node is a direct one-to-one translation.

pub mod escape;
pub mod flatten;
pub mod serialize;
pub mod tree;

pub use serialize::serialize_program;
pub use tree::Element;
