//! sol25-sem - Post-parse semantic analysis for SOL25.
//!
//! Runs the checks that need the whole program in view, once `sol25-par`
//! has finished building the AST and symbol table: parent resolution,
//! inheritance acyclicity, per-method variable/selector analysis, and
//! entry-point presence (`spec.md` §4.3 Checks 1-4). The structurally local
//! checks (duplicate class/method, reserved method names, header arity) are
//! already enforced inline by `sol25-par` during parsing and are not
//! repeated here.

pub mod analysis;
pub mod catalog;
pub mod scope;

pub use analysis::validate;
