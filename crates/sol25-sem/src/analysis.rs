//! The four ordered post-parse passes (`spec.md` §4.3 Checks 1-4).
//!
//! Run in the order `spec.md` specifies: parent resolution, then inheritance
//! acyclicity, then per-method analysis, then entry-point presence. The
//! order is load-bearing — `spec.md` §8 scenario 2 depends on `UNDEFINED`
//! (parent resolution) firing before `MISSING_MAIN` would otherwise fire on
//! the same input.

use indexmap::IndexSet;
use sol25_par::{is_builtin_class, SymbolTable};
use sol25_util::{SolError, SolResult, Symbol};

use crate::scope;

/// Runs Checks 1-4 against a fully-parsed symbol table.
pub fn validate(symtab: &SymbolTable) -> SolResult<()> {
    check_parent_resolution(symtab)?;
    check_inheritance_acyclic(symtab)?;
    check_methods(symtab)?;
    check_entry_point(symtab)?;
    Ok(())
}

/// Check 1: every class's `parent` must name either another declared class
/// or a built-in.
fn check_parent_resolution(symtab: &SymbolTable) -> SolResult<()> {
    for (name, entry) in symtab {
        let parent = entry.parent.as_str();
        if !symtab.contains_key(&entry.parent) && !is_builtin_class(parent) {
            return Err(SolError::undefined(
                Default::default(),
                format!("class '{name}' extends undefined class '{parent}'"),
            ));
        }
    }
    Ok(())
}

/// Check 2: the inheritance graph, with built-ins as roots, must be acyclic.
/// Walks from every class in turn; a class seen twice on the *current* walk
/// means a cycle, not merely shared ancestry (two sibling classes with the
/// same built-in root is fine).
fn check_inheritance_acyclic(symtab: &SymbolTable) -> SolResult<()> {
    for start in symtab.keys() {
        let mut path: IndexSet<Symbol> = IndexSet::new();
        let mut current = *start;
        loop {
            if !path.insert(current) {
                return Err(SolError::other(format!(
                    "inheritance cycle detected starting at class '{start}'"
                )));
            }
            match symtab.get(&current) {
                Some(entry) if !is_builtin_class(entry.parent.as_str()) => {
                    current = entry.parent;
                }
                _ => break,
            }
        }
    }
    Ok(())
}

/// Check 3: delegate to [`scope::check_method`] for every method of every
/// class, in declaration order.
fn check_methods(symtab: &SymbolTable) -> SolResult<()> {
    for entry in symtab.values() {
        for method in entry.methods.values() {
            scope::check_method(symtab, method)?;
        }
    }
    Ok(())
}

/// Check 4: a class named `Main` must exist and declare `run` with arity 0.
fn check_entry_point(symtab: &SymbolTable) -> SolResult<()> {
    let main = symtab
        .get(&Symbol::intern("Main"))
        .ok_or_else(|| SolError::missing_main("no class 'Main' is declared"))?;

    let run = main
        .methods
        .get(&Symbol::intern("run"))
        .ok_or_else(|| SolError::missing_main("class 'Main' has no method 'run'"))?;

    if run.arity != 0 {
        return Err(SolError::missing_main(format!(
            "'Main>>run' must have arity 0, found arity {}",
            run.arity
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use sol25_lex::Lexer;
    use sol25_par::parse;
    use sol25_util::SolError;

    use super::*;

    fn validate_src(src: &str) -> SolResult<()> {
        let tokens = Lexer::new(src).tokenize().expect("fragment must lex cleanly");
        let (_program, symtab) = parse(&tokens).expect("fragment must parse cleanly");
        validate(&symtab)
    }

    #[test]
    fn minimal_main_is_accepted() {
        validate_src("class Main : Object { run [ | ] }").unwrap();
    }

    #[test]
    fn missing_main_class_is_rejected() {
        let err = validate_src("class A : Object { run [ | ] }").unwrap_err();
        assert!(matches!(err, SolError::MissingMain { .. }));
    }

    #[test]
    fn main_without_run_is_rejected() {
        let err = validate_src("class Main : Object { foo [ | ] }").unwrap_err();
        assert!(matches!(err, SolError::MissingMain { .. }));
    }

    #[test]
    fn run_with_nonzero_arity_is_rejected() {
        let err =
            validate_src("class Main : Object { run: [ :x | ] }").unwrap_err();
        assert!(matches!(err, SolError::MissingMain { .. }));
    }

    #[test]
    fn undefined_parent_is_rejected_before_missing_main() {
        // `spec.md` §8 scenario 2: UNDEFINED must fire even though there is
        // also no `Main` class in this program.
        let err = validate_src("class A : B { foo [ | ] }").unwrap_err();
        assert!(matches!(err, SolError::Undefined { .. }));
    }

    #[test]
    fn builtin_parent_is_accepted() {
        validate_src("class Main : Object { run [ | ] }").unwrap();
        validate_src("class A : Integer { run [ | ] } class Main : Object { run [ | ] }").unwrap();
    }

    #[test]
    fn self_inheritance_cycle_is_rejected() {
        let err =
            validate_src("class A : A { foo [ | ] } class Main : Object { run [ | ] }")
                .unwrap_err();
        assert!(matches!(err, SolError::Other { .. }));
    }

    #[test]
    fn mutual_inheritance_cycle_is_rejected() {
        let err = validate_src(
            r#"
            class A : B { foo [ | ] }
            class B : A { bar [ | ] }
            class Main : Object { run [ | ] }
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, SolError::Other { .. }));
    }

    #[test]
    fn shared_builtin_ancestor_is_not_a_cycle() {
        validate_src(
            r#"
            class A : Integer { foo [ | ] }
            class B : Integer { bar [ | ] }
            class Main : Object { run [ | ] }
            "#,
        )
        .unwrap();
    }

    #[test]
    fn undefined_variable_propagates_from_per_method_check() {
        let err = validate_src("class Main : Object { run [ | x := y. ] }").unwrap_err();
        assert!(matches!(err, SolError::Undefined { .. }));
    }

    #[test]
    fn assignment_to_parameter_propagates_as_collision() {
        let err =
            validate_src("class Main : Object { foo: [ :x | x := 1. ] run [ | ] }").unwrap_err();
        assert!(matches!(err, SolError::Collision { .. }));
    }

    #[test]
    fn underscore_leading_variable_reference_skips_the_definedness_check() {
        // `spec.md` Check 3.3 only checks `Var`s whose name starts with a
        // lowercase *letter*; `_` is not lowercase, so a reference to a
        // never-assigned `_`-leading name is not flagged as undefined.
        validate_src("class Main : Object { run [ | x := _y. ] }").unwrap();
    }
}
