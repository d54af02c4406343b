//! The two structural rewrites from `spec.md` §4.4: flattening a chain of
//! nested single-argument keyword sends into one compound-selector `Send`,
//! for exactly two selector shapes.
//!
//! These are matched by literal selector text, not by a general "any
//! keyword chain flattens" rule — this mirrors the original implementation,
//! which hard-codes the same two shapes rather than generalizing. A `Send`
//! with receiver `a`, selector `"compute:"`, whose sole argument is itself
//! `Send{selector: "and:", args: [Send{selector: "and:", args: [x]}]}`
//! collapses to one `Send` with selector `"compute:and:and:"` and three
//! arguments: the two inner receivers (in source order) and `x`. A `Send`
//! with selector `"ifTrue:"` whose sole argument is `Send{selector:
//! "ifFalse:", args: [y]}` collapses to selector `"ifTrue:ifFalse:"` with
//! two arguments: the `ifFalse:` receiver and `y`. Every other `Send` is
//! serialized exactly as parsed.

use sol25_par::Expr;

/// A flattened send, ready for direct serialization.
pub struct FlatSend<'a> {
    pub receiver: &'a Expr,
    pub selector: String,
    pub arguments: Vec<&'a Expr>,
}

/// Detects and flattens `compute:and:and:` and `ifTrue:ifFalse:` shapes;
/// for any other `Send`, returns the node unchanged (selector/arguments
/// borrowed as-is).
pub fn flatten<'a>(receiver: &'a Expr, selector: &str, arguments: &'a [Expr]) -> FlatSend<'a> {
    if selector == "compute:" {
        if let Some(flat) = try_flatten_compute_and_and(receiver, arguments) {
            return flat;
        }
    }
    if selector == "ifTrue:" {
        if let Some(flat) = try_flatten_if_true_if_false(receiver, arguments) {
            return flat;
        }
    }
    FlatSend { receiver, selector: selector.to_string(), arguments: arguments.iter().collect() }
}

fn try_flatten_compute_and_and<'a>(receiver: &'a Expr, arguments: &'a [Expr]) -> Option<FlatSend<'a>> {
    let [arg0] = arguments else { return None };
    let Expr::Send { receiver: r1, selector: sel1, arguments: args1 } = arg0 else { return None };
    if sel1.as_str() != "and:" {
        return None;
    }
    let [arg1] = args1.as_slice() else { return None };
    let Expr::Send { receiver: r2, selector: sel2, arguments: args2 } = arg1 else { return None };
    if sel2.as_str() != "and:" {
        return None;
    }
    let [x] = args2.as_slice() else { return None };

    Some(FlatSend {
        receiver,
        selector: "compute:and:and:".to_string(),
        arguments: vec![r1.as_ref(), r2.as_ref(), x],
    })
}

fn try_flatten_if_true_if_false<'a>(receiver: &'a Expr, arguments: &'a [Expr]) -> Option<FlatSend<'a>> {
    let [arg0] = arguments else { return None };
    let Expr::Send { receiver: r1, selector: sel1, arguments: args1 } = arg0 else { return None };
    if sel1.as_str() != "ifFalse:" {
        return None;
    }
    let [y] = args1.as_slice() else { return None };

    Some(FlatSend { receiver, selector: "ifTrue:ifFalse:".to_string(), arguments: vec![r1.as_ref(), y] })
}

#[cfg(test)]
mod tests {
    use sol25_lex::Lexer;
    use sol25_par::{parse, Statement};

    use super::*;

    fn parse_run_stmt(src_expr: &str) -> Statement {
        let src = format!("class Main : Object {{ run [ | x := {src_expr}. ] }}");
        let tokens = Lexer::new(&src).tokenize().expect("fragment must lex cleanly");
        let (program, _) = parse(&tokens).expect("fragment must parse cleanly");
        program.classes[0].methods[0].block.statements[0].clone()
    }

    #[test]
    fn flattens_compute_and_and_chain() {
        let stmt = parse_run_stmt("a compute: b and: c and: x");
        let Expr::Send { receiver, selector, arguments } = &stmt.expr else { panic!() };
        let flat = flatten(receiver, selector.as_str(), arguments);
        assert_eq!(flat.selector, "compute:and:and:");
        assert_eq!(flat.arguments.len(), 3);
    }

    #[test]
    fn flattens_if_true_if_false_chain() {
        let stmt = parse_run_stmt("cond ifTrue: a ifFalse: b");
        let Expr::Send { receiver, selector, arguments } = &stmt.expr else { panic!() };
        let flat = flatten(receiver, selector.as_str(), arguments);
        assert_eq!(flat.selector, "ifTrue:ifFalse:");
        assert_eq!(flat.arguments.len(), 2);
    }

    #[test]
    fn leaves_unrelated_keyword_chains_nested() {
        let stmt = parse_run_stmt("a foo: b bar: c");
        let Expr::Send { receiver, selector, arguments } = &stmt.expr else { panic!() };
        let flat = flatten(receiver, selector.as_str(), arguments);
        assert_eq!(flat.selector, "foo:");
        assert_eq!(flat.arguments.len(), 1);
    }

    #[test]
    fn a_lone_if_true_without_if_false_is_not_flattened() {
        let stmt = parse_run_stmt("cond ifTrue: a");
        let Expr::Send { receiver, selector, arguments } = &stmt.expr else { panic!() };
        let flat = flatten(receiver, selector.as_str(), arguments);
        assert_eq!(flat.selector, "ifTrue:");
        assert_eq!(flat.arguments.len(), 1);
    }
}
