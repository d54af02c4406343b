//! Integration-style parser tests, lexing real SOL25 fragments end to end.

use sol25_lex::Lexer;
use sol25_util::SolError;

use crate::{parse, Expr, LiteralClass};

fn parse_src(src: &str) -> Result<(crate::Program, crate::SymbolTable), SolError> {
    let tokens = Lexer::new(src).tokenize().expect("fragment must lex cleanly");
    parse(&tokens)
}

#[test]
fn parses_a_minimal_class() {
    let (program, symtab) = parse_src(
        r#"
        class Main : Object {
            run [ | x := 1. ]
        }
        "#,
    )
    .unwrap();

    assert_eq!(program.classes.len(), 1);
    let class = &program.classes[0];
    assert_eq!(class.name.as_str(), "Main");
    assert_eq!(class.parent.as_str(), "Object");
    assert_eq!(class.methods.len(), 1);
    assert_eq!(class.methods[0].selector.as_str(), "run");
    assert_eq!(class.methods[0].arity, 0);

    let entry = symtab.get(&class.name).unwrap();
    assert!(entry.methods.contains_key(&sol25_util::Symbol::intern("run")));
}

#[test]
fn single_keyword_part_collects_receiver_and_one_argument() {
    let (program, _) = parse_src(
        r#"
        class Main : Object {
            run [ | x := 1 plus: 2. ]
        }
        "#,
    )
    .unwrap();

    let stmt = &program.classes[0].methods[0].block.statements[0];
    match &stmt.expr {
        Expr::Send { selector, arguments, .. } => {
            assert_eq!(selector.as_str(), "plus:");
            assert_eq!(arguments.len(), 1);
        }
        other => panic!("expected a keyword send, got {other:?}"),
    }
}

#[test]
fn a_run_of_keyword_parts_nests_instead_of_flattening() {
    // `a compute: b and: c` does not produce one two-keyword selector: the
    // argument of `compute:` is itself parsed as a full expression, so it
    // absorbs the trailing `and:` as its own tail.
    let (program, _) = parse_src(
        r#"
        class Main : Object {
            run [ | x := a compute: b and: c. ]
        }
        "#,
    )
    .unwrap();

    let stmt = &program.classes[0].methods[0].block.statements[0];
    match &stmt.expr {
        Expr::Send { selector, arguments, .. } => {
            assert_eq!(selector.as_str(), "compute:");
            assert_eq!(arguments.len(), 1);
            match &arguments[0] {
                Expr::Send { selector: inner_sel, arguments: inner_args, .. } => {
                    assert_eq!(inner_sel.as_str(), "and:");
                    assert_eq!(inner_args.len(), 1);
                }
                other => panic!("expected the argument to itself be a send, got {other:?}"),
            }
        }
        other => panic!("expected a keyword send, got {other:?}"),
    }
}

#[test]
fn block_parameters_and_class_literal_receiver() {
    let (program, _) = parse_src(
        r#"
        class Main : Object {
            run [ | b := [ :a :c | x := a. ]. y := Integer new. ]
        }
        "#,
    )
    .unwrap();

    let block_stmt = &program.classes[0].methods[0].block.statements[0];
    match &block_stmt.expr {
        Expr::Block(b) => {
            assert_eq!(b.arity, 2);
            assert_eq!(b.parameters[0].name.as_str(), "a");
            assert_eq!(b.parameters[1].name.as_str(), "c");
        }
        other => panic!("expected a block literal, got {other:?}"),
    }

    let new_stmt = &program.classes[0].methods[0].block.statements[1];
    match &new_stmt.expr {
        Expr::Send { receiver, selector, .. } => {
            assert_eq!(selector.as_str(), "new");
            assert!(matches!(
                receiver.as_ref(),
                Expr::Literal { class: LiteralClass::Class, .. }
            ));
        }
        other => panic!("expected a send to a class literal, got {other:?}"),
    }
}

#[test]
fn duplicate_class_name_is_rejected() {
    let err = parse_src(
        r#"
        class Main : Object { run [ | x := 1. ] }
        class Main : Object { run [ | x := 1. ] }
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, SolError::Other { .. }));
}

#[test]
fn duplicate_method_selector_is_rejected() {
    let err = parse_src(
        r#"
        class Main : Object {
            run [ | x := 1. ]
            run [ | x := 2. ]
        }
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, SolError::Other { .. }));
}

#[test]
fn reserved_word_method_name_is_rejected() {
    let err = parse_src(
        r#"
        class Main : Object {
            class: [ :x | y := x. ]
        }
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, SolError::Syntax { .. }));
}

#[test]
fn arity_mismatch_between_selector_and_block_is_rejected() {
    let err = parse_src(
        r#"
        class Main : Object {
            plus:minus: [ :a | x := a. ]
        }
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, SolError::Arity { .. }));
}

#[test]
fn chained_unary_sends_are_not_supported() {
    // `x foo bar` is rejected: a unary send does not itself take a tail.
    let err = parse_src(
        r#"
        class Main : Object {
            run [ | x := 1 foo bar. ]
        }
        "#,
    )
    .unwrap_err();
    assert!(matches!(err, SolError::Syntax { .. }));
}

#[test]
fn parenthesized_sub_expression_is_supported() {
    let (program, _) = parse_src(
        r#"
        class Main : Object {
            run [ | x := (1 plus: 2). ]
        }
        "#,
    )
    .unwrap();
    let stmt = &program.classes[0].methods[0].block.statements[0];
    assert!(matches!(stmt.expr, Expr::Send { .. }));
}
