//! Variable-definedness and selector-resolution walk over a single method
//! body (`spec.md` §4.3 Check 3).
//!
//! `defined_vars` grows statement by statement: a statement's right-hand
//! side is checked *before* its assigned variable is added, so
//! `x := x.` in a fresh method is `Undefined`, not a self-reference.

use std::collections::HashSet;

use indexmap::IndexSet;
use sol25_par::{is_builtin_class, Expr, LiteralClass, MethodEntry, SymbolTable};
use sol25_util::{SolError, SolResult, Symbol};

use crate::catalog;

/// Whether `class_name` is `potential_parent`, or descends from it through
/// zero or more user-defined classes (reflexive).
pub fn is_subclass_of(symtab: &SymbolTable, class_name: &str, potential_parent: &str) -> bool {
    if class_name == potential_parent {
        return true;
    }
    let mut current = class_name;
    while let Some(entry) = symtab.get(&Symbol::intern(current)) {
        let parent = entry.parent.as_str();
        if parent == potential_parent {
            return true;
        }
        current = parent;
    }
    false
}

/// Table A resolution for a class-method send, walking the inheritance
/// chain for the class-specific extensions (`String::read`, the redundant
/// but present `Integer::from:`).
fn is_valid_class_method(symtab: &SymbolTable, class_name: &str, selector: &str) -> bool {
    if catalog::is_valid_class_method(selector) {
        return true;
    }

    let mut current = class_name.to_string();
    while current != "Object" {
        if current == "String" || is_subclass_of(symtab, &current, "String") {
            if selector == "read" {
                return true;
            }
        }
        if current == "Integer" || is_subclass_of(symtab, &current, "Integer") {
            if selector == "from:" {
                return true;
            }
        }

        match symtab.get(&Symbol::intern(&current)) {
            Some(entry) => current = entry.parent.as_str().to_string(),
            None => break,
        }
    }
    false
}

/// Checks every statement of one method body, in order, for undefined
/// variables, undefined classes, and unresolvable selectors
/// (`spec.md` §4.3 Check 3).
pub fn check_method(symtab: &SymbolTable, method: &MethodEntry) -> SolResult<()> {
    let mut defined_vars: HashSet<&'static str> =
        ["self", "super", "true", "false", "nil"].into_iter().collect();
    let mut params: IndexSet<&'static str> = IndexSet::new();

    for param in &method.parameters {
        let name = param.name.as_str();
        if !params.insert(name) {
            return Err(SolError::other(format!("duplicate parameter '{name}'")));
        }
        defined_vars.insert(name);
    }

    for stmt in &method.statements {
        let var_name = stmt.var.as_str();
        if params.contains(var_name) {
            return Err(SolError::collision(
                Default::default(),
                format!("cannot assign to parameter '{var_name}'"),
            ));
        }

        check_expr(symtab, &stmt.expr, &defined_vars)?;
        defined_vars.insert(var_name);
    }

    Ok(())
}

fn check_expr(symtab: &SymbolTable, expr: &Expr, defined_vars: &HashSet<&'static str>) -> SolResult<()> {
    match expr {
        Expr::Var { name } => {
            let s = name.as_str();
            let starts_lowercase = s.chars().next().is_some_and(|c| c.is_ascii_lowercase());
            if starts_lowercase && !defined_vars.contains(s) {
                return Err(SolError::undefined(Default::default(), format!("undefined variable '{s}'")));
            }
            Ok(())
        }

        Expr::Literal { class: LiteralClass::Class, value } => {
            let name = value.as_str();
            if !symtab.contains_key(&Symbol::intern(name)) && !is_builtin_class(name) {
                return Err(SolError::undefined(Default::default(), format!("undefined class '{name}'")));
            }
            Ok(())
        }

        Expr::Literal { .. } | Expr::Block(_) => Ok(()),

        Expr::Send { receiver, selector, arguments } => {
            check_expr(symtab, receiver, defined_vars)?;

            match receiver.as_ref() {
                Expr::Literal { class: LiteralClass::Class, value } => {
                    let target = value.as_str();
                    let ok = if target == "String" || is_subclass_of(symtab, target, "String") {
                        catalog::is_valid_string_class_method(selector.as_str())
                    } else {
                        is_valid_class_method(symtab, target, selector.as_str())
                    };
                    if !ok {
                        return Err(SolError::undefined(
                            Default::default(),
                            format!("'{target}' has no class method '{selector}'"),
                        ));
                    }
                }
                Expr::Send { receiver: inner_receiver, selector: inner_selector, .. } => {
                    if let Expr::Literal { class: LiteralClass::Class, value } = inner_receiver.as_ref() {
                        if let Some(result_type) =
                            catalog::infer_return_type(value.as_str(), inner_selector.as_str())
                        {
                            if !catalog::is_valid_instance_method(result_type, selector.as_str()) {
                                return Err(SolError::undefined(
                                    Default::default(),
                                    format!("'{result_type}' has no method '{selector}'"),
                                ));
                            }
                        }
                    }
                }
                Expr::Literal { class, .. } => {
                    let instance_type = literal_class_name(*class);
                    if !catalog::is_valid_instance_method(instance_type, selector.as_str()) {
                        return Err(SolError::undefined(
                            Default::default(),
                            format!("'{instance_type}' has no method '{selector}'"),
                        ));
                    }
                }
                Expr::Var { .. } => {
                    // A plain variable's runtime class is unknown statically;
                    // nothing further to check (also covers `self`/`super`).
                }
            }

            for arg in arguments {
                check_expr(symtab, arg, defined_vars)?;
            }
            Ok(())
        }
    }
}

fn literal_class_name(class: LiteralClass) -> &'static str {
    match class {
        LiteralClass::Integer => "Integer",
        LiteralClass::String => "String",
        LiteralClass::Nil => "Nil",
        LiteralClass::True => "True",
        LiteralClass::False => "False",
        LiteralClass::Class => "class",
    }
}
