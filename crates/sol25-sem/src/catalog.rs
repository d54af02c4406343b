//! Built-in method catalogs (`spec.md` §4.3 "Tables A/B/C") as compile-time
//! constant sets, checked independently of program control flow — these
//! never change based on what a given program declares.

/// Table A: class-level ("static") method resolution.
///
/// `new` and `from:` are valid class methods on *any* class, built-in or
/// user-defined — a quirk of the source this analyzer is faithful to.
/// `read` is additionally valid when the receiving class is `String` or one
/// of its (possibly transitive) subclasses.
pub fn is_valid_class_method(selector: &str) -> bool {
    matches!(selector, "new" | "from:")
}

/// Whether `selector` is a valid class method given that the receiving
/// class is (or descends from) `String`.
pub fn is_valid_string_class_method(selector: &str) -> bool {
    is_valid_class_method(selector) || selector == "read"
}

/// Table B: the narrow return-type inference used to check instance
/// methods sent to the *result* of a class-method send, e.g.
/// `(Integer from: x) plus: 1`. Only two built-in class methods have a
/// statically-known return type; every other chained send is left
/// unchecked.
pub fn infer_return_type(target_class: &str, selector: &str) -> Option<&'static str> {
    match (target_class, selector) {
        ("Integer", "from:") => Some("Integer"),
        ("String", "from:") | ("String", "read") => Some("String"),
        _ => None,
    }
}

/// Table C: instance-method resolution, common methods plus per-type
/// tables. `instance_type` is one of the built-in class names.
pub fn is_valid_instance_method(instance_type: &str, selector: &str) -> bool {
    if matches!(selector, "class" | "print" | "isNil" | "notNil") {
        return true;
    }

    match instance_type {
        "Integer" => matches!(
            selector,
            "plus:"
                | "minus:"
                | "times:"
                | "divide:"
                | "modulo:"
                | "equals:"
                | "lessThan:"
                | "greaterThan:"
                | "to:"
                | "do:"
                | "between:and:"
                | "asString"
                | "and:"
        ),
        "String" => matches!(selector, "at:" | "equals:" | "concat:" | "length" | "asInteger"),
        "Block" => matches!(selector, "value" | "value:" | "value:value:" | "value:value:value:"),
        "True" | "False" => {
            matches!(selector, "ifTrue:" | "ifFalse:" | "ifTrue:ifFalse:" | "ifFalse:ifTrue:")
        }
        "Nil" => matches!(selector, "isNil" | "notNil"),
        _ => false,
    }
}
