//! AST → XML element tree (`spec.md` §4.4, §6 "Output").
//!
//! One element per AST node, save for the two flattening rewrites
//! (`flatten.rs`). Blocks number their `<parameter>`/`<assign>` children
//! `order` starting at 1 in declaration order; sends number their `<arg>`
//! children the same way.

use sol25_par::{Block, Class, Expr, LiteralClass, Method, Program, Statement};

use crate::flatten::flatten;
use crate::tree::Element;

/// Serializes a validated [`Program`] to the root `<program>` element,
/// attaching `description` when a leading doc-comment was captured.
pub fn serialize_program(program: &Program, description: Option<&str>) -> Element {
    let mut root = Element::new("program").attr("language", "SOL25");
    if let Some(desc) = description {
        root = root.attr("description", desc);
    }
    root.children(program.classes.iter().map(serialize_class))
}

fn serialize_class(class: &Class) -> Element {
    Element::new("class")
        .attr("name", class.name.as_str())
        .attr("parent", class.parent.as_str())
        .children(class.methods.iter().map(serialize_method))
}

fn serialize_method(method: &Method) -> Element {
    Element::new("method")
        .attr("selector", method.selector.as_str())
        .child(serialize_block(&method.block))
}

fn serialize_block(block: &Block) -> Element {
    let params = block.parameters.iter().enumerate().map(|(i, p)| {
        Element::new("parameter").attr("name", p.name.as_str()).attr("order", (i + 1).to_string())
    });
    let assigns = block.statements.iter().enumerate().map(|(i, s)| serialize_assign(s, i + 1));

    Element::new("block")
        .attr("arity", block.arity.to_string())
        .children(params)
        .children(assigns)
}

fn serialize_assign(stmt: &Statement, order: usize) -> Element {
    Element::new("assign")
        .attr("order", order.to_string())
        .child(Element::new("var").attr("name", stmt.var.as_str()))
        .child(serialize_expr_wrapper(&stmt.expr))
}

/// Every expression position is wrapped in exactly one `<expr>` with exactly
/// one child (`spec.md` §6 "Per expression, exactly one child of
/// `<expr>`").
fn serialize_expr_wrapper(expr: &Expr) -> Element {
    Element::new("expr").child(serialize_expr(expr))
}

fn serialize_expr(expr: &Expr) -> Element {
    match expr {
        Expr::Literal { class, value } => Element::new("literal")
            .attr("class", literal_class_name(*class))
            .attr("value", value.as_str()),

        Expr::Var { name } => Element::new("var").attr("name", name.as_str()),

        Expr::Block(block) => serialize_block(block),

        Expr::Send { receiver, selector, arguments } => {
            let flat = flatten(receiver, selector.as_str(), arguments);
            let args = flat.arguments.iter().enumerate().map(|(i, arg)| {
                Element::new("arg").attr("order", (i + 1).to_string()).child(serialize_expr_wrapper(arg))
            });
            Element::new("send")
                .attr("selector", flat.selector)
                .child(serialize_expr_wrapper(flat.receiver))
                .children(args)
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
