//! A small internal element tree, built once and pretty-printed once.
//!
//! No general-purpose XML-writer crate is pulled in: the output shape is
//! fully pinned by `spec.md` §6 (a handful of element kinds, attribute-only
//! content, no text nodes, no namespaces), so a direct-coded writer mirrors
//! the teacher workspace's own preference for small single-purpose text
//! emission over a general dependency for a narrow, fixed format.

use crate::escape::escape_attr;

pub struct Element {
    pub name: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self { name, attrs: Vec::new(), children: Vec::new() }
    }

    pub fn attr(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((key, value.into()));
        self
    }

    pub fn child(mut self, element: Element) -> Self {
        self.children.push(element);
        self
    }

    pub fn children(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(elements);
        self
    }

    /// Render as a 2-space-indented pretty-printed XML document, including
    /// the `<?xml ...?>` prolog (`spec.md` §6).
    pub fn to_pretty_xml(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        self.write(&mut out, 0);
        out
    }

    fn write(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }
        if self.children.is_empty() {
            out.push_str("/>\n");
            return;
        }
        out.push_str(">\n");
        for child in &self.children {
            child.write(out, depth + 1);
        }
        out.push_str(&indent);
        out.push_str("</");
        out.push_str(self.name);
        out.push_str(">\n");
    }
}
