//! HTML serialization of document subtrees

use super::document::{Document, Node, NodeId};

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link", "source"];

impl Document {
    /// Serialize `node` and its descendants as HTML.
    ///
    /// Attributes keep insertion order and are followed by `class` and
    /// `style`. Attributes with an empty value are written bare (`controls`).
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_html(node, &mut out);
        out
    }

    fn write_html(&self, node: NodeId, out: &mut String) {
        let element = match self.node(node) {
            Some(Node::Text(text)) => {
                out.push_str(&escape_text(text));
                return;
            }
            Some(Node::Element(e)) => e,
            None => return,
        };

        out.push('<');
        out.push_str(&element.tag);
        for (name, value) in &element.attributes {
            push_attribute(out, name, value);
        }
        if !element.classes.is_empty() {
            push_attribute(out, "class", &element.classes.join(" "));
        }
        if !element.style.is_empty() {
            let style = element
                .style
                .iter()
                .map(|(k, v)| format!("{}: {};", k, v))
                .collect::<Vec<_>>()
                .join(" ");
            push_attribute(out, "style", &style);
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&element.tag.as_str()) {
            return;
        }

        for child in &element.children {
            self.write_html(*child, out);
        }
        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}

fn push_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if !value.is_empty() {
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
