//! HTML serialization of a built tree

use std::fmt::Write;

use crate::tree::{DomTree, NodeId, NodeKind};

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

impl DomTree {
    /// Serialize the whole tree from its root
    pub fn to_html(&self) -> String {
        match self.root() {
            Some(root) => self.node_to_html(root),
            None => String::new(),
        }
    }

    /// Serialize a single node and its descendants
    pub fn node_to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_node(id, &mut out);
        out
    }

    fn write_node(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.get(id) else {
            return;
        };

        match &node.kind {
            NodeKind::Text(text) => {
                out.push_str(&html_escape::encode_text(text));
            }
            NodeKind::Element {
                tag,
                classes,
                attrs,
            } => {
                out.push('<');
                out.push_str(tag);

                if let Some(dom_id) = attrs.get("id") {
                    write_attr(out, "id", dom_id);
                }
                if !classes.is_empty() {
                    write_attr(out, "class", &classes.join(" "));
                }
                for (name, value) in attrs.iter().filter(|(name, _)| name.as_str() != "id") {
                    write_attr(out, name, value);
                }
                out.push('>');

                if is_void(tag) {
                    return;
                }

                for child in &node.children {
                    self.write_node(*child, out);
                }

                let _ = write!(out, "</{}>", tag);
            }
        }
    }
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    if !value.is_empty() {
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(value));
        out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use crate::div::{div, input_element, span};
    use crate::tree::DomTree;

    #[test]
    fn test_attribute_order_and_escaping() {
        let ui = div()
            .role("note")
            .class("box")
            .id("n1")
            .child(span().text("a < b & \"c\""));
        let html = DomTree::from_element(&ui).to_html();

        assert_eq!(
            html,
            "<div id=\"n1\" class=\"box\" role=\"note\"><span>a &lt; b &amp; \"c\"</span></div>"
        );
    }

    #[test]
    fn test_void_and_boolean_attributes() {
        let ui = input_element()
            .attr("type", "text")
            .attr("value", "say \"hi\"")
            .disabled(true);
        let html = DomTree::from_element(&ui).to_html();

        assert_eq!(
            html,
            "<input type=\"text\" value=\"say &quot;hi&quot;\" disabled>"
        );
    }

    #[test]
    fn test_empty_tree() {
        assert_eq!(DomTree::new().to_html(), "");
    }
}
