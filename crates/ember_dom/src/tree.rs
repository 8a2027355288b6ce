//! Built element tree
//!
//! `DomTree` is the materialized form of an element builder. Nodes live in a
//! slotmap arena; handlers registered on builders are carried along so the
//! tree can dispatch events with DOM bubbling semantics.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

use crate::div::ElementBuilder;
use crate::error::DomError;
use crate::event_handler::{EventContext, EventHandlers};

new_key_type! {
    /// Handle to a node in a [`DomTree`]
    pub struct NodeId;
}

/// Payload of a node
#[derive(Clone, Debug)]
pub enum NodeKind {
    Element {
        tag: String,
        classes: Vec<String>,
        attrs: IndexMap<String, String>,
    },
    Text(String),
}

/// A node in the tree
#[derive(Debug)]
pub struct DomNode {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: SmallVec<[NodeId; 4]>,
    handlers: EventHandlers,
}

impl DomNode {
    pub fn handlers(&self) -> &EventHandlers {
        &self.handlers
    }
}

/// Result of dispatching an event
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Number of handlers invoked along the propagation path
    pub handled: usize,
    /// Whether any handler called `prevent_default`
    pub default_prevented: bool,
}

/// Arena of built nodes
#[derive(Debug, Default)]
pub struct DomTree {
    nodes: SlotMap<NodeId, DomNode>,
    root: Option<NodeId>,
    ids: FxHashMap<String, NodeId>,
}

impl DomTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an element into a fresh tree and make it the root
    pub fn from_element(element: &dyn ElementBuilder) -> Self {
        let mut tree = Self::new();
        let root = element.build(&mut tree);
        tree.root = Some(root);
        tree
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn set_root(&mut self, root: NodeId) {
        self.root = Some(root);
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // =========================================================================
    // Construction
    // =========================================================================

    pub fn create_element(
        &mut self,
        tag: String,
        classes: Vec<String>,
        attrs: IndexMap<String, String>,
        handlers: EventHandlers,
    ) -> NodeId {
        let dom_id = attrs.get("id").cloned();
        let node = self.nodes.insert(DomNode {
            kind: NodeKind::Element {
                tag,
                classes,
                attrs,
            },
            parent: None,
            children: SmallVec::new(),
            handlers,
        });

        if let Some(dom_id) = dom_id {
            if self.ids.insert(dom_id.clone(), node).is_some() {
                tracing::warn!("duplicate element id in tree: {}", dom_id);
            }
        }
        node
    }

    pub fn create_text(&mut self, content: String) -> NodeId {
        self.nodes.insert(DomNode {
            kind: NodeKind::Text(content),
            parent: None,
            children: SmallVec::new(),
            handlers: EventHandlers::new(),
        })
    }

    pub fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(node) = self.nodes.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.push(child);
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn get(&self, id: NodeId) -> Option<&DomNode> {
        self.nodes.get(id)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match &self.nodes.get(id)?.kind {
            NodeKind::Element { tag, .. } => Some(tag),
            NodeKind::Text(_) => None,
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.nodes.get(id)?.kind {
            NodeKind::Element { attrs, .. } => attrs.get(name).map(String::as_str),
            NodeKind::Text(_) => None,
        }
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    pub fn classes(&self, id: NodeId) -> &[String] {
        match self.nodes.get(id).map(|n| &n.kind) {
            Some(NodeKind::Element { classes, .. }) => classes,
            _ => &[],
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.classes(id).iter().any(|c| c == class)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id)?.parent
    }

    /// Concatenated text of a node and its descendants
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        match &node.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for child in &node.children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    /// Look up an element by its `id` attribute
    pub fn find_by_id(&self, dom_id: &str) -> Option<NodeId> {
        self.ids.get(dom_id).copied()
    }

    /// Descendants of the root in document order (root included)
    pub fn descendants(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        if let Some(root) = self.root {
            let mut stack = vec![root];
            while let Some(id) = stack.pop() {
                out.push(id);
                stack.extend(self.children(id).iter().rev().copied());
            }
        }
        out
    }

    /// All elements matching a predicate, in document order
    pub fn find_all(&self, mut predicate: impl FnMut(&DomTree, NodeId) -> bool) -> Vec<NodeId> {
        self.descendants()
            .into_iter()
            .filter(|id| self.tag(*id).is_some() && predicate(self, *id))
            .collect()
    }

    /// Elements with the given `role` attribute, in document order
    pub fn find_by_role(&self, role: &str) -> Vec<NodeId> {
        self.find_all(|tree, id| tree.attr(id, "role") == Some(role))
    }

    /// Elements with the given tag, in document order
    pub fn find_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.find_all(|tree, id| tree.tag(id) == Some(tag))
    }

    /// Elements carrying the given class, in document order
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.find_all(|tree, id| tree.has_class(id, class))
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Dispatch an event at `target`
    ///
    /// Handlers on the target run first, then on each ancestor up to the root
    /// for bubbling events, until one calls `stop_propagation`.
    pub fn dispatch(&self, target: NodeId, ctx: EventContext) -> Result<DispatchOutcome, DomError> {
        if !self.nodes.contains_key(target) {
            return Err(DomError::NodeNotFound);
        }

        let ctx = ctx.with_target(target);
        let bubbles = ctx.event_type.bubbles();
        let mut handled = 0;
        let mut current = Some(target);

        while let Some(id) = current {
            let Some(node) = self.nodes.get(id) else {
                break;
            };
            handled += node.handlers.dispatch(&ctx);
            if !bubbles || ctx.propagation_stopped() {
                break;
            }
            current = node.parent;
        }

        tracing::trace!(
            "dispatch {} -> {} handler(s), default_prevented={}",
            ctx.event_type,
            handled,
            ctx.default_prevented()
        );

        Ok(DispatchOutcome {
            handled,
            default_prevented: ctx.default_prevented(),
        })
    }

    /// Dispatch an event at the element with the given `id` attribute
    pub fn dispatch_to_id(
        &self,
        dom_id: &str,
        ctx: EventContext,
    ) -> Result<DispatchOutcome, DomError> {
        let target = self
            .find_by_id(dom_id)
            .ok_or_else(|| DomError::ElementNotFound(dom_id.to_string()))?;
        self.dispatch(target, ctx)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use ember_core::events::{EventType, Key};

    use super::*;
    use crate::div::{button_element, div, span};

    #[test]
    fn test_build_and_query() {
        let ui = div()
            .id("root")
            .role("group")
            .child(span().id("a").text("Hello, "))
            .child(span().id("b").text("world"));
        let tree = DomTree::from_element(&ui);

        let root = tree.root().unwrap();
        assert_eq!(tree.tag(root), Some("div"));
        assert_eq!(tree.children(root).len(), 2);
        assert_eq!(tree.text_content(root), "Hello, world");

        let b = tree.find_by_id("b").unwrap();
        assert_eq!(tree.parent(b), Some(root));
        assert_eq!(tree.find_by_role("group"), vec![root]);
        assert_eq!(tree.find_by_tag("span").len(), 2);
    }

    #[test]
    fn test_dispatch_bubbles_to_ancestors() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let outer_log = log.clone();
        let inner_log = log.clone();
        let ui = div()
            .id("outer")
            .on_click(move |_| outer_log.borrow_mut().push("outer"))
            .child(
                button_element()
                    .id("inner")
                    .on_click(move |_| inner_log.borrow_mut().push("inner")),
            );
        let tree = DomTree::from_element(&ui);

        let outcome = tree.dispatch_to_id("inner", EventContext::click()).unwrap();
        assert_eq!(outcome.handled, 2);
        assert_eq!(*log.borrow(), vec!["inner", "outer"]);
    }

    #[test]
    fn test_stop_propagation() {
        let outer_hits = Rc::new(RefCell::new(0));
        let hits = outer_hits.clone();
        let ui = div()
            .on_click(move |_| *hits.borrow_mut() += 1)
            .child(button_element().id("btn").on_click(|e| e.stop_propagation()));
        let tree = DomTree::from_element(&ui);

        tree.dispatch_to_id("btn", EventContext::click()).unwrap();
        assert_eq!(*outer_hits.borrow(), 0);
    }

    #[test]
    fn test_focus_does_not_bubble() {
        let hits = Rc::new(RefCell::new(0));
        let counter = hits.clone();
        let ui = div()
            .on(EventType::Focus, move |_| *counter.borrow_mut() += 1)
            .child(button_element().id("btn"));
        let tree = DomTree::from_element(&ui);

        let outcome = tree.dispatch_to_id("btn", EventContext::focus()).unwrap();
        assert_eq!(outcome.handled, 0);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn test_prevent_default_reported() {
        let ui = div()
            .id("box")
            .on_key_down(|e| {
                if e.key == Some(Key::Tab) {
                    e.prevent_default();
                }
            });
        let tree = DomTree::from_element(&ui);

        let outcome = tree
            .dispatch_to_id("box", EventContext::key_down(Key::Tab))
            .unwrap();
        assert!(outcome.default_prevented);

        let outcome = tree
            .dispatch_to_id("box", EventContext::key_down(Key::Enter))
            .unwrap();
        assert!(!outcome.default_prevented);
    }

    #[test]
    fn test_dispatch_unknown_id() {
        let tree = DomTree::from_element(&div());
        let err = tree
            .dispatch_to_id("missing", EventContext::click())
            .unwrap_err();
        assert!(matches!(err, DomError::ElementNotFound(id) if id == "missing"));
    }
}
