//! Element builder with a fluent API
//!
//! `Div` builds any HTML element: the tag defaults to `div` and every other
//! constructor (`span()`, `button_element()`, ...) is a `Div` with a different
//! tag.
//!
//! ```ignore
//! use ember_dom::prelude::*;
//!
//! let ui = div()
//!     .class("toolbar")
//!     .role("toolbar")
//!     .aria("label", "Formatting")
//!     .child(button_element().text("Bold").on_click(|_| println!("bold")))
//!     .child(span().text("Ready"));
//!
//! let tree = DomTree::from_element(&ui);
//! println!("{}", tree.to_html());
//! ```

use std::borrow::Cow;
use std::fmt;

use ember_core::events::EventType;
use indexmap::IndexMap;

use crate::event_handler::{EventContext, EventHandlers};
use crate::text::Text;
use crate::tree::{DomTree, NodeId};

/// Kind of node an element builder produces
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementTypeId {
    Element,
    Text,
}

/// Anything that can be built into a [`DomTree`]
pub trait ElementBuilder {
    /// Build this element into the tree, returning the node ID
    fn build(&self, tree: &mut DomTree) -> NodeId;

    /// Get the element type identifier
    fn element_type_id(&self) -> ElementTypeId {
        ElementTypeId::Element
    }
}

impl<T: ElementBuilder + ?Sized> ElementBuilder for Box<T> {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        (**self).build(tree)
    }

    fn element_type_id(&self) -> ElementTypeId {
        (**self).element_type_id()
    }
}

/// Generic element builder
pub struct Div {
    tag: Cow<'static, str>,
    classes: Vec<String>,
    attrs: IndexMap<String, String>,
    children: Vec<Box<dyn ElementBuilder>>,
    handlers: EventHandlers,
}

impl Default for Div {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Div {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Div")
            .field("tag", &self.tag)
            .field("classes", &self.classes)
            .field("attrs", &self.attrs)
            .field("children", &self.children.len())
            .field("handlers", &self.handlers)
            .finish()
    }
}

impl Div {
    /// Create a new `<div>`
    pub fn new() -> Self {
        Self::with_tag("div")
    }

    /// Create an element with any tag
    pub fn with_tag(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            classes: Vec::new(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            handlers: EventHandlers::new(),
        }
    }

    // =========================================================================
    // Identity & classes
    // =========================================================================

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Add one or more whitespace-separated classes
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        for name in class.as_ref().split_whitespace() {
            if !self.classes.iter().any(|c| c == name) {
                self.classes.push(name.to_string());
            }
        }
        self
    }

    pub fn class_if(self, condition: bool, class: impl AsRef<str>) -> Self {
        if condition {
            self.class(class)
        } else {
            self
        }
    }

    pub fn classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        classes.into_iter().fold(self, |div, c| div.class(c))
    }

    // =========================================================================
    // Attributes
    // =========================================================================

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a boolean attribute (`disabled`, `hidden`, `required`, ...)
    pub fn flag(mut self, name: impl Into<String>, on: bool) -> Self {
        let name = name.into();
        if on {
            self.attrs.insert(name, String::new());
        } else {
            self.attrs.shift_remove(&name);
        }
        self
    }

    /// Set an `aria-*` attribute
    pub fn aria(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("aria-{}", name), value)
    }

    /// Set an `aria-*` attribute holding `"true"` / `"false"`
    pub fn aria_bool(self, name: &str, value: bool) -> Self {
        self.aria(name, if value { "true" } else { "false" })
    }

    /// Set a `data-*` attribute
    pub fn data(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{}", name), value)
    }

    pub fn role(self, role: impl Into<String>) -> Self {
        self.attr("role", role)
    }

    pub fn tabindex(self, index: i32) -> Self {
        self.attr("tabindex", index.to_string())
    }

    pub fn disabled(self, disabled: bool) -> Self {
        self.flag("disabled", disabled)
    }

    pub fn hidden(self, hidden: bool) -> Self {
        self.flag("hidden", hidden)
    }

    // =========================================================================
    // Children
    // =========================================================================

    pub fn child(mut self, child: impl ElementBuilder + 'static) -> Self {
        self.children.push(Box::new(child));
        self
    }

    pub fn child_opt(self, child: Option<impl ElementBuilder + 'static>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    pub fn child_box(mut self, child: Box<dyn ElementBuilder>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<I, E>(self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: ElementBuilder + 'static,
    {
        children.into_iter().fold(self, |div, c| div.child(c))
    }

    /// Append a text node
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Text::new(content))
    }

    // =========================================================================
    // Events
    // =========================================================================

    pub fn on<F>(mut self, event_type: EventType, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.handlers.on(event_type, handler);
        self
    }

    pub fn on_click<F: Fn(&EventContext) + 'static>(self, handler: F) -> Self {
        self.on(EventType::Click, handler)
    }

    pub fn on_input<F: Fn(&EventContext) + 'static>(self, handler: F) -> Self {
        self.on(EventType::Input, handler)
    }

    pub fn on_change<F: Fn(&EventContext) + 'static>(self, handler: F) -> Self {
        self.on(EventType::Change, handler)
    }

    pub fn on_key_down<F: Fn(&EventContext) + 'static>(self, handler: F) -> Self {
        self.on(EventType::KeyDown, handler)
    }

    pub fn on_focus<F: Fn(&EventContext) + 'static>(self, handler: F) -> Self {
        self.on(EventType::Focus, handler)
    }

    pub fn on_blur<F: Fn(&EventContext) + 'static>(self, handler: F) -> Self {
        self.on(EventType::Blur, handler)
    }

    pub fn on_submit<F: Fn(&EventContext) + 'static>(self, handler: F) -> Self {
        self.on(EventType::Submit, handler)
    }

    pub fn on_reset<F: Fn(&EventContext) + 'static>(self, handler: F) -> Self {
        self.on(EventType::Reset, handler)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn class_list(&self) -> &[String] {
        &self.classes
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn event_handlers(&self) -> &EventHandlers {
        &self.handlers
    }
}

impl ElementBuilder for Div {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let node = tree.create_element(
            self.tag.to_string(),
            self.classes.clone(),
            self.attrs.clone(),
            self.handlers.clone(),
        );

        for child in &self.children {
            let child_node = child.build(tree);
            tree.add_child(node, child_node);
        }

        node
    }
}

/// Convenience function to create a new div
pub fn div() -> Div {
    Div::new()
}

/// Create an element with an arbitrary tag
pub fn element(tag: &'static str) -> Div {
    Div::with_tag(tag)
}

pub fn span() -> Div {
    Div::with_tag("span")
}

pub fn paragraph() -> Div {
    Div::with_tag("p")
}

pub fn heading(level: u8) -> Div {
    let tag = match level {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    };
    Div::with_tag(tag)
}

/// `<button type="button">`
pub fn button_element() -> Div {
    Div::with_tag("button").attr("type", "button")
}

pub fn input_element() -> Div {
    Div::with_tag("input")
}

pub fn label_element() -> Div {
    Div::with_tag("label")
}

pub fn list(ordered: bool) -> Div {
    Div::with_tag(if ordered { "ol" } else { "ul" })
}

pub fn list_item() -> Div {
    Div::with_tag("li")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_div_builder() {
        let d = div().id("main").class("a b").class("a").role("region");

        assert_eq!(d.tag(), "div");
        assert_eq!(d.get_attr("id"), Some("main"));
        assert_eq!(d.get_attr("role"), Some("region"));
        assert_eq!(d.class_list(), &["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_div_with_children() {
        let parent = div().child(div()).child(span()).text("hello");
        assert_eq!(parent.child_count(), 3);
    }

    #[test]
    fn test_flag_toggles_attribute() {
        let d = button_element().disabled(true);
        assert_eq!(d.get_attr("disabled"), Some(""));

        let d = d.disabled(false);
        assert_eq!(d.get_attr("disabled"), None);
        assert_eq!(d.get_attr("type"), Some("button"));
    }

    #[test]
    fn test_aria_helpers() {
        let d = div().aria_bool("expanded", true).aria("controls", "panel-1");
        assert_eq!(d.get_attr("aria-expanded"), Some("true"));
        assert_eq!(d.get_attr("aria-controls"), Some("panel-1"));
    }

    #[test]
    fn test_class_if() {
        let d = div().class_if(false, "hidden").class_if(true, "shown");
        assert!(!d.has_class("hidden"));
        assert!(d.has_class("shown"));
    }
}
