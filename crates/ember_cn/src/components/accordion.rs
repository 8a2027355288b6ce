//! Accordion component for expandable content sections
//!
//! A set of vertically stacked collapsible sections. Supports single-open
//! (only one section open at a time) or multi-open modes.
//!
//! # Example - Single Open
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! cn::accordion()
//!     .item("intro", "What is Ember?", || paragraph().text("A component library"))
//!     .item("usage", "How do I use it?", || paragraph().text("Build a tree"))
//!     .default_open("intro")
//! ```
//!
//! # Multi-Open Mode
//!
//! ```ignore
//! cn::accordion()
//!     .multi_open()
//!     .item("a", "First Section", || content_a())
//!     .item("b", "Second Section", || content_b())
//! ```

use std::cell::OnceCell;
use std::rc::Rc;

use ember_core::{use_state_keyed, State};
use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

/// Accordion mode - single or multi open
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccordionMode {
    /// Only one section can be open at a time (default)
    #[default]
    Single,
    /// Multiple sections can be open simultaneously
    Multi,
}

type ContentFn = Rc<dyn Fn() -> Div>;

#[derive(Clone)]
struct AccordionItem {
    key: String,
    label: String,
    disabled: bool,
    content: ContentFn,
}

/// Accordion component - multiple collapsible sections
pub struct Accordion {
    inner: Div,
}

impl ElementBuilder for Accordion {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.inner.build(tree)
    }
}

/// Builder for creating Accordion components with fluent API
pub struct AccordionBuilder {
    instance_key: InstanceKey,
    id: Option<String>,
    mode: AccordionMode,
    initial_open: Vec<String>,
    items: Vec<AccordionItem>,
    built: OnceCell<Accordion>,
}

impl AccordionBuilder {
    #[track_caller]
    pub fn new() -> Self {
        Self::with_instance_key(InstanceKey::new("accordion"))
    }

    /// Create an accordion whose open sections are stored under `key`
    pub fn with_key(key: impl Into<String>) -> Self {
        Self::with_instance_key(InstanceKey::explicit(key))
    }

    fn with_instance_key(instance_key: InstanceKey) -> Self {
        Self {
            instance_key,
            id: None,
            mode: AccordionMode::Single,
            initial_open: Vec::new(),
            items: Vec::new(),
            built: OnceCell::new(),
        }
    }

    fn get_or_build(&self) -> &Accordion {
        self.built.get_or_init(|| self.build_component())
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set to multi-open mode (multiple sections can be open at once)
    pub fn multi_open(mut self) -> Self {
        self.mode = AccordionMode::Multi;
        self
    }

    /// Open a section on first render
    ///
    /// In single mode only the first default is honored.
    pub fn default_open(mut self, key: impl Into<String>) -> Self {
        self.initial_open.push(key.into());
        self
    }

    /// Add an accordion item
    ///
    /// # Arguments
    /// * `key` - Unique identifier for this section
    /// * `label` - Text shown in the trigger header
    /// * `content` - Function that builds the content when expanded
    pub fn item<F>(mut self, key: impl Into<String>, label: impl Into<String>, content: F) -> Self
    where
        F: Fn() -> Div + 'static,
    {
        self.items.push(AccordionItem {
            key: key.into(),
            label: label.into(),
            disabled: false,
            content: Rc::new(content),
        });
        self
    }

    /// Add an item whose trigger cannot be activated
    pub fn item_disabled<F>(
        mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        content: F,
    ) -> Self
    where
        F: Fn() -> Div + 'static,
    {
        self.items.push(AccordionItem {
            key: key.into(),
            label: label.into(),
            disabled: true,
            content: Rc::new(content),
        });
        self
    }

    fn is_initially_open(&self, item_key: &str) -> bool {
        match self.mode {
            AccordionMode::Single => self.initial_open.first().map(String::as_str) == Some(item_key),
            AccordionMode::Multi => self.initial_open.iter().any(|k| k == item_key),
        }
    }

    /// Build the final Accordion component
    pub fn build_component(&self) -> Accordion {
        let theme = ThemeState::get().theme();
        let id = self.id.clone().unwrap_or_else(|| self.instance_key.dom_id());

        let states: Vec<State<bool>> = self
            .items
            .iter()
            .map(|item| {
                let initially_open = self.is_initially_open(&item.key);
                use_state_keyed(
                    &self.instance_key.derive(&format!("{}_open", item.key)),
                    || initially_open,
                )
            })
            .collect();

        let mut root = div()
            .id(&id)
            .class(theme.block("accordion"))
            .class(theme.token(theme.radius()))
            .data(
                "mode",
                match self.mode {
                    AccordionMode::Single => "single",
                    AccordionMode::Multi => "multi",
                },
            );

        for (index, item) in self.items.iter().enumerate() {
            let is_open = states[index].get();
            let trigger_id = format!("{}-trigger-{}", id, item.key);
            let panel_id = format!("{}-panel-{}", id, item.key);

            let mut trigger = button_element()
                .id(&trigger_id)
                .class(theme.element("accordion", "trigger"))
                .aria_bool("expanded", is_open)
                .aria("controls", &panel_id)
                .disabled(item.disabled)
                .child(span().text(item.label.clone()))
                .child(
                    span()
                        .class(theme.element("accordion", "chevron"))
                        .aria_bool("hidden", true)
                        .text(if is_open { "\u{25B4}" } else { "\u{25BE}" }),
                );

            if !item.disabled {
                let mode = self.mode;
                let all = states.clone();
                let key = item.key.clone();
                trigger = trigger.on_click(move |_| {
                    let next = !all[index].get();
                    if next && mode == AccordionMode::Single {
                        for (i, other) in all.iter().enumerate() {
                            if i != index && other.get() {
                                other.set(false);
                            }
                        }
                    }
                    all[index].set_rebuild(next);
                    tracing::debug!("accordion: section {:?} open={}", key, next);
                });
            }

            let mut panel = div()
                .id(&panel_id)
                .role("region")
                .aria("labelledby", &trigger_id)
                .class(theme.element("accordion", "panel"))
                .hidden(!is_open);
            if is_open {
                panel = panel.child((item.content)());
            }

            root = root.child(
                div()
                    .class(theme.element("accordion", "item"))
                    .class_if(is_open, theme.modifier("accordion-item", "open"))
                    .data("state", if is_open { "open" } else { "closed" })
                    .child(
                        heading(3)
                            .class(theme.element("accordion", "header"))
                            .child(trigger),
                    )
                    .child(panel),
            );
        }

        Accordion { inner: root }
    }
}

impl Default for AccordionBuilder {
    #[track_caller]
    fn default() -> Self {
        Self::new()
    }
}

impl ElementBuilder for AccordionBuilder {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.get_or_build().build(tree)
    }
}

/// Create an accordion
#[track_caller]
pub fn accordion() -> AccordionBuilder {
    AccordionBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(key: &str) -> AccordionBuilder {
        AccordionBuilder::with_key(key)
            .item("a", "First", || paragraph().text("Alpha"))
            .item("b", "Second", || paragraph().text("Beta"))
            .item_disabled("c", "Third", || paragraph().text("Gamma"))
    }

    #[test]
    fn test_default_open_renders_panel() {
        let tree = DomTree::from_element(&faq("faq-default").default_open("b"));

        let trigger = tree.find_by_id("faq-default-trigger-b").unwrap();
        assert_eq!(tree.attr(trigger, "aria-expanded"), Some("true"));
        assert_eq!(
            tree.attr(trigger, "aria-controls"),
            Some("faq-default-panel-b")
        );

        let panel = tree.find_by_id("faq-default-panel-b").unwrap();
        assert_eq!(tree.attr(panel, "role"), Some("region"));
        assert!(!tree.has_attr(panel, "hidden"));
        assert_eq!(tree.text_content(panel), "Beta");

        let closed = tree.find_by_id("faq-default-panel-a").unwrap();
        assert!(tree.has_attr(closed, "hidden"));
        assert_eq!(tree.children(closed).len(), 0);
    }

    #[test]
    fn test_single_mode_closes_others() {
        let tree = DomTree::from_element(&faq("faq-single").default_open("a"));
        tree.dispatch_to_id("faq-single-trigger-b", EventContext::click())
            .unwrap();

        let tree = DomTree::from_element(&faq("faq-single"));
        let a = tree.find_by_id("faq-single-trigger-a").unwrap();
        let b = tree.find_by_id("faq-single-trigger-b").unwrap();
        assert_eq!(tree.attr(a, "aria-expanded"), Some("false"));
        assert_eq!(tree.attr(b, "aria-expanded"), Some("true"));
    }

    #[test]
    fn test_multi_mode_keeps_others_open() {
        let tree = DomTree::from_element(&faq("faq-multi").multi_open().default_open("a"));
        tree.dispatch_to_id("faq-multi-trigger-b", EventContext::click())
            .unwrap();

        let tree = DomTree::from_element(&faq("faq-multi").multi_open());
        for key in ["a", "b"] {
            let trigger = tree
                .find_by_id(&format!("faq-multi-trigger-{}", key))
                .unwrap();
            assert_eq!(tree.attr(trigger, "aria-expanded"), Some("true"));
        }
    }

    #[test]
    fn test_disabled_item_has_no_handler() {
        let tree = DomTree::from_element(&faq("faq-disabled"));
        let outcome = tree
            .dispatch_to_id("faq-disabled-trigger-c", EventContext::click())
            .unwrap();
        assert_eq!(outcome.handled, 0);
    }
}
