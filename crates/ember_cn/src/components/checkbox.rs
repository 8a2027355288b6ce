//! Checkbox component for boolean selection
//!
//! # Example
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! let agree = use_state_keyed("agree", || false);
//!
//! cn::checkbox(&agree)
//!     .label("Accept terms")
//!     .on_change(|checked| println!("Checked: {}", checked))
//! ```

use std::cell::OnceCell;
use std::rc::Rc;

use ember_core::State;
use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

use super::toggle::{toggle_button, ToggleChangeFn, ToggleSpec};

/// Checkbox size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CheckboxSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl CheckboxSize {
    fn modifier(&self) -> &'static str {
        match self {
            CheckboxSize::Small => "sm",
            CheckboxSize::Medium => "md",
            CheckboxSize::Large => "lg",
        }
    }
}

/// Checkbox component
pub struct Checkbox {
    inner: Div,
}

impl ElementBuilder for Checkbox {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.inner.build(tree)
    }
}

/// Builder for checkboxes
pub struct CheckboxBuilder {
    key: InstanceKey,
    state: State<bool>,
    id: Option<String>,
    size: CheckboxSize,
    label: Option<String>,
    disabled: bool,
    on_change: Option<ToggleChangeFn>,
    built: OnceCell<Checkbox>,
}

impl CheckboxBuilder {
    #[track_caller]
    pub fn new(checked_state: &State<bool>) -> Self {
        Self::with_instance_key(InstanceKey::new("checkbox"), checked_state)
    }

    pub fn with_key(key: impl Into<String>, checked_state: &State<bool>) -> Self {
        Self::with_instance_key(InstanceKey::explicit(key), checked_state)
    }

    fn with_instance_key(key: InstanceKey, checked_state: &State<bool>) -> Self {
        Self {
            key,
            state: checked_state.clone(),
            id: None,
            size: CheckboxSize::default(),
            label: None,
            disabled: false,
            on_change: None,
            built: OnceCell::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn size(mut self, size: CheckboxSize) -> Self {
        self.size = size;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        self.on_change = Some(Rc::new(callback));
        self
    }

    /// Build the final Checkbox component
    pub fn build_component(&self) -> Checkbox {
        let theme = ThemeState::get().theme();
        let id = self.id.clone().unwrap_or_else(|| self.key.dom_id());
        let block = theme.block("checkbox");
        let checked = self.state.get();

        let control = toggle_button(ToggleSpec {
            role: "checkbox",
            block: &block,
            id: &id,
            state: &self.state,
            disabled: self.disabled,
            on_change: self.on_change.clone(),
        })
        .class(theme.modifier("checkbox", self.size.modifier()))
        .child_opt(checked.then(|| {
            span()
                .class(theme.element("checkbox", "indicator"))
                .aria_bool("hidden", true)
                .text("\u{2713}")
        }));

        let inner = match &self.label {
            Some(text) => div()
                .class(theme.element("checkbox", "field"))
                .child(control)
                .child(
                    label_element()
                        .attr("for", &id)
                        .class(theme.element("checkbox", "label"))
                        .text(text.clone()),
                ),
            None => control,
        };

        Checkbox { inner }
    }

    fn get_or_build(&self) -> &Checkbox {
        self.built.get_or_init(|| self.build_component())
    }
}

impl ElementBuilder for CheckboxBuilder {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.get_or_build().build(tree)
    }
}

/// Create a checkbox bound to `state`
#[track_caller]
pub fn checkbox(state: &State<bool>) -> CheckboxBuilder {
    CheckboxBuilder::new(state)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use ember_core::runtime;

    use super::*;

    #[test]
    fn test_checkbox_aria() {
        let state = runtime::use_state_keyed("terms", || true);
        let tree = DomTree::from_element(&CheckboxBuilder::with_key("terms", &state).label("Terms"));

        let control = tree.find_by_id("terms").unwrap();
        assert_eq!(tree.attr(control, "role"), Some("checkbox"));
        assert_eq!(tree.attr(control, "aria-checked"), Some("true"));
        assert_eq!(tree.attr(control, "data-state"), Some("checked"));
        assert_eq!(tree.find_by_tag("label").len(), 1);
    }

    #[test]
    fn test_click_and_space_toggle() {
        let state = runtime::use_state_keyed("news", || false);
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        let tree = DomTree::from_element(
            &CheckboxBuilder::with_key("news", &state).on_change(move |v| sink.set(Some(v))),
        );

        tree.dispatch_to_id("news", EventContext::click()).unwrap();
        assert!(state.get());
        assert_eq!(seen.get(), Some(true));

        let outcome = tree
            .dispatch_to_id("news", EventContext::key_down(Key::Space))
            .unwrap();
        assert!(outcome.default_prevented);
        assert!(!state.get());

        let outcome = tree
            .dispatch_to_id("news", EventContext::key_down(Key::Enter))
            .unwrap();
        assert!(outcome.default_prevented);
        assert!(!state.get());
    }

    #[test]
    fn test_disabled_checkbox_ignores_input() {
        let state = runtime::use_state_keyed("locked", || false);
        let tree = DomTree::from_element(&CheckboxBuilder::with_key("locked", &state).disabled(true));

        let outcome = tree.dispatch_to_id("locked", EventContext::click()).unwrap();
        assert_eq!(outcome.handled, 0);
        assert!(!state.get());
    }
}
