//! Switch component for boolean toggle
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! let enabled = use_state_keyed("notifications", || false);
//!
//! cn::switch(&enabled)
//!     .label("Enable notifications")
//!     .on_change(|on| println!("Switch: {}", on))
//! ```

use std::rc::Rc;

use ember_core::State;
use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::{RadiusToken, ThemeState};

use super::toggle::{toggle_button, ToggleChangeFn, ToggleSpec};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwitchSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl SwitchSize {
    fn modifier(&self) -> &'static str {
        match self {
            SwitchSize::Small => "sm",
            SwitchSize::Medium => "md",
            SwitchSize::Large => "lg",
        }
    }
}

/// Switch component
pub struct Switch {
    key: InstanceKey,
    state: State<bool>,
    id: Option<String>,
    size: SwitchSize,
    label: Option<String>,
    disabled: bool,
    on_change: Option<ToggleChangeFn>,
}

impl Switch {
    #[track_caller]
    pub fn new(on_state: &State<bool>) -> Self {
        Self {
            key: InstanceKey::new("switch"),
            state: on_state.clone(),
            id: None,
            size: SwitchSize::default(),
            label: None,
            disabled: false,
            on_change: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn size(mut self, size: SwitchSize) -> Self {
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
}

impl ElementBuilder for Switch {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();
        let id = self.id.clone().unwrap_or_else(|| self.key.dom_id());
        let block = theme.block("switch");

        let control = toggle_button(ToggleSpec {
            role: "switch",
            block: &block,
            id: &id,
            state: &self.state,
            disabled: self.disabled,
            on_change: self.on_change.clone(),
        })
        .class(theme.modifier("switch", self.size.modifier()))
        .class(theme.token(RadiusToken::Full))
        .child(
            span()
                .class(theme.element("switch", "thumb"))
                .aria_bool("hidden", true),
        );

        match &self.label {
            Some(text) => div()
                .class(theme.element("switch", "field"))
                .child(control)
                .child(
                    label_element()
                        .attr("for", &id)
                        .class(theme.element("switch", "label"))
                        .text(text.clone()),
                )
                .build(tree),
            None => control.build(tree),
        }
    }
}

#[track_caller]
pub fn switch(state: &State<bool>) -> Switch {
    Switch::new(state)
}
