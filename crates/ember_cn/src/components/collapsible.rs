//! Collapsible component - a trigger that shows and hides one content region
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! let open = use_state_keyed("advanced", || false);
//!
//! cn::collapsible(&open)
//!     .trigger("Advanced settings")
//!     .content(|| div().child(cn::switch(&verbose).label("Verbose")))
//! ```

use std::rc::Rc;

use ember_core::State;
use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

/// Collapsible section bound to a `State<bool>`
pub struct Collapsible {
    key: InstanceKey,
    is_open: State<bool>,
    id: Option<String>,
    trigger: String,
    disabled: bool,
    content: Option<Rc<dyn Fn() -> Div>>,
    on_open_change: Option<Rc<dyn Fn(bool)>>,
}

impl Collapsible {
    #[track_caller]
    pub fn new(is_open: &State<bool>) -> Self {
        Self {
            key: InstanceKey::new("collapsible"),
            is_open: is_open.clone(),
            id: None,
            trigger: String::new(),
            disabled: false,
            content: None,
            on_open_change: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Trigger button text
    pub fn trigger(mut self, label: impl Into<String>) -> Self {
        self.trigger = label.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Content built only while open
    pub fn content<F>(mut self, content: F) -> Self
    where
        F: Fn() -> Div + 'static,
    {
        self.content = Some(Rc::new(content));
        self
    }

    pub fn on_open_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        self.on_open_change = Some(Rc::new(callback));
        self
    }
}

impl ElementBuilder for Collapsible {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();
        let id = self.id.clone().unwrap_or_else(|| self.key.dom_id());
        let content_id = format!("{}-content", id);
        let open = self.is_open.get();

        let mut trigger = button_element()
            .id(format!("{}-trigger", id))
            .class(theme.element("collapsible", "trigger"))
            .aria_bool("expanded", open)
            .aria("controls", &content_id)
            .disabled(self.disabled)
            .text(self.trigger.clone());

        if !self.disabled {
            let state = self.is_open.clone();
            let callback = self.on_open_change.clone();
            trigger = trigger.on_click(move |_| {
                let next = !state.get();
                state.set_rebuild(next);
                if let Some(cb) = &callback {
                    cb(next);
                }
            });
        }

        let mut content = div()
            .id(&content_id)
            .class(theme.element("collapsible", "content"))
            .hidden(!open);
        if open {
            if let Some(build) = &self.content {
                content = content.child(build());
            }
        }

        div()
            .id(&id)
            .class(theme.block("collapsible"))
            .data("state", if open { "open" } else { "closed" })
            .child(trigger)
            .child(content)
            .build(tree)
    }
}

#[track_caller]
pub fn collapsible(is_open: &State<bool>) -> Collapsible {
    Collapsible::new(is_open)
}
