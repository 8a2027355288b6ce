//! Textarea component - multi-line text bound to a `State<String>`

use std::rc::Rc;

use ember_core::State;
use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

use super::input::TextChangeFn;

/// Multi-line text input
pub struct Textarea {
    value: State<String>,
    id: Option<String>,
    name: Option<String>,
    rows: u32,
    placeholder: Option<String>,
    disabled: bool,
    required: bool,
    invalid: bool,
    described_by: Option<String>,
    on_change: Option<TextChangeFn>,
}

impl Textarea {
    pub fn new(value: &State<String>) -> Self {
        Self {
            value: value.clone(),
            id: None,
            name: None,
            rows: 3,
            placeholder: None,
            disabled: false,
            required: false,
            invalid: false,
            described_by: None,
            on_change: None,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Visible rows (at least 1)
    pub fn rows(mut self, rows: u32) -> Self {
        self.rows = rows.max(1);
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    pub fn described_by(mut self, ids: impl Into<String>) -> Self {
        self.described_by = Some(ids.into());
        self
    }

    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + 'static,
    {
        self.on_change = Some(Rc::new(callback));
        self
    }
}

impl ElementBuilder for Textarea {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();

        let mut area = element("textarea")
            .class(theme.block("textarea"))
            .class_if(self.invalid, theme.modifier("textarea", "invalid"))
            .class(theme.token(theme.radius()))
            .attr("rows", self.rows.to_string())
            .attr_opt("name", self.name.clone())
            .attr_opt("placeholder", self.placeholder.clone())
            .attr_opt("aria-describedby", self.described_by.clone())
            .flag("required", self.required)
            .disabled(self.disabled)
            .text(self.value.get());

        if let Some(id) = &self.id {
            area = area.id(id);
        }
        if self.invalid {
            area = area.aria_bool("invalid", true);
        }

        if !self.disabled {
            let value = self.value.clone();
            let on_change = self.on_change.clone();
            area = area.on_input(move |e| {
                if let Some(text) = &e.value {
                    value.set_rebuild(text.clone());
                    if let Some(cb) = &on_change {
                        cb(text);
                    }
                }
            });
        }

        area.build(tree)
    }
}

pub fn textarea(value: &State<String>) -> Textarea {
    Textarea::new(value)
}
