//! Input component - text input bound to a `State<String>`
//!
//! # Example
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! let email = use_state_keyed("email", String::new);
//!
//! cn::input(&email)
//!     .id("email")
//!     .input_type(InputType::Email)
//!     .placeholder("you@example.com")
//!     .required()
//! ```

use std::rc::Rc;

use ember_core::State;
use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

/// HTML input types a text input can take
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Search,
    Tel,
    Url,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Number => "number",
            InputType::Search => "search",
            InputType::Tel => "tel",
            InputType::Url => "url",
        }
    }
}

/// Input size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl InputSize {
    fn modifier(&self) -> &'static str {
        match self {
            InputSize::Small => "sm",
            InputSize::Medium => "md",
            InputSize::Large => "lg",
        }
    }
}

/// Callback receiving the new text
pub type TextChangeFn = Rc<dyn Fn(&str)>;

/// Text input component
pub struct Input {
    value: State<String>,
    id: Option<String>,
    name: Option<String>,
    input_type: InputType,
    size: InputSize,
    placeholder: Option<String>,
    disabled: bool,
    required: bool,
    invalid: bool,
    described_by: Option<String>,
    on_change: Option<TextChangeFn>,
}

impl Input {
    pub fn new(value: &State<String>) -> Self {
        Self {
            value: value.clone(),
            id: None,
            name: None,
            input_type: InputType::default(),
            size: InputSize::default(),
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

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn password(self) -> Self {
        self.input_type(InputType::Password)
    }

    pub fn size(mut self, size: InputSize) -> Self {
        self.size = size;
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

    /// Mark the value as failing validation
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }

    /// Ids of elements describing this input (`aria-describedby`)
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

impl ElementBuilder for Input {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();

        let mut input = input_element()
            .attr("type", self.input_type.as_str())
            .class(theme.block("input"))
            .class(theme.modifier("input", self.size.modifier()))
            .class_if(self.invalid, theme.modifier("input", "invalid"))
            .class(theme.token(theme.radius()))
            .attr("value", self.value.get())
            .attr_opt("name", self.name.clone())
            .attr_opt("placeholder", self.placeholder.clone())
            .attr_opt("aria-describedby", self.described_by.clone())
            .flag("required", self.required)
            .disabled(self.disabled);

        if let Some(id) = &self.id {
            input = input.id(id);
        }
        if self.invalid {
            input = input.aria_bool("invalid", true);
        }

        if !self.disabled {
            let value = self.value.clone();
            let on_change = self.on_change.clone();
            input = input.on_input(move |e| {
                let Some(text) = &e.value else {
                    return;
                };
                value.set_rebuild(text.clone());
                if let Some(cb) = &on_change {
                    cb(text);
                }
            });
        }

        input.build(tree)
    }
}

/// Create a text input bound to `value`
pub fn input(value: &State<String>) -> Input {
    Input::new(value)
}
