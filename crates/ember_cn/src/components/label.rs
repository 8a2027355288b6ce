//! Label component - text label for form controls
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! cn::label("Email").for_id("email")
//! cn::label("Password").required()
//! cn::label("Username").disabled(true)
//! ```

use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

/// Label size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LabelSize {
    fn modifier(&self) -> &'static str {
        match self {
            LabelSize::Small => "sm",
            LabelSize::Medium => "md",
            LabelSize::Large => "lg",
        }
    }
}

/// Label component
#[derive(Clone, Debug)]
pub struct Label {
    text: String,
    for_id: Option<String>,
    id: Option<String>,
    size: LabelSize,
    required: bool,
    disabled: bool,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            for_id: None,
            id: None,
            size: LabelSize::default(),
            required: false,
            disabled: false,
        }
    }

    /// Id of the control this label names
    pub fn for_id(mut self, id: impl Into<String>) -> Self {
        self.for_id = Some(id.into());
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn size(mut self, size: LabelSize) -> Self {
        self.size = size;
        self
    }

    /// Show a required marker after the text
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    fn to_div(&self) -> Div {
        let theme = ThemeState::get().theme();

        let mut label = label_element()
            .class(theme.block("label"))
            .class(theme.modifier("label", self.size.modifier()))
            .class_if(self.disabled, theme.modifier("label", "disabled"))
            .attr_opt("for", self.for_id.clone())
            .text(self.text.clone());

        if let Some(id) = &self.id {
            label = label.id(id);
        }
        if self.disabled {
            label = label.aria_bool("disabled", true);
        }
        if self.required {
            // The control itself carries `required`; the marker is visual.
            label = label.child(
                span()
                    .class(theme.element("label", "required"))
                    .aria_bool("hidden", true)
                    .text(" *"),
            );
        }
        label
    }
}

impl ElementBuilder for Label {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.to_div().build(tree)
    }
}

/// Create a label
pub fn label(text: impl Into<String>) -> Label {
    Label::new(text)
}
