//! Alert component for feedback messages
//!
//! # Example
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! // Simple message
//! cn::alert("Operation completed successfully")
//!     .variant(AlertVariant::Success)
//!
//! // Title and description
//! cn::alert_box()
//!     .variant(AlertVariant::Warning)
//!     .title("Heads up!")
//!     .description("This action cannot be undone.")
//! ```

use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

/// Alert severity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertVariant {
    #[default]
    Default,
    Success,
    Warning,
    Destructive,
}

impl AlertVariant {
    fn modifier(&self) -> &'static str {
        match self {
            AlertVariant::Default => "default",
            AlertVariant::Success => "success",
            AlertVariant::Warning => "warning",
            AlertVariant::Destructive => "destructive",
        }
    }
}

/// Single-message alert
pub struct Alert {
    message: String,
    variant: AlertVariant,
}

impl Alert {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            variant: AlertVariant::default(),
        }
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }
}

impl ElementBuilder for Alert {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        alert_shell(self.variant)
            .text(self.message.clone())
            .build(tree)
    }
}

pub fn alert(message: impl Into<String>) -> Alert {
    Alert::new(message)
}

/// Alert with a title and description
#[derive(Default)]
pub struct AlertBox {
    variant: AlertVariant,
    title: Option<String>,
    description: Option<String>,
}

impl AlertBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: AlertVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}

impl ElementBuilder for AlertBox {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();
        alert_shell(self.variant)
            .child_opt(self.title.as_ref().map(|title| {
                heading(5)
                    .class(theme.element("alert", "title"))
                    .text(title.clone())
            }))
            .child_opt(self.description.as_ref().map(|desc| {
                div()
                    .class(theme.element("alert", "description"))
                    .text(desc.clone())
            }))
            .build(tree)
    }
}

pub fn alert_box() -> AlertBox {
    AlertBox::new()
}

fn alert_shell(variant: AlertVariant) -> Div {
    let theme = ThemeState::get().theme();
    div()
        .role("alert")
        .class(theme.block("alert"))
        .class(theme.modifier("alert", variant.modifier()))
        .class(theme.token(theme.radius()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_role_and_variant() {
        let tree = DomTree::from_element(&alert("Saved").variant(AlertVariant::Success));
        let root = tree.root().unwrap();
        assert_eq!(tree.attr(root, "role"), Some("alert"));
        assert!(tree.has_class(root, "ember-alert--success"));
        assert_eq!(tree.text_content(root), "Saved");
    }

    #[test]
    fn test_alert_box_parts() {
        let tree = DomTree::from_element(
            &alert_box()
                .variant(AlertVariant::Destructive)
                .title("Error")
                .description("Something went wrong."),
        );
        assert_eq!(tree.find_by_tag("h5").len(), 1);
        assert_eq!(
            tree.text_content(tree.root().unwrap()),
            "ErrorSomething went wrong."
        );
    }
}
