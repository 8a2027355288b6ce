//! Button component with shadcn-style variants
//!
//! # Example
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! // Primary button (default)
//! cn::button("Click me")
//!
//! // Destructive button
//! cn::button("Delete")
//!     .variant(ButtonVariant::Destructive)
//!
//! // Outline button with custom size
//! cn::button("Cancel")
//!     .variant(ButtonVariant::Outline)
//!     .size(ButtonSize::Small)
//!
//! // Submit button with click handler
//! cn::button("Submit")
//!     .button_type(ButtonType::Submit)
//!     .on_click(|_| println!("Submitted!"))
//! ```

use std::cell::OnceCell;
use std::rc::Rc;

use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

/// Button visual variants (like shadcn)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button - filled with primary color
    #[default]
    Primary,
    /// Secondary action - muted background
    Secondary,
    /// Destructive action - red/danger styling
    Destructive,
    /// Border only, transparent background
    Outline,
    /// No background, minimal styling
    Ghost,
    /// Appears as a link
    Link,
}

impl ButtonVariant {
    pub(crate) fn modifier(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Destructive => "destructive",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
            ButtonVariant::Link => "link",
        }
    }
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
    /// Icon-only button (square)
    Icon,
}

impl ButtonSize {
    pub(crate) fn modifier(&self) -> &'static str {
        match self {
            ButtonSize::Small => "sm",
            ButtonSize::Medium => "md",
            ButtonSize::Large => "lg",
            ButtonSize::Icon => "icon",
        }
    }
}

/// HTML `type` of the button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    fn as_str(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
            ButtonType::Reset => "reset",
        }
    }
}

type ClickHandler = Rc<dyn Fn(&EventContext)>;

#[derive(Clone, Default)]
struct ButtonConfig {
    label: String,
    id: Option<String>,
    variant: ButtonVariant,
    size: ButtonSize,
    button_type: ButtonType,
    disabled: bool,
    loading: bool,
    aria_label: Option<String>,
    classes: Vec<String>,
    on_click: Option<ClickHandler>,
}

/// Button component
pub struct Button {
    inner: Div,
}

impl Button {
    fn from_config(config: ButtonConfig) -> Self {
        let theme = ThemeState::get().theme();
        let inert = config.disabled || config.loading;

        let mut button = element("button")
            .attr("type", config.button_type.as_str())
            .class(theme.block("button"))
            .class(theme.modifier("button", config.variant.modifier()))
            .class(theme.modifier("button", config.size.modifier()))
            .class(theme.token(theme.radius()))
            .classes(&config.classes)
            .attr_opt("aria-label", config.aria_label.clone())
            .disabled(inert);

        if let Some(id) = &config.id {
            button = button.id(id);
        }

        if config.loading {
            button = button
                .aria_bool("busy", true)
                .data("loading", "true")
                .child(
                    span()
                        .class(theme.element("button", "spinner"))
                        .aria_bool("hidden", true),
                );
        }

        button = button.text(config.label.clone());

        if let (Some(handler), false) = (config.on_click.clone(), inert) {
            button = button.on_click(move |e| handler(e));
        }

        Self { inner: button }
    }
}

impl ElementBuilder for Button {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.inner.build(tree)
    }
}

/// Builder for creating Button components with fluent API
pub struct ButtonBuilder {
    config: ButtonConfig,
    built: OnceCell<Button>,
}

impl ButtonBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            config: ButtonConfig {
                label: label.into(),
                ..Default::default()
            },
            built: OnceCell::new(),
        }
    }

    fn get_or_build(&self) -> &Button {
        self.built
            .get_or_init(|| Button::from_config(self.config.clone()))
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.config.id = Some(id.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.config.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.config.size = size;
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.config.button_type = button_type;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config.disabled = disabled;
        self
    }

    /// Show a spinner and ignore clicks
    pub fn loading(mut self, loading: bool) -> Self {
        self.config.loading = loading;
        self
    }

    /// Accessible name, needed for icon-only buttons
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.config.aria_label = Some(label.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.config.classes.push(class.into());
        self
    }

    pub fn on_click<F>(mut self, handler: F) -> Self
    where
        F: Fn(&EventContext) + 'static,
    {
        self.config.on_click = Some(Rc::new(handler));
        self
    }
}

impl ElementBuilder for ButtonBuilder {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.get_or_build().inner.build(tree)
    }
}

/// Create a button with a label
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder::new(label)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_button_classes() {
        let tree = DomTree::from_element(
            &button("Delete")
                .variant(ButtonVariant::Destructive)
                .size(ButtonSize::Small),
        );
        let root = tree.root().unwrap();

        assert_eq!(tree.tag(root), Some("button"));
        assert_eq!(tree.attr(root, "type"), Some("button"));
        assert!(tree.has_class(root, "ember-button"));
        assert!(tree.has_class(root, "ember-button--destructive"));
        assert!(tree.has_class(root, "ember-button--sm"));
        assert_eq!(tree.text_content(root), "Delete");
    }

    #[test]
    fn test_button_click() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let tree = DomTree::from_element(
            &button("Save")
                .id("save")
                .on_click(move |_| counter.set(counter.get() + 1)),
        );

        tree.dispatch_to_id("save", EventContext::click()).unwrap();
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_disabled_and_loading_ignore_clicks() {
        for (disabled, loading) in [(true, false), (false, true)] {
            let clicks = Rc::new(Cell::new(0));
            let counter = clicks.clone();
            let tree = DomTree::from_element(
                &button("Save")
                    .id("save")
                    .disabled(disabled)
                    .loading(loading)
                    .on_click(move |_| counter.set(counter.get() + 1)),
            );

            let outcome = tree.dispatch_to_id("save", EventContext::click()).unwrap();
            assert_eq!(outcome.handled, 0);
            assert_eq!(clicks.get(), 0);
        }
    }

    #[test]
    fn test_loading_marks_busy() {
        let tree = DomTree::from_element(&button("Save").loading(true));
        let root = tree.root().unwrap();
        assert_eq!(tree.attr(root, "aria-busy"), Some("true"));
        assert!(tree.has_attr(root, "disabled"));
    }
}
