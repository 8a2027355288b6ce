//! Card component for content containers
//!
//! # Example
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! cn::card()
//!     .child(cn::card_header().title("Card Title").description("Description"))
//!     .child(cn::card_content().child(text("Main content goes here")))
//!     .child(cn::card_footer().child(cn::button("Action")))
//! ```

use std::ops::{Deref, DerefMut};

use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::{ShadowToken, ThemeState};

/// Card container
///
/// Implements `Deref` to `Div` for inspection.
pub struct Card {
    inner: Div,
}

impl Default for Card {
    fn default() -> Self {
        Self::new()
    }
}

impl Card {
    pub fn new() -> Self {
        let theme = ThemeState::get().theme();
        Self {
            inner: div()
                .class(theme.block("card"))
                .class(theme.token(theme.radius()))
                .class(theme.token(ShadowToken::Sm)),
        }
    }

    pub fn child(mut self, content: impl ElementBuilder + 'static) -> Self {
        self.inner = self.inner.child(content);
        self
    }

    pub fn shadow(mut self, shadow: ShadowToken) -> Self {
        let theme = ThemeState::get().theme();
        self.inner = self.inner.class(theme.token(shadow));
        self
    }

    /// Label the card as a region
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.inner = self.inner.role("region").aria("label", label);
        self
    }
}

impl Deref for Card {
    type Target = Div;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Card {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl ElementBuilder for Card {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.inner.build(tree)
    }
}

pub fn card() -> Card {
    Card::new()
}

/// Card header with title and description
#[derive(Default)]
pub struct CardHeader {
    title: Option<String>,
    description: Option<String>,
}

impl CardHeader {
    pub fn new() -> Self {
        Self::default()
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

impl ElementBuilder for CardHeader {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();
        div()
            .class(theme.element("card", "header"))
            .child_opt(self.title.as_ref().map(|title| {
                heading(3)
                    .class(theme.element("card", "title"))
                    .text(title.clone())
            }))
            .child_opt(self.description.as_ref().map(|desc| {
                paragraph()
                    .class(theme.element("card", "description"))
                    .text(desc.clone())
            }))
            .build(tree)
    }
}

pub fn card_header() -> CardHeader {
    CardHeader::new()
}

/// Card body
pub struct CardContent {
    inner: Div,
}

impl Default for CardContent {
    fn default() -> Self {
        Self::new()
    }
}

impl CardContent {
    pub fn new() -> Self {
        let theme = ThemeState::get().theme();
        Self {
            inner: div().class(theme.element("card", "content")),
        }
    }

    pub fn child(mut self, content: impl ElementBuilder + 'static) -> Self {
        self.inner = self.inner.child(content);
        self
    }
}

impl ElementBuilder for CardContent {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.inner.build(tree)
    }
}

pub fn card_content() -> CardContent {
    CardContent::new()
}

/// Card footer, typically holding actions
pub struct CardFooter {
    inner: Div,
}

impl Default for CardFooter {
    fn default() -> Self {
        Self::new()
    }
}

impl CardFooter {
    pub fn new() -> Self {
        let theme = ThemeState::get().theme();
        Self {
            inner: div().class(theme.element("card", "footer")),
        }
    }

    pub fn child(mut self, content: impl ElementBuilder + 'static) -> Self {
        self.inner = self.inner.child(content);
        self
    }
}

impl ElementBuilder for CardFooter {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.inner.build(tree)
    }
}

pub fn card_footer() -> CardFooter {
    CardFooter::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_structure() {
        let ui = card()
            .child(card_header().title("Plan").description("Pick one"))
            .child(card_content().child(text("Body")))
            .child(card_footer().child(text("Actions")));
        let tree = DomTree::from_element(&ui);
        let root = tree.root().unwrap();

        assert!(tree.has_class(root, "ember-card"));
        assert_eq!(tree.children(root).len(), 3);
        assert_eq!(tree.find_by_class("ember-card__title").len(), 1);
        assert_eq!(tree.text_content(root), "PlanPick oneBodyActions");
    }

    #[test]
    fn test_card_region_label() {
        let c = card().aria_label("Billing");
        assert_eq!(c.get_attr("role"), Some("region"));
        assert_eq!(c.get_attr("aria-label"), Some("Billing"));
    }
}
