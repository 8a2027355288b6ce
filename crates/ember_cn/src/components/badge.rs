//! Badge component for status indicators
//!
//! Small labeled indicators for status, counts, or categories.
//!
//! # Example
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! cn::badge("New")
//! cn::badge("Success").variant(BadgeVariant::Success)
//! cn::badge("Draft").variant(BadgeVariant::Outline)
//! ```

use std::ops::{Deref, DerefMut};

use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::{RadiusToken, ThemeState};

/// Badge visual variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Success,
    Warning,
    Destructive,
    /// Border only
    Outline,
}

impl BadgeVariant {
    fn modifier(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "default",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Badge component for status indicators
///
/// Implements `Deref` to `Div` for inspection.
pub struct Badge {
    inner: Div,
    label: String,
    variant: BadgeVariant,
}

impl Badge {
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_variant(label, BadgeVariant::default())
    }

    fn with_variant(label: impl Into<String>, variant: BadgeVariant) -> Self {
        let theme = ThemeState::get().theme();
        let label = label.into();

        let badge = span()
            .class(theme.block("badge"))
            .class(theme.modifier("badge", variant.modifier()))
            // Pill shape
            .class(theme.token(RadiusToken::Full))
            .text(label.clone());

        Self {
            inner: badge,
            label,
            variant,
        }
    }

    /// Set the badge variant
    pub fn variant(self, variant: BadgeVariant) -> Self {
        Self::with_variant(self.label, variant)
    }

    pub fn current_variant(&self) -> BadgeVariant {
        self.variant
    }
}

impl Deref for Badge {
    type Target = Div;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for Badge {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl ElementBuilder for Badge {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        self.inner.build(tree)
    }
}

/// Create a badge with text
pub fn badge(label: impl Into<String>) -> Badge {
    Badge::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_default() {
        let b = badge("New");
        assert_eq!(b.tag(), "span");
        assert!(b.has_class("ember-badge--default"));
        assert!(b.has_class("ember-radius-full"));
    }

    #[test]
    fn test_badge_variant_replaces_modifier() {
        let b = badge("Error").variant(BadgeVariant::Destructive);
        assert!(b.has_class("ember-badge--destructive"));
        assert!(!b.has_class("ember-badge--default"));
        assert_eq!(b.current_variant(), BadgeVariant::Destructive);

        let tree = DomTree::from_element(&b);
        assert_eq!(tree.text_content(tree.root().unwrap()), "Error");
    }
}
