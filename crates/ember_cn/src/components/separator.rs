//! Separator component for visual dividers
//!
//! ```ignore
//! use ember_cn::prelude::*;
//!
//! cn::separator()
//! cn::separator().vertical()
//! cn::separator().decorative(false)
//! ```

use ember_dom::prelude::*;
use ember_dom::tree::{DomTree, NodeId};
use ember_theme::ThemeState;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeparatorOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl SeparatorOrientation {
    fn as_str(&self) -> &'static str {
        match self {
            SeparatorOrientation::Horizontal => "horizontal",
            SeparatorOrientation::Vertical => "vertical",
        }
    }
}

/// Separator component
///
/// Decorative by default: purely visual and hidden from assistive
/// technology. A semantic separator gets `role="separator"`.
#[derive(Clone, Copy, Debug)]
pub struct Separator {
    orientation: SeparatorOrientation,
    decorative: bool,
}

impl Default for Separator {
    fn default() -> Self {
        Self::new()
    }
}

impl Separator {
    pub fn new() -> Self {
        Self {
            orientation: SeparatorOrientation::Horizontal,
            decorative: true,
        }
    }

    pub fn vertical(mut self) -> Self {
        self.orientation = SeparatorOrientation::Vertical;
        self
    }

    pub fn horizontal(mut self) -> Self {
        self.orientation = SeparatorOrientation::Horizontal;
        self
    }

    pub fn decorative(mut self, decorative: bool) -> Self {
        self.decorative = decorative;
        self
    }
}

impl ElementBuilder for Separator {
    fn build(&self, tree: &mut DomTree) -> NodeId {
        let theme = ThemeState::get().theme();
        let orientation = self.orientation.as_str();

        let mut sep = div()
            .class(theme.block("separator"))
            .class(theme.modifier("separator", orientation))
            .data("orientation", orientation);

        sep = if self.decorative {
            sep.role("none")
        } else {
            sep.role("separator").aria("orientation", orientation)
        };

        sep.build(tree)
    }
}

pub fn separator() -> Separator {
    Separator::new()
}
