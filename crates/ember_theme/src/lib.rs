//! Ember Theme
//!
//! Components are styled purely through class names. The theme decides the
//! class prefix, the color scheme and the default radius; design tokens map
//! to class suffixes that a stylesheet fills in.

pub mod config;
pub mod theme;
pub mod tokens;

pub use config::{ThemeConfig, ThemeError};
pub use theme::{Theme, ThemeState};
pub use tokens::{ColorScheme, RadiusToken, ShadowToken, SpacingToken, Token};
