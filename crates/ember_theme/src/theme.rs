//! Theme and global theme state
//!
//! Class names follow a block/element/modifier scheme:
//!
//! - `ember-button` - block
//! - `ember-button--primary` - modifier
//! - `ember-card__title` - element
//! - `ember-radius-md` - token

use std::sync::{Arc, OnceLock, RwLock};

use crate::config::ThemeConfig;
use crate::tokens::{ColorScheme, RadiusToken, Token};

/// Resolved theme used by components to name their classes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    prefix: String,
    scheme: ColorScheme,
    radius: RadiusToken,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Self {
            prefix: config.prefix.clone(),
            scheme: config.scheme,
            radius: config.radius,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Default radius for controls and surfaces
    pub fn radius(&self) -> RadiusToken {
        self.radius
    }

    /// Block class, e.g. `ember-button`
    pub fn block(&self, block: &str) -> String {
        format!("{}-{}", self.prefix, block)
    }

    /// Modifier class, e.g. `ember-button--primary`
    pub fn modifier(&self, block: &str, modifier: &str) -> String {
        format!("{}-{}--{}", self.prefix, block, modifier)
    }

    /// Element class, e.g. `ember-card__title`
    pub fn element(&self, block: &str, element: &str) -> String {
        format!("{}-{}__{}", self.prefix, block, element)
    }

    /// Token class, e.g. `ember-radius-md`
    pub fn token<T: Token>(&self, token: T) -> String {
        format!("{}-{}-{}", self.prefix, T::GROUP, token.suffix())
    }

    /// Classes for the document root (`ember-root ember-scheme-dark`)
    pub fn root_classes(&self) -> Vec<String> {
        vec![self.block("root"), self.token(self.scheme)]
    }
}

/// Global theme state
///
/// Components read the active theme through `ThemeState::get().theme()`.
/// A default theme is installed on first access.
pub struct ThemeState {
    theme: RwLock<Arc<Theme>>,
}

static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

impl ThemeState {
    /// Get the global theme state
    pub fn get() -> &'static ThemeState {
        THEME_STATE.get_or_init(|| ThemeState {
            theme: RwLock::new(Arc::new(Theme::default())),
        })
    }

    /// Install a theme globally
    pub fn init(theme: Theme) {
        Self::get().set_theme(theme);
    }

    /// The active theme
    pub fn theme(&self) -> Arc<Theme> {
        match self.theme.read() {
            Ok(theme) => theme.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Replace the active theme
    pub fn set_theme(&self, theme: Theme) {
        tracing::debug!(
            "Theme set: prefix={} scheme={:?}",
            theme.prefix(),
            theme.scheme()
        );
        match self.theme.write() {
            Ok(mut slot) => *slot = Arc::new(theme),
            Err(poisoned) => *poisoned.into_inner() = Arc::new(theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{ShadowToken, SpacingToken};

    #[test]
    fn test_class_names() {
        let theme = Theme::default();
        assert_eq!(theme.block("button"), "ember-button");
        assert_eq!(theme.modifier("button", "primary"), "ember-button--primary");
        assert_eq!(theme.element("card", "title"), "ember-card__title");
    }

    #[test]
    fn test_token_classes() {
        let theme = Theme::default();
        assert_eq!(theme.token(RadiusToken::Lg), "ember-radius-lg");
        assert_eq!(theme.token(SpacingToken::Space2), "ember-gap-2");
        assert_eq!(theme.token(ShadowToken::Md), "ember-shadow-md");
    }

    #[test]
    fn test_custom_prefix_and_scheme() {
        let config = ThemeConfig {
            prefix: "acme".to_string(),
            scheme: ColorScheme::Dark,
            radius: RadiusToken::Sm,
        };
        let theme = Theme::from_config(&config);

        assert_eq!(theme.block("badge"), "acme-badge");
        assert_eq!(theme.root_classes(), vec!["acme-root", "acme-scheme-dark"]);
        assert_eq!(theme.radius(), RadiusToken::Sm);
    }

    #[test]
    fn test_global_state_has_default() {
        let theme = ThemeState::get().theme();
        assert!(!theme.prefix().is_empty());
    }
}
