//! Design tokens
//!
//! Tokens never carry concrete values here. Each one resolves to a class
//! suffix, and the stylesheet decides what `ember-radius-md` looks like.

use serde::{Deserialize, Serialize};

/// A design token that maps to a class suffix
pub trait Token: Copy {
    /// Class group, e.g. `radius` in `ember-radius-md`
    const GROUP: &'static str;

    /// Class suffix, e.g. `md` in `ember-radius-md`
    fn suffix(&self) -> &'static str;
}

/// Spacing scale used for gaps and padding
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpacingToken {
    Space0,
    Space1,
    Space2,
    Space3,
    #[default]
    Space4,
    Space6,
    Space8,
    Space12,
}

impl Token for SpacingToken {
    const GROUP: &'static str = "gap";

    fn suffix(&self) -> &'static str {
        match self {
            SpacingToken::Space0 => "0",
            SpacingToken::Space1 => "1",
            SpacingToken::Space2 => "2",
            SpacingToken::Space3 => "3",
            SpacingToken::Space4 => "4",
            SpacingToken::Space6 => "6",
            SpacingToken::Space8 => "8",
            SpacingToken::Space12 => "12",
        }
    }
}

/// Corner radius scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RadiusToken {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Full,
}

impl Token for RadiusToken {
    const GROUP: &'static str = "radius";

    fn suffix(&self) -> &'static str {
        match self {
            RadiusToken::None => "none",
            RadiusToken::Sm => "sm",
            RadiusToken::Md => "md",
            RadiusToken::Lg => "lg",
            RadiusToken::Full => "full",
        }
    }
}

/// Elevation scale
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowToken {
    None,
    #[default]
    Sm,
    Md,
    Lg,
}

impl Token for ShadowToken {
    const GROUP: &'static str = "shadow";

    fn suffix(&self) -> &'static str {
        match self {
            ShadowToken::None => "none",
            ShadowToken::Sm => "sm",
            ShadowToken::Md => "md",
            ShadowToken::Lg => "lg",
        }
    }
}

/// Light or dark color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

impl Token for ColorScheme {
    const GROUP: &'static str = "scheme";

    fn suffix(&self) -> &'static str {
        match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_suffixes() {
        assert_eq!(SpacingToken::Space2.suffix(), "2");
        assert_eq!(RadiusToken::Full.suffix(), "full");
        assert_eq!(ShadowToken::Lg.suffix(), "lg");
        assert_eq!(ColorScheme::Dark.suffix(), "dark");
    }

    #[test]
    fn test_token_defaults() {
        assert_eq!(SpacingToken::default(), SpacingToken::Space4);
        assert_eq!(RadiusToken::default(), RadiusToken::Md);
        assert_eq!(ColorScheme::default(), ColorScheme::Light);
    }
}
