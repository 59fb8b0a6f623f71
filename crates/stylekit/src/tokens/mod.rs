//! Design tokens: scales and themes.
//!
//! A [`Theme`] is a set of named [`Scale`]s (`colors`, `space`, `sizes`, ...),
//! each mapping token names to literal CSS values. Themes are values: they are
//! built once and swapped wholesale when the color mode changes, never edited
//! in place while in use.
//!
//! ## Built-in Themes
//!
//! [`Theme::base_light`] carries the full token vocabulary. [`Theme::base_dark`]
//! is the same vocabulary with the color and shadow tokens replaced by their
//! dark counterparts, so every token resolvable in light mode also resolves in
//! dark mode.
//!
//! ## Overrides
//!
//! Consumer overrides merge shallowly per scale: individual tokens are added or
//! replaced, scales not mentioned are untouched, and unknown scale names create
//! new scales.
//!
//! ```rust
//! use stylekit::{Theme, TokenOverrides};
//!
//! let overrides = TokenOverrides::new()
//!     .token("colors", "primary9", "#ff0066")
//!     .token("brand", "logo", "#123456");
//!
//! let theme = Theme::base_light().with_overrides(&overrides);
//! assert_eq!(theme.resolve("colors", "primary9"), Some("#ff0066"));
//! assert_eq!(theme.resolve("colors", "primary1"), Some("#fdfdfe"));
//! assert_eq!(theme.resolve("brand", "logo"), Some("#123456"));
//! assert_eq!(theme.resolve("colors", "nope"), None);
//! ```

pub mod colors;
pub mod scales;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A mapping from token name to literal CSS value.
pub type Scale = IndexMap<String, String>;

/// A token value as written in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl TokenValue {
    /// Renders the value as CSS text.
    pub fn to_css(&self) -> String {
        match self {
            TokenValue::Bool(b) => b.to_string(),
            TokenValue::Number(n) => n.to_string(),
            TokenValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for TokenValue {
    fn from(value: &str) -> Self {
        TokenValue::Text(value.to_string())
    }
}

impl From<String> for TokenValue {
    fn from(value: String) -> Self {
        TokenValue::Text(value)
    }
}

impl From<f64> for TokenValue {
    fn from(value: f64) -> Self {
        TokenValue::Number(value)
    }
}

impl From<bool> for TokenValue {
    fn from(value: bool) -> Self {
        TokenValue::Bool(value)
    }
}

/// Partial token overrides, keyed by scale then token.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenOverrides {
    scales: IndexMap<String, IndexMap<String, TokenValue>>,
}

impl TokenOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one token override, returning `self` for chaining.
    pub fn token(
        mut self,
        scale: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<TokenValue>,
    ) -> Self {
        self.scales
            .entry(scale.into())
            .or_default()
            .insert(name.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.scales.values().all(IndexMap::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &IndexMap<String, TokenValue>)> {
        self.scales.iter()
    }
}

/// A named set of token scales.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    name: Option<String>,
    scales: IndexMap<String, Scale>,
}

impl Theme {
    /// Creates an empty, unnamed theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty theme with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            scales: IndexMap::new(),
        }
    }

    /// The built-in light theme.
    pub fn base_light() -> Self {
        Self::named("light")
            .add_scale("colors", colors::light_colors())
            .add_scale("space", scales::space())
            .add_scale("sizes", scales::sizes())
            .add_scale("fonts", scales::fonts())
            .add_scale("fontSizes", scales::font_sizes())
            .add_scale("fontWeights", scales::font_weights())
            .add_scale("letterSpacings", scales::letter_spacings())
            .add_scale("lineHeights", scales::line_heights())
            .add_scale("radii", scales::radii())
            .add_scale("shadows", scales::shadows())
            .add_scale("zIndices", scales::z_indices())
    }

    /// The built-in dark theme: the light vocabulary with dark colors and shadows.
    pub fn base_dark() -> Self {
        Self::base_light()
            .merge(
                Self::new()
                    .add_scale("colors", colors::dark_colors())
                    .add_scale("shadows", scales::dark_shadows()),
            )
            .with_name("dark")
    }

    /// Sets the name on this theme, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Adds or replaces a whole scale.
    pub fn add_scale(mut self, name: impl Into<String>, scale: Scale) -> Self {
        self.scales.insert(name.into(), scale);
        self
    }

    /// Adds or replaces a single token.
    pub fn add_token(
        mut self,
        scale: impl Into<String>,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.scales
            .entry(scale.into())
            .or_default()
            .insert(name.into(), value.into());
        self
    }

    /// Looks up a token. `None` means unresolved; callers pass the raw value through.
    pub fn resolve(&self, scale: &str, token: &str) -> Option<&str> {
        self.scales
            .get(scale)
            .and_then(|s| s.get(token))
            .map(String::as_str)
    }

    pub fn scale(&self, name: &str) -> Option<&Scale> {
        self.scales.get(name)
    }

    pub fn scales(&self) -> impl Iterator<Item = (&String, &Scale)> {
        self.scales.iter()
    }

    /// Returns true if no tokens are defined.
    pub fn is_empty(&self) -> bool {
        self.scales.values().all(Scale::is_empty)
    }

    /// Returns the total number of tokens across all scales.
    pub fn len(&self) -> usize {
        self.scales.values().map(Scale::len).sum()
    }

    /// Merges another theme into this one, shallowly per scale.
    ///
    /// Tokens from `other` take precedence. The name of `self` is kept.
    pub fn merge(mut self, other: Theme) -> Self {
        for (scale_name, scale) in other.scales {
            self.scales.entry(scale_name).or_default().extend(scale);
        }
        self
    }

    /// Returns a copy of this theme with consumer overrides applied.
    pub fn with_overrides(&self, overrides: &TokenOverrides) -> Self {
        let mut theme = self.clone();
        for (scale_name, tokens) in overrides.iter() {
            let scale = theme.scales.entry(scale_name.clone()).or_default();
            for (token, value) in tokens {
                scale.insert(token.clone(), value.to_css());
            }
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_new_is_empty() {
        let theme = Theme::new();
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
        assert_eq!(theme.name(), None);
    }

    #[test]
    fn test_base_light_has_all_scales() {
        let theme = Theme::base_light();
        for scale in [
            "colors",
            "space",
            "sizes",
            "fonts",
            "fontSizes",
            "fontWeights",
            "letterSpacings",
            "lineHeights",
            "radii",
            "shadows",
            "zIndices",
        ] {
            assert!(theme.scale(scale).is_some(), "missing scale {}", scale);
        }
        assert_eq!(theme.name(), Some("light"));
    }

    #[test]
    fn test_dark_changes_value_not_existence() {
        let light = Theme::base_light();
        let dark = Theme::base_dark();

        let l = light.resolve("colors", "primary1").unwrap();
        let d = dark.resolve("colors", "primary1").unwrap();
        assert_ne!(l, d);

        for (scale_name, scale) in light.scales() {
            for token in scale.keys() {
                assert!(
                    dark.resolve(scale_name, token).is_some(),
                    "{}.{} missing in dark",
                    scale_name,
                    token
                );
            }
        }
    }

    #[test]
    fn test_dark_keeps_shared_tokens() {
        let dark = Theme::base_dark();
        assert_eq!(dark.resolve("colors", "white"), Some("#ffffff"));
        assert_eq!(dark.resolve("shadows", "outline"), Theme::base_light().resolve("shadows", "outline"));
        assert_eq!(dark.name(), Some("dark"));
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let theme = Theme::base_light();
        let first = theme.resolve("colors", "primary9").map(str::to_string);
        for _ in 0..10 {
            assert_eq!(theme.resolve("colors", "primary9").map(str::to_string), first);
        }
    }

    #[test]
    fn test_overrides_are_shallow_per_scale() {
        let overrides = TokenOverrides::new().token("space", "4", "20px");
        let theme = Theme::base_light().with_overrides(&overrides);
        assert_eq!(theme.resolve("space", "4"), Some("20px"));
        assert_eq!(theme.resolve("space", "2"), Some("0.5rem"));
    }

    #[test]
    fn test_overrides_stringify_values() {
        let overrides = TokenOverrides::new()
            .token("zIndices", "custom", 42.0)
            .token("flags", "enabled", true);
        let theme = Theme::new().with_overrides(&overrides);
        assert_eq!(theme.resolve("zIndices", "custom"), Some("42"));
        assert_eq!(theme.resolve("flags", "enabled"), Some("true"));
    }

    #[test]
    fn test_overrides_do_not_mutate_source() {
        let base = Theme::base_light();
        let overrides = TokenOverrides::new().token("colors", "primary9", "red");
        let _ = base.with_overrides(&overrides);
        assert_ne!(base.resolve("colors", "primary9"), Some("red"));
    }

    #[test]
    fn test_merge_keeps_name_and_overrides_tokens() {
        let a = Theme::named("a").add_token("colors", "x", "1");
        let b = Theme::named("b")
            .add_token("colors", "x", "2")
            .add_token("colors", "y", "3");
        let merged = a.merge(b);
        assert_eq!(merged.name(), Some("a"));
        assert_eq!(merged.resolve("colors", "x"), Some("2"));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_token_overrides_from_yaml() {
        let overrides: TokenOverrides = serde_yaml::from_str(
            r##"
            colors:
              primary9: "#000"
            zIndices:
              modal: 9000
            "##,
        )
        .unwrap();
        let theme = Theme::base_light().with_overrides(&overrides);
        assert_eq!(theme.resolve("colors", "primary9"), Some("#000"));
        assert_eq!(theme.resolve("zIndices", "modal"), Some("9000"));
    }
}
