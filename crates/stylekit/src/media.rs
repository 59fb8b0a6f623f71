//! Named media conditions.
//!
//! Style objects nest conditional blocks under `@<name>` keys. The registry maps
//! names to media queries; expansion is purely textual and the browser does the
//! actual matching.
//!
//! | Key | Expands to |
//! |-----|------------|
//! | `@sm` | `@media (min-width: 640px)` |
//! | `@initial` | no condition, merged into the enclosing block |
//! | `@supports (display: grid)` | emitted verbatim |
//!
//! ```rust
//! use stylekit::{MediaRegistry, Condition};
//!
//! let media = MediaRegistry::default();
//! assert_eq!(
//!     media.expand("@md"),
//!     Condition::AtRule("@media (min-width: 768px)".to_string())
//! );
//! assert_eq!(media.expand("@initial"), Condition::Initial);
//! ```

use indexmap::IndexMap;

/// The key that means "no condition" in responsive values.
pub const INITIAL_KEY: &str = "@initial";

/// Result of expanding an `@` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// `@initial`: the declarations belong to the unconditioned block.
    Initial,
    /// An at-rule prelude, e.g. `@media (min-width: 640px)`.
    AtRule(String),
}

/// Table of named conditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRegistry {
    conditions: IndexMap<String, String>,
}

impl MediaRegistry {
    /// Creates an empty registry. Use [`MediaRegistry::default`] for the built-ins.
    pub fn empty() -> Self {
        Self {
            conditions: IndexMap::new(),
        }
    }

    /// Adds or replaces a condition, returning `self` for chaining.
    ///
    /// `query` is the media query without the `@media` prefix.
    pub fn with(mut self, name: impl Into<String>, query: impl Into<String>) -> Self {
        self.conditions.insert(name.into(), query.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.conditions.get(name).map(String::as_str)
    }

    /// Iterates registered conditions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.conditions.iter()
    }

    /// Expands an `@` key. Unknown names are returned verbatim.
    pub fn expand(&self, key: &str) -> Condition {
        if key == INITIAL_KEY {
            return Condition::Initial;
        }
        let name = key.strip_prefix('@').unwrap_or(key);
        match self.conditions.get(name) {
            Some(query) => Condition::AtRule(format!("@media {}", query)),
            None => {
                tracing::trace!(condition = key, "unregistered condition emitted verbatim");
                Condition::AtRule(key.to_string())
            }
        }
    }
}

impl Default for MediaRegistry {
    fn default() -> Self {
        Self::empty()
            .with("sm", "(min-width: 640px)")
            .with("md", "(min-width: 768px)")
            .with("lg", "(min-width: 1024px)")
            .with("xl", "(min-width: 1280px)")
            .with("2xl", "(min-width: 1536px)")
            .with("reduce-motion", "(prefers-reduced-motion: reduce)")
            .with("light", "(prefers-color-scheme: light)")
            .with("dark", "(prefers-color-scheme: dark)")
    }
}

/// Returns true if a style key is a condition key.
pub fn is_condition_key(key: &str) -> bool {
    key.starts_with('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_breakpoints() {
        let media = MediaRegistry::default();
        assert_eq!(
            media.expand("@sm"),
            Condition::AtRule("@media (min-width: 640px)".into())
        );
        assert_eq!(
            media.expand("@2xl"),
            Condition::AtRule("@media (min-width: 1536px)".into())
        );
        assert_eq!(
            media.expand("@reduce-motion"),
            Condition::AtRule("@media (prefers-reduced-motion: reduce)".into())
        );
        assert_eq!(
            media.expand("@dark"),
            Condition::AtRule("@media (prefers-color-scheme: dark)".into())
        );
    }

    #[test]
    fn test_unknown_condition_is_verbatim() {
        let media = MediaRegistry::default();
        assert_eq!(
            media.expand("@media (min-width: 900px)"),
            Condition::AtRule("@media (min-width: 900px)".into())
        );
        assert_eq!(
            media.expand("@supports (display: grid)"),
            Condition::AtRule("@supports (display: grid)".into())
        );
        assert_eq!(media.expand("@tablet"), Condition::AtRule("@tablet".into()));
    }

    #[test]
    fn test_custom_condition() {
        let media = MediaRegistry::empty().with("tablet", "(min-width: 600px) and (max-width: 900px)");
        assert_eq!(
            media.expand("@tablet"),
            Condition::AtRule("@media (min-width: 600px) and (max-width: 900px)".into())
        );
        assert_eq!(media.expand("@sm"), Condition::AtRule("@sm".into()));
    }

    #[test]
    fn test_initial() {
        assert_eq!(MediaRegistry::empty().expand("@initial"), Condition::Initial);
        assert!(is_condition_key("@sm"));
        assert!(!is_condition_key("&:hover"));
    }
}
