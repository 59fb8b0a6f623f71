//! Style objects: the data the engine compiles.
//!
//! A [`StyleObject`] is an insertion-ordered map from a CSS property name (or a
//! nested selector / `@condition` key) to a [`StyleEntry`]. Entries are either
//! leaf [`CssValue`]s or nested style objects.
//!
//! Style objects compose by [`merge_styles`]: left to right, later entries
//! override earlier ones per key. Nested blocks merge one level deep and then
//! override at the leaf; deeper blocks are replaced wholesale.
//!
//! ```rust
//! use stylekit::{merge_styles, style};
//!
//! let base = style! { "color" => "red", "&:hover" => style! { "color" => "blue" } };
//! let over = style! { "&:hover" => style! { "opacity" => 0.5 } };
//!
//! let merged = merge_styles([&base, &over]);
//! let hover = merged.get("&:hover").and_then(|e| e.as_nested()).unwrap();
//! assert_eq!(hover.len(), 2);
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A leaf CSS value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CssValue {
    /// A numeric value. Rendered with `px` unless the property is unitless.
    Number(f64),
    /// A raw string value, possibly containing `$token` references.
    Text(String),
}

impl CssValue {
    /// Returns the text if this is a string value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CssValue::Text(s) => Some(s),
            CssValue::Number(_) => None,
        }
    }
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CssValue::Number(n) => write!(f, "{}", n),
            CssValue::Text(s) => f.write_str(s),
        }
    }
}

/// A value in a [`StyleObject`]: a leaf value or a nested block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleEntry {
    /// A CSS declaration value.
    Value(CssValue),
    /// A nested selector, condition or responsive block.
    Nested(StyleObject),
}

impl StyleEntry {
    /// Returns the leaf value, if any.
    pub fn as_value(&self) -> Option<&CssValue> {
        match self {
            StyleEntry::Value(v) => Some(v),
            StyleEntry::Nested(_) => None,
        }
    }

    /// Returns the nested block, if any.
    pub fn as_nested(&self) -> Option<&StyleObject> {
        match self {
            StyleEntry::Nested(obj) => Some(obj),
            StyleEntry::Value(_) => None,
        }
    }

    /// Returns the leaf text, if this entry is a string value.
    pub fn as_text(&self) -> Option<&str> {
        self.as_value().and_then(CssValue::as_text)
    }
}

impl From<&str> for StyleEntry {
    fn from(value: &str) -> Self {
        StyleEntry::Value(CssValue::Text(value.to_string()))
    }
}

impl From<String> for StyleEntry {
    fn from(value: String) -> Self {
        StyleEntry::Value(CssValue::Text(value))
    }
}

impl From<f64> for StyleEntry {
    fn from(value: f64) -> Self {
        StyleEntry::Value(CssValue::Number(value))
    }
}

impl From<i32> for StyleEntry {
    fn from(value: i32) -> Self {
        StyleEntry::Value(CssValue::Number(f64::from(value)))
    }
}

impl From<u32> for StyleEntry {
    fn from(value: u32) -> Self {
        StyleEntry::Value(CssValue::Number(f64::from(value)))
    }
}

impl From<CssValue> for StyleEntry {
    fn from(value: CssValue) -> Self {
        StyleEntry::Value(value)
    }
}

impl From<StyleObject> for StyleEntry {
    fn from(value: StyleObject) -> Self {
        StyleEntry::Nested(value)
    }
}

/// An ordered mapping of CSS properties and nested blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleObject {
    entries: IndexMap<String, StyleEntry>,
}

impl StyleObject {
    /// Creates an empty style object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a key, returning `self` for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<StyleEntry>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a nested block, returning `self` for chaining.
    pub fn nest(mut self, key: impl Into<String>, block: StyleObject) -> Self {
        self.insert(key, StyleEntry::Nested(block));
        self
    }

    /// Inserts a key. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<StyleEntry>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&StyleEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<StyleEntry> {
        self.entries.shift_remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleEntry)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merges `other` on top of `self`.
    ///
    /// Top-level keys from `other` override. When both sides hold a nested
    /// block under the same key, the inner keys merge and `other` wins per
    /// inner key; anything deeper is replaced wholesale.
    pub fn merge(&mut self, other: &StyleObject) {
        for (key, entry) in &other.entries {
            match (self.entries.get_mut(key), entry) {
                (Some(StyleEntry::Nested(existing)), StyleEntry::Nested(incoming)) => {
                    for (inner_key, inner) in &incoming.entries {
                        existing.entries.insert(inner_key.clone(), inner.clone());
                    }
                }
                _ => {
                    self.entries.insert(key.clone(), entry.clone());
                }
            }
        }
    }
}

impl<K: Into<String>, V: Into<StyleEntry>> FromIterator<(K, V)> for StyleObject {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut obj = StyleObject::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}

impl IntoIterator for StyleObject {
    type Item = (String, StyleEntry);
    type IntoIter = indexmap::map::IntoIter<String, StyleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a StyleObject {
    type Item = (&'a String, &'a StyleEntry);
    type IntoIter = indexmap::map::Iter<'a, String, StyleEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Merges a sequence of style objects left to right.
pub fn merge_styles<'a, I>(styles: I) -> StyleObject
where
    I: IntoIterator<Item = &'a StyleObject>,
{
    let mut merged = StyleObject::new();
    for style in styles {
        merged.merge(style);
    }
    merged
}

/// Builds a [`StyleObject`] from `key => value` pairs.
///
/// ```rust
/// use stylekit::style;
///
/// let s = style! {
///     "color" => "$primary9",
///     "padding" => "$4",
///     "&:hover" => style! { "opacity" => 0.8 },
/// };
/// assert_eq!(s.len(), 3);
/// ```
#[macro_export]
macro_rules! style {
    () => { $crate::StyleObject::new() };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut obj = $crate::StyleObject::new();
        $( obj.insert($key, $value); )+
        obj
    }};
}
