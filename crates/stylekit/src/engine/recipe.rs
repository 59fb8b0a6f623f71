//! Variant recipes: a base style plus styles selected per variant axis.
//!
//! ```rust
//! use stylekit::{style, Engine, Recipe, VariantProps};
//!
//! let engine = Engine::new();
//! let button = engine.recipe(
//!     Recipe::new(style! { "display" => "inline-flex" })
//!         .variant("size", "sm", style! { "h" => "$8" })
//!         .variant("size", "md", style! { "h" => "$10" })
//!         .default_variant("size", "md"),
//! );
//!
//! let md = button.class(&engine, &VariantProps::new());
//! let also_md = button.class(&engine, &VariantProps::new().set("size", "md"));
//! assert_eq!(md, also_md);
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use super::{Engine, GeneratedClass};
use crate::tokens::Theme;
use crate::value::StyleObject;

/// Selected variant values, keyed by axis name.
///
/// Boolean axes are stored as `"true"` / `"false"`. When deserializing,
/// booleans and numbers are accepted and stored as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "IndexMap<String, RawVariantValue>")]
pub struct VariantProps {
    values: IndexMap<String, String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVariantValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl From<IndexMap<String, RawVariantValue>> for VariantProps {
    fn from(raw: IndexMap<String, RawVariantValue>) -> Self {
        let values = raw
            .into_iter()
            .map(|(axis, value)| {
                let value = match value {
                    RawVariantValue::Bool(b) => b.to_string(),
                    RawVariantValue::Number(n) => n.to_string(),
                    RawVariantValue::Text(s) => s,
                };
                (axis, value)
            })
            .collect();
        Self { values }
    }
}

impl VariantProps {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an axis, returning `self` for chaining.
    pub fn set(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(axis, value);
        self
    }

    /// Sets a boolean axis, returning `self` for chaining.
    pub fn flag(self, axis: impl Into<String>, on: bool) -> Self {
        self.set(axis, on.to_string())
    }

    pub fn insert(&mut self, axis: impl Into<String>, value: impl Into<String>) {
        self.values.insert(axis.into(), value.into());
    }

    pub fn get(&self, axis: &str) -> Option<&str> {
        self.values.get(axis).map(String::as_str)
    }

    /// Returns true if a boolean axis is set to `"true"`.
    pub fn is_on(&self, axis: &str) -> bool {
        self.get(axis) == Some("true")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if every axis in `self` has the same value in `other`.
    pub fn is_subset_of(&self, other: &VariantProps) -> bool {
        self.values
            .iter()
            .all(|(axis, value)| other.get(axis) == Some(value.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for VariantProps {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut props = VariantProps::new();
        for (axis, value) in iter {
            props.insert(axis, value);
        }
        props
    }
}

/// A style applied when every listed axis has the listed value.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundVariant {
    pub when: VariantProps,
    pub css: StyleObject,
}

/// Base style, variant styles per axis, compound variants and defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recipe {
    base: StyleObject,
    variants: IndexMap<String, IndexMap<String, StyleObject>>,
    compound_variants: Vec<CompoundVariant>,
    default_variants: VariantProps,
}

impl Recipe {
    pub fn new(base: StyleObject) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Adds the style for `axis = value`.
    pub fn variant(
        mut self,
        axis: impl Into<String>,
        value: impl Into<String>,
        style: StyleObject,
    ) -> Self {
        self.variants
            .entry(axis.into())
            .or_default()
            .insert(value.into(), style);
        self
    }

    pub fn compound(mut self, when: VariantProps, css: StyleObject) -> Self {
        self.compound_variants.push(CompoundVariant { when, css });
        self
    }

    pub fn default_variant(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_variants.insert(axis, value);
        self
    }

    pub fn base(&self) -> &StyleObject {
        &self.base
    }

    /// Axis names, in declaration order.
    pub fn axes(&self) -> impl Iterator<Item = &String> {
        self.variants.keys()
    }

    pub fn default_variants(&self) -> &VariantProps {
        &self.default_variants
    }

    /// Resolves every declared axis: explicit value, else the recipe default.
    ///
    /// Axes with neither are left out.
    pub fn selection(&self, explicit: &VariantProps) -> VariantProps {
        self.variants
            .keys()
            .filter_map(|axis| {
                explicit
                    .get(axis)
                    .or_else(|| self.default_variants.get(axis))
                    .map(|value| (axis.clone(), value.to_string()))
            })
            .collect()
    }

    /// The style fragments for a resolved selection, in merge order.
    pub fn fragments(&self, selection: &VariantProps) -> Vec<&StyleObject> {
        let mut fragments = vec![&self.base];
        for (axis, values) in &self.variants {
            let Some(value) = selection.get(axis) else {
                continue;
            };
            match values.get(value) {
                Some(style) => fragments.push(style),
                None => tracing::trace!(axis = %axis, value, "no style for variant value"),
            }
        }
        fragments.extend(
            self.compound_variants
                .iter()
                .filter(|compound| compound.when.is_subset_of(selection))
                .map(|compound| &compound.css),
        );
        fragments
    }
}

/// A recipe registered with an engine.
#[derive(Debug, Clone)]
pub struct CompiledRecipe {
    recipe: Recipe,
}

impl CompiledRecipe {
    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Compiles the class for `explicit` variants against the engine theme.
    pub fn class(&self, engine: &Engine, explicit: &VariantProps) -> GeneratedClass {
        self.class_with_theme(engine, engine.theme(), explicit)
    }

    pub fn class_with_theme(
        &self,
        engine: &Engine,
        theme: &Theme,
        explicit: &VariantProps,
    ) -> GeneratedClass {
        let selection = self.recipe.selection(explicit);
        engine.css_with_theme(theme, self.recipe.fragments(&selection))
    }
}

impl Engine {
    /// Registers a recipe for variant-driven class generation.
    pub fn recipe(&self, recipe: Recipe) -> CompiledRecipe {
        tracing::debug!(
            axes = recipe.variants.len(),
            compounds = recipe.compound_variants.len(),
            "recipe registered"
        );
        CompiledRecipe { recipe }
    }
}
