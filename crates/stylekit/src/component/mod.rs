//! Component style resolution.
//!
//! A [`ComponentDefinition`] names a component's parts and gives each part a
//! [`Recipe`]. Rendering a part merges, lowest precedence first:
//!
//! 1. the recipe base style
//! 2. the recipe variant styles for the resolved axes
//! 3. the theme config `baseStyle[part]`
//! 4. style props passed to the instance
//! 5. the instance `css` prop
//!
//! Every variant axis always resolves to a value: the instance's explicit
//! value, else the theme config default, else the component's hardcoded
//! fallback (see [`resolve_axis`]).
//!
//! # Theme configuration
//!
//! ```yaml
//! components:
//!   Button:
//!     baseStyle:
//!       root: { textTransform: uppercase }
//!     defaultProps:
//!       root: { variant: outline, size: lg }
//! ```

pub mod button;
pub mod switch;
pub mod table;
pub mod tag;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::Result;
use crate::props::{split_style_props, CSS_PROP};
use crate::provider::{use_theme, ThemeContext};
use crate::value::{StyleEntry, StyleObject};
use crate::{Recipe, VariantProps};

/// The prop carrying extra class names from the caller.
pub const CLASS_PROP: &str = "class";

/// Theme-level overrides for one component.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComponentStyleConfig {
    /// Extra style per part, merged above the recipe.
    pub base_style: IndexMap<String, StyleObject>,
    /// Variant defaults per part.
    pub default_props: IndexMap<String, VariantProps>,
}

impl ComponentStyleConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base_style(mut self, part: impl Into<String>, style: StyleObject) -> Self {
        self.base_style.insert(part.into(), style);
        self
    }

    pub fn default_props(mut self, part: impl Into<String>, props: VariantProps) -> Self {
        self.default_props.insert(part.into(), props);
        self
    }
}

/// Component configs keyed by component name (`Button`, `Table`, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ComponentStyleConfigs {
    configs: IndexMap<String, ComponentStyleConfig>,
}

impl ComponentStyleConfigs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, component: impl Into<String>, config: ComponentStyleConfig) -> Self {
        self.configs.insert(component.into(), config);
        self
    }

    pub fn get(&self, component: &str) -> Option<&ComponentStyleConfig> {
        self.configs.get(component)
    }

    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// Merges `other` on top of `self`, whole components at a time.
    pub fn merge(mut self, other: ComponentStyleConfigs) -> Self {
        self.configs.extend(other.configs);
        self
    }
}

/// Resolves one variant axis: explicit, then theme default, then `fallback`.
///
/// Total: always returns a value.
pub fn resolve_axis(
    axis: &str,
    instance: &VariantProps,
    theme_default: Option<&VariantProps>,
    fallback: &str,
) -> String {
    instance
        .get(axis)
        .or_else(|| theme_default.and_then(|defaults| defaults.get(axis)))
        .unwrap_or(fallback)
        .to_string()
}

/// Props passed to one component instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentProps {
    pub variants: VariantProps,
    /// Style props, the `css` prop, `class`, and anything else.
    pub props: IndexMap<String, StyleEntry>,
}

impl ComponentProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.variants.insert(axis, value);
        self
    }

    pub fn flag(mut self, axis: impl Into<String>, on: bool) -> Self {
        self.variants.insert(axis, on.to_string());
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<StyleEntry>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn css(self, style: StyleObject) -> Self {
        self.prop(CSS_PROP, style)
    }
}

/// The output of resolving one part.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPart {
    /// Space-separated: caller classes, the static part class, the generated class.
    pub class_name: String,
    /// Every axis of the component, resolved.
    pub variants: VariantProps,
    /// Props that are not style props, for the element.
    pub rest: IndexMap<String, StyleEntry>,
}

/// A built-in component: parts, their recipes and axis fallbacks.
#[derive(Debug, Clone)]
pub struct ComponentDefinition {
    name: &'static str,
    parts: IndexMap<&'static str, Recipe>,
    fallbacks: VariantProps,
}

impl ComponentDefinition {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            parts: IndexMap::new(),
            fallbacks: VariantProps::new(),
        }
    }

    /// Adds a part. The first part is the root: its `defaultProps` apply to
    /// the whole component.
    pub fn part(mut self, name: &'static str, recipe: Recipe) -> Self {
        self.parts.insert(name, recipe);
        self
    }

    /// Declares an axis and its hardcoded fallback value.
    pub fn axis(mut self, axis: &'static str, fallback: &'static str) -> Self {
        self.fallbacks.insert(axis, fallback);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parts(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.parts.keys().copied()
    }

    pub fn root_part(&self) -> Option<&'static str> {
        self.parts.keys().next().copied()
    }

    /// Resolves every declared axis for an instance.
    pub fn resolve_variants(
        &self,
        config: Option<&ComponentStyleConfig>,
        instance: &VariantProps,
    ) -> VariantProps {
        let defaults = config.and_then(|c| {
            self.root_part()
                .and_then(|root| c.default_props.get(root))
        });
        self.fallbacks
            .iter()
            .map(|(axis, fallback)| {
                let value = resolve_axis(axis, instance, defaults, fallback);
                (axis.clone(), value)
            })
            .collect()
    }

    /// The static class naming a part, e.g. `sk-switch__control`.
    pub fn part_class(&self, prefix: &str, part: &str) -> String {
        let component = self.name.to_ascii_lowercase();
        if Some(part) == self.root_part() {
            format!("{}-{}", prefix, component)
        } else {
            format!("{}-{}__{}", prefix, component, part)
        }
    }

    /// Resolves a part against a theme context.
    pub fn resolve_part(
        &self,
        ctx: &ThemeContext,
        part: &str,
        instance: &ComponentProps,
    ) -> ResolvedPart {
        let config = ctx.components().get(self.name);
        let variants = self.resolve_variants(config, &instance.variants);
        self.resolve_part_with(ctx, part, variants, instance)
    }

    /// Resolves a part with variants that were already resolved, e.g. read
    /// from a parent component's context.
    pub fn resolve_part_with(
        &self,
        ctx: &ThemeContext,
        part: &str,
        variants: VariantProps,
        instance: &ComponentProps,
    ) -> ResolvedPart {
        let config = ctx.components().get(self.name);

        let (mut style_props, mut rest) = split_style_props(instance.props.clone());
        let css_prop = match style_props.shift_remove(CSS_PROP) {
            Some(StyleEntry::Nested(css)) => css,
            _ => StyleObject::new(),
        };
        let instance_style: StyleObject = style_props.into_iter().collect();

        let empty = StyleObject::new();
        let mut fragments: Vec<&StyleObject> = match self.parts.get(part) {
            Some(recipe) => recipe.fragments(&recipe.selection(&variants)),
            None => {
                tracing::trace!(component = self.name, part, "unknown part, no recipe");
                Vec::new()
            }
        };
        fragments.push(
            config
                .and_then(|c| c.base_style.get(part))
                .unwrap_or(&empty),
        );
        fragments.push(&instance_style);
        fragments.push(&css_prop);

        let generated = ctx.engine().css_with_theme(ctx.theme(), fragments);

        let mut classes = Vec::with_capacity(3);
        if let Some(extra) = rest.shift_remove(CLASS_PROP) {
            if let Some(text) = extra.as_text() {
                classes.push(text.to_string());
            }
        }
        classes.push(self.part_class(ctx.engine().prefix(), part));
        classes.push(generated.class_name().to_string());

        tracing::trace!(component = self.name, part, class = %generated, "part resolved");
        ResolvedPart {
            class_name: classes.join(" "),
            variants,
            rest,
        }
    }

    /// Resolves a part against the theme context in scope.
    pub fn resolve_part_in_scope(&self, part: &str, instance: &ComponentProps) -> Result<ResolvedPart> {
        let ctx = use_theme()?;
        Ok(self.resolve_part(&ctx, part, instance))
    }
}

/// The built-in component definitions.
pub fn builtin_components() -> Vec<ComponentDefinition> {
    vec![
        button::definition(),
        switch::definition(),
        table::definition(),
        tag::definition(),
    ]
}

/// Color scheme names usable as `colorScheme` values.
pub(crate) fn color_schemes() -> &'static [&'static str] {
    crate::tokens::colors::PALETTES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style;

    #[test]
    fn test_resolve_axis_precedence() {
        let explicit = VariantProps::new().set("size", "sm");
        let defaults = VariantProps::new().set("size", "lg").set("variant", "outline");

        assert_eq!(resolve_axis("size", &explicit, Some(&defaults), "md"), "sm");
        assert_eq!(
            resolve_axis("variant", &explicit, Some(&defaults), "solid"),
            "outline"
        );
        assert_eq!(
            resolve_axis("colorScheme", &explicit, Some(&defaults), "primary"),
            "primary"
        );
        assert_eq!(resolve_axis("size", &VariantProps::new(), None, "md"), "md");
    }

    #[test]
    fn test_resolve_variants_uses_root_defaults() {
        let def = ComponentDefinition::new("Demo")
            .part("root", Recipe::default())
            .part("icon", Recipe::default())
            .axis("size", "md")
            .axis("variant", "solid");
        let config = ComponentStyleConfig::new()
            .default_props("root", VariantProps::new().set("size", "lg"))
            .default_props("icon", VariantProps::new().set("variant", "ghost"));

        let variants = def.resolve_variants(Some(&config), &VariantProps::new());
        assert_eq!(variants.get("size"), Some("lg"));
        assert_eq!(variants.get("variant"), Some("solid"));
    }

    #[test]
    fn test_part_class() {
        let def = ComponentDefinition::new("Switch")
            .part("root", Recipe::default())
            .part("control", Recipe::default());
        assert_eq!(def.part_class("sk", "root"), "sk-switch");
        assert_eq!(def.part_class("sk", "control"), "sk-switch__control");
    }

    #[test]
    fn test_config_deserializes_camel_case() {
        let yaml = r#"
Button:
  baseStyle:
    root:
      textTransform: uppercase
  defaultProps:
    root:
      variant: outline
"#;
        let configs: ComponentStyleConfigs = serde_yaml::from_str(yaml).unwrap();
        let button = configs.get("Button").unwrap();
        assert_eq!(
            button.base_style.get("root"),
            Some(&style! { "textTransform" => "uppercase" })
        );
        assert_eq!(
            button.default_props.get("root").and_then(|p| p.get("variant")),
            Some("outline")
        );
    }

    #[test]
    fn test_builtin_recipe_axes_are_declared() {
        for def in builtin_components() {
            for (part, recipe) in &def.parts {
                for axis in recipe.axes() {
                    assert!(
                        def.fallbacks.get(axis).is_some(),
                        "{}.{} uses undeclared axis {}",
                        def.name(),
                        part,
                        axis
                    );
                }
            }
        }
    }

    #[test]
    fn test_builtins_have_parts() {
        for def in builtin_components() {
            assert!(def.root_part().is_some(), "{} has no parts", def.name());
        }
    }
}
