//! The style engine: style objects in, class names and CSS text out.
//!
//! An [`Engine`] owns its configuration (prefix, theme, theme map, media and
//! utility registries) and an append-only rule cache. Compiling a style goes
//! through the same pure steps every time:
//!
//! 1. merge the inputs left to right
//! 2. normalize: responsive values, utilities, token resolution
//! 3. flatten into rules under a placeholder selector
//! 4. hash the canonical rule text into a class name
//!
//! The canonical text is the cache key, so equal inputs (under the same theme)
//! always produce the same class and the rules are emitted once.
//!
//! ```rust
//! use stylekit::{style, Engine};
//!
//! let engine = Engine::new();
//! let a = engine.css([&style! { "color" => "$primary9", "px" => "$4" }]);
//! let b = engine.css([&style! { "color" => "$primary9", "px" => "$4" }]);
//!
//! assert_eq!(a.class_name(), b.class_name());
//! assert_eq!(engine.cache_len(), 1);
//! assert!(engine.css_text().contains("padding-left:1rem"));
//! ```

mod recipe;
mod resolve;
mod rules;
mod sheet;

use std::cell::RefCell;
use std::fmt;

pub use recipe::{CompiledRecipe, CompoundVariant, Recipe, VariantProps};

use crate::media::{is_condition_key, Condition, MediaRegistry};
use crate::theme_map::ThemeMap;
use crate::tokens::Theme;
use crate::utils::UtilityRegistry;
use crate::value::{merge_styles, StyleEntry, StyleObject};

use resolve::Resolver;
use rules::{Rule, ROOT};
use sheet::{Group, StyleSheet};

/// Default class name prefix.
pub const DEFAULT_PREFIX: &str = "sk";

/// A generated class and the rules bound to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GeneratedClass {
    class_name: String,
    selector: String,
    rules_text: String,
}

impl GeneratedClass {
    fn new(class_name: String, rules_text: String) -> Self {
        let selector = rules::class_selector(&class_name);
        Self {
            class_name,
            selector,
            rules_text,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The `.class` selector, escaped.
    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// The CSS rules for this class alone, as emitted into the stylesheet.
    ///
    /// Empty when the compiled style had no declarations.
    pub fn rules_text(&self) -> &str {
        &self.rules_text
    }
}

impl fmt::Display for GeneratedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.class_name)
    }
}

/// Builder for [`Engine`].
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    prefix: String,
    theme: Theme,
    theme_map: ThemeMap,
    media: MediaRegistry,
    utils: UtilityRegistry,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            theme: Theme::base_light(),
            theme_map: ThemeMap::default(),
            media: MediaRegistry::default(),
            utils: UtilityRegistry::default(),
        }
    }
}

impl EngineBuilder {
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// The theme used by [`Engine::css`] and [`Engine::global_css`].
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn theme_map(mut self, theme_map: ThemeMap) -> Self {
        self.theme_map = theme_map;
        self
    }

    pub fn media(mut self, media: MediaRegistry) -> Self {
        self.media = media;
        self
    }

    pub fn utils(mut self, utils: UtilityRegistry) -> Self {
        self.utils = utils;
        self
    }

    pub fn build(self) -> Engine {
        tracing::debug!(
            prefix = %self.prefix,
            theme = ?self.theme.name(),
            utils = self.utils.len(),
            "style engine created"
        );
        Engine {
            prefix: self.prefix,
            theme: self.theme,
            theme_map: self.theme_map,
            media: self.media,
            utils: self.utils,
            sheet: RefCell::new(StyleSheet::default()),
        }
    }
}

/// A style engine with its own rule cache.
///
/// The engine is single-threaded: the cache uses interior mutability so that
/// compiling through `&Engine` can append rules.
#[derive(Debug)]
pub struct Engine {
    prefix: String,
    theme: Theme,
    theme_map: ThemeMap,
    media: MediaRegistry,
    utils: UtilityRegistry,
    sheet: RefCell<StyleSheet>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with the built-in light theme and registries.
    pub fn new() -> Self {
        EngineBuilder::default().build()
    }

    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn theme_map(&self) -> &ThemeMap {
        &self.theme_map
    }

    pub fn media(&self) -> &MediaRegistry {
        &self.media
    }

    pub fn utils(&self) -> &UtilityRegistry {
        &self.utils
    }

    fn resolver<'a>(&'a self, theme: &'a Theme) -> Resolver<'a> {
        Resolver {
            theme,
            theme_map: &self.theme_map,
            utils: &self.utils,
        }
    }

    /// Compiles style objects, merged left to right, into a class.
    pub fn css<'a, I>(&self, styles: I) -> GeneratedClass
    where
        I: IntoIterator<Item = &'a StyleObject>,
    {
        self.css_with_theme(&self.theme, styles)
    }

    /// Like [`Engine::css`], resolving tokens against `theme`.
    pub fn css_with_theme<'a, I>(&self, theme: &Theme, styles: I) -> GeneratedClass
    where
        I: IntoIterator<Item = &'a StyleObject>,
    {
        let merged = merge_styles(styles);
        let rules = rules::flatten(
            &self.resolver(theme).normalize(&merged),
            ROOT,
            &self.media,
        );
        let key = rules::render(&rules);

        if let Some(cached) = self.sheet.borrow().cached(&key) {
            tracing::trace!(class = %cached.class_name, "style cache hit");
            return GeneratedClass::new(cached.class_name.clone(), cached.rules.clone());
        }

        let base = format!("{}-c-{}", self.prefix, rules::hash_key(&key));
        let mut sheet = self.sheet.borrow_mut();
        let mut class = GeneratedClass::new(sheet.free_class_name(&key, &base), String::new());
        class.rules_text = rules::render(&rules::bind_root(&rules, class.selector()));
        sheet.insert_class(&key, class.class_name(), class.rules_text.clone());
        tracing::debug!(class = %class, rules = rules.len(), "style compiled");
        class
    }

    /// Emits unscoped rules. Top-level keys are selectors or conditions.
    ///
    /// Returns the emitted rule text. Emitting the same styles twice is a no-op.
    pub fn global_css(&self, styles: &StyleObject) -> String {
        self.global_css_with_theme(&self.theme, styles)
    }

    /// Like [`Engine::global_css`], resolving tokens against `theme`.
    pub fn global_css_with_theme(&self, theme: &Theme, styles: &StyleObject) -> String {
        let resolver = self.resolver(theme);
        let mut rules = Vec::new();
        let mut statements = Vec::new();
        self.collect_global(&resolver, styles, &[], &mut rules, &mut statements);

        let mut text = statements.join("\n");
        let body = rules::render(&rules);
        if !text.is_empty() && !body.is_empty() {
            text.push('\n');
        }
        text.push_str(&body);

        if self
            .sheet
            .borrow_mut()
            .push_once(Group::Global, text.clone(), text.clone())
        {
            tracing::debug!(rules = rules.len(), "global styles emitted");
        }
        text
    }

    fn collect_global(
        &self,
        resolver: &Resolver<'_>,
        styles: &StyleObject,
        conditions: &[String],
        rules: &mut Vec<Rule>,
        statements: &mut Vec<String>,
    ) {
        for (key, entry) in styles {
            match entry {
                StyleEntry::Nested(block) if is_condition_key(key) => {
                    let mut nested = conditions.to_vec();
                    if let Condition::AtRule(prelude) = self.media.expand(key) {
                        nested.push(prelude);
                    }
                    self.collect_global(resolver, block, &nested, rules, statements);
                }
                StyleEntry::Nested(block) => {
                    let wrapped = conditions.iter().rev().fold(
                        resolver.normalize(block),
                        |inner, prelude| StyleObject::new().nest(prelude.clone(), inner),
                    );
                    rules.extend(rules::flatten(&wrapped, key, &self.media));
                }
                StyleEntry::Value(value) if is_condition_key(key) => {
                    statements.push(format!("{} {};", key, value));
                }
                StyleEntry::Value(_) => {
                    tracing::trace!(key = %key, "top-level declaration ignored in global styles");
                }
            }
        }
    }

    /// Emits a `@keyframes` rule and returns its generated name.
    ///
    /// Top-level keys are keyframe selectors (`from`, `50%`, `to`).
    pub fn keyframes(&self, frames: &StyleObject) -> String {
        let resolver = self.resolver(&self.theme);
        let mut body = String::new();
        for (stop, entry) in frames {
            if let StyleEntry::Nested(block) = entry {
                let rules = rules::flatten(&resolver.normalize(block), stop, &self.media);
                body.push_str(&rules::render(&rules).replace('\n', ""));
            }
        }

        let name = format!("{}-k-{}", self.prefix, rules::hash_key(&body));
        let text = format!("@keyframes {}{{{}}}", rules::ident(&name), body);
        if self
            .sheet
            .borrow_mut()
            .push_once(Group::Global, text.clone(), text)
        {
            tracing::debug!(name = %name, "keyframes emitted");
        }
        name
    }

    /// Emits a class that sets every token of `theme` as a custom property.
    ///
    /// Property names are `--<prefix>-<scale>-<token>`; see [`Engine::token_var`].
    pub fn create_theme(&self, name: &str, theme: &Theme) -> GeneratedClass {
        let mut class = GeneratedClass::new(format!("{}-t-{}", self.prefix, name), String::new());
        let mut declarations = Vec::with_capacity(theme.len());
        for (scale, tokens) in theme.scales() {
            for (token, value) in tokens {
                declarations.push((self.token_property(scale, token), value.clone()));
            }
        }
        let rule = Rule {
            conditions: Vec::new(),
            selector: class.selector().to_string(),
            declarations,
        };
        class.rules_text = rules::render(std::slice::from_ref(&rule));
        let text = class.rules_text.clone();
        if self
            .sheet
            .borrow_mut()
            .push_once(Group::Theme, text.clone(), text)
        {
            tracing::debug!(class = %class, tokens = theme.len(), "theme class emitted");
        }
        class
    }

    fn token_property(&self, scale: &str, token: &str) -> String {
        rules::ident(&format!("--{}-{}-{}", self.prefix, scale, token))
    }

    /// `var(...)` reference to a token emitted by [`Engine::create_theme`].
    pub fn token_var(&self, scale: &str, token: &str) -> String {
        format!("var({})", self.token_property(scale, token))
    }

    /// All emitted CSS: theme rules, then global rules, then class rules.
    pub fn css_text(&self) -> String {
        self.sheet.borrow().text()
    }

    /// Number of distinct compiled styles.
    pub fn cache_len(&self) -> usize {
        self.sheet.borrow().len()
    }

    /// Returns true if `class_name` was generated by this engine.
    pub fn contains(&self, class_name: &str) -> bool {
        self.sheet.borrow().has_class(class_name)
    }
}
