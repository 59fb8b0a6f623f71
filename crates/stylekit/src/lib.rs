//! # Stylekit - Themeable Styled-System Core
//!
//! `stylekit` compiles style objects into atomic, cached CSS classes against a
//! token theme. It is the styling foundation for component libraries that want
//! design tokens, shorthand style props and light/dark themes without a
//! runtime stylesheet engine of their own.
//!
//! ## Core Concepts
//!
//! - [`StyleObject`]: Ordered property/selector map, built with [`style!`]
//! - [`Theme`]: Token scales (`colors`, `space`, `radii`, ...) referenced as `$token`
//! - [`Engine`]: Resolves tokens and utilities, emits one class per distinct style
//! - [`Recipe`]: Base style plus variant axes and compound variants
//! - [`ThemeProvider`]: Scopes a theme, component configs and [`ColorModeState`]
//! - [`ComponentDefinition`]: Multipart components (Switch, Table, Tag, Button)
//!
//! ## Quick Start
//!
//! ```rust
//! use stylekit::{style, Engine};
//!
//! let engine = Engine::new();
//! let card = engine.css([&style! {
//!     "p" => "$4",
//!     "bg" => "$primary3",
//!     "_hover" => style! { "bg" => "$primary9" },
//! }]);
//!
//! assert!(card.class_name().starts_with("sk-c-"));
//! let css = engine.css_text();
//! assert!(css.contains("padding:1rem"));
//! assert!(css.contains("[data-hover]{background:#3e63dd}"));
//! ```
//!
//! ## Themes and Color Mode
//!
//! ```rust
//! use stylekit::{style, use_theme, ColorMode, ThemeConfig, ThemeProvider};
//!
//! let provider = ThemeProvider::new(
//!     ThemeConfig::default().with_initial_color_mode(ColorMode::Dark),
//! );
//! provider.provide(|| {
//!     let ctx = use_theme().unwrap();
//!     ctx.css([&style! { "color" => "$hiContrast" }]);
//!     assert!(ctx.engine().css_text().contains("color:#ecedee"));
//! });
//! ```
//!
//! Configuration can also be loaded from YAML or JSON with
//! [`ThemeConfig::from_file`].

// Internal modules
pub mod color_mode;
pub mod component;
pub mod config;
pub mod context;
mod engine;
mod error;
pub mod media;
pub mod prelude;
pub mod props;
mod provider;
mod reset;
pub mod theme_map;
pub mod tokens;
pub mod utils;
mod value;

// Error type
pub use error::{Result, StyleError};

// Style values
pub use value::{merge_styles, CssValue, StyleEntry, StyleObject};

// Tokens and registries
pub use media::{Condition, MediaRegistry};
pub use theme_map::ThemeMap;
pub use tokens::{Scale, Theme, TokenOverrides, TokenValue};
pub use utils::{UtilityFn, UtilityRegistry};

// Engine exports
pub use engine::{
    CompiledRecipe, CompoundVariant, Engine, EngineBuilder, GeneratedClass, Recipe, VariantProps,
    DEFAULT_PREFIX,
};

// Color mode, configuration and provider
pub use color_mode::{ColorMode, ColorModeState, ResolvedColorMode};
pub use config::{StyleDocument, ThemeConfig};
pub use provider::{use_color_mode, use_style_config, use_theme, ThemeContext, ThemeProvider};
pub use reset::reset_styles;

// Component exports
pub use component::{
    builtin_components, ComponentDefinition, ComponentProps, ComponentStyleConfig,
    ComponentStyleConfigs, ResolvedPart,
};
