//! Common imports in one line.
//!
//! ```rust
//! use stylekit::prelude::*;
//!
//! let engine = Engine::new();
//! let class = engine.css([&style! { "m" => "$2" }]);
//! assert!(engine.contains(class.class_name()));
//! ```

pub use crate::{
    merge_styles, reset_styles, style, use_color_mode, use_style_config, use_theme, ColorMode,
    ComponentProps, Engine, GeneratedClass, Recipe, StyleObject, Theme, ThemeConfig, ThemeProvider,
    VariantProps,
};
