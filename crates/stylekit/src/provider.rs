//! The theme provider and its context accessors.
//!
//! A [`ThemeProvider`] turns a [`ThemeConfig`] into a [`ThemeContext`]: the
//! light and dark themes (base tokens plus overrides), the component style
//! configs, a style engine and the color mode state. Code running inside
//! [`ThemeProvider::provide`] reaches the context through [`use_theme`],
//! [`use_style_config`] and [`use_color_mode`]; outside a provider those
//! return [`StyleError::MissingProvider`].
//!
//! ```rust
//! use stylekit::{style, use_theme, ColorMode, ThemeConfig, ThemeProvider};
//!
//! let provider = ThemeProvider::new(
//!     ThemeConfig::default().with_initial_color_mode(ColorMode::Dark),
//! );
//!
//! provider.provide(|| {
//!     let ctx = use_theme().unwrap();
//!     assert_eq!(ctx.theme().resolve("colors", "neutral1"), Some("#151718"));
//!     let class = ctx.css([&style! { "bg" => "$neutral1" }]);
//!     assert!(class.class_name().starts_with("sk-c-"));
//! });
//!
//! assert!(use_theme().is_err());
//! ```

use std::rc::Rc;

use crate::color_mode::{os_color_mode, ColorModeDetector, ColorModeState, ResolvedColorMode};
use crate::component::{ComponentStyleConfig, ComponentStyleConfigs};
use crate::config::ThemeConfig;
use crate::context::{provide, require_context};
use crate::engine::{Engine, GeneratedClass};
use crate::error::{Result, StyleError};
use crate::reset::reset_styles;
use crate::tokens::Theme;
use crate::value::StyleObject;

const PROVIDER: &str = "ThemeProvider";

/// Everything a provider shares with its subtree.
#[derive(Debug)]
pub struct ThemeContext {
    engine: Engine,
    light: Theme,
    dark: Theme,
    components: ComponentStyleConfigs,
    color_mode: Rc<ColorModeState>,
}

impl ThemeContext {
    /// The theme for the resolved color mode.
    pub fn theme(&self) -> &Theme {
        self.theme_for(self.color_mode.resolved())
    }

    pub fn theme_for(&self, mode: ResolvedColorMode) -> &Theme {
        match mode {
            ResolvedColorMode::Light => &self.light,
            ResolvedColorMode::Dark => &self.dark,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn components(&self) -> &ComponentStyleConfigs {
        &self.components
    }

    pub fn style_config(&self, component: &str) -> Option<&ComponentStyleConfig> {
        self.components.get(component)
    }

    pub fn color_mode(&self) -> &Rc<ColorModeState> {
        &self.color_mode
    }

    /// Compiles styles against the active theme.
    pub fn css<'a, I>(&self, styles: I) -> GeneratedClass
    where
        I: IntoIterator<Item = &'a StyleObject>,
    {
        self.engine.css_with_theme(self.theme(), styles)
    }

    /// Emits global styles against the active theme.
    pub fn global_css(&self, styles: &StyleObject) -> String {
        self.engine.global_css_with_theme(self.theme(), styles)
    }
}

/// Owns a [`ThemeContext`] and scopes it for a subtree.
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    context: Rc<ThemeContext>,
}

impl ThemeProvider {
    /// Builds the context. `System` color mode asks the OS.
    pub fn new(config: ThemeConfig) -> Self {
        Self::with_detector(config, os_color_mode)
    }

    /// Builds the context with a custom `System` color mode detector.
    pub fn with_detector(config: ThemeConfig, detector: ColorModeDetector) -> Self {
        let light = Theme::base_light().with_overrides(&config.light_theme);
        let dark = Theme::base_dark().with_overrides(&config.dark_theme);

        let mut builder = Engine::builder().theme(light.clone());
        if let Some(prefix) = &config.prefix {
            builder = builder.prefix(prefix.clone());
        }

        let color_mode = Rc::new(ColorModeState::with_detector(
            config.initial_color_mode,
            detector,
        ));
        tracing::debug!(
            mode = %color_mode.mode(),
            resolved = %color_mode.resolved(),
            components = config.components.len(),
            "theme provider created"
        );

        Self {
            context: Rc::new(ThemeContext {
                engine: builder.build(),
                light,
                dark,
                components: config.components,
                color_mode,
            }),
        }
    }

    pub fn context(&self) -> &Rc<ThemeContext> {
        &self.context
    }

    /// Runs `f` with this provider's context in scope.
    pub fn provide<R>(&self, f: impl FnOnce() -> R) -> R {
        provide(Rc::clone(&self.context), f)
    }

    /// Emits the base reset against the active theme.
    pub fn inject_reset(&self) -> String {
        self.context.global_css(&reset_styles())
    }

    /// Emits one custom-property class per color mode and returns them as
    /// `(light, dark)`.
    pub fn theme_classes(&self) -> (GeneratedClass, GeneratedClass) {
        let engine = &self.context.engine;
        (
            engine.create_theme("light", &self.context.light),
            engine.create_theme("dark", &self.context.dark),
        )
    }
}

/// The enclosing provider's context.
pub fn use_theme() -> Result<Rc<ThemeContext>> {
    require_context("use_theme", PROVIDER)
}

/// The component style configs of the enclosing provider.
pub fn use_style_config() -> Result<ComponentStyleConfigs> {
    use_theme()
        .map(|ctx| ctx.components().clone())
        .map_err(|_| StyleError::MissingProvider {
            accessor: "use_style_config",
            provider: PROVIDER,
        })
}

/// The color mode state of the enclosing provider.
pub fn use_color_mode() -> Result<Rc<ColorModeState>> {
    use_theme()
        .map(|ctx| Rc::clone(ctx.color_mode()))
        .map_err(|_| StyleError::MissingProvider {
            accessor: "use_color_mode",
            provider: PROVIDER,
        })
}
