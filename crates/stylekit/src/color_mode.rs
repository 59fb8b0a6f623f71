//! Color mode: light, dark, or follow the OS.
//!
//! [`ColorMode::System`] resolves through a detector. The default detector
//! asks the OS via the `dark-light` crate; anything it cannot answer counts as
//! light. Tests and hosts inject their own detector with
//! [`ColorModeState::with_detector`].
//!
//! ```rust
//! use stylekit::{ColorMode, ColorModeState, ResolvedColorMode};
//!
//! let state = ColorModeState::with_detector(ColorMode::System, || ResolvedColorMode::Dark);
//! assert_eq!(state.resolved(), ResolvedColorMode::Dark);
//!
//! state.toggle();
//! assert_eq!(state.mode(), ColorMode::Light);
//! ```

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// The requested color mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
    /// Follow the OS preference.
    System,
}

/// A color mode after resolving [`ColorMode::System`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedColorMode {
    #[default]
    Light,
    Dark,
}

impl ResolvedColorMode {
    pub fn opposite(self) -> Self {
        match self {
            ResolvedColorMode::Light => ResolvedColorMode::Dark,
            ResolvedColorMode::Dark => ResolvedColorMode::Light,
        }
    }
}

impl From<ResolvedColorMode> for ColorMode {
    fn from(mode: ResolvedColorMode) -> Self {
        match mode {
            ResolvedColorMode::Light => ColorMode::Light,
            ResolvedColorMode::Dark => ColorMode::Dark,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
            ColorMode::System => "system",
        })
    }
}

impl fmt::Display for ResolvedColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ColorMode::from(*self).fmt(f)
    }
}

impl FromStr for ColorMode {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(ColorMode::Light),
            "dark" => Ok(ColorMode::Dark),
            "system" => Ok(ColorMode::System),
            _ => Err(StyleError::UnknownColorMode(s.to_string())),
        }
    }
}

/// Resolves [`ColorMode::System`].
pub type ColorModeDetector = fn() -> ResolvedColorMode;

/// Queries the OS for its light/dark preference.
pub fn os_color_mode() -> ResolvedColorMode {
    match detect_os_theme() {
        Ok(OsThemeMode::Dark) => ResolvedColorMode::Dark,
        Ok(OsThemeMode::Light) | Ok(OsThemeMode::Unspecified) => ResolvedColorMode::Light,
        Err(err) => {
            tracing::debug!(error = %err, "OS color mode detection failed, using light");
            ResolvedColorMode::Light
        }
    }
}

/// Resolves a mode with `detector` standing in for the OS.
pub fn resolve_color_mode(mode: ColorMode, detector: ColorModeDetector) -> ResolvedColorMode {
    match mode {
        ColorMode::Light => ResolvedColorMode::Light,
        ColorMode::Dark => ResolvedColorMode::Dark,
        ColorMode::System => detector(),
    }
}

type Listener = Rc<dyn Fn(ResolvedColorMode)>;

/// The current color mode plus change listeners.
///
/// Held by a provider for its subtree. The mode is not persisted anywhere.
pub struct ColorModeState {
    mode: Cell<ColorMode>,
    resolved: Cell<ResolvedColorMode>,
    detector: ColorModeDetector,
    listeners: RefCell<Vec<Listener>>,
}

impl fmt::Debug for ColorModeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorModeState")
            .field("mode", &self.mode.get())
            .field("resolved", &self.resolved.get())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl ColorModeState {
    /// Creates a state that resolves `System` through the OS.
    pub fn new(initial: ColorMode) -> Self {
        Self::with_detector(initial, os_color_mode)
    }

    pub fn with_detector(initial: ColorMode, detector: ColorModeDetector) -> Self {
        Self {
            mode: Cell::new(initial),
            resolved: Cell::new(resolve_color_mode(initial, detector)),
            detector,
            listeners: RefCell::new(Vec::new()),
        }
    }

    pub fn mode(&self) -> ColorMode {
        self.mode.get()
    }

    pub fn resolved(&self) -> ResolvedColorMode {
        self.resolved.get()
    }

    /// Sets the requested mode. Listeners run if the resolved mode changed.
    pub fn set(&self, mode: ColorMode) {
        self.mode.set(mode);
        self.refresh();
    }

    /// Switches to the explicit opposite of the resolved mode.
    pub fn toggle(&self) {
        self.set(self.resolved().opposite().into());
    }

    /// Re-runs detection, e.g. after the OS preference changed.
    pub fn refresh(&self) {
        let next = resolve_color_mode(self.mode.get(), self.detector);
        let previous = self.resolved.replace(next);
        if previous != next {
            tracing::debug!(from = %previous, to = %next, "color mode changed");
            // Listeners may register more listeners or change the mode.
            let listeners: Vec<Listener> = self.listeners.borrow().clone();
            for listener in &listeners {
                listener(next);
            }
        }
    }

    /// Registers a listener for resolved mode changes.
    ///
    /// A listener added while listeners are running first fires on the next change.
    pub fn on_change<F>(&self, listener: F)
    where
        F: Fn(ResolvedColorMode) + 'static,
    {
        self.listeners.borrow_mut().push(Rc::new(listener));
    }
}
