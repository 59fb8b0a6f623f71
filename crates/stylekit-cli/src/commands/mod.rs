pub mod css;
pub mod theme_vars;
pub mod tokens;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;

use stylekit::{ColorMode, ThemeConfig, ThemeProvider};

/// Theme selection shared by every command.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ThemeArgs {
    /// Theme config file (.yaml, .yml or .json)
    #[arg(long, env = "STYLEKIT_THEME")]
    pub theme: Option<PathBuf>,

    /// Color mode: light, dark or system (overrides the config)
    #[arg(long)]
    pub mode: Option<ColorMode>,
}

impl ThemeArgs {
    pub fn load_config(&self) -> Result<ThemeConfig> {
        let config = match &self.theme {
            Some(path) => ThemeConfig::from_file(path)
                .with_context(|| format!("failed to load theme from {}", path.display()))?,
            None => ThemeConfig::default(),
        };
        Ok(match self.mode {
            Some(mode) => config.with_initial_color_mode(mode),
            None => config,
        })
    }

    pub fn provider(&self) -> Result<ThemeProvider> {
        let config = self.load_config()?;
        tracing::info!(mode = %config.initial_color_mode, "building theme provider");
        Ok(ThemeProvider::new(config))
    }
}
