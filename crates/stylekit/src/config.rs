//! Theme configuration and style documents.
//!
//! A [`ThemeConfig`] is what a consumer hands to the
//! [`ThemeProvider`](crate::ThemeProvider): the initial color mode, token
//! overrides per mode and component style configs. Every field is optional.
//!
//! ```yaml
//! initialColorMode: system
//! prefix: app
//! lightTheme:
//!   colors:
//!     primary9: "#ff0066"
//! darkTheme:
//!   colors:
//!     primary9: "#ff4d94"
//! components:
//!   Button:
//!     defaultProps:
//!       root: { variant: outline }
//! ```
//!
//! Files are read as YAML (`.yaml`, `.yml`) or JSON (`.json`).

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::color_mode::ColorMode;
use crate::component::ComponentStyleConfigs;
use crate::error::{Result, StyleError};
use crate::tokens::TokenOverrides;
use crate::value::StyleObject;

/// Consumer theme configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeConfig {
    pub initial_color_mode: ColorMode,
    pub light_theme: TokenOverrides,
    pub dark_theme: TokenOverrides,
    pub components: ComponentStyleConfigs,
    /// Class name prefix; the engine default when absent.
    pub prefix: Option<String>,
}

impl ThemeConfig {
    /// Parses a config from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::ConfigParse`] if the document is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_yaml("theme config", yaml, None)
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        parse_json("theme config", json, None)
    }

    /// Loads a config file; the extension selects YAML or JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_file("theme config", path.as_ref())
    }

    pub fn with_initial_color_mode(mut self, mode: ColorMode) -> Self {
        self.initial_color_mode = mode;
        self
    }

    pub fn with_light_theme(mut self, overrides: TokenOverrides) -> Self {
        self.light_theme = overrides;
        self
    }

    pub fn with_dark_theme(mut self, overrides: TokenOverrides) -> Self {
        self.dark_theme = overrides;
        self
    }

    pub fn with_components(mut self, components: ComponentStyleConfigs) -> Self {
        self.components = components;
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

/// Named style objects, as read from a style document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct StyleDocument {
    styles: IndexMap<String, StyleObject>,
}

impl StyleDocument {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_yaml("style document", yaml, None)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        parse_json("style document", json, None)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_file("style document", path.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &StyleObject)> {
        self.styles.iter()
    }

    pub fn get(&self, name: &str) -> Option<&StyleObject> {
        self.styles.get(name)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn format_of(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Some(Format::Yaml),
        Some("json") => Some(Format::Json),
        _ => None,
    }
}

fn parse_yaml<T: DeserializeOwned>(what: &'static str, text: &str, path: Option<PathBuf>) -> Result<T> {
    serde_yaml::from_str(text).map_err(|e| StyleError::yaml(what, path, e))
}

fn parse_json<T: DeserializeOwned>(what: &'static str, text: &str, path: Option<PathBuf>) -> Result<T> {
    serde_json::from_str(text).map_err(|e| StyleError::json(what, path, e))
}

fn load_file<T: DeserializeOwned>(what: &'static str, path: &Path) -> Result<T> {
    let format = format_of(path).ok_or_else(|| StyleError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|source| StyleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), what, "loading configuration");
    match format {
        Format::Yaml => parse_yaml(what, &content, Some(path.to_path_buf())),
        Format::Json => parse_json(what, &content, Some(path.to_path_buf())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const YAML: &str = r##"
initialColorMode: dark
prefix: app
lightTheme:
  colors:
    primary9: "#ff0066"
  space:
    gutter: 24px
darkTheme:
  radii:
    md: 0
components:
  Switch:
    defaultProps:
      root:
        size: lg
"##;

    #[test]
    fn test_from_yaml() {
        let config = ThemeConfig::from_yaml(YAML).unwrap();
        assert_eq!(config.initial_color_mode, ColorMode::Dark);
        assert_eq!(config.prefix.as_deref(), Some("app"));
        assert!(!config.light_theme.is_empty());
        assert!(!config.dark_theme.is_empty());
        let switch = config.components.get("Switch").unwrap();
        assert_eq!(
            switch.default_props.get("root").and_then(|p| p.get("size")),
            Some("lg")
        );
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = ThemeConfig::from_yaml("{}").unwrap();
        assert_eq!(config, ThemeConfig::default());
        assert_eq!(config.initial_color_mode, ColorMode::Light);
    }

    #[test]
    fn test_from_json() {
        let config = ThemeConfig::from_json(
            r##"{"initialColorMode": "system", "lightTheme": {"colors": {"x": "#000"}}}"##,
        )
        .unwrap();
        assert_eq!(config.initial_color_mode, ColorMode::System);
        assert_eq!(
            config.light_theme.iter().next().map(|(scale, _)| scale.as_str()),
            Some("colors")
        );
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ThemeConfig::from_yaml("initialColorMode: sepia").unwrap_err();
        assert!(matches!(err, StyleError::ConfigParse { what: "theme config", .. }));
    }

    #[test]
    fn test_from_file_yaml_and_json() {
        let dir = TempDir::new().unwrap();

        let yaml_path = dir.path().join("theme.yml");
        fs::write(&yaml_path, YAML).unwrap();
        let config = ThemeConfig::from_file(&yaml_path).unwrap();
        assert_eq!(config.prefix.as_deref(), Some("app"));

        let json_path = dir.path().join("theme.json");
        fs::write(&json_path, r#"{"prefix": "j"}"#).unwrap();
        let config = ThemeConfig::from_file(&json_path).unwrap();
        assert_eq!(config.prefix.as_deref(), Some("j"));
    }

    #[test]
    fn test_from_file_errors() {
        let dir = TempDir::new().unwrap();

        let toml_path = dir.path().join("theme.toml");
        fs::write(&toml_path, "").unwrap();
        assert!(matches!(
            ThemeConfig::from_file(&toml_path),
            Err(StyleError::UnsupportedFormat(_))
        ));

        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            ThemeConfig::from_file(&missing),
            Err(StyleError::Io { .. })
        ));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{").unwrap();
        let err = ThemeConfig::from_file(&broken).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_style_document() {
        let doc = StyleDocument::from_yaml(
            r#"
card:
  p: $4
  bg: $neutral2
  _hover:
    bg: $neutral3
title:
  fontSize: $xl
"#,
        )
        .unwrap();
        assert_eq!(doc.len(), 2);
        let names: Vec<_> = doc.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["card", "title"]);
        assert!(doc.get("card").unwrap().contains_key("_hover"));
    }
}
