use anyhow::{bail, Result};
use clap::{Args as ClapArgs, ValueEnum};
use indexmap::IndexMap;

use stylekit::Scale;

use super::ThemeArgs;

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct Args {
    #[command(flatten)]
    pub theme: ThemeArgs,

    /// Only print this scale (e.g. colors, space)
    #[arg(long)]
    pub scale: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Yaml)]
    pub format: Format,
}

/// Dumps the resolved tokens of the active theme.
pub fn execute(args: Args) -> Result<String> {
    let provider = args.theme.provider()?;
    let theme = provider.context().theme();

    let scales: IndexMap<&str, &Scale> = match &args.scale {
        Some(name) => match theme.scale(name) {
            Some(scale) => IndexMap::from([(name.as_str(), scale)]),
            None => bail!("theme has no `{}` scale", name),
        },
        None => theme.scales().map(|(name, scale)| (name.as_str(), scale)).collect(),
    };

    Ok(match args.format {
        Format::Yaml => serde_yaml::to_string(&scales)?,
        Format::Json => serde_json::to_string_pretty(&scales)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stylekit::ColorMode;
    use tempfile::TempDir;

    fn args(mode: ColorMode, scale: Option<&str>, format: Format) -> Args {
        Args {
            theme: ThemeArgs {
                theme: None,
                mode: Some(mode),
            },
            scale: scale.map(String::from),
            format,
        }
    }

    #[test]
    fn test_single_scale_as_json() {
        let output = execute(args(ColorMode::Light, Some("space"), Format::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["space"]["4"], "1rem");
        assert!(value.get("colors").is_none());
    }

    #[test]
    fn test_dark_colors_as_yaml() {
        let output = execute(args(ColorMode::Dark, Some("colors"), Format::Yaml)).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
        assert_eq!(value["colors"]["neutral1"].as_str(), Some("#151718"));
    }

    #[test]
    fn test_all_scales() {
        let output = execute(args(ColorMode::Light, None, Format::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value.get("colors").is_some());
        assert!(value.get("radii").is_some());
    }

    #[test]
    fn test_overrides_from_theme_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r##"{"lightTheme": {"colors": {"brand": "#ff0066"}}}"##).unwrap();

        let output = execute(Args {
            theme: ThemeArgs {
                theme: Some(path),
                mode: Some(ColorMode::Light),
            },
            scale: Some("colors".into()),
            format: Format::Json,
        })
        .unwrap();
        assert!(output.contains("\"brand\": \"#ff0066\""));
    }

    #[test]
    fn test_unknown_scale() {
        let err = execute(args(ColorMode::Light, Some("nope"), Format::Yaml)).unwrap_err();
        assert_eq!(err.to_string(), "theme has no `nope` scale");
    }
}
