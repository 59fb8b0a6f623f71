use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;

use stylekit::StyleDocument;

use super::ThemeArgs;

#[derive(ClapArgs, Debug, Clone)]
pub struct Args {
    #[command(flatten)]
    pub theme: ThemeArgs,

    /// Emit the base reset before the generated classes
    #[arg(long)]
    pub reset: bool,

    /// Style documents mapping names to style objects
    #[arg(required = true)]
    pub styles: Vec<PathBuf>,
}

/// Compiles every named style and returns the class map followed by the CSS.
pub fn execute(args: Args) -> Result<String> {
    let provider = args.theme.provider()?;
    if args.reset {
        provider.inject_reset();
    }

    let ctx = provider.context();
    let mut out = String::new();
    for path in &args.styles {
        let doc = StyleDocument::from_file(path)
            .with_context(|| format!("failed to load styles from {}", path.display()))?;
        tracing::debug!(path = %path.display(), styles = doc.len(), "compiling style document");
        for (name, style) in doc.iter() {
            let class = ctx.css([style]);
            writeln!(out, "/* {}: {} */", name, class)?;
        }
    }

    out.push_str(&ctx.engine().css_text());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use stylekit::ColorMode;
    use tempfile::TempDir;

    const STYLES: &str = r#"
card:
  p: $4
  bg: $neutral1
title:
  fontSize: 20
"#;

    fn args(dir: &TempDir, mode: ColorMode, reset: bool) -> Args {
        let path = dir.path().join("styles.yaml");
        fs::write(&path, STYLES).unwrap();
        Args {
            theme: ThemeArgs {
                theme: None,
                mode: Some(mode),
            },
            reset,
            styles: vec![path],
        }
    }

    #[test]
    fn test_class_map_then_css() {
        let dir = TempDir::new().unwrap();
        let output = execute(args(&dir, ColorMode::Light, false)).unwrap();

        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].starts_with("/* card: sk-c-"));
        assert!(lines[1].starts_with("/* title: sk-c-"));
        assert!(output.contains("padding:1rem"));
        assert!(output.contains("font-size:20px"));
    }

    #[test]
    fn test_mode_selects_tokens() {
        let dir = TempDir::new().unwrap();
        let dark = execute(args(&dir, ColorMode::Dark, false)).unwrap();
        assert!(dark.contains("background:#151718"));
    }

    #[test]
    fn test_reset_comes_before_classes() {
        let dir = TempDir::new().unwrap();
        let output = execute(args(&dir, ColorMode::Light, true)).unwrap();
        let reset_at = output.find("box-sizing:border-box").unwrap();
        let class_at = output.find("padding:1rem").unwrap();
        assert!(reset_at < class_at);
    }

    #[test]
    fn test_unsupported_style_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("styles.txt");
        fs::write(&path, "").unwrap();
        let err = execute(Args {
            theme: ThemeArgs::default(),
            reset: false,
            styles: vec![path],
        })
        .unwrap_err();
        assert!(err.to_string().contains("styles.txt"));
    }
}
