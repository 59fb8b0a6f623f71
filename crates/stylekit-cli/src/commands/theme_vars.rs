use anyhow::Result;
use clap::Args as ClapArgs;

use super::ThemeArgs;

#[derive(ClapArgs, Debug, Clone)]
pub struct Args {
    #[command(flatten)]
    pub theme: ThemeArgs,
}

/// Emits one class per color mode declaring every token as a custom property.
pub fn execute(args: Args) -> Result<String> {
    let provider = args.theme.provider()?;
    let (light, dark) = provider.theme_classes();
    tracing::debug!(light = %light, dark = %dark, "theme classes emitted");
    Ok(provider.context().engine().css_text())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_then_dark() {
        let output = execute(Args {
            theme: ThemeArgs::default(),
        })
        .unwrap();
        let light_at = output.find(".sk-t-light{").unwrap();
        let dark_at = output.find(".sk-t-dark{").unwrap();
        assert!(light_at < dark_at);
        assert!(output.contains("--sk-colors-neutral1:#151718"));
        assert!(output.contains("--sk-space-4:1rem"));
    }
}
