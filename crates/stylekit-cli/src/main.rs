#![forbid(unsafe_code)]

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{css, theme_vars, tokens};

#[derive(Parser)]
#[command(name = "stylekit")]
#[command(author, version, about = "Compile stylekit styles and themes to CSS")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile style documents to class names and a stylesheet
    Css(css::Args),

    /// Print resolved theme tokens
    Tokens(tokens::Args),

    /// Print the light and dark custom-property classes
    ThemeVars(theme_vars::Args),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with_writer(std::io::stderr)
        .init();

    let output = match cli.command {
        Commands::Css(args) => css::execute(args)?,
        Commands::Tokens(args) => tokens::execute(args)?,
        Commands::ThemeVars(args) => theme_vars::execute(args)?,
    };
    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_css_command() {
        let cli = Cli::try_parse_from(["stylekit", "-vv", "css", "--mode", "dark", "--reset", "a.yaml", "b.json"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Css(args) => {
                assert!(args.reset);
                assert_eq!(args.theme.mode, Some(stylekit::ColorMode::Dark));
                assert_eq!(args.styles.len(), 2);
            }
            _ => panic!("expected css command"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["stylekit", "tokens", "--mode", "sepia"]).is_err());
    }

    #[test]
    fn test_css_requires_styles() {
        assert!(Cli::try_parse_from(["stylekit", "css"]).is_err());
    }
}
