use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::render::ColorMode;

/// dj — open today's daily journal entry
///
/// Without arguments, opens today's entry in your editor, creating it (from your template,
/// if one is configured) when it doesn't exist yet.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("solo").args(["path", "number", "settings", "set"]).multiple(false)),
)]
pub struct Cli {
    /// Prints the vault root directory
    #[arg(long, short)]
    pub path: bool,
    /// Prints today's journal date and day number without touching the vault.
    #[arg(long, short)]
    pub number: bool,
    /// Shows every setting with its description and current value.
    #[arg(long)]
    pub settings: bool,
    /// Changes a single setting and saves it (e.g., `dj --set rollover_offset=4`,
    /// `dj --set "filename_prefix=Journal "`).
    #[arg(long, value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub set: Option<(String, String)>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Settings file to use instead of the default location.
    #[arg(long, env = "DJ_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }

    /// `true` for the modes that show or change the settings file.
    pub fn edits_settings(&self) -> bool {
        self.settings || self.set.is_some()
    }
}

/// Splits on the first `=`, keeping the value verbatim (spaces included).
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected KEY=VALUE, got '{s}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_the_open_trigger() {
        let cli = Cli::try_parse_from(["dj"]).unwrap();
        assert!(!cli.path && !cli.number && !cli.settings);
        assert!(cli.set.is_none());
        assert!(matches!(cli.color, ColorMode::Auto));
    }

    #[test]
    fn set_keeps_the_value_verbatim() {
        let cli = Cli::try_parse_from(["dj", "--set", "filename_prefix=Journal = "]).unwrap();
        assert_eq!(
            cli.set,
            Some(("filename_prefix".to_string(), "Journal = ".to_string()))
        );
    }

    #[test]
    fn set_requires_a_key() {
        assert!(Cli::try_parse_from(["dj", "--set", "=4"]).is_err());
        assert!(Cli::try_parse_from(["dj", "--set", "rollover_offset"]).is_err());
    }

    #[test]
    fn settings_modes_are_recognised() {
        assert!(Cli::try_parse_from(["dj", "--settings"]).unwrap().edits_settings());
        assert!(Cli::try_parse_from(["dj", "--set", "editor=hx"]).unwrap().edits_settings());
        assert!(!Cli::try_parse_from(["dj", "--number"]).unwrap().edits_settings());
    }

    #[test]
    fn solo_flags_conflict() {
        assert!(Cli::try_parse_from(["dj", "--path", "--settings"]).is_err());
    }
}
