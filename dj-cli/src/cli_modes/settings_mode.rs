use crate::{Cli, common::CliModeResult, render::Renderer};
use anyhow::{Context, Result};
use dj_core::{Settings, SettingsStore, schema};
use tracing::warn;

/// Loads the settings file. When `cli` is about to show or change settings, an unreadable
/// file falls back to the defaults so it can be inspected and overwritten with `--set`.
pub fn load_settings(cli: &Cli, store: &SettingsStore) -> Result<Settings> {
    match store.load() {
        Ok(settings) => Ok(settings),
        Err(e) if cli.edits_settings() => {
            warn!(
                path = %store.path().display(),
                error = %format!("{e:#}"),
                "ignoring unreadable settings file"
            );
            Ok(Settings::default())
        }
        Err(e) => Err(e).context("loading settings"),
    }
}

pub fn settings_mode(
    cli: &Cli,
    renderer: &Renderer,
    store: &SettingsStore,
    settings: &mut Settings,
) -> Result<CliModeResult> {
    if cli.settings {
        renderer.print_settings(schema::FIELDS, settings);
        renderer.print_info(&format!("Settings file: {}", store.path().display()));
        return Ok(CliModeResult::Finish);
    }

    if let Some((key, value)) = &cli.set {
        store.update(settings, key, value)?;
        renderer.print_info(&format!("Saved {key} = {value:?}"));
        return Ok(CliModeResult::Finish);
    }

    Ok(CliModeResult::NothingToDo)
}
