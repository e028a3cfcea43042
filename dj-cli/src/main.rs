mod cli;
mod cli_modes;
mod common;
mod host;
mod logging;
mod render;

use anyhow::Result;
use cli::Cli;
use cli_modes::{info_mode, load_settings, open_mode, settings_mode};
use common::CliModeResult;
use dj_core::{DailyJournal, SettingsStore};
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init_logging();

    match run() {
        Ok(CliModeResult::Failed) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dj: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<CliModeResult> {
    let cli = Cli::new();
    let renderer = Renderer::new(Some(RenderOptions {
        use_color: cli.color.use_color(),
    }));

    let store = match &cli.config {
        Some(path) => SettingsStore::at(path),
        None => SettingsStore::locate(),
    };
    let mut settings = load_settings(&cli, &store)?;
    tracing::debug!(path = %store.path().display(), "settings loaded");

    match settings_mode(&cli, &renderer, &store, &mut settings)? {
        CliModeResult::NothingToDo => {}
        done => return Ok(done),
    }

    let journal = DailyJournal::with_settings(settings);

    match info_mode(&cli, &renderer, &journal)? {
        CliModeResult::NothingToDo => {}
        done => return Ok(done),
    }

    // Default: the "open today's journal note" trigger.
    open_mode(&renderer, &journal)
}
