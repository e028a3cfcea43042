use crate::{Cli, common::CliModeResult, render::Renderer};
use anyhow::Result;
use dj_core::{DailyJournal, SystemClock};

pub fn info_mode(cli: &Cli, renderer: &Renderer, journal: &DailyJournal) -> Result<CliModeResult> {
    if cli.path {
        renderer.print_info(&format!("{}", journal.settings.vault_dir.display()));
        return Ok(CliModeResult::Finish);
    }
    if cli.number {
        renderer.print_day(&journal.today(&SystemClock));
        return Ok(CliModeResult::Finish);
    }
    Ok(CliModeResult::NothingToDo)
}
