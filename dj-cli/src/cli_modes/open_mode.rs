use crate::{
    common::{CliModeResult, resolve_editor},
    host::EditorVault,
    render::Renderer,
};
use anyhow::Result;
use dj_core::{DailyJournal, Host, SystemClock, Vault};

/// Opens today's entry in the editor, creating it first if needed.
pub fn open_mode(renderer: &Renderer, journal: &DailyJournal) -> Result<CliModeResult> {
    let vault = Vault::new(&journal.settings.vault_dir);
    let files = EditorVault::new(&vault, resolve_editor(&journal.settings.editor));
    let host = Host {
        clock: &SystemClock,
        files: &files,
        templates: &vault,
        notifier: renderer,
    };

    // Failures were already shown by the notifier.
    match journal.open_or_create_todays_entry(&host) {
        Ok(_) => Ok(CliModeResult::Finish),
        Err(_) => Ok(CliModeResult::Failed),
    }
}
