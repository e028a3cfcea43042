//! The `DailyJournal` struct: opening (or creating) today's entry.

use crate::config::Settings;
use crate::dates::JournalDay;
use crate::error::EntryError;
use crate::host::{Clock, Host, TemplateReader};
use crate::paths::{entry_file_name, entry_path};
use crate::template::{TemplateVariables, render};
use tracing::{debug, info, warn};

/// The entry that was brought up for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedEntry {
    /// Vault-relative path, e.g. `Daily Journal/Daily Journal 2024-02-29.md`.
    pub path: String,
    pub day: JournalDay,
    /// `true` if the file did not exist before this run.
    pub created: bool,
}

#[derive(Debug)]
pub struct DailyJournal {
    pub settings: Settings,
}

impl DailyJournal {
    pub fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Today's journal date and number, as seen by `clock`.
    pub fn today(&self, clock: &dyn Clock) -> JournalDay {
        let day = JournalDay::resolve(clock.now(), self.settings.rollover_offset);
        day.with_midnight_offset(clock.midnight_offset(day.date))
    }

    /// Opens today's entry, creating it from the template first if it doesn't exist yet.
    ///
    /// 1. Reads the template, if one is configured and present.
    /// 2. Resolves the journal day and renders the template.
    /// 3. Ensures the destination folder and the entry file exist. An existing entry is
    ///    never rewritten; the rendered body is only used on creation.
    /// 4. Opens the entry and notifies `Created <path>` (new entries only) and
    ///    `Opened <path>`.
    ///
    /// The first failing step is reported once through the notifier and returned; nothing
    /// after it runs.
    pub fn open_or_create_todays_entry(
        &self,
        host: &Host<'_>,
    ) -> Result<OpenedEntry, EntryError> {
        let result = self.run(host);
        if let Err(e) = &result {
            warn!(path = e.path(), error = %e, "could not open today's entry");
            host.notifier.notify(&e.to_string());
        }
        result
    }

    fn run(&self, host: &Host<'_>) -> Result<OpenedEntry, EntryError> {
        let template = read_template(host.templates, &self.settings.template_path)?;

        let day = self.today(host.clock);
        let body = render(&template, &TemplateVariables::for_day(&day));
        let file_name = entry_file_name(
            &self.settings.filename_prefix,
            self.settings.filename_style,
            &day,
        );
        let folder = &self.settings.file_destination;
        let path = entry_path(folder, &file_name);
        debug!(date = %day.date, number = day.number, %path, "resolved journal entry");

        let folder_exists = host
            .files
            .exists(folder)
            .map_err(|source| EntryError::FolderCreate {
                path: folder.clone(),
                source,
            })?;
        if !folder_exists {
            host.files
                .create_folder(folder)
                .map_err(|source| EntryError::FolderCreate {
                    path: folder.clone(),
                    source,
                })?;
            debug!(%folder, "created destination folder");
        }

        let file_error = |source| EntryError::FileCreate {
            path: path.clone(),
            source,
        };
        let created = !host.files.exists(&path).map_err(file_error)?;
        if created {
            host.files.create_file(&path, &body).map_err(file_error)?;
            info!(%path, "created entry");
            host.notifier.notify(&format!("Created {path}"));
        }

        host.files
            .open_file(&path)
            .map_err(|source| EntryError::FileOpen {
                path: path.clone(),
                source,
            })?;
        info!(%path, "opened entry");
        host.notifier.notify(&format!("Opened {path}"));

        Ok(OpenedEntry { path, day, created })
    }
}

/// Template text, or an empty string when no template is configured or it doesn't exist.
fn read_template(reader: &dyn TemplateReader, path: &str) -> Result<String, EntryError> {
    if path.is_empty() {
        return Ok(String::new());
    }
    let to_error = |source| EntryError::TemplateRead {
        path: path.to_string(),
        source,
    };
    if !reader.exists(path).map_err(to_error)? {
        debug!(%path, "template not found, starting from an empty entry");
        return Ok(String::new());
    }
    reader.read(path).map_err(to_error)
}
