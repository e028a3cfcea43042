pub mod config;
pub mod dates;
pub mod error;
pub mod host;
pub mod journal;
pub mod paths;
pub mod schema;
pub mod template;
pub mod vault;

#[cfg(test)]
mod tests;

pub use config::{Settings, SettingsStore};
pub use dates::JournalDay;
pub use error::{EntryError, SettingsError};
pub use host::{Clock, FileStore, FixedClock, Host, Notifier, SystemClock, TemplateReader};
pub use journal::{DailyJournal, OpenedEntry};
pub use paths::FilenameStyle;
pub use vault::Vault;
