use std::io;
use thiserror::Error;

/// A failed step while opening today's entry. Every variant names the path involved.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Could not read template {path}: {source}")]
    TemplateRead {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not create folder {path}: {source}")]
    FolderCreate {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not create {path}: {source}")]
    FileCreate {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Could not open {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl EntryError {
    pub fn path(&self) -> &str {
        match self {
            EntryError::TemplateRead { path, .. }
            | EntryError::FolderCreate { path, .. }
            | EntryError::FileCreate { path, .. }
            | EntryError::FileOpen { path, .. } => path,
        }
    }
}

/// A rejected change to a setting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Unknown setting '{0}'")]
    UnknownKey(String),
    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
