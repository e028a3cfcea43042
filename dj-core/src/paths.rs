//! Vault-relative paths for journal entries.
//!
//! Paths inside the vault are plain `/`-separated strings, relative to the vault root:
//! `{file_destination}/{filename_prefix}{YYYY-MM-DD}.md`

use crate::dates::JournalDay;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, EnumIter, EnumString};

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\\/]+").expect("valid regex"));
static EDGE_SLASHES: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/+|/+$").expect("valid regex"));

/// What follows the filename prefix.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, EnumIter, AsRefStr, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum FilenameStyle {
    /// `Daily Journal 2024-02-29`
    #[default]
    Date,
    /// `Daily Journal 1698`
    Number,
}

/// Normalizes a vault-relative path.
///
/// - `\` and runs of `/` become a single `/`
/// - leading and trailing slashes are removed; an empty path becomes `/`
/// - non-breaking spaces become regular spaces
pub fn normalize_path(path: &str) -> String {
    let collapsed = SEPARATORS.replace_all(path, "/");
    let trimmed = EDGE_SLASHES.replace_all(&collapsed, "");
    if trimmed.is_empty() {
        return "/".to_string();
    }
    trimmed.replace(['\u{00A0}', '\u{202F}'], " ")
}

/// Entry filename without extension, e.g. `Daily Journal 2024-02-29`.
pub fn entry_file_name(prefix: &str, style: FilenameStyle, day: &JournalDay) -> String {
    match style {
        FilenameStyle::Date => format!("{prefix}{}", day.file_date()),
        FilenameStyle::Number => format!("{prefix}{}", day.number),
    }
}

/// Full vault path of an entry: `{destination}/{file_name}.md`.
pub fn entry_path(destination: &str, file_name: &str) -> String {
    format!("{}.md", normalize_path(&format!("{destination}/{file_name}")))
}
