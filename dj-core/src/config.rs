use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::paths::FilenameStyle;
use crate::schema;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Hour of day up to which (inclusive) a new entry still belongs to the previous day.
    pub rollover_offset: i64,
    /// Vault folder where daily entries are created.
    pub file_destination: String,
    /// Vault path of the template used for new entries. Empty means no template.
    pub template_path: String,
    /// Prepended verbatim to every entry filename; include a trailing space if needed.
    pub filename_prefix: String,
    pub filename_style: FilenameStyle,
    /// Absolute directory of the notes vault.
    pub vault_dir: PathBuf,
    /// Preferred editor binary. Optional; the CLI falls back to $VISUAL/$EDITOR.
    pub editor: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rollover_offset: 5,
            file_destination: "Daily Journal".to_string(),
            template_path: String::new(),
            filename_prefix: "Daily Journal ".to_string(),
            filename_style: FilenameStyle::Date,
            vault_dir: default_vault_dir(),
            editor: None,
        }
    }
}

/// On-disk shape of the settings file. Every field is optional and merged over the defaults.
#[derive(Debug, Default, Deserialize, Serialize)]
struct FileSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    rollover_offset: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    file_destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filename_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    filename_style: Option<FilenameStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vault_dir: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    editor: Option<String>,
}

impl FileSettings {
    fn merge_over(self, defaults: Settings) -> Settings {
        Settings {
            rollover_offset: self.rollover_offset.unwrap_or(defaults.rollover_offset),
            file_destination: self.file_destination.unwrap_or(defaults.file_destination),
            template_path: self.template_path.unwrap_or(defaults.template_path),
            filename_prefix: self.filename_prefix.unwrap_or(defaults.filename_prefix),
            filename_style: self.filename_style.unwrap_or(defaults.filename_style),
            vault_dir: self
                .vault_dir
                .map(|p| expand_home(&p))
                .unwrap_or(defaults.vault_dir),
            editor: self.editor.or(defaults.editor),
        }
    }
}

impl From<&Settings> for FileSettings {
    fn from(s: &Settings) -> Self {
        Self {
            rollover_offset: Some(s.rollover_offset),
            file_destination: Some(s.file_destination.clone()),
            template_path: Some(s.template_path.clone()),
            filename_prefix: Some(s.filename_prefix.clone()),
            filename_style: Some(s.filename_style),
            vault_dir: Some(s.vault_dir.clone()),
            editor: s.editor.clone(),
        }
    }
}

/// Default vault root: `{data_dir}/dj`
/// - macOS:   `~/Library/Application Support/dj`
/// - Linux:   `$XDG_DATA_HOME/dj` or `~/.local/share/dj`
/// - Windows: `%APPDATA%\dj`
fn default_vault_dir() -> PathBuf {
    if let Some(base) = BaseDirs::new() {
        let mut p = base.data_dir().to_path_buf();
        p.push("dj");
        p
    } else {
        PathBuf::from("./dj")
    }
}

/// Expands a leading `~` or `~/` to the home directory. `~user` forms are left alone.
pub(crate) fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), BaseDirs::new()) {
        (Ok(rest), Some(b)) => b.home_dir().join(rest),
        _ => path.to_path_buf(),
    }
}

/// Persists [`Settings`] as a TOML file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Uses the first existing config file (XDG path, then native), or the XDG path when
    /// none exists yet so the first save lands there.
    pub fn locate() -> Self {
        let candidates = Self::config_file_paths();
        let path = candidates
            .iter()
            .find(|p| p.exists())
            .or_else(|| candidates.first())
            .cloned()
            .unwrap_or_else(|| PathBuf::from("./dj.toml"));
        Self { path }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("dj").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("dj").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Loads settings merged over the defaults. A missing file yields the defaults.
    pub fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        let s = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let file = Self::parse_file(&s).with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(file.merge_over(Settings::default()))
    }

    /// Writes every field, creating the parent directory if needed.
    pub fn save(&self, settings: &Settings) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let s = toml::to_string(&FileSettings::from(settings)).context("serializing settings")?;
        fs::write(&self.path, s).with_context(|| format!("writing {}", self.path.display()))?;
        debug!(path = %self.path.display(), "settings saved");
        Ok(())
    }

    /// Applies a textual change to one field and saves right away.
    pub fn update(&self, settings: &mut Settings, key: &str, value: &str) -> Result<()> {
        schema::set(settings, key, value)?;
        self.save(settings)
    }

    fn parse_file(s: &str) -> Result<FileSettings> {
        Ok(toml::from_str::<FileSettings>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SettingsError;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_the_documented_values() {
        let s = Settings::default();
        assert_eq!(s.rollover_offset, 5);
        assert_eq!(s.file_destination, "Daily Journal");
        assert_eq!(s.template_path, "");
        assert_eq!(s.filename_prefix, "Daily Journal ");
        assert_eq!(s.filename_style, FilenameStyle::Date);
        assert!(s.editor.is_none());
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("dj").join("config.toml");
            let expected_native = b.config_dir().join("dj").join("config.toml");
            let c = SettingsStore::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn partial_file_only_overrides_named_fields() {
        let toml = r#"
            rollover_offset = 3
            filename_prefix = "Journal "
            filename_style = "number"
        "#;
        let s = SettingsStore::parse_file(toml)
            .unwrap()
            .merge_over(Settings::default());
        assert_eq!(s.rollover_offset, 3);
        assert_eq!(s.filename_prefix, "Journal ");
        assert_eq!(s.filename_style, FilenameStyle::Number);
        assert_eq!(s.file_destination, "Daily Journal");
        assert_eq!(s.template_path, "");
    }

    #[test]
    fn vault_dir_expands_home() {
        let Some(b) = BaseDirs::new() else { return };
        let s = SettingsStore::parse_file("vault_dir = \"~/Notes\"")
            .unwrap()
            .merge_over(Settings::default());
        assert_eq!(s.vault_dir, b.home_dir().join("Notes"));
        assert_eq!(expand_home(Path::new("~")), b.home_dir());
    }

    #[test]
    fn only_a_leading_tilde_component_is_expanded() {
        assert_eq!(expand_home(Path::new("/srv/notes")), PathBuf::from("/srv/notes"));
        assert_eq!(expand_home(Path::new("~alice/notes")), PathBuf::from("~alice/notes"));
        assert_eq!(expand_home(Path::new("notes/~")), PathBuf::from("notes/~"));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let tmp = tempdir().unwrap();
        let store = SettingsStore::at(tmp.path().join("nope.toml"));
        assert_eq!(store.load().unwrap(), Settings::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "rollover_offset = \"five\"").unwrap();
        assert!(SettingsStore::at(path).load().is_err());
    }

    #[test]
    fn save_then_load_keeps_every_field() {
        let tmp = tempdir().unwrap();
        let store = SettingsStore::at(tmp.path().join("dj").join("config.toml"));
        let settings = Settings {
            rollover_offset: -2,
            file_destination: "Journal/Daily".to_string(),
            template_path: "Templates/Day.md".to_string(),
            filename_prefix: "".to_string(),
            filename_style: FilenameStyle::Number,
            vault_dir: tmp.path().join("vault"),
            editor: Some("hx".to_string()),
        };
        store.save(&settings).unwrap();
        assert_eq!(store.load().unwrap(), settings);
    }

    #[test]
    fn update_saves_immediately() {
        let tmp = tempdir().unwrap();
        let store = SettingsStore::at(tmp.path().join("config.toml"));
        let mut settings = Settings::default();

        store
            .update(&mut settings, "template_path", "Template.md")
            .unwrap();

        assert_eq!(settings.template_path, "Template.md");
        assert_eq!(store.load().unwrap().template_path, "Template.md");
    }

    #[test]
    fn rejected_update_leaves_file_untouched() {
        let tmp = tempdir().unwrap();
        let store = SettingsStore::at(tmp.path().join("config.toml"));
        let mut settings = Settings::default();

        let err = store
            .update(&mut settings, "rollover_offset", "soon")
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SettingsError>(),
            Some(SettingsError::InvalidValue { .. })
        ));
        assert_eq!(settings.rollover_offset, 5);
        assert!(!store.path().exists());
    }
}
