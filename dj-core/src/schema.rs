//! Description of the user-editable settings.
//!
//! Front ends render a settings panel from [`FIELDS`] and route edits through [`set`],
//! so the parsing rules live in one place.

use crate::config::{Settings, expand_home};
use crate::error::SettingsError;
use crate::paths::FilenameStyle;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;

pub struct SettingField {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub placeholder: &'static str,
    pub get: fn(&Settings) -> String,
    pub set: fn(&mut Settings, &str) -> Result<(), SettingsError>,
}

pub static FIELDS: &[SettingField] = &[
    SettingField {
        key: "rollover_offset",
        name: "Number Rollover Offset",
        description: "Offset the hour of day when the number changes",
        placeholder: "Enter whole number",
        get: |s| s.rollover_offset.to_string(),
        set: |s, v| {
            s.rollover_offset = parse_offset(v)?;
            Ok(())
        },
    },
    SettingField {
        key: "file_destination",
        name: "Journal Entry Location",
        description: "Location to store journal entries",
        placeholder: "E.g 'Daily Journal/'",
        get: |s| s.file_destination.clone(),
        set: |s, v| {
            s.file_destination = v.to_string();
            Ok(())
        },
    },
    SettingField {
        key: "template_path",
        name: "Journal Template Location",
        description: "Location to file containing daily journal template",
        placeholder: "E.g 'Template.md'",
        get: |s| s.template_path.clone(),
        set: |s, v| {
            s.template_path = v.to_string();
            Ok(())
        },
    },
    SettingField {
        key: "filename_prefix",
        name: "Journal filename prefix",
        description: "Prefix of filename for journal. Make sure to include trailing spaces if \
                      needed. \"Daily Journal \" becomes \"Daily Journal xxxx\".",
        placeholder: "E.g 'Daily Journal '",
        get: |s| s.filename_prefix.clone(),
        set: |s, v| {
            s.filename_prefix = v.to_string();
            Ok(())
        },
    },
    SettingField {
        key: "filename_style",
        name: "Journal filename style",
        description: "What follows the prefix: the journal date (YYYY-MM-DD) or the day number",
        placeholder: "date | number",
        get: |s| s.filename_style.as_ref().to_string(),
        set: |s, v| {
            s.filename_style = parse_style(v)?;
            Ok(())
        },
    },
    SettingField {
        key: "vault_dir",
        name: "Vault location",
        description: "Directory holding your notes; entry and template locations are relative to it",
        placeholder: "E.g '~/Notes'",
        get: |s| s.vault_dir.display().to_string(),
        set: |s, v| {
            s.vault_dir = expand_home(Path::new(v.trim()));
            Ok(())
        },
    },
    SettingField {
        key: "editor",
        name: "Editor",
        description: "Editor used to open entries. Empty falls back to $VISUAL, then $EDITOR",
        placeholder: "E.g 'hx'",
        get: |s| s.editor.clone().unwrap_or_default(),
        set: |s, v| {
            let v = v.trim();
            s.editor = (!v.is_empty()).then(|| v.to_string());
            Ok(())
        },
    },
];

/// Looks up a field by key.
pub fn find(key: &str) -> Option<&'static SettingField> {
    FIELDS.iter().find(|f| f.key == key)
}

/// Parses `value` into the field named `key`. On error `settings` is left unchanged.
pub fn set(settings: &mut Settings, key: &str, value: &str) -> Result<(), SettingsError> {
    let field = find(key).ok_or_else(|| SettingsError::UnknownKey(key.to_string()))?;
    (field.set)(settings, value)
}

/// Any integer is accepted, including values outside 0..=23.
fn parse_offset(value: &str) -> Result<i64, SettingsError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|e| SettingsError::InvalidValue {
            key: "rollover_offset",
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn parse_style(value: &str) -> Result<FilenameStyle, SettingsError> {
    FilenameStyle::from_str(value.trim()).map_err(|_| {
        let choices: Vec<String> = FilenameStyle::iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        SettingsError::InvalidValue {
            key: "filename_style",
            value: value.to_string(),
            reason: format!("expected one of: {}", choices.join(", ")),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_settings_field_is_described_once() {
        let keys: Vec<&str> = FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            [
                "rollover_offset",
                "file_destination",
                "template_path",
                "filename_prefix",
                "filename_style",
                "vault_dir",
                "editor",
            ]
        );
    }

    #[test]
    fn offset_accepts_out_of_range_integers() {
        let mut s = Settings::default();
        set(&mut s, "rollover_offset", "42").unwrap();
        assert_eq!(s.rollover_offset, 42);
        set(&mut s, "rollover_offset", " -1 ").unwrap();
        assert_eq!(s.rollover_offset, -1);
    }

    #[test]
    fn offset_rejects_non_numeric_input() {
        let mut s = Settings::default();
        let err = set(&mut s, "rollover_offset", "five").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::InvalidValue {
                key: "rollover_offset",
                ..
            }
        ));
        assert_eq!(s.rollover_offset, 5);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut s = Settings::default();
        assert_eq!(
            set(&mut s, "colour", "blue"),
            Err(SettingsError::UnknownKey("colour".to_string()))
        );
    }

    #[test]
    fn prefix_keeps_trailing_space() {
        let mut s = Settings::default();
        set(&mut s, "filename_prefix", "Journal ").unwrap();
        assert_eq!(s.filename_prefix, "Journal ");
        assert_eq!((find("filename_prefix").unwrap().get)(&s), "Journal ");
    }

    #[test]
    fn style_lists_choices_on_error() {
        let mut s = Settings::default();
        let err = set(&mut s, "filename_style", "weekday").unwrap_err();
        assert!(err.to_string().contains("date, number"));
        set(&mut s, "filename_style", "number").unwrap();
        assert_eq!((find("filename_style").unwrap().get)(&s), "number");
    }

    #[test]
    fn vault_dir_expands_home() {
        let mut s = Settings::default();
        set(&mut s, "vault_dir", " /srv/notes ").unwrap();
        assert_eq!(s.vault_dir, Path::new("/srv/notes"));
        if let Some(b) = directories::BaseDirs::new() {
            set(&mut s, "vault_dir", "~/Notes").unwrap();
            assert_eq!(s.vault_dir, b.home_dir().join("Notes"));
        }
    }

    #[test]
    fn empty_editor_clears_it() {
        let mut s = Settings::default();
        set(&mut s, "editor", "hx").unwrap();
        assert_eq!(s.editor.as_deref(), Some("hx"));
        set(&mut s, "editor", "").unwrap();
        assert!(s.editor.is_none());
    }
}
