use crate::Settings;
use crate::paths::FilenameStyle;
use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone};
use std::path::PathBuf;

/// Test helper to create a default `Settings` for testing purposes.
///
/// This is the single source of truth for test settings.
/// If you add a field to `Settings`, you only need to update it here.
pub fn mk_settings() -> Settings {
    Settings {
        rollover_offset: 5,
        file_destination: "Daily Journal".to_string(),
        template_path: String::new(),
        filename_prefix: "Daily Journal ".to_string(),
        filename_style: FilenameStyle::Date,
        vault_dir: PathBuf::from("./vault"),
        editor: None,
    }
}

/// A local time at UTC+01:00.
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<FixedOffset> {
    let naive = NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap();
    FixedOffset::east_opt(3600)
        .unwrap()
        .from_local_datetime(&naive)
        .unwrap()
}
