//! Literal placeholder substitution for entry templates.
//!
//! Supported placeholders:
//!   `{{ date }}`            the moment the entry was opened
//!   `{{ journal_date }}`    the journal date at midnight
//!   `{{ journal_number }}`  days since the journal epoch

use crate::dates::JournalDay;

pub const DATE_TOKEN: &str = "{{ date }}";
pub const JOURNAL_DATE_TOKEN: &str = "{{ journal_date }}";
pub const JOURNAL_NUMBER_TOKEN: &str = "{{ journal_number }}";

/// Values substituted into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateVariables {
    pub date: String,
    pub journal_date: String,
    pub journal_number: String,
}

impl TemplateVariables {
    pub fn for_day(day: &JournalDay) -> Self {
        Self {
            date: day.timestamp(),
            journal_date: day.journal_date_stamp(),
            journal_number: day.number.to_string(),
        }
    }

    fn substitutions(&self) -> [(&'static str, &str); 3] {
        [
            (DATE_TOKEN, self.date.as_str()),
            (JOURNAL_DATE_TOKEN, self.journal_date.as_str()),
            (JOURNAL_NUMBER_TOKEN, self.journal_number.as_str()),
        ]
    }
}

/// Replaces the first occurrence of each placeholder.
///
/// Only the first occurrence is substituted; repeated placeholders stay as literal text.
/// Anything that isn't one of the three known tokens is left untouched.
pub fn render(template: &str, vars: &TemplateVariables) -> String {
    vars.substitutions()
        .into_iter()
        .fold(template.to_string(), |text, (token, value)| {
            text.replacen(token, value, 1)
        })
}
