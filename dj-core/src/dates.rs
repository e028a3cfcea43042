//! Journal date resolution.
//!
//! A journal day does not start at midnight: anything written up to and including the
//! configured rollover hour still belongs to the previous calendar day. Each journal day
//! also gets a sequential number counted from [`epoch`].

use chrono::{DateTime, Days, FixedOffset, NaiveDate, NaiveTime, TimeDelta, Timelike};

/// Format used for the `{{ date }}` and `{{ journal_date }}` template values.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Format used for the date part of entry filenames.
pub const FILE_DATE_FORMAT: &str = "%Y-%m-%d";

const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Day zero of the journal numbering: 2019-07-07.
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2019, 7, 7).expect("valid date")
}

/// Returns the logical journal date for `now`.
///
/// If the hour of `now` is less than or equal to `rollover_offset`, the entry still belongs
/// to yesterday. The comparison is inclusive: with an offset of 5, 05:59 is yesterday and
/// 06:00 is today. Offsets outside 0..=23 are accepted as is (negative never rolls back,
/// 23 and above always does).
pub fn resolve_journal_date(now: DateTime<FixedOffset>, rollover_offset: i64) -> NaiveDate {
    let date = now.date_naive();
    if i64::from(now.hour()) <= rollover_offset {
        date.checked_sub_days(Days::new(1)).unwrap_or(date)
    } else {
        date
    }
}

/// Number of whole days between [`epoch`] and `journal_date`.
///
/// Both dates are anchored at midnight in the same offset as the invoking clock, so the
/// offset cancels out and a daylight-saving shift can't produce an off-by-one.
pub fn day_number(journal_date: NaiveDate) -> i64 {
    let start = epoch().and_time(NaiveTime::MIN);
    let end = journal_date.and_time(NaiveTime::MIN);
    end.signed_duration_since(start)
        .num_milliseconds()
        .div_euclid(MS_PER_DAY)
}

/// The resolved journal day for a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JournalDay {
    pub now: DateTime<FixedOffset>,
    pub date: NaiveDate,
    pub number: i64,
    /// UTC offset in effect at the journal date's midnight.
    pub midnight_offset: FixedOffset,
}

impl JournalDay {
    pub fn resolve(now: DateTime<FixedOffset>, rollover_offset: i64) -> Self {
        let date = resolve_journal_date(now, rollover_offset);
        Self {
            now,
            date,
            number: day_number(date),
            midnight_offset: *now.offset(),
        }
    }

    /// Stamps the journal date's midnight with `offset` instead of the offset of `now`.
    /// They differ when a daylight-saving change falls between the two.
    pub fn with_midnight_offset(self, offset: FixedOffset) -> Self {
        Self {
            midnight_offset: offset,
            ..self
        }
    }

    /// `now` as `2024-03-01T04:00:00+01:00`.
    pub fn timestamp(&self) -> String {
        self.now.format(TIMESTAMP_FORMAT).to_string()
    }

    /// The journal date at 00:00:00, e.g. `2024-02-29T00:00:00+01:00`.
    pub fn journal_date_stamp(&self) -> String {
        let offset = self.midnight_offset;
        let utc = self.date.and_time(NaiveTime::MIN)
            - TimeDelta::seconds(i64::from(offset.local_minus_utc()));
        DateTime::<FixedOffset>::from_naive_utc_and_offset(utc, offset)
            .format(TIMESTAMP_FORMAT)
            .to_string()
    }

    /// The journal date as `YYYY-MM-DD`.
    pub fn file_date(&self) -> String {
        self.date.format(FILE_DATE_FORMAT).to_string()
    }
}
