//! Capabilities the journal needs from whatever hosts it.
//!
//! The orchestration in [`crate::journal`] never touches the filesystem, the terminal or
//! the system clock directly; it is handed a [`Host`] bundling these collaborators.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveTime, Offset, TimeZone};
use std::io;

/// Source of the current local time.
pub trait Clock {
    fn now(&self) -> DateTime<FixedOffset>;

    /// UTC offset of the clock's time zone at midnight starting `date`.
    /// Defaults to the offset of [`Clock::now`].
    fn midnight_offset(&self, date: NaiveDate) -> FixedOffset {
        let _ = date;
        *self.now().offset()
    }
}

/// The machine's local clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn midnight_offset(&self, date: NaiveDate) -> FixedOffset {
        // No local midnight exists when the zone springs forward at 00:00.
        match Local.from_local_datetime(&date.and_time(NaiveTime::MIN)).earliest() {
            Some(midnight) => midnight.offset().fix(),
            None => *self.now().offset(),
        }
    }
}

/// A clock stuck at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }
}

/// Read access to template files. Paths are vault-relative.
pub trait TemplateReader {
    fn exists(&self, path: &str) -> io::Result<bool>;
    fn read(&self, path: &str) -> io::Result<String>;
}

/// Where journal entries live. Paths are vault-relative.
pub trait FileStore {
    fn exists(&self, path: &str) -> io::Result<bool>;
    fn create_folder(&self, path: &str) -> io::Result<()>;
    /// Creates `path` with `content`. Must not replace an existing file.
    fn create_file(&self, path: &str, content: &str) -> io::Result<()>;
    /// Brings the file up in front of the user.
    fn open_file(&self, path: &str) -> io::Result<()>;
}

/// User-facing, fire-and-forget messages.
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Everything the journal borrows from its host for one run.
pub struct Host<'a> {
    pub clock: &'a dyn Clock,
    pub files: &'a dyn FileStore,
    pub templates: &'a dyn TemplateReader,
    pub notifier: &'a dyn Notifier,
}
