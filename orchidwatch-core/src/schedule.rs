//! Irrigation schedule matching
//!
//! ## Model
//!
//! A schedule entry is a recurring trigger: a time of day with minute
//! resolution plus a set of weekdays. Day indices follow the browser
//! convention, `0 = Sunday .. 6 = Saturday`.
//!
//! ```text
//! entry "a": 07:00 on {Mon, Wed, Fri}
//! entry "b": 07:00 on {Tue, Thu}
//!
//! now = Mon 07:00  → due: [a]
//! now = Mon 07:01  → due: []
//! ```
//!
//! ## Matching
//!
//! An entry is due iff the current weekday is in its set *and* the current
//! `HH:MM` equals its time exactly. There is no tolerance window; the caller
//! decides how often to ask and how to avoid firing the same minute twice.
//!
//! Matching is pure and order preserving: the due entries come back in the
//! order they were given, and the input is never modified. An entry whose
//! day set is empty can never be due.

use core::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use heapless::String;

use crate::{
    constants::{buffers::MAX_ENTRY_ID_LEN, time::DAYS_PER_WEEK},
    errors::{CoreError, CoreResult},
};

/// Inline schedule entry identifier (opaque store key)
pub type EntryId = String<MAX_ENTRY_ID_LEN>;

/// Weekdays indexed from Sunday
const WEEKDAYS_FROM_SUNDAY: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Short display names, indexed from Sunday
const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday for a Sunday-based index
pub fn weekday_from_index(day: u8) -> CoreResult<Weekday> {
    WEEKDAYS_FROM_SUNDAY
        .get(usize::from(day))
        .copied()
        .ok_or(CoreError::InvalidDay { day })
}

/// Sunday-based index of a weekday
pub fn weekday_index(day: Weekday) -> u8 {
    // num_days_from_sunday is always 0..=6
    day.num_days_from_sunday() as u8
}

/// Build an entry id from a store key
pub fn entry_id(key: &str) -> CoreResult<EntryId> {
    let mut id = EntryId::new();
    id.push_str(key).map_err(|_| CoreError::IdTooLong {
        len: key.len(),
        max: MAX_ENTRY_ID_LEN,
    })?;
    Ok(id)
}

/// Time of day with minute resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Build from hour (0-23) and minute (0-59)
    pub fn new(hour: u8, minute: u8) -> CoreResult<Self> {
        if hour > 23 {
            return Err(CoreError::InvalidTime { reason: "hour must be 00-23" });
        }
        if minute > 59 {
            return Err(CoreError::InvalidTime { reason: "minute must be 00-59" });
        }
        Ok(Self { hour, minute })
    }

    /// Parse a zero-padded 24-hour `HH:MM`
    ///
    /// Exactly five characters; `7:00`, `07:00:00` and `7h00` are rejected so
    /// that equality of parsed values is equality of the original strings.
    pub fn parse(hm: &str) -> CoreResult<Self> {
        let bytes = hm.as_bytes();
        if bytes.len() != 5 {
            return Err(CoreError::InvalidTime { reason: "expected HH:MM" });
        }
        if bytes[2] != b':' {
            return Err(CoreError::InvalidTime { reason: "missing ':' separator" });
        }

        let hour = two_digits(bytes[0], bytes[1])?;
        let minute = two_digits(bytes[3], bytes[4])?;
        Self::new(hour, minute)
    }

    /// Hour of day
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute of hour
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

fn two_digits(tens: u8, ones: u8) -> CoreResult<u8> {
    if !tens.is_ascii_digit() || !ones.is_ascii_digit() {
        return Err(CoreError::InvalidTime { reason: "non-digit in HH:MM" });
    }
    Ok((tens - b'0') * 10 + (ones - b'0'))
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Set of weekdays, one bit per day (bit 0 = Sunday)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySet(u8);

impl DaySet {
    /// No days
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every day of the week
    pub const fn all() -> Self {
        Self(0b0111_1111)
    }

    /// Build from Sunday-based indices; duplicates collapse
    pub fn from_days<I: IntoIterator<Item = u8>>(days: I) -> CoreResult<Self> {
        let mut set = Self::empty();
        for day in days {
            set.insert(weekday_from_index(day)?);
        }
        Ok(set)
    }

    /// Add a weekday
    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << weekday_index(day);
    }

    /// Check membership
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & (1 << weekday_index(day)) != 0
    }

    /// True when no day is set
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Number of days in the set
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Sunday-based indices in ascending order
    pub fn indices(&self) -> impl Iterator<Item = u8> + '_ {
        (0..DAYS_PER_WEEK).filter(move |&day| self.0 & (1 << day) != 0)
    }
}

impl fmt::Display for DaySet {
    /// Short names joined by `", "`, e.g. `Mon, Wed, Fri`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.indices().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(DAY_NAMES[usize::from(day)])?;
        }
        Ok(())
    }
}

/// A recurring irrigation trigger
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleEntry {
    /// Store-assigned key, unique per entry
    pub id: EntryId,
    /// Time of day the entry fires
    pub time: TimeOfDay,
    /// Weekdays the entry fires on
    pub days: DaySet,
}

impl ScheduleEntry {
    /// Build a validated entry
    pub fn new(id: &str, time: TimeOfDay, days: DaySet) -> CoreResult<Self> {
        if days.is_empty() {
            return Err(CoreError::EmptyDays);
        }

        Ok(Self {
            id: entry_id(id)?,
            time,
            days,
        })
    }
}

/// Current instant as the schedule sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WallClock {
    /// Day of week
    pub day: Weekday,
    /// Local time of day
    pub time: TimeOfDay,
}

impl WallClock {
    /// Build from parts
    pub const fn new(day: Weekday, time: TimeOfDay) -> Self {
        Self { day, time }
    }

    /// Build from a Sunday-based day index and `HH:MM`
    pub fn parse(day: u8, hm: &str) -> CoreResult<Self> {
        Ok(Self {
            day: weekday_from_index(day)?,
            time: TimeOfDay::parse(hm)?,
        })
    }

    /// Truncate a local date-time to the minute
    pub fn from_datetime(local: &NaiveDateTime) -> Self {
        Self {
            day: local.weekday(),
            // hour() < 24 and minute() < 60 by construction
            time: TimeOfDay {
                hour: local.hour() as u8,
                minute: local.minute() as u8,
            },
        }
    }
}

/// Whether `entry` fires at `now`
pub fn is_due(now: &WallClock, entry: &ScheduleEntry) -> bool {
    entry.days.contains(now.day) && entry.time == now.time
}

/// Entries due at `now`, in input order
pub fn due_entries<'a>(
    now: &'a WallClock,
    entries: &'a [ScheduleEntry],
) -> impl Iterator<Item = &'a ScheduleEntry> + 'a {
    entries.iter().filter(move |entry| is_due(now, entry))
}
