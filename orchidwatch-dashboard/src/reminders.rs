//! Irrigation reminder de-duplication
//!
//! The schedule matcher answers "is anything due at this minute?". The
//! timer that asks drifts: two ticks can land in the same minute, and a
//! late tick can skip a minute entirely. The tracker turns the matcher into
//! an at-most-once-per-minute source:
//!
//! ```text
//! last evaluated   current    evaluated now
//! none             07:00      07:00
//! 07:00            07:00      (nothing)
//! 07:00            07:02      07:01, 07:02
//! 07:00            07:30      07:28, 07:29, 07:30   (catch-up = 2)
//! 07:30            07:10      07:10                 (clock moved back)
//! ```
//!
//! A backwards jump restarts tracking at the new minute, so correcting a
//! clock that ran ahead does not silence the schedule until it catches up.

use chrono::{NaiveDateTime, TimeDelta, Timelike};
use orchidwatch_core::{due_entries, ReminderEvent, ScheduleEntry, Timestamp, WallClock};

/// A due entry together with the reminder raised for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueReminder {
    /// Event handed to the view
    pub event: ReminderEvent,
    /// Entry that matched
    pub entry: ScheduleEntry,
    /// Wall-clock minute the entry matched
    pub minute: WallClock,
}

/// Remembers the last evaluated minute
#[derive(Debug, Clone)]
pub struct ReminderTracker {
    last: Option<NaiveDateTime>,
    catch_up_minutes: u32,
}

impl ReminderTracker {
    /// Tracker that re-checks at most `catch_up_minutes` skipped minutes
    pub fn new(catch_up_minutes: u32) -> Self {
        Self {
            last: None,
            catch_up_minutes,
        }
    }

    /// Last minute that was evaluated
    pub fn last_evaluated(&self) -> Option<NaiveDateTime> {
        self.last
    }

    /// Evaluate every minute not yet seen, up to and including `local`
    pub fn poll(
        &mut self,
        local: NaiveDateTime,
        fired_at: Timestamp,
        entries: &[ScheduleEntry],
    ) -> Vec<DueReminder> {
        let current = truncate_to_minute(local);
        let earliest = current - TimeDelta::minutes(i64::from(self.catch_up_minutes));

        let first = match self.last {
            Some(last) if current == last => return Vec::new(),
            Some(last) if current < last => {
                log::info!("clock moved back from {last} to {current}, restarting reminder tracking");
                current
            }
            Some(last) => (last + TimeDelta::minutes(1)).max(earliest),
            None => current,
        };
        self.last = Some(current);

        let mut due = Vec::new();
        let mut minute = first;
        while minute <= current {
            let now = WallClock::from_datetime(&minute);
            for entry in due_entries(&now, entries) {
                due.push(DueReminder {
                    event: ReminderEvent {
                        entry_id: entry.id.clone(),
                        fired_at,
                    },
                    entry: entry.clone(),
                    minute: now,
                });
            }
            minute += TimeDelta::minutes(1);
        }
        due
    }
}

impl Default for ReminderTracker {
    fn default() -> Self {
        Self::new(2)
    }
}

fn truncate_to_minute(local: NaiveDateTime) -> NaiveDateTime {
    local
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use orchidwatch_core::{DaySet, TimeOfDay};

    fn june(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    // 2024-06-03 was a Monday
    fn monday(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(hour, minute, second)
            .unwrap()
    }

    fn entry(id: &str, hm: &str) -> ScheduleEntry {
        ScheduleEntry::new(id, TimeOfDay::parse(hm).unwrap(), DaySet::from_days([1]).unwrap()).unwrap()
    }

    fn ids(due: &[DueReminder]) -> Vec<&str> {
        due.iter().map(|d| d.event.entry_id.as_str()).collect()
    }

    #[test]
    fn fires_once_per_minute() {
        let entries = [entry("a", "07:00")];
        let mut tracker = ReminderTracker::default();

        assert_eq!(ids(&tracker.poll(monday(7, 0, 1), 1, &entries)), vec!["a"]);
        assert!(tracker.poll(monday(7, 0, 59), 2, &entries).is_empty());
        assert!(tracker.poll(monday(7, 1, 0), 3, &entries).is_empty());
    }

    #[test]
    fn catches_up_a_skipped_minute() {
        let entries = [entry("a", "07:01")];
        let mut tracker = ReminderTracker::default();

        assert!(tracker.poll(monday(7, 0, 30), 1, &entries).is_empty());
        let due = tracker.poll(monday(7, 2, 10), 2, &entries);
        assert_eq!(ids(&due), vec!["a"]);
        assert_eq!(due[0].minute, WallClock::parse(1, "07:01").unwrap());
    }

    #[test]
    fn catch_up_is_bounded() {
        let entries = [entry("old", "07:05"), entry("recent", "07:29")];
        let mut tracker = ReminderTracker::new(2);

        tracker.poll(monday(7, 0, 0), 1, &entries);
        assert_eq!(ids(&tracker.poll(monday(7, 30, 0), 2, &entries)), vec!["recent"]);
    }

    #[test]
    fn first_poll_only_checks_current_minute() {
        let entries = [entry("a", "06:59")];
        let mut tracker = ReminderTracker::default();
        assert!(tracker.poll(monday(7, 0, 0), 1, &entries).is_empty());
        assert_eq!(tracker.last_evaluated(), Some(monday(7, 0, 0)));
    }

    #[test]
    fn clock_moving_back_checks_the_new_minute() {
        let entries = [entry("a", "07:10")];
        let mut tracker = ReminderTracker::default();
        tracker.poll(monday(7, 30, 0), 1, &entries);

        assert_eq!(ids(&tracker.poll(monday(7, 10, 0), 2, &entries)), vec!["a"]);
        assert_eq!(tracker.last_evaluated(), Some(monday(7, 10, 0)));
        assert!(tracker.poll(monday(7, 10, 30), 3, &entries).is_empty());
    }

    #[test]
    fn corrected_clock_keeps_daily_reminders() {
        let daily = ScheduleEntry::new("daily", TimeOfDay::new(7, 0).unwrap(), DaySet::all()).unwrap();
        let entries = [daily];
        let mut tracker = ReminderTracker::default();

        // clock was a week ahead, then corrected
        tracker.poll(june(10, 12, 0), 1, &entries);

        let fired: usize = (4..=9)
            .map(|day| tracker.poll(june(day, 7, 0), u64::from(day), &entries).len())
            .sum();
        assert_eq!(fired, 6);
    }

    #[test]
    fn zero_catch_up_checks_only_now() {
        let entries = [entry("a", "07:01")];
        let mut tracker = ReminderTracker::new(0);
        tracker.poll(monday(7, 0, 0), 1, &entries);
        assert!(tracker.poll(monday(7, 2, 0), 2, &entries).is_empty());
    }

    #[test]
    fn event_carries_fire_time() {
        let entries = [entry("a", "07:00")];
        let due = ReminderTracker::default().poll(monday(7, 0, 0), 42, &entries);
        assert_eq!(due[0].event.fired_at, 42);
        assert_eq!(due[0].entry, entries[0]);
    }
}
