//! Shared fixtures and generators for the core integration tests
//!
//! Provides:
//! - proptest strategies for temperatures, humidities and schedules
//! - builders for schedule entries from plain literals

#![allow(dead_code)]

use orchidwatch_core::{DaySet, ScheduleEntry, TimeOfDay, WallClock};
use proptest::prelude::*;

/// Temperatures a greenhouse sensor can plausibly report, plus margin
pub fn temperature() -> impl Strategy<Value = f32> {
    -40.0f32..60.0
}

/// Relative humidity, including slightly out-of-range sensor drift
pub fn humidity() -> impl Strategy<Value = f32> {
    -5.0f32..105.0
}

/// Any valid time of day
pub fn time_of_day() -> impl Strategy<Value = TimeOfDay> {
    (0u8..24, 0u8..60).prop_map(|(h, m)| TimeOfDay::new(h, m).unwrap())
}

/// Any non-empty day set
pub fn day_set() -> impl Strategy<Value = DaySet> {
    proptest::collection::vec(0u8..7, 1..7).prop_map(|days| DaySet::from_days(days).unwrap())
}

/// Any instant the schedule can observe
pub fn wall_clock() -> impl Strategy<Value = WallClock> {
    (0u8..7, time_of_day()).prop_map(|(day, time)| {
        WallClock::new(orchidwatch_core::weekday_from_index(day).unwrap(), time)
    })
}

/// Up to 12 entries with unique ids `e0..eN`
///
/// Times are drawn from a handful of slots so matches actually happen.
pub fn schedule() -> impl Strategy<Value = Vec<ScheduleEntry>> {
    let slot = prop_oneof![
        Just(TimeOfDay::new(7, 0).unwrap()),
        Just(TimeOfDay::new(12, 30).unwrap()),
        Just(TimeOfDay::new(18, 0).unwrap()),
    ];
    proptest::collection::vec((slot, day_set()), 0..12).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (time, days))| ScheduleEntry::new(&format!("e{i}"), time, days).unwrap())
            .collect()
    })
}

/// Entry from literals, panicking on bad fixtures
pub fn entry(id: &str, hm: &str, days: &[u8]) -> ScheduleEntry {
    ScheduleEntry::new(
        id,
        TimeOfDay::parse(hm).unwrap(),
        DaySet::from_days(days.iter().copied()).unwrap(),
    )
    .unwrap()
}
