//! History chart data

use chrono::NaiveDateTime;
use orchidwatch_core::{time::window_start, Reading, Timestamp};
use serde::Serialize;

use crate::{config::check_history_hours, DashboardResult};

/// Axis label format, e.g. `03/06 07:00`
pub const LABEL_FORMAT: &str = "%d/%m %H:%M";

/// Look-back window of the history chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryWindow {
    hours: u32,
}

impl HistoryWindow {
    /// Window of `hours`, restricted to the values the chart offers
    pub fn new(hours: u32) -> DashboardResult<Self> {
        check_history_hours(hours)?;
        Ok(Self { hours })
    }

    /// Length in hours
    pub const fn hours(&self) -> u32 {
        self.hours
    }

    /// First timestamp inside the window ending at `now`
    pub fn since(&self, now: Timestamp) -> Timestamp {
        window_start(now, self.hours)
    }
}

/// One chart point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    /// Local time label
    pub label: String,
    /// Epoch ms
    pub timestamp: Timestamp,
    /// °C
    pub temperature: f32,
    /// %RH
    pub humidity: f32,
}

/// Chart data for one window, oldest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySeries {
    /// Window the series covers
    pub window: HistoryWindow,
    /// Points in ascending time order
    pub points: Vec<HistoryPoint>,
}

impl HistorySeries {
    /// Build from sorted readings, labelling each with its local time
    ///
    /// Readings whose timestamp has no local representation are dropped.
    pub fn build<F>(window: HistoryWindow, readings: &[Reading], to_local: F) -> Self
    where
        F: Fn(Timestamp) -> Option<NaiveDateTime>,
    {
        let points = readings
            .iter()
            .filter_map(|reading| {
                let local = to_local(reading.timestamp)?;
                Some(HistoryPoint {
                    label: local.format(LABEL_FORMAT).to_string(),
                    timestamp: reading.timestamp,
                    temperature: reading.temperature,
                    humidity: reading.humidity,
                })
            })
            .collect();

        Self { window, points }
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the window holds no readings
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Axis labels in order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|point| point.label.as_str())
    }
}
