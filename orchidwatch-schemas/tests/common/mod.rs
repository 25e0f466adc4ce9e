//! Store snapshots shared by the boundary tests

use serde_json::{json, Value};

/// 2024-06-03 07:00:00 UTC, a Monday
pub const MONDAY_0700_MS: u64 = 1_717_398_000_000;

/// One hour in epoch ms
pub const HOUR_MS: u64 = 3_600_000;

/// A whole store as the original deployment laid it out
pub fn store() -> Value {
    json!({
        "sensors": {
            "current": { "temperature": 15.0, "humidity": 50.0, "timestamp": MONDAY_0700_MS },
            "history": {
                "-Nh3": { "temperature": 21.0, "humidity": 80.0, "timestamp": MONDAY_0700_MS - HOUR_MS },
                "-Nh1": { "temperature": 19.5, "humidity": 82.0, "timestamp": MONDAY_0700_MS - 3 * HOUR_MS },
                "-Nh2": { "temperature": 20.0, "timestamp": MONDAY_0700_MS - 2 * HOUR_MS },
                "-Nh0": { "temperature": 18.0, "humidity": 79.0, "timestamp": MONDAY_0700_MS - 30 * HOUR_MS }
            }
        },
        "irrigation": {
            "schedule": {
                "-Ns1": { "time": "07:00", "days": [1, 3, 5], "createdAt": 1_717_390_000_000u64 },
                "-Ns2": { "time": "07:00", "days": [2, 4], "createdAt": 1_717_390_100_000u64 },
                "-Ns3": { "time": "seven", "days": [1] },
                "-Ns4": { "time": "18:30", "days": [] }
            }
        },
        "config": { "dataFrequency": 15 }
    })
}

/// Value at a slash-separated store path
pub fn at<'a>(store: &'a Value, path: &str) -> &'a Value {
    path.split('/').fold(store, |node, segment| &node[segment])
}
