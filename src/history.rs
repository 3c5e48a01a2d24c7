//! Session-scoped log of completed calculations.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::fmt::{self, Write as _};

/// Default number of records kept before the oldest is evicted.
pub const DEFAULT_CAPACITY: usize = 50;

/// Default strftime pattern for the time-of-day shown next to a record.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Whether chrono accepts every specifier in a strftime pattern.
pub fn is_valid_time_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}

/// One completed calculation. Never mutated after creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Unique identifier for this record.
    pub id: String,
    /// `"<operand> <symbol> <operand>"`, e.g. `"7 × 8"`.
    pub expression: String,
    /// The formatted result, at most 15 characters.
    pub result: String,
    /// Creation time in milliseconds since the Unix epoch.
    pub timestamp: i64,
}

impl CalculationRecord {
    /// Time of day in local time, e.g. `"14:05"`.
    pub fn time_of_day(&self, format: &str) -> String {
        self.time_of_day_in(&Local, format)
    }

    /// Time of day in the given time zone.
    ///
    /// Falls back to an empty string for timestamps chrono cannot represent
    /// and for patterns it cannot format.
    pub fn time_of_day_in<Tz: TimeZone>(&self, tz: &Tz, format: &str) -> String
    where
        Tz::Offset: fmt::Display,
    {
        let Some(utc) = DateTime::<Utc>::from_timestamp_millis(self.timestamp) else {
            return String::new();
        };
        let mut out = String::new();
        if write!(out, "{}", utc.with_timezone(tz).format(format)).is_err() {
            return String::new();
        }
        out
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Bounded list of records, newest first.
#[derive(Clone, Debug)]
pub struct HistoryLog {
    records: VecDeque<CalculationRecord>,
    capacity: usize,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryLog {
    /// Create an empty log holding up to [`DEFAULT_CAPACITY`] records.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty log with a custom bound. A bound of zero is raised to one.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: VecDeque::new(),
            capacity,
        }
    }

    /// Insert a record at the front, evicting the oldest one on overflow.
    ///
    /// Returns the evicted record, if any.
    pub fn append(&mut self, record: CalculationRecord) -> Option<CalculationRecord> {
        self.records.push_front(record);
        if self.records.len() > self.capacity {
            let evicted = self.records.pop_back();
            if let Some(old) = &evicted {
                tracing::warn!(id = %old.id, "evicted oldest history record");
            }
            evicted
        } else {
            None
        }
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Snapshot of the records, newest first.
    pub fn list(&self) -> Vec<CalculationRecord> {
        self.records.iter().cloned().collect()
    }

    /// Iterate over the records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &CalculationRecord> {
        self.records.iter()
    }

    /// The most recent record.
    pub fn latest(&self) -> Option<&CalculationRecord> {
        self.records.front()
    }

    /// Look a record up by id.
    pub fn get(&self, id: &str) -> Option<&CalculationRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Serialize the records (newest first) as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }
}
