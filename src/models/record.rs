use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::utils::date;

/// One logged water-drinking event.
///
/// Records are created on user action and deleted by id, never mutated in
/// place. `date` is derived from `timestamp` with the local calendar at
/// creation time and is the grouping key for history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub id: i64,
    pub amount: i64,    // milliliters, always > 0
    pub timestamp: i64, // epoch milliseconds
    pub date: String,   // "YYYY-MM-DD" in local time
}

impl IntakeRecord {
    pub fn new(id: i64, amount: i64, at: DateTime<Local>) -> Self {
        Self {
            id,
            amount,
            timestamp: at.timestamp_millis(),
            date: at.format("%Y-%m-%d").to_string(),
        }
    }

    /// Local wall-clock time of the intake, "HH:MM".
    pub fn time_str(&self) -> String {
        date::format_time_ms(self.timestamp)
    }
}
