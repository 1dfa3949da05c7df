// src/export/model.rs

use serde::Serialize;

use crate::models::day_group::DayGroup;
use crate::utils::date;

/// One exported day: the grouped history view, flattened for serialization.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DayExport {
    pub date: String,
    pub formatted_date: String,
    pub total_ml: i64,
    pub items: Vec<ItemExport>,
}

#[derive(Serialize, Clone, Debug)]
pub struct ItemExport {
    pub amount: i64,
    pub time: String,
}

/// Convert day groups (already most-recent-first, records latest-first)
/// into the export payload.
pub fn build_export(groups: &[DayGroup<'_>]) -> Vec<DayExport> {
    groups
        .iter()
        .map(|day| DayExport {
            date: day.date.to_string(),
            formatted_date: date::format_day_heading(day.date, true),
            total_ml: day.total,
            items: day
                .records
                .iter()
                .map(|r| ItemExport {
                    amount: r.amount,
                    time: r.time_str(),
                })
                .collect(),
        })
        .collect()
}
