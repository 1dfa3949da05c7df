//! History aggregation: pure grouping of records by calendar date.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::day_group::DayGroup;
use crate::models::record::IntakeRecord;
use crate::utils::date;

/// Group records by date, most recent date first.
/// Within a group, records are ordered most recent timestamp first and the
/// total is the sum of the group's amounts.
pub fn group_by_date<'a, I>(records: I) -> Vec<DayGroup<'a>>
where
    I: IntoIterator<Item = &'a IntakeRecord>,
{
    // "YYYY-MM-DD" keys sort lexicographically in calendar order.
    let mut by_date: BTreeMap<&str, DayGroup<'_>> = BTreeMap::new();

    for record in records {
        let group = by_date.entry(record.date.as_str()).or_insert(DayGroup {
            date: &record.date,
            total: 0,
            records: Vec::new(),
        });
        group.total += record.amount;
        group.records.push(record);
    }

    let mut groups: Vec<DayGroup<'_>> = by_date.into_values().collect();
    groups.reverse();

    for group in &mut groups {
        group.records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }

    groups
}

/// Restrict records to an inclusive date range before grouping.
pub fn filter_by_bounds<'a>(
    records: &'a [IntakeRecord],
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> Vec<&'a IntakeRecord> {
    match bounds {
        None => records.iter().collect(),
        Some((start, end)) => records
            .iter()
            .filter(|r| match date::parse_date(&r.date) {
                Some(d) => d >= start && d <= end,
                None => false,
            })
            .collect(),
    }
}
