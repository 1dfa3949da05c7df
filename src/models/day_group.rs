use crate::models::record::IntakeRecord;

/// All intakes of one calendar date, with their sum.
/// Holds read references only; the record store owns the data.
#[derive(Debug)]
pub struct DayGroup<'a> {
    pub date: &'a str,
    pub total: i64,
    pub records: Vec<&'a IntakeRecord>,
}
