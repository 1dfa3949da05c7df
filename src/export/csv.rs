use crate::errors::{AppError, AppResult};
use crate::export::model::DayExport;

/// Flatten the grouped view into `date,time,amount_ml` rows.
pub fn render_csv(days: &[DayExport]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["date", "time", "amount_ml"])
        .map_err(|e| AppError::Export(e.to_string()))?;

    for day in days {
        for item in &day.items {
            wtr.write_record([day.date.as_str(), &item.time, &item.amount.to_string()])
                .map_err(|e| AppError::Export(e.to_string()))?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}
