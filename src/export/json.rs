use crate::errors::AppResult;
use crate::export::model::DayExport;

/// Serialize the grouped view as pretty-printed JSON (two-space indent),
/// the canonical export payload.
pub fn render_json(days: &[DayExport]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(days)?)
}
