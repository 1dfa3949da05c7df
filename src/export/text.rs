use crate::export::model::DayExport;
use crate::utils::formatting::fmt_ml;

/// Render the grouped view as a plain-text report.
pub fn render_text(days: &[DayExport]) -> String {
    let mut out = String::new();

    for (i, day) in days.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{} ({})  total {}\n",
            day.formatted_date,
            day.date,
            fmt_ml(day.total_ml)
        ));
        for item in &day.items {
            out.push_str(&format!("  {}  {}\n", item.time, fmt_ml(item.amount)));
        }
    }

    out
}
