use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history;
use crate::core::records::RecordStore;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::fmt_ml;
use crate::utils::table::{Column, Table};

/// The history screen: day groups, most recent date first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { period } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let store = RecordStore::load(&mut pool);

        let bounds = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(date::period_bounds(p).map_err(AppError::InvalidPeriod)?),
        };

        let selected = history::filter_by_bounds(store.all(), bounds);

        if selected.is_empty() {
            info("No records yet.");
            return Ok(());
        }

        for group in history::group_by_date(selected) {
            println!(
                "\n{} ({})  |  {} record{}  |  {} total",
                date::format_day_heading(group.date, cfg.show_weekday),
                group.date,
                group.records.len(),
                if group.records.len() == 1 { "" } else { "s" },
                fmt_ml(group.total),
            );

            let mut table = Table::new(vec![
                Column::new("id", 6),
                Column::new("time", 5),
                Column::new("amount", 8),
            ]);
            for record in &group.records {
                table.add_row(vec![
                    record.id.to_string(),
                    record.time_str(),
                    fmt_ml(record.amount),
                ]);
            }
            print!("{}", table.render());
        }
    }

    Ok(())
}
