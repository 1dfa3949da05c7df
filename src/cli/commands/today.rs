use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::goal::GoalStore;
use crate::core::quick::QuickAmounts;
use crate::core::records::RecordStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_progress};
use crate::utils::formatting::{fmt_ml, progress_bar, progress_percent};
use crate::utils::table::{Column, Table};
use crate::utils::date;

/// The daily entry screen: today's total against the goal, plus the most
/// recent additions.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Today { all } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let store = RecordStore::load(&mut pool);
        let goal = GoalStore::load(&mut pool);
        let quick = QuickAmounts::load(&mut pool);

        let today = date::today();
        let total = store.total_on(today);
        let records = store.records_on(today);

        let pct = progress_percent(total, goal.value());
        let color = color_for_progress(pct);

        println!("\n💧 Today's intake, {}", today.format("%Y-%m-%d"));
        println!(
            "   {}{} of {} ({:.0}%){}",
            color,
            fmt_ml(total),
            fmt_ml(goal.value()),
            pct,
            RESET
        );
        println!(
            "   {}{}{}",
            color,
            progress_bar(total, goal.value(), cfg.progress_width),
            RESET
        );

        if records.is_empty() {
            info("No water logged today yet.");
        } else {
            // latest additions first
            let mut latest: Vec<_> = records.iter().rev().copied().collect();
            if !all {
                latest.truncate(cfg.recent_limit);
            }

            let label = if *all { "Today's records" } else { "Recent additions" };
            println!("\n{} ({} of {}):", label, latest.len(), records.len());

            let mut table = Table::new(vec![
                Column::new("id", 6),
                Column::new("time", 5),
                Column::new("amount", 8),
            ]);
            for record in latest {
                table.add_row(vec![
                    record.id.to_string(),
                    record.time_str(),
                    fmt_ml(record.amount),
                ]);
            }
            print!("{}", table.render());
        }

        println!(
            "\nQuick amounts: {}",
            quick
                .values()
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
