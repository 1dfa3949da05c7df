use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::goal::GoalStore;
use crate::core::records::RecordStore;
use crate::db::oplog::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::fmt_ml;

/// Log a water intake dated now.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { amount } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        let mut store = RecordStore::load(&mut pool);
        let goal = GoalStore::load(&mut pool);

        // Non-positive input is rejected at the boundary, not an error.
        let Some(record) = store.add(&mut pool, *amount)? else {
            warning("Amount must be a positive number of milliliters.");
            return Ok(());
        };

        oplog(
            &pool.conn,
            "add",
            &record.id.to_string(),
            &format!("{} ml at {}", record.amount, record.time_str()),
        )?;

        let total = store.total_on(date::today());
        success(format!(
            "Logged {} (id {}). Today: {} of {}.",
            fmt_ml(record.amount),
            record.id,
            fmt_ml(total),
            fmt_ml(goal.value()),
        ));
    }

    Ok(())
}
