use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::goal::GoalStore;
use crate::db::oplog::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::fmt_ml;

/// Show or update the daily goal.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Goal { set } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut goal = GoalStore::load(&mut pool);

        match set {
            None => {
                println!("Daily goal: {}", fmt_ml(goal.value()));
            }
            Some(new_goal) => {
                if goal.update(&mut pool, *new_goal)? {
                    oplog(&pool.conn, "goal", &new_goal.to_string(), "goal updated")?;
                    success(format!("Daily goal set to {}.", fmt_ml(goal.value())));
                } else {
                    warning("Goal must be a positive number of milliliters.");
                }
            }
        }
    }

    Ok(())
}
