use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::quick::QuickAmounts;
use crate::db::oplog::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Show or manage the quick-add presets.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Quick { add, remove } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut quick = QuickAmounts::load(&mut pool);

        if let Some(amount) = add {
            if quick.add(&mut pool, *amount)? {
                oplog(&pool.conn, "quick", &amount.to_string(), "preset added")?;
                success(format!("Quick amount {} ml added.", amount));
            } else if *amount <= 0 {
                warning("Quick amount must be a positive number of milliliters.");
            } else {
                warning(format!("Quick amount {} ml is already present.", amount));
            }
        }

        if let Some(amount) = remove {
            if quick.remove(&mut pool, *amount)? {
                oplog(&pool.conn, "quick", &amount.to_string(), "preset removed")?;
                success(format!("Quick amount {} ml removed.", amount));
            } else {
                warning(format!("No quick amount {} ml.", amount));
            }
        }

        println!(
            "Quick amounts: {}",
            quick
                .values()
                .iter()
                .map(|a| format!("{} ml", a))
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}
