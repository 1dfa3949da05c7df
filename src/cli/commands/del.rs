use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::records::RecordStore;
use crate::db::oplog::oplog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Delete a logged intake by id. An unknown id leaves the store untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut store = RecordStore::load(&mut pool);

        if store.delete(&mut pool, *id)? {
            oplog(&pool.conn, "del", &id.to_string(), "record deleted")?;
            success(format!("Record {} deleted.", id));
        } else {
            warning(format!("No record with id {}.", id));
        }
    }

    Ok(())
}
