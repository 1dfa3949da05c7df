use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::records::RecordStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportTarget};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        clipboard,
        period,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let store = RecordStore::load(&mut pool);

        let target = if *clipboard {
            ExportTarget::Clipboard
        } else {
            // clap guarantees --file when --clipboard is absent
            ExportTarget::File(file.as_deref().unwrap_or_default())
        };

        ExportLogic::export(&mut pool, store.all(), format, target, period, *force)?;
    }

    Ok(())
}
