//! Database backup: plain copy or zip-compressed archive.

use crate::config::Config;
use crate::db::oplog::oplog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(
        pool: &mut DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
    ) -> AppResult<()> {
        let src = Path::new(&cfg.database);
        let dest = crate::utils::path::expand_tilde(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        ensure_writable(&dest, false)?;

        let final_path = if compress {
            write_zip(src, &dest)?
        } else {
            fs::copy(src, &dest)?;
            dest.clone()
        };

        success(format!("Backup created: {}", final_path.display()));

        oplog(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "compressed backup"
            } else {
                "plain backup"
            },
        )?;

        Ok(())
    }
}

fn write_zip(src: &Path, dest: &Path) -> AppResult<PathBuf> {
    let file = File::create(dest)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("watermeter.sqlite", options)
        .map_err(|e| AppError::Other(format!("Backup failed (start_file): {}", e)))?;

    let db_content = fs::read(src)?;
    zip.write_all(&db_content)?;

    zip.finish()
        .map_err(|e| AppError::Other(format!("Backup failed (finish): {}", e)))?;

    Ok(dest.to_path_buf())
}
