// src/export/logic.rs

use crate::core::history;
use crate::db::oplog::oplog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::clipboard;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::build_export;
use crate::export::{csv, json, text};
use crate::models::record::IntakeRecord;
use crate::ui::messages::{success, warning};
use crate::utils::date::period_bounds;
use crate::utils::path::{expand_tilde, is_absolute};
use std::fs;

pub enum ExportTarget<'a> {
    File(&'a str),
    Clipboard,
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the grouped history view.
    ///
    /// - `period`: `None`, `"all"`, or an expression such as
    ///   `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `START:END`
    /// - `target`: an absolute output file path, or the system clipboard
    pub fn export(
        pool: &mut DbPool,
        records: &[IntakeRecord],
        format: &ExportFormat,
        target: ExportTarget<'_>,
        period: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let bounds = match period {
            None => None,
            Some(p) if p.eq_ignore_ascii_case("all") => None,
            Some(p) => Some(period_bounds(p).map_err(AppError::InvalidPeriod)?),
        };

        let selected = history::filter_by_bounds(records, bounds);
        if selected.is_empty() {
            warning("No records found for selected period.");
            return Ok(());
        }

        let groups = history::group_by_date(selected);
        let days = build_export(&groups);

        let payload = match format {
            ExportFormat::Json => json::render_json(&days)?,
            ExportFormat::Csv => csv::render_csv(&days)?,
            ExportFormat::Text => text::render_text(&days),
        };

        match target {
            ExportTarget::Clipboard => {
                clipboard::copy_text(&payload)?;
                success(format!(
                    "Copied {} export ({} days) to clipboard.",
                    format.as_str(),
                    days.len()
                ));
                oplog(&pool.conn, "export", "clipboard", format.as_str())?;
            }
            ExportTarget::File(file) => {
                let path = expand_tilde(file);

                if !is_absolute(&path.to_string_lossy()) {
                    return Err(AppError::Export(format!(
                        "Output file path must be absolute: {file}"
                    )));
                }

                ensure_writable(&path, force)?;
                fs::write(&path, payload)?;

                success(format!(
                    "{} export completed: {}",
                    format.as_str(),
                    path.display()
                ));
                oplog(
                    &pool.conn,
                    "export",
                    &path.to_string_lossy(),
                    format.as_str(),
                )?;
            }
        }

        Ok(())
    }
}
