use crate::db::pool::DbPool;
use crate::db::slots;
use crate::errors::AppResult;
use crate::models::record::IntakeRecord;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

/// Print a short summary of the database: file, slot payloads, oplog length.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    // Records slot: count and date range come from the JSON payload itself.
    let records: Vec<IntakeRecord> = slots::read(&pool.conn, slots::RECORDS_SLOT)?
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();

    println!(
        "{}• Intake records:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        records.len(),
        RESET
    );

    let first = records.iter().map(|r| r.date.as_str()).min();
    let last = records.iter().map(|r| r.date.as_str()).max();

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", first.unwrap_or(&format!("{GREY}--{RESET}")));
    println!("    to:   {}", last.unwrap_or(&format!("{GREY}--{RESET}")));

    let goal_set = slots::read(&pool.conn, slots::GOAL_SLOT)?.is_some();
    let quick_set = slots::read(&pool.conn, slots::QUICK_AMOUNTS_SLOT)?.is_some();

    println!(
        "{}• Goal slot:{} {}",
        CYAN,
        RESET,
        if goal_set { "set" } else { "default" }
    );
    println!(
        "{}• Quick-amounts slot:{} {}",
        CYAN,
        RESET,
        if quick_set { "set" } else { "default" }
    );

    let oplog_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM oplog", [], |row| row.get(0))?;
    println!("{}• Oplog entries:{} {}", CYAN, RESET, oplog_rows);

    println!();
    Ok(())
}
