//! The three persisted key-value slots.
//!
//! Each slot holds one JSON-serializable TEXT payload that is rewritten
//! wholesale on every mutation:
//! - records slot → JSON array of intake records
//! - goal slot → stringified integer
//! - quick-amounts slot → JSON array of positive integers
//!
//! Typed decoding (and the fail-soft defaults for absent or corrupt
//! payloads) lives in the store layer, not here.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub const RECORDS_SLOT: &str = "water-meter-records";
pub const GOAL_SLOT: &str = "water-meter-goal";
pub const QUICK_AMOUNTS_SLOT: &str = "water-meter-quick-amounts";

pub fn read(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM slots WHERE key = ?1")?;
    let value = stmt.query_row([key], |row| row.get(0)).optional()?;
    Ok(value)
}

pub fn write(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO slots (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, value, Local::now().to_rfc3339()])?;
    Ok(())
}
