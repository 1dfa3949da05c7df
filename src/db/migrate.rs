//! Migration engine: idempotent schema creation plus versioned upgrades.
//! Applied versions are recorded as `migration_applied` rows in the oplog.

use crate::ui::messages::warning;
use rusqlite::{Connection, OptionalExtension, Result};

/// Bring the database schema up to date. Safe to call repeatedly.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_oplog_table(conn)?;
    create_slots_table(conn)?;
    migrate_add_updated_at_to_slots(conn)?;
    Ok(())
}

/// Ensure that the `oplog` table exists with the modern schema.
fn ensure_oplog_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS oplog (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the `slots` table with the modern schema (including `updated_at`).
fn create_slots_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS slots (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `slots` table has an `updated_at` column.
fn slots_has_updated_at_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('slots')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "updated_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Check whether a versioned migration was already applied.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut stmt = conn.prepare(
        "SELECT 1 FROM oplog
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(stmt.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn record_migration(conn: &Connection, version: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO oplog (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, 'schema migration applied')",
        [chrono::Local::now().to_rfc3339(), version.to_string()],
    )?;
    Ok(())
}

/// Migrate a pre-0.3 `slots` table to include the `updated_at` column.
fn migrate_add_updated_at_to_slots(conn: &Connection) -> Result<()> {
    let version = "20250718_0001_slot_updated_at";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !slots_has_updated_at_column(conn)? {
        warning("Adding 'updated_at' column to slots table...");
        conn.execute_batch("ALTER TABLE slots ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';")?;
    }

    record_migration(conn, version)
}
