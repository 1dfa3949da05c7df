#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wm() -> Command {
    cargo_bin_cmd!("watermeter")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_watermeter.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the database schema (config file untouched thanks to --test)
pub fn init_db(db_path: &str) {
    wm().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Replace the records slot with a handcrafted JSON payload, bypassing the
/// CLI (which always dates records "now"). Useful for multi-date fixtures.
pub fn seed_records(db_path: &str, payload: &str) {
    let pool = watermeter::db::pool::DbPool::new(db_path).expect("open db");
    watermeter::db::slots::write(&pool.conn, watermeter::db::slots::RECORDS_SLOT, payload)
        .expect("write records slot");
}

/// Extract the record id from an `add` success message:
/// "Logged 250 ml (id 1754...). Today: ..."
pub fn parse_added_id(stdout: &str) -> i64 {
    let start = stdout.find("(id ").expect("no id in output") + 4;
    let rest = &stdout[start..];
    let end = rest.find(')').expect("unterminated id");
    rest[..end].parse().expect("id not numeric")
}
