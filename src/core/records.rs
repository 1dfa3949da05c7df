//! The record store: owns the intake record list.
//!
//! The full list lives in memory, is loaded once from the records slot, and
//! is serialized back wholesale after every mutation. Loading is fail-soft:
//! an absent, unreadable, or malformed payload yields an empty list.

use chrono::{Local, NaiveDate};

use crate::core::ids::IdGenerator;
use crate::db::pool::DbPool;
use crate::db::slots;
use crate::errors::AppResult;
use crate::models::record::IntakeRecord;

pub struct RecordStore {
    records: Vec<IntakeRecord>,
    ids: IdGenerator,
}

impl RecordStore {
    pub fn load(pool: &mut DbPool) -> Self {
        let records = decode_records(slots::read(&pool.conn, slots::RECORDS_SLOT).ok().flatten());
        let ids = IdGenerator::seeded(
            records.iter().map(|r| r.id).max(),
            Local::now().timestamp_millis(),
        );
        Self { records, ids }
    }

    /// Log an intake of `amount` milliliters dated now.
    /// Non-positive amounts are rejected as a no-op (`Ok(None)`).
    pub fn add(&mut self, pool: &mut DbPool, amount: i64) -> AppResult<Option<IntakeRecord>> {
        if amount <= 0 {
            return Ok(None);
        }

        let record = IntakeRecord::new(self.ids.next(), amount, Local::now());
        self.records.push(record.clone());
        self.persist(pool)?;

        Ok(Some(record))
    }

    /// Delete the record with the given id.
    /// Returns false (and persists nothing) when no record matches.
    pub fn delete(&mut self, pool: &mut DbPool, id: i64) -> AppResult<bool> {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);

        if self.records.len() == before {
            return Ok(false);
        }

        self.persist(pool)?;
        Ok(true)
    }

    pub fn all(&self) -> &[IntakeRecord] {
        &self.records
    }

    /// Records of one calendar date, in insertion order.
    pub fn records_on(&self, date: NaiveDate) -> Vec<&IntakeRecord> {
        let key = date.format("%Y-%m-%d").to_string();
        self.records.iter().filter(|r| r.date == key).collect()
    }

    pub fn total_on(&self, date: NaiveDate) -> i64 {
        self.records_on(date).iter().map(|r| r.amount).sum()
    }

    fn persist(&self, pool: &mut DbPool) -> AppResult<()> {
        let payload = serde_json::to_string(&self.records)?;
        slots::write(&pool.conn, slots::RECORDS_SLOT, &payload)
    }
}

fn decode_records(raw: Option<String>) -> Vec<IntakeRecord> {
    let Some(data) = raw else {
        return Vec::new();
    };
    serde_json::from_str(&data).unwrap_or_default()
}
