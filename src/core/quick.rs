//! The quick-amount store: the preset volumes offered for one-keystroke
//! logging. Distinct positive integers, kept sorted ascending.

use crate::db::pool::DbPool;
use crate::db::slots;
use crate::errors::AppResult;

pub const DEFAULT_QUICK_AMOUNTS: [i64; 4] = [250, 500, 710, 1000];

pub struct QuickAmounts {
    values: Vec<i64>,
}

impl QuickAmounts {
    /// Load the presets. A payload that is not a JSON array of all-positive
    /// integers is discarded entirely in favor of the defaults.
    pub fn load(pool: &mut DbPool) -> Self {
        let values = slots::read(&pool.conn, slots::QUICK_AMOUNTS_SLOT)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<Vec<i64>>(&raw).ok())
            .filter(|amounts| amounts.iter().all(|a| *a > 0))
            .unwrap_or_else(|| DEFAULT_QUICK_AMOUNTS.to_vec());
        Self { values }
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Insert a preset, keeping the set sorted ascending.
    /// Non-positive or duplicate amounts are a no-op (`Ok(false)`).
    pub fn add(&mut self, pool: &mut DbPool, amount: i64) -> AppResult<bool> {
        if amount <= 0 || self.values.contains(&amount) {
            return Ok(false);
        }

        self.values.push(amount);
        self.values.sort_unstable();
        self.persist(pool)?;
        Ok(true)
    }

    /// Remove an exact match. Unknown amounts are a no-op (`Ok(false)`).
    pub fn remove(&mut self, pool: &mut DbPool, amount: i64) -> AppResult<bool> {
        let before = self.values.len();
        self.values.retain(|a| *a != amount);

        if self.values.len() == before {
            return Ok(false);
        }

        self.persist(pool)?;
        Ok(true)
    }

    fn persist(&self, pool: &mut DbPool) -> AppResult<()> {
        let payload = serde_json::to_string(&self.values)?;
        slots::write(&pool.conn, slots::QUICK_AMOUNTS_SLOT, &payload)
    }
}
