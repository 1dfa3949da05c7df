//! The goal store: a single positive integer, overwritten wholesale.

use crate::db::pool::DbPool;
use crate::db::slots;
use crate::errors::AppResult;

pub const DEFAULT_GOAL: i64 = 3000;

pub struct GoalStore {
    value: i64,
}

impl GoalStore {
    /// Load the daily goal. An absent slot, an unparsable payload, or a
    /// non-positive stored value all fall back to the default.
    pub fn load(pool: &mut DbPool) -> Self {
        let value = slots::read(&pool.conn, slots::GOAL_SLOT)
            .ok()
            .flatten()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|goal| *goal > 0)
            .unwrap_or(DEFAULT_GOAL);
        Self { value }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Replace the stored goal. Non-positive values are a no-op (`Ok(false)`).
    pub fn update(&mut self, pool: &mut DbPool, new_goal: i64) -> AppResult<bool> {
        if new_goal <= 0 {
            return Ok(false);
        }

        self.value = new_goal;
        slots::write(&pool.conn, slots::GOAL_SLOT, &new_goal.to_string())?;
        Ok(true)
    }
}
