//! Time-lock evaluation.
//!
//! Savings store their creation time in nanoseconds. The host ledger clock
//! ticks in seconds, so `now_nanos` scales it before any comparison.

use saving_errors::SavingError;
use soroban_sdk::Env;

use crate::types::Saving;

pub const NANOS_PER_SECOND: u64 = 1_000_000_000;
pub const NANOS_PER_DAY: u64 = 86_400 * NANOS_PER_SECOND;

/// Current ledger time in nanoseconds.
pub fn now_nanos(e: &Env) -> Result<u64, SavingError> {
    e.ledger()
        .timestamp()
        .checked_mul(NANOS_PER_SECOND)
        .ok_or(SavingError::Overflow)
}

/// First instant at which the saving may be withdrawn. Saturates at `u64::MAX`.
pub fn lock_end(saving: &Saving) -> u64 {
    let period = (saving.no_of_days as u64).saturating_mul(NANOS_PER_DAY);
    saving.created_at.saturating_add(period)
}

pub fn is_locked(saving: &Saving, now: u64) -> bool {
    now < lock_end(saving)
}

/// Nanoseconds left until `lock_end`; 0 once unlocked.
pub fn time_remaining(saving: &Saving, now: u64) -> u64 {
    lock_end(saving).saturating_sub(now)
}
