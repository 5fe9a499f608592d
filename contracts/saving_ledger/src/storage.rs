//! Record store for savings.
//!
//! | Key                       | Tier           |
//! |---------------------------|----------------|
//! | `DataKey::Config`         | `instance()`   |
//! | `DataKey::NextSavingId`   | `instance()`   |
//! | `DataKey::Saving(id)`     | `persistent()` |
//! | `DataKey::SavingIndex`    | `persistent()` |
//!
//! Each persistent entry has its TTL bumped whenever it is read or written
//! for a single-record operation. Listings read without bumping.

use saving_errors::SavingError;
use soroban_sdk::{Env, Vec};

use crate::types::{DataKey, LedgerConfig, Saving};

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
const BUMP_TARGET: u32 = 518_400;

// ─── Configuration ─────────────────────────────────────────────────────────

pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Config)
}

pub fn set_config(e: &Env, config: &LedgerConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

pub fn load_config(e: &Env) -> Result<LedgerConfig, SavingError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(SavingError::NotInitialized)
}

// ─── Id sequence ───────────────────────────────────────────────────────────

/// Hand out the next saving id. The sequence only moves forward.
pub fn next_saving_id(e: &Env) -> Result<u64, SavingError> {
    let id: u64 = e
        .storage()
        .instance()
        .get(&DataKey::NextSavingId)
        .unwrap_or(0);
    let next = id.checked_add(1).ok_or(SavingError::Overflow)?;
    e.storage().instance().set(&DataKey::NextSavingId, &next);
    Ok(id)
}

// ─── Records ───────────────────────────────────────────────────────────────

pub fn load_saving(e: &Env, id: u64) -> Option<Saving> {
    let key = DataKey::Saving(id);
    let storage = e.storage().persistent();
    let saving: Saving = storage.get(&key)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Some(saving)
}

/// Insert or overwrite. New ids are appended to the index.
pub fn save_saving(e: &Env, saving: &Saving) {
    let key = DataKey::Saving(saving.id);
    let storage = e.storage().persistent();
    if !storage.has(&key) {
        let mut index = load_index(e);
        index.push_back(saving.id);
        save_index(e, &index);
    }
    storage.set(&key, saving);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn remove_saving(e: &Env, id: u64) -> Option<Saving> {
    let key = DataKey::Saving(id);
    let storage = e.storage().persistent();
    let saving: Saving = storage.get(&key)?;
    storage.remove(&key);

    let mut index = load_index(e);
    if let Some(pos) = index.first_index_of(id) {
        index.remove(pos);
        save_index(e, &index);
    }
    Some(saving)
}

/// All live savings in insertion order. Read-only: no TTL is bumped.
pub fn all_savings(e: &Env) -> Vec<Saving> {
    let index = peek_index(e);
    collect_savings(e, &index)
}

/// Up to `limit` savings starting at position `start` of the index.
pub fn savings_page(e: &Env, start: u32, limit: u32) -> Vec<Saving> {
    let index = peek_index(e);
    let end = start.saturating_add(limit).min(index.len());
    if start >= end {
        return Vec::new(e);
    }
    collect_savings(e, &index.slice(start..end))
}

pub fn saving_count(e: &Env) -> u32 {
    peek_index(e).len()
}

fn collect_savings(e: &Env, ids: &Vec<u64>) -> Vec<Saving> {
    let storage = e.storage().persistent();
    let mut savings = Vec::new(e);
    for id in ids.iter() {
        if let Some(saving) = storage.get::<_, Saving>(&DataKey::Saving(id)) {
            savings.push_back(saving);
        }
    }
    savings
}

fn peek_index(e: &Env) -> Vec<u64> {
    e.storage()
        .persistent()
        .get(&DataKey::SavingIndex)
        .unwrap_or_else(|| Vec::new(e))
}

fn load_index(e: &Env) -> Vec<u64> {
    let storage = e.storage().persistent();
    match storage.get::<_, Vec<u64>>(&DataKey::SavingIndex) {
        Some(index) => {
            storage.extend_ttl(&DataKey::SavingIndex, BUMP_THRESHOLD, BUMP_TARGET);
            index
        }
        None => Vec::new(e),
    }
}

fn save_index(e: &Env, index: &Vec<u64>) {
    let storage = e.storage().persistent();
    storage.set(&DataKey::SavingIndex, index);
    storage.extend_ttl(&DataKey::SavingIndex, BUMP_THRESHOLD, BUMP_TARGET);
}
