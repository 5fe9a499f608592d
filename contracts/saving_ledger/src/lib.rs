//! Saving Ledger Contract
//!
//! Keeps individually-owned savings, each holding an amount under a time
//! lock of `no_of_days` from creation. Savings can be funded, relabelled,
//! updated, withdrawn once the lock has elapsed, and deleted.
//!
//! ## Key design decisions
//!
//! - **Write-once configuration**: `initialize` fixes the admin, the whitelist
//!   and the authorization policy for the lifetime of the deployment.
//! - **Two policies**: `Ownership` reserves every record operation to the
//!   owner; `AdminWhitelist` reserves deletion to the admin and withdrawal to
//!   the admin and the whitelist.
//! - **Single check point**: every record operation loads the record and
//!   authorizes through `load_authorized` before anything is written.
//! - **No stored lock flag**: withdrawal compares the current ledger time
//!   against `created_at + no_of_days` on every call.
//! - **Withdrawal zeroes, never deletes**: the record stays until
//!   `delete_saving`.

#![no_std]

mod events;
mod math;
mod policy;
mod storage;
mod timelock;
mod types;

pub use saving_errors::SavingError;
pub use types::{LedgerConfig, PolicyKind, Saving, SavingPayload, SavingUpdate};

use policy::Operation;
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};






#[cfg(test)]
mod test_policy;


#[cfg(test)]
mod test_events;

/// Largest page `get_savings_page` returns.
pub const MAX_PAGE_SIZE: u32 = 100;

// ─── Helpers ───────────────────────────────────────────────────────────────

/// Authenticate `caller`, load saving `id`, and check `op` against the
/// configured policy. Nothing is written on any failure path.
fn load_authorized(
    e: &Env,
    caller: &Address,
    id: u64,
    op: Operation,
) -> Result<Saving, SavingError> {
    caller.require_auth();
    let config = storage::load_config(e)?;

    let saving = match storage::load_saving(e, id) {
        Some(saving) => saving,
        None => {
            log!(e, "saving not found", id);
            return Err(SavingError::SavingNotFound);
        }
    };

    if let Err(err) = policy::authorize(&config, op, &saving, caller) {
        log!(e, "caller not authorized for saving", caller.clone(), id);
        return Err(err);
    }

    Ok(saving)
}

fn require_non_negative(e: &Env, amount: i128) -> Result<(), SavingError> {
    if amount < 0 {
        log!(e, "negative amount rejected", amount);
        return Err(SavingError::InvalidAmount);
    }
    Ok(())
}

fn load_existing(e: &Env, id: u64) -> Result<Saving, SavingError> {
    storage::load_config(e)?;
    storage::load_saving(e, id).ok_or(SavingError::SavingNotFound)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct SavingLedger;

#[contractimpl]
impl SavingLedger {
    // ── Setup ──────────────────────────────────────────────────────────────

    /// One-time initialization. Stores the admin, the whitelist and the
    /// policy this deployment runs under.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - called a second time
    pub fn initialize(
        e: Env,
        admin: Address,
        policy: PolicyKind,
        whitelist: Vec<Address>,
    ) -> Result<(), SavingError> {
        if storage::has_config(&e) {
            return Err(SavingError::AlreadyInitialized);
        }
        admin.require_auth();

        let config = LedgerConfig {
            policy,
            admin: admin.clone(),
            whitelist,
        };
        storage::set_config(&e, &config);

        events::emit_ledger_initialized(&e, &admin, policy, config.whitelist.len());
        Ok(())
    }

    // ── Saving lifecycle ───────────────────────────────────────────────────

    /// Create a saving owned by `caller`. The lock period starts now.
    ///
    /// # Errors
    /// * `NotInitialized`
    /// * `InvalidAmount` - `payload.amount` is negative
    pub fn create_saving(
        e: Env,
        caller: Address,
        payload: SavingPayload,
    ) -> Result<Saving, SavingError> {
        caller.require_auth();
        storage::load_config(&e)?;
        require_non_negative(&e, payload.amount)?;

        let created_at = timelock::now_nanos(&e)?;
        let id = storage::next_saving_id(&e)?;

        let saving = Saving {
            id,
            owner: caller.clone(),
            username: payload.username,
            specified_year: payload.specified_year,
            amount: payload.amount,
            no_of_days: payload.no_of_days,
            created_at,
            updated_at: None,
        };
        storage::save_saving(&e, &saving);

        events::emit_saving_created(&e, &caller, id, saving.amount, saving.no_of_days);
        Ok(saving)
    }

    /// Merge the `Some` fields of `update` into saving `id`.
    ///
    /// # Errors
    /// * `SavingNotFound`, `Unauthorized`
    /// * `InvalidAmount` - `update.amount` is negative
    pub fn update_saving(
        e: Env,
        caller: Address,
        id: u64,
        update: SavingUpdate,
    ) -> Result<Saving, SavingError> {
        let mut saving = load_authorized(&e, &caller, id, Operation::Update)?;
        if let Some(amount) = update.amount {
            require_non_negative(&e, amount)?;
        }
        let now = timelock::now_nanos(&e)?;

        if let Some(username) = update.username {
            saving.username = username;
        }
        if let Some(specified_year) = update.specified_year {
            saving.specified_year = specified_year;
        }
        if let Some(amount) = update.amount {
            saving.amount = amount;
        }
        saving.updated_at = Some(now);
        storage::save_saving(&e, &saving);

        events::emit_saving_updated(&e, &caller, id);
        Ok(saving)
    }

    /// Add `amount` to saving `id`. The lock period is not extended.
    ///
    /// # Errors
    /// * `SavingNotFound`, `Unauthorized`
    /// * `InvalidAmount` - `amount` is negative
    /// * `Overflow` - the new balance does not fit in `i128`
    pub fn fund_saving(
        e: Env,
        caller: Address,
        id: u64,
        amount: i128,
    ) -> Result<Saving, SavingError> {
        let mut saving = load_authorized(&e, &caller, id, Operation::Fund)?;
        require_non_negative(&e, amount)?;
        let now = timelock::now_nanos(&e)?;

        saving.amount = saving
            .amount
            .checked_add(amount)
            .ok_or(SavingError::Overflow)?;
        saving.updated_at = Some(now);
        storage::save_saving(&e, &saving);

        events::emit_saving_funded(&e, &caller, id, amount, saving.amount);
        Ok(saving)
    }

    /// Release the full balance of saving `id`. The record is kept with a
    /// zero amount.
    ///
    /// # Errors
    /// * `SavingNotFound`, `Unauthorized`
    /// * `FundsLocked` - the lock period has not elapsed
    pub fn withdraw_saving(e: Env, caller: Address, id: u64) -> Result<Saving, SavingError> {
        let mut saving = load_authorized(&e, &caller, id, Operation::Withdraw)?;

        let now = timelock::now_nanos(&e)?;
        if timelock::is_locked(&saving, now) {
            log!(&e, "funds still locked", id, timelock::lock_end(&saving));
            return Err(SavingError::FundsLocked);
        }

        let withdrawn = saving.amount;
        saving.amount = 0;
        saving.updated_at = Some(now);
        storage::save_saving(&e, &saving);

        events::emit_saving_withdrawn(&e, &caller, id, withdrawn);
        Ok(saving)
    }

    /// Replace the username of saving `id`. Ownership is unchanged.
    ///
    /// # Errors
    /// * `SavingNotFound`, `Unauthorized`
    pub fn transfer_saving(
        e: Env,
        caller: Address,
        id: u64,
        new_username: String,
    ) -> Result<Saving, SavingError> {
        let mut saving = load_authorized(&e, &caller, id, Operation::Transfer)?;
        let now = timelock::now_nanos(&e)?;

        saving.username = new_username;
        saving.updated_at = Some(now);
        storage::save_saving(&e, &saving);

        events::emit_saving_transferred(&e, &caller, id, &saving.username);
        Ok(saving)
    }

    /// Remove saving `id` from the store and return it.
    ///
    /// # Errors
    /// * `SavingNotFound`, `Unauthorized`
    pub fn delete_saving(e: Env, caller: Address, id: u64) -> Result<Saving, SavingError> {
        load_authorized(&e, &caller, id, Operation::Delete)?;
        let removed = storage::remove_saving(&e, id).ok_or(SavingError::SavingNotFound)?;

        events::emit_saving_deleted(&e, &caller, id);
        Ok(removed)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Returns saving `id` if `caller` may read it.
    ///
    /// # Errors
    /// * `SavingNotFound`, `Unauthorized`
    pub fn get_saving_by_id(e: Env, caller: Address, id: u64) -> Result<Saving, SavingError> {
        load_authorized(&e, &caller, id, Operation::Read)
    }

    /// Every saving in the store, in creation order.
    pub fn get_all_savings(e: Env) -> Result<Vec<Saving>, SavingError> {
        storage::load_config(&e)?;
        Ok(storage::all_savings(&e))
    }

    /// Up to `limit` savings starting at position `start` in creation
    /// order. `limit` is capped at `MAX_PAGE_SIZE`.
    pub fn get_savings_page(e: Env, start: u32, limit: u32) -> Result<Vec<Saving>, SavingError> {
        storage::load_config(&e)?;
        Ok(storage::savings_page(&e, start, limit.min(MAX_PAGE_SIZE)))
    }

    /// Savings created by `owner`, in creation order.
    pub fn get_savings_by_owner(e: Env, owner: Address) -> Result<Vec<Saving>, SavingError> {
        storage::load_config(&e)?;
        let mut owned = Vec::new(&e);
        for saving in storage::all_savings(&e).iter() {
            if saving.owner == owner {
                owned.push_back(saving);
            }
        }
        Ok(owned)
    }

    /// Number of savings currently stored.
    pub fn saving_count(e: Env) -> u32 {
        storage::saving_count(&e)
    }

    /// Returns `true` while saving `id` is inside its lock period.
    pub fn is_locked(e: Env, id: u64) -> Result<bool, SavingError> {
        let saving = load_existing(&e, id)?;
        let now = timelock::now_nanos(&e)?;
        Ok(timelock::is_locked(&saving, now))
    }

    /// Nanoseconds until saving `id` unlocks; 0 once unlocked.
    pub fn get_time_remaining(e: Env, id: u64) -> Result<u64, SavingError> {
        let saving = load_existing(&e, id)?;
        let now = timelock::now_nanos(&e)?;
        Ok(timelock::time_remaining(&saving, now))
    }

    /// Returns the write-once configuration.
    ///
    /// # Errors
    /// * `NotInitialized`
    pub fn get_config(e: Env) -> Result<LedgerConfig, SavingError> {
        storage::load_config(&e)
    }

    /// Returns `true` if `address` is on the configured whitelist.
    ///
    /// # Errors
    /// * `NotInitialized`
    pub fn is_whitelisted(e: Env, address: Address) -> Result<bool, SavingError> {
        let config = storage::load_config(&e)?;
        Ok(policy::is_whitelisted(&config, &address))
    }

    // ── Utilities ──────────────────────────────────────────────────────────

    /// Yield estimate `(days / specified_year) * amount`. Touches no storage
    /// and works before initialization.
    ///
    /// # Errors
    /// * `DivisionByZero` - `specified_year` is 0
    /// * `InvalidAmount` - `amount` is negative
    /// * `Overflow`
    pub fn calculate_apy(
        _e: Env,
        days: u32,
        amount: i128,
        specified_year: u32,
    ) -> Result<i128, SavingError> {
        math::yield_estimate(days, amount, specified_year)
    }
}
