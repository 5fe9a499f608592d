use soroban_sdk::{Address, Env, String, Symbol};

use crate::types::PolicyKind;

/// Emitted once by `initialize`.
///
/// # Topics
/// * `Symbol` - "ledger_initialized"
///
/// # Data
/// * `Address` - The admin identity
/// * `PolicyKind` - The policy the deployment runs under
/// * `u32` - Number of whitelisted identities
pub fn emit_ledger_initialized(e: &Env, admin: &Address, policy: PolicyKind, whitelisted: u32) {
    let topics = (Symbol::new(e, "ledger_initialized"),);
    let data = (admin.clone(), policy, whitelisted);
    e.events().publish(topics, data);
}

/// Emitted when a saving is created.
///
/// # Topics
/// * `Symbol` - "saving_created"
/// * `Address` - The owner
///
/// # Data
/// * `u64` - The saving id
/// * `i128` - The initial amount
/// * `u32` - The lock period in days
pub fn emit_saving_created(e: &Env, owner: &Address, id: u64, amount: i128, no_of_days: u32) {
    let topics = (Symbol::new(e, "saving_created"), owner.clone());
    let data = (id, amount, no_of_days);
    e.events().publish(topics, data);
}

/// Emitted when `update_saving` merges new field values.
pub fn emit_saving_updated(e: &Env, caller: &Address, id: u64) {
    let topics = (Symbol::new(e, "saving_updated"), caller.clone());
    e.events().publish(topics, id);
}

/// Emitted when a saving is funded.
///
/// # Data
/// * `u64` - The saving id
/// * `i128` - The amount added
/// * `i128` - The new balance
pub fn emit_saving_funded(e: &Env, caller: &Address, id: u64, added: i128, new_amount: i128) {
    let topics = (Symbol::new(e, "saving_funded"), caller.clone());
    let data = (id, added, new_amount);
    e.events().publish(topics, data);
}

/// Emitted when a saving is withdrawn.
///
/// # Data
/// * `u64` - The saving id
/// * `i128` - The amount released
pub fn emit_saving_withdrawn(e: &Env, caller: &Address, id: u64, withdrawn: i128) {
    let topics = (Symbol::new(e, "saving_withdrawn"), caller.clone());
    let data = (id, withdrawn);
    e.events().publish(topics, data);
}

/// Emitted when a saving's username is replaced.
pub fn emit_saving_transferred(e: &Env, caller: &Address, id: u64, new_username: &String) {
    let topics = (Symbol::new(e, "saving_transferred"), caller.clone());
    let data = (id, new_username.clone());
    e.events().publish(topics, data);
}

/// Emitted when a saving is removed from the store.
pub fn emit_saving_deleted(e: &Env, caller: &Address, id: u64) {
    let topics = (Symbol::new(e, "saving_deleted"), caller.clone());
    e.events().publish(topics, id);
}
