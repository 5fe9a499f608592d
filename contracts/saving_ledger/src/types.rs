use soroban_sdk::{contracttype, Address, String, Vec};

// ─── Saving state ──────────────────────────────────────────────────────────

/// A single time-locked saving owned by one address.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Saving {
    /// Sequence-assigned id; never reused, even after deletion.
    pub id: u64,
    /// The address that created the saving.
    pub owner: Address,
    /// Display label. Replaced by `transfer_saving`.
    pub username: String,
    /// Divisor used by the yield estimate.
    pub specified_year: u32,
    /// Current locked balance in base units.
    pub amount: i128,
    /// Lock period in days, counted from `created_at`.
    pub no_of_days: u32,
    /// Ledger time at creation, in nanoseconds.
    pub created_at: u64,
    /// Ledger time of the last mutation, in nanoseconds.
    pub updated_at: Option<u64>,
}

/// Input to `create_saving`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavingPayload {
    pub username: String,
    pub specified_year: u32,
    pub amount: i128,
    pub no_of_days: u32,
}

/// Input to `update_saving`. Only the fields that are `Some` are written.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SavingUpdate {
    pub username: Option<String>,
    pub specified_year: Option<u32>,
    pub amount: Option<i128>,
}

// ─── Configuration ─────────────────────────────────────────────────────────

/// Which authorization rules a deployment runs under.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PolicyKind {
    /// Every record operation is reserved to the record's owner.
    Ownership,
    /// Deletion is reserved to the admin; withdrawal to the admin and the
    /// whitelist. Other operations are open to any authenticated caller.
    AdminWhitelist,
}

/// Write-once deployment configuration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub policy: PolicyKind,
    pub admin: Address,
    pub whitelist: Vec<Address>,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// `LedgerConfig`, stored once by `initialize`. Stored in `instance()`.
    Config,
    /// Next id to hand out. Stored in `instance()`.
    NextSavingId,
    /// Saving record by id. Stored in `persistent()`.
    Saving(u64),
    /// Ids of live savings in insertion order. Stored in `persistent()`.
    SavingIndex,
}
