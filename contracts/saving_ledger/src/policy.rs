//! Authorization policy.
//!
//! The policy is fixed per deployment by `initialize` and consulted once per
//! operation, after the record has been loaded and before anything is
//! written.
//!
//! | Operation | `Ownership` | `AdminWhitelist`      |
//! |-----------|-------------|-----------------------|
//! | Read      | owner       | any caller            |
//! | Update    | owner       | any caller            |
//! | Fund      | owner       | any caller            |
//! | Transfer  | owner       | any caller            |
//! | Withdraw  | owner       | admin or whitelisted  |
//! | Delete    | owner       | admin                 |

use saving_errors::SavingError;
use soroban_sdk::Address;

use crate::types::{LedgerConfig, PolicyKind, Saving};

/// Record operations subject to authorization.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    Read,
    Update,
    Fund,
    Withdraw,
    Transfer,
    Delete,
}

pub fn is_admin(config: &LedgerConfig, caller: &Address) -> bool {
    config.admin == *caller
}

pub fn is_whitelisted(config: &LedgerConfig, caller: &Address) -> bool {
    config.whitelist.contains(caller)
}

/// Decide whether `caller` may perform `op` on `saving`.
///
/// Returns `Err(SavingError::Unauthorized)` on denial. Never inspects or
/// returns anything beyond the ownership field of the record.
pub fn authorize(
    config: &LedgerConfig,
    op: Operation,
    saving: &Saving,
    caller: &Address,
) -> Result<(), SavingError> {
    let allowed = match config.policy {
        PolicyKind::Ownership => saving.owner == *caller,
        PolicyKind::AdminWhitelist => match op {
            Operation::Delete => is_admin(config, caller),
            Operation::Withdraw => is_admin(config, caller) || is_whitelisted(config, caller),
            Operation::Read | Operation::Update | Operation::Fund | Operation::Transfer => true,
        },
    };

    if allowed {
        Ok(())
    } else {
        Err(SavingError::Unauthorized)
    }
}
