//! Unit tests for the authorization policy.

#![cfg(test)]

use crate::policy::{authorize, is_admin, is_whitelisted, Operation};
use crate::types::{LedgerConfig, PolicyKind, Saving};
use crate::SavingError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env, String};

const ALL_OPS: [Operation; 6] = [
    Operation::Read,
    Operation::Update,
    Operation::Fund,
    Operation::Withdraw,
    Operation::Transfer,
    Operation::Delete,
];

fn saving(e: &Env, owner: &Address) -> Saving {
    Saving {
        id: 0,
        owner: owner.clone(),
        username: String::from_str(e, "alice"),
        specified_year: 1,
        amount: 100,
        no_of_days: 1,
        created_at: 0,
        updated_at: None,
    }
}

// ---------------------------------------------------------------------------
// Authorization policy
// ---------------------------------------------------------------------------

#[test]
fn test_admin_and_whitelist_membership() {
    let e = Env::default();
    let admin = Address::generate(&e);
    let listed = Address::generate(&e);
    let stranger = Address::generate(&e);
    let config = LedgerConfig {
        policy: PolicyKind::AdminWhitelist,
        admin: admin.clone(),
        whitelist: vec![&e, listed.clone()],
    };

    assert!(is_admin(&config, &admin));
    assert!(!is_admin(&config, &listed));
    assert!(is_whitelisted(&config, &listed));
    assert!(!is_whitelisted(&config, &admin));
    assert!(!is_whitelisted(&config, &stranger));
}

#[test]
fn test_ownership_policy_only_owner() {
    let e = Env::default();
    let owner = Address::generate(&e);
    let admin = Address::generate(&e);
    let listed = Address::generate(&e);
    let config = LedgerConfig {
        policy: PolicyKind::Ownership,
        admin: admin.clone(),
        whitelist: vec![&e, listed.clone()],
    };
    let s = saving(&e, &owner);

    for op in ALL_OPS {
        assert_eq!(authorize(&config, op, &s, &owner), Ok(()));
        assert_eq!(
            authorize(&config, op, &s, &admin),
            Err(SavingError::Unauthorized)
        );
        assert_eq!(
            authorize(&config, op, &s, &listed),
            Err(SavingError::Unauthorized)
        );
    }
}

#[test]
fn test_admin_whitelist_policy_matrix() {
    let e = Env::default();
    let owner = Address::generate(&e);
    let admin = Address::generate(&e);
    let listed = Address::generate(&e);
    let stranger = Address::generate(&e);
    let config = LedgerConfig {
        policy: PolicyKind::AdminWhitelist,
        admin: admin.clone(),
        whitelist: vec![&e, listed.clone()],
    };
    let s = saving(&e, &owner);

    for op in [
        Operation::Read,
        Operation::Update,
        Operation::Fund,
        Operation::Transfer,
    ] {
        for caller in [&owner, &admin, &listed, &stranger] {
            assert_eq!(authorize(&config, op, &s, caller), Ok(()));
        }
    }

    assert_eq!(authorize(&config, Operation::Withdraw, &s, &admin), Ok(()));
    assert_eq!(authorize(&config, Operation::Withdraw, &s, &listed), Ok(()));
    assert_eq!(
        authorize(&config, Operation::Withdraw, &s, &owner),
        Err(SavingError::Unauthorized)
    );
    assert_eq!(
        authorize(&config, Operation::Withdraw, &s, &stranger),
        Err(SavingError::Unauthorized)
    );

    assert_eq!(authorize(&config, Operation::Delete, &s, &admin), Ok(()));
    for caller in [&owner, &listed, &stranger] {
        assert_eq!(
            authorize(&config, Operation::Delete, &s, caller),
            Err(SavingError::Unauthorized)
        );
    }
}
