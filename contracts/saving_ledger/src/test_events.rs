#![cfg(test)]

use crate::test_helpers::*;
use crate::{SavingLedger, SavingLedgerClient};
use soroban_sdk::{
    testutils::{Address as _, Events},
    vec, Address, Env, FromVal, String, Symbol, Val,
};

/// Most recent event published by `contract_id`.
fn last_event(e: &Env, contract_id: &Address) -> (soroban_sdk::Vec<Val>, Val) {
    let (_, topics, data) = e
        .events()
        .all()
        .into_iter()
        .rev()
        .find(|ev| ev.0 == *contract_id)
        .unwrap();
    (topics, data)
}

#[test]
fn test_lifecycle_event_emissions() {
    let e = Env::default();
    e.mock_all_auths();

    let contract_id = e.register(SavingLedger, ());
    let client = SavingLedgerClient::new(&e, &contract_id);
    let admin = Address::generate(&e);
    let owner = Address::generate(&e);

    client.initialize(&admin, &crate::PolicyKind::Ownership, &vec![&e]);
    let (topics, _) = last_event(&e, &contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "ledger_initialized")
    );

    // --- Create ---
    let saving = client.create_saving(&owner, &payload(&e, "alice", 100, 1));
    let (topics, data) = last_event(&e, &contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "saving_created")
    );
    assert_eq!(Address::from_val(&e, &topics.get(1).unwrap()), owner);
    assert_eq!(
        <(u64, i128, u32)>::from_val(&e, &data),
        (saving.id, 100_i128, 1_u32)
    );

    // --- Fund ---
    client.fund_saving(&owner, &saving.id, &50);
    let (topics, data) = last_event(&e, &contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "saving_funded")
    );
    assert_eq!(
        <(u64, i128, i128)>::from_val(&e, &data),
        (saving.id, 50_i128, 150_i128)
    );

    // --- Transfer ---
    let bob = String::from_str(&e, "bob");
    client.transfer_saving(&owner, &saving.id, &bob);
    let (topics, data) = last_event(&e, &contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "saving_transferred")
    );
    assert_eq!(<(u64, String)>::from_val(&e, &data), (saving.id, bob));

    // --- Withdraw ---
    advance(&e, ONE_DAY);
    client.withdraw_saving(&owner, &saving.id);
    let (topics, data) = last_event(&e, &contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "saving_withdrawn")
    );
    assert_eq!(
        <(u64, i128)>::from_val(&e, &data),
        (saving.id, 150_i128)
    );

    // --- Delete ---
    client.delete_saving(&owner, &saving.id);
    let (topics, data) = last_event(&e, &contract_id);
    assert_eq!(
        Symbol::from_val(&e, &topics.get(0).unwrap()),
        Symbol::new(&e, "saving_deleted")
    );
    assert_eq!(u64::from_val(&e, &data), saving.id);
}
