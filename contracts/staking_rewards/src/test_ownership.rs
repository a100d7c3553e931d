extern crate std;

use soroban_sdk::{
    testutils::{storage::Instance as _, Address as _, Ledger as _},
    Address, Env,
};

use crate::{ContractError, ErrorCategory, StakingRewardsContract, StakingRewardsContractClient};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn setup() -> (Env, StakingRewardsContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let reward_token = env.register_stellar_asset_contract_v2(Address::generate(&env));

    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    client.initialize(
        &owner,
        &Address::generate(&env),
        &stake_token.address(),
        &reward_token.address(),
    );

    (env, client, owner)
}

// ── Nomination ───────────────────────────────────────────────────────────────

#[test]
fn test_owner_nominates_successor() {
    let (env, client, owner) = setup();
    let candidate = Address::generate(&env);

    client.nominate_owner(&owner, &candidate);

    assert_eq!(client.get_nominated_owner(), Some(candidate));
    // Nomination alone does not move ownership.
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_non_owner_cannot_nominate() {
    let (env, client, _owner) = setup();
    let intruder = Address::generate(&env);
    let candidate = Address::generate(&env);

    let result = client.try_nominate_owner(&intruder, &candidate);
    match result {
        Err(Ok(e)) => {
            assert_eq!(e, ContractError::Unauthorized);
            assert_eq!(e.category(), ErrorCategory::Authorization);
        }
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_nominated_owner(), None);
}

#[test]
fn test_later_nomination_replaces_earlier() {
    let (env, client, owner) = setup();
    let first = Address::generate(&env);
    let second = Address::generate(&env);

    client.nominate_owner(&owner, &first);
    client.nominate_owner(&owner, &second);

    assert_eq!(client.get_nominated_owner(), Some(second));
    match client.try_accept_ownership(&first) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_nomination_extends_instance_ttl() {
    let (env, client, owner) = setup();
    let ttl = || env.as_contract(&client.address, || env.storage().instance().get_ttl());
    let full = ttl();

    let drift = 160 * 17_280;
    env.ledger().set_sequence_number(drift);
    assert_eq!(ttl(), full - drift);

    client.nominate_owner(&owner, &Address::generate(&env));
    assert_eq!(ttl(), full);
}

// ── Acceptance ───────────────────────────────────────────────────────────────

#[test]
fn test_nominee_accepts_ownership() {
    let (env, client, owner) = setup();
    let candidate = Address::generate(&env);

    client.nominate_owner(&owner, &candidate);
    client.accept_ownership(&candidate);

    assert_eq!(client.get_owner(), candidate);
    assert_eq!(client.get_nominated_owner(), None);
}

#[test]
fn test_non_nominee_cannot_accept() {
    let (env, client, owner) = setup();
    let candidate = Address::generate(&env);
    let other = Address::generate(&env);

    client.nominate_owner(&owner, &candidate);

    match client.try_accept_ownership(&other) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_accept_without_nomination_fails() {
    let (env, client, owner) = setup();
    let anyone = Address::generate(&env);

    for caller in [anyone, owner.clone()] {
        match client.try_accept_ownership(&caller) {
            Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
            _ => unreachable!("Expected Unauthorized error"),
        }
    }
    assert_eq!(client.get_owner(), owner);
}

#[test]
fn test_nominee_gains_privileges_only_after_accepting() {
    let (env, client, owner) = setup();
    let candidate = Address::generate(&env);

    client.nominate_owner(&owner, &candidate);

    match client.try_set_window_length(&candidate, &(14 * 24 * 60 * 60)) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }

    client.accept_ownership(&candidate);
    client.set_window_length(&candidate, &(14 * 24 * 60 * 60));
    assert_eq!(client.get_window_length(), 14 * 24 * 60 * 60);

    // The previous owner is locked out.
    match client.try_set_paused(&owner, &true) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

// ── Cancellation ─────────────────────────────────────────────────────────────

#[test]
fn test_owner_cancels_nomination() {
    let (env, client, owner) = setup();
    let candidate = Address::generate(&env);

    client.nominate_owner(&owner, &candidate);
    client.cancel_nomination(&owner);

    assert_eq!(client.get_nominated_owner(), None);
    match client.try_accept_ownership(&candidate) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
}

#[test]
fn test_cancel_without_nomination_fails() {
    let (_env, client, owner) = setup();

    match client.try_cancel_nomination(&owner) {
        Err(Ok(e)) => assert_eq!(e, ContractError::NoPendingNomination),
        _ => unreachable!("Expected NoPendingNomination error"),
    }
}

#[test]
fn test_non_owner_cannot_cancel() {
    let (env, client, owner) = setup();
    let candidate = Address::generate(&env);
    client.nominate_owner(&owner, &candidate);

    match client.try_cancel_nomination(&candidate) {
        Err(Ok(e)) => assert_eq!(e, ContractError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_nominated_owner(), Some(candidate));
}
