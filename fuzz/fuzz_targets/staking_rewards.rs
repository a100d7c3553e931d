#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};
use staking_rewards::{StakingRewardsContract, StakingRewardsContractClient};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { amount: u32 },
    Withdraw { amount: u32 },
    Claim,
    Exit,
    Fund { amount: u32 },
    Advance { seconds: u16 },
    SetPaused { paused: bool },
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let stake_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let reward_token = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();

    let contract_id = env.register(StakingRewardsContract, ());
    let client = StakingRewardsContractClient::new(&env, &contract_id);

    let owner = Address::generate(&env);
    let funder = Address::generate(&env);
    client.initialize(&owner, &funder, &stake_token, &reward_token);
    client.set_window_length(&owner, &3_600u64);

    let mut users = Vec::new();
    for _ in 0..4 {
        let user = Address::generate(&env);
        StellarAssetClient::new(&env, &stake_token).mint(&user, &(u32::MAX as i128));
        users.push(user);
    }

    let mut last_index = client.get_reward_per_token();

    // Random call sequences must never panic outside a rejected call, and
    // must keep the ledger balanced.
    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Stake { amount } => {
                let _ = client.try_stake(caller, &(amount as i128));
            }
            FuzzAction::Withdraw { amount } => {
                let _ = client.try_withdraw(caller, &(amount as i128));
            }
            FuzzAction::Claim => {
                let _ = client.try_claim(caller);
            }
            FuzzAction::Exit => {
                let _ = client.try_exit(caller);
            }
            FuzzAction::Fund { amount } => {
                let amount = amount as i128;
                if amount > 0 {
                    StellarAssetClient::new(&env, &reward_token).mint(&contract_id, &amount);
                }
                let _ = client.try_fund(&funder, &amount);
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now + seconds as u64);
            }
            FuzzAction::SetPaused { paused } => {
                let _ = client.try_set_paused(&owner, &paused);
            }
        }

        let sum: i128 = users.iter().map(|u| client.get_balance(u)).sum();
        assert_eq!(sum, client.get_total_staked());

        let index = client.get_reward_per_token();
        assert!(index >= last_index);
        last_index = index;
    }
});
