use soroban_sdk::{contracttype, Env};

use crate::{pool::Pool, rewards, ContractError};

/// One staker's position.
///
/// Absent accounts read as `Account::default()`; there is no registration
/// step.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Account {
    /// Stake tokens held by the pool on behalf of this account.
    pub staked: i128,
    /// `Pool::reward_per_token` at this account's last settlement.
    pub reward_per_token_paid: i128,
    /// Settled reward not yet paid out.
    pub owed: i128,
}

/// Snapshot of a staker's position returned by `get_staker_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakerInfo {
    pub staked: i128,
    pub earned: i128,
}

/// Checkpoint the pool, then fold the account's share of the index growth
/// since its last snapshot into `owed`.
pub fn settle(
    env: &Env,
    pool: &mut Pool,
    account: &mut Account,
    now: u64,
) -> Result<(), ContractError> {
    pool.checkpoint(env, now);

    account.owed = rewards::earned(
        env,
        account.staked,
        pool.reward_per_token,
        account.reward_per_token_paid,
        account.owed,
    )?;
    account.reward_per_token_paid = pool.reward_per_token;
    Ok(())
}

/// Read-only counterpart of [`settle`].
pub fn earned(env: &Env, pool: &Pool, account: &Account, now: u64) -> Result<i128, ContractError> {
    rewards::earned(
        env,
        account.staked,
        pool.current_index(env, now),
        account.reward_per_token_paid,
        account.owed,
    )
}

/// Credit `amount` to a settled account.
pub fn deposit(pool: &mut Pool, account: &mut Account, amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    account.staked = account
        .staked
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    pool.total_staked = pool
        .total_staked
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    Ok(())
}

/// Debit `amount` from a settled account.
pub fn release(pool: &mut Pool, account: &mut Account, amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount > account.staked {
        return Err(ContractError::InsufficientBalance);
    }

    account.staked -= amount;
    pool.total_staked = pool
        .total_staked
        .checked_sub(amount)
        .ok_or(ContractError::Overflow)?;
    Ok(())
}

/// Zero the account's owed reward and return what was owed.
pub fn take_owed(account: &mut Account) -> i128 {
    core::mem::take(&mut account.owed)
}
