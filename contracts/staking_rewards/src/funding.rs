use soroban_sdk::Env;

use crate::{
    pool::{Pool, WindowState},
    ContractError,
};

/// Emission rate for a new funding of `amount`.
///
/// While the window is still active the unemitted remainder
/// `(window_end − now) × reward_rate` is folded into the new funding so that
/// nothing promised by the previous window is discarded.
pub fn renewal_rate(pool: &Pool, amount: i128, now: u64) -> Result<i128, ContractError> {
    if pool.window_length == 0 {
        return Err(ContractError::InvalidWindowLength);
    }
    let length = pool.window_length as i128;

    let total = match pool.window_state(now) {
        WindowState::Active => {
            let remaining = pool.window_end.saturating_sub(now) as i128;
            let leftover = remaining
                .checked_mul(pool.reward_rate)
                .ok_or(ContractError::Overflow)?;
            amount.checked_add(leftover).ok_or(ContractError::Overflow)?
        }
        WindowState::Idle | WindowState::Expired => amount,
    };

    Ok(total / length)
}

/// Apply a funding event to `pool`.
///
/// `reward_balance` is the contract's current reward-token balance; the new
/// rate is rejected if a full window at that rate would pay out more than is
/// held.
///
/// Returns the new reward rate.
pub fn notify_reward(
    env: &Env,
    pool: &mut Pool,
    amount: i128,
    now: u64,
    reward_balance: i128,
) -> Result<i128, ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    pool.checkpoint(env, now);

    let rate = renewal_rate(pool, amount, now)?;
    if rate <= 0 {
        return Err(ContractError::InvalidAmount);
    }

    let committed = rate
        .checked_mul(pool.window_length as i128)
        .ok_or(ContractError::Overflow)?;
    if committed > reward_balance {
        return Err(ContractError::InsufficientRewardBalance);
    }

    pool.reward_rate = rate;
    pool.last_checkpoint = now;
    pool.window_end = now
        .checked_add(pool.window_length)
        .ok_or(ContractError::Overflow)?;

    Ok(rate)
}

/// Change the window length used by the next funding.
pub fn update_window_length(
    env: &Env,
    pool: &mut Pool,
    length: u64,
    now: u64,
) -> Result<(), ContractError> {
    if length == 0 {
        return Err(ContractError::InvalidWindowLength);
    }
    if pool.window_state(now) == WindowState::Active {
        return Err(ContractError::WindowActive);
    }

    pool.checkpoint(env, now);
    pool.window_length = length;
    Ok(())
}
