use soroban_sdk::{Env, I256};

use crate::ContractError;

/// Fixed-point scaling factor.
///
/// Reward-per-token values are multiplied by this constant before storage so
/// that `reward_rate × elapsed / total_staked` keeps 18 decimal places of
/// sub-unit precision under integer division. Truncation loss per checkpoint
/// is below one unit of `1 / SCALE` per staked token.
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Window length applied at construction: 7 days.
pub const DEFAULT_WINDOW_LENGTH: u64 = 7 * 24 * 60 * 60;

// ── Core reward engine ──────────────────────────────────────────────────────

/// Last instant at which rewards accrue: `min(now, window_end)`.
pub fn applicable_time(now: u64, window_end: u64) -> u64 {
    now.min(window_end)
}

/// Advance the reward-per-token accumulator.
///
/// ```text
/// Δrpt = (applicable − last_checkpoint) × reward_rate × SCALE / total_staked
/// rpt  = stored + Δrpt
/// ```
///
/// When `total_staked` is zero the stored value is returned unchanged. Time
/// that passes with an empty pool is not distributed to anyone.
///
/// The product is formed in 256 bits, so any rate accepted by funding can be
/// folded in. The result saturates at `i128::MAX`; past that point further
/// emission is not credited to anyone, which only ever under-pays.
///
/// # Arguments
/// * `stored`          – current accumulator (scaled by SCALE)
/// * `reward_rate`     – reward units emitted per second across all stakers
/// * `last_checkpoint` – timestamp the accumulator was last advanced to
/// * `applicable`      – `applicable_time(now, window_end)`
/// * `total_staked`    – sum of all active stakes
pub fn reward_per_token(
    env: &Env,
    stored: i128,
    reward_rate: i128,
    last_checkpoint: u64,
    applicable: u64,
    total_staked: i128,
) -> i128 {
    let elapsed = applicable.saturating_sub(last_checkpoint) as i128;
    if total_staked <= 0 || elapsed == 0 || reward_rate <= 0 {
        return stored;
    }

    let delta = wide(env, elapsed)
        .mul(&wide(env, reward_rate))
        .mul(&wide(env, SCALE))
        .div(&wide(env, total_staked));

    wide(env, stored).add(&delta).to_i128().unwrap_or(i128::MAX)
}

/// Total reward owed to one account.
///
/// ```text
/// earned = staked × (current_rpt − rpt_paid) / SCALE + owed
/// ```
///
/// Only accumulation since the account's last snapshot is counted, so
/// earlier settlements are never double-counted.
pub fn earned(
    env: &Env,
    staked: i128,
    current_rpt: i128,
    rpt_paid: i128,
    owed: i128,
) -> Result<i128, ContractError> {
    let delta = current_rpt
        .checked_sub(rpt_paid)
        .ok_or(ContractError::Overflow)?;
    if staked <= 0 || delta == 0 {
        return Ok(owed);
    }

    let pending = wide(env, staked)
        .mul(&wide(env, delta))
        .div(&wide(env, SCALE))
        .to_i128()
        .ok_or(ContractError::Overflow)?;

    owed.checked_add(pending).ok_or(ContractError::Overflow)
}

fn wide(env: &Env, value: i128) -> I256 {
    I256::from_i128(env, value)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
