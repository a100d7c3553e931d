use soroban_sdk::{contracttype, Env};

use crate::{
    rewards::{self, DEFAULT_WINDOW_LENGTH},
    ContractError,
};

/// Phase of the current funding window.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum WindowState {
    /// Never funded, or funded with a rate that has since been cleared.
    Idle = 0,
    /// `now < window_end`; rewards are streaming.
    Active = 1,
    /// The window has ended and nothing accrues past `window_end`.
    Expired = 2,
}

/// Global pool accounting.
///
/// Stored as a single instance-storage record so that every entry point
/// loads, mutates and writes back one aggregate.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pool {
    /// Sum of every account's `staked`.
    pub total_staked: i128,
    /// Reward units emitted per second across all stakers.
    pub reward_rate: i128,
    /// Seconds a funding event is spread over.
    pub window_length: u64,
    /// Timestamp after which nothing accrues.
    pub window_end: u64,
    /// Timestamp `reward_per_token` was last advanced to.
    pub last_checkpoint: u64,
    /// Accumulated reward per staked unit, scaled by `rewards::SCALE`.
    pub reward_per_token: i128,
}

impl Pool {
    pub fn new() -> Self {
        Pool {
            total_staked: 0,
            reward_rate: 0,
            window_length: DEFAULT_WINDOW_LENGTH,
            window_end: 0,
            last_checkpoint: 0,
            reward_per_token: 0,
        }
    }

    pub fn applicable_time(&self, now: u64) -> u64 {
        rewards::applicable_time(now, self.window_end)
    }

    /// Up-to-date accumulator value at `now` without mutating the pool.
    pub fn current_index(&self, env: &Env, now: u64) -> i128 {
        rewards::reward_per_token(
            env,
            self.reward_per_token,
            self.reward_rate,
            self.last_checkpoint,
            self.applicable_time(now),
            self.total_staked,
        )
    }

    /// Fold elapsed emission into `reward_per_token`.
    ///
    /// Must run before any change to `total_staked` or `reward_rate`.
    pub fn checkpoint(&mut self, env: &Env, now: u64) {
        self.reward_per_token = self.current_index(env, now);
        self.last_checkpoint = self.applicable_time(now);
    }

    pub fn window_state(&self, now: u64) -> WindowState {
        if now < self.window_end {
            WindowState::Active
        } else if self.reward_rate == 0 {
            WindowState::Idle
        } else {
            WindowState::Expired
        }
    }

    /// Total reward emitted over one full window at the current rate.
    pub fn reward_for_duration(&self) -> Result<i128, ContractError> {
        self.reward_rate
            .checked_mul(self.window_length as i128)
            .ok_or(ContractError::Overflow)
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}
