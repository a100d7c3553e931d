#![no_std]

pub mod errors;
pub mod events;
pub mod funding;
pub mod ledger;
pub mod ownership;
pub mod pause;
pub mod pool;
pub mod rewards;
pub mod storage;

use soroban_sdk::{contract, contractimpl, log, token, Address, Env};

pub use errors::{ContractError, ErrorCategory};
pub use ledger::{Account, StakerInfo};
pub use ownership::Nomination;
pub use pool::{Pool, WindowState};

use storage::{Config, INITIALIZED};

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingRewardsContract;

#[contractimpl]
impl StakingRewardsContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `owner`        – administers window length, pause and recovery.
    /// * `funder`       – the only address that may call `fund`; immutable.
    /// * `stake_token`  – SAC address of the token users stake.
    /// * `reward_token` – SAC address of the token streamed as rewards.
    ///
    /// The pool starts idle with a 7-day window length.
    pub fn initialize(
        env: Env,
        owner: Address,
        funder: Address,
        stake_token: Address,
        reward_token: Address,
    ) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        if stake_token == reward_token {
            return Err(ContractError::TokensIdentical);
        }

        let pool = Pool::new();

        env.storage().instance().set(&INITIALIZED, &true);
        ownership::set_owner(&env, &owner);
        storage::save_config(
            &env,
            &Config {
                funder: funder.clone(),
                stake_token: stake_token.clone(),
                reward_token: reward_token.clone(),
            },
        );
        storage::save_pool(&env, &pool);

        events::publish_initialized(
            &env,
            owner,
            funder,
            stake_token,
            reward_token,
            pool.window_length,
        );

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` stake tokens.
    ///
    /// The account is settled first so the new tokens never earn rewards
    /// retroactively.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        pause::require_not_paused(&env)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let config = storage::load_config(&env)?;
        let mut pool = storage::load_pool(&env)?;
        let mut account = storage::load_account(&env, &staker);

        // 1. Settle, then credit.
        ledger::settle(&env, &mut pool, &mut account, now)?;
        ledger::deposit(&mut pool, &mut account, amount)?;

        // 2. Persist before touching the token (checks-effects-interactions).
        storage::save_pool(&env, &pool);
        storage::save_account(&env, &staker, &account);

        // 3. Pull tokens from the staker into the contract.
        Self::transfer(
            &env,
            &config.stake_token,
            &staker,
            &env.current_contract_address(),
            amount,
        )?;

        events::publish_staked(&env, staker, amount, pool.total_staked);

        Ok(())
    }

    /// Return `amount` stake tokens to the caller.
    pub fn withdraw(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();
        pause::require_not_paused(&env)?;

        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        let now = env.ledger().timestamp();
        let config = storage::load_config(&env)?;
        let mut pool = storage::load_pool(&env)?;
        let mut account = storage::load_account(&env, &staker);

        ledger::settle(&env, &mut pool, &mut account, now)?;
        ledger::release(&mut pool, &mut account, amount)?;

        storage::save_pool(&env, &pool);
        storage::save_account(&env, &staker, &account);

        Self::transfer(
            &env,
            &config.stake_token,
            &env.current_contract_address(),
            &staker,
            amount,
        )?;

        events::publish_withdrawn(&env, staker, amount, pool.total_staked);

        Ok(())
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out everything `staker` has earned so far.
    ///
    /// Fails with `NothingToClaim` when nothing is owed. Not gated by pause.
    pub fn claim(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let config = storage::load_config(&env)?;
        let mut pool = storage::load_pool(&env)?;
        let mut account = storage::load_account(&env, &staker);

        ledger::settle(&env, &mut pool, &mut account, now)?;
        let reward = ledger::take_owed(&mut account);
        if reward <= 0 {
            return Err(ContractError::NothingToClaim);
        }

        storage::save_pool(&env, &pool);
        storage::save_account(&env, &staker, &account);

        Self::transfer(
            &env,
            &config.reward_token,
            &env.current_contract_address(),
            &staker,
            reward,
        )?;

        events::publish_reward_paid(&env, staker, reward);

        Ok(reward)
    }

    /// Withdraw the whole stake and claim any owed reward in one call.
    ///
    /// Not gated by pause, so participants can always leave with what they
    /// earned. Fails with `InvalidAmount` when there is neither stake nor
    /// reward to return.
    pub fn exit(env: Env, staker: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        let now = env.ledger().timestamp();
        let config = storage::load_config(&env)?;
        let mut pool = storage::load_pool(&env)?;
        let mut account = storage::load_account(&env, &staker);

        ledger::settle(&env, &mut pool, &mut account, now)?;

        let stake = account.staked;
        if stake > 0 {
            ledger::release(&mut pool, &mut account, stake)?;
        }
        let reward = ledger::take_owed(&mut account);
        if stake <= 0 && reward <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        storage::save_pool(&env, &pool);
        storage::save_account(&env, &staker, &account);

        let contract_address = env.current_contract_address();
        if stake > 0 {
            Self::transfer(
                &env,
                &config.stake_token,
                &contract_address,
                &staker,
                stake,
            )?;
            events::publish_withdrawn(&env, staker.clone(), stake, pool.total_staked);
        }
        if reward > 0 {
            Self::transfer(
                &env,
                &config.reward_token,
                &contract_address,
                &staker,
                reward,
            )?;
            events::publish_reward_paid(&env, staker, reward);
        }

        Ok(())
    }

    // ── Funding ─────────────────────────────────────────────────────────────

    /// Open or renew the reward window with `amount` reward tokens.
    ///
    /// The funder transfers the tokens to the contract beforehand; the call
    /// fails with `InsufficientRewardBalance` if the contract's reward
    /// balance cannot cover a full window at the resulting rate.
    pub fn fund(env: Env, funder: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        funder.require_auth();

        let config = storage::load_config(&env)?;
        if funder != config.funder {
            return Err(ContractError::Unauthorized);
        }

        let now = env.ledger().timestamp();
        let mut pool = storage::load_pool(&env)?;
        let balance = token::Client::new(&env, &config.reward_token)
            .balance(&env.current_contract_address());

        let rate = funding::notify_reward(&env, &mut pool, amount, now, balance)?;
        storage::save_pool(&env, &pool);

        log!(&env, "reward window funded", amount, rate, pool.window_end);
        events::publish_reward_added(&env, amount, rate, pool.window_end);

        Ok(())
    }

    // ── Admin ────────────────────────────────────────────────────────────────

    /// Change the window length used by the next funding.
    ///
    /// Rejected with `WindowActive` until the current window has ended.
    pub fn set_window_length(env: Env, caller: Address, seconds: u64) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        ownership::require_owner(&env, &caller)?;

        let now = env.ledger().timestamp();
        let mut pool = storage::load_pool(&env)?;
        funding::update_window_length(&env, &mut pool, seconds, now)?;
        storage::save_pool(&env, &pool);

        events::publish_window_length_set(&env, seconds);

        Ok(())
    }

    pub fn set_paused(env: Env, caller: Address, paused: bool) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        pause::set_paused(&env, &caller, paused)
    }

    /// Send `amount` of any held `token` to the owner.
    ///
    /// The stake token is always refused with `ForbiddenAsset`, whoever the
    /// caller is.
    pub fn recover_asset(
        env: Env,
        caller: Address,
        token: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        let config = storage::load_config(&env)?;
        if token == config.stake_token {
            return Err(ContractError::ForbiddenAsset);
        }
        ownership::require_owner(&env, &caller)?;
        if amount <= 0 {
            return Err(ContractError::InvalidAmount);
        }

        Self::transfer(
            &env,
            &token,
            &env.current_contract_address(),
            &caller,
            amount,
        )?;

        events::publish_recovered(&env, token, amount);

        Ok(())
    }

    // ── Ownership transfer (two-step) ────────────────────────────────────────

    /// Nominate `candidate` as the next owner. The candidate must call
    /// `accept_ownership` to complete the transfer.
    pub fn nominate_owner(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        ownership::nominate(&env, &caller, candidate)
    }

    pub fn accept_ownership(env: Env, candidate: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        candidate.require_auth();
        ownership::accept(&env, &candidate)
    }

    pub fn cancel_nomination(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        ownership::cancel(&env, &caller)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn get_total_staked(env: Env) -> Result<i128, ContractError> {
        Ok(storage::load_pool(&env)?.total_staked)
    }

    /// Return the account's current staked balance.
    pub fn get_balance(env: Env, account: Address) -> i128 {
        storage::load_account(&env, &account).staked
    }

    /// Return owed plus pending reward for `account` without mutating state.
    pub fn get_earned(env: Env, account: Address) -> Result<i128, ContractError> {
        let pool = storage::load_pool(&env)?;
        let state = storage::load_account(&env, &account);
        ledger::earned(&env, &pool, &state, env.ledger().timestamp())
    }

    /// Return the combined staking position for an account.
    pub fn get_staker_info(env: Env, account: Address) -> Result<StakerInfo, ContractError> {
        let pool = storage::load_pool(&env)?;
        let state = storage::load_account(&env, &account);
        Ok(StakerInfo {
            staked: state.staked,
            earned: ledger::earned(&env, &pool, &state, env.ledger().timestamp())?,
        })
    }

    /// Return the up-to-date reward-per-token accumulator (scaled by `SCALE`).
    pub fn get_reward_per_token(env: Env) -> Result<i128, ContractError> {
        Ok(storage::load_pool(&env)?.current_index(&env, env.ledger().timestamp()))
    }

    pub fn get_reward_rate(env: Env) -> Result<i128, ContractError> {
        Ok(storage::load_pool(&env)?.reward_rate)
    }

    /// Return the reward a full window emits at the current rate.
    pub fn get_reward_for_duration(env: Env) -> Result<i128, ContractError> {
        storage::load_pool(&env)?.reward_for_duration()
    }

    /// Return `min(now, window_end)`.
    pub fn get_last_applicable_time(env: Env) -> Result<u64, ContractError> {
        Ok(storage::load_pool(&env)?.applicable_time(env.ledger().timestamp()))
    }

    pub fn get_window_end(env: Env) -> Result<u64, ContractError> {
        Ok(storage::load_pool(&env)?.window_end)
    }

    pub fn get_window_length(env: Env) -> Result<u64, ContractError> {
        Ok(storage::load_pool(&env)?.window_length)
    }

    pub fn get_window_state(env: Env) -> Result<WindowState, ContractError> {
        Ok(storage::load_pool(&env)?.window_state(env.ledger().timestamp()))
    }

    /// Raw pool record as last persisted.
    pub fn get_pool(env: Env) -> Result<Pool, ContractError> {
        storage::load_pool(&env)
    }

    /// Raw account record as last persisted.
    pub fn get_account(env: Env, account: Address) -> Account {
        storage::load_account(&env, &account)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        ownership::get_owner(&env)
    }

    pub fn get_nominated_owner(env: Env) -> Option<Address> {
        match ownership::get_nomination(&env) {
            Nomination::Pending(nominee) => Some(nominee),
            Nomination::Vacant => None,
        }
    }

    pub fn get_funder(env: Env) -> Result<Address, ContractError> {
        Ok(storage::load_config(&env)?.funder)
    }

    pub fn get_stake_token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::load_config(&env)?.stake_token)
    }

    pub fn get_reward_token(env: Env) -> Result<Address, ContractError> {
        Ok(storage::load_config(&env)?.reward_token)
    }

    pub fn is_paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    pub fn get_last_pause_time(env: Env) -> u64 {
        pause::last_pause_time(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !storage::is_initialized(env) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Move `amount` of `token`, mapping any token failure to
    /// `TransferFailed` so the whole call reverts.
    fn transfer(
        env: &Env,
        token: &Address,
        from: &Address,
        to: &Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        match token::Client::new(env, token).try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(()),
            _ => Err(ContractError::TransferFailed),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_ownership;
