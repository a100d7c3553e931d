use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{ledger::Account, pool::Pool, ContractError};

// ── Storage key constants ────────────────────────────────────────────────────

pub const INITIALIZED: Symbol = symbol_short!("INIT");
pub const CONFIG: Symbol = symbol_short!("CONFIG");
pub const POOL: Symbol = symbol_short!("POOL");
pub const OWNER: Symbol = symbol_short!("OWNER");
pub const NOMINEE: Symbol = symbol_short!("NOMINEE");
pub const PAUSED: Symbol = symbol_short!("PAUSED");
pub const LAST_PAUSE: Symbol = symbol_short!("LAST_PAUS");

// Per-account persistent storage uses tuple keys: (prefix, account_address)
const ACCOUNT: Symbol = symbol_short!("ACCT");

const DAY_IN_LEDGERS: u32 = 17_280;
const TTL_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
const TTL_EXTEND_TO: u32 = 180 * DAY_IN_LEDGERS;

/// Identities fixed at `initialize` and never changed afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// The only address allowed to call `fund`.
    pub funder: Address,
    pub stake_token: Address,
    pub reward_token: Address,
}

/// Instance storage TTL covers every instance key at once.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn account_key(account: &Address) -> (Symbol, Address) {
    (ACCOUNT, account.clone())
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn load_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ContractError::NotInitialized)
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().instance().set(&CONFIG, config);
}

pub fn load_pool(env: &Env) -> Result<Pool, ContractError> {
    env.storage()
        .instance()
        .get(&POOL)
        .ok_or(ContractError::NotInitialized)
}

pub fn save_pool(env: &Env, pool: &Pool) {
    env.storage().instance().set(&POOL, pool);
    extend_instance_ttl(env);
}

pub fn load_account(env: &Env, account: &Address) -> Account {
    env.storage()
        .persistent()
        .get(&account_key(account))
        .unwrap_or_default()
}

pub fn save_account(env: &Env, account: &Address, state: &Account) {
    let key = account_key(account);
    env.storage().persistent().set(&key, state);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
