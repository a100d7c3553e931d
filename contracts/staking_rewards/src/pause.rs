use soroban_sdk::{Address, Env};

use crate::{
    events, ownership,
    storage::{self, LAST_PAUSE, PAUSED},
    ContractError,
};

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

pub fn last_pause_time(env: &Env) -> u64 {
    env.storage().instance().get(&LAST_PAUSE).unwrap_or(0)
}

/// Guard for `stake` and `withdraw`. Claims and exits are never gated.
pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(ContractError::Paused);
    }
    Ok(())
}

/// Flip the pause flag. Setting the current value again is a no-op.
pub fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), ContractError> {
    ownership::require_owner(env, caller)?;

    if paused == is_paused(env) {
        return Ok(());
    }

    env.storage().instance().set(&PAUSED, &paused);
    if paused {
        env.storage()
            .instance()
            .set(&LAST_PAUSE, &env.ledger().timestamp());
    }
    storage::extend_instance_ttl(env);

    events::publish_pause_changed(env, caller.clone(), paused);
    Ok(())
}
