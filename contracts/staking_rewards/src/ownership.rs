use soroban_sdk::{contracttype, Address, Env};

use crate::{
    events,
    storage::{self, NOMINEE, OWNER},
    ContractError,
};

/// Pending side of the two-step ownership handoff.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Nomination {
    Vacant,
    Pending(Address),
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
    storage::extend_instance_ttl(env);
}

pub fn get_owner(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&OWNER)
        .ok_or(ContractError::NotInitialized)
}

pub fn get_nomination(env: &Env) -> Nomination {
    env.storage()
        .instance()
        .get(&NOMINEE)
        .unwrap_or(Nomination::Vacant)
}

/// Guard: revert if `caller` is not the stored owner.
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if *caller != get_owner(env)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/// Record `candidate` as the pending owner. A later nomination replaces an
/// earlier one.
pub fn nominate(env: &Env, caller: &Address, candidate: Address) -> Result<(), ContractError> {
    require_owner(env, caller)?;

    env.storage()
        .instance()
        .set(&NOMINEE, &Nomination::Pending(candidate.clone()));
    storage::extend_instance_ttl(env);

    events::publish_owner_nominated(env, caller.clone(), candidate);
    Ok(())
}

/// Complete the handoff. Only the pending nominee may call this.
pub fn accept(env: &Env, candidate: &Address) -> Result<(), ContractError> {
    match get_nomination(env) {
        Nomination::Pending(nominee) if nominee == *candidate => {}
        _ => return Err(ContractError::Unauthorized),
    }

    let old_owner = get_owner(env)?;
    set_owner(env, candidate);
    env.storage().instance().set(&NOMINEE, &Nomination::Vacant);

    events::publish_owner_changed(env, old_owner, candidate.clone());
    Ok(())
}

/// Withdraw a pending nomination.
pub fn cancel(env: &Env, caller: &Address) -> Result<(), ContractError> {
    require_owner(env, caller)?;

    let Nomination::Pending(nominee) = get_nomination(env) else {
        return Err(ContractError::NoPendingNomination);
    };
    env.storage().instance().set(&NOMINEE, &Nomination::Vacant);
    storage::extend_instance_ttl(env);

    events::publish_nomination_cancelled(env, caller.clone(), nominee);
    Ok(())
}
