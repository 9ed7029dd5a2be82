use soroban_sdk::{Address, Env, Symbol};

use crate::{errors::LedgerError, OWNER_KEY};

pub fn has_owner(env: &Env) -> bool {
    env.storage().instance().has(&Symbol::new(env, OWNER_KEY))
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage()
        .instance()
        .set(&Symbol::new(env, OWNER_KEY), owner);
}

pub fn get_owner(env: &Env) -> Result<Address, LedgerError> {
    env.storage()
        .instance()
        .get(&Symbol::new(env, OWNER_KEY))
        .ok_or(LedgerError::NotInitialized)
}

pub fn verify_owner(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    let owner = get_owner(env)?;
    if &owner != caller {
        return Err(LedgerError::NotOwner);
    }
    Ok(())
}

pub fn transfer_owner(
    env: &Env,
    current_owner: &Address,
    new_owner: &Address,
) -> Result<(), LedgerError> {
    current_owner.require_auth();
    verify_owner(env, current_owner)?;
    set_owner(env, new_owner);
    Ok(())
}
