use soroban_sdk::{Address, Env};

use rentals_lib::{
    audit::{self, OperationType},
    LedgerError,
};

use crate::{events, funds, policy, storage};

/// Refund the room's security deposit to its current tenant, once per room.
///
/// The withdrawn flag is written before the payout and is never cleared.
/// Returns the scaled amount refunded.
pub fn withdraw_security_deposit(
    env: &Env,
    tenant: &Address,
    room_id: u64,
) -> Result<i128, LedgerError> {
    let config = storage::get_config(env)?;
    let mut room = storage::load_room(env, room_id)?;
    policy::require_current_tenant(&room, tenant)?;
    policy::require_deposit_available(&room)?;

    let refund = config
        .scaled(room.security_deposit)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    room.deposit_withdrawn = true;
    storage::save_room(env, &room);
    audit::record(env, tenant, OperationType::DepositWithdrawn, room_id, refund);

    funds::disburse(env, &config, tenant, refund)?;

    events::deposit_withdrawn(env, room_id, tenant, refund);
    Ok(refund)
}

pub fn custody_balance(env: &Env) -> Result<i128, LedgerError> {
    let config = storage::get_config(env)?;
    Ok(funds::custody_balance(env, &config))
}
