use soroban_sdk::{Address, Env, String};

use rentals_lib::{
    audit::{self, OperationType},
    validation, LedgerError, Room,
};

use crate::{
    events, policy,
    storage::{self, Sequence},
};

/// Register a new vacant room with the caller as landlord.
pub fn add_room(
    env: &Env,
    owner: &Address,
    name: String,
    street_address: String,
    rent_per_month: u64,
    security_deposit: u64,
) -> Result<u64, LedgerError> {
    policy::require_owner(env, owner)?;
    validation::validate_label(&name)?;
    validation::validate_label(&street_address)?;

    // A room whose signing fee cannot be expressed in token units could never be rented.
    let config = storage::get_config(env)?;
    rent_per_month
        .checked_add(security_deposit)
        .and_then(|units| config.scaled(units))
        .ok_or(LedgerError::InvalidInput)?;

    let room_id = storage::next_id(env, Sequence::Room)?;
    let room = Room {
        room_id,
        name,
        street_address,
        rent_per_month,
        security_deposit,
        timestamp: env.ledger().timestamp(),
        vacant: true,
        landlord: owner.clone(),
        current_tenant: None,
        designated_tenant: None,
        agreement_id: 0,
        deposit_withdrawn: false,
    };

    storage::save_room(env, &room);
    storage::mark_vacated(env)?;

    audit::record(env, owner, OperationType::RoomAdded, room_id, 0);
    events::room_added(env, &room);

    Ok(room_id)
}

pub fn total_rooms(env: &Env) -> u64 {
    storage::current_id(env, Sequence::Room)
}

pub fn rooms_available(env: &Env) -> u64 {
    storage::vacant_rooms(env)
}

/// Full scan of the registry. Kept as the reference the vacancy counter is checked against.
#[cfg(test)]
pub fn count_vacant_by_scan(env: &Env) -> u64 {
    (1..=total_rooms(env))
        .filter_map(|room_id| storage::find_room(env, room_id))
        .filter(|room| room.vacant)
        .count() as u64
}
