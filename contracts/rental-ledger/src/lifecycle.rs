//! Agreement lifecycle: `Vacant -> Occupied` on signing, back to `Vacant`
//! on completion or termination.
//!
//! Every transition writes all of its state before any token call.

use soroban_sdk::{Address, Env};

use rentals_lib::{
    audit::{self, OperationType},
    validation, Agreement, LedgerError, Room,
};

use crate::{
    events, funds, policy,
    storage::{self, Sequence},
};

/// Reserve a vacant room for one tenant, or clear the reservation with `None`.
pub fn designate_tenant(
    env: &Env,
    landlord: &Address,
    room_id: u64,
    tenant: Option<Address>,
) -> Result<(), LedgerError> {
    let mut room = storage::load_room(env, room_id)?;
    policy::require_landlord(&room, landlord)?;
    policy::require_vacant(&room)?;
    if tenant.as_ref() == Some(landlord) {
        return Err(LedgerError::LandlordCannotRent);
    }

    room.designated_tenant = tenant.clone();
    storage::save_room(env, &room);

    audit::record(env, landlord, OperationType::TenantDesignated, room_id, 0);
    events::tenant_designated(env, room_id, &tenant);
    Ok(())
}

/// Open an agreement on a vacant room. The full attached `amount` moves
/// into custody; rent and deposit stay there until paid out.
pub fn sign_agreement(
    env: &Env,
    tenant: &Address,
    room_id: u64,
    amount: i128,
) -> Result<u64, LedgerError> {
    validation::validate_amount(amount)?;
    let config = storage::get_config(env)?;
    let mut room = storage::load_room(env, room_id)?;

    policy::require_vacant(&room)?;
    policy::require_designated_tenant(&room, tenant)?;
    policy::require_rent_covered(&config, &room, amount)?;
    policy::require_agreement_fee_covered(&config, &room, amount)?;
    policy::require_no_live_agreement(&room)?;

    let now = env.ledger().timestamp();
    let agreement_id = storage::next_id(env, Sequence::Agreement)?;
    let agreement = Agreement {
        agreement_id,
        room_id,
        room_name: room.name.clone(),
        street_address: room.street_address.clone(),
        rent_per_month: room.rent_per_month,
        security_deposit: room.security_deposit,
        timestamp: now,
        landlord: room.landlord.clone(),
        tenant: tenant.clone(),
    };

    room.agreement_id = agreement_id;
    room.current_tenant = Some(tenant.clone());
    room.designated_tenant = None;
    room.vacant = false;
    room.timestamp = now;

    storage::save_agreement(env, &agreement);
    storage::append_room_agreement(env, room_id, agreement_id);
    storage::save_room(env, &room);
    storage::mark_occupied(env)?;
    audit::record(env, tenant, OperationType::AgreementSigned, room_id, amount);

    funds::collect(env, &config, tenant, amount)?;

    events::agreement_signed(env, &agreement);
    Ok(agreement_id)
}

/// Normal end of term. No rent settlement and no deposit handling.
pub fn agreement_completed(env: &Env, landlord: &Address, room_id: u64) -> Result<(), LedgerError> {
    let mut room = storage::load_room(env, room_id)?;
    policy::require_landlord(&room, landlord)?;
    let active = storage::find_agreement(env, room.agreement_id);
    policy::require_live_agreement(&room, active.as_ref())?;

    let (agreement_id, tenant) = release_room(env, &mut room)?;
    audit::record(env, landlord, OperationType::AgreementCompleted, room_id, 0);

    events::agreement_completed(env, room_id, agreement_id, &tenant);
    Ok(())
}

/// Early end of term by the landlord, who keeps the termination penalty.
/// Returns the penalty paid out of custody.
pub fn agreement_terminated(
    env: &Env,
    landlord: &Address,
    room_id: u64,
) -> Result<i128, LedgerError> {
    let config = storage::get_config(env)?;
    let mut room = storage::load_room(env, room_id)?;
    policy::require_landlord(&room, landlord)?;
    let active = storage::find_agreement(env, room.agreement_id);
    policy::require_live_agreement(&room, active.as_ref())?;

    let penalty = config
        .termination_penalty(room.security_deposit)
        .ok_or(LedgerError::ArithmeticOverflow)?;

    let (agreement_id, tenant) = release_room(env, &mut room)?;
    audit::record(env, landlord, OperationType::AgreementTerminated, room_id, penalty);

    funds::disburse(env, &config, landlord, penalty)?;

    events::agreement_terminated(env, room_id, agreement_id, &tenant, penalty);
    Ok(penalty)
}

/// Return an occupied room to vacant and persist it. Yields the agreement
/// and tenant that were active.
fn release_room(env: &Env, room: &mut Room) -> Result<(u64, Address), LedgerError> {
    policy::require_occupied(room)?;
    let tenant = room
        .current_tenant
        .take()
        .ok_or(LedgerError::RoomVacant)?;
    let agreement_id = room.agreement_id;

    room.agreement_id = 0;
    room.vacant = true;
    room.designated_tenant = None;

    storage::save_room(env, room);
    storage::mark_vacated(env)?;
    Ok((agreement_id, tenant))
}
