//! Access control predicates.
//!
//! Each gate is independent and side-effect free. Operations call the gates
//! they need at the top, before touching storage or funds, and propagate the
//! first failure with `?`.

use soroban_sdk::{Address, Env};

use rentals_lib::{admin, Agreement, LedgerConfig, LedgerError, Room};

/* ---------------- ROLES ---------------- */

pub fn require_owner(env: &Env, caller: &Address) -> Result<(), LedgerError> {
    admin::verify_owner(env, caller)
}

pub fn require_landlord(room: &Room, caller: &Address) -> Result<(), LedgerError> {
    if &room.landlord != caller {
        return Err(LedgerError::NotLandlord);
    }
    Ok(())
}

pub fn require_current_tenant(room: &Room, caller: &Address) -> Result<(), LedgerError> {
    if !room.is_occupied_by(caller) {
        return Err(LedgerError::NotCurrentTenant);
    }
    Ok(())
}

/// Signing gate: a designated tenant must match the caller; without a
/// designation anyone but the landlord may sign.
pub fn require_designated_tenant(room: &Room, caller: &Address) -> Result<(), LedgerError> {
    match &room.designated_tenant {
        Some(designated) if designated != caller => Err(LedgerError::NotDesignatedTenant),
        Some(_) => Ok(()),
        None if &room.landlord == caller => Err(LedgerError::LandlordCannotRent),
        None => Ok(()),
    }
}

/* ---------------- OCCUPANCY ---------------- */

pub fn require_vacant(room: &Room) -> Result<(), LedgerError> {
    if !room.vacant {
        return Err(LedgerError::RoomOccupied);
    }
    Ok(())
}

pub fn require_occupied(room: &Room) -> Result<(), LedgerError> {
    if room.vacant {
        return Err(LedgerError::RoomVacant);
    }
    Ok(())
}

/// The room's active agreement exists and is the one it points at.
pub fn require_live_agreement(
    room: &Room,
    agreement: Option<&Agreement>,
) -> Result<(), LedgerError> {
    match agreement {
        Some(a) if room.agreement_id != 0 && a.agreement_id == room.agreement_id => Ok(()),
        _ => Err(LedgerError::AgreementNotLive),
    }
}

pub fn require_no_live_agreement(room: &Room) -> Result<(), LedgerError> {
    if room.agreement_id != 0 {
        return Err(LedgerError::AgreementStillLive);
    }
    Ok(())
}

/* ---------------- VALUE ---------------- */

/// Returns the scaled monthly rent when `amount` covers it.
pub fn require_rent_covered(
    config: &LedgerConfig,
    room: &Room,
    amount: i128,
) -> Result<i128, LedgerError> {
    let rent = config
        .scaled(room.rent_per_month)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    if amount < rent {
        return Err(LedgerError::InsufficientRent);
    }
    Ok(rent)
}

/// Returns the scaled rent plus deposit when `amount` covers it.
pub fn require_agreement_fee_covered(
    config: &LedgerConfig,
    room: &Room,
    amount: i128,
) -> Result<i128, LedgerError> {
    let whole_units = room
        .rent_per_month
        .checked_add(room.security_deposit)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    let fee = config
        .scaled(whole_units)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    if amount < fee {
        return Err(LedgerError::InsufficientAgreementFee);
    }
    Ok(fee)
}

/* ---------------- TIME & ESCROW ---------------- */

pub fn require_rent_due(config: &LedgerConfig, room: &Room, now: u64) -> Result<(), LedgerError> {
    let due = room
        .timestamp
        .checked_add(config.rent_period_seconds)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    if now < due {
        return Err(LedgerError::RentNotDue);
    }
    Ok(())
}

pub fn require_deposit_available(room: &Room) -> Result<(), LedgerError> {
    if room.deposit_withdrawn {
        return Err(LedgerError::DepositAlreadyWithdrawn);
    }
    Ok(())
}
