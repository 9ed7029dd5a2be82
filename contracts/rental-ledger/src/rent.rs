use soroban_sdk::{Address, Env};

use rentals_lib::{
    audit::{self, OperationType},
    validation, LedgerError, RentPayment,
};

use crate::{
    events, funds, policy,
    storage::{self, Sequence},
};

/// Record one month of rent and forward it to the landlord.
///
/// The attached `amount` is pulled into custody and exactly one scaled
/// month of rent is paid out. The room's timestamp moves to now, so the next
/// payment is due one rent period later.
pub fn pay_rent(
    env: &Env,
    tenant: &Address,
    room_id: u64,
    amount: i128,
) -> Result<u64, LedgerError> {
    validation::validate_amount(amount)?;
    let config = storage::get_config(env)?;
    let mut room = storage::load_room(env, room_id)?;

    let now = env.ledger().timestamp();
    policy::require_current_tenant(&room, tenant)?;
    policy::require_rent_due(&config, &room, now)?;
    let rent = policy::require_rent_covered(&config, &room, amount)?;

    let rent_id = storage::next_id(env, Sequence::RentPayment)?;
    let payment = RentPayment {
        rent_id,
        room_id,
        agreement_id: room.agreement_id,
        room_name: room.name.clone(),
        street_address: room.street_address.clone(),
        rent_per_month: room.rent_per_month,
        amount_paid: rent,
        timestamp: now,
        landlord: room.landlord.clone(),
        tenant: tenant.clone(),
    };

    room.timestamp = now;

    storage::save_rent_payment(env, &payment);
    storage::append_agreement_payment(env, room.agreement_id, rent_id);
    storage::save_room(env, &room);
    audit::record(env, tenant, OperationType::RentPaid, room_id, rent);

    funds::collect(env, &config, tenant, amount)?;
    funds::disburse(env, &config, &room.landlord, rent)?;

    events::rent_paid(env, &payment);
    Ok(rent_id)
}
