//! Notification records published for external indexers.
//!
//! Topics are `(name, room_id)` so indexers can filter per room; ledger-wide
//! events carry only the name.

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use rentals_lib::{Agreement, RentPayment, Room};

pub(crate) fn initialized(env: &Env, owner: &Address) {
    env.events().publish((symbol_short!("init"),), (owner.clone(),));
}

pub(crate) fn owner_changed(env: &Env, previous: &Address, next: &Address) {
    env.events().publish(
        (Symbol::new(env, "OwnerChanged"),),
        (previous.clone(), next.clone()),
    );
}

pub(crate) fn room_added(env: &Env, room: &Room) {
    env.events()
        .publish((Symbol::new(env, "RoomAdded"), room.room_id), room.clone());
}

pub(crate) fn tenant_designated(env: &Env, room_id: u64, tenant: &Option<Address>) {
    env.events()
        .publish((Symbol::new(env, "TenantDesignated"), room_id), tenant.clone());
}

pub(crate) fn agreement_signed(env: &Env, agreement: &Agreement) {
    env.events().publish(
        (Symbol::new(env, "AgreementSigned"), agreement.room_id),
        agreement.clone(),
    );
}

pub(crate) fn rent_paid(env: &Env, payment: &RentPayment) {
    env.events()
        .publish((Symbol::new(env, "RentPaid"), payment.room_id), payment.clone());
}

pub(crate) fn agreement_completed(env: &Env, room_id: u64, agreement_id: u64, tenant: &Address) {
    env.events().publish(
        (Symbol::new(env, "AgreementCompleted"), room_id),
        (agreement_id, tenant.clone()),
    );
}

pub(crate) fn agreement_terminated(
    env: &Env,
    room_id: u64,
    agreement_id: u64,
    tenant: &Address,
    penalty: i128,
) {
    env.events().publish(
        (Symbol::new(env, "AgreementTerminated"), room_id),
        (agreement_id, tenant.clone(), penalty),
    );
}

pub(crate) fn deposit_withdrawn(env: &Env, room_id: u64, tenant: &Address, amount: i128) {
    env.events().publish(
        (Symbol::new(env, "DepositWithdrawn"), room_id),
        (tenant.clone(), amount),
    );
}
