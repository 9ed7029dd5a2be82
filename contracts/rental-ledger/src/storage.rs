use soroban_sdk::{contracttype, Env, Vec};

use rentals_lib::{
    Agreement, LedgerConfig, LedgerError, RentPayment, Room, ENTRY_TTL_EXTEND,
    ENTRY_TTL_THRESHOLD, INSTANCE_TTL_EXTEND, INSTANCE_TTL_THRESHOLD,
};

/// Id sequences owned by the ledger. Each starts at 0 and is bumped before use.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sequence {
    Room,
    Agreement,
    RentPayment,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ledger configuration (instance)
    Config,
    /// Last id handed out by a sequence (instance)
    Counter(Sequence),
    /// Number of rooms with `vacant == true` (instance)
    VacantRooms,
    /// Room by id (persistent)
    Room(u64),
    /// Agreement by id (persistent)
    Agreement(u64),
    /// Rent payment by id (persistent)
    RentPayment(u64),
    /// Every agreement ever signed for a room, oldest first (persistent)
    RoomAgreements(u64),
    /// Every rent payment made under an agreement, oldest first (persistent)
    AgreementPayments(u64),
}

/* ---------------- INSTANCE ---------------- */

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

pub fn set_config(env: &Env, config: &LedgerConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_config(env: &Env) -> Result<LedgerConfig, LedgerError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(LedgerError::NotInitialized)
}

/* ---------------- SEQUENCES ---------------- */

pub fn current_id(env: &Env, sequence: Sequence) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::Counter(sequence))
        .unwrap_or(0)
}

pub fn next_id(env: &Env, sequence: Sequence) -> Result<u64, LedgerError> {
    let next = current_id(env, sequence)
        .checked_add(1)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    env.storage()
        .instance()
        .set(&DataKey::Counter(sequence), &next);
    Ok(next)
}

/* ---------------- VACANCY COUNTER ---------------- */

pub fn vacant_rooms(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::VacantRooms)
        .unwrap_or(0)
}

/// Called on every `vacant: false -> true` transition, including room creation.
pub fn mark_vacated(env: &Env) -> Result<(), LedgerError> {
    let count = vacant_rooms(env)
        .checked_add(1)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::VacantRooms, &count);
    Ok(())
}

/// Called on every `vacant: true -> false` transition.
pub fn mark_occupied(env: &Env) -> Result<(), LedgerError> {
    let count = vacant_rooms(env)
        .checked_sub(1)
        .ok_or(LedgerError::ArithmeticOverflow)?;
    env.storage().instance().set(&DataKey::VacantRooms, &count);
    Ok(())
}

/* ---------------- ENTITIES ---------------- */

fn persist<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    env.storage()
        .persistent()
        .extend_ttl(key, ENTRY_TTL_THRESHOLD, ENTRY_TTL_EXTEND);
}

pub fn save_room(env: &Env, room: &Room) {
    persist(env, &DataKey::Room(room.room_id), room);
}

pub fn find_room(env: &Env, room_id: u64) -> Option<Room> {
    env.storage().persistent().get(&DataKey::Room(room_id))
}

pub fn load_room(env: &Env, room_id: u64) -> Result<Room, LedgerError> {
    find_room(env, room_id).ok_or(LedgerError::RoomNotFound)
}

pub fn save_agreement(env: &Env, agreement: &Agreement) {
    persist(env, &DataKey::Agreement(agreement.agreement_id), agreement);
}

pub fn find_agreement(env: &Env, agreement_id: u64) -> Option<Agreement> {
    env.storage()
        .persistent()
        .get(&DataKey::Agreement(agreement_id))
}

pub fn save_rent_payment(env: &Env, payment: &RentPayment) {
    persist(env, &DataKey::RentPayment(payment.rent_id), payment);
}

pub fn find_rent_payment(env: &Env, rent_id: u64) -> Option<RentPayment> {
    env.storage().persistent().get(&DataKey::RentPayment(rent_id))
}

/* ---------------- HISTORY INDEXES ---------------- */

fn load_ids(env: &Env, key: &DataKey) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(key)
        .unwrap_or(Vec::new(env))
}

fn append_id(env: &Env, key: &DataKey, id: u64) {
    let mut ids = load_ids(env, key);
    ids.push_back(id);
    persist(env, key, &ids);
}

pub fn append_room_agreement(env: &Env, room_id: u64, agreement_id: u64) {
    append_id(env, &DataKey::RoomAgreements(room_id), agreement_id);
}

pub fn room_agreements(env: &Env, room_id: u64) -> Vec<u64> {
    load_ids(env, &DataKey::RoomAgreements(room_id))
}

pub fn append_agreement_payment(env: &Env, agreement_id: u64, rent_id: u64) {
    append_id(env, &DataKey::AgreementPayments(agreement_id), rent_id);
}

pub fn agreement_payments(env: &Env, agreement_id: u64) -> Vec<u64> {
    load_ids(env, &DataKey::AgreementPayments(agreement_id))
}
