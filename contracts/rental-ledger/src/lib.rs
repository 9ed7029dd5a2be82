#![no_std]

//! Rental Ledger Contract
//!
//! Tracks rentable rooms, the agreements bound to them and the rent and
//! deposit payments flowing between landlords and tenants.
//!
//! ## Architecture
//!
//! ```text
//! RentalLedger (entry points, auth)
//!     ├── registry   ← rooms, vacancy counter
//!     ├── lifecycle  ← sign / complete / terminate
//!     ├── rent       ← rent payments
//!     ├── escrow     ← security deposit refunds
//!     ├── policy     ← access control predicates
//!     ├── funds      ← custody transfers via the payment token
//!     └── storage    ← keys, sequences, history indexes
//! ```
//!
//! Stored amounts are whole currency units. Every check and transfer uses
//! `whole_units * unit_scale` (10^18 by default).

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

use rentals_lib::{
    admin,
    audit::{self, AuditLog, AuditLogQueryResult, OperationType},
    validation, Agreement, LedgerConfig, LedgerError, RentPayment, Room,
    DEFAULT_RENT_PERIOD_SECONDS, DEFAULT_TERMINATION_PENALTY_BPS, DEFAULT_UNIT_SCALE,
};

mod escrow;
mod events;
mod funds;
mod lifecycle;
mod policy;
mod registry;
mod rent;
mod storage;

#[cfg(test)]
mod test_escrow;
#[cfg(test)]
mod test_invariants;

pub use storage::{DataKey, Sequence};

#[contract]
pub struct RentalLedger;

#[contractimpl]
impl RentalLedger {
    /// Initializes the ledger with its registry owner and payment token.
    /// Can only be called once.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - If the ledger already has an owner
    /// * `InvalidConfig` - If scale or rent period is zero, or the penalty exceeds 100%
    pub fn initialize(
        env: Env,
        owner: Address,
        payment_token: Address,
        unit_scale: Option<i128>,
        rent_period_seconds: Option<u64>,
        termination_penalty_bps: Option<u32>,
    ) -> Result<(), LedgerError> {
        if admin::has_owner(&env) {
            return Err(LedgerError::AlreadyInitialized);
        }
        owner.require_auth();

        let config = LedgerConfig {
            payment_token,
            unit_scale: unit_scale.unwrap_or(DEFAULT_UNIT_SCALE),
            rent_period_seconds: rent_period_seconds.unwrap_or(DEFAULT_RENT_PERIOD_SECONDS),
            termination_penalty_bps: termination_penalty_bps
                .unwrap_or(DEFAULT_TERMINATION_PENALTY_BPS),
        };
        validation::validate_config(
            config.unit_scale,
            config.rent_period_seconds,
            config.termination_penalty_bps,
        )?;

        admin::set_owner(&env, &owner);
        storage::set_config(&env, &config);
        storage::extend_instance(&env);

        audit::record(&env, &owner, OperationType::LedgerInitialized, 0, 0);
        events::initialized(&env, &owner);
        Ok(())
    }

    /// Hands the registry over to `new_owner`. Existing rooms keep their landlord.
    pub fn transfer_ownership(
        env: Env,
        owner: Address,
        new_owner: Address,
    ) -> Result<(), LedgerError> {
        admin::transfer_owner(&env, &owner, &new_owner)?;
        storage::extend_instance(&env);

        audit::record(&env, &owner, OperationType::OwnershipTransferred, 0, 0);
        events::owner_changed(&env, &owner, &new_owner);
        Ok(())
    }

    pub fn get_owner(env: Env) -> Result<Address, LedgerError> {
        admin::get_owner(&env)
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, LedgerError> {
        storage::get_config(&env)
    }

    // ---------------- ROOM REGISTRY ----------------

    /// Adds a vacant room. Only the registry owner may call this; the owner
    /// becomes the room's landlord.
    pub fn add_room(
        env: Env,
        owner: Address,
        name: String,
        street_address: String,
        rent_per_month: u64,
        security_deposit: u64,
    ) -> Result<u64, LedgerError> {
        owner.require_auth();
        storage::extend_instance(&env);
        registry::add_room(&env, &owner, name, street_address, rent_per_month, security_deposit)
    }

    pub fn get_room(env: Env, room_id: u64) -> Option<Room> {
        storage::find_room(&env, room_id)
    }

    pub fn get_total_number_of_rooms(env: Env) -> u64 {
        registry::total_rooms(&env)
    }

    pub fn get_number_of_rooms_available(env: Env) -> u64 {
        registry::rooms_available(&env)
    }

    // ---------------- AGREEMENT LIFECYCLE ----------------

    /// Reserves a vacant room for `tenant`; `None` opens it to anyone but the landlord.
    pub fn designate_tenant(
        env: Env,
        landlord: Address,
        room_id: u64,
        tenant: Option<Address>,
    ) -> Result<(), LedgerError> {
        landlord.require_auth();
        storage::extend_instance(&env);
        lifecycle::designate_tenant(&env, &landlord, room_id, tenant)
    }

    /// Signs an agreement on a vacant room. `amount` must cover one month of
    /// rent plus the security deposit and is moved into custody.
    ///
    /// Returns the new agreement id.
    pub fn sign_agreement(
        env: Env,
        tenant: Address,
        room_id: u64,
        amount: i128,
    ) -> Result<u64, LedgerError> {
        tenant.require_auth();
        validation::validate_nonzero_id(room_id)?;
        storage::extend_instance(&env);
        lifecycle::sign_agreement(&env, &tenant, room_id, amount)
    }

    /// Ends the active agreement at the end of its term. Landlord only.
    pub fn agreement_completed(
        env: Env,
        landlord: Address,
        room_id: u64,
    ) -> Result<(), LedgerError> {
        landlord.require_auth();
        validation::validate_nonzero_id(room_id)?;
        storage::extend_instance(&env);
        lifecycle::agreement_completed(&env, &landlord, room_id)
    }

    /// Ends the active agreement early and pays the termination penalty to
    /// the landlord. Returns the penalty.
    pub fn agreement_terminated(
        env: Env,
        landlord: Address,
        room_id: u64,
    ) -> Result<i128, LedgerError> {
        landlord.require_auth();
        validation::validate_nonzero_id(room_id)?;
        storage::extend_instance(&env);
        lifecycle::agreement_terminated(&env, &landlord, room_id)
    }

    pub fn get_agreement(env: Env, agreement_id: u64) -> Option<Agreement> {
        storage::find_agreement(&env, agreement_id)
    }

    /// Every agreement signed for the room, oldest first.
    pub fn get_room_agreements(env: Env, room_id: u64) -> Vec<u64> {
        storage::room_agreements(&env, room_id)
    }

    pub fn get_total_agreements(env: Env) -> u64 {
        storage::current_id(&env, storage::Sequence::Agreement)
    }

    // ---------------- RENT LEDGER ----------------

    /// Pays one month of rent. The previous payment (or the signing) must be
    /// at least one rent period old. Returns the rent payment id.
    pub fn pay_rent(
        env: Env,
        tenant: Address,
        room_id: u64,
        amount: i128,
    ) -> Result<u64, LedgerError> {
        tenant.require_auth();
        validation::validate_nonzero_id(room_id)?;
        storage::extend_instance(&env);
        rent::pay_rent(&env, &tenant, room_id, amount)
    }

    pub fn get_rent_payment(env: Env, rent_id: u64) -> Option<RentPayment> {
        storage::find_rent_payment(&env, rent_id)
    }

    /// Every rent payment made under the agreement, oldest first.
    pub fn get_agreement_payments(env: Env, agreement_id: u64) -> Vec<u64> {
        storage::agreement_payments(&env, agreement_id)
    }

    pub fn get_total_rent_payments(env: Env) -> u64 {
        storage::current_id(&env, storage::Sequence::RentPayment)
    }

    // ---------------- DEPOSIT ESCROW ----------------

    /// Refunds the security deposit to the room's current tenant. One-shot per room.
    /// Returns the refunded amount.
    pub fn withdraw_security_deposit(
        env: Env,
        tenant: Address,
        room_id: u64,
    ) -> Result<i128, LedgerError> {
        tenant.require_auth();
        validation::validate_nonzero_id(room_id)?;
        storage::extend_instance(&env);
        escrow::withdraw_security_deposit(&env, &tenant, room_id)
    }

    /// The ledger's balance of the payment token.
    pub fn custody_balance(env: Env) -> Result<i128, LedgerError> {
        escrow::custody_balance(&env)
    }

    // ---------------- AUDIT ----------------

    pub fn get_audit_log(env: Env, log_id: u64) -> Option<AuditLog> {
        audit::get_audit_log(&env, log_id)
    }

    pub fn query_audit_logs(
        env: Env,
        start_id: u64,
        end_id: u64,
        max_results: u32,
    ) -> AuditLogQueryResult {
        audit::query_audit_logs(&env, start_id, end_id, max_results)
    }
}
