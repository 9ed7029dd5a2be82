use soroban_sdk::{contracttype, Address, String};

/// A rentable room and its current occupancy.
///
/// `vacant`, `agreement_id == 0` and `current_tenant.is_none()` always agree.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Room {
    pub room_id: u64,
    pub name: String,
    pub street_address: String,
    /// Whole currency units, unscaled
    pub rent_per_month: u64,
    /// Whole currency units, unscaled
    pub security_deposit: u64,
    /// Ledger time of the last signing or rent payment
    pub timestamp: u64,
    pub vacant: bool,
    pub landlord: Address,
    pub current_tenant: Option<Address>,
    /// Tenant the landlord has reserved the room for, consumed on signing
    pub designated_tenant: Option<Address>,
    /// Active agreement, 0 when none
    pub agreement_id: u64,
    pub deposit_withdrawn: bool,
}

impl Room {
    pub fn is_occupied_by(&self, who: &Address) -> bool {
        self.current_tenant.as_ref() == Some(who)
    }
}

/// Terms under which a tenant occupies a room, frozen at signing time.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Agreement {
    pub agreement_id: u64,
    pub room_id: u64,
    pub room_name: String,
    pub street_address: String,
    pub rent_per_month: u64,
    pub security_deposit: u64,
    pub timestamp: u64,
    pub landlord: Address,
    pub tenant: Address,
}

/// One rent transfer from tenant to landlord.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RentPayment {
    pub rent_id: u64,
    pub room_id: u64,
    pub agreement_id: u64,
    pub room_name: String,
    pub street_address: String,
    pub rent_per_month: u64,
    /// Scaled amount forwarded to the landlord
    pub amount_paid: i128,
    pub timestamp: u64,
    pub landlord: Address,
    pub tenant: Address,
}

/// Ledger-wide settings fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    /// Token contract used for rent, deposits and payouts
    pub payment_token: Address,
    /// Smallest-unit multiplier applied to stored whole-unit amounts
    pub unit_scale: i128,
    pub rent_period_seconds: u64,
    pub termination_penalty_bps: u32,
}

impl LedgerConfig {
    /// `whole_units * unit_scale`, or `None` on overflow.
    pub fn scaled(&self, whole_units: u64) -> Option<i128> {
        (whole_units as i128).checked_mul(self.unit_scale)
    }

    /// Share of the scaled security deposit kept by the landlord on early termination.
    pub fn termination_penalty(&self, security_deposit: u64) -> Option<i128> {
        self.scaled(security_deposit)?
            .checked_mul(self.termination_penalty_bps as i128)
            .map(|v| v / crate::MAX_BPS as i128)
    }
}
