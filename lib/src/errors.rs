//! Error codes shared by the rental ledger contracts.
use soroban_sdk::contracterror;

/// Every failure aborts the whole invocation; the host rolls back storage
/// and token movements made before the error was returned.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum LedgerError {
    // Setup
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidInput = 3,
    InvalidConfig = 4,
    ArithmeticOverflow = 5,

    // Authorization
    /// Caller is not the registry owner
    NotOwner = 10,
    /// Caller is not the room's landlord
    NotLandlord = 11,
    /// Caller is not the room's current tenant
    NotCurrentTenant = 12,
    /// Room has a designated tenant and the caller is someone else
    NotDesignatedTenant = 13,
    /// A landlord may not rent their own room
    LandlordCannotRent = 14,

    // Preconditions
    RoomNotFound = 20,
    RoomOccupied = 21,
    RoomVacant = 22,
    /// Attached amount does not cover one month of rent
    InsufficientRent = 23,
    /// Attached amount does not cover rent plus security deposit
    InsufficientAgreementFee = 24,
    AgreementNotLive = 25,
    AgreementStillLive = 26,
    /// The rent period has not elapsed since the room's last timestamp
    RentNotDue = 27,
    DepositAlreadyWithdrawn = 28,
    InvalidAmount = 29,

    // Transfers
    TransferFailed = 40,
}

/// Coarse classification of [`LedgerError`] codes.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Setup,
    Authorization,
    Precondition,
    Transfer,
}

impl LedgerError {
    pub fn kind(&self) -> ErrorKind {
        match *self as u32 {
            1..=9 => ErrorKind::Setup,
            10..=19 => ErrorKind::Authorization,
            20..=39 => ErrorKind::Precondition,
            _ => ErrorKind::Transfer,
        }
    }
}
