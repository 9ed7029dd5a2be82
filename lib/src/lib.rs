#![no_std]
pub mod admin;
pub mod audit;
pub mod errors;
pub mod types;
pub mod validation;

pub use errors::{ErrorKind, LedgerError};
pub use types::*;

// Config
pub const OWNER_KEY: &str = "owner";
pub const MAX_STRING_LENGTH: u32 = 256;
pub const MAX_BPS: u32 = 10_000;

// Currency: stored amounts are whole units, checks and transfers use whole units * scale.
pub const DEFAULT_UNIT_SCALE: i128 = 1_000_000_000_000_000_000; // 10^18
pub const DEFAULT_RENT_PERIOD_SECONDS: u64 = 30 * 24 * 60 * 60; // 30 days
pub const DEFAULT_TERMINATION_PENALTY_BPS: u32 = 1000; // 10% of the security deposit

// Storage lifetimes (in ledgers, ~5 s each)
pub const INSTANCE_TTL_THRESHOLD: u32 = 17_280; // ~1 day
pub const INSTANCE_TTL_EXTEND: u32 = 518_400; // ~30 days
pub const ENTRY_TTL_THRESHOLD: u32 = 518_400; // ~30 days
pub const ENTRY_TTL_EXTEND: u32 = 1_036_800; // ~60 days

// Audit queries
pub const DEFAULT_AUDIT_QUERY_LIMIT: u32 = 100;
pub const MAX_AUDIT_QUERY_LIMIT: u32 = 500;
