/// Audit trail for ledger operations
///
/// Every successful mutating operation appends one immutable entry with an
/// auto-incrementing id. Entries live in persistent storage under their own
/// keys so they never collide with ledger state.
use soroban_sdk::{contracttype, Address, Env, Symbol, Vec};

use crate::{
    DEFAULT_AUDIT_QUERY_LIMIT, ENTRY_TTL_EXTEND, ENTRY_TTL_THRESHOLD, MAX_AUDIT_QUERY_LIMIT,
};

// ============================================================================
// AUDIT LOG TYPES
// ============================================================================

/// Operation type categories for audit logging
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum OperationType {
    // Registry owner operations
    LedgerInitialized = 1,
    OwnershipTransferred = 2,
    RoomAdded = 3,

    // Agreement lifecycle
    TenantDesignated = 10,
    AgreementSigned = 11,
    AgreementCompleted = 12,
    AgreementTerminated = 13,

    // Money movements
    RentPaid = 20,
    DepositWithdrawn = 21,
}

/// Immutable audit log entry
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditLog {
    /// Auto-incrementing unique identifier
    pub id: u64,
    /// Ledger timestamp at time of operation
    pub timestamp: u64,
    /// Address that triggered the operation
    pub operator: Address,
    pub operation_type: OperationType,
    /// Room affected, 0 for ledger-wide operations
    pub room_id: u64,
    /// Scaled amount moved by the operation, 0 when no funds moved
    pub amount: i128,
}

/// Result of a paginated audit log query
#[contracttype]
#[derive(Clone, Debug)]
pub struct AuditLogQueryResult {
    pub logs: Vec<AuditLog>,
    pub total_count: u64,
    pub start_id: u64,
    pub end_id: u64,
    pub has_more: bool,
}

// ============================================================================
// AUDIT LOG STORAGE FUNCTIONS
// ============================================================================

fn counter_key(env: &Env) -> Symbol {
    Symbol::new(env, "audit_log_id_counter")
}

fn entry_key(env: &Env, log_id: u64) -> (Symbol, u64) {
    (Symbol::new(env, "audit_log_entry"), log_id)
}

/// Get the current audit log ID counter
pub fn get_log_id_counter(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get::<_, u64>(&counter_key(env))
        .unwrap_or(0)
}

fn increment_log_id_counter(env: &Env) -> u64 {
    let key = counter_key(env);
    let next = get_log_id_counter(env).saturating_add(1);
    env.storage().persistent().set(&key, &next);
    env.storage()
        .persistent()
        .extend_ttl(&key, ENTRY_TTL_THRESHOLD, ENTRY_TTL_EXTEND);
    next
}

/// Retrieve an audit log entry by ID
pub fn get_audit_log(env: &Env, log_id: u64) -> Option<AuditLog> {
    env.storage().persistent().get(&entry_key(env, log_id))
}

// ============================================================================
// AUDIT LOG CREATION
// ============================================================================

/// Append a new entry and return its id. Entries are never modified or deleted.
pub fn record(
    env: &Env,
    operator: &Address,
    operation_type: OperationType,
    room_id: u64,
    amount: i128,
) -> u64 {
    let log_id = increment_log_id_counter(env);
    let log = AuditLog {
        id: log_id,
        timestamp: env.ledger().timestamp(),
        operator: operator.clone(),
        operation_type,
        room_id,
        amount,
    };

    let key = entry_key(env, log_id);
    env.storage().persistent().set(&key, &log);
    env.storage()
        .persistent()
        .extend_ttl(&key, ENTRY_TTL_THRESHOLD, ENTRY_TTL_EXTEND);
    log_id
}

// ============================================================================
// AUDIT LOG QUERYING
// ============================================================================

/// Query audit logs with pagination
///
/// Returns logs inclusive of start_id and end_id. Handles out-of-range IDs gracefully.
///
/// # Arguments
/// * `start_id` - Starting log ID (inclusive), or 1 if 0
/// * `end_id` - Ending log ID (inclusive), clamped to the latest id
/// * `max_results` - Maximum number of results, 0 for the default page size
pub fn query_audit_logs(
    env: &Env,
    start_id: u64,
    end_id: u64,
    max_results: u32,
) -> AuditLogQueryResult {
    let total_count = get_log_id_counter(env);

    let actual_start = if start_id == 0 { 1 } else { start_id };
    let actual_end = if end_id > total_count { total_count } else { end_id };
    let limit = match max_results {
        0 => DEFAULT_AUDIT_QUERY_LIMIT,
        n if n > MAX_AUDIT_QUERY_LIMIT => MAX_AUDIT_QUERY_LIMIT,
        n => n,
    };

    let mut logs: Vec<AuditLog> = Vec::new(env);

    if actual_start > total_count || actual_start > actual_end {
        return AuditLogQueryResult {
            logs,
            total_count,
            start_id: actual_start,
            end_id: actual_end,
            has_more: false,
        };
    }

    let mut count = 0u32;
    let mut current_id = actual_start;

    while current_id <= actual_end && count < limit {
        if let Some(log) = get_audit_log(env, current_id) {
            logs.push_back(log);
            count += 1;
        }
        current_id += 1;
    }

    // has_more is true if we stopped due to limit, not because we reached the end
    let has_more = count == limit && current_id <= actual_end;

    AuditLogQueryResult {
        logs,
        total_count,
        start_id: actual_start,
        end_id: if has_more { current_id - 1 } else { actual_end },
        has_more,
    }
}
