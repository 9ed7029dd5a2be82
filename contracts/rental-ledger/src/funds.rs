//! Token movements in and out of the ledger's custody.
//!
//! Custody is the contract's own balance of the configured payment token.
//! Transfers go through the generated `try_transfer` so a refused transfer
//! surfaces as `TransferFailed`; returning that error unwinds the whole
//! invocation.

use soroban_sdk::{token, Address, Env};

use rentals_lib::{LedgerConfig, LedgerError};

/// Pull `amount` from `from` into custody.
pub fn collect(
    env: &Env,
    config: &LedgerConfig,
    from: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    transfer(env, config, from, &env.current_contract_address(), amount)
}

/// Pay `amount` out of custody to `to`.
pub fn disburse(
    env: &Env,
    config: &LedgerConfig,
    to: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    transfer(env, config, &env.current_contract_address(), to, amount)
}

pub fn custody_balance(env: &Env, config: &LedgerConfig) -> i128 {
    token::Client::new(env, &config.payment_token).balance(&env.current_contract_address())
}

fn transfer(
    env: &Env,
    config: &LedgerConfig,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), LedgerError> {
    if amount == 0 {
        return Ok(());
    }
    let token_client = token::Client::new(env, &config.payment_token);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(LedgerError::TransferFailed),
    }
}
