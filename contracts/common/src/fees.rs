use soroban_sdk::{Address, Env};

use crate::{
    asset, events, ledger, lifecycle, pause,
    storage::{self, DataKey},
    VaultError,
};

/// 10000 bps = 100%.
pub const BPS_DENOMINATOR: i128 = 10_000;

pub fn validate_fee_bps(fee_bps: u32) -> Result<(), VaultError> {
    if i128::from(fee_bps) >= BPS_DENOMINATOR {
        return Err(VaultError::InvalidParameter);
    }
    Ok(())
}

pub fn deposit_fee_bps(env: &Env) -> u32 {
    storage::read(env, &DataKey::DepositFeeBps).unwrap_or(0)
}

/// `floor(amount * fee_bps / 10000)`. Rounds in the vault's favour.
pub fn fee_for(amount: i128, fee_bps: u32) -> Result<i128, VaultError> {
    amount
        .checked_mul(i128::from(fee_bps))
        .map(|scaled| scaled / BPS_DENOMINATOR)
        .ok_or(VaultError::ArithmeticOverflow)
}

/// Amount credited to the depositor after the fee is withheld.
pub fn credited_amount(amount: i128, fee_bps: u32) -> Result<i128, VaultError> {
    Ok(amount - fee_for(amount, fee_bps)?)
}

/// Pulls `amount` from `from` and credits the fee-adjusted amount.
///
/// The pull happens first: if the asset contract rejects it nothing has
/// been credited, and the whole call rolls back regardless.
pub fn deposit(env: &Env, from: &Address, amount: i128) -> Result<i128, VaultError> {
    lifecycle::require_initialized(env)?;

    if amount <= 0 {
        return Err(VaultError::InvalidParameter);
    }
    pause::require_deposits_open(env)?;

    let fee_bps = deposit_fee_bps(env);
    let credited = credited_amount(amount, fee_bps)?;

    asset::transfer_in(env, from, amount)?;

    let new_balance = ledger::credit(env, from, credited)?;
    let new_total = ledger::add_to_total(env, credited)?;

    events::publish_deposited(env, from.clone(), amount, credited, new_balance, new_total);

    Ok(credited)
}
