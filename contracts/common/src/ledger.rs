use soroban_sdk::{Address, Env};

use crate::{
    storage::{self, DataKey},
    VaultError,
};

// ── Account balances ─────────────────────────────────────────────────────────

pub fn balance_of(env: &Env, account: &Address) -> i128 {
    storage::read(env, &DataKey::Balance(account.clone())).unwrap_or(0)
}

pub(crate) fn set_balance(env: &Env, account: &Address, balance: i128) {
    storage::write(env, &DataKey::Balance(account.clone()), &balance);
}

/// Adds `amount` to the account balance and returns the new balance.
pub(crate) fn credit(env: &Env, account: &Address, amount: i128) -> Result<i128, VaultError> {
    let new_balance = balance_of(env, account)
        .checked_add(amount)
        .ok_or(VaultError::ArithmeticOverflow)?;
    set_balance(env, account, new_balance);
    Ok(new_balance)
}

/// Part of the balance held back by a pending withdrawal request. Zero on
/// any ledger that never ran the delayed withdrawal protocol.
pub(crate) fn reserved(env: &Env, account: &Address) -> i128 {
    crate::withdrawal::pending_withdrawal(env, account).map_or(0, |p| p.amount)
}

/// Balance that can leave the vault without touching a reservation.
pub(crate) fn available(env: &Env, account: &Address) -> i128 {
    balance_of(env, account) - reserved(env, account)
}

/// Removes `amount` from the account balance and returns the new balance.
pub(crate) fn debit(env: &Env, account: &Address, amount: i128) -> Result<i128, VaultError> {
    let balance = balance_of(env, account);
    if balance < amount {
        return Err(VaultError::InsufficientBalance);
    }
    let new_balance = balance - amount;
    set_balance(env, account, new_balance);
    Ok(new_balance)
}

// ── Aggregate ────────────────────────────────────────────────────────────────

/// Credited deposits minus completed withdrawals. Yield never enters it.
pub fn total_deposits(env: &Env) -> i128 {
    storage::read(env, &DataKey::TotalDeposits).unwrap_or(0)
}

pub(crate) fn add_to_total(env: &Env, amount: i128) -> Result<i128, VaultError> {
    let total = total_deposits(env)
        .checked_add(amount)
        .ok_or(VaultError::ArithmeticOverflow)?;
    storage::write(env, &DataKey::TotalDeposits, &total);
    Ok(total)
}

/// Withdrawals can pay out yield that never entered the total, so the
/// aggregate saturates at zero instead of going negative.
pub(crate) fn subtract_from_total(env: &Env, amount: i128) -> i128 {
    let total = total_deposits(env).saturating_sub(amount).max(0);
    storage::write(env, &DataKey::TotalDeposits, &total);
    total
}

// ── Legacy immediate withdrawal ──────────────────────────────────────────────

/// Debits `amount` from `account` and pays it out in the same call.
///
/// `available` is the part of the balance not reserved by a pending
/// withdrawal request.
pub(crate) fn withdraw_now(
    env: &Env,
    account: &Address,
    amount: i128,
    available: i128,
) -> Result<i128, VaultError> {
    if amount <= 0 {
        return Err(VaultError::InvalidParameter);
    }
    if amount > available {
        return Err(VaultError::InsufficientBalance);
    }

    // Effects before the outbound transfer.
    let new_balance = debit(env, account, amount)?;
    let new_total = subtract_from_total(env, amount);

    crate::asset::transfer_out(env, account, amount)?;

    crate::events::publish_withdrawn(env, account.clone(), amount, new_balance, new_total);

    Ok(new_balance)
}

/// Immediate withdrawal for V1 and V2.
///
/// Older code can be put back on a ledger that already holds a pending
/// request, so the reservation is honoured here too.
pub fn withdraw(env: &Env, account: &Address, amount: i128) -> Result<i128, VaultError> {
    crate::lifecycle::require_initialized(env)?;
    withdraw_now(env, account, amount, available(env, account))
}
