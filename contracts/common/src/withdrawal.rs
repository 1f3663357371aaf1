use soroban_sdk::{contracttype, Address, Env};

use crate::{
    asset, events, ledger, lifecycle,
    roles::{self, Role},
    storage::{self, DataKey},
    VaultError,
};

/// A reserved, not-yet-executed withdrawal.
///
/// The amount stays in the account balance until the request executes, so
/// `balance >= amount` holds for as long as the request exists.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingWithdrawal {
    pub amount: i128,
    pub requested_at: u64,
}

// ── Delay ────────────────────────────────────────────────────────────────────

/// True once `delay` seconds have passed since `requested_at`.
pub fn delay_elapsed(requested_at: u64, now: u64, delay: u64) -> bool {
    now.saturating_sub(requested_at) >= delay
}

pub fn withdrawal_delay(env: &Env) -> u64 {
    storage::read(env, &DataKey::WithdrawalDelay).unwrap_or(0)
}

/// Sets the delay between request and execution. Requires the `Admin`
/// role. Applies to requests already pending as well as new ones.
pub fn set_withdrawal_delay(env: &Env, caller: &Address, seconds: u64) -> Result<(), VaultError> {
    lifecycle::require_initialized(env)?;
    roles::require_role(env, Role::Admin, caller)?;

    storage::write(env, &DataKey::WithdrawalDelay, &seconds);

    events::publish_withdrawal_delay_set(env, seconds);

    Ok(())
}

pub fn pending_withdrawal(env: &Env, account: &Address) -> Option<PendingWithdrawal> {
    storage::read(env, &DataKey::PendingWithdrawal(account.clone()))
}

// ── Request / execute ────────────────────────────────────────────────────────

/// Reserves `amount` of the caller's balance for a later withdrawal.
pub fn request_withdrawal(
    env: &Env,
    account: &Address,
    amount: i128,
) -> Result<PendingWithdrawal, VaultError> {
    lifecycle::require_initialized(env)?;

    if amount <= 0 {
        return Err(VaultError::InvalidParameter);
    }
    let key = DataKey::PendingWithdrawal(account.clone());
    if storage::has(env, &key) {
        return Err(VaultError::WithdrawalAlreadyPending);
    }
    if amount > ledger::balance_of(env, account) {
        return Err(VaultError::InsufficientBalance);
    }

    let request = PendingWithdrawal {
        amount,
        requested_at: env.ledger().timestamp(),
    };
    storage::write(env, &key, &request);

    let executable_at = request.requested_at.saturating_add(withdrawal_delay(env));
    events::publish_withdrawal_requested(env, account.clone(), amount, executable_at);

    Ok(request)
}

/// Executes the caller's pending request once the delay has elapsed.
///
/// The request is cleared and the balance debited before the asset leaves
/// the vault, so a second execution finds nothing to pay.
pub fn execute_withdrawal(env: &Env, account: &Address) -> Result<i128, VaultError> {
    lifecycle::require_initialized(env)?;

    let key = DataKey::PendingWithdrawal(account.clone());
    let request: PendingWithdrawal =
        storage::read(env, &key).ok_or(VaultError::NoPendingWithdrawal)?;

    let now = env.ledger().timestamp();
    if !delay_elapsed(request.requested_at, now, withdrawal_delay(env)) {
        return Err(VaultError::WithdrawalDelayNotPassed);
    }

    storage::remove(env, &key);
    let new_balance = ledger::debit(env, account, request.amount)?;
    let new_total = ledger::subtract_from_total(env, request.amount);

    asset::transfer_out(env, account, request.amount)?;

    events::publish_withdrawal_executed(
        env,
        account.clone(),
        request.amount,
        new_balance,
        new_total,
    );

    Ok(request.amount)
}

/// Immediate withdrawal once the delay protocol exists.
///
/// Only allowed while no delay is configured, and only from the part of
/// the balance that a pending request does not reserve.
pub fn withdraw(env: &Env, account: &Address, amount: i128) -> Result<i128, VaultError> {
    lifecycle::require_initialized(env)?;

    if withdrawal_delay(env) > 0 {
        return Err(VaultError::DelayedWithdrawalRequired);
    }
    ledger::withdraw_now(env, account, amount, ledger::available(env, account))
}

// ── Emergency override ───────────────────────────────────────────────────────

/// Pays out the full balance of `account` and clears its pending request,
/// bypassing the delay. Requires the `Admin` role.
///
/// Returns the amount paid out; an empty account pays nothing.
pub fn emergency_withdraw(
    env: &Env,
    caller: &Address,
    account: &Address,
) -> Result<i128, VaultError> {
    lifecycle::require_initialized(env)?;
    roles::require_role(env, Role::Admin, caller)?;

    let amount = ledger::balance_of(env, account);

    storage::remove(env, &DataKey::PendingWithdrawal(account.clone()));
    ledger::set_balance(env, account, 0);
    let new_total = ledger::subtract_from_total(env, amount);

    if amount > 0 {
        asset::transfer_out(env, account, amount)?;
    }

    events::publish_emergency_withdrawal(env, caller.clone(), account.clone(), amount, new_total);

    Ok(amount)
}
