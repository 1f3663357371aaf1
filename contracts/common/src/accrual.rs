use soroban_sdk::{Address, Env};

use crate::{
    events,
    fees::BPS_DENOMINATOR,
    ledger, lifecycle,
    roles::{self, Role},
    storage::{self, DataKey},
    VaultError,
};

/// Seconds in a 365-day year.
pub const SECONDS_PER_YEAR: i128 = 31_536_000;

// ── Math ─────────────────────────────────────────────────────────────────────

/// Simple interest on `balance` over `elapsed` seconds at `rate_bps` per
/// year: `floor(balance * rate_bps * elapsed / (10000 * SECONDS_PER_YEAR))`.
///
/// Successive claims compound because each one accrues on a balance that
/// already includes the previous accrual.
pub fn accrued_yield(balance: i128, rate_bps: u32, elapsed: u64) -> Result<i128, VaultError> {
    if balance <= 0 || rate_bps == 0 || elapsed == 0 {
        return Ok(0);
    }
    balance
        .checked_mul(i128::from(rate_bps))
        .and_then(|v| v.checked_mul(i128::from(elapsed)))
        .map(|v| v / (BPS_DENOMINATOR * SECONDS_PER_YEAR))
        .ok_or(VaultError::ArithmeticOverflow)
}

// ── State ────────────────────────────────────────────────────────────────────

pub fn yield_rate_bps(env: &Env) -> u32 {
    storage::read(env, &DataKey::YieldRateBps).unwrap_or(0)
}

pub fn yield_anchor(env: &Env, account: &Address) -> Option<u64> {
    storage::read(env, &DataKey::YieldAnchor(account.clone()))
}

/// Sets the annual yield rate. Requires the `Admin` role.
///
/// The new rate applies to the whole period since each account's anchor on
/// its next claim.
pub fn set_yield_rate(env: &Env, caller: &Address, rate_bps: u32) -> Result<(), VaultError> {
    lifecycle::require_initialized(env)?;
    roles::require_role(env, Role::Admin, caller)?;

    storage::write(env, &DataKey::YieldRateBps, &rate_bps);

    events::publish_yield_rate_set(env, rate_bps);

    Ok(())
}

/// Read-only preview of what `claim_yield` would credit right now.
pub fn pending_yield(env: &Env, account: &Address) -> Result<i128, VaultError> {
    match yield_anchor(env, account) {
        None => Ok(0),
        Some(anchor) => {
            let elapsed = env.ledger().timestamp().saturating_sub(anchor);
            accrued_yield(ledger::balance_of(env, account), yield_rate_bps(env), elapsed)
        }
    }
}

/// Accrues yield for `account` and moves its anchor to now.
///
/// The first call only records the anchor: an account earns nothing for
/// the time before it first touched the yield mechanics. Accrued yield is
/// added to the balance but not to `total_deposits`, which only tracks
/// external capital received.
pub fn claim_yield(env: &Env, account: &Address) -> Result<i128, VaultError> {
    lifecycle::require_initialized(env)?;

    let now = env.ledger().timestamp();
    let anchor_key = DataKey::YieldAnchor(account.clone());

    let accrued = match yield_anchor(env, account) {
        None => 0,
        Some(anchor) => {
            let elapsed = now.saturating_sub(anchor);
            let accrued =
                accrued_yield(ledger::balance_of(env, account), yield_rate_bps(env), elapsed)?;
            if accrued > 0 {
                ledger::credit(env, account, accrued)?;
            }
            accrued
        }
    };
    storage::write(env, &anchor_key, &now);

    events::publish_yield_claimed(env, account.clone(), accrued, ledger::balance_of(env, account));

    Ok(accrued)
}
