use soroban_sdk::{Address, Env};

use crate::{
    events, lifecycle,
    roles::{self, Role},
    storage::{self, DataKey},
    VaultError,
};

// ── Pause gate ───────────────────────────────────────────────────────────────
//
// Only deposits consult the gate. Withdrawals, yield claims and admin calls
// keep working while deposits are paused.

pub fn is_deposits_paused(env: &Env) -> bool {
    storage::read(env, &DataKey::DepositsPaused).unwrap_or(false)
}

/// Guard: fails with `DepositsPaused` while the gate is closed.
pub fn require_deposits_open(env: &Env) -> Result<(), VaultError> {
    if is_deposits_paused(env) {
        return Err(VaultError::DepositsPaused);
    }
    Ok(())
}

/// Closes the gate. Requires the `Pauser` role.
pub fn pause_deposits(env: &Env, caller: &Address) -> Result<(), VaultError> {
    set_paused(env, caller, true)
}

/// Reopens the gate. Requires the `Pauser` role.
pub fn unpause_deposits(env: &Env, caller: &Address) -> Result<(), VaultError> {
    set_paused(env, caller, false)
}

fn set_paused(env: &Env, caller: &Address, paused: bool) -> Result<(), VaultError> {
    lifecycle::require_initialized(env)?;
    roles::require_role(env, Role::Pauser, caller)?;

    storage::write(env, &DataKey::DepositsPaused, &paused);

    if paused {
        events::publish_deposits_paused(env, caller.clone());
    } else {
        events::publish_deposits_unpaused(env, caller.clone());
    }
    Ok(())
}
