use soroban_sdk::{contracttype, Address, Env};

use crate::{
    events,
    storage::{self, DataKey},
    VaultError,
};

// ── Role Enum ────────────────────────────────────────────────────────────────

/// Named capabilities a principal can hold.
///
/// - `Admin`  – configures rates and delays, grants and revokes every role
///              (including `Admin` itself), runs emergency withdrawals and
///              authorizes upgrades.
/// - `Pauser` – may only pause and unpause deposits.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    Admin = 1,
    Pauser = 2,
}

// ── Core Functions ───────────────────────────────────────────────────────────

pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    storage::read(env, &DataKey::Role(role, account.clone())).unwrap_or(false)
}

/// Guard: fails with `Unauthorized` unless `caller` holds `role`.
///
/// The caller must have already been authenticated via `require_auth()`.
pub fn require_role(env: &Env, role: Role, caller: &Address) -> Result<(), VaultError> {
    if !has_role(env, role, caller) {
        return Err(VaultError::Unauthorized);
    }
    Ok(())
}

/// Seeds `admin` during initialisation. Skips the authorization check, so
/// only the one-time initializer may call it.
pub fn seed_admin(env: &Env, admin: &Address) {
    storage::write(env, &DataKey::Role(Role::Admin, admin.clone()), &true);
}

// ── Grant / Revoke ───────────────────────────────────────────────────────────

/// Grants `role` to `account`. Only an `Admin` may call this.
pub fn grant_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), VaultError> {
    require_role(env, Role::Admin, caller)?;

    if !has_role(env, role, account) {
        storage::write(env, &DataKey::Role(role, account.clone()), &true);
        events::publish_role_granted(env, role, account.clone(), caller.clone());
    }
    Ok(())
}

/// Revokes `role` from `account`. Only an `Admin` may call this, and an
/// admin may revoke its own `Admin` role.
pub fn revoke_role(
    env: &Env,
    caller: &Address,
    role: Role,
    account: &Address,
) -> Result<(), VaultError> {
    require_role(env, Role::Admin, caller)?;
    drop_role(env, role, account, caller);
    Ok(())
}

/// Drops `role` from the caller itself.
pub fn renounce_role(env: &Env, caller: &Address, role: Role) {
    drop_role(env, role, caller, caller);
}

fn drop_role(env: &Env, role: Role, account: &Address, sender: &Address) {
    if has_role(env, role, account) {
        storage::remove(env, &DataKey::Role(role, account.clone()));
        events::publish_role_revoked(env, role, account.clone(), sender.clone());
    }
}
