use soroban_sdk::{contracttype, Address, BytesN, Env, String};

use crate::{
    events, lifecycle,
    roles::{self, Role},
    storage::{self, DataKey},
    VaultError,
};

/// Feature-set tag of a vault code image.
///
/// - `V1` – fee-adjusted deposits and immediate withdrawals.
/// - `V2` – adds yield accrual and the deposit pause gate.
/// - `V3` – adds the delayed withdrawal protocol and emergency withdrawal.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Version {
    V1 = 1,
    V2 = 2,
    V3 = 3,
}

impl Version {
    /// Returns the numeric rank of this version for comparison.
    pub fn rank(&self) -> u32 {
        match self {
            Version::V1 => 1,
            Version::V2 => 2,
            Version::V3 => 3,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Version::V1 => "V1",
            Version::V2 => "V2",
            Version::V3 => "V3",
        }
    }

    pub fn as_string(&self, env: &Env) -> String {
        String::from_str(env, self.tag())
    }
}

pub fn schema_version(env: &Env) -> Option<Version> {
    storage::read(env, &DataKey::SchemaVersion)
}

pub(crate) fn set_schema_version(env: &Env, version: Version) {
    storage::write(env, &DataKey::SchemaVersion, &version);
}

/// Runs the one-time re-initializer of `target` against existing state.
///
/// Succeeds at most once per ledger instance per version: the stored schema
/// version only moves forward, and a target at or below it fails with
/// `AlreadyInitialized`. Fields appended by V2 and V3 all default to zero,
/// so the hook only advances the schema tag.
pub fn reinitialize(env: &Env, caller: &Address, target: Version) -> Result<(), VaultError> {
    lifecycle::require_initialized(env)?;
    roles::require_role(env, Role::Admin, caller)?;

    let current = schema_version(env).unwrap_or(Version::V1);
    if current.rank() >= target.rank() {
        return Err(VaultError::AlreadyInitialized);
    }

    set_schema_version(env, target);
    events::publish_reinitialized(env, current, target);

    Ok(())
}

/// Authorization check consulted before the host swaps the running code.
/// Only an `Admin` may authorize an upgrade.
pub fn authorize_upgrade(env: &Env, caller: &Address) -> Result<(), VaultError> {
    lifecycle::require_initialized(env)?;
    roles::require_role(env, Role::Admin, caller)
}

/// Swaps the running code for `new_wasm_hash` after the authorization
/// check. Persistent state is untouched; the new code's re-initializer, if
/// any, is invoked separately.
pub fn upgrade(
    env: &Env,
    caller: &Address,
    running: Version,
    new_wasm_hash: BytesN<32>,
) -> Result<(), VaultError> {
    authorize_upgrade(env, caller)?;

    events::publish_upgraded(env, caller.clone(), running);
    env.deployer().update_current_contract_wasm(new_wasm_hash);

    Ok(())
}
