use soroban_sdk::{contracttype, Address, Env};

use crate::{
    events, roles,
    storage::{self, DataKey},
    versioning::{self, Version},
    VaultError,
};

/// What a deployed instance of the vault code is for.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Deployment {
    /// A live ledger instance that holds balances once initialised.
    Ledger = 1,
    /// A shared code image deployed for reference only. It must never be
    /// initialised as if it were a ledger.
    Template = 2,
}

/// Records the deployment tag. Called from each contract's constructor.
pub fn record_deployment(env: &Env, deployment: Deployment) {
    storage::write(env, &DataKey::Deployment, &deployment);
}

pub fn is_initialized(env: &Env) -> bool {
    storage::has(env, &DataKey::Initialized)
}

/// Guard: revert if the ledger is not yet initialised.
pub fn require_initialized(env: &Env) -> Result<(), VaultError> {
    if !is_initialized(env) {
        return Err(VaultError::NotInitialized);
    }
    Ok(())
}

/// Bootstraps the ledger exactly once.
///
/// * `asset`           – address of the external asset contract.
/// * `admin`           – principal seeded with the `Admin` role.
/// * `deposit_fee_bps` – fee deducted from every deposit, in `[0, 10000)`.
/// * `version`         – version of the code running the initializer; it
///                       becomes the stored schema version.
pub fn initialize(
    env: &Env,
    asset: &Address,
    admin: &Address,
    deposit_fee_bps: u32,
    version: Version,
) -> Result<(), VaultError> {
    let deployment: Option<Deployment> = storage::read(env, &DataKey::Deployment);
    if deployment != Some(Deployment::Ledger) {
        return Err(VaultError::NotInstantiated);
    }
    if is_initialized(env) {
        return Err(VaultError::AlreadyInitialized);
    }
    crate::fees::validate_fee_bps(deposit_fee_bps)?;

    storage::write(env, &DataKey::Initialized, &true);
    storage::write(env, &DataKey::Asset, asset);
    storage::write(env, &DataKey::DepositFeeBps, &deposit_fee_bps);
    storage::write(env, &DataKey::TotalDeposits, &0i128);
    versioning::set_schema_version(env, version);
    // Every later field defaults to zero when absent.

    roles::seed_admin(env, admin);

    events::publish_initialized(env, asset.clone(), admin.clone(), deposit_fee_bps, version);

    Ok(())
}

pub fn asset(env: &Env) -> Result<Address, VaultError> {
    storage::read(env, &DataKey::Asset).ok_or(VaultError::NotInitialized)
}
