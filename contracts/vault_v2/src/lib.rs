#![no_std]

use common::{accrual, fees, ledger, lifecycle, pause, roles, versioning};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

pub use common::{Deployment, Role, VaultError, Version};

const VERSION: Version = Version::V2;

// ── Contract ─────────────────────────────────────────────────────────────────

/// Second release. Everything V1 does, plus time-based yield accrual and a
/// pauser-controlled deposit gate.
#[contract]
pub struct TokenVaultV2;

#[contractimpl]
impl TokenVaultV2 {
    pub fn __constructor(env: Env, deployment: Deployment) {
        lifecycle::record_deployment(&env, deployment);
    }

    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap a fresh V2 ledger. See `TokenVaultV1::initialize`.
    pub fn initialize(
        env: Env,
        asset: Address,
        admin: Address,
        deposit_fee_bps: u32,
    ) -> Result<(), VaultError> {
        lifecycle::initialize(&env, &asset, &admin, deposit_fee_bps, VERSION)
    }

    /// One-time V2 re-initializer for a ledger created by V1 code.
    pub fn reinitialize(env: Env, admin: Address) -> Result<(), VaultError> {
        admin.require_auth();
        versioning::reinitialize(&env, &admin, VERSION)
    }

    // ── Deposits & withdrawals ──────────────────────────────────────────────

    /// Deposit `amount` and return the credited amount. Fails with
    /// `DepositsPaused` while the gate is closed.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, VaultError> {
        from.require_auth();
        fees::deposit(&env, &from, amount)
    }

    pub fn withdraw(env: Env, account: Address, amount: i128) -> Result<i128, VaultError> {
        account.require_auth();
        ledger::withdraw(&env, &account, amount)
    }

    // ── Yield ───────────────────────────────────────────────────────────────

    /// Accrue yield on the caller's balance and return the amount credited.
    ///
    /// The first call only starts the clock and returns zero.
    pub fn claim_yield(env: Env, account: Address) -> Result<i128, VaultError> {
        account.require_auth();
        accrual::claim_yield(&env, &account)
    }

    /// Set the annual yield rate in basis points. `Admin` only.
    pub fn set_yield_rate(env: Env, caller: Address, rate_bps: u32) -> Result<(), VaultError> {
        caller.require_auth();
        accrual::set_yield_rate(&env, &caller, rate_bps)
    }

    // ── Pause gate ──────────────────────────────────────────────────────────

    pub fn pause_deposits(env: Env, caller: Address) -> Result<(), VaultError> {
        caller.require_auth();
        pause::pause_deposits(&env, &caller)
    }

    pub fn unpause_deposits(env: Env, caller: Address) -> Result<(), VaultError> {
        caller.require_auth();
        pause::unpause_deposits(&env, &caller)
    }

    // ── Roles ───────────────────────────────────────────────────────────────

    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), VaultError> {
        lifecycle::require_initialized(&env)?;
        caller.require_auth();
        roles::grant_role(&env, &caller, role, &account)
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), VaultError> {
        lifecycle::require_initialized(&env)?;
        caller.require_auth();
        roles::revoke_role(&env, &caller, role, &account)
    }

    pub fn renounce_role(env: Env, caller: Address, role: Role) -> Result<(), VaultError> {
        lifecycle::require_initialized(&env)?;
        caller.require_auth();
        roles::renounce_role(&env, &caller, role);
        Ok(())
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        roles::has_role(&env, role, &account)
    }

    // ── Upgrade ─────────────────────────────────────────────────────────────

    pub fn upgrade(env: Env, caller: Address, new_wasm_hash: BytesN<32>) -> Result<(), VaultError> {
        caller.require_auth();
        versioning::upgrade(&env, &caller, VERSION, new_wasm_hash)
    }

    // ── View functions ───────────────────────────────────────────────────────

    pub fn balance_of(env: Env, account: Address) -> i128 {
        ledger::balance_of(&env, &account)
    }

    pub fn total_deposits(env: Env) -> i128 {
        ledger::total_deposits(&env)
    }

    pub fn get_deposit_fee(env: Env) -> u32 {
        fees::deposit_fee_bps(&env)
    }

    pub fn get_yield_rate(env: Env) -> u32 {
        accrual::yield_rate_bps(&env)
    }

    /// Yield `claim_yield` would credit right now, without claiming it.
    pub fn pending_yield(env: Env, account: Address) -> Result<i128, VaultError> {
        accrual::pending_yield(&env, &account)
    }

    pub fn is_deposits_paused(env: Env) -> bool {
        pause::is_deposits_paused(&env)
    }

    pub fn get_asset(env: Env) -> Result<Address, VaultError> {
        lifecycle::asset(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        lifecycle::is_initialized(&env)
    }

    pub fn get_implementation_version(env: Env) -> String {
        VERSION.as_string(&env)
    }

    pub fn get_schema_version(env: Env) -> Option<Version> {
        versioning::schema_version(&env)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod test;
