#![no_std]

use common::{accrual, fees, ledger, lifecycle, pause, roles, versioning, withdrawal};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

pub use common::{Deployment, PendingWithdrawal, Role, VaultError, Version};

const VERSION: Version = Version::V3;

// ── Contract ─────────────────────────────────────────────────────────────────

/// Third release. Everything V2 does, plus a two-phase delayed withdrawal
/// protocol and an admin emergency override.
#[contract]
pub struct TokenVaultV3;

#[contractimpl]
impl TokenVaultV3 {
    pub fn __constructor(env: Env, deployment: Deployment) {
        lifecycle::record_deployment(&env, deployment);
    }

    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap a fresh V3 ledger. See `TokenVaultV1::initialize`.
    pub fn initialize(
        env: Env,
        asset: Address,
        admin: Address,
        deposit_fee_bps: u32,
    ) -> Result<(), VaultError> {
        lifecycle::initialize(&env, &asset, &admin, deposit_fee_bps, VERSION)
    }

    /// One-time V3 re-initializer for a ledger created by older code.
    pub fn reinitialize(env: Env, admin: Address) -> Result<(), VaultError> {
        admin.require_auth();
        versioning::reinitialize(&env, &admin, VERSION)
    }

    // ── Deposits ────────────────────────────────────────────────────────────

    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, VaultError> {
        from.require_auth();
        fees::deposit(&env, &from, amount)
    }

    // ── Withdrawals ─────────────────────────────────────────────────────────

    /// Immediate withdrawal, kept for ledgers without a withdrawal delay.
    ///
    /// Fails with `DelayedWithdrawalRequired` once a delay is configured,
    /// and can only draw on the balance a pending request does not reserve.
    pub fn withdraw(env: Env, account: Address, amount: i128) -> Result<i128, VaultError> {
        account.require_auth();
        withdrawal::withdraw(&env, &account, amount)
    }

    /// Reserve `amount` for withdrawal after the configured delay.
    ///
    /// The balance is not reduced until `execute_withdrawal`.
    pub fn request_withdrawal(
        env: Env,
        account: Address,
        amount: i128,
    ) -> Result<PendingWithdrawal, VaultError> {
        account.require_auth();
        withdrawal::request_withdrawal(&env, &account, amount)
    }

    /// Pay out the pending request once the delay has elapsed and return
    /// the amount withdrawn.
    pub fn execute_withdrawal(env: Env, account: Address) -> Result<i128, VaultError> {
        account.require_auth();
        withdrawal::execute_withdrawal(&env, &account)
    }

    /// Drain `account` to its owner immediately, bypassing the delay.
    /// `Admin` only.
    pub fn emergency_withdraw(
        env: Env,
        caller: Address,
        account: Address,
    ) -> Result<i128, VaultError> {
        caller.require_auth();
        withdrawal::emergency_withdraw(&env, &caller, &account)
    }

    /// Set the delay between request and execution, in seconds. `Admin` only.
    pub fn set_withdrawal_delay(env: Env, caller: Address, seconds: u64) -> Result<(), VaultError> {
        caller.require_auth();
        withdrawal::set_withdrawal_delay(&env, &caller, seconds)
    }

    // ── Yield ───────────────────────────────────────────────────────────────

    pub fn claim_yield(env: Env, account: Address) -> Result<i128, VaultError> {
        account.require_auth();
        accrual::claim_yield(&env, &account)
    }

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

    pub fn pending_yield(env: Env, account: Address) -> Result<i128, VaultError> {
        accrual::pending_yield(&env, &account)
    }

    pub fn is_deposits_paused(env: Env) -> bool {
        pause::is_deposits_paused(&env)
    }

    pub fn get_withdrawal_delay(env: Env) -> u64 {
        withdrawal::withdrawal_delay(&env)
    }

    pub fn get_pending_withdrawal(env: Env, account: Address) -> Option<PendingWithdrawal> {
        withdrawal::pending_withdrawal(&env, &account)
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
