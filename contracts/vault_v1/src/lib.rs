#![no_std]

use common::{fees, ledger, lifecycle, roles, versioning};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

pub use common::{Deployment, Role, VaultError, Version};

const VERSION: Version = Version::V1;

// ── Contract ─────────────────────────────────────────────────────────────────

/// Custodial ledger, first release: fee-adjusted deposits and immediate
/// withdrawals of a single asset.
#[contract]
pub struct TokenVaultV1;

#[contractimpl]
impl TokenVaultV1 {
    pub fn __constructor(env: Env, deployment: Deployment) {
        lifecycle::record_deployment(&env, deployment);
    }

    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the ledger.
    ///
    /// * `asset`           – token contract the vault custodies.
    /// * `admin`           – principal granted the `Admin` role.
    /// * `deposit_fee_bps` – fee withheld from every deposit, below 10000.
    pub fn initialize(
        env: Env,
        asset: Address,
        admin: Address,
        deposit_fee_bps: u32,
    ) -> Result<(), VaultError> {
        lifecycle::initialize(&env, &asset, &admin, deposit_fee_bps, VERSION)
    }

    // ── Deposits & withdrawals ──────────────────────────────────────────────

    /// Deposit `amount` of the asset and return the credited amount
    /// (`amount` minus the deposit fee, rounded in the vault's favour).
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<i128, VaultError> {
        from.require_auth();
        fees::deposit(&env, &from, amount)
    }

    /// Withdraw `amount` immediately and return the remaining balance.
    pub fn withdraw(env: Env, account: Address, amount: i128) -> Result<i128, VaultError> {
        account.require_auth();
        ledger::withdraw(&env, &account, amount)
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

    /// Replace the running code. Only an `Admin` may upgrade.
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

    pub fn get_asset(env: Env) -> Result<Address, VaultError> {
        lifecycle::asset(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        lifecycle::is_initialized(&env)
    }

    /// Tag of the running code, independent of stored data.
    pub fn get_implementation_version(env: Env) -> String {
        VERSION.as_string(&env)
    }

    /// Version of the last (re-)initializer that ran against this ledger.
    pub fn get_schema_version(env: Env) -> Option<Version> {
        versioning::schema_version(&env)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
