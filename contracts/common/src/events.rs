#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

use crate::{roles::Role, versioning::Version};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the ledger is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub asset: Address,
    pub admin: Address,
    pub deposit_fee_bps: u32,
    pub version: Version,
    pub timestamp: u64,
}

/// Fired when an account deposits.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub account: Address,
    pub amount: i128,
    pub credited: i128,
    pub new_balance: i128,
    pub new_total_deposits: i128,
    pub timestamp: u64,
}

/// Fired when funds leave the vault through the immediate path.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub account: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub new_total_deposits: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YieldClaimedEvent {
    pub account: Address,
    pub accrued: i128,
    pub new_balance: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct YieldRateSetEvent {
    pub rate_bps: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositsPausedEvent {
    pub paused: bool,
    pub caller: Address,
    pub timestamp: u64,
}

/// Fired when an account reserves funds for a delayed withdrawal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalRequestedEvent {
    pub account: Address,
    pub amount: i128,
    pub executable_at: u64,
    pub timestamp: u64,
}

/// Fired when a delayed withdrawal pays out.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalExecutedEvent {
    pub account: Address,
    pub amount: i128,
    pub new_balance: i128,
    pub new_total_deposits: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalDelaySetEvent {
    pub delay: u64,
    pub timestamp: u64,
}

/// Fired when an admin forcibly drains an account.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawalEvent {
    pub admin: Address,
    pub account: Address,
    pub amount: i128,
    pub new_total_deposits: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReinitializedEvent {
    pub from: Version,
    pub to: Version,
    pub timestamp: u64,
}

/// Fired right before the host swaps the running code.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpgradedEvent {
    pub admin: Address,
    pub from: Version,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(
    env: &Env,
    asset: Address,
    admin: Address,
    deposit_fee_bps: u32,
    version: Version,
) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            asset,
            admin,
            deposit_fee_bps,
            version,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposited(
    env: &Env,
    account: Address,
    amount: i128,
    credited: i128,
    new_balance: i128,
    new_total_deposits: i128,
) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), account.clone()),
        DepositedEvent {
            account,
            amount,
            credited,
            new_balance,
            new_total_deposits,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    account: Address,
    amount: i128,
    new_balance: i128,
    new_total_deposits: i128,
) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), account.clone()),
        WithdrawnEvent {
            account,
            amount,
            new_balance,
            new_total_deposits,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_yield_claimed(env: &Env, account: Address, accrued: i128, new_balance: i128) {
    env.events().publish(
        (symbol_short!("YLD_CLM"), account.clone()),
        YieldClaimedEvent {
            account,
            accrued,
            new_balance,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_yield_rate_set(env: &Env, rate_bps: u32) {
    env.events().publish(
        (symbol_short!("YLD_RATE"),),
        YieldRateSetEvent {
            rate_bps,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposits_paused(env: &Env, caller: Address) {
    env.events().publish(
        (symbol_short!("PAUSED"),),
        DepositsPausedEvent {
            paused: true,
            caller,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_deposits_unpaused(env: &Env, caller: Address) {
    env.events().publish(
        (symbol_short!("UNPAUSED"),),
        DepositsPausedEvent {
            paused: false,
            caller,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawal_requested(env: &Env, account: Address, amount: i128, executable_at: u64) {
    env.events().publish(
        (symbol_short!("WD_REQ"), account.clone()),
        WithdrawalRequestedEvent {
            account,
            amount,
            executable_at,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawal_executed(
    env: &Env,
    account: Address,
    amount: i128,
    new_balance: i128,
    new_total_deposits: i128,
) {
    env.events().publish(
        (symbol_short!("WD_EXEC"), account.clone()),
        WithdrawalExecutedEvent {
            account,
            amount,
            new_balance,
            new_total_deposits,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_withdrawal_delay_set(env: &Env, delay: u64) {
    env.events().publish(
        (symbol_short!("DLY_SET"),),
        WithdrawalDelaySetEvent {
            delay,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_emergency_withdrawal(
    env: &Env,
    admin: Address,
    account: Address,
    amount: i128,
    new_total_deposits: i128,
) {
    env.events().publish(
        (symbol_short!("EMRG_WD"), account.clone()),
        EmergencyWithdrawalEvent {
            admin,
            account,
            amount,
            new_total_deposits,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_granted(env: &Env, role: Role, account: Address, sender: Address) {
    env.events().publish(
        (symbol_short!("ROLE_GRNT"), account.clone()),
        RoleChangedEvent {
            role,
            account,
            sender,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_role_revoked(env: &Env, role: Role, account: Address, sender: Address) {
    env.events().publish(
        (symbol_short!("ROLE_RVK"), account.clone()),
        RoleChangedEvent {
            role,
            account,
            sender,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reinitialized(env: &Env, from: Version, to: Version) {
    env.events().publish(
        (symbol_short!("REINIT"),),
        ReinitializedEvent {
            from,
            to,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_upgraded(env: &Env, admin: Address, from: Version) {
    env.events().publish(
        (symbol_short!("UPGRADED"),),
        UpgradedEvent {
            admin,
            from,
            timestamp: env.ledger().timestamp(),
        },
    );
}
