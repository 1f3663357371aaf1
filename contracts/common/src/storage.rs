use soroban_sdk::{contracttype, Address, Env, IntoVal, TryFromVal, Val};

use crate::roles::Role;

// ~30 days / ~120 days at 5s ledgers.
pub const TTL_THRESHOLD: u32 = 518_400;
pub const TTL_EXTEND_TO: u32 = 2_073_600;

// ── Storage Keys ─────────────────────────────────────────────────────────────

/// Every persistent key the vault has ever written.
///
/// This enum is the on-ledger schema. Variants are serialised by name, so a
/// variant must never be renamed or removed, and the meaning of the value
/// stored under it must never change. A new version appends variants and
/// treats an absent entry as the zero value, which lets logic swapped in by
/// an upgrade run against state written by any earlier version without a
/// migration step.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    // ── V1 ──────────────────────────────────────────────────
    /// [`crate::lifecycle::Deployment`] tag recorded by the constructor.
    Deployment,
    Initialized,
    /// Address of the external asset contract.
    Asset,
    /// `u32`, fixed at initialisation.
    DepositFeeBps,
    /// `i128`, credited deposits minus completed withdrawals.
    TotalDeposits,
    /// [`crate::versioning::Version`] of the last (re-)initializer that ran.
    SchemaVersion,
    Balance(Address),
    Role(Role, Address),

    // ── V2 ──────────────────────────────────────────────────
    /// `u32`, annual yield in basis points.
    YieldRateBps,
    DepositsPaused,
    /// `u64` timestamp of the last accrual for an account.
    YieldAnchor(Address),

    // ── V3 ──────────────────────────────────────────────────
    /// `u64` seconds between a withdrawal request and its execution.
    WithdrawalDelay,
    PendingWithdrawal(Address),
}

// ── Helpers ──────────────────────────────────────────────────────────────────

fn extend_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Reads `key`, extending its TTL when the entry exists.
pub fn read<V>(env: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
    V::Error: core::fmt::Debug,
{
    let value: Option<V> = env.storage().persistent().get(key);
    if value.is_some() {
        extend_ttl(env, key);
    }
    value
}

pub fn write<V: IntoVal<Env, Val>>(env: &Env, key: &DataKey, value: &V) {
    env.storage().persistent().set(key, value);
    extend_ttl(env, key);
}

pub fn has(env: &Env, key: &DataKey) -> bool {
    env.storage().persistent().has(key)
}

pub fn remove(env: &Env, key: &DataKey) {
    env.storage().persistent().remove(key);
}
