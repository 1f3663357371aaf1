//! Shared ledger state machine for every Token Vault contract version.
//!
//! This crate provides:
//! - [`VaultError`]: the error taxonomy every vault entry point returns.
//! - [`storage`]: the append-only persistent schema shared by all versions.
//! - The ledger engines: [`roles`], [`ledger`], [`fees`], [`accrual`],
//!   [`pause`], [`withdrawal`] and the [`lifecycle`] / [`versioning`] layer.
//!
//! The per-version contracts (`vault_v1`, `vault_v2`, `vault_v3`) are thin
//! `#[contractimpl]` surfaces over these modules, so logic swapped in by an
//! upgrade always reads state written by its predecessors through the same
//! keys.

#![cfg_attr(not(test), no_std)]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod accrual;
pub mod asset;
pub mod events;
pub mod fees;
pub mod ledger;
pub mod lifecycle;
pub mod pause;
pub mod roles;
pub mod storage;
pub mod versioning;
pub mod withdrawal;

pub use lifecycle::Deployment;
pub use roles::Role;
pub use versioning::Version;
pub use withdrawal::PendingWithdrawal;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes returned by every vault entry point.
///
/// # Code ranges
/// | Range   | Purpose                       |
/// |---------|-------------------------------|
/// | 1 – 9   | Lifecycle / initialisation    |
/// | 10 – 19 | Authentication & authorisation|
/// | 30 – 39 | Validation / input            |
/// | 40 – 49 | Ledger state                  |
/// | 50 – 59 | Funds                         |
///
/// Codes are part of the upgrade contract: a code never changes meaning
/// between versions.
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum VaultError {
    // ── Lifecycle (1–9) ──────────────────────────────────────
    /// A mutating call arrived before `initialize`.
    NotInitialized = 1,

    /// `initialize` (or a version's re-initializer) already ran.
    AlreadyInitialized = 2,

    /// `initialize` was called on a code image that is not a live ledger
    /// instance.
    NotInstantiated = 3,

    // ── Auth (10–19) ─────────────────────────────────────────
    /// The caller does not hold the role the operation requires.
    Unauthorized = 10,

    // ── Validation (30–39) ───────────────────────────────────
    /// An argument is out of range (zero amount, fee >= 10000 bps, ...).
    InvalidParameter = 30,

    /// Checked arithmetic on a balance, fee or yield overflowed.
    ArithmeticOverflow = 31,

    // ── Ledger state (40–49) ─────────────────────────────────
    /// Deposits are paused by a PAUSER.
    DepositsPaused = 40,

    /// The account already has an outstanding withdrawal request.
    WithdrawalAlreadyPending = 41,

    /// `execute_withdrawal` was called without a pending request.
    NoPendingWithdrawal = 42,

    /// The configured withdrawal delay has not elapsed yet.
    WithdrawalDelayNotPassed = 43,

    /// Immediate withdrawal is disabled while a withdrawal delay is set.
    DelayedWithdrawalRequired = 44,

    // ── Funds (50–59) ────────────────────────────────────────
    /// The account balance (or its unreserved part) is too small.
    InsufficientBalance = 50,

    /// The asset contract rejected a transfer in or out of the vault.
    AssetTransferFailed = 51,
}
