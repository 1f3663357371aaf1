#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests over the whole V1 → V2 → V3 lifecycle.
//!
//! Invariants tested:
//! - every deposit credits exactly `amount - floor(amount * fee / 10000)`
//! - `total_deposits` equals the sum of balances while no yield is credited
//! - every balance reads the same before and after each upgrade
//! - `execute_withdrawal` succeeds exactly when `elapsed >= delay`

mod setup;

use proptest::prelude::*;
use setup::deploy_v1;
use soroban_sdk::testutils::Ledger as _;
use vault_v3::VaultError;

fn cases() -> ProptestConfig {
    ProptestConfig::with_cases(24)
}

proptest! {
    #![proptest_config(cases())]

    #[test]
    fn prop_deposits_credit_fee_adjusted_amounts(
        fee_bps in 0u32..10_000u32,
        amounts in prop::collection::vec(1i128..=1_000_000i128, 1..5),
    ) {
        let ctx = deploy_v1(fee_bps);
        let v1 = ctx.v1();

        let mut expected_total = 0i128;
        for amount in amounts.iter() {
            let user = ctx.funded_user(*amount);
            let credited = v1.deposit(&user, amount);
            let expected = amount - amount * i128::from(fee_bps) / 10_000;

            prop_assert_eq!(credited, expected);
            prop_assert_eq!(v1.balance_of(&user), expected);
            expected_total += expected;
        }
        prop_assert_eq!(v1.total_deposits(), expected_total);
    }

    #[test]
    fn prop_upgrades_preserve_every_balance(
        fee_bps in 0u32..10_000u32,
        deposits in prop::collection::vec((1i128..=1_000_000i128, 0i128..=100i128), 1..5),
    ) {
        let ctx = deploy_v1(fee_bps);
        let v1 = ctx.v1();

        let mut accounts = Vec::new();
        for (amount, withdraw_pct) in deposits.iter() {
            let user = ctx.funded_user(*amount);
            let credited = v1.deposit(&user, amount);
            let to_withdraw = credited * withdraw_pct / 100;
            if to_withdraw > 0 {
                v1.withdraw(&user, &to_withdraw);
            }
            accounts.push((user.clone(), v1.balance_of(&user)));
        }
        let total_v1 = v1.total_deposits();
        let sum: i128 = accounts.iter().map(|(_, b)| *b).sum();
        prop_assert_eq!(total_v1, sum);

        let v2 = ctx.install_v2();
        for (user, balance) in accounts.iter() {
            prop_assert_eq!(v2.balance_of(user), *balance);
        }
        prop_assert_eq!(v2.total_deposits(), total_v1);

        let v3 = ctx.install_v3();
        for (user, balance) in accounts.iter() {
            prop_assert_eq!(v3.balance_of(user), *balance);
        }
        prop_assert_eq!(v3.total_deposits(), total_v1);
    }

    #[test]
    fn prop_execute_respects_delay(
        delay in 1u64..=30 * 86_400u64,
        elapsed in 0u64..=60 * 86_400u64,
    ) {
        let ctx = deploy_v1(0);
        let user = ctx.funded_user(1_000);
        ctx.v1().deposit(&user, &1_000);
        ctx.install_v2();
        let v3 = ctx.install_v3();

        v3.set_withdrawal_delay(&ctx.admin, &delay);
        ctx.env.ledger().set_timestamp(1_000);
        v3.request_withdrawal(&user, &400);

        ctx.env.ledger().set_timestamp(1_000 + elapsed);
        let result = v3.try_execute_withdrawal(&user);
        if elapsed >= delay {
            prop_assert!(result.is_ok());
            prop_assert_eq!(v3.balance_of(&user), 600);
        } else {
            prop_assert_eq!(result.unwrap_err().unwrap(), VaultError::WithdrawalDelayNotPassed);
            prop_assert_eq!(v3.balance_of(&user), 1_000);
        }
    }
}
