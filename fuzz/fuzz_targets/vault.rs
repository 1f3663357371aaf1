#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::StellarAssetClient,
    Address, Env,
};
use vault_v1::{TokenVaultV1, TokenVaultV1Client};
use vault_v3::{Deployment, Role, TokenVaultV3, TokenVaultV3Client};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Deposit { amount: u32 },
    Withdraw { amount: u32 },
    RequestWithdrawal { amount: u32 },
    ExecuteWithdrawal,
    ClaimYield,
    SetYieldRate { rate_bps: u16 },
    SetWithdrawalDelay { seconds: u32 },
    TogglePause,
    EmergencyWithdraw,
    AdvanceTime { seconds: u32 },
}

fuzz_target!(|input: (u16, Vec<FuzzAction>)| {
    let (fee_seed, actions) = input;

    let env = Env::default();
    env.mock_all_auths();

    let asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let vault = env.register(TokenVaultV1, (Deployment::Ledger,));
    let admin = Address::generate(&env);
    let _ = TokenVaultV1Client::new(&env, &vault).try_initialize(
        &asset,
        &admin,
        &u32::from(fee_seed % 10_000),
    );

    // Upgrade in place before running the action sequence.
    env.register_at(&vault, TokenVaultV3, (Deployment::Ledger,));
    let client = TokenVaultV3Client::new(&env, &vault);
    let _ = client.try_grant_role(&admin, &Role::Pauser, &admin);

    let mut users = vec![];
    for _ in 0..4 {
        let user = Address::generate(&env);
        StellarAssetClient::new(&env, &asset).mint(&user, &(u32::MAX as i128));
        users.push(user);
    }
    // Seed the vault so yield can be paid out.
    StellarAssetClient::new(&env, &asset).mint(&vault, &(u32::MAX as i128));

    let mut paused = false;
    let mut now = 0u64;

    for (i, action) in actions.into_iter().enumerate() {
        let caller = &users[i % users.len()];
        match action {
            FuzzAction::Deposit { amount } => {
                let _ = client.try_deposit(caller, &i128::from(amount));
            }
            FuzzAction::Withdraw { amount } => {
                let _ = client.try_withdraw(caller, &i128::from(amount));
            }
            FuzzAction::RequestWithdrawal { amount } => {
                let _ = client.try_request_withdrawal(caller, &i128::from(amount));
            }
            FuzzAction::ExecuteWithdrawal => {
                let _ = client.try_execute_withdrawal(caller);
            }
            FuzzAction::ClaimYield => {
                let _ = client.try_claim_yield(caller);
            }
            FuzzAction::SetYieldRate { rate_bps } => {
                let _ = client.try_set_yield_rate(&admin, &u32::from(rate_bps));
            }
            FuzzAction::SetWithdrawalDelay { seconds } => {
                let _ = client.try_set_withdrawal_delay(&admin, &u64::from(seconds));
            }
            FuzzAction::TogglePause => {
                paused = !paused;
                if paused {
                    let _ = client.try_pause_deposits(&admin);
                } else {
                    let _ = client.try_unpause_deposits(&admin);
                }
            }
            FuzzAction::EmergencyWithdraw => {
                let _ = client.try_emergency_withdraw(&admin, caller);
            }
            FuzzAction::AdvanceTime { seconds } => {
                now = now.saturating_add(u64::from(seconds));
                env.ledger().set_timestamp(now);
            }
        }

        // Ledger invariants that must hold after every operation.
        assert!(client.total_deposits() >= 0);
        for user in users.iter() {
            let balance = client.balance_of(user);
            assert!(balance >= 0);
            if let Some(pending) = client.get_pending_withdrawal(user) {
                assert!(pending.amount > 0);
                assert!(balance >= pending.amount);
            }
        }
    }
});
