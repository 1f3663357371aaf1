extern crate std;

use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    token::{Client as TokenClient, StellarAssetClient},
    Address, Env, String,
};

use crate::{Deployment, Role, TokenVaultV2, TokenVaultV2Client, VaultError, Version};

const YEAR: u64 = 365 * 24 * 60 * 60;

// ── Test helpers ─────────────────────────────────────────────────────────────

/// Provisions a fresh V2 vault (5% fee) and a user holding a 950 balance.
fn setup() -> (Env, TokenVaultV2Client<'static>, Address, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let asset = env.register_stellar_asset_contract_v2(Address::generate(&env));
    let asset_id = asset.address();

    let contract_id = env.register(TokenVaultV2, (Deployment::Ledger,));
    let client = TokenVaultV2Client::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&asset_id, &admin, &500);

    let user = Address::generate(&env);
    StellarAssetClient::new(&env, &asset_id).mint(&user, &1_000);
    client.deposit(&user, &1_000);

    (env, client, admin, user, asset_id)
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[test]
fn test_fresh_v2_defaults() {
    let (env, client, _admin, _user, _asset) = setup();

    assert_eq!(
        client.get_implementation_version(),
        String::from_str(&env, "V2")
    );
    assert_eq!(client.get_schema_version(), Some(Version::V2));
    assert_eq!(client.get_yield_rate(), 0);
    assert!(!client.is_deposits_paused());
}

#[test]
fn test_reinitialize_on_fresh_v2_fails() {
    let (_env, client, admin, _user, _asset) = setup();

    let result = client.try_reinitialize(&admin);
    match result {
        Err(Ok(e)) => assert_eq!(e, VaultError::AlreadyInitialized),
        _ => unreachable!("Expected AlreadyInitialized error"),
    }
}

// ── Yield ─────────────────────────────────────────────────────────────────────

#[test]
fn test_set_yield_rate_by_admin() {
    let (_env, client, admin, _user, _asset) = setup();

    client.set_yield_rate(&admin, &1_000);
    assert_eq!(client.get_yield_rate(), 1_000);
}

#[test]
fn test_set_yield_rate_by_non_admin_fails() {
    let (_env, client, _admin, user, _asset) = setup();

    let result = client.try_set_yield_rate(&user, &1_000);
    match result {
        Err(Ok(e)) => assert_eq!(e, VaultError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert_eq!(client.get_yield_rate(), 0);
}

#[test]
fn test_first_claim_only_sets_anchor() {
    let (env, client, admin, user, _asset) = setup();
    client.set_yield_rate(&admin, &1_000);

    // A long time passes before the account first touches yield.
    env.ledger().set_timestamp(10 * YEAR);

    assert_eq!(client.claim_yield(&user), 0);
    assert_eq!(client.balance_of(&user), 950);
    assert_eq!(client.pending_yield(&user), 0);
}

#[test]
fn test_yield_after_one_year() {
    let (env, client, admin, user, _asset) = setup();
    client.set_yield_rate(&admin, &1_000);

    env.ledger().set_timestamp(1_000);
    client.claim_yield(&user);

    env.ledger().set_timestamp(1_000 + YEAR);
    assert_eq!(client.pending_yield(&user), 95);

    // floor(950 * 1000 * YEAR / (10000 * YEAR)) = 95
    assert_eq!(client.claim_yield(&user), 95);
    assert_eq!(client.balance_of(&user), 1_045);
    assert!(client.balance_of(&user) > 950);

    // Yield is not external capital.
    assert_eq!(client.total_deposits(), 950);
}

#[test]
fn test_yield_compounds_across_claims() {
    let (env, client, admin, user, _asset) = setup();
    client.set_yield_rate(&admin, &1_000);

    env.ledger().set_timestamp(0);
    client.claim_yield(&user);

    // 950 * 5% = 47.5 -> 47
    env.ledger().set_timestamp(YEAR / 2);
    assert_eq!(client.claim_yield(&user), 47);

    // 997 * 5% = 49.85 -> 49
    env.ledger().set_timestamp(YEAR);
    assert_eq!(client.claim_yield(&user), 49);
    assert_eq!(client.balance_of(&user), 1_046);
}

#[test]
fn test_claim_at_same_timestamp_accrues_nothing() {
    let (env, client, admin, user, _asset) = setup();
    client.set_yield_rate(&admin, &1_000);

    env.ledger().set_timestamp(100);
    client.claim_yield(&user);
    assert_eq!(client.claim_yield(&user), 0);
    assert_eq!(client.balance_of(&user), 950);
}

#[test]
fn test_yield_is_withdrawable() {
    let (env, client, admin, user, asset) = setup();
    client.set_yield_rate(&admin, &1_000);

    env.ledger().set_timestamp(0);
    client.claim_yield(&user);
    env.ledger().set_timestamp(YEAR);
    client.claim_yield(&user);

    // The vault holds 1000 (950 credited + 50 fee), enough for 1045.
    client.withdraw(&user, &1_000);
    assert_eq!(client.balance_of(&user), 45);
    // Withdrawals beyond tracked deposits floor the aggregate at zero.
    assert_eq!(client.total_deposits(), 0);
    assert_eq!(TokenClient::new(&env, &asset).balance(&user), 1_000);
}

// ── Pause gate ────────────────────────────────────────────────────────────────

#[test]
fn test_pause_and_unpause_deposits() {
    let (env, client, admin, user, asset) = setup();

    client.grant_role(&admin, &Role::Pauser, &admin);
    client.pause_deposits(&admin);
    assert!(client.is_deposits_paused());

    StellarAssetClient::new(&env, &asset).mint(&user, &100);
    let result = client.try_deposit(&user, &100);
    match result {
        Err(Ok(e)) => assert_eq!(e, VaultError::DepositsPaused),
        _ => unreachable!("Expected DepositsPaused error"),
    }
    assert_eq!(client.balance_of(&user), 950);

    client.unpause_deposits(&admin);
    assert!(!client.is_deposits_paused());

    client.deposit(&user, &100);
    assert_eq!(client.balance_of(&user), 1_045);
}

#[test]
fn test_admin_without_pauser_role_cannot_pause() {
    let (_env, client, admin, _user, _asset) = setup();

    let result = client.try_pause_deposits(&admin);
    match result {
        Err(Ok(e)) => assert_eq!(e, VaultError::Unauthorized),
        _ => unreachable!("Expected Unauthorized error"),
    }
    assert!(!client.is_deposits_paused());
}

#[test]
fn test_revoked_pauser_cannot_unpause() {
    let (env, client, admin, _user, _asset) = setup();
    let pauser = Address::generate(&env);

    client.grant_role(&admin, &Role::Pauser, &pauser);
    client.pause_deposits(&pauser);
    client.revoke_role(&admin, &Role::Pauser, &pauser);

    let result = client.try_unpause_deposits(&pauser);
    assert_eq!(result.unwrap_err().unwrap(), VaultError::Unauthorized);
    assert!(client.is_deposits_paused());
}

#[test]
fn test_pause_does_not_block_withdrawals_or_yield() {
    let (env, client, admin, user, _asset) = setup();
    client.grant_role(&admin, &Role::Pauser, &admin);
    client.set_yield_rate(&admin, &1_000);

    env.ledger().set_timestamp(0);
    client.claim_yield(&user);
    client.pause_deposits(&admin);

    env.ledger().set_timestamp(YEAR);
    assert_eq!(client.claim_yield(&user), 95);
    assert_eq!(client.withdraw(&user, &45), 1_000);
}
