use soroban_sdk::{testutils::Address as _, token::StellarAssetClient, Address, Env};
use vault_v1::{TokenVaultV1, TokenVaultV1Client};
use vault_v2::{TokenVaultV2, TokenVaultV2Client};
use vault_v3::{Deployment, TokenVaultV3, TokenVaultV3Client};

pub struct TestContext {
    pub env: Env,
    pub vault: Address,
    pub asset: Address,
    pub admin: Address,
}

/// Deploys a V1 ledger charging `fee_bps` over a fresh SAC asset.
pub fn deploy_v1(fee_bps: u32) -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let asset = env
        .register_stellar_asset_contract_v2(Address::generate(&env))
        .address();
    let vault = env.register(TokenVaultV1, (Deployment::Ledger,));

    let admin = Address::generate(&env);
    TokenVaultV1Client::new(&env, &vault).initialize(&asset, &admin, &fee_bps);

    TestContext {
        env,
        vault,
        asset,
        admin,
    }
}

impl TestContext {
    pub fn v1(&self) -> TokenVaultV1Client<'_> {
        TokenVaultV1Client::new(&self.env, &self.vault)
    }

    pub fn v2(&self) -> TokenVaultV2Client<'_> {
        TokenVaultV2Client::new(&self.env, &self.vault)
    }

    pub fn v3(&self) -> TokenVaultV3Client<'_> {
        TokenVaultV3Client::new(&self.env, &self.vault)
    }

    /// Swaps the code at the vault address for V2, keeping its storage.
    pub fn install_v2(&self) -> TokenVaultV2Client<'_> {
        self.env
            .register_at(&self.vault, TokenVaultV2, (Deployment::Ledger,));
        self.v2()
    }

    /// Swaps the code at the vault address for V3, keeping its storage.
    pub fn install_v3(&self) -> TokenVaultV3Client<'_> {
        self.env
            .register_at(&self.vault, TokenVaultV3, (Deployment::Ledger,));
        self.v3()
    }

    /// Creates an account holding `amount` of the asset.
    pub fn funded_user(&self, amount: i128) -> Address {
        let user = Address::generate(&self.env);
        StellarAssetClient::new(&self.env, &self.asset).mint(&user, &amount);
        user
    }
}
