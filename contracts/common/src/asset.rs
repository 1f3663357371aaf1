use soroban_sdk::{token, Address, Env};

use crate::{lifecycle, VaultError};

// ── Asset collaborator ───────────────────────────────────────────────────────
//
// The external asset is any contract implementing the Soroban token
// interface. Transfers go through `try_transfer` so a rejected transfer
// (missing allowance, insufficient funds) surfaces as `AssetTransferFailed`
// and the host rolls back everything the calling operation wrote.

/// Pulls `amount` of the vault asset from `from` into the vault.
pub fn transfer_in(env: &Env, from: &Address, amount: i128) -> Result<(), VaultError> {
    let asset = lifecycle::asset(env)?;
    match token::Client::new(env, &asset).try_transfer(
        from,
        &env.current_contract_address(),
        &amount,
    ) {
        Ok(Ok(())) => Ok(()),
        _ => Err(VaultError::AssetTransferFailed),
    }
}

/// Pays `amount` of the vault asset out to `to`.
///
/// Callers finalise every ledger write before calling this.
pub fn transfer_out(env: &Env, to: &Address, amount: i128) -> Result<(), VaultError> {
    let asset = lifecycle::asset(env)?;
    match token::Client::new(env, &asset).try_transfer(
        &env.current_contract_address(),
        to,
        &amount,
    ) {
        Ok(Ok(())) => Ok(()),
        _ => Err(VaultError::AssetTransferFailed),
    }
}
