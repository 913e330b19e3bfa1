//! Address derivations for every account the program owns or signs for.
//!
//! All of them hang off the config address, either directly (reward mint,
//! stake accounts) or through a stake account (vaults), so state from one
//! deployment can never be passed off as another's.
//!
//! The account constraints in `instructions` check the same seeds inline;
//! these functions are what off-chain callers use to find the accounts.
//! `verify_vault` is the one check the program runs through here, since
//! native vaults are bound by a bump stored on the stake account.

use anchor_lang::prelude::*;

use crate::{
    constants::{CONFIG_SEED, REWARDS_SEED, STAKE_SEED, USER_SEED, VAULT_SEED},
    error::StakeError,
    state::AssetKind,
};

pub fn config_address() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], &crate::ID)
}

pub fn reward_mint_address(config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REWARDS_SEED, config.as_ref()], &crate::ID)
}

pub fn user_address(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_SEED, owner.as_ref()], &crate::ID)
}

pub fn stake_address(config: &Pubkey, owner: &Pubkey, kind: &AssetKind, seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            STAKE_SEED,
            config.as_ref(),
            owner.as_ref(),
            kind.asset_id().as_ref(),
            &seed.to_le_bytes(),
        ],
        &crate::ID,
    )
}

pub fn vault_address(stake: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_SEED, stake.as_ref()], &crate::ID)
}

/// Checks `vault` against the native vault of `stake` using the bump
/// recorded at stake time.
pub fn verify_vault(stake: &Pubkey, vault: &Pubkey, vault_bump: u8) -> Result<()> {
    let expected = Pubkey::create_program_address(
        &[VAULT_SEED, stake.as_ref(), &[vault_bump]],
        &crate::ID,
    )
    .map_err(|_| StakeError::InvalidDerivation)?;
    require_keys_eq!(expected, *vault, StakeError::InvalidDerivation);
    Ok(())
}
