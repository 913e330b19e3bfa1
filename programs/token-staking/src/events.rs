use anchor_lang::prelude::*;

use crate::state::AssetKind;

#[event]
#[derive(Debug)]
pub struct ConfigInitialized {
    pub admin: Pubkey,
    pub reward_mint: Pubkey,
    pub points_per_nft_stake: u8,
    pub points_per_spl_stake: u8,
    pub points_per_sol_stake: u8,
    pub max_stake: u8,
    pub freeze_period: u32,
}

#[event]
#[derive(Debug)]
pub struct UserInitialized {
    pub owner: Pubkey,
}

#[event]
#[derive(Debug)]
pub struct Staked {
    pub owner: Pubkey,
    pub stake_account: Pubkey,
    pub kind: AssetKind,
    pub amount: u64,
    pub staked_at: i64,
    pub stake_count: u8,
}

#[event]
#[derive(Debug)]
pub struct Unstaked {
    pub owner: Pubkey,
    pub stake_account: Pubkey,
    pub kind: AssetKind,
    pub amount: u64,
    // vault balance handed back, at least amount
    pub swept: u64,
    pub reward: u64,
    pub elapsed: i64,
    pub stake_count: u8,
    pub points: u64,
}
