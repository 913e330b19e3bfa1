use anchor_lang::prelude::*;

use crate::constants::NATIVE_ASSET;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    // lamports held in a system-owned vault
    Native,
    // tokens held in an associated token account of the stake account
    Fungible { mint: Pubkey },
    // NFT frozen in the owner's token account, stake account as delegate
    Nft { mint: Pubkey },
}

impl AssetKind {
    /// Address mixed into the stake account seeds for this asset.
    pub fn asset_id(&self) -> Pubkey {
        match self {
            AssetKind::Native => NATIVE_ASSET,
            AssetKind::Fungible { mint } | AssetKind::Nft { mint } => *mint,
        }
    }

    pub fn fungible_mint(&self) -> Option<Pubkey> {
        match self {
            AssetKind::Fungible { mint } => Some(*mint),
            _ => None,
        }
    }

    pub fn nft_mint(&self) -> Option<Pubkey> {
        match self {
            AssetKind::Nft { mint } => Some(*mint),
            _ => None,
        }
    }
}

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct StakeAccount {
    pub owner: Pubkey,
    pub kind: AssetKind,
    // lamports, token base units, or 1 for an NFT
    pub amount: u64,
    // The time when the stake was opened
    pub staked_at: i64,
    pub seed: u64,
    pub bump: u8,
    // bump of the native vault, unused for other kinds
    pub vault_bump: u8,
}

impl StakeAccount {
    pub fn elapsed(&self, now: i64) -> Option<i64> {
        now.checked_sub(self.staked_at)
    }
}
