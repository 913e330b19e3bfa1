use anchor_lang::prelude::*;

pub const CONFIG_SEED: &[u8] = b"config";
pub const REWARDS_SEED: &[u8] = b"rewards";
pub const USER_SEED: &[u8] = b"user";
pub const STAKE_SEED: &[u8] = b"stake";
pub const VAULT_SEED: &[u8] = b"vault";

/// Decimals of the reward mint; one point is one whole reward token.
pub const REWARD_DECIMALS: u8 = 6;

/// Lamports per SOL expressed as decimals, used when pricing native stakes.
pub const NATIVE_DECIMALS: u8 = 9;

/// Seconds over which a whole staked unit earns its configured points.
pub const REWARD_PERIOD: u32 = 86_400;

/// Open stake accounts allowed per user.
pub const MAX_STAKE: u8 = 10;

// Native positions are keyed by the system program id in place of a mint.
// No token mint can live at that address, so native and token positions
// never share a derivation.
pub const NATIVE_ASSET: Pubkey = anchor_lang::system_program::ID;
