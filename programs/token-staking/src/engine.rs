//! State transitions behind every instruction.
//!
//! Handlers load accounts and perform the CPIs; everything that decides
//! whether an operation is allowed and how the records change lives here.
//! Each transition validates all of its preconditions before touching the
//! records it was handed, so a failed call leaves them untouched.

use anchor_lang::prelude::*;

use crate::{
    constants::MAX_STAKE,
    error::StakeError,
    pda,
    reward::RewardPolicy,
    state::{AssetKind, StakeAccount, StakeConfig, UserAccount},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfigParams {
    pub points_per_nft_stake: u8,
    pub points_per_spl_stake: u8,
    pub points_per_sol_stake: u8,
    pub freeze_period: u32,
}

/// A deposit about to be locked.
#[derive(Clone, Copy, Debug)]
pub struct Deposit {
    pub owner: Pubkey,
    pub kind: AssetKind,
    pub amount: u64,
    pub seed: u64,
    /// What the owner holds of the staked asset right now.
    pub source_balance: u64,
    /// What the vault already holds before the deposit lands.
    pub vault_balance: u64,
    /// Smallest balance the vault may end up with.
    pub min_vault_balance: u64,
    pub now: i64,
}

/// An unstake request against an open stake account.
#[derive(Clone, Copy, Debug)]
pub struct Withdrawal {
    pub caller: Pubkey,
    pub kind: AssetKind,
    pub vault_balance: u64,
    pub decimals: u8,
    pub now: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    /// Principal recorded at stake time.
    pub amount: u64,
    /// Everything the vault holds, handed back on close.
    pub sweep: u64,
    /// Reward units to mint.
    pub reward: u64,
    pub elapsed: i64,
}

impl Settlement {
    pub fn mints_reward(&self) -> bool {
        self.reward > 0
    }
}

/// Per-kind totals carried on the user record.
#[derive(Clone, Copy)]
struct Totals {
    native: u64,
    spl: u64,
    nft: u64,
}

impl Totals {
    fn of(user: &UserAccount) -> Self {
        Self {
            native: user.native_staked,
            spl: user.spl_staked,
            nft: user.nft_staked,
        }
    }

    fn add(mut self, kind: &AssetKind, amount: u64) -> Result<Self> {
        match kind {
            AssetKind::Native => {
                self.native = self.native.checked_add(amount).ok_or(StakeError::Overflow)?
            }
            AssetKind::Fungible { .. } => {
                self.spl = self.spl.checked_add(amount).ok_or(StakeError::Overflow)?
            }
            AssetKind::Nft { .. } => self.nft = self.nft.checked_add(1).ok_or(StakeError::Overflow)?,
        }
        Ok(self)
    }

    fn sub(mut self, kind: &AssetKind, amount: u64) -> Result<Self> {
        match kind {
            AssetKind::Native => {
                self.native = self.native.checked_sub(amount).ok_or(StakeError::Inconsistent)?
            }
            AssetKind::Fungible { .. } => {
                self.spl = self.spl.checked_sub(amount).ok_or(StakeError::Inconsistent)?
            }
            AssetKind::Nft { .. } => {
                self.nft = self.nft.checked_sub(1).ok_or(StakeError::Inconsistent)?
            }
        }
        Ok(self)
    }

    fn store(self, user: &mut UserAccount) {
        user.native_staked = self.native;
        user.spl_staked = self.spl;
        user.nft_staked = self.nft;
    }
}

/// `upgrade_authority` is the program's upgrade authority as recorded in
/// its program data account; only that key may create the config.
pub fn initialize_config(
    config: &mut StakeConfig,
    admin: Pubkey,
    upgrade_authority: Option<Pubkey>,
    params: ConfigParams,
    reward_mint: Pubkey,
    rewards_bump: u8,
    bump: u8,
) -> Result<()> {
    if config.is_initialized() {
        require_keys_eq!(config.admin, admin, StakeError::Unauthorized);
        return err!(StakeError::AlreadyInitialized);
    }
    require!(upgrade_authority == Some(admin), StakeError::Unauthorized);

    *config = StakeConfig {
        admin,
        points_per_nft_stake: params.points_per_nft_stake,
        points_per_spl_stake: params.points_per_spl_stake,
        points_per_sol_stake: params.points_per_sol_stake,
        max_stake: MAX_STAKE,
        freeze_period: params.freeze_period,
        reward_mint,
        rewards_bump,
        bump,
    };
    Ok(())
}

pub fn initialize_user(user: &mut UserAccount, owner: Pubkey, bump: u8) -> Result<()> {
    require!(!user.is_initialized(), StakeError::AlreadyInitialized);
    *user = UserAccount::new(owner, bump);
    Ok(())
}

/// Validates a deposit, books it on the user record and returns the new
/// stake account. The caller moves or freezes the asset.
pub fn open_stake(
    config: &StakeConfig,
    user: &mut UserAccount,
    deposit: Deposit,
    bump: u8,
    vault_bump: u8,
) -> Result<StakeAccount> {
    require_keys_eq!(user.owner, deposit.owner, StakeError::NotOwner);
    require!(deposit.amount > 0, StakeError::InvalidAmount);
    if let AssetKind::Nft { .. } = deposit.kind {
        require!(deposit.amount == 1, StakeError::InvalidAmount);
    }
    // anything already sitting in the vault is swept back on unstake
    let vault_total = deposit
        .vault_balance
        .checked_add(deposit.amount)
        .ok_or(StakeError::Overflow)?;
    require!(vault_total >= deposit.min_vault_balance, StakeError::InvalidAmount);
    if deposit.kind == AssetKind::Native {
        require!(deposit.seed == user.stake_nonce, StakeError::InvalidDerivation);
    }
    require!(user.stake_count < config.max_stake, StakeError::StakeLimitReached);
    require!(deposit.source_balance >= deposit.amount, StakeError::InsufficientFunds);

    let stake_count = user.stake_count.checked_add(1).ok_or(StakeError::Overflow)?;
    let totals = Totals::of(user).add(&deposit.kind, deposit.amount)?;
    let stake_nonce = match deposit.kind {
        AssetKind::Native => user.stake_nonce.checked_add(1).ok_or(StakeError::Overflow)?,
        _ => user.stake_nonce,
    };

    user.stake_count = stake_count;
    user.stake_nonce = stake_nonce;
    totals.store(user);

    Ok(StakeAccount {
        owner: deposit.owner,
        kind: deposit.kind,
        amount: deposit.amount,
        staked_at: deposit.now,
        seed: deposit.seed,
        bump,
        vault_bump,
    })
}

/// Validates an unstake, prices the reward on the recorded principal and
/// books the close on the user record. The caller mints the reward, sweeps
/// the vault and closes the stake account.
pub fn close_stake<P: RewardPolicy>(
    config: &StakeConfig,
    policy: &P,
    user: &mut UserAccount,
    stake: &StakeAccount,
    withdrawal: Withdrawal,
) -> Result<Settlement> {
    require_keys_eq!(stake.owner, withdrawal.caller, StakeError::NotOwner);
    require_keys_eq!(user.owner, withdrawal.caller, StakeError::NotOwner);
    require!(stake.kind == withdrawal.kind, StakeError::InvalidDerivation);
    require!(
        config.is_unfrozen(stake.staked_at, withdrawal.now),
        StakeError::StillFrozen
    );
    // outside deposits only add to a vault, a shortfall means corrupted state
    require!(
        withdrawal.vault_balance >= stake.amount,
        StakeError::Inconsistent
    );

    let elapsed = stake.elapsed(withdrawal.now).ok_or(StakeError::Overflow)?;
    let reward = policy.reward(stake.amount, withdrawal.decimals, elapsed)?;

    let stake_count = user.stake_count.checked_sub(1).ok_or(StakeError::Inconsistent)?;
    let points = user.points.checked_add(reward).ok_or(StakeError::Overflow)?;
    let totals = Totals::of(user).sub(&stake.kind, stake.amount)?;

    user.stake_count = stake_count;
    user.points = points;
    totals.store(user);

    Ok(Settlement {
        amount: stake.amount,
        sweep: withdrawal.vault_balance,
        reward,
        elapsed,
    })
}

/// Checks that `vault` is the native vault bound to `stake` at stake time.
pub fn verify_native_vault(stake_key: &Pubkey, stake: &StakeAccount, vault: &Pubkey) -> Result<()> {
    require!(stake.kind == AssetKind::Native, StakeError::InvalidDerivation);
    pda::verify_vault(stake_key, vault, stake.vault_bump)
}
