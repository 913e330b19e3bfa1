use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};
use anchor_spl::token::Mint;

use crate::{
    constants::{CONFIG_SEED, NATIVE_ASSET, REWARDS_SEED, STAKE_SEED, USER_SEED, VAULT_SEED},
    engine::{self, Deposit},
    events::Staked,
    state::{AssetKind, StakeAccount, StakeConfig, UserAccount},
};

#[derive(Accounts)]
pub struct StakeSol<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, StakeConfig>,
    #[account(
        mut,
        seeds = [USER_SEED, user.key().as_ref()],
        bump = user_account.bump,
    )]
    pub user_account: Account<'info, UserAccount>,
    // native stakes are numbered by the user's running nonce
    #[account(
        init,
        payer = user,
        space = 8 + StakeAccount::INIT_SPACE,
        seeds = [
            STAKE_SEED,
            config.key().as_ref(),
            user.key().as_ref(),
            NATIVE_ASSET.as_ref(),
            user_account.stake_nonce.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub stake_account: Account<'info, StakeAccount>,
    #[account(
        mut,
        seeds = [VAULT_SEED, stake_account.key().as_ref()],
        bump,
    )]
    pub vault: SystemAccount<'info>,
    #[account(
        seeds = [REWARDS_SEED, config.key().as_ref()],
        bump = config.rewards_bump,
    )]
    pub reward_mint: Account<'info, Mint>,
    pub system_program: Program<'info, System>,
}

impl<'info> StakeSol<'info> {
    pub fn stake_sol(&mut self, amount: u64, bumps: &StakeSolBumps) -> Result<()> {
        // the vault address is public, lamports sent there early are swept
        // back to the owner on unstake
        let deposit = Deposit {
            owner: self.user.key(),
            kind: AssetKind::Native,
            amount,
            seed: self.user_account.stake_nonce,
            source_balance: self.user.lamports(),
            vault_balance: self.vault.lamports(),
            // a data-less system account below the rent floor cannot exist
            min_vault_balance: Rent::get()?.minimum_balance(0),
            now: Clock::get()?.unix_timestamp,
        };
        let stake = engine::open_stake(
            &self.config,
            &mut self.user_account,
            deposit,
            bumps.stake_account,
            bumps.vault,
        )?;

        let cpi_program = self.system_program.to_account_info();
        let cpi_accounts = Transfer {
            from: self.user.to_account_info(),
            to: self.vault.to_account_info(),
        };
        transfer(CpiContext::new(cpi_program, cpi_accounts), amount)?;

        self.stake_account.set_inner(stake);

        msg!(
            "staked {} lamports into {}",
            amount,
            self.stake_account.key()
        );
        emit!(Staked {
            owner: self.user.key(),
            stake_account: self.stake_account.key(),
            kind: AssetKind::Native,
            amount,
            staked_at: self.stake_account.staked_at,
            stake_count: self.user_account.stake_count,
        });

        Ok(())
    }
}
