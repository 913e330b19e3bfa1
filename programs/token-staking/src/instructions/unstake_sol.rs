use anchor_lang::{
    prelude::*,
    system_program::{transfer, Transfer},
};
use anchor_spl::token::{mint_to, Mint, MintTo, Token, TokenAccount};

use crate::{
    constants::{CONFIG_SEED, NATIVE_ASSET, NATIVE_DECIMALS, REWARDS_SEED, STAKE_SEED, USER_SEED, VAULT_SEED},
    engine::{self, Withdrawal},
    error::StakeError,
    events::Unstaked,
    state::{AssetKind, StakeAccount, StakeConfig, UserAccount},
};

#[derive(Accounts)]
pub struct UnstakeSol<'info> {
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
    #[account(
        mut,
        close = user,
        constraint = stake_account.owner == user.key() @ StakeError::NotOwner,
        constraint = stake_account.kind == AssetKind::Native @ StakeError::InvalidDerivation,
        seeds = [
            STAKE_SEED,
            config.key().as_ref(),
            user.key().as_ref(),
            NATIVE_ASSET.as_ref(),
            stake_account.seed.to_le_bytes().as_ref(),
        ],
        bump = stake_account.bump,
    )]
    pub stake_account: Account<'info, StakeAccount>,
    // checked against the bump recorded on the stake account
    #[account(mut)]
    pub vault: SystemAccount<'info>,
    #[account(
        mut,
        seeds = [REWARDS_SEED, config.key().as_ref()],
        bump = config.rewards_bump,
        mint::authority = config,
    )]
    pub reward_mint: Account<'info, Mint>,
    #[account(
        mut,
        associated_token::mint = reward_mint,
        associated_token::authority = user,
    )]
    pub user_reward_ata: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> UnstakeSol<'info> {
    pub fn unstake_sol(&mut self) -> Result<()> {
        let stake_key = self.stake_account.key();
        let vault_bump = self.stake_account.vault_bump;
        engine::verify_native_vault(&stake_key, &self.stake_account, &self.vault.key())?;

        let withdrawal = Withdrawal {
            caller: self.user.key(),
            kind: AssetKind::Native,
            vault_balance: self.vault.lamports(),
            decimals: NATIVE_DECIMALS,
            now: Clock::get()?.unix_timestamp,
        };
        let policy = self.config.reward_rate(&AssetKind::Native);
        let settlement = engine::close_stake(
            &self.config,
            &policy,
            &mut self.user_account,
            &self.stake_account,
            withdrawal,
        )?;

        if settlement.mints_reward() {
            self.reward_user(settlement.reward)?;
        }

        let seeds = &[VAULT_SEED, stake_key.as_ref(), &[vault_bump]];
        let signer_seeds = &[&seeds[..]];

        let cpi_program = self.system_program.to_account_info();
        let cpi_accounts = Transfer {
            from: self.vault.to_account_info(),
            to: self.user.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        transfer(cpi_ctx, settlement.sweep)?;

        msg!(
            "unstaked {} lamports from {}, reward {}",
            settlement.sweep,
            stake_key,
            settlement.reward
        );
        emit!(Unstaked {
            owner: self.user.key(),
            stake_account: stake_key,
            kind: AssetKind::Native,
            amount: settlement.amount,
            swept: settlement.sweep,
            reward: settlement.reward,
            elapsed: settlement.elapsed,
            stake_count: self.user_account.stake_count,
            points: self.user_account.points,
        });

        Ok(())
    }

    pub fn reward_user(&self, amount: u64) -> Result<()> {
        let cpi_program = self.token_program.to_account_info();
        let cpi_accounts = MintTo {
            mint: self.reward_mint.to_account_info(),
            to: self.user_reward_ata.to_account_info(),
            authority: self.config.to_account_info(),
        };
        let seeds = &[CONFIG_SEED, &[self.config.bump]];
        let signer_seeds = &[&seeds[..]];
        let ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        mint_to(ctx, amount)
    }
}
