use anchor_lang::prelude::*;
use anchor_spl::token::{
    close_account, mint_to, transfer_checked, CloseAccount, Mint, MintTo, Token, TokenAccount,
    TransferChecked,
};

use crate::{
    constants::{CONFIG_SEED, REWARDS_SEED, STAKE_SEED, USER_SEED},
    engine::{self, Withdrawal},
    error::StakeError,
    events::Unstaked,
    state::{AssetKind, StakeAccount, StakeConfig, UserAccount},
};

#[derive(Accounts)]
pub struct UnstakeSpl<'info> {
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
    pub mint: Account<'info, Mint>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = user,
    )]
    pub user_mint_ata: Account<'info, TokenAccount>,
    #[account(
        mut,
        close = user,
        constraint = stake_account.owner == user.key() @ StakeError::NotOwner,
        constraint = stake_account.kind.fungible_mint() == Some(mint.key()) @ StakeError::InvalidDerivation,
        seeds = [
            STAKE_SEED,
            config.key().as_ref(),
            user.key().as_ref(),
            mint.key().as_ref(),
            stake_account.seed.to_le_bytes().as_ref(),
        ],
        bump = stake_account.bump,
    )]
    pub stake_account: Account<'info, StakeAccount>,
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = stake_account,
    )]
    pub vault_ata: Account<'info, TokenAccount>,
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

impl<'info> UnstakeSpl<'info> {
    pub fn unstake_spl(&mut self) -> Result<()> {
        let kind = AssetKind::Fungible {
            mint: self.mint.key(),
        };
        let withdrawal = Withdrawal {
            caller: self.user.key(),
            kind,
            vault_balance: self.vault_ata.amount,
            decimals: self.mint.decimals,
            now: Clock::get()?.unix_timestamp,
        };
        let policy = self.config.reward_rate(&kind);
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

        let config_key = self.config.key();
        let user_key = self.user.key();
        let mint_key = self.mint.key();
        let seed_bytes = self.stake_account.seed.to_le_bytes();
        let seeds = &[
            STAKE_SEED,
            config_key.as_ref(),
            user_key.as_ref(),
            mint_key.as_ref(),
            seed_bytes.as_ref(),
            &[self.stake_account.bump],
        ];
        let signer_seeds = &[&seeds[..]];

        let cpi_program = self.token_program.to_account_info();
        let cpi_accounts = TransferChecked {
            from: self.vault_ata.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.user_mint_ata.to_account_info(),
            authority: self.stake_account.to_account_info(),
        };
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        transfer_checked(cpi_ctx, settlement.sweep, self.mint.decimals)?;

        // vault rent goes back to the user
        let close_accounts = CloseAccount {
            account: self.vault_ata.to_account_info(),
            destination: self.user.to_account_info(),
            authority: self.stake_account.to_account_info(),
        };
        let close_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            close_accounts,
            signer_seeds,
        );
        close_account(close_ctx)?;

        msg!(
            "unstaked {} of mint {} from {}, reward {}",
            settlement.sweep,
            mint_key,
            self.stake_account.key(),
            settlement.reward
        );
        emit!(Unstaked {
            owner: user_key,
            stake_account: self.stake_account.key(),
            kind,
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
