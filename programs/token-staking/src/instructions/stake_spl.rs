use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked},
};

use crate::{
    constants::{CONFIG_SEED, REWARDS_SEED, STAKE_SEED, USER_SEED},
    engine::{self, Deposit},
    events::Staked,
    state::{AssetKind, StakeAccount, StakeConfig, UserAccount},
};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct StakeSpl<'info> {
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
    // The mint of the token being staked
    pub mint: Account<'info, Mint>,
    // user's token account, source of the deposit
    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = user,
    )]
    pub user_mint_ata: Account<'info, TokenAccount>,
    #[account(
        init,
        payer = user,
        space = 8 + StakeAccount::INIT_SPACE,
        seeds = [
            STAKE_SEED,
            config.key().as_ref(),
            user.key().as_ref(),
            mint.key().as_ref(),
            seed.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub stake_account: Account<'info, StakeAccount>,
    // escrow, only the stake account can move tokens out of it. Anyone can
    // create an associated token account, so an existing one is adopted.
    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint,
        associated_token::authority = stake_account,
    )]
    pub vault_ata: Account<'info, TokenAccount>,
    #[account(
        seeds = [REWARDS_SEED, config.key().as_ref()],
        bump = config.rewards_bump,
    )]
    pub reward_mint: Account<'info, Mint>,
    // must exist up front so the unstake reward has somewhere to land
    #[account(
        associated_token::mint = reward_mint,
        associated_token::authority = user,
    )]
    pub user_reward_ata: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> StakeSpl<'info> {
    pub fn stake_spl(&mut self, seed: u64, amount: u64, bumps: &StakeSplBumps) -> Result<()> {
        let kind = AssetKind::Fungible {
            mint: self.mint.key(),
        };
        let deposit = Deposit {
            owner: self.user.key(),
            kind,
            amount,
            seed,
            source_balance: self.user_mint_ata.amount,
            vault_balance: self.vault_ata.amount,
            min_vault_balance: 0,
            now: Clock::get()?.unix_timestamp,
        };
        let stake = engine::open_stake(
            &self.config,
            &mut self.user_account,
            deposit,
            bumps.stake_account,
            0,
        )?;

        let cpi_program = self.token_program.to_account_info();
        let cpi_accounts = TransferChecked {
            from: self.user_mint_ata.to_account_info(),
            mint: self.mint.to_account_info(),
            to: self.vault_ata.to_account_info(),
            authority: self.user.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
        transfer_checked(cpi_ctx, amount, self.mint.decimals)?;

        self.stake_account.set_inner(stake);

        msg!(
            "staked {} of mint {} into {}",
            amount,
            self.mint.key(),
            self.stake_account.key()
        );
        emit!(Staked {
            owner: self.user.key(),
            stake_account: self.stake_account.key(),
            kind,
            amount,
            staked_at: self.stake_account.staked_at,
            stake_count: self.user_account.stake_count,
        });

        Ok(())
    }
}
