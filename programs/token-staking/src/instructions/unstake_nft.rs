use anchor_lang::prelude::*;
use anchor_spl::{
    metadata::{
        mpl_token_metadata::instructions::{
            ThawDelegatedAccountCpi, ThawDelegatedAccountCpiAccounts,
        },
        MasterEditionAccount, Metadata,
    },
    token::{mint_to, revoke, Mint, MintTo, Revoke, Token, TokenAccount},
};

use crate::{
    constants::{CONFIG_SEED, REWARDS_SEED, STAKE_SEED, USER_SEED},
    engine::{self, Withdrawal},
    error::StakeError,
    events::Unstaked,
    state::{AssetKind, StakeAccount, StakeConfig, UserAccount},
};

#[derive(Accounts)]
pub struct UnstakeNft<'info> {
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
    pub mint_ata: Account<'info, TokenAccount>,
    #[account(
        seeds = [
            b"metadata",
            metadata_program.key().as_ref(),
            mint.key().as_ref(),
            b"edition"
        ],
        seeds::program = metadata_program.key(),
        bump,
    )]
    pub edition: Account<'info, MasterEditionAccount>,
    #[account(
        mut,
        close = user,
        constraint = stake_account.owner == user.key() @ StakeError::NotOwner,
        constraint = stake_account.kind.nft_mint() == Some(mint.key()) @ StakeError::InvalidDerivation,
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
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

impl<'info> UnstakeNft<'info> {
    pub fn unstake_nft(&mut self) -> Result<()> {
        let kind = AssetKind::Nft {
            mint: self.mint.key(),
        };
        let withdrawal = Withdrawal {
            caller: self.user.key(),
            kind,
            vault_balance: self.mint_ata.amount,
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

        let delegate = &self.stake_account.to_account_info();
        let token_account = &self.mint_ata.to_account_info();
        let edition = &self.edition.to_account_info();
        let mint = &self.mint.to_account_info();
        let token_program = &self.token_program.to_account_info();
        let metadata_program = &self.metadata_program.to_account_info();

        ThawDelegatedAccountCpi::new(
            metadata_program,
            ThawDelegatedAccountCpiAccounts {
                delegate,
                token_account,
                edition,
                mint,
                token_program,
            },
        )
        .invoke_signed(signer_seeds)?;

        let cpi_program = self.token_program.to_account_info();
        let cpi_accounts = Revoke {
            source: self.mint_ata.to_account_info(),
            authority: self.user.to_account_info(),
        };
        revoke(CpiContext::new(cpi_program, cpi_accounts))?;

        msg!(
            "unstaked nft {} from {}, reward {}",
            mint_key,
            self.stake_account.key(),
            settlement.reward
        );
        emit!(Unstaked {
            owner: user_key,
            stake_account: self.stake_account.key(),
            kind,
            amount: settlement.amount,
            swept: 0,
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
