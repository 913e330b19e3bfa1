use anchor_lang::prelude::*;
use anchor_spl::{
    metadata::{
        mpl_token_metadata::instructions::{
            FreezeDelegatedAccountCpi, FreezeDelegatedAccountCpiAccounts,
        },
        MasterEditionAccount, Metadata, MetadataAccount,
    },
    token::{approve, Approve, Mint, Token, TokenAccount},
};

use crate::{
    constants::{CONFIG_SEED, REWARDS_SEED, STAKE_SEED, USER_SEED},
    engine::{self, Deposit},
    error::StakeError,
    events::Staked,
    state::{AssetKind, StakeAccount, StakeConfig, UserAccount},
};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct StakeNft<'info> {
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
    // The mint of the NFT being staked
    pub mint: Account<'info, Mint>,
    // The collection mint of the NFT
    pub collection_mint: Account<'info, Mint>,
    // nft's associated token account, frozen while staked
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
            mint.key().as_ref()
        ],
        seeds::program = metadata_program.key(),
        bump,
        // only NFTs of a verified collection can be staked
        constraint = metadata
            .collection
            .as_ref()
            .is_some_and(|c| c.verified && c.key.as_ref() == collection_mint.key().as_ref())
            @ StakeError::InvalidCollection,
    )]
    pub metadata: Account<'info, MetadataAccount>,
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
    #[account(
        seeds = [REWARDS_SEED, config.key().as_ref()],
        bump = config.rewards_bump,
    )]
    pub reward_mint: Account<'info, Mint>,
    #[account(
        associated_token::mint = reward_mint,
        associated_token::authority = user,
    )]
    pub user_reward_ata: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
}

impl<'info> StakeNft<'info> {
    pub fn stake_nft(&mut self, seed: u64, bumps: &StakeNftBumps) -> Result<()> {
        let kind = AssetKind::Nft {
            mint: self.mint.key(),
        };
        // the NFT never leaves the user's token account
        let deposit = Deposit {
            owner: self.user.key(),
            kind,
            amount: 1,
            seed,
            source_balance: self.mint_ata.amount,
            vault_balance: 0,
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
        let cpi_accounts = Approve {
            to: self.mint_ata.to_account_info(),
            // the stake account becomes the delegate that freezes and thaws
            delegate: self.stake_account.to_account_info(),
            authority: self.user.to_account_info(),
        };
        approve(CpiContext::new(cpi_program, cpi_accounts), 1)?;

        let config_key = self.config.key();
        let user_key = self.user.key();
        let mint_key = self.mint.key();
        let seed_bytes = seed.to_le_bytes();
        let seeds = &[
            STAKE_SEED,
            config_key.as_ref(),
            user_key.as_ref(),
            mint_key.as_ref(),
            seed_bytes.as_ref(),
            &[bumps.stake_account],
        ];
        let signer_seeds = &[&seeds[..]];

        let delegate = &self.stake_account.to_account_info();
        let token_account = &self.mint_ata.to_account_info();
        let edition = &self.edition.to_account_info();
        let mint = &self.mint.to_account_info();
        let token_program = &self.token_program.to_account_info();
        let metadata_program = &self.metadata_program.to_account_info();

        // lock the NFT so it cannot be transferred or burned
        FreezeDelegatedAccountCpi::new(
            metadata_program,
            FreezeDelegatedAccountCpiAccounts {
                delegate,
                token_account,
                edition,
                mint,
                token_program,
            },
        )
        .invoke_signed(signer_seeds)?;

        self.stake_account.set_inner(stake);

        msg!("staked nft {} into {}", mint_key, self.stake_account.key());
        emit!(Staked {
            owner: user_key,
            stake_account: self.stake_account.key(),
            kind,
            amount: 1,
            staked_at: self.stake_account.staked_at,
            stake_count: self.user_account.stake_count,
        });

        Ok(())
    }
}
