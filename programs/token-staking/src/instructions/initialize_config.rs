use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::{
    constants::{CONFIG_SEED, REWARDS_SEED, REWARD_DECIMALS},
    engine::{self, ConfigParams},
    error::StakeError,
    events::ConfigInitialized,
    program::TokenStaking,
    state::StakeConfig,
};

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    // may already exist, the handler rejects a second initialization
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + StakeConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump,
    )]
    pub config: Account<'info, StakeConfig>,
    // reward tokens can only be minted by the config PDA
    #[account(
        init_if_needed,
        payer = admin,
        seeds = [REWARDS_SEED, config.key().as_ref()],
        bump,
        mint::decimals = REWARD_DECIMALS,
        mint::authority = config,
    )]
    pub reward_mint: Account<'info, Mint>,
    #[account(
        constraint = program.programdata_address()? == Some(program_data.key()) @ StakeError::InvalidDerivation,
    )]
    pub program: Program<'info, TokenStaking>,
    // holds the upgrade authority allowed to create the config
    pub program_data: Account<'info, ProgramData>,
    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}

impl<'info> InitializeConfig<'info> {
    pub fn initialize_config(
        &mut self,
        params: ConfigParams,
        bumps: &InitializeConfigBumps,
    ) -> Result<()> {
        engine::initialize_config(
            &mut self.config,
            self.admin.key(),
            self.program_data.upgrade_authority_address,
            params,
            self.reward_mint.key(),
            bumps.reward_mint,
            bumps.config,
        )?;

        msg!(
            "config initialized by {}: points nft {} spl {} sol {}, freeze {}s",
            self.admin.key(),
            params.points_per_nft_stake,
            params.points_per_spl_stake,
            params.points_per_sol_stake,
            params.freeze_period
        );
        emit!(ConfigInitialized {
            admin: self.admin.key(),
            reward_mint: self.reward_mint.key(),
            points_per_nft_stake: params.points_per_nft_stake,
            points_per_spl_stake: params.points_per_spl_stake,
            points_per_sol_stake: params.points_per_sol_stake,
            max_stake: self.config.max_stake,
            freeze_period: params.freeze_period,
        });

        Ok(())
    }
}
