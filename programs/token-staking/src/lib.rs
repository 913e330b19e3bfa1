#![allow(deprecated)]
#![allow(unexpected_cfgs)]
pub mod constants;
pub mod engine;
pub mod error;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod reward;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("4yGVsuiuqCPBQQi5AV55MCduLfh7ToeNpmbPUzcPPV1n");

#[program]
pub mod token_staking {
    use super::*;

    pub fn initialize_config(
        ctx: Context<InitializeConfig>,
        points_per_nft_stake: u8,
        points_per_spl_stake: u8,
        points_per_sol_stake: u8,
        freeze_period: u32,
    ) -> Result<()> {
        let params = engine::ConfigParams {
            points_per_nft_stake,
            points_per_spl_stake,
            points_per_sol_stake,
            freeze_period,
        };
        ctx.accounts.initialize_config(params, &ctx.bumps)
    }

    pub fn init_config(
        ctx: Context<InitializeConfig>,
        points_per_nft_stake: u8,
        points_per_spl_stake: u8,
        points_per_sol_stake: u8,
        freeze_period: u32,
    ) -> Result<()> {
        initialize_config(
            ctx,
            points_per_nft_stake,
            points_per_spl_stake,
            points_per_sol_stake,
            freeze_period,
        )
    }

    pub fn initialize_user(ctx: Context<InitializeUser>) -> Result<()> {
        ctx.accounts.initialize_user(&ctx.bumps)
    }

    pub fn init_user(ctx: Context<InitializeUser>) -> Result<()> {
        initialize_user(ctx)
    }

    pub fn stake_sol(ctx: Context<StakeSol>, amount: u64) -> Result<()> {
        ctx.accounts.stake_sol(amount, &ctx.bumps)
    }

    pub fn stake_spl(ctx: Context<StakeSpl>, seed: u64, amount: u64) -> Result<()> {
        ctx.accounts.stake_spl(seed, amount, &ctx.bumps)
    }

    pub fn stake_nft(ctx: Context<StakeNft>, seed: u64) -> Result<()> {
        ctx.accounts.stake_nft(seed, &ctx.bumps)
    }

    pub fn unstake_sol(ctx: Context<UnstakeSol>) -> Result<()> {
        ctx.accounts.unstake_sol()
    }

    pub fn unstake_spl(ctx: Context<UnstakeSpl>) -> Result<()> {
        ctx.accounts.unstake_spl()
    }

    pub fn unstake_nft(ctx: Context<UnstakeNft>) -> Result<()> {
        ctx.accounts.unstake_nft()
    }
}
