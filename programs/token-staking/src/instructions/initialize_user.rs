use anchor_lang::prelude::*;

use crate::{constants::USER_SEED, engine, events::UserInitialized, state::UserAccount};

#[derive(Accounts)]
pub struct InitializeUser<'info> {
    #[account(mut)]
    pub user: Signer<'info>,
    #[account(
        init_if_needed,
        payer = user,
        space = 8 + UserAccount::INIT_SPACE,
        seeds = [USER_SEED, user.key().as_ref()],
        bump,
    )]
    pub user_account: Account<'info, UserAccount>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeUser<'info> {
    pub fn initialize_user(&mut self, bumps: &InitializeUserBumps) -> Result<()> {
        engine::initialize_user(&mut self.user_account, self.user.key(), bumps.user_account)?;

        msg!("user initialized: {}", self.user.key());
        emit!(UserInitialized {
            owner: self.user.key(),
        });

        Ok(())
    }
}
