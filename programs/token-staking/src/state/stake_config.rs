use anchor_lang::prelude::*;

use crate::{constants::REWARD_PERIOD, reward::PointsRate, state::AssetKind};

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct StakeConfig {
    // program upgrade authority at the time of initialize_config
    pub admin: Pubkey,
    // whole reward tokens earned per staked NFT per reward period
    pub points_per_nft_stake: u8,
    // whole reward tokens earned per whole token per reward period
    pub points_per_spl_stake: u8,
    // whole reward tokens earned per SOL per reward period
    pub points_per_sol_stake: u8,
    // open stake accounts allowed per user
    pub max_stake: u8,
    // seconds a stake stays locked
    pub freeze_period: u32,
    pub reward_mint: Pubkey,
    pub rewards_bump: u8,
    pub bump: u8,
}

impl StakeConfig {
    /// A freshly allocated config is all zeroes, so a default admin means
    /// nobody has initialized it yet.
    pub fn is_initialized(&self) -> bool {
        self.admin != Pubkey::default()
    }

    pub fn points_per_stake(&self, kind: &AssetKind) -> u8 {
        match kind {
            AssetKind::Native => self.points_per_sol_stake,
            AssetKind::Fungible { .. } => self.points_per_spl_stake,
            AssetKind::Nft { .. } => self.points_per_nft_stake,
        }
    }

    pub fn reward_rate(&self, kind: &AssetKind) -> PointsRate {
        PointsRate {
            points_per_stake: self.points_per_stake(kind),
            reward_period: REWARD_PERIOD,
        }
    }

    pub fn is_unfrozen(&self, staked_at: i64, now: i64) -> bool {
        now.checked_sub(staked_at)
            .is_some_and(|elapsed| elapsed >= i64::from(self.freeze_period))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(freeze_period: u32) -> StakeConfig {
        StakeConfig {
            admin: Pubkey::new_unique(),
            points_per_nft_stake: 8,
            points_per_spl_stake: 4,
            points_per_sol_stake: 2,
            max_stake: 10,
            freeze_period,
            reward_mint: Pubkey::new_unique(),
            rewards_bump: 254,
            bump: 255,
        }
    }

    #[test]
    fn init_space_is_fixed_width() {
        assert_eq!(StakeConfig::INIT_SPACE, 32 + 1 + 1 + 1 + 1 + 4 + 32 + 1 + 1);
    }

    #[test]
    fn zeroed_config_is_uninitialized() {
        let mut cfg = config(10);
        assert!(cfg.is_initialized());
        cfg.admin = Pubkey::default();
        assert!(!cfg.is_initialized());
    }

    #[test]
    fn each_asset_kind_earns_its_own_rate() {
        let cfg = config(0);
        let mint = Pubkey::new_unique();

        assert_eq!(cfg.points_per_stake(&AssetKind::Native), 2);
        assert_eq!(cfg.points_per_stake(&AssetKind::Fungible { mint }), 4);
        assert_eq!(cfg.points_per_stake(&AssetKind::Nft { mint }), 8);

        let rate = cfg.reward_rate(&AssetKind::Nft { mint });
        assert_eq!(rate.points_per_stake, 8);
        assert_eq!(rate.reward_period, REWARD_PERIOD);
    }

    #[test]
    fn freeze_boundary_is_inclusive() {
        let cfg = config(86_400);
        assert!(!cfg.is_unfrozen(1_000, 1_000));
        assert!(!cfg.is_unfrozen(1_000, 4_600));
        assert!(!cfg.is_unfrozen(1_000, 87_399));
        assert!(cfg.is_unfrozen(1_000, 87_400));
        assert!(cfg.is_unfrozen(1_000, 1_000_000));
    }

    #[test]
    fn clock_behind_stake_or_overflow_is_still_frozen() {
        let cfg = config(0);
        assert!(!cfg.is_unfrozen(100, 99));
        assert!(!cfg.is_unfrozen(i64::MIN + 1, i64::MAX));
    }
}
