use anchor_lang::prelude::*;

use crate::{constants::REWARD_DECIMALS, error::StakeError};

/// Turns a closed stake into a number of reward mint base units.
///
/// Implementations must be deterministic: the same `(amount, decimals,
/// elapsed)` always yields the same reward.
pub trait RewardPolicy {
    fn reward(&self, amount: u64, decimals: u8, elapsed: i64) -> Result<u64>;
}

/// Linear points schedule configured on `StakeConfig`.
///
/// Every whole staked unit earns `points_per_stake` whole reward tokens per
/// `reward_period` seconds, accrued pro-rata by the second:
///
/// ```text
/// amount * points_per_stake * elapsed * 10^REWARD_DECIMALS
/// --------------------------------------------------------
///           10^decimals * reward_period
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointsRate {
    pub points_per_stake: u8,
    pub reward_period: u32,
}

impl RewardPolicy for PointsRate {
    fn reward(&self, amount: u64, decimals: u8, elapsed: i64) -> Result<u64> {
        require!(self.reward_period > 0, StakeError::InvalidConfig);

        // negative elapsed time earns nothing
        let elapsed = u128::try_from(elapsed).unwrap_or(0);

        let numerator = u128::from(amount)
            .checked_mul(u128::from(self.points_per_stake))
            .and_then(|v| v.checked_mul(elapsed))
            .and_then(|v| v.checked_mul(10u128.pow(u32::from(REWARD_DECIMALS))))
            .ok_or(StakeError::Overflow)?;

        let denominator = 10u128
            .checked_pow(u32::from(decimals))
            .and_then(|v| v.checked_mul(u128::from(self.reward_period)))
            .ok_or(StakeError::Overflow)?;

        let reward = u64::try_from(numerator / denominator).map_err(|_| StakeError::Overflow)?;
        Ok(reward)
    }
}
