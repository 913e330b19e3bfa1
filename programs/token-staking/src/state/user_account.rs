use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct UserAccount {
    pub owner: Pubkey,
    // reward units minted to this user so far
    pub points: u64,
    // open stake accounts
    pub stake_count: u8,
    // lamports currently locked in this user's native vaults
    pub native_staked: u64,
    // token base units currently locked, summed over mints
    pub spl_staked: u64,
    // NFTs currently frozen in place
    pub nft_staked: u64,
    // seed of the next native stake account, only ever grows
    pub stake_nonce: u64,
    pub bump: u8,
}

// user have many stake accounts

impl UserAccount {
    pub fn new(owner: Pubkey, bump: u8) -> Self {
        Self {
            owner,
            points: 0,
            stake_count: 0,
            native_staked: 0,
            spl_staked: 0,
            nft_staked: 0,
            stake_nonce: 0,
            bump,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_starts_empty() {
        let owner = Pubkey::new_unique();
        let user = UserAccount::new(owner, 253);

        assert!(user.is_initialized());
        assert_eq!(user.owner, owner);
        assert_eq!(user.points, 0);
        assert_eq!(user.stake_count, 0);
        assert_eq!(user.native_staked, 0);
        assert_eq!(user.spl_staked, 0);
        assert_eq!(user.nft_staked, 0);
        assert_eq!(user.stake_nonce, 0);
        assert_eq!(user.bump, 253);
    }

    #[test]
    fn default_owner_is_uninitialized() {
        assert!(!UserAccount::new(Pubkey::default(), 0).is_initialized());
    }

    #[test]
    fn init_space_is_fixed_width() {
        assert_eq!(UserAccount::INIT_SPACE, 32 + 8 + 1 + 8 + 8 + 8 + 8 + 1);
    }
}
