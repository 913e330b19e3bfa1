use anchor_lang::prelude::*;

#[error_code]
pub enum StakeError {
    #[msg("Account is already initialized")]
    AlreadyInitialized,
    #[msg("Signer is not the config admin")]
    Unauthorized,
    #[msg("Account does not match its expected derivation")]
    InvalidDerivation,
    #[msg("Insufficient funds to stake")]
    InsufficientFunds,
    #[msg("Maximum number of open stakes reached")]
    StakeLimitReached,
    #[msg("Freeze period has not passed")]
    StillFrozen,
    #[msg("Stake account is owned by another user")]
    NotOwner,
    #[msg("Vault balance does not match the recorded stake")]
    Inconsistent,
    #[msg("Stake amount is invalid")]
    InvalidAmount,
    #[msg("Invalid config parameters")]
    InvalidConfig,
    #[msg("Arithmetic overflow")]
    Overflow,
    #[msg("NFT is not part of a verified collection")]
    InvalidCollection,
}
