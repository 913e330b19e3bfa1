pub mod initialize_config;
pub use initialize_config::*;

pub mod initialize_user;
pub use initialize_user::*;

pub mod stake_sol;
pub use stake_sol::*;

pub mod stake_spl;
pub use stake_spl::*;

pub mod unstake_sol;
pub use unstake_sol::*;

pub mod unstake_spl;
pub use unstake_spl::*;

pub mod stake_nft;
pub use stake_nft::*;

pub mod unstake_nft;
pub use unstake_nft::*;
