use anchor_lang::prelude::*;

#[event]
pub struct LedgerCreated {
    pub ledger: Pubkey,
    pub creator: Pubkey,
    pub mint: Pubkey,
    pub name: String,
    pub symbol: String,
    pub rate_per_follower: u64,
    pub rate_per_post: u64,
    pub supply_cap: Option<u64>,
    pub initial_followers: u64,
    pub fee_paid: u64,
    pub timestamp: i64,
}

#[event]
pub struct FollowerCountUpdated {
    pub ledger: Pubkey,
    pub creator: Pubkey,
    pub previous_count: u64,
    pub new_count: u64,
    pub minted: u64,
    pub timestamp: i64,
}

#[event]
pub struct PostCountUpdated {
    pub ledger: Pubkey,
    pub creator: Pubkey,
    pub previous_count: u64,
    pub new_count: u64,
    pub minted: u64,
    pub timestamp: i64,
}

#[event]
pub struct MilestoneAchieved {
    pub ledger: Pubkey,
    pub milestone_index: u32,
    pub threshold: u64,
    pub reward: u64,
    pub timestamp: i64,
}

#[event]
pub struct MilestoneAdded {
    pub ledger: Pubkey,
    pub milestone_index: u32,
    pub threshold: u64,
    pub reward: u64,
}

#[event]
pub struct TokensBurned {
    pub ledger: Pubkey,
    pub creator: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub reason: String,
    pub remaining_supply: u64,
    pub timestamp: i64,
}

#[event]
pub struct RatesUpdated {
    pub ledger: Pubkey,
    pub rate_per_follower: u64,
    pub rate_per_post: u64,
}

#[event]
pub struct LedgerOracleRotated {
    pub ledger: Pubkey,
    pub previous: Pubkey,
    pub current: Pubkey,
}

#[event]
pub struct FactoryInitialized {
    pub admin: Pubkey,
    pub fee_recipient: Pubkey,
    pub creation_fee: u64,
    pub default_oracle: Pubkey,
}

#[event]
pub struct CreationFeeUpdated {
    pub creation_fee: u64,
    pub fee_recipient: Pubkey,
}

#[event]
pub struct FactoryPauseToggled {
    pub paused: bool,
}

#[event]
pub struct DefaultOracleRotated {
    pub previous: Pubkey,
    pub current: Pubkey,
}
