use anchor_lang::prelude::*;

#[event]
pub struct BadgeMinted {
    pub badge_id: u64,
    pub creator: Pubkey,
    pub handle: String,
    pub platform: String,
    pub initial_followers: u64,
    pub timestamp: i64,
}

#[event]
pub struct ProfileUpdated {
    pub badge_id: u64,
    pub creator: Pubkey,
    pub image_ref: String,
    pub engagement_score: u64,
}

#[event]
pub struct BadgeStatusChanged {
    pub badge_id: u64,
    pub creator: Pubkey,
    pub active: bool,
}

#[event]
pub struct BadgeRevoked {
    pub badge_id: u64,
    pub creator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct MinterAdded {
    pub minter: Pubkey,
}

#[event]
pub struct MinterRemoved {
    pub minter: Pubkey,
}
