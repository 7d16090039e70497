use anchor_lang::prelude::*;

#[event]
pub struct CampaignCreated {
    pub campaign: Pubkey,
    pub creator: Pubkey,
    pub operator: Pubkey,
    pub campaign_id: u64,
    pub mint: Pubkey,
    pub total_amount: u64,
    pub start_ts: i64,
    pub end_ts: i64,
    pub merkle_root: [u8; 32],
    pub description: String,
}

#[event]
pub struct RewardDistributed {
    pub campaign: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub reason: String,
    pub total_distributed: u64,
}

#[event]
pub struct RewardClaimed {
    pub campaign: Pubkey,
    pub claimant: Pubkey,
    pub amount: u64,
    pub reason: String,
    pub total_distributed: u64,
}

#[event]
pub struct CampaignClosed {
    pub campaign: Pubkey,
    pub refunded: u64,
    pub total_distributed: u64,
}

#[event]
pub struct CampaignStatusChanged {
    pub campaign: Pubkey,
    pub active: bool,
}
