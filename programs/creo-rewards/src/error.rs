use anchor_lang::prelude::*;

#[error_code]
pub enum RewardsError {
    #[msg("Unauthorized signer for this campaign operation")]
    Unauthorized,

    #[msg("Invalid or mismatched-length arguments")]
    InvalidInput,

    #[msg("Batch is empty")]
    EmptyBatch,

    #[msg("Too many recipients in a single batch")]
    BatchTooLarge,

    #[msg("Distribution would exceed the campaign budget")]
    CampaignExhausted,

    #[msg("Campaign is paused or past its end time")]
    CampaignInactive,

    #[msg("Campaign has not ended yet")]
    CampaignNotEnded,

    #[msg("Campaign is push-only and does not accept claims")]
    ClaimsDisabled,

    #[msg("Merkle proof does not match the campaign root")]
    InvalidProof,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Token account does not match the campaign mint")]
    InvalidRecipientMint,

    #[msg("Mint does not match the funding ledger")]
    InvalidMint,
}
