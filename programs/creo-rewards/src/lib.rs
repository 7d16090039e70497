pub mod error;
pub mod events;
pub mod instructions;
pub mod merkle;
pub mod state;

use anchor_lang::prelude::*;
use instructions::*;

declare_id!("GbPPyhJFb1j31xsqBxxU9TvCPJcdZq6fQbsdVWoXnr76");

/// Creo Reward Campaign Engine
///
/// Funds and distributes creator-ledger tokens to third parties. A
/// campaign escrows its full budget at creation and pays out either by
/// operator batch push or by Merkle-proof self-service claims; the
/// escrow and per-claimant claim records guarantee the budget is never
/// exceeded and no one claims twice.
#[program]
pub mod creo_rewards {
    use super::*;

    /// Open and fully fund a campaign against the signer's own ledger.
    pub fn create_campaign(
        ctx: Context<CreateCampaign>,
        campaign_id: u64,
        total_amount: u64,
        duration_secs: i64,
        merkle_root: [u8; 32],
        operator: Pubkey,
        description: String,
    ) -> Result<()> {
        instructions::create_campaign::handler(
            ctx,
            campaign_id,
            total_amount,
            duration_secs,
            merkle_root,
            operator,
            description,
        )
    }

    /// Push a batch of payouts, all-or-nothing. Operator-only.
    pub fn batch_distribute<'info>(
        ctx: Context<'_, '_, 'info, 'info, BatchDistribute<'info>>,
        amounts: Vec<u64>,
        reasons: Vec<String>,
    ) -> Result<()> {
        instructions::batch_distribute::handler(ctx, amounts, reasons)
    }

    /// Claim a committed allocation with a Merkle proof. At most one
    /// claim per (campaign, claimant).
    pub fn claim_reward(
        ctx: Context<ClaimReward>,
        amount: u64,
        reason: String,
        proof: Vec<[u8; 32]>,
    ) -> Result<()> {
        instructions::claim_reward::handler(ctx, amount, reason, proof)
    }

    /// Proof-free single payout for corrections. Operator-only,
    /// budget-capped.
    pub fn emergency_distribute(
        ctx: Context<EmergencyDistribute>,
        amount: u64,
        reason: String,
    ) -> Result<()> {
        instructions::emergency_distribute::handler(ctx, amount, reason)
    }

    /// Return un-distributed escrow to the funder after expiry.
    pub fn withdraw_remaining(ctx: Context<WithdrawRemaining>) -> Result<()> {
        instructions::withdraw_remaining::handler(ctx)
    }

    /// Pause or resume the campaign. Operator-only.
    pub fn set_campaign_active(ctx: Context<SetCampaignActive>, active: bool) -> Result<()> {
        instructions::set_campaign_active::handler(ctx, active)
    }
}
