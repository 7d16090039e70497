use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use crate::error::RewardsError;
use crate::events::RewardClaimed;
use crate::merkle::{leaf_hash, verify_proof};
use crate::state::{Campaign, ClaimRecord, MAX_REASON_LEN};

/// Self-service claim: the claimant proves membership in the campaign's
/// committed allocation list. The claim record PDA makes replay fail at
/// init, and marking plus payout happen in one transaction.
pub fn handler(
    ctx: Context<ClaimReward>,
    amount: u64,
    reason: String,
    proof: Vec<[u8; 32]>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let campaign = &ctx.accounts.campaign;

    require!(amount > 0, RewardsError::InvalidInput);
    require!(reason.len() <= MAX_REASON_LEN, RewardsError::InvalidInput);
    require!(campaign.is_open(now), RewardsError::CampaignInactive);
    require!(campaign.supports_claims(), RewardsError::ClaimsDisabled);

    let leaf = leaf_hash(&ctx.accounts.claimant.key(), amount, &reason);
    require!(
        verify_proof(&proof, &campaign.merkle_root, &leaf),
        RewardsError::InvalidProof
    );

    let campaign_key = campaign.key();
    let creator = campaign.creator;
    let id_bytes = campaign.campaign_id.to_le_bytes();
    let bump = campaign.bump;
    let seeds = &[
        Campaign::SEED_PREFIX,
        creator.as_ref(),
        id_bytes.as_ref(),
        &[bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let campaign = &mut ctx.accounts.campaign;
    campaign.reserve(amount)?;

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.escrow_ata.to_account_info(),
            to: ctx.accounts.claimant_ata.to_account_info(),
            authority: campaign.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)?;

    let claim_record = &mut ctx.accounts.claim_record;
    claim_record.claimant = ctx.accounts.claimant.key();
    claim_record.amount = amount;
    claim_record.claimed_at = now;
    claim_record.bump = ctx.bumps.claim_record;

    emit!(RewardClaimed {
        campaign: campaign_key,
        claimant: claim_record.claimant,
        amount,
        reason,
        total_distributed: campaign.distributed_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimReward<'info> {
    #[account(mut)]
    pub claimant: Signer<'info>,

    #[account(mut)]
    pub campaign: Account<'info, Campaign>,

    #[account(
        address = campaign.mint @ RewardsError::InvalidMint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        address = campaign.escrow_ata @ RewardsError::InvalidRecipientMint,
    )]
    pub escrow_ata: Account<'info, TokenAccount>,

    /// Created on first successful claim; a second claim for the same
    /// (campaign, claimant) fails right here.
    #[account(
        init,
        payer = claimant,
        space = 8 + ClaimRecord::INIT_SPACE,
        seeds = [
            ClaimRecord::SEED_PREFIX,
            campaign.key().as_ref(),
            claimant.key().as_ref(),
        ],
        bump,
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    #[account(
        init_if_needed,
        payer = claimant,
        associated_token::mint = mint,
        associated_token::authority = claimant,
    )]
    pub claimant_ata: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
