use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::RewardsError;
use crate::events::RewardDistributed;
use crate::state::{Campaign, MAX_REASON_LEN};

/// Operator escape hatch: pays one recipient without proof verification,
/// for corrections. Still bounded by the campaign budget.
pub fn handler(ctx: Context<EmergencyDistribute>, amount: u64, reason: String) -> Result<()> {
    require!(amount > 0, RewardsError::InvalidInput);
    require!(reason.len() <= MAX_REASON_LEN, RewardsError::InvalidInput);
    require!(ctx.accounts.campaign.active, RewardsError::CampaignInactive);

    let campaign_key = ctx.accounts.campaign.key();
    let creator = ctx.accounts.campaign.creator;
    let id_bytes = ctx.accounts.campaign.campaign_id.to_le_bytes();
    let bump = ctx.accounts.campaign.bump;
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
            to: ctx.accounts.recipient_ata.to_account_info(),
            authority: campaign.to_account_info(),
        },
        signer_seeds,
    );
    token::transfer(cpi_ctx, amount)?;

    emit!(RewardDistributed {
        campaign: campaign_key,
        recipient: ctx.accounts.recipient_ata.owner,
        amount,
        reason,
        total_distributed: ctx.accounts.campaign.distributed_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmergencyDistribute<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        constraint = campaign.operator == operator.key() @ RewardsError::Unauthorized,
    )]
    pub campaign: Account<'info, Campaign>,

    #[account(
        mut,
        address = campaign.escrow_ata @ RewardsError::InvalidRecipientMint,
    )]
    pub escrow_ata: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = recipient_ata.mint == campaign.mint @ RewardsError::InvalidRecipientMint,
    )]
    pub recipient_ata: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
