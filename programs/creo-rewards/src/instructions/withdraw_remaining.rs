use anchor_lang::prelude::*;
use anchor_spl::token::{self, CloseAccount, Token, TokenAccount, Transfer};

use crate::error::RewardsError;
use crate::events::CampaignClosed;
use crate::state::Campaign;

/// Returns the un-distributed escrow to the funder after the campaign
/// has ended, closes the escrow account, and deactivates the campaign.
pub fn handler(ctx: Context<WithdrawRemaining>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let campaign = &ctx.accounts.campaign;

    require!(now > campaign.end_ts, RewardsError::CampaignNotEnded);

    let authority = ctx.accounts.authority.key();
    require!(
        authority == campaign.creator || authority == campaign.operator,
        RewardsError::Unauthorized
    );

    let refund = ctx.accounts.escrow_ata.amount;
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

    if refund > 0 {
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.escrow_ata.to_account_info(),
                to: ctx.accounts.creator_ata.to_account_info(),
                authority: ctx.accounts.campaign.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(cpi_ctx, refund)?;
    }

    let close_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        CloseAccount {
            account: ctx.accounts.escrow_ata.to_account_info(),
            destination: ctx.accounts.authority.to_account_info(),
            authority: ctx.accounts.campaign.to_account_info(),
        },
        signer_seeds,
    );
    token::close_account(close_ctx)?;

    let campaign = &mut ctx.accounts.campaign;
    campaign.active = false;

    emit!(CampaignClosed {
        campaign: campaign_key,
        refunded: refund,
        total_distributed: campaign.distributed_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct WithdrawRemaining<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(mut)]
    pub campaign: Account<'info, Campaign>,

    #[account(
        mut,
        address = campaign.escrow_ata @ RewardsError::InvalidRecipientMint,
    )]
    pub escrow_ata: Account<'info, TokenAccount>,

    /// Remaining funds always return to the campaign funder.
    #[account(
        mut,
        constraint = creator_ata.mint == campaign.mint @ RewardsError::InvalidRecipientMint,
        constraint = creator_ata.owner == campaign.creator @ RewardsError::Unauthorized,
    )]
    pub creator_ata: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
