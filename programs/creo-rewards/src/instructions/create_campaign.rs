use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};

use creo_ledger::state::LedgerState;

use crate::error::RewardsError;
use crate::events::CampaignCreated;
use crate::state::{Campaign, MAX_DESCRIPTION_LEN};

/// Opens a campaign funded from the signer's own ledger token balance.
/// The full budget moves into escrow here, so later distributions can
/// never draw more than was committed. An all-zero Merkle root makes the
/// campaign push-only.
pub fn handler(
    ctx: Context<CreateCampaign>,
    campaign_id: u64,
    total_amount: u64,
    duration_secs: i64,
    merkle_root: [u8; 32],
    operator: Pubkey,
    description: String,
) -> Result<()> {
    require!(total_amount > 0, RewardsError::InvalidInput);
    require!(duration_secs > 0, RewardsError::InvalidInput);
    require!(
        description.len() <= MAX_DESCRIPTION_LEN,
        RewardsError::InvalidInput
    );

    let cpi_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        Transfer {
            from: ctx.accounts.creator_ata.to_account_info(),
            to: ctx.accounts.escrow_ata.to_account_info(),
            authority: ctx.accounts.creator.to_account_info(),
        },
    );
    token::transfer(cpi_ctx, total_amount)?;

    let now = Clock::get()?.unix_timestamp;
    let end_ts = now
        .checked_add(duration_secs)
        .ok_or(RewardsError::ArithmeticOverflow)?;

    let campaign = &mut ctx.accounts.campaign;
    campaign.creator = ctx.accounts.creator.key();
    campaign.operator = operator;
    campaign.campaign_id = campaign_id;
    campaign.mint = ctx.accounts.mint.key();
    campaign.escrow_ata = ctx.accounts.escrow_ata.key();
    campaign.total_amount = total_amount;
    campaign.distributed_amount = 0;
    campaign.start_ts = now;
    campaign.end_ts = end_ts;
    campaign.merkle_root = merkle_root;
    campaign.active = true;
    campaign.description = description.clone();
    campaign.bump = ctx.bumps.campaign;

    emit!(CampaignCreated {
        campaign: campaign.key(),
        creator: campaign.creator,
        operator,
        campaign_id,
        mint: campaign.mint,
        total_amount,
        start_ts: now,
        end_ts,
        merkle_root,
        description,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(campaign_id: u64)]
pub struct CreateCampaign<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    /// The funding ledger; only its creator may open campaigns on it.
    #[account(
        constraint = ledger.creator == creator.key() @ RewardsError::Unauthorized,
    )]
    pub ledger: Account<'info, LedgerState>,

    #[account(
        address = ledger.mint @ RewardsError::InvalidMint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        init,
        payer = creator,
        space = 8 + Campaign::INIT_SPACE,
        seeds = [
            Campaign::SEED_PREFIX,
            creator.key().as_ref(),
            &campaign_id.to_le_bytes(),
        ],
        bump,
    )]
    pub campaign: Account<'info, Campaign>,

    #[account(
        mut,
        constraint = creator_ata.mint == mint.key() @ RewardsError::InvalidRecipientMint,
        constraint = creator_ata.owner == creator.key() @ RewardsError::Unauthorized,
    )]
    pub creator_ata: Account<'info, TokenAccount>,

    #[account(
        init,
        payer = creator,
        associated_token::mint = mint,
        associated_token::authority = campaign,
    )]
    pub escrow_ata: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
