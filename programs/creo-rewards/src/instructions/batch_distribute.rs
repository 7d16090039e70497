use anchor_lang::prelude::*;
use anchor_lang::AccountDeserialize;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::error::RewardsError;
use crate::events::RewardDistributed;
use crate::state::{batch_total, Campaign, MAX_BATCH_RECIPIENTS, MAX_REASON_LEN};

/// Operator push of a payroll-style batch. Remaining accounts are the
/// recipient token accounts, one per amount/reason pair. Every check
/// (lengths, budget, recipient mints) runs before the first transfer, so
/// the batch pays all recipients or none.
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, BatchDistribute<'info>>,
    amounts: Vec<u64>,
    reasons: Vec<String>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let campaign = &ctx.accounts.campaign;

    require!(!amounts.is_empty(), RewardsError::EmptyBatch);
    require!(
        amounts.len() <= MAX_BATCH_RECIPIENTS,
        RewardsError::BatchTooLarge
    );
    require!(amounts.len() == reasons.len(), RewardsError::InvalidInput);
    require!(
        amounts.len() == ctx.remaining_accounts.len(),
        RewardsError::InvalidInput
    );
    for reason in &reasons {
        require!(reason.len() <= MAX_REASON_LEN, RewardsError::InvalidInput);
    }
    require!(campaign.is_open(now), RewardsError::CampaignInactive);

    let total = batch_total(&amounts)?;
    require!(
        total <= campaign.remaining(),
        RewardsError::CampaignExhausted
    );

    // Validate every recipient before moving anything.
    let mut recipients = Vec::with_capacity(amounts.len());
    for info in ctx.remaining_accounts {
        let ata = TokenAccount::try_deserialize(&mut &info.data.borrow()[..])
            .map_err(|_| RewardsError::InvalidRecipientMint)?;
        require!(
            ata.mint == campaign.mint,
            RewardsError::InvalidRecipientMint
        );
        recipients.push(ata.owner);
    }

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

    for (index, info) in ctx.remaining_accounts.iter().enumerate() {
        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.escrow_ata.to_account_info(),
                to: info.to_account_info(),
                authority: ctx.accounts.campaign.to_account_info(),
            },
            signer_seeds,
        );
        token::transfer(cpi_ctx, amounts[index])?;
    }

    let campaign = &mut ctx.accounts.campaign;
    campaign.reserve(total)?;

    for (index, recipient) in recipients.iter().enumerate() {
        emit!(RewardDistributed {
            campaign: campaign_key,
            recipient: *recipient,
            amount: amounts[index],
            reason: reasons[index].clone(),
            total_distributed: campaign.distributed_amount,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct BatchDistribute<'info> {
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

    pub token_program: Program<'info, Token>,
    // Remaining accounts: one recipient token account per amount.
}
