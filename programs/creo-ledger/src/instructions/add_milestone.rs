use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::events::MilestoneAdded;
use crate::state::{LedgerState, Milestone, MAX_MILESTONES};

/// Appends a follower-count milestone. Thresholds should be added in
/// increasing order for predictable sweep order; equal thresholds sweep
/// in insertion order.
pub fn handler(ctx: Context<AddMilestone>, threshold: u64, reward: u64) -> Result<()> {
    require!(reward > 0, LedgerError::InvalidMilestone);

    let ledger = &mut ctx.accounts.ledger;
    require!(
        ledger.milestones.len() < MAX_MILESTONES,
        LedgerError::MilestoneListFull
    );

    ledger.milestones.push(Milestone {
        threshold,
        reward,
        achieved: false,
        achieved_at: 0,
    });

    emit!(MilestoneAdded {
        ledger: ledger.key(),
        milestone_index: (ledger.milestones.len() - 1) as u32,
        threshold,
        reward,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AddMilestone<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [LedgerState::SEED_PREFIX, ledger.creator.as_ref()],
        bump = ledger.bump,
        constraint = ledger.is_issuance_authority(&authority.key()) @ LedgerError::Unauthorized,
    )]
    pub ledger: Account<'info, LedgerState>,
}
