use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::error::LedgerError;
use crate::events::{FollowerCountUpdated, MilestoneAchieved, PostCountUpdated};
use crate::state::LedgerState;

/// Oracle-reported follower count. Mints the rate-based delta plus any
/// newly reached milestone rewards in one cap-checked issuance, then
/// flips the achieved flags.
pub fn apply_follower_update(ctx: Context<ApplyMetricUpdate>, new_count: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger_key = ctx.accounts.ledger.key();

    let issuance = ctx
        .accounts
        .ledger
        .follower_issuance(new_count, ctx.accounts.mint.supply)?;

    if issuance.total > 0 {
        mint_to_creator(&ctx, issuance.total)?;
    }

    let ledger = &mut ctx.accounts.ledger;
    let previous_count = ledger.last_follower_count;
    ledger.last_follower_count = new_count;

    for &index in &issuance.achieved {
        let milestone = &mut ledger.milestones[index];
        milestone.achieved = true;
        milestone.achieved_at = now;

        emit!(MilestoneAchieved {
            ledger: ledger_key,
            milestone_index: index as u32,
            threshold: milestone.threshold,
            reward: milestone.reward,
            timestamp: now,
        });
    }

    emit!(FollowerCountUpdated {
        ledger: ledger_key,
        creator: ledger.creator,
        previous_count,
        new_count,
        minted: issuance.total,
        timestamp: now,
    });

    Ok(())
}

/// Oracle-reported post count. Symmetric to the follower update but with
/// no milestone coupling.
pub fn apply_post_update(ctx: Context<ApplyMetricUpdate>, new_count: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let ledger_key = ctx.accounts.ledger.key();

    let minted = ctx
        .accounts
        .ledger
        .post_issuance(new_count, ctx.accounts.mint.supply)?;

    if minted > 0 {
        mint_to_creator(&ctx, minted)?;
    }

    let ledger = &mut ctx.accounts.ledger;
    let previous_count = ledger.last_post_count;
    ledger.last_post_count = new_count;

    emit!(PostCountUpdated {
        ledger: ledger_key,
        creator: ledger.creator,
        previous_count,
        new_count,
        minted,
        timestamp: now,
    });

    Ok(())
}

fn mint_to_creator(ctx: &Context<ApplyMetricUpdate>, amount: u64) -> Result<()> {
    let creator = ctx.accounts.ledger.creator;
    let bump = ctx.accounts.ledger.bump;
    let seeds = &[LedgerState::SEED_PREFIX, creator.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    let cpi_ctx = CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        MintTo {
            mint: ctx.accounts.mint.to_account_info(),
            to: ctx.accounts.creator_ata.to_account_info(),
            authority: ctx.accounts.ledger.to_account_info(),
        },
        signer_seeds,
    );
    token::mint_to(cpi_ctx, amount)
}

#[derive(Accounts)]
pub struct ApplyMetricUpdate<'info> {
    #[account(mut)]
    pub oracle: Signer<'info>,

    #[account(
        mut,
        seeds = [LedgerState::SEED_PREFIX, ledger.creator.as_ref()],
        bump = ledger.bump,
        constraint = ledger.oracle == oracle.key() @ LedgerError::Unauthorized,
    )]
    pub ledger: Account<'info, LedgerState>,

    #[account(
        mut,
        address = ledger.mint @ LedgerError::InvalidMint,
    )]
    pub mint: Account<'info, Mint>,

    /// CHECK: the ledger creator; receives minted tokens.
    #[account(address = ledger.creator @ LedgerError::Unauthorized)]
    pub creator: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = oracle,
        associated_token::mint = mint,
        associated_token::authority = creator,
    )]
    pub creator_ata: Account<'info, TokenAccount>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
}
