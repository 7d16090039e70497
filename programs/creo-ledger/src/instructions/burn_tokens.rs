use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};

use crate::error::LedgerError;
use crate::events::TokensBurned;
use crate::state::{LedgerState, MAX_REASON_LEN};

/// Burns tokens from the creator's holding, recording a human-readable
/// reason for audit. Metric corrections come through here instead of a
/// negative oracle update.
///
/// When the creator signs, the burn is self-authorized. When the oracle
/// signs, the ledger PDA burns as SPL delegate, which requires a standing
/// `approve` from the creator's token account to the ledger PDA.
pub fn handler(ctx: Context<BurnTokens>, amount: u64, reason: String) -> Result<()> {
    require!(
        !reason.is_empty() && reason.len() <= MAX_REASON_LEN,
        LedgerError::InvalidReason
    );
    require!(
        ctx.accounts.creator_ata.amount >= amount,
        LedgerError::InsufficientBalance
    );

    let ledger = &ctx.accounts.ledger;
    let authority_key = ctx.accounts.authority.key();
    require!(
        ledger.is_issuance_authority(&authority_key),
        LedgerError::Unauthorized
    );

    let remaining_supply = ctx
        .accounts
        .mint
        .supply
        .checked_sub(amount)
        .ok_or(LedgerError::InsufficientBalance)?;

    if authority_key == ledger.creator {
        let cpi_ctx = CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.creator_ata.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        );
        token::burn(cpi_ctx, amount)?;
    } else {
        let creator = ledger.creator;
        let bump = ledger.bump;
        let seeds = &[LedgerState::SEED_PREFIX, creator.as_ref(), &[bump]];
        let signer_seeds = &[&seeds[..]];

        let cpi_ctx = CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.mint.to_account_info(),
                from: ctx.accounts.creator_ata.to_account_info(),
                authority: ctx.accounts.ledger.to_account_info(),
            },
            signer_seeds,
        );
        token::burn(cpi_ctx, amount)?;
    }

    emit!(TokensBurned {
        ledger: ctx.accounts.ledger.key(),
        creator: ctx.accounts.ledger.creator,
        authority: authority_key,
        amount,
        reason,
        remaining_supply,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    /// Creator self-burn or oracle-initiated correction.
    pub authority: Signer<'info>,

    #[account(
        seeds = [LedgerState::SEED_PREFIX, ledger.creator.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Account<'info, LedgerState>,

    #[account(
        mut,
        address = ledger.mint @ LedgerError::InvalidMint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = creator_ata.owner == ledger.creator @ LedgerError::Unauthorized,
        constraint = creator_ata.mint == ledger.mint @ LedgerError::InvalidMint,
    )]
    pub creator_ata: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}
