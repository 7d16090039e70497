use anchor_lang::prelude::*;
use anchor_lang::system_program;
use anchor_spl::token::{Mint, Token};

use creo_registry::state::CreatorRecord;

use crate::error::LedgerError;
use crate::events::LedgerCreated;
use crate::state::{FactoryConfig, LedgerState, MAX_NAME_LEN, MAX_SYMBOL_LEN, TOKEN_DECIMALS};

pub fn handler(
    ctx: Context<CreateLedger>,
    name: String,
    symbol: String,
    rate_per_follower: u64,
    rate_per_post: u64,
    supply_cap: Option<u64>,
) -> Result<()> {
    require!(!ctx.accounts.factory.paused, LedgerError::CreationPaused);
    require!(
        !name.is_empty() && name.len() <= MAX_NAME_LEN,
        LedgerError::InvalidName
    );
    require!(
        !symbol.is_empty() && symbol.len() <= MAX_SYMBOL_LEN,
        LedgerError::InvalidSymbol
    );

    let fee = ctx.accounts.factory.creation_fee;
    if fee > 0 {
        let cpi_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.creator.to_account_info(),
                to: ctx.accounts.fee_recipient.to_account_info(),
            },
        );
        system_program::transfer(cpi_ctx, fee)?;
    }

    let now = Clock::get()?.unix_timestamp;
    let initial_followers = ctx.accounts.record.initial_followers;

    let ledger = &mut ctx.accounts.ledger;
    ledger.creator = ctx.accounts.creator.key();
    ledger.mint = ctx.accounts.mint.key();
    ledger.name = name.clone();
    ledger.symbol = symbol.clone();
    ledger.rate_per_follower = rate_per_follower;
    ledger.rate_per_post = rate_per_post;
    ledger.supply_cap = supply_cap;
    ledger.last_follower_count = initial_followers;
    ledger.last_post_count = 0;
    ledger.oracle = ctx.accounts.factory.default_oracle;
    ledger.milestones = Vec::new();
    ledger.created_at = now;
    ledger.bump = ctx.bumps.ledger;

    let factory = &mut ctx.accounts.factory;
    factory.ledger_count = factory.ledger_count.saturating_add(1);

    emit!(LedgerCreated {
        ledger: ctx.accounts.ledger.key(),
        creator: ctx.accounts.creator.key(),
        mint: ctx.accounts.mint.key(),
        name,
        symbol,
        rate_per_follower,
        rate_per_post,
        supply_cap,
        initial_followers,
        fee_paid: fee,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateLedger<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [FactoryConfig::SEED_PREFIX],
        bump = factory.bump,
    )]
    pub factory: Account<'info, FactoryConfig>,

    /// Verification record from the registry program; only verified
    /// creators may create a ledger.
    #[account(
        constraint = record.creator == creator.key() @ LedgerError::Unauthorized,
    )]
    pub record: Account<'info, CreatorRecord>,

    #[account(
        init,
        payer = creator,
        space = 8 + LedgerState::INIT_SPACE,
        seeds = [LedgerState::SEED_PREFIX, creator.key().as_ref()],
        bump,
    )]
    pub ledger: Account<'info, LedgerState>,

    #[account(
        init,
        payer = creator,
        seeds = [LedgerState::MINT_SEED_PREFIX, ledger.key().as_ref()],
        bump,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = ledger,
        mint::freeze_authority = ledger,
    )]
    pub mint: Account<'info, Mint>,

    /// CHECK: validated against the configured fee recipient.
    #[account(
        mut,
        constraint = fee_recipient.key() == factory.fee_recipient @ LedgerError::Unauthorized,
    )]
    pub fee_recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
}
