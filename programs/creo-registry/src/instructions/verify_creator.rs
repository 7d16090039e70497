use anchor_lang::prelude::*;

use crate::error::RegistryError;
use crate::state::{validate_handle, validate_platform, CreatorRecord, HandleIndex, RegistryConfig};

/// Records an oracle-attested verification for a creator.
///
/// One record per creator and one index entry per handle; a repeat
/// verification or a reused handle fails when the PDA already exists.
pub fn verify_creator(
    ctx: Context<VerifyCreator>,
    handle: String,
    platform: String,
    initial_followers: u64,
) -> Result<()> {
    validate_handle(&handle)?;
    validate_platform(&platform)?;

    let now = Clock::get()?.unix_timestamp;

    let record = &mut ctx.accounts.record;
    record.creator = ctx.accounts.creator.key();
    record.handle = handle.clone();
    record.platform = platform.clone();
    record.initial_followers = initial_followers;
    record.verified_at = now;
    record.bump = ctx.bumps.record;

    let handle_index = &mut ctx.accounts.handle_index;
    handle_index.creator = record.creator;
    handle_index.bump = ctx.bumps.handle_index;

    let config = &mut ctx.accounts.config;
    config.verified_count = config.verified_count.saturating_add(1);

    emit!(CreatorVerified {
        creator: record.creator,
        handle,
        platform,
        initial_followers,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(handle: String)]
pub struct VerifyCreator<'info> {
    #[account(mut)]
    pub oracle: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.oracle == oracle.key() @ RegistryError::UnauthorizedOracle,
    )]
    pub config: Account<'info, RegistryConfig>,

    /// CHECK: the wallet being verified; only its address is recorded.
    pub creator: UncheckedAccount<'info>,

    #[account(
        init,
        payer = oracle,
        space = 8 + CreatorRecord::INIT_SPACE,
        seeds = [CreatorRecord::SEED_PREFIX, creator.key().as_ref()],
        bump,
    )]
    pub record: Account<'info, CreatorRecord>,

    #[account(
        init,
        payer = oracle,
        space = 8 + HandleIndex::INIT_SPACE,
        seeds = [HandleIndex::SEED_PREFIX, handle.as_bytes()],
        bump,
    )]
    pub handle_index: Account<'info, HandleIndex>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct CreatorVerified {
    pub creator: Pubkey,
    pub handle: String,
    pub platform: String,
    pub initial_followers: u64,
    pub timestamp: i64,
}
