use anchor_lang::prelude::*;

use crate::error::RegistryError;
use crate::state::{CreatorRecord, HandleIndex, RegistryConfig};

/// Emergency removal of a verification record.
///
/// Closes both the record and its handle index so the handle becomes
/// available again. Any ledger already created from this record is
/// untouched.
pub fn revoke_creator(ctx: Context<RevokeCreator>) -> Result<()> {
    let record = &ctx.accounts.record;

    let config = &mut ctx.accounts.config;
    config.verified_count = config.verified_count.saturating_sub(1);

    emit!(CreatorRevoked {
        creator: record.creator,
        handle: record.handle.clone(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RevokeCreator<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ RegistryError::UnauthorizedAdmin,
    )]
    pub config: Account<'info, RegistryConfig>,

    /// CHECK: the creator whose record is being revoked.
    pub creator: UncheckedAccount<'info>,

    #[account(
        mut,
        close = admin,
        seeds = [CreatorRecord::SEED_PREFIX, creator.key().as_ref()],
        bump = record.bump,
    )]
    pub record: Account<'info, CreatorRecord>,

    #[account(
        mut,
        close = admin,
        seeds = [HandleIndex::SEED_PREFIX, record.handle.as_bytes()],
        bump = handle_index.bump,
        constraint = handle_index.creator == record.creator @ RegistryError::HandleMismatch,
    )]
    pub handle_index: Account<'info, HandleIndex>,
}

#[event]
pub struct CreatorRevoked {
    pub creator: Pubkey,
    pub handle: String,
    pub timestamp: i64,
}
