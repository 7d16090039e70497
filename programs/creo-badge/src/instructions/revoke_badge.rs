use anchor_lang::prelude::*;

use crate::error::BadgeError;
use crate::events::BadgeRevoked;
use crate::state::{BadgeConfig, CreatorBadge};

/// Admin-only burn edge: the one way a badge binding ever ends.
pub fn handler(ctx: Context<RevokeBadge>) -> Result<()> {
    let badge = &ctx.accounts.badge;

    emit!(BadgeRevoked {
        badge_id: badge.id,
        creator: badge.creator,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RevokeBadge<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [BadgeConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ BadgeError::Unauthorized,
    )]
    pub config: Account<'info, BadgeConfig>,

    #[account(
        mut,
        close = admin,
        seeds = [CreatorBadge::SEED_PREFIX, badge.creator.as_ref()],
        bump = badge.bump,
    )]
    pub badge: Account<'info, CreatorBadge>,
}
