use anchor_lang::prelude::*;

use crate::error::BadgeError;
use crate::events::BadgeStatusChanged;
use crate::state::{BadgeConfig, CreatorBadge};

pub fn deactivate(ctx: Context<SetBadgeStatus>) -> Result<()> {
    let badge = &mut ctx.accounts.badge;
    require!(badge.active, BadgeError::BadgeAlreadyInactive);
    badge.active = false;

    emit!(BadgeStatusChanged {
        badge_id: badge.id,
        creator: badge.creator,
        active: false,
    });

    Ok(())
}

pub fn reactivate(ctx: Context<SetBadgeStatus>) -> Result<()> {
    let badge = &mut ctx.accounts.badge;
    require!(!badge.active, BadgeError::BadgeAlreadyActive);
    badge.active = true;

    emit!(BadgeStatusChanged {
        badge_id: badge.id,
        creator: badge.creator,
        active: true,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetBadgeStatus<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [BadgeConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ BadgeError::Unauthorized,
    )]
    pub config: Account<'info, BadgeConfig>,

    #[account(
        mut,
        seeds = [CreatorBadge::SEED_PREFIX, badge.creator.as_ref()],
        bump = badge.bump,
    )]
    pub badge: Account<'info, CreatorBadge>,
}
