use anchor_lang::prelude::*;

use crate::error::BadgeError;
use crate::events::BadgeMinted;
use crate::state::{
    BadgeConfig, CreatorBadge, MAX_HANDLE_LEN, MAX_IMAGE_REF_LEN, MAX_PLATFORM_LEN,
};

/// Issues the soulbound badge for a creator. At most one per creator: a
/// second mint fails when the badge PDA already exists.
pub fn handler(
    ctx: Context<MintBadge>,
    handle: String,
    platform: String,
    initial_followers: u64,
    image_ref: String,
    engagement_score: u64,
) -> Result<()> {
    require!(
        !handle.is_empty() && handle.len() <= MAX_HANDLE_LEN,
        BadgeError::InvalidHandle
    );
    require!(
        !platform.is_empty() && platform.len() <= MAX_PLATFORM_LEN,
        BadgeError::InvalidPlatform
    );
    require!(
        image_ref.len() <= MAX_IMAGE_REF_LEN,
        BadgeError::InvalidImageRef
    );

    let now = Clock::get()?.unix_timestamp;

    let config = &mut ctx.accounts.config;
    let badge_id = config.next_id;
    config.next_id = config.next_id.saturating_add(1);

    let badge = &mut ctx.accounts.badge;
    badge.id = badge_id;
    badge.creator = ctx.accounts.creator.key();
    badge.handle = handle.clone();
    badge.platform = platform.clone();
    badge.initial_followers = initial_followers;
    badge.verified_at = now;
    badge.image_ref = image_ref;
    badge.engagement_score = engagement_score;
    badge.active = true;
    badge.bump = ctx.bumps.badge;

    emit!(BadgeMinted {
        badge_id,
        creator: badge.creator,
        handle,
        platform,
        initial_followers,
        timestamp: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct MintBadge<'info> {
    #[account(mut)]
    pub minter: Signer<'info>,

    #[account(
        mut,
        seeds = [BadgeConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.is_minter(&minter.key()) @ BadgeError::Unauthorized,
    )]
    pub config: Account<'info, BadgeConfig>,

    /// CHECK: the creator the badge is bound to; only its address is used.
    pub creator: UncheckedAccount<'info>,

    #[account(
        init,
        payer = minter,
        space = 8 + CreatorBadge::INIT_SPACE,
        seeds = [CreatorBadge::SEED_PREFIX, creator.key().as_ref()],
        bump,
    )]
    pub badge: Account<'info, CreatorBadge>,

    pub system_program: Program<'info, System>,
}
