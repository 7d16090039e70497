use anchor_lang::prelude::*;

use crate::error::BadgeError;
use crate::events::ProfileUpdated;
use crate::state::{BadgeConfig, CreatorBadge, MAX_IMAGE_REF_LEN};

/// Updates the mutable display fields; identity fields never change.
pub fn handler(ctx: Context<UpdateProfile>, image_ref: String, engagement_score: u64) -> Result<()> {
    require!(
        image_ref.len() <= MAX_IMAGE_REF_LEN,
        BadgeError::InvalidImageRef
    );

    let badge = &mut ctx.accounts.badge;
    badge.image_ref = image_ref.clone();
    badge.engagement_score = engagement_score;

    emit!(ProfileUpdated {
        badge_id: badge.id,
        creator: badge.creator,
        image_ref,
        engagement_score,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateProfile<'info> {
    pub minter: Signer<'info>,

    #[account(
        seeds = [BadgeConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.is_minter(&minter.key()) @ BadgeError::Unauthorized,
    )]
    pub config: Account<'info, BadgeConfig>,

    #[account(
        mut,
        seeds = [CreatorBadge::SEED_PREFIX, badge.creator.as_ref()],
        bump = badge.bump,
    )]
    pub badge: Account<'info, CreatorBadge>,
}
