use anchor_lang::prelude::*;

use crate::error::RewardsError;
use crate::events::CampaignStatusChanged;
use crate::state::Campaign;

/// Manual pause/resume. Expiry (`end_ts`) is a separate, data-driven
/// condition and is not affected by this flag.
pub fn handler(ctx: Context<SetCampaignActive>, active: bool) -> Result<()> {
    let campaign = &mut ctx.accounts.campaign;
    campaign.active = active;

    emit!(CampaignStatusChanged {
        campaign: campaign.key(),
        active,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetCampaignActive<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        constraint = campaign.operator == operator.key() @ RewardsError::Unauthorized,
    )]
    pub campaign: Account<'info, Campaign>,
}
