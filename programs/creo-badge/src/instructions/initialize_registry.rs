use anchor_lang::prelude::*;

use crate::state::BadgeConfig;

pub fn handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.next_id = 1;
    config.minters = Vec::new();
    config.bump = ctx.bumps.config;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + BadgeConfig::INIT_SPACE,
        seeds = [BadgeConfig::SEED_PREFIX],
        bump,
    )]
    pub config: Account<'info, BadgeConfig>,

    pub system_program: Program<'info, System>,
}
