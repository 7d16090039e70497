use anchor_lang::prelude::*;

use crate::state::RegistryConfig;

/// Creates the registry configuration. The signer becomes admin.
pub fn initialize(ctx: Context<Initialize>, oracle: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.oracle = oracle;
    config.verified_count = 0;
    config.bump = ctx.bumps.config;

    emit!(RegistryInitialized {
        admin: config.admin,
        oracle,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + RegistryConfig::INIT_SPACE,
        seeds = [RegistryConfig::SEED_PREFIX],
        bump,
    )]
    pub config: Account<'info, RegistryConfig>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct RegistryInitialized {
    pub admin: Pubkey,
    pub oracle: Pubkey,
}
