use anchor_lang::prelude::*;

use crate::state::WalletConfig;

pub fn initialize(ctx: Context<Initialize>, registry_program: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.registry_program = registry_program;
    config.bump = ctx.bumps.config;

    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + WalletConfig::INIT_SPACE,
        seeds = [WalletConfig::SEED_PREFIX],
        bump,
    )]
    pub config: Account<'info, WalletConfig>,

    pub system_program: Program<'info, System>,
}
