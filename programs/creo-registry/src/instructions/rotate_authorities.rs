use anchor_lang::prelude::*;

use crate::error::RegistryError;
use crate::state::RegistryConfig;

pub fn set_oracle(ctx: Context<RotateAuthority>, new_oracle: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let previous = config.oracle;
    config.oracle = new_oracle;

    emit!(OracleRotated {
        previous,
        current: new_oracle,
    });

    Ok(())
}

pub fn set_admin(ctx: Context<RotateAuthority>, new_admin: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let previous = config.admin;
    config.admin = new_admin;

    emit!(AdminRotated {
        previous,
        current: new_admin,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct RotateAuthority<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [RegistryConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ RegistryError::UnauthorizedAdmin,
    )]
    pub config: Account<'info, RegistryConfig>,
}

#[event]
pub struct OracleRotated {
    pub previous: Pubkey,
    pub current: Pubkey,
}

#[event]
pub struct AdminRotated {
    pub previous: Pubkey,
    pub current: Pubkey,
}
