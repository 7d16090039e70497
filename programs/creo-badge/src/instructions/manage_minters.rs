use anchor_lang::prelude::*;

use crate::error::BadgeError;
use crate::events::{MinterAdded, MinterRemoved};
use crate::state::BadgeConfig;

pub fn add_minter(ctx: Context<ManageMinters>, minter: Pubkey) -> Result<()> {
    ctx.accounts.config.add_minter(minter)?;

    emit!(MinterAdded { minter });

    Ok(())
}

pub fn remove_minter(ctx: Context<ManageMinters>, minter: Pubkey) -> Result<()> {
    ctx.accounts.config.remove_minter(&minter)?;

    emit!(MinterRemoved { minter });

    Ok(())
}

#[derive(Accounts)]
pub struct ManageMinters<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [BadgeConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ BadgeError::Unauthorized,
    )]
    pub config: Account<'info, BadgeConfig>,
}
