use anchor_lang::prelude::*;

use crate::error::WalletError;
use crate::state::{WalletAuthorization, WalletConfig};

pub fn authorize_creator(ctx: Context<AuthorizeCreator>) -> Result<()> {
    let authorization = &mut ctx.accounts.authorization;
    authorization.creator = ctx.accounts.creator.key();
    authorization.bump = ctx.bumps.authorization;

    emit!(CreatorAuthorized {
        creator: authorization.creator,
    });

    Ok(())
}

pub fn deauthorize_creator(ctx: Context<DeauthorizeCreator>) -> Result<()> {
    emit!(CreatorDeauthorized {
        creator: ctx.accounts.authorization.creator,
    });

    Ok(())
}

pub fn set_registry_program(ctx: Context<SetRegistryProgram>, new_program: Pubkey) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let previous = config.registry_program;
    config.registry_program = new_program;

    emit!(RegistryProgramRotated {
        previous,
        current: new_program,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct AuthorizeCreator<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [WalletConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ WalletError::UnauthorizedAdmin,
    )]
    pub config: Account<'info, WalletConfig>,

    /// CHECK: the creator being granted provisioning rights.
    pub creator: UncheckedAccount<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + WalletAuthorization::INIT_SPACE,
        seeds = [WalletAuthorization::SEED_PREFIX, creator.key().as_ref()],
        bump,
    )]
    pub authorization: Account<'info, WalletAuthorization>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct DeauthorizeCreator<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [WalletConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ WalletError::UnauthorizedAdmin,
    )]
    pub config: Account<'info, WalletConfig>,

    #[account(
        mut,
        close = admin,
        seeds = [WalletAuthorization::SEED_PREFIX, authorization.creator.as_ref()],
        bump = authorization.bump,
    )]
    pub authorization: Account<'info, WalletAuthorization>,
}

#[derive(Accounts)]
pub struct SetRegistryProgram<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [WalletConfig::SEED_PREFIX],
        bump = config.bump,
        constraint = config.admin == admin.key() @ WalletError::UnauthorizedAdmin,
    )]
    pub config: Account<'info, WalletConfig>,
}

#[event]
pub struct CreatorAuthorized {
    pub creator: Pubkey,
}

#[event]
pub struct CreatorDeauthorized {
    pub creator: Pubkey,
}

#[event]
pub struct RegistryProgramRotated {
    pub previous: Pubkey,
    pub current: Pubkey,
}
