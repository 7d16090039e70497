use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::events::{CreationFeeUpdated, DefaultOracleRotated, FactoryPauseToggled};
use crate::state::FactoryConfig;

pub fn set_creation_fee(
    ctx: Context<ConfigureFactory>,
    creation_fee: u64,
    fee_recipient: Pubkey,
) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    factory.creation_fee = creation_fee;
    factory.fee_recipient = fee_recipient;

    emit!(CreationFeeUpdated {
        creation_fee,
        fee_recipient,
    });

    Ok(())
}

pub fn set_factory_paused(ctx: Context<ConfigureFactory>, paused: bool) -> Result<()> {
    ctx.accounts.factory.paused = paused;

    emit!(FactoryPauseToggled { paused });

    Ok(())
}

pub fn set_default_oracle(ctx: Context<ConfigureFactory>, default_oracle: Pubkey) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    let previous = factory.default_oracle;
    factory.default_oracle = default_oracle;

    emit!(DefaultOracleRotated {
        previous,
        current: default_oracle,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ConfigureFactory<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [FactoryConfig::SEED_PREFIX],
        bump = factory.bump,
        constraint = factory.admin == admin.key() @ LedgerError::Unauthorized,
    )]
    pub factory: Account<'info, FactoryConfig>,
}
