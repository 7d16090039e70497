use anchor_lang::prelude::*;

use crate::events::FactoryInitialized;
use crate::state::FactoryConfig;

pub fn handler(
    ctx: Context<InitializeFactory>,
    fee_recipient: Pubkey,
    creation_fee: u64,
    default_oracle: Pubkey,
) -> Result<()> {
    let factory = &mut ctx.accounts.factory;
    factory.admin = ctx.accounts.admin.key();
    factory.fee_recipient = fee_recipient;
    factory.creation_fee = creation_fee;
    factory.default_oracle = default_oracle;
    factory.paused = false;
    factory.ledger_count = 0;
    factory.bump = ctx.bumps.factory;

    emit!(FactoryInitialized {
        admin: factory.admin,
        fee_recipient,
        creation_fee,
        default_oracle,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeFactory<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + FactoryConfig::INIT_SPACE,
        seeds = [FactoryConfig::SEED_PREFIX],
        bump,
    )]
    pub factory: Account<'info, FactoryConfig>,

    pub system_program: Program<'info, System>,
}
