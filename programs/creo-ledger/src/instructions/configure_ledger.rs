use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::events::{LedgerOracleRotated, RatesUpdated};
use crate::state::LedgerState;

pub fn set_oracle(ctx: Context<ConfigureLedger>, new_oracle: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    let previous = ledger.oracle;
    ledger.oracle = new_oracle;

    emit!(LedgerOracleRotated {
        ledger: ledger.key(),
        previous,
        current: new_oracle,
    });

    Ok(())
}

pub fn update_rates(
    ctx: Context<ConfigureLedger>,
    rate_per_follower: u64,
    rate_per_post: u64,
) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.rate_per_follower = rate_per_follower;
    ledger.rate_per_post = rate_per_post;

    emit!(RatesUpdated {
        ledger: ledger.key(),
        rate_per_follower,
        rate_per_post,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ConfigureLedger<'info> {
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [LedgerState::SEED_PREFIX, creator.key().as_ref()],
        bump = ledger.bump,
        has_one = creator @ LedgerError::Unauthorized,
    )]
    pub ledger: Account<'info, LedgerState>,
}
