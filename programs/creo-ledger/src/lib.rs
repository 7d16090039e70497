pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;
use instructions::*;

declare_id!("FjEt9Z8MXJ4pExHLpJso5jeFTiocjp68ikSPin7YsAKk");

/// Creo Creator Ledger
///
/// One SPL-backed token ledger per verified creator. Supply grows when
/// the configured oracle reports higher follower/post counts, with
/// one-time milestone bonuses on follower thresholds. All issuance is
/// overflow-checked and bounded by an optional supply cap; reported
/// metrics must be monotonically non-decreasing, and corrections go
/// through the explicit audited burn path.
#[program]
pub mod creo_ledger {
    use super::*;

    /// Create the factory configuration. The signer becomes admin.
    pub fn initialize_factory(
        ctx: Context<InitializeFactory>,
        fee_recipient: Pubkey,
        creation_fee: u64,
        default_oracle: Pubkey,
    ) -> Result<()> {
        instructions::initialize_factory::handler(ctx, fee_recipient, creation_fee, default_oracle)
    }

    /// Provision the ledger and its mint for a verified creator.
    /// Exactly one ledger per creator; charges the creation fee.
    pub fn create_ledger(
        ctx: Context<CreateLedger>,
        name: String,
        symbol: String,
        rate_per_follower: u64,
        rate_per_post: u64,
        supply_cap: Option<u64>,
    ) -> Result<()> {
        instructions::create_ledger::handler(
            ctx,
            name,
            symbol,
            rate_per_follower,
            rate_per_post,
            supply_cap,
        )
    }

    /// Oracle-only follower update: mints the rate-based delta plus any
    /// newly reached milestone rewards, all-or-nothing.
    pub fn apply_follower_update(ctx: Context<ApplyMetricUpdate>, new_count: u64) -> Result<()> {
        instructions::apply_metric_update::apply_follower_update(ctx, new_count)
    }

    /// Oracle-only post update: mints the rate-based delta.
    pub fn apply_post_update(ctx: Context<ApplyMetricUpdate>, new_count: u64) -> Result<()> {
        instructions::apply_metric_update::apply_post_update(ctx, new_count)
    }

    /// Burn from the creator's holding with an audit reason. Creator or
    /// oracle; the oracle path burns via the ledger PDA delegate.
    pub fn burn_tokens(ctx: Context<BurnTokens>, amount: u64, reason: String) -> Result<()> {
        instructions::burn_tokens::handler(ctx, amount, reason)
    }

    /// Append a follower milestone. Creator or oracle.
    pub fn add_milestone(ctx: Context<AddMilestone>, threshold: u64, reward: u64) -> Result<()> {
        instructions::add_milestone::handler(ctx, threshold, reward)
    }

    /// Point the ledger at a new oracle. Creator-only.
    pub fn set_oracle(ctx: Context<ConfigureLedger>, new_oracle: Pubkey) -> Result<()> {
        instructions::configure_ledger::set_oracle(ctx, new_oracle)
    }

    /// Change the issuance rates. Creator-only.
    pub fn update_rates(
        ctx: Context<ConfigureLedger>,
        rate_per_follower: u64,
        rate_per_post: u64,
    ) -> Result<()> {
        instructions::configure_ledger::update_rates(ctx, rate_per_follower, rate_per_post)
    }

    /// Update the creation fee and its recipient. Admin-only.
    pub fn set_creation_fee(
        ctx: Context<ConfigureFactory>,
        creation_fee: u64,
        fee_recipient: Pubkey,
    ) -> Result<()> {
        instructions::configure_factory::set_creation_fee(ctx, creation_fee, fee_recipient)
    }

    /// Pause or resume new ledger creation. Admin-only.
    pub fn set_factory_paused(ctx: Context<ConfigureFactory>, paused: bool) -> Result<()> {
        instructions::configure_factory::set_factory_paused(ctx, paused)
    }

    /// Rotate the oracle assigned to new ledgers. Admin-only.
    pub fn set_default_oracle(ctx: Context<ConfigureFactory>, default_oracle: Pubkey) -> Result<()> {
        instructions::configure_factory::set_default_oracle(ctx, default_oracle)
    }
}
