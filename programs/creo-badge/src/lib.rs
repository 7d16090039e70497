pub mod error;
pub mod events;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;
use instructions::*;

declare_id!("4Pb7e9Vfc5BCkdq9YfMGjRkVw7DyPiSCQz9CdoZwEmup");

/// Creo Badge Registry
///
/// One soulbound identity badge per creator. Ownership is modeled
/// directly as the badge PDA keyed by the creator, so there is no
/// transfer, approval, or delegation surface to disable: the binding is
/// permanent by construction, and mint/revoke are the only
/// ownership-changing edges.
#[program]
pub mod creo_badge {
    use super::*;

    /// Create the badge registry; the signer becomes admin.
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry::handler(ctx)
    }

    /// Allow-list a minter. Admin-only.
    pub fn add_minter(ctx: Context<ManageMinters>, minter: Pubkey) -> Result<()> {
        instructions::manage_minters::add_minter(ctx, minter)
    }

    /// Remove a minter from the allow-list. Admin-only.
    pub fn remove_minter(ctx: Context<ManageMinters>, minter: Pubkey) -> Result<()> {
        instructions::manage_minters::remove_minter(ctx, minter)
    }

    /// Issue the badge for a creator. Admin or allow-listed minter;
    /// exactly one badge per creator, ids are monotonically increasing.
    pub fn mint_badge(
        ctx: Context<MintBadge>,
        handle: String,
        platform: String,
        initial_followers: u64,
        image_ref: String,
        engagement_score: u64,
    ) -> Result<()> {
        instructions::mint_badge::handler(
            ctx,
            handle,
            platform,
            initial_followers,
            image_ref,
            engagement_score,
        )
    }

    /// Update mutable display fields. Minter-only.
    pub fn update_profile(
        ctx: Context<UpdateProfile>,
        image_ref: String,
        engagement_score: u64,
    ) -> Result<()> {
        instructions::update_profile::handler(ctx, image_ref, engagement_score)
    }

    /// Hide a badge without affecting ownership. Admin-only.
    pub fn deactivate_badge(ctx: Context<SetBadgeStatus>) -> Result<()> {
        instructions::set_badge_status::deactivate(ctx)
    }

    /// Restore a deactivated badge. Admin-only.
    pub fn reactivate_badge(ctx: Context<SetBadgeStatus>) -> Result<()> {
        instructions::set_badge_status::reactivate(ctx)
    }

    /// Burn a badge outright. Admin-only.
    pub fn revoke_badge(ctx: Context<RevokeBadge>) -> Result<()> {
        instructions::revoke_badge::handler(ctx)
    }
}
