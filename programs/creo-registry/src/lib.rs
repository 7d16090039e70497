use anchor_lang::prelude::*;

pub mod error;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("86eY3TsF85hZEzPY9nFXD75AbKUD4cmWmsq7aGLLXWdb");

/// Creo Verification Registry
///
/// Records oracle-attested creator verifications. A verification is the
/// gate for ledger creation and (optionally) wallet provisioning: the
/// other Creo programs read the `CreatorRecord` PDA to decide whether a
/// creator is allowed to provision.
///
/// Handle uniqueness is enforced by a handle-seeded index PDA, which also
/// serves as the handle -> creator reverse lookup.
#[program]
pub mod creo_registry {
    use super::*;

    /// Initialize the registry; the signer becomes admin.
    pub fn initialize(ctx: Context<Initialize>, oracle: Pubkey) -> Result<()> {
        instructions::initialize::initialize(ctx, oracle)
    }

    /// Record a verification for a creator. Oracle-only.
    pub fn verify_creator(
        ctx: Context<VerifyCreator>,
        handle: String,
        platform: String,
        initial_followers: u64,
    ) -> Result<()> {
        instructions::verify_creator::verify_creator(ctx, handle, platform, initial_followers)
    }

    /// Emergency removal of a verification record. Admin-only.
    pub fn revoke_creator(ctx: Context<RevokeCreator>) -> Result<()> {
        instructions::revoke_creator::revoke_creator(ctx)
    }

    /// Rotate the verification oracle. Admin-only.
    pub fn set_oracle(ctx: Context<RotateAuthority>, new_oracle: Pubkey) -> Result<()> {
        instructions::rotate_authorities::set_oracle(ctx, new_oracle)
    }

    /// Hand the registry over to a new admin. Admin-only.
    pub fn set_admin(ctx: Context<RotateAuthority>, new_admin: Pubkey) -> Result<()> {
        instructions::rotate_authorities::set_admin(ctx, new_admin)
    }
}
