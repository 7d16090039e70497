pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;
use instructions::*;
use state::BatchStep;

declare_id!("8NqB8D5XCo9qaBNJ24azgPXGbMt791rthpYYi6Lb651g");

/// Creo Wallet Provisioner
///
/// Deploys one capability-scoped execution wallet per authorized
/// creator. Authorization comes from either an explicit admin grant or a
/// verification record owned by the configured registry program; the
/// registry source is swappable so provisioning is not hard-wired to one
/// verification deployment.
///
/// The wallet's sole capability is pass-through execution: it signs
/// arbitrary instructions with its PDA seeds, restricted to the owner.
#[program]
pub mod creo_wallet {
    use super::*;

    /// Create the provisioner configuration. The signer becomes admin.
    pub fn initialize(ctx: Context<Initialize>, registry_program: Pubkey) -> Result<()> {
        instructions::initialize::initialize(ctx, registry_program)
    }

    /// Grant provisioning rights independent of verification. Admin-only.
    pub fn authorize_creator(ctx: Context<AuthorizeCreator>) -> Result<()> {
        instructions::manage_authorizations::authorize_creator(ctx)
    }

    /// Withdraw an explicit grant. Admin-only.
    pub fn deauthorize_creator(ctx: Context<DeauthorizeCreator>) -> Result<()> {
        instructions::manage_authorizations::deauthorize_creator(ctx)
    }

    /// Swap the verification registry consulted at creation. Admin-only.
    pub fn set_registry_program(
        ctx: Context<SetRegistryProgram>,
        new_program: Pubkey,
    ) -> Result<()> {
        instructions::manage_authorizations::set_registry_program(ctx, new_program)
    }

    /// Provision the signer's wallet. At most one per owner.
    pub fn create_wallet(ctx: Context<CreateWallet>) -> Result<()> {
        instructions::create_wallet::handler(ctx)
    }

    /// Execute one instruction through the wallet. Owner-only.
    pub fn execute<'info>(
        ctx: Context<'_, '_, 'info, 'info, Execute<'info>>,
        data: Vec<u8>,
    ) -> Result<()> {
        instructions::execute::execute(ctx, data)
    }

    /// Execute a bounded batch of instructions through the wallet,
    /// all-or-nothing. Owner-only.
    pub fn execute_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, Execute<'info>>,
        steps: Vec<BatchStep>,
    ) -> Result<()> {
        instructions::execute::execute_batch(ctx, steps)
    }
}
