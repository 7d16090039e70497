use anchor_lang::prelude::*;
use anchor_lang::AccountDeserialize;

use creo_registry::state::CreatorRecord;

use crate::error::WalletError;
use crate::state::{Wallet, WalletAuthorization, WalletConfig};

/// Provisions the execution wallet for the signer. At most one wallet
/// per owner; the signer must present a credential account that is
/// either an explicit authorization PDA of this program or a creator
/// record owned by the configured registry program.
pub fn handler(ctx: Context<CreateWallet>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    require!(
        credential_covers_owner(
            &ctx.accounts.config,
            &owner,
            &ctx.accounts.credential.to_account_info(),
        )?,
        WalletError::NotAuthorized
    );

    let wallet = &mut ctx.accounts.wallet;
    wallet.owner = owner;
    wallet.created_at = Clock::get()?.unix_timestamp;
    wallet.bump = ctx.bumps.wallet;

    emit!(WalletDeployed {
        wallet: wallet.key(),
        owner,
        timestamp: wallet.created_at,
    });

    Ok(())
}

/// Checks the presented credential against the two accepted shapes. The
/// registry record is deserialized by discriminator rather than by typed
/// account so the registry program stays swappable; any program placed
/// in the config must expose the same record layout.
fn credential_covers_owner(
    config: &WalletConfig,
    owner: &Pubkey,
    credential: &AccountInfo,
) -> Result<bool> {
    if credential.data_is_empty() {
        return Ok(false);
    }

    if credential.owner == &crate::ID {
        let (expected, _) = Pubkey::find_program_address(
            &[WalletAuthorization::SEED_PREFIX, owner.as_ref()],
            &crate::ID,
        );
        require_keys_eq!(credential.key(), expected, WalletError::InvalidCredential);
        let authorization =
            WalletAuthorization::try_deserialize(&mut &credential.data.borrow()[..])
                .map_err(|_| WalletError::InvalidCredential)?;
        return Ok(authorization.creator == *owner);
    }

    if credential.owner == &config.registry_program {
        let (expected, _) = Pubkey::find_program_address(
            &[CreatorRecord::SEED_PREFIX, owner.as_ref()],
            &config.registry_program,
        );
        require_keys_eq!(credential.key(), expected, WalletError::InvalidCredential);
        let record = CreatorRecord::try_deserialize(&mut &credential.data.borrow()[..])
            .map_err(|_| WalletError::InvalidCredential)?;
        return Ok(record.creator == *owner);
    }

    Ok(false)
}

#[derive(Accounts)]
pub struct CreateWallet<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [WalletConfig::SEED_PREFIX],
        bump = config.bump,
    )]
    pub config: Account<'info, WalletConfig>,

    /// CHECK: validated in-handler as an authorization PDA or a creator
    /// record of the configured registry program.
    pub credential: UncheckedAccount<'info>,

    #[account(
        init,
        payer = owner,
        space = 8 + Wallet::INIT_SPACE,
        seeds = [Wallet::SEED_PREFIX, owner.key().as_ref()],
        bump,
    )]
    pub wallet: Account<'info, Wallet>,

    pub system_program: Program<'info, System>,
}

#[event]
pub struct WalletDeployed {
    pub wallet: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}
