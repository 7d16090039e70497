use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::invoke_signed;

use crate::error::WalletError;
use crate::state::{BatchStep, Wallet, MAX_BATCH_STEPS};

/// Single pass-through execution. The first remaining account is the
/// target program; the rest become the instruction's accounts. Metas
/// naming the wallet PDA are signed with the wallet seeds.
pub fn execute<'info>(
    ctx: Context<'_, '_, 'info, 'info, Execute<'info>>,
    data: Vec<u8>,
) -> Result<()> {
    let remaining = ctx.remaining_accounts;
    require!(!remaining.is_empty(), WalletError::MissingAccounts);

    let wallet = &ctx.accounts.wallet;
    invoke_step(wallet, &remaining[0], &remaining[1..], &data)?;

    emit!(WalletExecuted {
        wallet: wallet.key(),
        target: remaining[0].key(),
        step: 0,
    });

    Ok(())
}

/// Batched pass-through execution. Steps consume the remaining accounts
/// sequentially, each step led by its target program account. Any inner
/// failure aborts the whole transaction.
pub fn execute_batch<'info>(
    ctx: Context<'_, '_, 'info, 'info, Execute<'info>>,
    steps: Vec<BatchStep>,
) -> Result<()> {
    require!(!steps.is_empty(), WalletError::EmptyBatch);
    require!(steps.len() <= MAX_BATCH_STEPS, WalletError::BatchTooLarge);

    let remaining = ctx.remaining_accounts;
    let wallet = &ctx.accounts.wallet;

    let mut cursor = 0usize;
    for (index, step) in steps.iter().enumerate() {
        let needed = step.span();
        require!(
            cursor + needed <= remaining.len(),
            WalletError::MissingAccounts
        );
        let program = &remaining[cursor];
        let accounts = &remaining[cursor + 1..cursor + needed];
        invoke_step(wallet, program, accounts, &step.data)?;

        emit!(WalletExecuted {
            wallet: wallet.key(),
            target: program.key(),
            step: index as u32,
        });

        cursor += needed;
    }

    Ok(())
}

fn invoke_step<'info>(
    wallet: &Account<'info, Wallet>,
    program: &AccountInfo<'info>,
    accounts: &[AccountInfo<'info>],
    data: &[u8],
) -> Result<()> {
    let wallet_key = wallet.key();
    let metas: Vec<AccountMeta> = accounts
        .iter()
        .map(|account| {
            let is_signer = account.is_signer || account.key() == wallet_key;
            if account.is_writable {
                AccountMeta::new(account.key(), is_signer)
            } else {
                AccountMeta::new_readonly(account.key(), is_signer)
            }
        })
        .collect();

    let instruction = Instruction {
        program_id: program.key(),
        accounts: metas,
        data: data.to_vec(),
    };

    let owner = wallet.owner;
    let seeds = &[Wallet::SEED_PREFIX, owner.as_ref(), &[wallet.bump]];

    let mut infos: Vec<AccountInfo<'info>> = accounts.to_vec();
    infos.push(program.clone());

    invoke_signed(&instruction, &infos, &[&seeds[..]])?;
    Ok(())
}

#[derive(Accounts)]
pub struct Execute<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [Wallet::SEED_PREFIX, owner.key().as_ref()],
        bump = wallet.bump,
        has_one = owner @ WalletError::Unauthorized,
    )]
    pub wallet: Account<'info, Wallet>,
    // Remaining accounts: target program, then that instruction's accounts
    // (repeated per step for batches).
}

/// Emitted once per invoked step; `target` is that step's program.
#[event]
pub struct WalletExecuted {
    pub wallet: Pubkey,
    pub target: Pubkey,
    pub step: u32,
}
