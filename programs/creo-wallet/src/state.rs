use anchor_lang::prelude::*;

pub const MAX_BATCH_STEPS: usize = 8;

/// Provisioner configuration. The registry program is the verification
/// source consulted at wallet creation and can be swapped by the admin,
/// so provisioning is not hard-wired to one registry deployment.
#[account]
#[derive(InitSpace)]
pub struct WalletConfig {
    pub admin: Pubkey,
    /// Program expected to own creator verification records
    pub registry_program: Pubkey,
    pub bump: u8,
}

/// Execution wallet bound to one owner. Holds no balance state of its
/// own; its sole capability is pass-through execution signed with the
/// wallet PDA seeds.
#[account]
#[derive(InitSpace)]
pub struct Wallet {
    pub owner: Pubkey,
    pub created_at: i64,
    pub bump: u8,
}

/// Explicit provisioning grant, independent of verification status.
/// Account existence is the grant.
#[account]
#[derive(InitSpace)]
pub struct WalletAuthorization {
    pub creator: Pubkey,
    pub bump: u8,
}

/// One step of a batched execution: the step's instruction data and how
/// many of the remaining accounts it consumes. Each step's accounts are
/// preceded by its target program account.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct BatchStep {
    pub num_accounts: u8,
    pub data: Vec<u8>,
}

impl BatchStep {
    /// Remaining accounts this step consumes, its target program
    /// included.
    pub fn span(&self) -> usize {
        1 + self.num_accounts as usize
    }
}

impl WalletConfig {
    pub const SEED_PREFIX: &'static [u8] = b"config";
}

impl Wallet {
    pub const SEED_PREFIX: &'static [u8] = b"wallet";
}

impl WalletAuthorization {
    pub const SEED_PREFIX: &'static [u8] = b"auth";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(num_accounts: u8) -> BatchStep {
        BatchStep {
            num_accounts,
            data: vec![],
        }
    }

    #[test]
    fn step_spans_locate_each_target_program() {
        // Steps consuming 2, 0, and 3 accounts place their target
        // programs at remaining-account offsets 0, 3, and 4.
        let steps = [step(2), step(0), step(3)];
        let mut cursor = 0usize;
        let mut targets = Vec::new();
        for step in &steps {
            targets.push(cursor);
            cursor += step.span();
        }
        assert_eq!(targets, vec![0, 3, 4]);
        assert_eq!(cursor, 8);
    }
}
