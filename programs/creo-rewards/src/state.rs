use anchor_lang::prelude::*;

use crate::error::RewardsError;

pub const MAX_DESCRIPTION_LEN: usize = 128;
pub const MAX_REASON_LEN: usize = 64;
pub const MAX_BATCH_RECIPIENTS: usize = 16;

/// Sentinel root for push-only campaigns: no self-service claims.
pub const EMPTY_ROOT: [u8; 32] = [0u8; 32];

/// A funded, time-bounded reward distribution tied to one creator
/// ledger. The full budget is escrowed at creation; `distributed_amount`
/// can only grow towards `total_amount`, never past it.
#[account]
#[derive(InitSpace)]
pub struct Campaign {
    /// The ledger creator who funded the campaign
    pub creator: Pubkey,
    /// Allowed to push distributions and pause/resume
    pub operator: Pubkey,
    /// Creator-chosen id, part of the PDA seeds
    pub campaign_id: u64,
    /// Mint of the funding ledger
    pub mint: Pubkey,
    /// Escrow token account owned by this PDA
    pub escrow_ata: Pubkey,
    /// Tokens escrowed at creation
    pub total_amount: u64,
    /// Tokens paid out so far, pushes and claims combined
    pub distributed_amount: u64,
    pub start_ts: i64,
    pub end_ts: i64,
    /// All-zero means push-only; otherwise claims verify against it
    pub merkle_root: [u8; 32],
    pub active: bool,
    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,
    pub bump: u8,
}

/// At-most-once claim marker, one per (campaign, claimant). Created on
/// first successful claim; a replayed proof fails at account init.
#[account]
#[derive(InitSpace)]
pub struct ClaimRecord {
    pub claimant: Pubkey,
    pub amount: u64,
    pub claimed_at: i64,
    pub bump: u8,
}

impl Campaign {
    pub const SEED_PREFIX: &'static [u8] = b"campaign";

    pub fn supports_claims(&self) -> bool {
        self.merkle_root != EMPTY_ROOT
    }

    /// Active and not past its end time.
    pub fn is_open(&self, now: i64) -> bool {
        self.active && now <= self.end_ts
    }

    pub fn remaining(&self) -> u64 {
        self.total_amount.saturating_sub(self.distributed_amount)
    }

    /// Reserves `amount` of the budget, rejecting any overdraw.
    pub fn reserve(&mut self, amount: u64) -> std::result::Result<(), RewardsError> {
        let next = self
            .distributed_amount
            .checked_add(amount)
            .ok_or(RewardsError::ArithmeticOverflow)?;
        if next > self.total_amount {
            return Err(RewardsError::CampaignExhausted);
        }
        self.distributed_amount = next;
        Ok(())
    }
}

impl ClaimRecord {
    pub const SEED_PREFIX: &'static [u8] = b"claim";
}

/// Checked sum of a batch's amounts; every entry must be non-zero.
pub fn batch_total(amounts: &[u64]) -> std::result::Result<u64, RewardsError> {
    let mut total: u64 = 0;
    for &amount in amounts {
        if amount == 0 {
            return Err(RewardsError::InvalidInput);
        }
        total = total
            .checked_add(amount)
            .ok_or(RewardsError::ArithmeticOverflow)?;
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn campaign(total: u64, distributed: u64) -> Campaign {
        Campaign {
            creator: Pubkey::new_unique(),
            operator: Pubkey::new_unique(),
            campaign_id: 1,
            mint: Pubkey::new_unique(),
            escrow_ata: Pubkey::new_unique(),
            total_amount: total,
            distributed_amount: distributed,
            start_ts: 0,
            end_ts: 1_000,
            merkle_root: EMPTY_ROOT,
            active: true,
            description: "welcome drop".to_string(),
            bump: 255,
        }
    }

    #[test]
    fn reserve_tracks_the_budget() {
        let mut c = campaign(1_000, 0);
        c.reserve(600).unwrap();
        c.reserve(400).unwrap();
        assert_eq!(c.remaining(), 0);
        assert!(matches!(c.reserve(1), Err(RewardsError::CampaignExhausted)));
    }

    #[test]
    fn reserve_rejects_overdraw_without_mutating() {
        let mut c = campaign(1_000, 900);
        assert!(matches!(
            c.reserve(101),
            Err(RewardsError::CampaignExhausted)
        ));
        assert_eq!(c.distributed_amount, 900);
        c.reserve(100).unwrap();
    }

    #[test]
    fn open_requires_active_and_unexpired() {
        let mut c = campaign(1, 0);
        assert!(c.is_open(1_000));
        assert!(!c.is_open(1_001));
        c.active = false;
        assert!(!c.is_open(500));
    }

    #[test]
    fn push_only_detection() {
        let mut c = campaign(1, 0);
        assert!(!c.supports_claims());
        c.merkle_root = [7u8; 32];
        assert!(c.supports_claims());
    }

    #[test]
    fn batch_total_checks_entries() {
        assert_eq!(batch_total(&[1, 2, 3]).unwrap(), 6);
        assert!(matches!(
            batch_total(&[1, 0, 3]),
            Err(RewardsError::InvalidInput)
        ));
        assert!(matches!(
            batch_total(&[u64::MAX, 1]),
            Err(RewardsError::ArithmeticOverflow)
        ));
    }
}
