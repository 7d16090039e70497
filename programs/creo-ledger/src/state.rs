use anchor_lang::prelude::*;

use crate::error::LedgerError;

pub const MAX_NAME_LEN: usize = 32;
pub const MAX_SYMBOL_LEN: usize = 10;
pub const MAX_REASON_LEN: usize = 64;
pub const MAX_MILESTONES: usize = 16;
pub const TOKEN_DECIMALS: u8 = 9;

/// Factory-wide configuration, mutated only through admin instructions.
#[account]
#[derive(InitSpace)]
pub struct FactoryConfig {
    pub admin: Pubkey,
    /// Receives the ledger creation fee
    pub fee_recipient: Pubkey,
    /// Creation fee in lamports
    pub creation_fee: u64,
    /// Oracle assigned to newly created ledgers
    pub default_oracle: Pubkey,
    /// Blocks new ledger creation when set
    pub paused: bool,
    /// Number of ledgers created so far
    pub ledger_count: u64,
    pub bump: u8,
}

/// One-time bonus issuance rule keyed to a follower threshold.
///
/// `achieved` flips false -> true exactly once; an achieved milestone is
/// skipped by every later sweep.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug)]
pub struct Milestone {
    pub threshold: u64,
    pub reward: u64,
    pub achieved: bool,
    pub achieved_at: i64,
}

/// Per-creator token ledger.
///
/// The fungible token itself is an SPL mint whose authority is this PDA,
/// so holder-to-holder transfer and approval are plain SPL semantics and
/// need no instruction here. Only issuance, burn, and the milestone table
/// are program-governed.
#[account]
#[derive(InitSpace)]
pub struct LedgerState {
    /// Immutable owner of the ledger
    pub creator: Pubkey,
    /// SPL mint backing this ledger
    pub mint: Pubkey,
    #[max_len(MAX_NAME_LEN)]
    pub name: String,
    #[max_len(MAX_SYMBOL_LEN)]
    pub symbol: String,
    /// Tokens minted per new follower
    pub rate_per_follower: u64,
    /// Tokens minted per new post
    pub rate_per_post: u64,
    /// Hard supply limit; `None` means uncapped
    pub supply_cap: Option<u64>,
    /// Last follower count accepted from the oracle
    pub last_follower_count: u64,
    /// Last post count accepted from the oracle
    pub last_post_count: u64,
    /// The only signer allowed to report metric updates
    pub oracle: Pubkey,
    /// Milestones sweep in insertion order; ties resolve by insertion
    #[max_len(MAX_MILESTONES)]
    pub milestones: Vec<Milestone>,
    pub created_at: i64,
    pub bump: u8,
}

/// Outcome of a follower update, computed in full before any mutation so
/// the update applies all-or-nothing.
#[derive(Debug)]
pub struct FollowerIssuance {
    /// Rate-based amount for the follower delta
    pub base_amount: u64,
    /// Sum of rewards for newly achieved milestones
    pub milestone_total: u64,
    /// Indices of milestones achieved by this update
    pub achieved: Vec<usize>,
    /// `base_amount + milestone_total`, cap-checked
    pub total: u64,
}

impl FactoryConfig {
    pub const SEED_PREFIX: &'static [u8] = b"factory";
}

impl LedgerState {
    pub const SEED_PREFIX: &'static [u8] = b"ledger";
    pub const MINT_SEED_PREFIX: &'static [u8] = b"mint";

    /// Computes the issuance for a reported follower count: the rate-based
    /// amount for the delta plus every newly reached milestone reward, with
    /// the sum checked against the supply cap.
    pub fn follower_issuance(
        &self,
        new_count: u64,
        current_supply: u64,
    ) -> std::result::Result<FollowerIssuance, LedgerError> {
        if new_count < self.last_follower_count {
            return Err(LedgerError::MetricDecreased);
        }
        let delta = new_count - self.last_follower_count;
        let base_amount = checked_issuance(delta, self.rate_per_follower)?;

        let mut milestone_total: u64 = 0;
        let mut achieved = Vec::new();
        for (index, milestone) in self.milestones.iter().enumerate() {
            if !milestone.achieved && new_count >= milestone.threshold {
                milestone_total = milestone_total
                    .checked_add(milestone.reward)
                    .ok_or(LedgerError::ArithmeticOverflow)?;
                achieved.push(index);
            }
        }

        let total = base_amount
            .checked_add(milestone_total)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        self.check_cap(current_supply, total)?;

        Ok(FollowerIssuance {
            base_amount,
            milestone_total,
            achieved,
            total,
        })
    }

    /// Computes the issuance for a reported post count. No milestone
    /// coupling; posts only mint at the post rate.
    pub fn post_issuance(
        &self,
        new_count: u64,
        current_supply: u64,
    ) -> std::result::Result<u64, LedgerError> {
        if new_count < self.last_post_count {
            return Err(LedgerError::MetricDecreased);
        }
        let delta = new_count - self.last_post_count;
        let amount = checked_issuance(delta, self.rate_per_post)?;
        self.check_cap(current_supply, amount)?;
        Ok(amount)
    }

    /// Rejects a mint that would push supply past the cap, or overflow u64
    /// even when uncapped.
    pub fn check_cap(
        &self,
        current_supply: u64,
        minted: u64,
    ) -> std::result::Result<(), LedgerError> {
        let next = current_supply
            .checked_add(minted)
            .ok_or(LedgerError::ArithmeticOverflow)?;
        if let Some(cap) = self.supply_cap {
            if next > cap {
                return Err(LedgerError::CapExceeded);
            }
        }
        Ok(())
    }

    pub fn is_issuance_authority(&self, key: &Pubkey) -> bool {
        *key == self.creator || *key == self.oracle
    }
}

fn checked_issuance(delta: u64, rate: u64) -> std::result::Result<u64, LedgerError> {
    let wide = (delta as u128) * (rate as u128);
    u64::try_from(wide).map_err(|_| LedgerError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(rate_per_follower: u64, supply_cap: Option<u64>) -> LedgerState {
        LedgerState {
            creator: Pubkey::new_unique(),
            mint: Pubkey::new_unique(),
            name: "Creator Coin".to_string(),
            symbol: "CC".to_string(),
            rate_per_follower,
            rate_per_post: 1,
            supply_cap,
            last_follower_count: 100,
            last_post_count: 0,
            oracle: Pubkey::new_unique(),
            milestones: vec![],
            created_at: 0,
            bump: 255,
        }
    }

    fn milestone(threshold: u64, reward: u64) -> Milestone {
        Milestone {
            threshold,
            reward,
            achieved: false,
            achieved_at: 0,
        }
    }

    #[test]
    fn follower_delta_mints_at_rate() {
        // rate 2, 100 -> 150 followers mints 100 tokens
        let state = ledger(2, Some(1_000_000));
        let issuance = state.follower_issuance(150, 0).unwrap();
        assert_eq!(issuance.base_amount, 100);
        assert_eq!(issuance.milestone_total, 0);
        assert_eq!(issuance.total, 100);
    }

    #[test]
    fn unchanged_count_mints_nothing() {
        let state = ledger(2, None);
        let issuance = state.follower_issuance(100, 0).unwrap();
        assert_eq!(issuance.total, 0);
    }

    #[test]
    fn decrease_is_rejected() {
        let state = ledger(2, None);
        assert!(matches!(
            state.follower_issuance(99, 0),
            Err(LedgerError::MetricDecreased)
        ));
    }

    #[test]
    fn milestone_pays_once() {
        let mut state = ledger(1, None);
        state.last_follower_count = 900;
        state.milestones.push(milestone(1000, 500));

        // 900 -> 1200 crosses the threshold: 300 rate-based + 500 reward
        let issuance = state.follower_issuance(1200, 0).unwrap();
        assert_eq!(issuance.base_amount, 300);
        assert_eq!(issuance.milestone_total, 500);
        assert_eq!(issuance.achieved, vec![0]);

        // once achieved, a later update mints only the rate-based delta
        state.last_follower_count = 1200;
        state.milestones[0].achieved = true;
        let issuance = state.follower_issuance(1500, 800).unwrap();
        assert_eq!(issuance.base_amount, 300);
        assert_eq!(issuance.milestone_total, 0);
        assert!(issuance.achieved.is_empty());
    }

    #[test]
    fn equal_thresholds_sweep_in_insertion_order() {
        let mut state = ledger(0, None);
        state.milestones.push(milestone(200, 10));
        state.milestones.push(milestone(200, 20));

        let issuance = state.follower_issuance(200, 0).unwrap();
        assert_eq!(issuance.achieved, vec![0, 1]);
        assert_eq!(issuance.milestone_total, 30);
    }

    #[test]
    fn cap_covers_base_plus_milestones() {
        let mut state = ledger(1, Some(1000));
        state.last_follower_count = 900;
        state.milestones.push(milestone(1000, 500));

        // 300 base + 500 reward on top of 300 existing supply breaks the cap
        assert!(matches!(
            state.follower_issuance(1200, 300),
            Err(LedgerError::CapExceeded)
        ));
        // the same update fits with zero existing supply
        assert_eq!(state.follower_issuance(1200, 0).unwrap().total, 800);
    }

    #[test]
    fn uncapped_still_rejects_u64_overflow() {
        let mut state = ledger(u64::MAX, None);
        state.last_follower_count = 0;
        assert!(matches!(
            state.follower_issuance(2, 0),
            Err(LedgerError::ArithmeticOverflow)
        ));
    }

    #[test]
    fn post_issuance_ignores_milestones() {
        let mut state = ledger(2, None);
        state.rate_per_post = 7;
        state.milestones.push(milestone(1, 999));
        assert_eq!(state.post_issuance(10, 0).unwrap(), 70);

        state.last_post_count = 10;
        assert!(matches!(
            state.post_issuance(9, 0),
            Err(LedgerError::MetricDecreased)
        ));
    }

    #[test]
    fn cap_check_at_boundary() {
        let state = ledger(1, Some(100));
        assert!(state.check_cap(60, 40).is_ok());
        assert!(matches!(
            state.check_cap(60, 41),
            Err(LedgerError::CapExceeded)
        ));
    }
}
