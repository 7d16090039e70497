use anchor_lang::prelude::*;

use crate::error::BadgeError;

pub const MAX_HANDLE_LEN: usize = 32;
pub const MAX_PLATFORM_LEN: usize = 16;
pub const MAX_IMAGE_REF_LEN: usize = 128;
pub const MAX_MINTERS: usize = 8;

/// Registry configuration: admin, the monotonically increasing badge id
/// counter, and the minter allow-list.
#[account]
#[derive(InitSpace)]
pub struct BadgeConfig {
    pub admin: Pubkey,
    /// Next badge id to assign; starts at 1 and only ever grows
    pub next_id: u64,
    /// Authorized minters besides the admin
    #[max_len(MAX_MINTERS)]
    pub minters: Vec<Pubkey>,
    pub bump: u8,
}

/// Soulbound identity badge, one per creator.
///
/// Ownership is the `["badge", creator]` PDA mapping itself. The program
/// exposes no transfer or approval instruction of any kind, so the
/// binding is permanent; minting and admin revocation (account close)
/// are the only ownership-changing edges.
#[account]
#[derive(InitSpace)]
pub struct CreatorBadge {
    /// Monotonically increasing badge id
    pub id: u64,
    /// The creator this badge is permanently bound to
    pub creator: Pubkey,
    #[max_len(MAX_HANDLE_LEN)]
    pub handle: String,
    #[max_len(MAX_PLATFORM_LEN)]
    pub platform: String,
    /// Follower count snapshot at mint time
    pub initial_followers: u64,
    /// Verification timestamp carried from the registry
    pub verified_at: i64,
    /// Mutable display field: profile image reference
    #[max_len(MAX_IMAGE_REF_LEN)]
    pub image_ref: String,
    /// Mutable display field: engagement score
    pub engagement_score: u64,
    /// Admin-flippable visibility flag; does not affect ownership
    pub active: bool,
    pub bump: u8,
}

impl BadgeConfig {
    pub const SEED_PREFIX: &'static [u8] = b"config";

    pub fn is_minter(&self, key: &Pubkey) -> bool {
        *key == self.admin || self.minters.contains(key)
    }

    pub fn add_minter(&mut self, minter: Pubkey) -> std::result::Result<(), BadgeError> {
        if self.minters.contains(&minter) {
            return Err(BadgeError::AlreadyMinter);
        }
        if self.minters.len() >= MAX_MINTERS {
            return Err(BadgeError::MinterListFull);
        }
        self.minters.push(minter);
        Ok(())
    }

    pub fn remove_minter(&mut self, minter: &Pubkey) -> std::result::Result<(), BadgeError> {
        let position = self
            .minters
            .iter()
            .position(|m| m == minter)
            .ok_or(BadgeError::MinterNotFound)?;
        self.minters.remove(position);
        Ok(())
    }
}

impl CreatorBadge {
    pub const SEED_PREFIX: &'static [u8] = b"badge";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BadgeConfig {
        BadgeConfig {
            admin: Pubkey::new_unique(),
            next_id: 1,
            minters: vec![],
            bump: 255,
        }
    }

    #[test]
    fn admin_is_always_a_minter() {
        let config = config();
        let admin = config.admin;
        assert!(config.is_minter(&admin));
        assert!(!config.is_minter(&Pubkey::new_unique()));
    }

    #[test]
    fn add_and_remove_minters() {
        let mut config = config();
        let minter = Pubkey::new_unique();

        config.add_minter(minter).unwrap();
        assert!(config.is_minter(&minter));
        assert!(matches!(
            config.add_minter(minter),
            Err(BadgeError::AlreadyMinter)
        ));

        config.remove_minter(&minter).unwrap();
        assert!(!config.is_minter(&minter));
        assert!(matches!(
            config.remove_minter(&minter),
            Err(BadgeError::MinterNotFound)
        ));
    }

    #[test]
    fn minter_list_is_bounded() {
        let mut config = config();
        for _ in 0..MAX_MINTERS {
            config.add_minter(Pubkey::new_unique()).unwrap();
        }
        assert!(matches!(
            config.add_minter(Pubkey::new_unique()),
            Err(BadgeError::MinterListFull)
        ));
    }
}
