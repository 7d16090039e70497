use anchor_lang::prelude::*;

use crate::error::RegistryError;

pub const MAX_HANDLE_LEN: usize = 32;
pub const MAX_PLATFORM_LEN: usize = 16;

/// Registry-wide configuration, mutated only through admin instructions.
#[account]
#[derive(InitSpace)]
pub struct RegistryConfig {
    /// Admin authority for revocations and rotation
    pub admin: Pubkey,
    /// The oracle allowed to submit verifications
    pub oracle: Pubkey,
    /// Number of currently verified creators
    pub verified_count: u64,
    /// PDA bump seed
    pub bump: u8,
}

/// Oracle-attested verification record for one creator.
///
/// Account existence is the "verified" flag: revocation closes the
/// account, so `is_verified` is a plain account fetch client-side.
#[account]
#[derive(InitSpace)]
pub struct CreatorRecord {
    /// The creator's wallet address
    pub creator: Pubkey,
    /// Social handle, unique across the registry
    #[max_len(MAX_HANDLE_LEN)]
    pub handle: String,
    /// Platform the handle belongs to (e.g. "twitter")
    #[max_len(MAX_PLATFORM_LEN)]
    pub platform: String,
    /// Follower count reported at verification time
    pub initial_followers: u64,
    /// Timestamp of verification
    pub verified_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

/// Reverse index from handle to creator.
///
/// Seeded by the handle bytes, so a second verification reusing the
/// same handle fails at account init. Doubles as the handle lookup.
#[account]
#[derive(InitSpace)]
pub struct HandleIndex {
    /// The creator that owns this handle
    pub creator: Pubkey,
    /// PDA bump seed
    pub bump: u8,
}

impl RegistryConfig {
    pub const SEED_PREFIX: &'static [u8] = b"config";
}

impl CreatorRecord {
    pub const SEED_PREFIX: &'static [u8] = b"creator";
}

impl HandleIndex {
    pub const SEED_PREFIX: &'static [u8] = b"handle";
}

pub fn validate_handle(handle: &str) -> std::result::Result<(), RegistryError> {
    if handle.is_empty() || handle.len() > MAX_HANDLE_LEN {
        return Err(RegistryError::InvalidHandle);
    }
    Ok(())
}

pub fn validate_platform(platform: &str) -> std::result::Result<(), RegistryError> {
    if platform.is_empty() || platform.len() > MAX_PLATFORM_LEN {
        return Err(RegistryError::InvalidPlatform);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_bounds() {
        assert!(matches!(validate_handle(""), Err(RegistryError::InvalidHandle)));
        assert!(validate_handle("alice").is_ok());
        assert!(validate_handle(&"a".repeat(MAX_HANDLE_LEN)).is_ok());
        assert!(matches!(
            validate_handle(&"a".repeat(MAX_HANDLE_LEN + 1)),
            Err(RegistryError::InvalidHandle)
        ));
    }

    #[test]
    fn platform_bounds() {
        assert!(matches!(validate_platform(""), Err(RegistryError::InvalidPlatform)));
        assert!(validate_platform("twitter").is_ok());
        assert!(matches!(
            validate_platform(&"p".repeat(MAX_PLATFORM_LEN + 1)),
            Err(RegistryError::InvalidPlatform)
        ));
    }
}
