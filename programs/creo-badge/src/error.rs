use anchor_lang::prelude::*;

#[error_code]
pub enum BadgeError {
    #[msg("Unauthorized: admin or allow-listed minter required")]
    Unauthorized,

    #[msg("Handle must be between 1 and 32 bytes")]
    InvalidHandle,

    #[msg("Platform must be between 1 and 16 bytes")]
    InvalidPlatform,

    #[msg("Image reference exceeds 128 bytes")]
    InvalidImageRef,

    #[msg("Minter allow-list is full")]
    MinterListFull,

    #[msg("Minter is already on the allow-list")]
    AlreadyMinter,

    #[msg("Minter is not on the allow-list")]
    MinterNotFound,

    #[msg("Badge is already inactive")]
    BadgeAlreadyInactive,

    #[msg("Badge is already active")]
    BadgeAlreadyActive,
}
