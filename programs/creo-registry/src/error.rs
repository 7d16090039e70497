use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Unauthorized: oracle signature required")]
    UnauthorizedOracle,

    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Handle must be between 1 and 32 bytes")]
    InvalidHandle,

    #[msg("Platform must be between 1 and 16 bytes")]
    InvalidPlatform,

    #[msg("Handle index does not belong to this creator")]
    HandleMismatch,
}
