use anchor_lang::prelude::*;

#[error_code]
pub enum WalletError {
    #[msg("Unauthorized: admin signature required")]
    UnauthorizedAdmin,

    #[msg("Unauthorized: wallet owner signature required")]
    Unauthorized,

    #[msg("Caller is neither verified nor explicitly authorized")]
    NotAuthorized,

    #[msg("Credential account is not a valid authorization or verification record")]
    InvalidCredential,

    #[msg("Batch is empty")]
    EmptyBatch,

    #[msg("Too many steps in a single batch")]
    BatchTooLarge,

    #[msg("Not enough accounts supplied for the requested execution")]
    MissingAccounts,
}
