use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("Unauthorized signer for this ledger operation")]
    Unauthorized,

    #[msg("New ledger creation is paused")]
    CreationPaused,

    #[msg("Token name must be between 1 and 32 bytes")]
    InvalidName,

    #[msg("Token symbol must be between 1 and 10 bytes")]
    InvalidSymbol,

    #[msg("Burn reason must be between 1 and 64 bytes")]
    InvalidReason,

    #[msg("Reported metric is below the last recorded value")]
    MetricDecreased,

    #[msg("Mint would exceed the supply cap")]
    CapExceeded,

    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,

    #[msg("Milestone list is full")]
    MilestoneListFull,

    #[msg("Milestone reward must be greater than zero")]
    InvalidMilestone,

    #[msg("Creator balance is insufficient for this burn")]
    InsufficientBalance,

    #[msg("Token account does not match the ledger mint")]
    InvalidMint,
}
