use anchor_lang::prelude::*;

/// Custom error codes for the tranche vesting program.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: owner signature required")]
    UnauthorizedOwner,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid configuration")]
    InvalidConfig,

    #[msg("Invalid timestamp")]
    InvalidTimestamp,

    #[msg("Ledger is already initialized")]
    AlreadyInitialized,

    #[msg("Ledger is not active (uninitialized or paused)")]
    NotActive,

    #[msg("Invalid pause transition")]
    InvalidPauseTransition,

    #[msg("Withdraw requires a paused or uninitialized ledger")]
    NotPaused,

    #[msg("Withdraw amount exceeds the withdrawable balance")]
    InsufficientWithdrawable,

    #[msg("Token transfer failed: vault balance does not cover the amount")]
    TransferFailed,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Math overflow")]
    MathOverflow,
}
