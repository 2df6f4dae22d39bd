use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Input account owner is not the program admin")]
    InvalidOwner,

    #[msg("Artist is already registered")]
    AlreadyRegistered,

    #[msg("Artist is not registered")]
    NotRegistered,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Payment is too small to issue a single share unit")]
    ZeroUnitsIssued,

    #[msg("Issuance would exceed the remaining reserve supply")]
    InsufficientReserve,

    #[msg("Unstake amount exceeds the staked balance")]
    InsufficientStake,

    #[msg("Account has no stake")]
    NoStake,

    #[msg("Cannot distribute rewards to a pool with no stakers")]
    EmptyPool,

    #[msg("Payment token account has the wrong mint")]
    InvalidPaymentMint,

    #[msg("Split ratio exceeds the ratio denominator")]
    InvalidSplitRatio,

    #[msg("Invalid parameter provided")]
    InvalidParam,

    #[msg("Missing remaining account")]
    MissingRemainingAccount,

    #[msg("Math operation overflowed or underflowed")]
    MathOverflow,
}
