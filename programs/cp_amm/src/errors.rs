/// CP AMM Error Definitions
///
/// Every failure the engine or an instruction handler can report. Each error is
/// detected before any state is written, so a rejected call leaves the pool and
/// the provider's position exactly as they were.
///
/// These errors are mapped to unique codes by the Anchor framework and are exposed
/// through the program interface to clients.
use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    /// Returned when a pool is created with `fee_bps` outside `0..=MAX_FEE_BPS`
    #[msg("Fee must be below 10000 basis points")]
    InvalidFee,

    /// Returned when `initialize_pool` targets a pool that already exists
    #[msg("The pool has already been initialized")]
    AlreadyInitialized,

    /// Returned when a deposit or swap amount is zero
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    /// Returned by add_liquidity, swap and remove_liquidity while the admin has
    /// paused the pool
    #[msg("The pool is paused")]
    PoolPaused,

    /// Returned when a deposit is too small relative to the reserves to mint a
    /// single share
    #[msg("Deposit would mint zero shares")]
    ZeroSharesMinted,

    /// Returned when swapping against a pool with no liquidity
    #[msg("The pool has no liquidity")]
    EmptyPool,

    /// Returned when a swap would pay out less than the caller's minimum
    ///
    /// This protects traders from price movements between transaction submission
    /// and execution.
    #[msg("Slippage tolerance exceeded")]
    SlippageExceeded,

    /// Returned when burning zero shares or more shares than the provider owns
    #[msg("Insufficient shares")]
    InsufficientShares,

    /// Returned when a withdrawal or swap would pay out zero of an asset
    ///
    /// Dust protection: the caller would give up shares or input tokens for nothing.
    #[msg("Calculation resulted in zero output")]
    ZeroOutput,

    /// Returned when a non-admin account attempts to pause or unpause the pool
    #[msg("Unauthorized access attempted")]
    Unauthorized,

    /// Returned when a checked arithmetic operation would overflow or underflow
    #[msg("Operation would result in math overflow")]
    Overflow,

    /// Returned when attempting to create a pool with both token mints being the same
    #[msg("Token mints must be different")]
    MintsMustDiffer,

    /// Returned when a token vault does not match the vault recorded in the pool
    #[msg("Invalid token vault")]
    InvalidVault,

    /// Returned when a user token account holds a different mint than the pool side
    /// it is paired with
    #[msg("Invalid token mint")]
    InvalidMint,

    /// Returned when a liquidity position belongs to another pool or owner
    #[msg("Position does not belong to this pool and owner")]
    InvalidPosition,
}
