/// Initialize Pool Instruction Module
///
/// Creates the market for one mint pair: the pool PDA, the two vaults it signs
/// for, and the immutable fee. The signer becomes the pool's admin. The pool
/// starts empty and unpaused; the first `add_liquidity` sets its price.
use crate::state::pool::InitializePoolParams;
use crate::InitializePool;
use anchor_lang::prelude::*;

/// Handler function for initializing a new liquidity pool
///
/// # Parameters
/// * `ctx` - The context containing all accounts involved in the operation
/// * `fee_bps` - The swap fee in basis points
///
/// # Errors
/// * `ErrorCode::AlreadyInitialized` - If the pool for this mint pair exists
/// * `ErrorCode::MintsMustDiffer` - If both token mints are the same
/// * `ErrorCode::InvalidFee` - If `fee_bps` is 10,000 or more
pub fn handler(ctx: Context<InitializePool>, fee_bps: u16) -> Result<()> {
    let params = InitializePoolParams {
        bump: ctx.bumps.pool,
        admin: ctx.accounts.admin.key(),
        token_a_mint: ctx.accounts.mint_a.key(),
        token_b_mint: ctx.accounts.mint_b.key(),
        token_a_vault: ctx.accounts.vault_a.key(),
        token_b_vault: ctx.accounts.vault_b.key(),
        fee_bps,
    };

    let pool = &mut ctx.accounts.pool;
    pool.initialize(params)?;

    emit!(PoolInitializedEvent {
        pool_id: pool.key(),
        admin: pool.admin,
        token_a_mint: pool.token_a_mint,
        token_b_mint: pool.token_b_mint,
        fee_bps,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Pool initialized: {} <> {} with fee: {} bps",
        pool.token_a_mint,
        pool.token_b_mint,
        fee_bps
    );

    Ok(())
}

/// Event emitted when a new liquidity pool is initialized
#[event]
pub struct PoolInitializedEvent {
    /// The address of the newly created pool
    pub pool_id: Pubkey,

    /// The account allowed to pause the pool
    pub admin: Pubkey,

    /// Token A mint address
    pub token_a_mint: Pubkey,

    /// Token B mint address
    pub token_b_mint: Pubkey,

    /// Swap fee in basis points
    pub fee_bps: u16,

    /// Timestamp of pool creation
    pub timestamp: i64,
}
