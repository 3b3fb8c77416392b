use crate::instructions::transfer_to_vault;
use crate::AddLiquidity;
use anchor_lang::prelude::*;

/// Event emitted when a provider deposits into the pool
#[event]
pub struct LiquidityAddedEvent {
    /// The pool that received the deposit
    pub pool: Pubkey,

    /// The provider credited with the new shares
    pub provider: Pubkey,

    /// Units of token A deposited
    pub amount_a: u64,

    /// Units of token B deposited
    pub amount_b: u64,

    /// Shares minted to the provider
    pub shares_minted: u64,

    /// Token A reserve after the deposit
    pub token_a_reserve: u64,

    /// Token B reserve after the deposit
    pub token_b_reserve: u64,

    /// Total shares outstanding after the deposit
    pub total_shares: u64,

    /// The timestamp of the deposit
    pub timestamp: i64,
}

/// Deposits `amount_a` and `amount_b` and mints shares to the provider
///
/// The provider's position PDA is created on first use. Both amounts are moved
/// into the vaults in full, even when they are off the pool's ratio.
///
/// # Arguments
/// * `ctx` - The context containing all necessary accounts
/// * `amount_a` - Units of token A to deposit
/// * `amount_b` - Units of token B to deposit
///
/// # Returns
/// * `Result<()>` - Result indicating success or containing an error code
pub fn handler(ctx: Context<AddLiquidity>, amount_a: u64, amount_b: u64) -> Result<()> {
    let provider_key = ctx.accounts.provider.key();
    let pool_key = ctx.accounts.pool.key();
    let accounts = ctx.accounts;

    accounts
        .position
        .bind(provider_key, pool_key, ctx.bumps.position)?;
    let shares_minted = accounts
        .pool
        .add_liquidity(&mut accounts.position, amount_a, amount_b)?;

    transfer_to_vault(
        &accounts.token_program,
        &accounts.provider_token_a,
        &accounts.vault_a,
        &accounts.provider,
        amount_a,
    )?;
    transfer_to_vault(
        &accounts.token_program,
        &accounts.provider_token_b,
        &accounts.vault_b,
        &accounts.provider,
        amount_b,
    )?;

    let pool = &accounts.pool;
    emit!(LiquidityAddedEvent {
        pool: pool_key,
        provider: provider_key,
        amount_a,
        amount_b,
        shares_minted,
        token_a_reserve: pool.token_a_reserve,
        token_b_reserve: pool.token_b_reserve,
        total_shares: pool.total_shares,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Liquidity added: {} A + {} B -> {} shares (reserves {} / {})",
        amount_a,
        amount_b,
        shares_minted,
        pool.token_a_reserve,
        pool.token_b_reserve
    );

    Ok(())
}
