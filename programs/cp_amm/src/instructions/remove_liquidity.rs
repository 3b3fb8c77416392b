use crate::instructions::transfer_from_vault;
use crate::RemoveLiquidity;
use anchor_lang::prelude::*;

/// Event emitted when a provider burns shares
#[event]
pub struct LiquidityRemovedEvent {
    /// The pool the shares were redeemed against
    pub pool: Pubkey,

    /// The provider whose shares were burned
    pub provider: Pubkey,

    /// Shares burned
    pub shares_burned: u64,

    /// Units of token A paid out
    pub amount_a: u64,

    /// Units of token B paid out
    pub amount_b: u64,

    /// Token A reserve after the withdrawal
    pub token_a_reserve: u64,

    /// Token B reserve after the withdrawal
    pub token_b_reserve: u64,

    /// Total shares outstanding after the withdrawal
    pub total_shares: u64,

    /// The timestamp of the withdrawal
    pub timestamp: i64,
}

/// Burns `shares` from the provider's position and pays out both reserves pro rata
///
/// # Arguments
/// * `ctx` - The context containing all necessary accounts
/// * `shares` - Shares to burn
///
/// # Returns
/// * `Result<()>` - Result indicating success or containing an error code
pub fn handler(ctx: Context<RemoveLiquidity>, shares: u64) -> Result<()> {
    let accounts = ctx.accounts;

    let (amount_a, amount_b) = accounts
        .pool
        .remove_liquidity(&mut accounts.position, shares)?;

    transfer_from_vault(
        &accounts.token_program,
        &accounts.vault_a,
        &accounts.provider_token_a,
        &accounts.pool,
        amount_a,
    )?;
    transfer_from_vault(
        &accounts.token_program,
        &accounts.vault_b,
        &accounts.provider_token_b,
        &accounts.pool,
        amount_b,
    )?;

    let pool = &accounts.pool;
    emit!(LiquidityRemovedEvent {
        pool: pool.key(),
        provider: accounts.provider.key(),
        shares_burned: shares,
        amount_a,
        amount_b,
        token_a_reserve: pool.token_a_reserve,
        token_b_reserve: pool.token_b_reserve,
        total_shares: pool.total_shares,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Liquidity removed: {} shares -> {} A + {} B",
        shares,
        amount_a,
        amount_b
    );

    Ok(())
}
