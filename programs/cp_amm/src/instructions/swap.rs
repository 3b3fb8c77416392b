use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::instructions::{transfer_from_vault, transfer_to_vault};
use crate::state::pool::SwapDirection;
use crate::Swap;

/// Event emitted for every executed swap
#[event]
pub struct SwapEvent {
    pub pool: Pubkey,
    pub trader: Pubkey,
    pub direction: SwapDirection,
    /// Input paid by the trader, fee included
    pub amount_in: u64,
    /// Portion of the input retained as fee
    pub fee: u64,
    pub amount_out: u64,
    pub token_a_reserve: u64,
    pub token_b_reserve: u64,
    pub timestamp: i64,
}

pub fn handler(
    ctx: Context<Swap>,
    amount_in: u64,
    direction: SwapDirection,
    minimum_out: u64,
) -> Result<()> {
    let accounts = ctx.accounts;

    // 1. The trader's accounts must hold the mints implied by `direction`
    let (mint_in, mint_out) = match direction {
        SwapDirection::AToB => (accounts.pool.token_a_mint, accounts.pool.token_b_mint),
        SwapDirection::BToA => (accounts.pool.token_b_mint, accounts.pool.token_a_mint),
    };
    require_keys_eq!(accounts.trader_token_in.mint, mint_in, ErrorCode::InvalidMint);
    require_keys_eq!(accounts.trader_token_out.mint, mint_out, ErrorCode::InvalidMint);

    // 2. Price and apply the trade on the pool
    let quote = accounts.pool.swap(amount_in, direction, minimum_out)?;

    // 3. Settle: full input into the source vault, output from the destination vault
    let (vault_in, vault_out) = match direction {
        SwapDirection::AToB => (&accounts.vault_a, &accounts.vault_b),
        SwapDirection::BToA => (&accounts.vault_b, &accounts.vault_a),
    };
    transfer_to_vault(
        &accounts.token_program,
        &accounts.trader_token_in,
        vault_in,
        &accounts.trader,
        amount_in,
    )?;
    transfer_from_vault(
        &accounts.token_program,
        vault_out,
        &accounts.trader_token_out,
        &accounts.pool,
        quote.amount_out,
    )?;

    let pool = &accounts.pool;
    emit!(SwapEvent {
        pool: pool.key(),
        trader: accounts.trader.key(),
        direction,
        amount_in,
        fee: quote.fee,
        amount_out: quote.amount_out,
        token_a_reserve: pool.token_a_reserve,
        token_b_reserve: pool.token_b_reserve,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!(
        "Swap {:?}: {} in (fee {}) -> {} out",
        direction,
        amount_in,
        quote.fee,
        quote.amount_out
    );

    Ok(())
}
