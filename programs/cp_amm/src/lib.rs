#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use constants::{POOL_SEED, POSITION_SEED, VAULT_A_SEED, VAULT_B_SEED};
use errors::ErrorCode;
use position::LiquidityPosition;
use state::pool::{Pool, SwapDirection};

// Program ID used by the test validator and local deployments.
declare_id!("HYtYWSrCFTumBJDfzJmBqCuBCPx5brMmtnV4b3qYzQyr");

// Modules for constants, errors, core math, and state definitions
pub mod constants;
pub mod errors;
pub mod math;
pub mod position; // Defines LiquidityPosition
pub mod state; // Defines Pool state (state::pool::Pool)

// Module for instruction handlers and their account contexts
pub mod instructions;

#[cfg(test)]
pub mod unit_test;


#[program]
pub mod cp_amm {
    use super::*;

    /// Creates the pool for a pair of mints together with its two vaults.
    ///
    /// The signer becomes the pool's admin.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `fee_bps` - The swap fee in basis points (e.g., 30 for 0.3%), below 10,000.
    pub fn initialize_pool(ctx: Context<InitializePool>, fee_bps: u16) -> Result<()> {
        instructions::initialize_pool::handler(ctx, fee_bps)
    }

    /// Deposits both tokens and mints liquidity shares to the provider.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `amount_a` - Units of token A to deposit.
    /// * `amount_b` - Units of token B to deposit.
    pub fn add_liquidity(ctx: Context<AddLiquidity>, amount_a: u64, amount_b: u64) -> Result<()> {
        instructions::add_liquidity::handler(ctx, amount_a, amount_b)
    }

    /// Swaps an exact input amount through the constant-product curve.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `amount_in` - The exact amount of the input token to swap, fee included.
    /// * `direction` - Which token is sold to the pool.
    /// * `minimum_out` - The minimum amount of the output token the trader accepts.
    pub fn swap(
        ctx: Context<Swap>,
        amount_in: u64,
        direction: SwapDirection,
        minimum_out: u64,
    ) -> Result<()> {
        instructions::swap::handler(ctx, amount_in, direction, minimum_out)
    }

    /// Burns liquidity shares and returns the proportional reserves.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The context containing all necessary accounts.
    /// * `shares` - The number of shares to burn.
    pub fn remove_liquidity(ctx: Context<RemoveLiquidity>, shares: u64) -> Result<()> {
        instructions::remove_liquidity::handler(ctx, shares)
    }

    /// Pauses or unpauses deposits, swaps and withdrawals. Admin only.
    pub fn pause_contract(ctx: Context<PauseContract>, paused: bool) -> Result<()> {
        instructions::pause_contract::handler(ctx, paused)
    }
}

#[derive(Accounts)]
pub struct InitializePool<'info> {
    // `init_if_needed` lets a repeated call reach the handler, which rejects it
    // with `AlreadyInitialized`.
    #[account(
        init_if_needed,
        payer = admin,
        space = Pool::LEN,
        seeds = [
            POOL_SEED,
            mint_a.key().as_ref(),
            mint_b.key().as_ref()
        ],
        bump
    )]
    pub pool: Account<'info, Pool>,

    pub mint_a: Account<'info, Mint>,
    pub mint_b: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [VAULT_A_SEED, pool.key().as_ref()],
        bump,
        token::mint = mint_a,
        token::authority = pool, // The `pool` account (PDA) is the authority
    )]
    pub vault_a: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [VAULT_B_SEED, pool.key().as_ref()],
        bump,
        token::mint = mint_b,
        token::authority = pool,
    )]
    pub vault_b: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    #[account(
        mut,
        seeds = [
            POOL_SEED,
            pool.token_a_mint.as_ref(),
            pool.token_b_mint.as_ref()
        ],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        init_if_needed,
        payer = provider,
        space = LiquidityPosition::LEN,
        seeds = [
            POSITION_SEED,
            pool.key().as_ref(),
            provider.key().as_ref()
        ],
        bump
    )]
    pub position: Account<'info, LiquidityPosition>,

    #[account(mut, address = pool.token_a_vault @ ErrorCode::InvalidVault)]
    pub vault_a: Account<'info, TokenAccount>,

    #[account(mut, address = pool.token_b_vault @ ErrorCode::InvalidVault)]
    pub vault_b: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = provider_token_a.mint == pool.token_a_mint @ ErrorCode::InvalidMint
    )]
    pub provider_token_a: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = provider_token_b.mint == pool.token_b_mint @ ErrorCode::InvalidMint
    )]
    pub provider_token_b: Account<'info, TokenAccount>,

    #[account(mut)]
    pub provider: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(
        mut,
        seeds = [
            POOL_SEED,
            pool.token_a_mint.as_ref(),
            pool.token_b_mint.as_ref()
        ],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(mut, address = pool.token_a_vault @ ErrorCode::InvalidVault)]
    pub vault_a: Account<'info, TokenAccount>,

    #[account(mut, address = pool.token_b_vault @ ErrorCode::InvalidVault)]
    pub vault_b: Account<'info, TokenAccount>,

    // Mints of the trader's accounts are checked against `direction` in the handler.
    #[account(mut)]
    pub trader_token_in: Account<'info, TokenAccount>,

    #[account(mut)]
    pub trader_token_out: Account<'info, TokenAccount>,

    pub trader: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
    #[account(
        mut,
        seeds = [
            POOL_SEED,
            pool.token_a_mint.as_ref(),
            pool.token_b_mint.as_ref()
        ],
        bump = pool.bump
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [
            POSITION_SEED,
            pool.key().as_ref(),
            provider.key().as_ref()
        ],
        bump = position.bump,
        constraint = position.owner == provider.key() @ ErrorCode::InvalidPosition,
        constraint = position.pool == pool.key() @ ErrorCode::InvalidPosition
    )]
    pub position: Account<'info, LiquidityPosition>,

    #[account(mut, address = pool.token_a_vault @ ErrorCode::InvalidVault)]
    pub vault_a: Account<'info, TokenAccount>,

    #[account(mut, address = pool.token_b_vault @ ErrorCode::InvalidVault)]
    pub vault_b: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = provider_token_a.mint == pool.token_a_mint @ ErrorCode::InvalidMint
    )]
    pub provider_token_a: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = provider_token_b.mint == pool.token_b_mint @ ErrorCode::InvalidMint
    )]
    pub provider_token_b: Account<'info, TokenAccount>,

    pub provider: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct PauseContract<'info> {
    // No `has_one = admin` here: the engine compares identities itself and
    // reports `Unauthorized`.
    #[account(mut)]
    pub pool: Account<'info, Pool>,

    pub admin: Signer<'info>,
}
