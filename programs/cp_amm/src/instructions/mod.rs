/// # CP AMM Instructions
///
/// Instruction handlers for the constant-product AMM. Each handler validates the
/// accounts it was given, runs the matching state transition on the `Pool`,
/// moves tokens through the SPL token program, and emits an event.
///
/// ## Instruction Flow
///
/// 1. **Pool Initialization** - Create the pool and its two vaults for a mint pair
/// 2. **Add Liquidity** - Deposit both tokens and receive shares
/// 3. **Swap** - Trade one token for the other along `x * y = k`
/// 4. **Remove Liquidity** - Burn shares for the proportional reserves
/// 5. **Pause Contract** - Admin switch that halts steps 2-4
///
/// The engine runs before any token moves. A rejected state transition therefore
/// never leaves a transfer half done, and the runtime rolls back the whole
/// instruction if a transfer itself fails.
pub mod add_liquidity;
pub mod initialize_pool;
pub mod pause_contract;
pub mod remove_liquidity;
pub mod swap;

use crate::constants::POOL_SEED;
use crate::state::pool::Pool;
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

/// Moves `amount` from a user's token account into one of the pool's vaults.
pub(crate) fn transfer_to_vault<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    vault: &Account<'info, TokenAccount>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    token::transfer(
        CpiContext::new(
            token_program.to_account_info(),
            Transfer {
                from: from.to_account_info(),
                to: vault.to_account_info(),
                authority: authority.to_account_info(),
            },
        ),
        amount,
    )
}

/// Moves `amount` out of one of the pool's vaults, signed by the pool PDA.
pub(crate) fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    pool: &Account<'info, Pool>,
    amount: u64,
) -> Result<()> {
    let bump = [pool.bump];
    let pool_seeds: &[&[u8]] = &[
        POOL_SEED,
        pool.token_a_mint.as_ref(),
        pool.token_b_mint.as_ref(),
        &bump,
    ];
    let signer_seeds = &[pool_seeds];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            Transfer {
                from: vault.to_account_info(),
                to: to.to_account_info(),
                authority: pool.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )
}
