#![no_main]

use anchor_lang::prelude::Pubkey;
use arbitrary::Arbitrary;
use cp_amm::constants::MAX_FEE_BPS;
use cp_amm::position::LiquidityPosition;
use cp_amm::state::pool::{InitializePoolParams, Pool, SwapDirection};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct SwapInput {
    fee_bps: u16,
    reserve_a: u64,
    reserve_b: u64,
    trades: Vec<(u64, bool)>,
}

// Fuzzes swaps against a funded pool.
//
// This fuzz target:
// 1. Seeds a pool with arbitrary non-zero reserves
// 2. Runs a sequence of swaps in both directions
// 3. Checks after each one that the reserve product never shrinks and that a
//    failed swap leaves the reserves untouched
fuzz_target!(|input: SwapInput| {
    if input.reserve_a == 0 || input.reserve_b == 0 {
        return;
    }

    let mut pool = Pool::default();
    let params = InitializePoolParams {
        bump: 255,
        admin: Pubkey::new_unique(),
        token_a_mint: Pubkey::new_unique(),
        token_b_mint: Pubkey::new_unique(),
        token_a_vault: Pubkey::new_unique(),
        token_b_vault: Pubkey::new_unique(),
        fee_bps: input.fee_bps % (MAX_FEE_BPS + 1),
    };
    if pool.initialize(params).is_err() {
        return;
    }

    let mut position = LiquidityPosition::default();
    if pool
        .add_liquidity(&mut position, input.reserve_a, input.reserve_b)
        .is_err()
    {
        return;
    }

    for (amount_in, a_to_b) in input.trades.into_iter().take(32) {
        let direction = if a_to_b {
            SwapDirection::AToB
        } else {
            SwapDirection::BToA
        };
        let k_before = pool.constant_product();
        let reserves_before = (pool.token_a_reserve, pool.token_b_reserve);
        let quote = pool.quote_swap(amount_in, direction);

        match pool.swap(amount_in, direction, 0) {
            Ok(executed) => {
                assert_eq!(quote.ok(), Some(executed));
                assert!(executed.amount_out > 0);
                assert!(pool.constant_product() >= k_before);
                assert!(pool.token_a_reserve > 0 && pool.token_b_reserve > 0);
            }
            Err(_) => {
                assert_eq!((pool.token_a_reserve, pool.token_b_reserve), reserves_before);
            }
        }
    }
});
