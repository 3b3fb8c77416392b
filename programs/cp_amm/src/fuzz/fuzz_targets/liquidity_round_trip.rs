#![no_main]

use anchor_lang::prelude::Pubkey;
use arbitrary::Arbitrary;
use cp_amm::position::LiquidityPosition;
use cp_amm::state::pool::{InitializePoolParams, Pool};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct RoundTripInput {
    seed_a: u64,
    seed_b: u64,
    amount_a: u64,
    amount_b: u64,
}

// Fuzzes a late deposit followed by a full withdrawal of the minted shares.
//
// The late provider must never get back more of either token than it put in,
// and the seeding provider's claim must be untouched by the round trip.
fuzz_target!(|input: RoundTripInput| {
    let mut pool = Pool::default();
    let params = InitializePoolParams {
        bump: 255,
        admin: Pubkey::new_unique(),
        token_a_mint: Pubkey::new_unique(),
        token_b_mint: Pubkey::new_unique(),
        token_a_vault: Pubkey::new_unique(),
        token_b_vault: Pubkey::new_unique(),
        fee_bps: 30,
    };
    if pool.initialize(params).is_err() {
        return;
    }

    let mut seeder = LiquidityPosition::default();
    if pool
        .add_liquidity(&mut seeder, input.seed_a, input.seed_b)
        .is_err()
    {
        return;
    }

    let mut late = LiquidityPosition::default();
    let minted = match pool.add_liquidity(&mut late, input.amount_a, input.amount_b) {
        Ok(minted) => minted,
        Err(_) => return,
    };
    assert_eq!(seeder.shares + late.shares, pool.total_shares);

    if let Ok((out_a, out_b)) = pool.remove_liquidity(&mut late, minted) {
        assert!(out_a <= input.amount_a);
        assert!(out_b <= input.amount_b);
        assert_eq!(late.shares, 0);
        assert_eq!(pool.total_shares, seeder.shares);
        assert!(pool.reserves_consistent());
    }
});
