use crate::errors::ErrorCode;
use crate::position::LiquidityPosition;
use crate::state::pool::{InitializePoolParams, Pool, SwapDirection, SwapQuote};
use anchor_lang::prelude::*;

fn setup_pool(fee_bps: u16) -> (Pool, Pubkey) {
    let admin = Pubkey::new_unique();
    let mut pool = Pool::default();
    pool.initialize(InitializePoolParams {
        bump: 254,
        admin,
        token_a_mint: Pubkey::new_unique(),
        token_b_mint: Pubkey::new_unique(),
        token_a_vault: Pubkey::new_unique(),
        token_b_vault: Pubkey::new_unique(),
        fee_bps,
    })
    .unwrap();
    (pool, admin)
}

fn new_position() -> LiquidityPosition {
    let mut position = LiquidityPosition::default();
    position
        .bind(Pubkey::new_unique(), Pubkey::new_unique(), 253)
        .unwrap();
    position
}

/// Pool funded with `amount_a`/`amount_b` by a single provider.
fn funded_pool(fee_bps: u16, amount_a: u64, amount_b: u64) -> (Pool, Pubkey, LiquidityPosition) {
    let (mut pool, admin) = setup_pool(fee_bps);
    let mut position = new_position();
    pool.add_liquidity(&mut position, amount_a, amount_b).unwrap();
    (pool, admin, position)
}

mod add_liquidity_tests {
    use super::*;

    #[test]
    fn test_first_deposit_mints_geometric_mean() {
        let cases = [
            (500u64, 500u64, 500u64),
            (400, 900, 600),
            (1_000, 4_000, 2_000),
            (1_000_000, 1, 1_000),
        ];
        for (amount_a, amount_b, expected) in cases {
            let (mut pool, _) = setup_pool(30);
            let mut position = new_position();

            let minted = pool.add_liquidity(&mut position, amount_a, amount_b).unwrap();

            assert_eq!(minted, expected);
            assert_eq!(pool.token_a_reserve, amount_a);
            assert_eq!(pool.token_b_reserve, amount_b);
            assert_eq!(pool.total_shares, expected);
            assert_eq!(position.shares, expected);
            assert!(pool.reserves_consistent());
        }
    }

    #[test]
    fn test_subsequent_deposit_on_ratio() {
        let (mut pool, _, _) = funded_pool(30, 1_000, 4_000);
        let mut second = new_position();

        let minted = pool.add_liquidity(&mut second, 100, 400).unwrap();

        assert_eq!(minted, 200);
        assert_eq!(pool.token_a_reserve, 1_100);
        assert_eq!(pool.token_b_reserve, 4_400);
        assert_eq!(pool.total_shares, 2_200);
        assert_eq!(second.shares, 200);
    }

    #[test]
    fn test_subsequent_deposit_off_ratio_keeps_excess() {
        let (mut pool, _, _) = funded_pool(30, 1_000, 4_000);
        let mut second = new_position();

        let minted = pool.add_liquidity(&mut second, 100, 1_000).unwrap();

        // A side decides; the extra B is absorbed by the pool
        assert_eq!(minted, 200);
        assert_eq!(pool.token_a_reserve, 1_100);
        assert_eq!(pool.token_b_reserve, 5_000);
        assert_eq!(pool.total_shares, 2_200);
    }

    #[test]
    fn test_same_provider_accumulates_shares() {
        let (mut pool, _, mut position) = funded_pool(30, 1_000, 4_000);

        pool.add_liquidity(&mut position, 100, 400).unwrap();

        assert_eq!(position.shares, 2_200);
        assert_eq!(position.shares, pool.total_shares);
    }

    #[test]
    fn test_zero_amounts_rejected() {
        let (mut pool, _) = setup_pool(30);
        let mut position = new_position();

        for (a, b) in [(0u64, 100u64), (100, 0), (0, 0)] {
            let result = pool.add_liquidity(&mut position, a, b);
            assert_eq!(result.err().unwrap(), ErrorCode::InvalidAmount.into());
        }
        assert!(pool.is_empty());
        assert_eq!(position.shares, 0);
    }

    #[test]
    fn test_dust_deposit_mints_nothing() {
        let (mut pool, _, _) = funded_pool(30, 1_000_000, 1);
        let mut second = new_position();

        let result = pool.add_liquidity(&mut second, 1, 1);

        assert_eq!(result.err().unwrap(), ErrorCode::ZeroSharesMinted.into());
        assert_eq!(pool.token_a_reserve, 1_000_000);
        assert_eq!(pool.token_b_reserve, 1);
        assert_eq!(pool.total_shares, 1_000);
        assert_eq!(second.shares, 0);
    }

    #[test]
    fn test_reserve_overflow_leaves_state_unchanged() {
        let (mut pool, _, mut position) = funded_pool(30, u64::MAX, u64::MAX);
        assert_eq!(pool.total_shares, u64::MAX);

        let result = pool.add_liquidity(&mut position, 1, 1);

        assert_eq!(result.err().unwrap(), ErrorCode::Overflow.into());
        assert_eq!(pool.token_a_reserve, u64::MAX);
        assert_eq!(pool.token_b_reserve, u64::MAX);
        assert_eq!(position.shares, u64::MAX);
    }
}

mod swap_tests {
    use super::*;

    #[test]
    fn test_swap_a_to_b() {
        let (mut pool, _, _) = funded_pool(30, 500_000, 500_000);
        let k_before = pool.constant_product();

        let quote = pool.swap(10_000, SwapDirection::AToB, 0).unwrap();

        assert_eq!(
            quote,
            SwapQuote {
                fee: 30,
                amount_in_after_fee: 9_970,
                amount_out: 9_775,
            }
        );
        assert_eq!(pool.token_a_reserve, 510_000);
        assert_eq!(pool.token_b_reserve, 490_225);
        assert_eq!(pool.total_shares, 500_000);
        assert_eq!(pool.fees_accrued_a, 30);
        assert_eq!(pool.fees_accrued_b, 0);
        assert!(pool.constant_product() >= k_before);
    }

    #[test]
    fn test_swap_b_to_a() {
        let (mut pool, _, _) = funded_pool(30, 1_000, 4_000);
        let k_before = pool.constant_product();

        let quote = pool.swap(1_000, SwapDirection::BToA, 0).unwrap();

        assert_eq!(quote.fee, 3);
        assert_eq!(quote.amount_out, 199);
        assert_eq!(pool.token_a_reserve, 801);
        assert_eq!(pool.token_b_reserve, 5_000);
        assert_eq!(pool.fees_accrued_b, 3);
        assert!(pool.constant_product() >= k_before);
    }

    #[test]
    fn test_quote_matches_swap_and_is_read_only() {
        let (mut pool, _, _) = funded_pool(30, 500_000, 500_000);

        let quote = pool.quote_swap(10_000, SwapDirection::AToB).unwrap();
        assert_eq!(pool.token_a_reserve, 500_000);
        assert_eq!(pool.token_b_reserve, 500_000);

        let executed = pool.swap(10_000, SwapDirection::AToB, 0).unwrap();
        assert_eq!(quote, executed);
    }

    #[test]
    fn test_swap_slippage_protection() {
        let (mut pool, _, _) = funded_pool(30, 500, 500);

        let result = pool.swap(100, SwapDirection::AToB, 90);
        assert_eq!(result.err().unwrap(), ErrorCode::SlippageExceeded.into());
        assert_eq!(pool.token_a_reserve, 500);
        assert_eq!(pool.token_b_reserve, 500);

        // Exactly at the quoted output succeeds
        let quote = pool.swap(100, SwapDirection::AToB, 83).unwrap();
        assert_eq!(quote.amount_out, 83);
        assert_eq!(pool.token_a_reserve, 600);
        assert_eq!(pool.token_b_reserve, 417);
    }

    #[test]
    fn test_swap_zero_output_rejected() {
        let (mut pool, _, _) = funded_pool(30, 1_000, 1_000);

        let result = pool.swap(1, SwapDirection::AToB, 0);

        assert_eq!(result.err().unwrap(), ErrorCode::ZeroOutput.into());
        assert_eq!(pool.token_a_reserve, 1_000);
        assert_eq!(pool.token_b_reserve, 1_000);
    }

    #[test]
    fn test_swap_zero_amount_rejected() {
        let (mut pool, _, _) = funded_pool(30, 1_000, 1_000);

        let result = pool.swap(0, SwapDirection::BToA, 0);
        assert_eq!(result.err().unwrap(), ErrorCode::InvalidAmount.into());
    }

    #[test]
    fn test_swap_on_empty_pool() {
        let (mut pool, _) = setup_pool(30);

        let result = pool.swap(100, SwapDirection::AToB, 0);
        assert_eq!(result.err().unwrap(), ErrorCode::EmptyPool.into());
    }

    #[test]
    fn test_zero_fee_pool_charges_nothing() {
        let (mut pool, _, _) = funded_pool(0, 1_000, 1_000);

        let quote = pool.swap(1_000, SwapDirection::AToB, 0).unwrap();

        assert_eq!(quote.fee, 0);
        assert_eq!(quote.amount_out, 500);
        assert_eq!(pool.fees_accrued_a, 0);
    }

    #[test]
    fn test_round_trip_swap_never_profits_trader() {
        let (mut pool, _, _) = funded_pool(30, 1_000_000, 1_000_000);

        let first = pool.swap(50_000, SwapDirection::AToB, 0).unwrap();
        let second = pool
            .swap(first.amount_out, SwapDirection::BToA, 0)
            .unwrap();

        assert!(second.amount_out < 50_000);
    }
}

mod remove_liquidity_tests {
    use super::*;

    #[test]
    fn test_remove_all_liquidity_empties_pool() {
        let (mut pool, _, mut position) = funded_pool(30, 1_000, 4_000);

        let (amount_a, amount_b) = pool.remove_liquidity(&mut position, 2_000).unwrap();

        assert_eq!((amount_a, amount_b), (1_000, 4_000));
        assert!(pool.is_empty());
        assert_eq!(pool.token_a_reserve, 0);
        assert_eq!(pool.token_b_reserve, 0);
        assert_eq!(position.shares, 0);
        assert!(pool.reserves_consistent());
    }

    #[test]
    fn test_remove_partial_liquidity() {
        let (mut pool, _, mut position) = funded_pool(30, 1_000, 4_000);

        let (amount_a, amount_b) = pool.remove_liquidity(&mut position, 200).unwrap();

        assert_eq!((amount_a, amount_b), (100, 400));
        assert_eq!(pool.token_a_reserve, 900);
        assert_eq!(pool.token_b_reserve, 3_600);
        assert_eq!(pool.total_shares, 1_800);
        assert_eq!(position.shares, 1_800);
    }

    #[test]
    fn test_remove_after_swap_includes_fees() {
        let (mut pool, _, mut position) = funded_pool(30, 500_000, 500_000);
        pool.swap(10_000, SwapDirection::AToB, 0).unwrap();

        let (amount_a, amount_b) = pool.remove_liquidity(&mut position, 500_000).unwrap();

        assert_eq!(amount_a, 510_000);
        assert_eq!(amount_b, 490_225);
        assert!(pool.is_empty());
    }

    #[test]
    fn test_remove_more_than_owned() {
        let (mut pool, _, mut position) = funded_pool(30, 1_000, 4_000);

        let result = pool.remove_liquidity(&mut position, 2_001);

        assert_eq!(result.err().unwrap(), ErrorCode::InsufficientShares.into());
        assert_eq!(pool.total_shares, 2_000);
        assert_eq!(position.shares, 2_000);
    }

    #[test]
    fn test_remove_zero_shares() {
        let (mut pool, _, mut position) = funded_pool(30, 1_000, 4_000);

        let result = pool.remove_liquidity(&mut position, 0);
        assert_eq!(result.err().unwrap(), ErrorCode::InsufficientShares.into());
    }

    #[test]
    fn test_remove_with_foreign_position_rejected() {
        let (mut pool, _, _) = funded_pool(30, 1_000, 4_000);
        let mut stranger = new_position();

        let result = pool.remove_liquidity(&mut stranger, 1);
        assert_eq!(result.err().unwrap(), ErrorCode::InsufficientShares.into());
    }

    #[test]
    fn test_remove_dust_rejected() {
        let (mut pool, _, mut position) = funded_pool(30, 1_000_000, 1);

        let result = pool.remove_liquidity(&mut position, 1);

        assert_eq!(result.err().unwrap(), ErrorCode::ZeroOutput.into());
        assert_eq!(pool.total_shares, 1_000);
        assert_eq!(position.shares, 1_000);
    }

    #[test]
    fn test_pool_can_be_refunded_after_emptying() {
        let (mut pool, _, mut position) = funded_pool(30, 1_000, 4_000);
        pool.remove_liquidity(&mut position, 2_000).unwrap();

        let minted = pool.add_liquidity(&mut position, 400, 900).unwrap();

        assert_eq!(minted, 600);
        assert_eq!(pool.total_shares, 600);
    }
}

mod pause_tests {
    use super::*;

    #[test]
    fn test_admin_can_pause_and_unpause() {
        let (mut pool, admin, _) = funded_pool(30, 1_000, 1_000);

        pool.set_paused(&admin, true).unwrap();
        assert!(pool.paused);
        // Repeating the current value is fine
        pool.set_paused(&admin, true).unwrap();
        assert!(pool.paused);

        pool.set_paused(&admin, false).unwrap();
        assert!(!pool.paused);
    }

    #[test]
    fn test_non_admin_cannot_pause() {
        let (mut pool, _, _) = funded_pool(30, 1_000, 1_000);
        let intruder = Pubkey::new_unique();

        let result = pool.set_paused(&intruder, true);

        assert_eq!(result.err().unwrap(), ErrorCode::Unauthorized.into());
        assert!(!pool.paused);
    }

    #[test]
    fn test_paused_pool_rejects_operations() {
        let (mut pool, admin, mut position) = funded_pool(30, 1_000, 1_000);
        pool.set_paused(&admin, true).unwrap();

        let result = pool.add_liquidity(&mut position, 100, 100);
        assert_eq!(result.err().unwrap(), ErrorCode::PoolPaused.into());

        let result = pool.swap(100, SwapDirection::AToB, 0);
        assert_eq!(result.err().unwrap(), ErrorCode::PoolPaused.into());

        let result = pool.remove_liquidity(&mut position, 100);
        assert_eq!(result.err().unwrap(), ErrorCode::PoolPaused.into());

        // Pause is checked before argument validation
        let result = pool.swap(0, SwapDirection::AToB, 0);
        assert_eq!(result.err().unwrap(), ErrorCode::PoolPaused.into());

        assert_eq!(pool.token_a_reserve, 1_000);
        assert_eq!(pool.token_b_reserve, 1_000);
        assert_eq!(position.shares, 1_000);
    }

    #[test]
    fn test_quote_is_available_while_paused() {
        let (mut pool, admin, _) = funded_pool(30, 500_000, 500_000);
        pool.set_paused(&admin, true).unwrap();

        let quote = pool.quote_swap(10_000, SwapDirection::AToB).unwrap();
        assert_eq!(quote.amount_out, 9_775);
    }

    #[test]
    fn test_unpause_restores_operations() {
        let (mut pool, admin, _) = funded_pool(30, 500_000, 500_000);
        pool.set_paused(&admin, true).unwrap();
        pool.set_paused(&admin, false).unwrap();

        assert!(pool.swap(10_000, SwapDirection::AToB, 0).is_ok());
    }
}
