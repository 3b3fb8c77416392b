use crate::constants::{DEFAULT_FEE_BPS, MAX_FEE_BPS};
use crate::errors::ErrorCode;
use crate::state::pool::{InitializePoolParams, Pool};
use anchor_lang::prelude::*;

/// Helper to create unique Pubkeys for testing.
fn new_pubkey(val: u8) -> Pubkey {
    let mut arr = [0u8; 32];
    arr[0] = val;
    Pubkey::new_from_array(arr)
}

mod pool_initialize_tests {
    use super::*;

    // Helper function to get default InitializePoolParams for tests
    fn get_default_params() -> InitializePoolParams {
        InitializePoolParams {
            bump: 255,
            admin: new_pubkey(1),
            token_a_mint: new_pubkey(2),
            token_b_mint: new_pubkey(3),
            token_a_vault: new_pubkey(4),
            token_b_vault: new_pubkey(5),
            fee_bps: DEFAULT_FEE_BPS,
        }
    }

    #[test]
    fn test_pool_initialize_success() {
        let mut pool = Pool::default();

        let result = pool.initialize(get_default_params());
        assert!(result.is_ok(), "Initialization failed: {:?}", result.err());

        assert_eq!(pool.bump, 255);
        assert!(pool.is_initialized);
        assert_eq!(pool.admin, new_pubkey(1));
        assert_eq!(pool.token_a_mint, new_pubkey(2));
        assert_eq!(pool.token_b_mint, new_pubkey(3));
        assert_eq!(pool.token_a_vault, new_pubkey(4));
        assert_eq!(pool.token_b_vault, new_pubkey(5));
        assert_eq!(pool.fee_bps, 30);
        assert_eq!(pool.token_a_reserve, 0);
        assert_eq!(pool.token_b_reserve, 0);
        assert_eq!(pool.total_shares, 0);
        assert!(!pool.paused);
        assert_eq!(pool.fees_accrued_a, 0);
        assert_eq!(pool.fees_accrued_b, 0);
        assert!(pool.is_empty());
        assert!(pool.reserves_consistent());
    }

    #[test]
    fn test_pool_initialize_fee_bounds() {
        for fee_bps in [0u16, 1, 30, 5_000, MAX_FEE_BPS] {
            let mut pool = Pool::default();
            let mut params = get_default_params();
            params.fee_bps = fee_bps;
            assert!(pool.initialize(params).is_ok(), "fee {fee_bps} rejected");
            assert_eq!(pool.fee_bps, fee_bps);
        }
    }

    #[test]
    fn test_pool_initialize_error_invalid_fee() {
        for fee_bps in [10_000u16, 10_001, u16::MAX] {
            let mut pool = Pool::default();
            let mut params = get_default_params();
            params.fee_bps = fee_bps;

            let result = pool.initialize(params);
            assert_eq!(result.err().unwrap(), ErrorCode::InvalidFee.into());
            assert!(!pool.is_initialized);
        }
    }

    #[test]
    fn test_pool_initialize_error_already_initialized() {
        let mut pool = Pool::default();
        pool.initialize(get_default_params()).unwrap();

        // A second call with a different fee and admin must not overwrite anything
        let mut params = get_default_params();
        params.fee_bps = 100;
        params.admin = new_pubkey(9);

        let result = pool.initialize(params);
        assert_eq!(
            result.err().unwrap(),
            ErrorCode::AlreadyInitialized.into()
        );
        assert_eq!(pool.fee_bps, 30);
        assert_eq!(pool.admin, new_pubkey(1));
    }

    #[test]
    fn test_pool_initialize_error_mints_must_differ() {
        let mut pool = Pool::default();
        let mut params = get_default_params();
        params.token_b_mint = params.token_a_mint; // Make mints the same

        let result = pool.initialize(params);
        assert!(result.is_err());
        assert_eq!(result.err().unwrap(), ErrorCode::MintsMustDiffer.into());
    }

    #[test]
    fn test_pool_len_covers_serialized_account() {
        let mut pool = Pool::default();
        pool.initialize(get_default_params()).unwrap();

        let mut data = Vec::new();
        pool.try_serialize(&mut data).unwrap();
        // LEN includes the 8-byte discriminator
        assert_eq!(data.len(), Pool::LEN);
    }
}
