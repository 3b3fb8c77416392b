#![no_main]

use cp_amm::constants::MAX_FEE_BPS;
use cp_amm::math::compute_fee;
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct FeeCalculationInput {
    amount_in: u64,
    fee_bps: u16,
}

// Fuzzes the basis-point fee over the whole u64 input range.
//
// Any accepted fee must be strictly smaller than a non-zero input, and the fee
// for a larger input can never be smaller.
fuzz_target!(|input: FeeCalculationInput| {
    let fee_bps = input.fee_bps % (MAX_FEE_BPS + 1);

    let fee = match compute_fee(input.amount_in, fee_bps) {
        Ok(fee) => fee,
        Err(_) => panic!("fee overflowed for {:?}", input),
    };

    if input.amount_in > 0 {
        assert!(fee < input.amount_in);
    } else {
        assert_eq!(fee, 0);
    }

    if let Some(larger) = input.amount_in.checked_add(1) {
        let larger_fee = compute_fee(larger, fee_bps).unwrap_or(0);
        assert!(larger_fee >= fee);
    }
});
