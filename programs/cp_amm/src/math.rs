/// CP AMM Math Library
///
/// Pure integer arithmetic behind the pool: the integer square root used to size
/// the first deposit, basis-point fees, the constant-product output formula and
/// proportional share math.
///
/// Every operand is a `u64` token amount. Products are formed in `u128`, which
/// cannot overflow for two `u64` factors, and narrowed back with a checked
/// conversion. Division always floors. Nothing here touches accounts or logs.
use crate::constants::BPS_DENOMINATOR;
use crate::errors::ErrorCode;
use anchor_lang::prelude::*;

/// Computes `floor(a * b / denominator)` with a `u128` intermediate product.
///
/// Fails with `Overflow` if `denominator` is zero or the quotient does not fit
/// in a `u64`.
#[inline(always)]
pub(crate) fn mul_div_floor(a: u64, b: u64, denominator: u64) -> Result<u64> {
    let product = (a as u128)
        .checked_mul(b as u128)
        .ok_or(ErrorCode::Overflow)?;
    let quotient = product
        .checked_div(denominator as u128)
        .ok_or(ErrorCode::Overflow)?;
    u64::try_from(quotient).map_err(|_| error!(ErrorCode::Overflow))
}

/// Integer square root: the largest `r` with `r * r <= value`.
///
/// Uses Newton's iteration starting above the root, so the sequence decreases
/// monotonically and stops at the floor of the real square root.
///
/// # Example
///
/// ```
/// use cp_amm::math::isqrt;
///
/// assert_eq!(isqrt(250_000), 500);
/// assert_eq!(isqrt(24), 4);
/// ```
pub fn isqrt(value: u128) -> u128 {
    if value < 4 {
        return if value == 0 { 0 } else { 1 };
    }

    let mut root = value;
    let mut next = value / 2 + 1;
    while next < root {
        root = next;
        next = (value / next + next) / 2;
    }
    root
}

/// Fee charged on a swap input: `floor(amount_in * fee_bps / 10_000)`.
///
/// # Example
///
/// ```
/// use cp_amm::math::compute_fee;
///
/// assert_eq!(compute_fee(10_000, 30).unwrap(), 30);
/// // Small inputs round the fee down to nothing.
/// assert_eq!(compute_fee(100, 30).unwrap(), 0);
/// ```
pub fn compute_fee(amount_in: u64, fee_bps: u16) -> Result<u64> {
    mul_div_floor(amount_in, fee_bps as u64, BPS_DENOMINATOR)
}

/// Output of a constant-product trade for an input that has already paid its fee.
///
/// `amount_out = reserve_out - reserve_in * reserve_out / (reserve_in + amount_in)`,
/// evaluated as `floor(reserve_out * amount_in / (reserve_in + amount_in))` so the
/// rounding always favours the pool. With that rounding the post-trade product
/// `(reserve_in + amount_in) * (reserve_out - amount_out)` never drops below
/// `reserve_in * reserve_out`, and `amount_out < reserve_out` whenever
/// `reserve_in > 0`.
///
/// # Arguments
/// * `amount_in` - Input amount after the fee has been removed
/// * `reserve_in` - Reserve of the asset being sold to the pool
/// * `reserve_out` - Reserve of the asset being bought from the pool
pub fn compute_amount_out(amount_in: u64, reserve_in: u64, reserve_out: u64) -> Result<u64> {
    if reserve_in == 0 || reserve_out == 0 {
        return err!(ErrorCode::EmptyPool);
    }
    let denominator = reserve_in
        .checked_add(amount_in)
        .ok_or(ErrorCode::Overflow)?;
    mul_div_floor(reserve_out, amount_in, denominator)
}

/// Shares minted by the deposit that opens an empty pool: `isqrt(amount_a * amount_b)`.
///
/// The result is at least 1 whenever both amounts are positive and at most
/// `u64::MAX`, since the root of a product of two `u64` values fits in a `u64`.
pub fn initial_shares(amount_a: u64, amount_b: u64) -> Result<u64> {
    let product = (amount_a as u128)
        .checked_mul(amount_b as u128)
        .ok_or(ErrorCode::Overflow)?;
    u64::try_from(isqrt(product)).map_err(|_| error!(ErrorCode::Overflow))
}

/// Shares minted by a deposit into a funded pool.
///
/// Each side is valued against the pool at `amount * total_shares / reserve`
/// and the smaller valuation wins, so depositing off-ratio never mints more
/// than the scarcer side is worth. The over-supplied excess stays in the pool.
pub fn proportional_shares(
    amount_a: u64,
    amount_b: u64,
    reserve_a: u64,
    reserve_b: u64,
    total_shares: u64,
) -> Result<u64> {
    let shares_from_a = mul_div_floor(amount_a, total_shares, reserve_a)?;
    let shares_from_b = mul_div_floor(amount_b, total_shares, reserve_b)?;
    Ok(shares_from_a.min(shares_from_b))
}

/// Amount of one reserve redeemed by burning `shares`: `reserve * shares / total_shares`.
pub fn redeem_amount(reserve: u64, shares: u64, total_shares: u64) -> Result<u64> {
    if total_shares == 0 {
        return err!(ErrorCode::EmptyPool);
    }
    mul_div_floor(reserve, shares, total_shares)
}
