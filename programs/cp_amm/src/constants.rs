/// CP AMM Protocol Constants
///
/// This module defines the protocol parameters and account seeds shared by the
/// engine, the instruction handlers and off-chain clients. Everything here is
/// fixed at compile time; per-pool configuration lives in the `Pool` account.

/// Basis points denominator (10,000 bps = 100%)
///
/// All fee arithmetic divides by this value with floor rounding.
pub const BPS_DENOMINATOR: u64 = 10_000;

/// The largest fee a pool may be created with, in basis points.
///
/// A fee of 10,000 bps would consume the entire input of every swap, so the
/// accepted range is `0..=MAX_FEE_BPS`.
pub const MAX_FEE_BPS: u16 = 9_999;

/// Conventional fee tier (0.30%), used by clients that do not pick one.
pub const DEFAULT_FEE_BPS: u16 = 30;

/// Seed prefix for the pool PDA: `["pool", mint_a, mint_b]`.
pub const POOL_SEED: &[u8] = b"pool";

/// Seed prefix for the token A vault PDA: `["vault_a", pool]`.
pub const VAULT_A_SEED: &[u8] = b"vault_a";

/// Seed prefix for the token B vault PDA: `["vault_b", pool]`.
pub const VAULT_B_SEED: &[u8] = b"vault_b";

/// Seed prefix for a provider's share ledger entry: `["position", pool, owner]`.
pub const POSITION_SEED: &[u8] = b"position";
