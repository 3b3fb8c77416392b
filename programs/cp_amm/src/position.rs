/// Defines the per-provider share ledger entry.
///
/// Shares are not tokens in this program. Each provider's balance lives in a
/// `LiquidityPosition` PDA derived from the pool and the provider, and the pool
/// only tracks the aggregate `total_shares`. The engine updates both in the same
/// instruction so their sum always agrees.
use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// A liquidity provider's share balance in one pool.
///
/// Accounts of this type are PDAs with seeds `["position", pool, owner]`, created
/// on the provider's first deposit.
#[account]
#[derive(Default, Debug)]
pub struct LiquidityPosition {
    /// The provider that owns these shares.
    pub owner: Pubkey,
    /// The pool the shares are a claim on.
    pub pool: Pubkey,
    /// Outstanding shares held by `owner`.
    pub shares: u64,
    /// Bump seed for PDA.
    pub bump: u8,
}

impl LiquidityPosition {
    /// Discriminator (8) + owner (32) + pool (32) + shares (8) + bump (1)
    pub const LEN: usize = 8 + 32 + 32 + 8 + 1;

    /// Binds a freshly created position to its pool and owner.
    ///
    /// Called on every deposit; a position that is already bound must match.
    pub fn bind(&mut self, owner: Pubkey, pool: Pubkey, bump: u8) -> Result<()> {
        if self.owner == Pubkey::default() && self.pool == Pubkey::default() {
            self.owner = owner;
            self.pool = pool;
            self.bump = bump;
            return Ok(());
        }
        require_keys_eq!(self.owner, owner, ErrorCode::InvalidPosition);
        require_keys_eq!(self.pool, pool, ErrorCode::InvalidPosition);
        Ok(())
    }

    /// Balance after crediting `shares`, without writing it.
    pub(crate) fn credited(&self, shares: u64) -> Result<u64> {
        Ok(self.shares.checked_add(shares).ok_or(ErrorCode::Overflow)?)
    }

    /// Balance after debiting `shares`, without writing it.
    ///
    /// Burning zero shares or more than the balance is `InsufficientShares`.
    pub(crate) fn debited(&self, shares: u64) -> Result<u64> {
        require!(shares > 0, ErrorCode::InsufficientShares);
        Ok(self
            .shares
            .checked_sub(shares)
            .ok_or(ErrorCode::InsufficientShares)?)
    }
}
