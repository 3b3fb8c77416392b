use crate::constants::MAX_FEE_BPS;
use crate::errors::ErrorCode;
use crate::math;
use crate::position::LiquidityPosition;
use anchor_lang::prelude::*;

/// Defines the state for a constant-product liquidity pool.
///
/// The pool holds two reserves, the aggregate of all provider shares, an
/// immutable fee and the admin's pause switch. Reserves mirror the balances of
/// the two vaults: every change to a reserve is paired with a token transfer in
/// the instruction handler that drove it.
///
/// Between instructions the pool is either empty (both reserves and
/// `total_shares` are zero) or fully funded (all three are positive).
#[account]
#[derive(Default, Debug)]
pub struct Pool {
    /// Bump seed for PDA.
    pub bump: u8,
    /// Set once by `initialize`; a second initialization is rejected.
    pub is_initialized: bool,
    /// The only account allowed to pause and unpause the pool.
    pub admin: Pubkey,
    /// The mint address of token A.
    pub token_a_mint: Pubkey,
    /// The mint address of token B.
    pub token_b_mint: Pubkey,
    /// The vault holding token A for this pool.
    pub token_a_vault: Pubkey,
    /// The vault holding token B for this pool.
    pub token_b_vault: Pubkey,
    /// Swap fee in basis points (e.g., 30 for 0.3%). Immutable after creation.
    pub fee_bps: u16,
    /// Units of token A held by the pool.
    pub token_a_reserve: u64,
    /// Units of token B held by the pool.
    pub token_b_reserve: u64,
    /// Sum of all outstanding provider shares.
    pub total_shares: u64,
    /// While true, deposits, swaps and withdrawals are rejected.
    pub paused: bool,
    /// Cumulative fees retained from A-to-B swaps, in token A units.
    pub fees_accrued_a: u128,
    /// Cumulative fees retained from B-to-A swaps, in token B units.
    pub fees_accrued_b: u128,
}

/// Parameters for initializing a new pool.
#[derive(Clone)]
pub struct InitializePoolParams {
    pub bump: u8,
    pub admin: Pubkey,
    pub token_a_mint: Pubkey,
    pub token_b_mint: Pubkey,
    pub token_a_vault: Pubkey,
    pub token_b_vault: Pubkey,
    pub fee_bps: u16,
}

/// Which asset a swap sells to the pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwapDirection {
    /// Trader pays token A and receives token B.
    AToB,
    /// Trader pays token B and receives token A.
    BToA,
}

impl SwapDirection {
    /// `(reserve_in, reserve_out)` as seen by a trade in this direction.
    pub fn reserves(self, pool: &Pool) -> (u64, u64) {
        match self {
            SwapDirection::AToB => (pool.token_a_reserve, pool.token_b_reserve),
            SwapDirection::BToA => (pool.token_b_reserve, pool.token_a_reserve),
        }
    }
}

/// Result of pricing a swap against the current reserves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapQuote {
    /// Fee withheld from the input; it stays in the pool.
    pub fee: u64,
    /// Input that actually moves the price.
    pub amount_in_after_fee: u64,
    /// Output paid to the trader.
    pub amount_out: u64,
}

impl Pool {
    /// The size of the Pool account in bytes.
    pub const LEN: usize = 8 // discriminator
        + 1 // bump
        + 1 // is_initialized
        + 32 // admin
        + 32 // token_a_mint
        + 32 // token_b_mint
        + 32 // token_a_vault
        + 32 // token_b_vault
        + 2 // fee_bps
        + 8 // token_a_reserve
        + 8 // token_b_reserve
        + 8 // total_shares
        + 1 // paused
        + 16 // fees_accrued_a
        + 16; // fees_accrued_b

    /// Initializes the state of a new pool.
    ///
    /// The pool starts empty and unpaused, with `params.admin` as its admin.
    ///
    /// # Errors
    /// * `AlreadyInitialized` - the pool was created before
    /// * `MintsMustDiffer` - both sides name the same mint
    /// * `InvalidFee` - `fee_bps` is 10,000 or more
    pub fn initialize(&mut self, params: InitializePoolParams) -> Result<()> {
        if self.is_initialized {
            return err!(ErrorCode::AlreadyInitialized);
        }
        if params.token_a_mint == params.token_b_mint {
            return err!(ErrorCode::MintsMustDiffer);
        }
        if params.fee_bps > MAX_FEE_BPS {
            return err!(ErrorCode::InvalidFee);
        }

        self.bump = params.bump;
        self.is_initialized = true;
        self.admin = params.admin;
        self.token_a_mint = params.token_a_mint;
        self.token_b_mint = params.token_b_mint;
        self.token_a_vault = params.token_a_vault;
        self.token_b_vault = params.token_b_vault;
        self.fee_bps = params.fee_bps;
        self.token_a_reserve = 0;
        self.token_b_reserve = 0;
        self.total_shares = 0;
        self.paused = false;
        self.fees_accrued_a = 0;
        self.fees_accrued_b = 0;

        Ok(())
    }

    /// True when the pool holds no liquidity.
    pub fn is_empty(&self) -> bool {
        self.total_shares == 0
    }

    /// `token_a_reserve * token_b_reserve`, the quantity swaps never decrease.
    pub fn constant_product(&self) -> u128 {
        self.token_a_reserve as u128 * self.token_b_reserve as u128
    }

    /// Checks that reserves and shares are either all zero or all positive.
    pub fn reserves_consistent(&self) -> bool {
        let a = self.token_a_reserve > 0;
        let b = self.token_b_reserve > 0;
        let s = self.total_shares > 0;
        a == b && b == s
    }

    fn ensure_not_paused(&self) -> Result<()> {
        require!(!self.paused, ErrorCode::PoolPaused);
        Ok(())
    }

    /// Deposits both assets and credits the provider with newly minted shares.
    ///
    /// The first deposit mints `isqrt(amount_a * amount_b)` shares and sets the
    /// price. Later deposits mint the smaller of the two proportional valuations;
    /// both amounts are taken in full, so an off-ratio deposit donates its excess
    /// to existing holders.
    ///
    /// # Arguments
    /// * `position` - The provider's share ledger entry for this pool.
    /// * `amount_a` - Units of token A deposited.
    /// * `amount_b` - Units of token B deposited.
    ///
    /// # Returns
    /// * `u64` - Shares minted to the provider.
    pub fn add_liquidity(
        &mut self,
        position: &mut LiquidityPosition,
        amount_a: u64,
        amount_b: u64,
    ) -> Result<u64> {
        self.ensure_not_paused()?;
        require!(amount_a > 0 && amount_b > 0, ErrorCode::InvalidAmount);

        let shares_minted = if self.is_empty() {
            math::initial_shares(amount_a, amount_b)?
        } else {
            math::proportional_shares(
                amount_a,
                amount_b,
                self.token_a_reserve,
                self.token_b_reserve,
                self.total_shares,
            )?
        };
        require!(shares_minted > 0, ErrorCode::ZeroSharesMinted);

        let token_a_reserve = self
            .token_a_reserve
            .checked_add(amount_a)
            .ok_or(ErrorCode::Overflow)?;
        let token_b_reserve = self
            .token_b_reserve
            .checked_add(amount_b)
            .ok_or(ErrorCode::Overflow)?;
        let total_shares = self
            .total_shares
            .checked_add(shares_minted)
            .ok_or(ErrorCode::Overflow)?;
        let position_shares = position.credited(shares_minted)?;

        self.token_a_reserve = token_a_reserve;
        self.token_b_reserve = token_b_reserve;
        self.total_shares = total_shares;
        position.shares = position_shares;

        Ok(shares_minted)
    }

    /// Prices a swap without changing the pool.
    ///
    /// The fee is taken from the input first, then the remainder is pushed
    /// through the constant-product formula.
    pub fn quote_swap(&self, amount_in: u64, direction: SwapDirection) -> Result<SwapQuote> {
        require!(amount_in > 0, ErrorCode::InvalidAmount);
        require!(!self.is_empty(), ErrorCode::EmptyPool);

        let fee = math::compute_fee(amount_in, self.fee_bps)?;
        let amount_in_after_fee = amount_in.checked_sub(fee).ok_or(ErrorCode::Overflow)?;
        let (reserve_in, reserve_out) = direction.reserves(self);
        let amount_out = math::compute_amount_out(amount_in_after_fee, reserve_in, reserve_out)?;

        Ok(SwapQuote {
            fee,
            amount_in_after_fee,
            amount_out,
        })
    }

    /// Executes a swap of `amount_in` in `direction`.
    ///
    /// The whole input, fee included, joins the input reserve; the output
    /// reserve shrinks by the quoted output. Fails with `SlippageExceeded` when
    /// the output is below `minimum_out` and with `ZeroOutput` when the input is
    /// too small to buy anything.
    pub fn swap(
        &mut self,
        amount_in: u64,
        direction: SwapDirection,
        minimum_out: u64,
    ) -> Result<SwapQuote> {
        self.ensure_not_paused()?;
        let quote = self.quote_swap(amount_in, direction)?;

        require!(
            quote.amount_out >= minimum_out,
            ErrorCode::SlippageExceeded
        );
        require!(quote.amount_out > 0, ErrorCode::ZeroOutput);

        let (reserve_in, reserve_out) = direction.reserves(self);
        let new_reserve_in = reserve_in
            .checked_add(amount_in)
            .ok_or(ErrorCode::Overflow)?;
        let new_reserve_out = reserve_out
            .checked_sub(quote.amount_out)
            .ok_or(ErrorCode::Overflow)?;

        match direction {
            SwapDirection::AToB => {
                let fees_accrued_a = self
                    .fees_accrued_a
                    .checked_add(quote.fee as u128)
                    .ok_or(ErrorCode::Overflow)?;
                self.token_a_reserve = new_reserve_in;
                self.token_b_reserve = new_reserve_out;
                self.fees_accrued_a = fees_accrued_a;
            }
            SwapDirection::BToA => {
                let fees_accrued_b = self
                    .fees_accrued_b
                    .checked_add(quote.fee as u128)
                    .ok_or(ErrorCode::Overflow)?;
                self.token_b_reserve = new_reserve_in;
                self.token_a_reserve = new_reserve_out;
                self.fees_accrued_b = fees_accrued_b;
            }
        }

        Ok(quote)
    }

    /// Burns `shares` from the provider and pays out the proportional reserves.
    ///
    /// # Returns
    /// * `(u64, u64)` - Units of token A and token B owed to the provider.
    ///
    /// # Errors
    /// * `PoolPaused` - the admin has paused the pool
    /// * `InsufficientShares` - `shares` is zero or exceeds the provider's balance
    /// * `ZeroOutput` - either payout rounds down to zero
    pub fn remove_liquidity(
        &mut self,
        position: &mut LiquidityPosition,
        shares: u64,
    ) -> Result<(u64, u64)> {
        self.ensure_not_paused()?;
        let position_shares = position.debited(shares)?;
        require!(shares <= self.total_shares, ErrorCode::InsufficientShares);

        let amount_a_out = math::redeem_amount(self.token_a_reserve, shares, self.total_shares)?;
        let amount_b_out = math::redeem_amount(self.token_b_reserve, shares, self.total_shares)?;
        require!(
            amount_a_out > 0 && amount_b_out > 0,
            ErrorCode::ZeroOutput
        );

        let token_a_reserve = self
            .token_a_reserve
            .checked_sub(amount_a_out)
            .ok_or(ErrorCode::Overflow)?;
        let token_b_reserve = self
            .token_b_reserve
            .checked_sub(amount_b_out)
            .ok_or(ErrorCode::Overflow)?;
        let total_shares = self
            .total_shares
            .checked_sub(shares)
            .ok_or(ErrorCode::Overflow)?;

        self.token_a_reserve = token_a_reserve;
        self.token_b_reserve = token_b_reserve;
        self.total_shares = total_shares;
        position.shares = position_shares;

        Ok((amount_a_out, amount_b_out))
    }

    /// Sets the pause flag. Only the admin may call this; repeating the current
    /// value is allowed.
    pub fn set_paused(&mut self, caller: &Pubkey, paused: bool) -> Result<()> {
        require_keys_eq!(*caller, self.admin, ErrorCode::Unauthorized);
        self.paused = paused;
        Ok(())
    }
}
