// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Constant-Product Pool

//! Two-reserve ROOK/stable pool priced by `x · y = k`.
//!
//! The pool is not a standing account: it is re-derived every day from the
//! ledger and the current price, pushed through that day's swaps, and
//! thrown away once the closing price has been read. Every division is
//! checked so a degenerate pool surfaces as a [`PoolError`] value.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::core_types::{Rook, Usd};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Arithmetic states the pool cannot continue from.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
pub enum PoolError {
    #[error("pool reserve is not positive (token {token}, stable {stable})")]
    EmptyReserve { token: Rook, stable: Usd },

    #[error("price is not positive ({0})")]
    NonPositivePrice(Decimal),

    #[error("treasury draw of {draw} would exhaust the stable reserve of {reserve}")]
    DrawExceedsReserve { draw: Usd, reserve: Usd },

    #[error("arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

fn mul(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, PoolError> {
    a.checked_mul(b).ok_or(PoolError::Overflow(what))
}

fn div(a: Decimal, b: Decimal, what: &'static str) -> Result<Decimal, PoolError> {
    a.checked_div(b).ok_or(PoolError::Overflow(what))
}

// ---------------------------------------------------------------------------
// AmmPool
// ---------------------------------------------------------------------------

/// Reserves of the ROOK/stable pool for one simulated day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AmmPool {
    reserve_token: Rook,
    reserve_stable: Usd,
}

impl AmmPool {
    /// Both reserves must be strictly positive.
    pub fn new(reserve_token: Rook, reserve_stable: Usd) -> Result<Self, PoolError> {
        if !reserve_token.is_positive() || !reserve_stable.is_positive() {
            return Err(PoolError::EmptyReserve {
                token: reserve_token,
                stable: reserve_stable,
            });
        }
        Ok(Self { reserve_token, reserve_stable })
    }

    pub fn reserve_token(&self) -> Rook {
        self.reserve_token
    }

    pub fn reserve_stable(&self) -> Usd {
        self.reserve_stable
    }

    /// Spot price in dollars per ROOK. The sign is left to the caller.
    pub fn price(&self) -> Result<Decimal, PoolError> {
        div(self.reserve_stable.0, self.reserve_token.0, "price")
    }

    /// `reserve_token × reserve_stable`.
    pub fn invariant(&self) -> Result<Decimal, PoolError> {
        mul(self.reserve_token.0, self.reserve_stable.0, "invariant")
    }

    /// Swap `stable_in` dollars into the pool, returning the ROOK taken out.
    pub fn buy_token(&mut self, stable_in: Usd) -> Result<Rook, PoolError> {
        let depth = self.reserve_stable.0 + stable_in.0;
        let out = div(mul(self.reserve_token.0, stable_in.0, "token bought")?, depth, "token bought")?;
        self.reserve_token -= Rook(out);
        self.reserve_stable += stable_in;
        self.ensure_positive()?;
        Ok(Rook(out))
    }

    /// Swap `token_in` ROOK into the pool, returning the dollars taken out.
    pub fn sell_token(&mut self, token_in: Rook) -> Result<Usd, PoolError> {
        let depth = self.reserve_token.0 + token_in.0;
        let out = div(mul(self.reserve_stable.0, token_in.0, "stable bought")?, depth, "stable bought")?;
        self.reserve_token += token_in;
        self.reserve_stable -= Usd(out);
        self.ensure_positive()?;
        Ok(Usd(out))
    }

    /// Sell however much ROOK it takes to withdraw exactly `stable_out`
    /// dollars, returning the ROOK sold.
    ///
    /// Fails with [`PoolError::DrawExceedsReserve`] when the draw would
    /// leave the stable reserve at or below zero.
    pub fn sell_token_for_exact_stable(&mut self, stable_out: Usd) -> Result<Rook, PoolError> {
        let remaining = self.reserve_stable.0 - stable_out.0;
        if remaining <= Decimal::ZERO {
            return Err(PoolError::DrawExceedsReserve {
                draw: stable_out,
                reserve: self.reserve_stable,
            });
        }
        let sold = div(mul(self.reserve_token.0, stable_out.0, "token sold")?, remaining, "token sold")?;
        self.reserve_token += Rook(sold);
        self.reserve_stable -= stable_out;
        self.ensure_positive()?;
        Ok(Rook(sold))
    }

    fn ensure_positive(&self) -> Result<(), PoolError> {
        if !self.reserve_token.is_positive() || !self.reserve_stable.is_positive() {
            return Err(PoolError::EmptyReserve {
                token: self.reserve_token,
                stable: self.reserve_stable,
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pool() -> AmmPool {
        AmmPool::new(Rook(dec!(100000)), Usd(dec!(2500000))).expect("test: price 25 pool")
    }

    fn assert_close(a: Decimal, b: Decimal, tol: Decimal) {
        assert!((a - b).abs() <= tol, "{a} differs from {b} by more than {tol}");
    }

    #[test]
    fn price_is_stable_over_token() {
        assert_eq!(pool().price().expect("test: price"), dec!(25));
    }

    #[test]
    fn buy_matches_constant_product() {
        let mut p = pool();
        let bought = p.buy_token(Usd(dec!(800))).expect("test: buy");
        assert_close(bought.0, dec!(31.99), dec!(0.01));
        assert_eq!(p.reserve_stable(), Usd(dec!(2500800)));
        assert_close(p.invariant().expect("test: k"), dec!(250000000000), dec!(0.000001));
    }

    #[test]
    fn sell_preserves_invariant() {
        let mut p = pool();
        let before = p.invariant().expect("test: k");
        let out = p.sell_token(Rook(dec!(500))).expect("test: sell");
        assert!(out.is_positive());
        assert!(p.price().expect("test: price") < dec!(25));
        assert_close(p.invariant().expect("test: k"), before, dec!(0.000001));
    }

    #[test]
    fn exact_stable_draw_preserves_invariant() {
        let mut p = pool();
        let before = p.invariant().expect("test: k");
        let sold = p.sell_token_for_exact_stable(Usd(dec!(25000))).expect("test: draw");
        assert_eq!(p.reserve_stable(), Usd(dec!(2475000)));
        assert!(sold > Rook(dec!(1000)), "draw at a falling price costs more than spot");
        assert_close(p.invariant().expect("test: k"), before, dec!(0.000001));
    }

    #[test]
    fn draw_exceeding_reserve_is_an_error() {
        let mut p = AmmPool::new(Rook(dec!(200)), Usd(dec!(5000))).expect("test: shallow pool");
        let err = p
            .sell_token_for_exact_stable(Usd(dec!(5000)))
            .expect_err("test: draw equals reserve");
        assert!(matches!(err, PoolError::DrawExceedsReserve { .. }), "got {err:?}");
        assert_eq!(p.reserve_stable(), Usd(dec!(5000)), "failed draw must not touch reserves");
    }

    #[test]
    fn empty_reserves_rejected() {
        assert!(AmmPool::new(Rook::zero(), Usd(dec!(1))).is_err());
        assert!(AmmPool::new(Rook(dec!(1)), Usd(dec!(-1))).is_err());
    }

    #[test]
    fn zero_sized_swaps_are_noops() {
        let mut p = pool();
        assert_eq!(p.buy_token(Usd::zero()).expect("test: empty buy"), Rook::zero());
        assert_eq!(p.sell_token(Rook::zero()).expect("test: empty sell"), Usd::zero());
        assert_eq!(p, pool());
    }
}
