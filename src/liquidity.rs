// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Liquidity Models

//! Market depth as a function of ledger state.
//!
//! A first-order stand-in for real order books: each day the pool is sized
//! from the current circulating supply and price, never carried over.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amm::{AmmPool, PoolError};
use crate::core_types::{Rook, Usd};
use crate::error::{check_positive, ConfigError};

/// How deep the ROOK/stable pool is on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model")]
pub enum LiquidityModel {
    /// Fixed total depth in dollars, split evenly across both sides.
    #[serde(rename = "constant")]
    Constant { depth: Usd },
    /// Stable side sized as a fraction of market cap.
    #[serde(rename = "mcap")]
    MarketCap { fraction: Decimal },
    /// Token side sized as a fraction of circulating supply.
    #[serde(rename = "circ_supply", alias = "supply")]
    CirculatingSupply { fraction: Decimal },
}

impl Default for LiquidityModel {
    fn default() -> Self {
        Self::Constant { depth: Usd(dec!(5000000)) }
    }
}

impl LiquidityModel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "constant",
            Self::MarketCap { .. } => "mcap",
            Self::CirculatingSupply { .. } => "circ_supply",
        }
    }

    /// The model's single tuning knob: dollars for `constant`, a fraction
    /// for the other two.
    pub fn liquidity_constant(&self) -> Decimal {
        match *self {
            Self::Constant { depth } => depth.0,
            Self::MarketCap { fraction } | Self::CirculatingSupply { fraction } => fraction,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("liquidity.liquidity_constant", self.liquidity_constant())
    }

    /// Size the pool for today.
    pub fn reserves(&self, circulating: Rook, price: Decimal) -> Result<AmmPool, PoolError> {
        if price <= Decimal::ZERO {
            return Err(PoolError::NonPositivePrice(price));
        }
        let (token, stable) = match *self {
            Self::Constant { depth } => {
                let stable = depth.0 / dec!(2);
                (checked(stable.checked_div(price), "token reserve")?, stable)
            }
            Self::MarketCap { fraction } => {
                let market_cap = checked(circulating.0.checked_mul(price), "market cap")?;
                let stable = checked(fraction.checked_mul(market_cap), "stable reserve")?;
                (checked(stable.checked_div(price), "token reserve")?, stable)
            }
            Self::CirculatingSupply { fraction } => {
                let token = checked(fraction.checked_mul(circulating.0), "token reserve")?;
                (token, checked(token.checked_mul(price), "stable reserve")?)
            }
        };
        AmmPool::new(Rook(token), Usd(stable))
    }
}

fn checked(value: Option<Decimal>, what: &'static str) -> Result<Decimal, PoolError> {
    value.ok_or(PoolError::Overflow(what))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const CIRC: Rook = Rook(dec!(800000));

    #[test]
    fn constant_splits_depth_evenly() {
        let pool = LiquidityModel::default()
            .reserves(CIRC, dec!(25))
            .expect("test: constant pool");
        assert_eq!(pool.reserve_stable(), Usd(dec!(2500000)));
        assert_eq!(pool.reserve_token(), Rook(dec!(100000)));
        assert_eq!(pool.price().expect("test: price"), dec!(25));
    }

    #[test]
    fn market_cap_scales_with_price() {
        let model = LiquidityModel::MarketCap { fraction: dec!(0.1) };
        let pool = model.reserves(CIRC, dec!(25)).expect("test: mcap pool");
        assert_eq!(pool.reserve_stable(), Usd(dec!(2000000)));
        assert_eq!(pool.reserve_token(), Rook(dec!(80000)));

        let richer = model.reserves(CIRC, dec!(50)).expect("test: mcap pool at 50");
        assert_eq!(richer.reserve_stable(), Usd(dec!(4000000)));
        assert_eq!(richer.reserve_token(), Rook(dec!(80000)));
    }

    #[test]
    fn circulating_supply_fixes_token_side() {
        let model = LiquidityModel::CirculatingSupply { fraction: dec!(0.05) };
        let pool = model.reserves(CIRC, dec!(12.5)).expect("test: supply pool");
        assert_eq!(pool.reserve_token(), Rook(dec!(40000)));
        assert_eq!(pool.reserve_stable(), Usd(dec!(500000)));
        assert_eq!(pool.price().expect("test: price"), dec!(12.5));
    }

    #[test]
    fn exhausted_circulating_supply_is_degenerate() {
        let model = LiquidityModel::CirculatingSupply { fraction: dec!(0.1) };
        assert!(matches!(
            model.reserves(Rook::zero(), dec!(25)),
            Err(PoolError::EmptyReserve { .. })
        ));
    }

    #[test]
    fn non_positive_price_is_degenerate() {
        assert_eq!(
            LiquidityModel::default().reserves(CIRC, Decimal::ZERO),
            Err(PoolError::NonPositivePrice(Decimal::ZERO))
        );
    }

    #[test]
    fn liquidity_constant_must_be_positive() {
        let model = LiquidityModel::MarketCap { fraction: dec!(0) };
        assert!(model.validate().is_err());
        assert!(LiquidityModel::default().validate().is_ok());
    }

    #[test]
    fn dashboard_supply_alias_accepted() {
        let model: LiquidityModel =
            serde_json::from_str(r#"{"model": "supply", "fraction": 0.1}"#)
                .expect("test: alias");
        assert_eq!(model.name(), "circ_supply");
    }
}
