// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Core Quantities
//
// Token and dollar denominations shared by every stage of the day step.
// Both are thin wrappers over `rust_decimal::Decimal` so a scenario replays
// bit-for-bit on any platform.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

// ---------------------------------------------------------------------------
// Rook
// ---------------------------------------------------------------------------

/// A quantity of the native token, in whole-token units (already divided by
/// the contract's decimals).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rook(pub Decimal);

/// Decimals of the on-chain token.
pub const ROOK_DECIMALS: u32 = 18;

impl Rook {
    /// Zero tokens
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create from a `Decimal` value
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }

    /// Whether the amount is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Strictly below zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Scale by a dimensionless fraction.
    pub fn scale(self, fraction: Decimal) -> Self {
        Self(self.0 * fraction)
    }

    /// Truncate to a whole number of base units. Never rounds up.
    pub fn to_base_units(self) -> Self {
        Self(self.0.round_dp_with_strategy(ROOK_DECIMALS, RoundingStrategy::ToZero))
    }
}

impl Add for Rook {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Rook {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Rook {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Rook {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for Rook {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl fmt::Display for Rook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ROOK", self.0)
    }
}

// ---------------------------------------------------------------------------
// Usd
// ---------------------------------------------------------------------------

/// A dollar amount. Stablecoin reserves and volumes are both denominated in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usd(pub Decimal);

impl Usd {
    /// Zero dollars
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Create from a `Decimal` value
    pub fn from_decimal(d: Decimal) -> Self {
        Self(d)
    }

    /// Whether the amount is exactly zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Strictly greater than zero
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Strictly below zero
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Scale by a dimensionless fraction.
    pub fn scale(self, fraction: Decimal) -> Self {
        Self(self.0 * fraction)
    }
}

impl Add for Usd {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Usd {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl AddAssign for Usd {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Usd {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rook_arithmetic() {
        let mut a = Rook(dec!(10));
        a += Rook(dec!(2.5));
        assert_eq!(a, Rook(dec!(12.5)));
        a -= Rook(dec!(0.5));
        assert_eq!(a - Rook(dec!(2)), Rook(dec!(10)));
        assert_eq!(Rook(dec!(100)).scale(dec!(0.06)), Rook(dec!(6)));
    }

    #[test]
    fn base_units_truncate_toward_zero() {
        let amount = Rook(dec!(1.0032099706449606334271572348));
        assert_eq!(amount.to_base_units(), Rook(dec!(1.003209970644960633)));
        assert_eq!(Rook(dec!(0.0000000000000000009)).to_base_units(), Rook::zero());
        assert_eq!(Rook(dec!(6)).to_base_units(), Rook(dec!(6)));
    }

    #[test]
    fn rook_sign_helpers() {
        assert!(Rook::zero().is_zero());
        assert!(!Rook::zero().is_positive());
        assert!(Rook(dec!(-1)).is_negative());
        assert!(Rook(dec!(0.0001)).is_positive());
    }

    #[test]
    fn rook_sum() {
        let parts = [Rook(dec!(1)), Rook(dec!(2)), Rook(dec!(3.5))];
        let total: Rook = parts.iter().copied().sum();
        assert_eq!(total, Rook(dec!(6.5)));
    }

    #[test]
    fn display_units() {
        assert_eq!(Rook(dec!(4)).to_string(), "4 ROOK");
        assert_eq!(Usd(dec!(25000)).to_string(), "$25000");
    }

    #[test]
    fn usd_arithmetic() {
        let bid = Usd(dec!(1000000)).scale(dec!(0.001)).scale(dec!(0.8));
        assert_eq!(bid, Usd(dec!(800)));
        assert!((Usd(dec!(5)) - Usd(dec!(6))).is_negative());
    }
}
