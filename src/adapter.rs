//! Adapter layer: converts between the f64 growth-curve math and the
//! Decimal ledger types.

use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

use crate::core_types::Usd;

/// Convert f64 to Decimal (lossy but sufficient for curve evaluation).
///
/// Non-finite or out-of-range inputs map to zero.
pub fn to_decimal(v: f64) -> Decimal {
    Decimal::from_f64(v).unwrap_or(Decimal::ZERO)
}

/// Convert Decimal to f64.
pub fn from_decimal(d: Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Dollar amount from an f64, clamped at zero.
pub fn usd_from_f64(v: f64) -> Usd {
    Usd(to_decimal(v).max(Decimal::ZERO))
}

/// Floor of a non-negative Decimal as a day count, saturating at `u64::MAX`.
pub fn floor_days(d: Decimal) -> u64 {
    if d.is_sign_negative() {
        return 0;
    }
    d.floor().to_u64().unwrap_or(u64::MAX)
}
