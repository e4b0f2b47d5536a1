// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Configuration Errors

use rust_decimal::Decimal;

use crate::core_types::{Rook, Usd};

/// Errors raised while validating a scenario, always before the first
/// simulated day.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must lie within [0, 1], got {value}")]
    FractionOutOfRange { field: &'static str, value: Decimal },

    #[error("bid distribution fractions sum to {sum}, leaving a negative user share")]
    BidDistributionOverAllocated { sum: Decimal },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: Decimal },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    #[error("max_volume ({max}) is below start_volume ({start})")]
    MaxVolumeBelowStart { start: Usd, max: Usd },

    #[error("volume growth rate must be a positive finite number, got {0}")]
    InvalidGrowthRate(f64),

    #[error("simulation horizon must be at least one day")]
    EmptyHorizon,

    #[error("genesis balances leave a negative circulating supply ({0})")]
    NegativeCirculatingSupply(Rook),

    #[error("token decimals {0} exceed the supported precision of 28")]
    UnsupportedDecimals(u32),

    #[error("raw balance {field} = {value} does not fit the decimal range")]
    RawBalanceOutOfRange { field: &'static str, value: u128 },

    #[error("failed to parse scenario: {0}")]
    Parse(String),

    #[error("unknown preset {0:?}")]
    UnknownPreset(String),
}

// ---------------------------------------------------------------------------
// Range checks shared by the parameter groups
// ---------------------------------------------------------------------------

pub(crate) fn check_fraction(field: &'static str, value: Decimal) -> Result<(), ConfigError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(ConfigError::FractionOutOfRange { field, value });
    }
    Ok(())
}

pub(crate) fn check_positive(field: &'static str, value: Decimal) -> Result<(), ConfigError> {
    if value <= Decimal::ZERO {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

pub(crate) fn check_non_negative(field: &'static str, value: Decimal) -> Result<(), ConfigError> {
    if value < Decimal::ZERO {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn fraction_bounds_are_inclusive() {
        assert!(check_fraction("x", dec!(0)).is_ok());
        assert!(check_fraction("x", dec!(1)).is_ok());
        let err = check_fraction("burn", dec!(1.01)).expect_err("test: above one");
        assert_eq!(err.to_string(), "burn must lie within [0, 1], got 1.01");
    }

    #[test]
    fn positive_rejects_zero() {
        assert!(matches!(
            check_positive("daily_treasury_burn", Decimal::ZERO),
            Err(ConfigError::NotPositive { field: "daily_treasury_burn", .. })
        ));
        assert!(check_non_negative("treasury_stables", Decimal::ZERO).is_ok());
    }
}
