// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Volume Growth Models

//! Daily trading volume over the simulation horizon.
//!
//! The whole series is computed once when the engine is built and replayed
//! by index afterwards; nothing in here changes once constructed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::adapter::{from_decimal, usd_from_f64};
use crate::core_types::Usd;
use crate::error::{check_non_negative, ConfigError};

// ---------------------------------------------------------------------------
// VolumeModel
// ---------------------------------------------------------------------------

/// Growth curve for daily volume, each variant carrying exactly the
/// parameters it uses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum VolumeModel {
    /// Flat at `start_volume`.
    Constant { start_volume: Usd },
    /// Straight line from `start_volume`, reaching `max_volume` one day
    /// after the horizon ends.
    Linear { start_volume: Usd, max_volume: Usd },
    /// S-curve from `start_volume` towards the carrying capacity
    /// `max_volume` at rate `growth_rate` per day.
    Logistic {
        start_volume: Usd,
        max_volume: Usd,
        growth_rate: f64,
    },
}

impl Default for VolumeModel {
    fn default() -> Self {
        Self::Logistic {
            start_volume: Usd(dec!(500000)),
            max_volume: Usd(dec!(200000000)),
            growth_rate: 0.0035,
        }
    }
}

impl VolumeModel {
    /// Short identifier, as used in scenario files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Constant { .. } => "constant",
            Self::Linear { .. } => "linear",
            Self::Logistic { .. } => "logistic",
        }
    }

    pub fn start_volume(&self) -> Usd {
        match *self {
            Self::Constant { start_volume }
            | Self::Linear { start_volume, .. }
            | Self::Logistic { start_volume, .. } => start_volume,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("volume.start_volume", self.start_volume().0)?;
        match *self {
            Self::Constant { .. } => Ok(()),
            Self::Linear { start_volume, max_volume } => {
                check_max(start_volume, max_volume)
            }
            Self::Logistic { start_volume, max_volume, growth_rate } => {
                check_max(start_volume, max_volume)?;
                if !growth_rate.is_finite() || growth_rate <= 0.0 {
                    return Err(ConfigError::InvalidGrowthRate(growth_rate));
                }
                Ok(())
            }
        }
    }

    /// Volume on `day` (0-based) of a `horizon`-day run.
    pub fn volume_at(&self, day: u32, horizon: u32) -> Usd {
        match *self {
            Self::Constant { start_volume } => start_volume,
            Self::Linear { start_volume, max_volume } => {
                let slope = (max_volume.0 - start_volume.0) / Decimal::from(horizon.max(1));
                Usd(start_volume.0 + slope * Decimal::from(day))
            }
            Self::Logistic { start_volume, max_volume, growth_rate } => {
                logistic(start_volume, max_volume, growth_rate, day)
            }
        }
    }
}

fn check_max(start: Usd, max: Usd) -> Result<(), ConfigError> {
    if max < start {
        return Err(ConfigError::MaxVolumeBelowStart { start, max });
    }
    Ok(())
}

/// `K·P0·e^{rt} / (K + P0·(e^{rt} − 1))`, evaluated in the equivalent
/// `K·P0 / (K·e^{−rt} + P0·(1 − e^{−rt}))` form so large `r·t` saturates at
/// `K` instead of overflowing.
fn logistic(start: Usd, max: Usd, rate: f64, day: u32) -> Usd {
    if start.is_zero() {
        return Usd::zero();
    }
    let p0 = from_decimal(start.0);
    let k = from_decimal(max.0);
    let decay = (-rate * f64::from(day)).exp();
    let value = k * p0 / (k * decay + p0 * (1.0 - decay));
    Usd(usd_from_f64(value).0.min(max.0))
}

// ---------------------------------------------------------------------------
// VolumeGenerator
// ---------------------------------------------------------------------------

/// Precomputed daily volume for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeGenerator {
    model: VolumeModel,
    series: Vec<Usd>,
}

impl VolumeGenerator {
    /// Validate the model and compute all `horizon_days` entries.
    pub fn new(model: VolumeModel, horizon_days: u32) -> Result<Self, ConfigError> {
        if horizon_days == 0 {
            return Err(ConfigError::EmptyHorizon);
        }
        model.validate()?;
        let series = (0..horizon_days)
            .map(|day| model.volume_at(day, horizon_days))
            .collect();
        Ok(Self { model, series })
    }

    pub fn model(&self) -> &VolumeModel {
        &self.model
    }

    /// Volume for `day`, `None` past the horizon.
    pub fn volume(&self, day: u32) -> Option<Usd> {
        self.series.get(day as usize).copied()
    }

    pub fn series(&self) -> &[Usd] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(v: Decimal) -> Usd {
        Usd(v)
    }

    #[test]
    fn constant_is_flat() {
        let model = VolumeModel::Constant { start_volume: usd(dec!(1000000)) };
        let gen = VolumeGenerator::new(model, 30).expect("test: constant model");
        assert_eq!(gen.len(), 30);
        assert!(gen.series().iter().all(|v| *v == usd(dec!(1000000))));
    }

    #[test]
    fn linear_reaches_max_one_day_after_horizon() {
        let model = VolumeModel::Linear {
            start_volume: usd(dec!(500000)),
            max_volume: usd(dec!(1500000)),
        };
        let gen = VolumeGenerator::new(model, 10).expect("test: linear model");
        assert_eq!(gen.volume(0), Some(usd(dec!(500000))));
        assert_eq!(gen.volume(5), Some(usd(dec!(1000000))));
        assert_eq!(gen.volume(9), Some(usd(dec!(1400000))));
        assert_eq!(gen.volume(10), None);
    }

    #[test]
    fn logistic_starts_at_p0_and_stays_below_k() {
        let model = VolumeModel::default();
        let gen = VolumeGenerator::new(model, 3650).expect("test: logistic model");
        let first = gen.volume(0).expect("test: day zero");
        assert!((first.0 - dec!(500000)).abs() < dec!(0.001), "got {first}");
        let cap = usd(dec!(200000000));
        for pair in gen.series().windows(2) {
            assert!(pair[1] >= pair[0], "logistic must not decrease");
            assert!(pair[1] <= cap);
        }
        assert!(gen.volume(3649).expect("test: last day") > usd(dec!(190000000)));
    }

    #[test]
    fn logistic_saturates_for_large_rates() {
        let model = VolumeModel::Logistic {
            start_volume: usd(dec!(1000)),
            max_volume: usd(dec!(50000)),
            growth_rate: 50.0,
        };
        let gen = VolumeGenerator::new(model, 100).expect("test: steep logistic");
        assert_eq!(gen.volume(99), Some(usd(dec!(50000))));
    }

    #[test]
    fn logistic_with_zero_start_is_zero() {
        let model = VolumeModel::Logistic {
            start_volume: Usd::zero(),
            max_volume: Usd::zero(),
            growth_rate: 0.01,
        };
        let gen = VolumeGenerator::new(model, 5).expect("test: degenerate logistic");
        assert!(gen.series().iter().all(Usd::is_zero));
    }

    #[test]
    fn empty_horizon_rejected() {
        let err = VolumeGenerator::new(VolumeModel::default(), 0).expect_err("test: zero days");
        assert_eq!(err, ConfigError::EmptyHorizon);
    }

    #[test]
    fn max_below_start_rejected() {
        let model = VolumeModel::Linear {
            start_volume: usd(dec!(10)),
            max_volume: usd(dec!(5)),
        };
        assert!(matches!(
            VolumeGenerator::new(model, 10),
            Err(ConfigError::MaxVolumeBelowStart { .. })
        ));
    }

    #[test]
    fn growth_rate_must_be_positive() {
        let model = VolumeModel::Logistic {
            start_volume: usd(dec!(10)),
            max_volume: usd(dec!(50)),
            growth_rate: 0.0,
        };
        assert_eq!(model.validate(), Err(ConfigError::InvalidGrowthRate(0.0)));
    }

    #[test]
    fn models_deserialize_by_tag() {
        let model: VolumeModel = serde_json::from_str(
            r#"{"model": "linear", "start_volume": 500000, "max_volume": 100000000}"#,
        )
        .expect("test: tagged linear model");
        assert_eq!(model.name(), "linear");
        assert_eq!(model.start_volume(), usd(dec!(500000)));
    }
}
