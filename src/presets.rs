// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Named Scenarios

//! Ready-made scenarios matching the playground dashboard's defaults for
//! each volume and liquidity model.

use rust_decimal_macros::dec;

use crate::config::ScenarioConfig;
use crate::core_types::Usd;
use crate::error::ConfigError;
use crate::liquidity::LiquidityModel;
use crate::volume::VolumeModel;

/// Preset name and one-line description.
pub const PRESETS: &[(&str, &str)] = &[
    ("dashboard", "logistic volume 500k to 200M, constant $5M liquidity"),
    ("constant-volume", "flat $1M daily volume, constant $5M liquidity"),
    ("linear-volume", "volume rising linearly from 500k to 100M"),
    ("mcap-liquidity", "dashboard volume, pool sized at 10% of market cap"),
    ("supply-liquidity", "dashboard volume, pool sized at 10% of circulating supply"),
    ("shallow-pool", "dashboard volume, constant liquidity at the $1M floor"),
];

/// Look up a preset by name.
pub fn preset(name: &str) -> Result<ScenarioConfig, ConfigError> {
    let base = ScenarioConfig::default();
    let scenario = match name {
        "dashboard" => base,
        "constant-volume" => ScenarioConfig {
            volume: VolumeModel::Constant { start_volume: Usd(dec!(1000000)) },
            ..base
        },
        "linear-volume" => ScenarioConfig {
            volume: VolumeModel::Linear {
                start_volume: Usd(dec!(500000)),
                max_volume: Usd(dec!(100000000)),
            },
            ..base
        },
        "mcap-liquidity" => ScenarioConfig {
            liquidity: LiquidityModel::MarketCap { fraction: dec!(0.1) },
            ..base
        },
        "supply-liquidity" => ScenarioConfig {
            liquidity: LiquidityModel::CirculatingSupply { fraction: dec!(0.1) },
            ..base
        },
        "shallow-pool" => ScenarioConfig {
            liquidity: LiquidityModel::Constant { depth: Usd(dec!(1000000)) },
            ..base
        },
        other => return Err(ConfigError::UnknownPreset(other.to_string())),
    };
    Ok(scenario)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_preset_is_valid() {
        for name in names() {
            let scenario = preset(name).expect("test: listed preset");
            scenario
                .simulation_config()
                .unwrap_or_else(|e| panic!("preset {name} invalid: {e}"));
        }
    }

    #[test]
    fn unknown_preset_rejected() {
        assert_eq!(
            preset("moonshot"),
            Err(ConfigError::UnknownPreset("moonshot".into()))
        );
    }

    #[test]
    fn dashboard_is_the_default_scenario() {
        assert_eq!(preset("dashboard"), Ok(ScenarioConfig::default()));
    }
}
