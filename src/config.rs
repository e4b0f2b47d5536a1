// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Scenario Files

//! Scenario documents in TOML or JSON.
//!
//! Every section is optional and falls back to the dashboard defaults:
//!
//! ```toml
//! [simulation]
//! sim_length_days = 3650
//! initial_price = 25
//! treasury_stables = 27000000
//! start_date = "2024-01-01"
//!
//! [protocol]
//! target_bid_percent = 0.8
//!
//! [bid_distribution]
//! treasury = 0.06
//! partner = 0
//! stake = 0.10
//! burn = 0.04
//!
//! [volume]
//! model = "logistic"
//! start_volume = 500000
//! max_volume = 200000000
//! growth_rate = 0.0035
//!
//! [liquidity]
//! model = "constant"
//! depth = 5000000
//! ```

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core_types::Usd;
use crate::engine::{SimulationConfig, SimulationEngine, SimulationOutput};
use crate::error::ConfigError;
use crate::liquidity::LiquidityModel;
use crate::params::{BidDistributionParams, DaoParams, EcosystemParams, ParameterSet, ProtocolParams};
use crate::supply::GenesisBalances;
use crate::volume::VolumeModel;

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// `[simulation]`: horizon and starting market.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSection {
    pub sim_length_days: u32,
    pub initial_price: Decimal,
    pub treasury_stables: Usd,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            sim_length_days: 3650,
            initial_price: dec!(25),
            treasury_stables: Usd(dec!(27000000)),
            start_date: None,
        }
    }
}

/// `[protocol]`. The bid split has its own section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProtocolSection {
    pub target_bid_percent: Decimal,
}

impl Default for ProtocolSection {
    fn default() -> Self {
        Self {
            target_bid_percent: ProtocolParams::default().target_bid_percent,
        }
    }
}

// ---------------------------------------------------------------------------
// ScenarioConfig
// ---------------------------------------------------------------------------

/// A complete scenario as written on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub simulation: SimulationSection,
    pub protocol: ProtocolSection,
    pub bid_distribution: BidDistributionParams,
    pub ecosystem: EcosystemParams,
    pub dao: DaoParams,
    pub volume: VolumeModel,
    pub liquidity: LiquidityModel,
    pub genesis: GenesisBalances,
}

impl ScenarioConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Assemble and validate the engine configuration.
    pub fn simulation_config(&self) -> Result<SimulationConfig, ConfigError> {
        let protocol = ProtocolParams {
            target_bid_percent: self.protocol.target_bid_percent,
            bid_distribution: self.bid_distribution,
        };
        let params = ParameterSet::new(protocol, self.ecosystem, self.dao, self.volume)?;
        let config = SimulationConfig {
            sim_length_days: self.simulation.sim_length_days,
            params,
            liquidity: self.liquidity,
            initial_price: self.simulation.initial_price,
            treasury_stables: self.simulation.treasury_stables,
            start_date: self.simulation.start_date,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn build(&self) -> Result<SimulationEngine, ConfigError> {
        SimulationEngine::new(self.simulation_config()?, &self.genesis)
    }

    pub fn run(&self) -> Result<SimulationOutput, ConfigError> {
        Ok(self.build()?.run())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Rook;

    #[test]
    fn empty_document_is_the_dashboard_default() {
        let cfg = ScenarioConfig::from_toml_str("").expect("test: empty toml");
        assert_eq!(cfg, ScenarioConfig::default());
        let sim = cfg.simulation_config().expect("test: defaults are valid");
        assert_eq!(sim, SimulationConfig::default());
    }

    #[test]
    fn toml_sections_override_defaults() {
        let cfg = ScenarioConfig::from_toml_str(
            r#"
            [simulation]
            sim_length_days = 720
            start_date = "2024-01-01"

            [bid_distribution]
            burn = 0.1

            [volume]
            model = "linear"
            start_volume = 1000000
            max_volume = 5000000

            [liquidity]
            model = "supply"
            fraction = 0.05

            [genesis]
            treasury = 300000
            "#,
        )
        .expect("test: scenario toml");

        assert_eq!(cfg.simulation.sim_length_days, 720);
        assert_eq!(cfg.simulation.initial_price, dec!(25));
        assert_eq!(
            cfg.simulation.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(cfg.bid_distribution.user(), dec!(0.74));
        assert_eq!(cfg.volume.name(), "linear");
        assert_eq!(cfg.liquidity, LiquidityModel::CirculatingSupply { fraction: dec!(0.05) });
        assert_eq!(cfg.genesis.treasury, Rook(dec!(300000)));
        assert_eq!(cfg.genesis.total_supply, GenesisBalances::default().total_supply);
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = ScenarioConfig::from_toml_str("[simulation]\nhorizon = 10\n")
            .expect_err("test: typo in key");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_values_surface_as_config_errors() {
        let cfg = ScenarioConfig::from_json_str(r#"{"dao": {"daily_treasury_burn": 0}}"#)
            .expect("test: parses");
        assert!(matches!(
            cfg.simulation_config(),
            Err(ConfigError::NotPositive { field: "dao.daily_treasury_burn", .. })
        ));
    }

    #[test]
    fn toml_round_trip() {
        let mut cfg = ScenarioConfig::default();
        cfg.simulation.start_date = NaiveDate::from_ymd_opt(2023, 6, 1);
        let text = cfg.to_toml_string().expect("test: serialize");
        let back = ScenarioConfig::from_toml_str(&text).expect("test: parse back");
        assert_eq!(back, cfg);
    }

    #[test]
    fn short_run_from_config() {
        let cfg = ScenarioConfig::from_toml_str("[simulation]\nsim_length_days = 10\n")
            .expect("test: short scenario");
        let out = cfg.run().expect("test: runs");
        assert_eq!(out.table.len(), 10);
    }
}
