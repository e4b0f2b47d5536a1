// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite

//! Day-stepped forecast of ROOK price and supply under the keeper bid
//! mechanism.
//!
//! Build a [`ScenarioConfig`] (from TOML, JSON, a preset or by hand), turn
//! it into a [`SimulationEngine`] and call [`SimulationEngine::run`]. The
//! engine is a pure function of its inputs, so independent scenarios can be
//! run from as many threads as the caller likes.

pub mod core_types;
pub mod adapter;
pub mod error;

pub mod params;
pub mod volume;
pub mod liquidity;
pub mod amm;
pub mod supply;
pub mod waterfall;
pub mod recorder;
pub mod engine;

pub mod config;
pub mod presets;

pub use amm::{AmmPool, PoolError};
pub use config::ScenarioConfig;
pub use core_types::{Rook, Usd};
pub use engine::{
    step_day, DailyFlows, DayOutcome, Phase, SimulationConfig, SimulationEngine,
    SimulationOutput, TerminationReason,
};
pub use error::ConfigError;
pub use liquidity::LiquidityModel;
pub use params::{BidDistributionParams, DaoParams, EcosystemParams, ParameterSet, ProtocolParams};
pub use recorder::{DailyRecord, RunSummary, SimulationTable};
pub use supply::{BalanceSource, GenesisBalances, RawBalances, SupplyState};
pub use volume::{VolumeGenerator, VolumeModel};

use wasm_bindgen::prelude::*;

// ─── WASM Interface ──────────────────────────────────────────────────────────

fn init_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn scenario_from_js(config: JsValue) -> Result<ScenarioConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(ScenarioConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn config_error(e: ConfigError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Run one scenario and return its [`SimulationOutput`].
#[wasm_bindgen]
pub fn run_scenario(config: JsValue) -> Result<JsValue, JsValue> {
    init_panic_hook();
    let output = scenario_from_js(config)?.run().map_err(config_error)?;
    to_js(&output)
}

/// The dashboard's default scenario, as an editable object.
#[wasm_bindgen]
pub fn default_config() -> Result<JsValue, JsValue> {
    to_js(&ScenarioConfig::default())
}

#[wasm_bindgen]
pub fn preset_config(name: &str) -> Result<JsValue, JsValue> {
    to_js(&presets::preset(name).map_err(config_error)?)
}

#[wasm_bindgen]
pub fn preset_names() -> Result<JsValue, JsValue> {
    to_js(&presets::names().collect::<Vec<_>>())
}

/// A validated scenario held on the JS side, for dashboards that re-run
/// or inspect the same inputs repeatedly.
#[wasm_bindgen]
pub struct BidSimulation {
    scenario: ScenarioConfig,
    engine: SimulationEngine,
}

#[wasm_bindgen]
impl BidSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<BidSimulation, JsValue> {
        init_panic_hook();
        let scenario = scenario_from_js(config)?;
        let engine = scenario.build().map_err(config_error)?;
        Ok(Self { scenario, engine })
    }

    pub fn run(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.run())
    }

    /// Days of burn covered by the treasury's stables.
    pub fn runway(&self) -> u64 {
        self.engine.runway()
    }

    pub fn volume_series(&self) -> Result<JsValue, JsValue> {
        to_js(&self.engine.volumes().series())
    }

    pub fn config(&self) -> Result<JsValue, JsValue> {
        to_js(&self.scenario)
    }
}
