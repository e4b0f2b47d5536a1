#![cfg(target_arch = "wasm32")]

use rook_bid_engine::{default_config, preset_config, run_scenario, BidSimulation};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn default_scenario_runs_from_js() {
    let config = default_config().expect("test: default config");
    let output = run_scenario(config).expect("test: run");
    assert!(output.is_object());
}

#[wasm_bindgen_test]
fn undefined_config_means_defaults() {
    let sim = BidSimulation::new(JsValue::UNDEFINED).expect("test: default simulation");
    assert_eq!(sim.runway(), 1080);
}

#[wasm_bindgen_test]
fn unknown_preset_is_an_error() {
    assert!(preset_config("moonshot").is_err());
}
