// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Simulation Engine

//! Day-stepped simulation of the bid mechanism.
//!
//! [`step_day`] is a pure transition from (price, ledger) to tomorrow's
//! (price, ledger); [`SimulationEngine`] drives it across the horizon,
//! tracks the treasury phase and hands every completed day to the
//! [`Recorder`].
//!
//! Each day:
//! 1. size the pool from the liquidity model,
//! 2. keepers bid `volume · mev_volume_ratio · target_bid_percent` dollars
//!    for ROOK,
//! 3. the acquired ROOK goes down the waterfall,
//! 4. claimed user and partner rewards are sold back,
//! 5. while depleting, the treasury sells ROOK for its daily burn,
//! 6. the closing price is read off the pool,
//! 7. the ledger absorbs the day's movements.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::adapter::floor_days;
use crate::amm::PoolError;
use crate::core_types::{Rook, Usd};
use crate::error::{check_non_negative, check_positive, ConfigError};
use crate::liquidity::LiquidityModel;
use crate::params::ParameterSet;
use crate::recorder::{Recorder, RunSummary, SimulationTable};
use crate::supply::{BalanceSource, SupplyDelta, SupplyState};
use crate::volume::VolumeGenerator;
use crate::waterfall::{claim_flows, split_bid, BidSplit};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Everything a run needs apart from the genesis ledger.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub sim_length_days: u32,
    pub params: ParameterSet,
    pub liquidity: LiquidityModel,
    pub initial_price: Decimal,
    /// Dollars the treasury holds before it has to sell ROOK.
    pub treasury_stables: Usd,
    pub start_date: Option<NaiveDate>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            sim_length_days: 3650,
            params: ParameterSet::default(),
            liquidity: LiquidityModel::default(),
            initial_price: dec!(25),
            treasury_stables: Usd(dec!(27000000)),
            start_date: None,
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sim_length_days == 0 {
            return Err(ConfigError::EmptyHorizon);
        }
        self.params.validate()?;
        self.liquidity.validate()?;
        check_positive("simulation.initial_price", self.initial_price)?;
        check_non_negative("simulation.treasury_stables", self.treasury_stables.0)
    }

    /// Days the stable treasury covers the burn before ROOK must be sold.
    pub fn runway(&self) -> u64 {
        let burn = self.params.dao.daily_treasury_burn.0;
        self.treasury_stables
            .0
            .checked_div(burn)
            .map(floor_days)
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Phase
// ---------------------------------------------------------------------------

/// Why a run stopped before its horizon.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum TerminationReason {
    #[error("price fell to {price}")]
    NonPositivePrice { price: Decimal },

    #[error("treasury exhausted ({treasury})")]
    TreasuryExhausted { treasury: Rook },

    #[error("circulating supply went negative ({circulating})")]
    CirculatingSupplyExhausted { circulating: Rook },

    #[error("pool degenerate: {error}")]
    Pool { error: PoolError },
}

impl From<PoolError> for TerminationReason {
    fn from(error: PoolError) -> Self {
        Self::Pool { error }
    }
}

/// Treasury phase. Accumulating → Depleting is one-way; Terminated is final.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum Phase {
    /// Stable reserves still cover the burn.
    Accumulating,
    /// The treasury sells ROOK for its daily burn.
    Depleting,
    Terminated { day: u32, reason: TerminationReason },
}

impl Phase {
    /// Phase in force on `day`.
    pub fn advance(self, day: u32, runway: u64) -> Self {
        match self {
            Self::Accumulating if u64::from(day) >= runway => Self::Depleting,
            other => other,
        }
    }

    pub fn is_depleting(&self) -> bool {
        matches!(self, Self::Depleting)
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Accumulating => "accumulating",
            Self::Depleting => "depleting",
            Self::Terminated { .. } => "terminated",
        }
    }
}

// ---------------------------------------------------------------------------
// Day step
// ---------------------------------------------------------------------------

/// Every flow of one simulated day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyFlows {
    pub volume: Usd,
    pub bid_usd: Usd,
    pub token_bought: Rook,
    pub split: BidSplit,
    pub sold_token: Rook,
    pub usdc_bought: Usd,
    pub unclaimed_delta: Rook,
    pub treasury_sold: Rook,
}

/// Tomorrow's state and how we got there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayOutcome {
    pub price: Decimal,
    pub supply: SupplyState,
    pub flows: DailyFlows,
}

/// Advance one day from `price` and `supply`.
///
/// Pure: the pool is built, used and dropped inside the call.
pub fn step_day(
    params: &ParameterSet,
    liquidity: &LiquidityModel,
    volume: Usd,
    price: Decimal,
    supply: &SupplyState,
    depleting: bool,
) -> Result<DayOutcome, PoolError> {
    let mut pool = liquidity.reserves(supply.circulating_supply(), price)?;

    let bid_usd = volume
        .0
        .checked_mul(params.bid_rate())
        .map(Usd)
        .ok_or(PoolError::Overflow("bid"))?;
    let token_bought = pool.buy_token(bid_usd)?;

    let split = split_bid(token_bought, params.bid_distribution());
    let claims = claim_flows(&split, &params.ecosystem);
    let usdc_bought = pool.sell_token(claims.sold_token)?;

    let treasury_sold = if depleting {
        pool.sell_token_for_exact_stable(params.dao.daily_treasury_burn)?
    } else {
        Rook::zero()
    };

    let price = pool.price()?;
    let supply = supply.apply(&SupplyDelta {
        staked_in: split.stake,
        treasury_in: split.treasury,
        treasury_out: treasury_sold,
        unclaimed_in: claims.unclaimed_delta,
        burned_in: split.burn,
    });

    Ok(DayOutcome {
        price,
        supply,
        flows: DailyFlows {
            volume,
            bid_usd,
            token_bought,
            split,
            sold_token: claims.sold_token,
            usdc_bought,
            unclaimed_delta: claims.unclaimed_delta,
            treasury_sold,
        },
    })
}

/// Terminal condition reached by a completed day, if any. The only place a
/// day's price is judged.
fn check_terminal(outcome: &DayOutcome) -> Option<TerminationReason> {
    if outcome.price <= Decimal::ZERO {
        return Some(TerminationReason::NonPositivePrice { price: outcome.price });
    }
    if !outcome.supply.treasury.is_positive() {
        return Some(TerminationReason::TreasuryExhausted {
            treasury: outcome.supply.treasury,
        });
    }
    let circulating = outcome.supply.circulating_supply();
    if circulating.is_negative() {
        return Some(TerminationReason::CirculatingSupplyExhausted { circulating });
    }
    None
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

/// Result of [`SimulationEngine::run`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationOutput {
    pub table: SimulationTable,
    /// Ledger after the last completed day.
    pub final_supply: SupplyState,
    pub final_price: Decimal,
    pub phase: Phase,
    pub runway: u64,
    pub depletion_day: Option<u32>,
    pub summary: RunSummary,
}

impl SimulationOutput {
    pub fn termination(&self) -> Option<(u32, &TerminationReason)> {
        match &self.phase {
            Phase::Terminated { day, reason } => Some((*day, reason)),
            _ => None,
        }
    }
}

/// A validated scenario, ready to run any number of times.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    config: SimulationConfig,
    genesis: SupplyState,
    volumes: VolumeGenerator,
    runway: u64,
}

impl SimulationEngine {
    /// Validate `config` and the genesis ledger, and precompute volume.
    pub fn new<B>(config: SimulationConfig, balances: &B) -> Result<Self, ConfigError>
    where
        B: BalanceSource + ?Sized,
    {
        config.validate()?;
        let genesis = SupplyState::genesis(balances.genesis_balances()?);
        genesis.validate()?;
        let volumes = VolumeGenerator::new(config.params.volume, config.sim_length_days)?;
        let runway = config.runway();
        Ok(Self { config, genesis, volumes, runway })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn genesis(&self) -> &SupplyState {
        &self.genesis
    }

    pub fn volumes(&self) -> &VolumeGenerator {
        &self.volumes
    }

    pub fn runway(&self) -> u64 {
        self.runway
    }

    pub fn run(&self) -> SimulationOutput {
        self.run_observed(|_, _, _| {})
    }

    /// Run the horizon, handing each completed day to `observer`.
    pub fn run_observed<F>(&self, mut observer: F) -> SimulationOutput
    where
        F: FnMut(u32, &Phase, &DayOutcome),
    {
        let horizon = self.config.sim_length_days;
        let volumes = self.volumes.series();
        let mut price = self.config.initial_price;
        let mut supply = self.genesis;
        let mut phase = Phase::Accumulating;
        let mut depletion_day = None;
        let mut summary = RunSummary::start(price, &supply);
        let mut recorder = Recorder::new(self.config.start_date, volumes.len());

        info!(
            horizon,
            runway = self.runway,
            volume_model = self.config.params.volume.name(),
            liquidity_model = self.config.liquidity.name(),
            "simulation started"
        );
        if let Some(&first) = volumes.first() {
            recorder.record(0, first, price, &supply);
        }

        for (day, &volume) in (0..horizon).zip(volumes) {
            phase = phase.advance(day, self.runway);
            if phase.is_depleting() && depletion_day.is_none() {
                depletion_day = Some(day);
                debug!(day, treasury = %supply.treasury, "treasury depleting");
            }

            let step = step_day(
                &self.config.params,
                &self.config.liquidity,
                volume,
                price,
                &supply,
                phase.is_depleting(),
            );
            let outcome = match step {
                Ok(outcome) => outcome,
                Err(error) => {
                    phase = terminate(day, error.into());
                    break;
                }
            };
            observer(day, &phase, &outcome);
            if let Some(reason) = check_terminal(&outcome) {
                phase = terminate(day, reason);
                break;
            }

            trace!(day, price = %outcome.price, treasury = %outcome.supply.treasury, "day complete");
            price = outcome.price;
            supply = outcome.supply;
            summary.observe(price, &supply, outcome.flows.treasury_sold);

            let next = day + 1;
            if let Some(&next_volume) = volumes.get(next as usize) {
                recorder.record(next, next_volume, price, &supply);
            }
        }

        summary.depletion_day = depletion_day;
        if let Phase::Terminated { day, .. } = phase {
            summary.terminated_on = Some(day);
        }
        info!(
            days = summary.days_simulated,
            final_price = %price,
            phase = phase.name(),
            "simulation finished"
        );

        SimulationOutput {
            table: recorder.finish(),
            final_supply: supply,
            final_price: price,
            phase,
            runway: self.runway,
            depletion_day,
            summary,
        }
    }
}

fn terminate(day: u32, reason: TerminationReason) -> Phase {
    warn!(day, %reason, "simulation terminated");
    Phase::Terminated { day, reason }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
