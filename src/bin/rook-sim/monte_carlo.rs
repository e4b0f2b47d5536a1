// Monte Carlo Sweep: N scenarios sampled over the playground's slider ranges
// Run i uses seed base_seed + i, so any single run can be replayed on its own

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rook_bid_engine::adapter::{from_decimal, to_decimal};
use rook_bid_engine::*;
use rust_decimal::Decimal;

use crate::report::SweepRun;

use std::time::Instant;

// ─── Sampling ───────────────────────────────────────────────────────────────

fn sample(rng: &mut ChaCha8Rng, lo: f64, hi: f64, dp: u32) -> Decimal {
    to_decimal(rng.gen_range(lo..=hi)).round_dp(dp)
}

/// Redraw every slider of `base`, keeping its volume and liquidity model
/// choice, horizon and genesis balances.
pub fn sample_scenario(base: &ScenarioConfig, rng: &mut ChaCha8Rng) -> anyhow::Result<ScenarioConfig> {
    let mut s = *base;

    s.protocol.target_bid_percent = sample(rng, 0.5, 0.99, 2);
    s.ecosystem.mev_volume_ratio = sample(rng, 0.0005, 0.0015, 4);
    s.ecosystem.user_claim_percent = sample(rng, 0.0, 1.0, 2);
    s.ecosystem.partner_claim_percent = sample(rng, 0.0, 1.0, 2);
    s.dao.daily_treasury_burn = Usd(sample(rng, 20000.0, 50000.0, 0));

    s.bid_distribution = BidDistributionParams::new(
        sample(rng, 0.0, 0.15, 2),
        sample(rng, 0.0, 0.15, 2),
        sample(rng, 0.0, 0.1, 2),
        sample(rng, 0.0, 0.1, 2),
    )?;

    if let VolumeModel::Logistic { start_volume, max_volume, .. } = s.volume {
        s.volume = VolumeModel::Logistic {
            start_volume,
            max_volume,
            growth_rate: from_decimal(sample(rng, 0.002, 0.005, 4)),
        };
    }

    s.liquidity = match s.liquidity {
        LiquidityModel::Constant { .. } => LiquidityModel::Constant {
            depth: Usd(sample(rng, 1_000_000.0, 50_000_000.0, 0)),
        },
        LiquidityModel::MarketCap { .. } => LiquidityModel::MarketCap {
            fraction: sample(rng, 0.01, 0.2, 2),
        },
        LiquidityModel::CirculatingSupply { .. } => LiquidityModel::CirculatingSupply {
            fraction: sample(rng, 0.01, 0.2, 2),
        },
    };

    Ok(s)
}

// ─── Runs ───────────────────────────────────────────────────────────────────

/// Run a single sampled scenario with a specific seed.
pub fn run_single(base: &ScenarioConfig, seed: u64) -> anyhow::Result<SweepRun> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let scenario = sample_scenario(base, &mut rng)?;

    let start = Instant::now();
    let output = scenario.run()?;
    let elapsed_ms = start.elapsed().as_millis();

    let summary = output.summary;
    Ok(SweepRun {
        seed,
        scenario,
        days_simulated: summary.days_simulated,
        survived: summary.survived(),
        termination: output.termination().map(|(day, reason)| format!("day {day}: {reason}")),
        depletion_day: output.depletion_day,
        final_price: from_decimal(summary.final_price),
        min_price: from_decimal(summary.min_price),
        final_treasury: from_decimal(summary.final_treasury.0),
        total_burned: from_decimal(summary.total_burned.0),
        total_treasury_sold: from_decimal(summary.total_treasury_sold.0),
        elapsed_ms,
    })
}

/// Run `n_runs` samples sequentially with seeds `base_seed..base_seed + n_runs`.
pub fn run_sweep(base: &ScenarioConfig, n_runs: usize, base_seed: u64) -> anyhow::Result<Vec<SweepRun>> {
    let mut results = Vec::with_capacity(n_runs);
    for i in 0..n_runs {
        let seed = base_seed + i as u64;
        let result = run_single(base, seed)?;
        tracing::debug!(seed, days = result.days_simulated, survived = result.survived, "sweep run");
        results.push(result);
    }
    Ok(results)
}
