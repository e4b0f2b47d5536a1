// Sweep Report Types
// Structured output of a Monte Carlo sweep, one JSON document per invocation

use serde::Serialize;

// ─── Statistics (per-metric Monte Carlo aggregation) ────────────────────────

/// Normal quantile for a two-sided 95% interval.
const Z_95: f64 = 1.96;

/// Spread of one sweep metric (final price, treasury left, ...) across runs.
/// The interval is on the mean over seeds, not on any single run.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub mean: f64,
    pub std_dev: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub min: f64,
    pub max: f64,
    pub n: usize,
}

impl Stats {
    /// Sample statistics of `metric` over every run of a sweep.
    pub fn over(runs: &[SweepRun], metric: impl Fn(&SweepRun) -> f64) -> Self {
        let samples: Vec<f64> = runs.iter().map(metric).collect();
        Self::from_samples(&samples)
    }

    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        let Some((min, max)) = samples
            .iter()
            .fold(None, |acc: Option<(f64, f64)>, &x| match acc {
                None => Some((x, x)),
                Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
            })
        else {
            return Self { mean: 0.0, std_dev: 0.0, ci_lower: 0.0, ci_upper: 0.0, min: 0.0, max: 0.0, n: 0 };
        };

        let mean = samples.iter().sum::<f64>() / n as f64;
        // Bessel-corrected; a single seed has no spread.
        let std_dev = match n {
            1 => 0.0,
            _ => (samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64).sqrt(),
        };
        let half_width = Z_95 * std_dev / (n as f64).sqrt();
        Self {
            mean,
            std_dev,
            ci_lower: mean - half_width,
            ci_upper: mean + half_width,
            min,
            max,
            n,
        }
    }

    /// Half-width of the confidence interval.
    pub fn ci_half_width(&self) -> f64 {
        (self.ci_upper - self.ci_lower) / 2.0
    }
}

// ─── Single-Run Result ──────────────────────────────────────────────────────

/// One sampled scenario and how it ended.
#[derive(Debug, Clone, Serialize)]
pub struct SweepRun {
    pub seed: u64,
    pub scenario: rook_bid_engine::ScenarioConfig,
    pub days_simulated: u32,
    pub survived: bool,
    pub termination: Option<String>,
    pub depletion_day: Option<u32>,
    pub final_price: f64,
    pub min_price: f64,
    pub final_treasury: f64,
    pub total_burned: f64,
    pub total_treasury_sold: f64,
    pub elapsed_ms: u128,
}

// ─── Aggregate ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct SweepReport {
    pub timestamp: String,
    pub version: &'static str,
    pub prng: &'static str,
    pub base: String,
    pub base_seed: u64,
    pub n_runs: usize,
    pub survival_rate: f64,
    pub days_simulated: Stats,
    pub final_price: Stats,
    pub min_price: Stats,
    pub final_treasury: Stats,
    pub total_burned: Stats,
    pub total_treasury_sold: Stats,
    pub elapsed_ms: Stats,
    pub individual_runs: Vec<SweepRun>,
}

impl SweepReport {
    pub fn aggregate(base: &str, base_seed: u64, timestamp: String, runs: Vec<SweepRun>) -> Self {
        let n = runs.len();
        let survived = runs.iter().filter(|r| r.survived).count();
        let stats = |f: fn(&SweepRun) -> f64| Stats::over(&runs, f);

        Self {
            timestamp,
            version: env!("CARGO_PKG_VERSION"),
            prng: "ChaCha8Rng",
            base: base.to_string(),
            base_seed,
            n_runs: n,
            survival_rate: if n > 0 { survived as f64 / n as f64 } else { 0.0 },
            days_simulated: stats(|r| f64::from(r.days_simulated)),
            final_price: stats(|r| r.final_price),
            min_price: stats(|r| r.min_price),
            final_treasury: stats(|r| r.final_treasury),
            total_burned: stats(|r| r.total_burned),
            total_treasury_sold: stats(|r| r.total_treasury_sold),
            elapsed_ms: stats(|r| r.elapsed_ms as f64),
            individual_runs: runs,
        }
    }
}
