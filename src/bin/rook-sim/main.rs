// ROOK Bid Simulator CLI
// Single scenario runs with per-day output, seeded Monte Carlo sweeps, preset listing
//
// Usage:
//   rook-sim run                                   # Dashboard defaults, JSONL table
//   rook-sim run --preset shallow-pool --format json
//   rook-sim run --scenario scenario.toml --flows flows.jsonl
//   rook-sim sweep --runs 100 --seed 42            # Monte Carlo over slider ranges
//   rook-sim presets                               # List named scenarios
//   rook-sim show --preset mcap-liquidity          # Print a preset as TOML

mod monte_carlo;
mod report;
mod time_series;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use rook_bid_engine::{presets, ScenarioConfig};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use report::SweepReport;
use time_series::FlowRecorder;

// ─── CLI Parsing ────────────────────────────────────────────────────────────

/// Forecast ROOK price and supply under the keeper bid mechanism.
#[derive(Parser)]
#[command(name = "rook-sim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one scenario and write its daily table
    Run {
        #[command(flatten)]
        source: ScenarioSource,

        /// Output file (defaults to rook-sim-results/run-<timestamp>.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Jsonl)]
        format: OutputFormat,

        /// Also write every day's flows as JSONL
        #[arg(long)]
        flows: Option<PathBuf>,

        /// Date of day 0 (defaults to the scenario's, then today)
        #[arg(long)]
        start_date: Option<NaiveDate>,
    },

    /// Monte Carlo sweep over the playground's slider ranges
    Sweep {
        #[command(flatten)]
        source: ScenarioSource,

        #[arg(short, long, default_value_t = 30)]
        runs: usize,

        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Report directory
        #[arg(short, long, default_value = "sweep-results")]
        output: PathBuf,
    },

    /// List named scenarios
    Presets,

    /// Print a scenario as TOML
    Show {
        #[command(flatten)]
        source: ScenarioSource,
    },
}

#[derive(Args)]
struct ScenarioSource {
    /// Scenario file (.toml or .json)
    #[arg(short, long, conflicts_with = "preset")]
    scenario: Option<PathBuf>,

    /// Named preset (see `rook-sim presets`)
    #[arg(short, long)]
    preset: Option<String>,

    /// Override the horizon in days
    #[arg(short, long)]
    days: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One row per line
    Jsonl,
    /// The whole run output as one document
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Jsonl => "jsonl",
            Self::Json => "json",
        }
    }
}

impl ScenarioSource {
    fn name(&self) -> String {
        match (&self.scenario, &self.preset) {
            (Some(path), _) => path.display().to_string(),
            (None, Some(name)) => name.clone(),
            (None, None) => "dashboard".to_string(),
        }
    }

    fn load(&self) -> Result<ScenarioConfig> {
        let mut scenario = match (&self.scenario, &self.preset) {
            (Some(path), _) => load_scenario_file(path)?,
            (None, Some(name)) => presets::preset(name)?,
            (None, None) => ScenarioConfig::default(),
        };
        if let Some(days) = self.days {
            scenario.simulation.sim_length_days = days;
        }
        Ok(scenario)
    }
}

fn load_scenario_file(path: &Path) -> Result<ScenarioConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading scenario {}", path.display()))?;
    let parsed = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => ScenarioConfig::from_json_str(&text),
        _ => ScenarioConfig::from_toml_str(&text),
    };
    parsed.with_context(|| format!("parsing scenario {}", path.display()))
}

fn timestamp() -> String {
    chrono::Utc::now().format("%Y%m%dT%H%M%S").to_string()
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn run(
    source: &ScenarioSource,
    output: Option<PathBuf>,
    format: OutputFormat,
    flows_path: Option<PathBuf>,
    start_date: Option<NaiveDate>,
) -> Result<()> {
    let mut scenario = source.load()?;
    scenario.simulation.start_date = start_date
        .or(scenario.simulation.start_date)
        .or_else(|| Some(chrono::Local::now().date_naive()));
    let engine = scenario.build().context("invalid scenario")?;

    let start = Instant::now();
    let mut flows = FlowRecorder::new();
    let out = engine.run_observed(|day, phase, outcome| {
        if flows_path.is_some() {
            flows.record(day, phase, outcome);
        }
    });
    let elapsed = start.elapsed();

    let path = output.unwrap_or_else(|| {
        PathBuf::from("rook-sim-results").join(format!("run-{}.{}", timestamp(), format.extension()))
    });
    let written = match format {
        OutputFormat::Jsonl => time_series::write_table_jsonl(&out.table, &path),
        OutputFormat::Json => time_series::write_json(&out, &path),
    };
    written.with_context(|| format!("writing {}", path.display()))?;

    if let Some(flows_path) = flows_path {
        flows
            .write_jsonl(&flows_path)
            .with_context(|| format!("writing {}", flows_path.display()))?;
        tracing::info!(days = flows.len(), path = %flows_path.display(), "flows written");
    }

    let s = &out.summary;
    println!("\n  ROOK Bid Simulator | {}", source.name());
    println!("  Runway: {} days | Depleting from: {}",
        out.runway,
        out.depletion_day.map_or_else(|| "never".to_string(), |d| format!("day {d}")));
    println!("  Days simulated: {} | Price: {:.4} (min {:.4}, max {:.4})",
        s.days_simulated, s.final_price, s.min_price, s.max_price);
    println!("  Treasury: {} | Staked: {} | Burned: {} | Unclaimed: {}",
        out.final_supply.treasury, out.final_supply.staked,
        out.final_supply.burned, out.final_supply.unclaimed);
    match out.termination() {
        Some((day, reason)) => println!("  TERMINATED on day {day}: {reason}"),
        None => println!("  Completed full horizon"),
    }
    println!("  Run time: {:.1}ms", elapsed.as_secs_f64() * 1000.0);
    println!("  Results saved to: {}\n", path.display());
    Ok(())
}

fn sweep(source: &ScenarioSource, runs: usize, seed: u64, output: &Path) -> Result<()> {
    if runs == 0 {
        bail!("--runs must be at least 1");
    }
    let base = source.load()?;
    base.simulation_config().context("invalid base scenario")?;

    println!("\n  ROOK Bid Sweep | base: {}", source.name());
    println!("  PRNG: ChaCha8Rng | Runs: {} | Base seed: {}", runs, seed);

    let suite_start = Instant::now();
    let results = monte_carlo::run_sweep(&base, runs, seed)?;
    let report = SweepReport::aggregate(&source.name(), seed, timestamp(), results);

    println!("  {:<20} {:>14} {:>12} {:>14} {:>14}", "Metric", "Mean", "±95%", "Min", "Max");
    println!("  {}", "-".repeat(78));
    for (label, stats) in [
        ("Days simulated", &report.days_simulated),
        ("Final price", &report.final_price),
        ("Min price", &report.min_price),
        ("Final treasury", &report.final_treasury),
        ("Total burned", &report.total_burned),
        ("Treasury sold", &report.total_treasury_sold),
    ] {
        println!("  {:<20} {:>14.2} {:>12.2} {:>14.2} {:>14.2}",
            label, stats.mean, stats.ci_half_width(), stats.min, stats.max);
    }
    println!("  {}", "-".repeat(78));
    println!("  Survival rate: {:.1}%  Suite time: {:.1}s",
        report.survival_rate * 100.0, suite_start.elapsed().as_secs_f64());

    let path = output.join(format!("sweep-{}.json", report.timestamp));
    time_series::write_json(&report, &path)
        .with_context(|| format!("writing {}", path.display()))?;
    println!("  Results saved to: {}\n", path.display());
    Ok(())
}

fn list_presets() {
    for (name, description) in presets::PRESETS {
        println!("  {:<18} {}", name, description);
    }
}

fn show(source: &ScenarioSource) -> Result<()> {
    print!("{}", source.load()?.to_toml_string()?);
    Ok(())
}

// ─── Main ───────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run { source, output, format, flows, start_date } => {
            run(&source, output, format, flows, start_date)
        }
        Commands::Sweep { source, runs, seed, output } => sweep(&source, runs, seed, &output),
        Commands::Presets => {
            list_presets();
            Ok(())
        }
        Commands::Show { source } => show(&source),
    }
}
