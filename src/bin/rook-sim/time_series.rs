// Per-Day Time Series Writers
// One JSON line per simulated day for independent analysis

use rook_bid_engine::{DailyFlows, DayOutcome, Phase, SimulationTable};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Write every row of `table` as one JSON object per line.
pub fn write_table_jsonl(table: &SimulationTable, path: &Path) -> std::io::Result<()> {
    write_jsonl(table.rows(), path)
}

/// Write `value` as a single pretty-printed JSON document.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> std::io::Result<()> {
    let mut file = create(path)?;
    serde_json::to_writer_pretty(&mut file, value).map_err(std::io::Error::other)?;
    file.flush()
}

fn create(path: &Path) -> std::io::Result<std::io::BufWriter<std::fs::File>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(std::io::BufWriter::new(std::fs::File::create(path)?))
}

fn write_jsonl<T, I>(items: I, path: &Path) -> std::io::Result<()>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut file = create(path)?;
    for item in items {
        let line = serde_json::to_string(&item).map_err(std::io::Error::other)?;
        writeln!(file, "{}", line)?;
    }
    file.flush()
}

// ─── Flow Recorder ──────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct FlowSnapshot {
    pub day: u32,
    pub phase: &'static str,
    #[serde(flatten)]
    pub flows: DailyFlows,
}

/// Collects each day's flows through the engine observer and writes JSONL.
#[derive(Debug, Default)]
pub struct FlowRecorder {
    snapshots: Vec<FlowSnapshot>,
}

impl FlowRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, day: u32, phase: &Phase, outcome: &DayOutcome) {
        self.snapshots.push(FlowSnapshot {
            day,
            phase: phase.name(),
            flows: outcome.flows,
        });
    }

    pub fn write_jsonl(&self, path: &Path) -> std::io::Result<()> {
        write_jsonl(&self.snapshots, path)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}
