// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Recorder

//! Parallel daily series, the engine's only externally visible output
//! besides the final ledger.
//!
//! Row 0 is the genesis state; row `t` is the state going into day `t`,
//! alongside that day's volume. Every push appends to all columns at once,
//! so a truncated run can never leave the columns with different lengths.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core_types::{Rook, Usd};
use crate::supply::SupplyState;

// ---------------------------------------------------------------------------
// DailyRecord
// ---------------------------------------------------------------------------

/// One row of the output table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub daily_volume: Usd,
    pub rook_price: Decimal,
    pub treasury_rook: Rook,
    pub staked_rook: Rook,
    pub unclaimed_rook: Rook,
    pub burned_rook: Rook,
}

// ---------------------------------------------------------------------------
// SimulationTable
// ---------------------------------------------------------------------------

/// Column store of the recorded days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationTable {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub day: Vec<u32>,
    pub daily_volume: Vec<Usd>,
    pub rook_price: Vec<Decimal>,
    pub treasury_rook: Vec<Rook>,
    pub staked_rook: Vec<Rook>,
    pub unclaimed_rook: Vec<Rook>,
    pub burned_rook: Vec<Rook>,
}

impl SimulationTable {
    pub fn len(&self) -> usize {
        self.day.len()
    }

    pub fn is_empty(&self) -> bool {
        self.day.is_empty()
    }

    /// All columns hold the same number of entries.
    pub fn is_aligned(&self) -> bool {
        let n = self.day.len();
        [
            self.daily_volume.len(),
            self.rook_price.len(),
            self.treasury_rook.len(),
            self.staked_rook.len(),
            self.unclaimed_rook.len(),
            self.burned_rook.len(),
        ]
        .iter()
        .all(|len| *len == n)
    }

    /// Calendar date of day `day`, when the run was anchored to one.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        self.start_date
            .and_then(|start| start.checked_add_days(Days::new(u64::from(day))))
    }

    /// Row `index`, `None` past the end.
    pub fn row(&self, index: usize) -> Option<DailyRecord> {
        let day = *self.day.get(index)?;
        Some(DailyRecord {
            day,
            date: self.date_of(day),
            daily_volume: *self.daily_volume.get(index)?,
            rook_price: *self.rook_price.get(index)?,
            treasury_rook: *self.treasury_rook.get(index)?,
            staked_rook: *self.staked_rook.get(index)?,
            unclaimed_rook: *self.unclaimed_rook.get(index)?,
            burned_rook: *self.burned_rook.get(index)?,
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = DailyRecord> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    pub fn last(&self) -> Option<DailyRecord> {
        self.len().checked_sub(1).and_then(|i| self.row(i))
    }
}

// ---------------------------------------------------------------------------
// Recorder
// ---------------------------------------------------------------------------

/// Append-only writer for a [`SimulationTable`].
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    table: SimulationTable,
}

impl Recorder {
    pub fn new(start_date: Option<NaiveDate>, capacity: usize) -> Self {
        Self {
            table: SimulationTable {
                start_date,
                day: Vec::with_capacity(capacity),
                daily_volume: Vec::with_capacity(capacity),
                rook_price: Vec::with_capacity(capacity),
                treasury_rook: Vec::with_capacity(capacity),
                staked_rook: Vec::with_capacity(capacity),
                unclaimed_rook: Vec::with_capacity(capacity),
                burned_rook: Vec::with_capacity(capacity),
            },
        }
    }

    /// Append the state going into `day`.
    pub fn record(&mut self, day: u32, volume: Usd, price: Decimal, supply: &SupplyState) {
        let t = &mut self.table;
        t.day.push(day);
        t.daily_volume.push(volume);
        t.rook_price.push(price);
        t.treasury_rook.push(supply.treasury);
        t.staked_rook.push(supply.staked);
        t.unclaimed_rook.push(supply.unclaimed);
        t.burned_rook.push(supply.burned);
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn finish(self) -> SimulationTable {
        self.table
    }
}

// ---------------------------------------------------------------------------
// RunSummary
// ---------------------------------------------------------------------------

/// Headline figures of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Days whose step completed.
    pub days_simulated: u32,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub final_price: Decimal,
    pub final_treasury: Rook,
    pub total_burned: Rook,
    pub total_treasury_sold: Rook,
    pub depletion_day: Option<u32>,
    pub terminated_on: Option<u32>,
}

impl RunSummary {
    pub(crate) fn start(price: Decimal, supply: &SupplyState) -> Self {
        Self {
            days_simulated: 0,
            min_price: price,
            max_price: price,
            final_price: price,
            final_treasury: supply.treasury,
            total_burned: supply.burned,
            total_treasury_sold: Rook::zero(),
            depletion_day: None,
            terminated_on: None,
        }
    }

    /// Fold in a completed day.
    pub(crate) fn observe(&mut self, price: Decimal, supply: &SupplyState, treasury_sold: Rook) {
        self.days_simulated += 1;
        self.min_price = self.min_price.min(price);
        self.max_price = self.max_price.max(price);
        self.final_price = price;
        self.final_treasury = supply.treasury;
        self.total_burned = supply.burned;
        self.total_treasury_sold += treasury_sold;
    }

    pub fn survived(&self) -> bool {
        self.terminated_on.is_none()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::supply::GenesisBalances;
    use rust_decimal_macros::dec;

    fn supply() -> SupplyState {
        SupplyState::genesis(GenesisBalances::default())
    }

    #[test]
    fn record_appends_to_every_column() {
        let mut rec = Recorder::new(None, 4);
        rec.record(0, Usd(dec!(500000)), dec!(25), &supply());
        rec.record(1, Usd(dec!(501000)), dec!(25.1), &supply());
        let table = rec.finish();
        assert_eq!(table.len(), 2);
        assert!(table.is_aligned());
        let last = table.last().expect("test: two rows");
        assert_eq!(last.day, 1);
        assert_eq!(last.rook_price, dec!(25.1));
        assert_eq!(last.treasury_rook, Rook(dec!(402000)));
        assert_eq!(last.date, None);
    }

    #[test]
    fn dates_follow_the_start_date() {
        let start = NaiveDate::from_ymd_opt(2024, 12, 30).expect("test: valid date");
        let mut rec = Recorder::new(Some(start), 3);
        for day in 0..3 {
            rec.record(day, Usd::zero(), dec!(1), &supply());
        }
        let dates: Vec<_> = rec.finish().rows().filter_map(|r| r.date).collect();
        assert_eq!(
            dates,
            vec![
                start,
                NaiveDate::from_ymd_opt(2024, 12, 31).expect("test: valid date"),
                NaiveDate::from_ymd_opt(2025, 1, 1).expect("test: valid date"),
            ]
        );
    }

    #[test]
    fn misaligned_columns_detected() {
        let mut table = SimulationTable::default();
        table.day.push(0);
        assert!(!table.is_aligned());
        assert!(table.row(0).is_none());
    }

    #[test]
    fn summary_tracks_price_range() {
        let s = supply();
        let mut summary = RunSummary::start(dec!(25), &s);
        summary.observe(dec!(27), &s, Rook::zero());
        summary.observe(dec!(22), &s, Rook(dec!(1000)));
        assert_eq!(summary.days_simulated, 2);
        assert_eq!(summary.min_price, dec!(22));
        assert_eq!(summary.max_price, dec!(27));
        assert_eq!(summary.final_price, dec!(22));
        assert_eq!(summary.total_treasury_sold, Rook(dec!(1000)));
        assert!(summary.survived());
    }
}
