// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Supply Ledger

//! Where every ROOK sits, and how the ledger is seeded.
//!
//! [`SupplyState`] is a value: the engine never edits one in place, it
//! derives tomorrow's from today's via [`SupplyState::apply`].

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core_types::{Rook, ROOK_DECIMALS};
use crate::error::{check_non_negative, ConfigError};

// ---------------------------------------------------------------------------
// SupplyState
// ---------------------------------------------------------------------------

/// Token balances by holder class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplyState {
    pub total_supply: Rook,
    pub treasury: Rook,
    pub strategic_reserves: Rook,
    pub staked: Rook,
    pub burned: Rook,
    pub unclaimed: Rook,
}

/// One day's movement between holder classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SupplyDelta {
    pub staked_in: Rook,
    pub treasury_in: Rook,
    pub treasury_out: Rook,
    pub unclaimed_in: Rook,
    pub burned_in: Rook,
}

impl SupplyState {
    /// Ledger at genesis: nothing burned, nothing left unclaimed yet.
    pub fn genesis(balances: GenesisBalances) -> Self {
        Self {
            total_supply: balances.total_supply,
            treasury: balances.treasury,
            strategic_reserves: balances.strategic_reserves,
            staked: balances.staked,
            burned: Rook::zero(),
            unclaimed: Rook::zero(),
        }
    }

    /// `total − treasury − strategic reserves − burned − unclaimed`.
    ///
    /// Staked tokens still count as circulating.
    pub fn circulating_supply(&self) -> Rook {
        self.total_supply - self.treasury - self.strategic_reserves - self.burned - self.unclaimed
    }

    /// Tomorrow's ledger.
    pub fn apply(&self, delta: &SupplyDelta) -> Self {
        Self {
            staked: self.staked + delta.staked_in,
            treasury: self.treasury + delta.treasury_in - delta.treasury_out,
            unclaimed: self.unclaimed + delta.unclaimed_in,
            burned: self.burned + delta.burned_in,
            ..*self
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_non_negative("supply.total_supply", self.total_supply.0)?;
        check_non_negative("supply.treasury", self.treasury.0)?;
        check_non_negative("supply.strategic_reserves", self.strategic_reserves.0)?;
        check_non_negative("supply.staked", self.staked.0)?;
        check_non_negative("supply.burned", self.burned.0)?;
        check_non_negative("supply.unclaimed", self.unclaimed.0)?;
        let circulating = self.circulating_supply();
        if circulating.is_negative() {
            return Err(ConfigError::NegativeCirculatingSupply(circulating));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Genesis balances
// ---------------------------------------------------------------------------

/// Balances read from chain, already converted to whole-token units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisBalances {
    pub total_supply: Rook,
    pub treasury: Rook,
    pub strategic_reserves: Rook,
    pub staked: Rook,
}

/// Balances as the token contract reports them, in base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBalances {
    pub total_supply: u128,
    pub treasury: u128,
    pub strategic_reserves: u128,
    pub staked: u128,
}

impl GenesisBalances {
    /// Divide each raw balance by `10^decimals`.
    pub fn from_raw_units(raw: RawBalances, decimals: u32) -> Result<Self, ConfigError> {
        if decimals > 28 {
            return Err(ConfigError::UnsupportedDecimals(decimals));
        }
        Ok(Self {
            total_supply: scale_raw("total_supply", raw.total_supply, decimals)?,
            treasury: scale_raw("treasury", raw.treasury, decimals)?,
            strategic_reserves: scale_raw("strategic_reserves", raw.strategic_reserves, decimals)?,
            staked: scale_raw("staked", raw.staked, decimals)?,
        })
    }
}

fn scale_raw(field: &'static str, value: u128, decimals: u32) -> Result<Rook, ConfigError> {
    let out_of_range = || ConfigError::RawBalanceOutOfRange { field, value };
    let signed = i128::try_from(value).map_err(|_| out_of_range())?;
    Decimal::try_from_i128_with_scale(signed, decimals)
        .map(|d| Rook(d.normalize()))
        .map_err(|_| out_of_range())
}

impl Default for GenesisBalances {
    /// Illustrative snapshot used by presets; real scenarios seed from chain.
    fn default() -> Self {
        Self {
            total_supply: Rook(dec!(1318000)),
            treasury: Rook(dec!(402000)),
            strategic_reserves: Rook(dec!(188000)),
            staked: Rook(dec!(120000)),
        }
    }
}

/// Supplier of the starting ledger.
///
/// On-chain readers live outside this crate and implement this; static
/// balances from a scenario file implement it trivially.
pub trait BalanceSource {
    fn genesis_balances(&self) -> Result<GenesisBalances, ConfigError>;
}

impl BalanceSource for GenesisBalances {
    fn genesis_balances(&self) -> Result<GenesisBalances, ConfigError> {
        Ok(*self)
    }
}

impl BalanceSource for RawBalances {
    /// Assumes the 18 decimals of an ERC-20 token.
    fn genesis_balances(&self) -> Result<GenesisBalances, ConfigError> {
        GenesisBalances::from_raw_units(*self, ROOK_DECIMALS)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
