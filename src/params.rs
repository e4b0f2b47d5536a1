// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Parameter Set

//! Immutable scenario parameters.
//!
//! Five groups feed the day step: how acquired ROOK is split
//! ([`BidDistributionParams`]), how much of the MEV the keepers bid
//! ([`ProtocolParams`]), how big MEV is relative to volume and how eagerly
//! rewards are claimed ([`EcosystemParams`]), what the DAO spends per day
//! ([`DaoParams`]) and how volume grows ([`VolumeModel`]).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::core_types::Usd;
use crate::error::{check_fraction, check_positive, ConfigError};
use crate::volume::VolumeModel;

// ---------------------------------------------------------------------------
// BidDistributionParams
// ---------------------------------------------------------------------------

/// Fractions of every keeper bid routed to each stakeholder.
///
/// The user share is not configured; it is whatever the other four leave
/// over, and construction fails if that residual would be negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BidDistributionShares", into = "BidDistributionShares")]
pub struct BidDistributionParams {
    treasury: Decimal,
    partner: Decimal,
    stake: Decimal,
    burn: Decimal,
    user: Decimal,
}

/// The configurable part of a [`BidDistributionParams`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BidDistributionShares {
    pub treasury: Decimal,
    pub partner: Decimal,
    pub stake: Decimal,
    pub burn: Decimal,
}

impl BidDistributionParams {
    pub fn new(
        treasury: Decimal,
        partner: Decimal,
        stake: Decimal,
        burn: Decimal,
    ) -> Result<Self, ConfigError> {
        check_fraction("bid_distribution.treasury", treasury)?;
        check_fraction("bid_distribution.partner", partner)?;
        check_fraction("bid_distribution.stake", stake)?;
        check_fraction("bid_distribution.burn", burn)?;

        let sum = treasury + partner + stake + burn;
        let user = Decimal::ONE - sum;
        if user < Decimal::ZERO {
            return Err(ConfigError::BidDistributionOverAllocated { sum });
        }

        Ok(Self { treasury, partner, stake, burn, user })
    }

    pub fn treasury(&self) -> Decimal {
        self.treasury
    }

    pub fn partner(&self) -> Decimal {
        self.partner
    }

    pub fn stake(&self) -> Decimal {
        self.stake
    }

    pub fn burn(&self) -> Decimal {
        self.burn
    }

    /// Residual share left for users.
    pub fn user(&self) -> Decimal {
        self.user
    }

    /// Sum of all five fractions. Always one for a constructed value.
    pub fn total(&self) -> Decimal {
        self.treasury + self.partner + self.stake + self.burn + self.user
    }
}

impl Default for BidDistributionParams {
    fn default() -> Self {
        Self {
            treasury: dec!(0.06),
            partner: dec!(0),
            stake: dec!(0.10),
            burn: dec!(0.04),
            user: dec!(0.80),
        }
    }
}

impl Default for BidDistributionShares {
    fn default() -> Self {
        BidDistributionParams::default().into()
    }
}

impl TryFrom<BidDistributionShares> for BidDistributionParams {
    type Error = ConfigError;

    fn try_from(shares: BidDistributionShares) -> Result<Self, Self::Error> {
        Self::new(shares.treasury, shares.partner, shares.stake, shares.burn)
    }
}

impl From<BidDistributionParams> for BidDistributionShares {
    fn from(p: BidDistributionParams) -> Self {
        Self {
            treasury: p.treasury,
            partner: p.partner,
            stake: p.stake,
            burn: p.burn,
        }
    }
}

// ---------------------------------------------------------------------------
// ProtocolParams
// ---------------------------------------------------------------------------

/// Protocol-level targets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProtocolParams {
    /// Share of captured MEV the keepers are expected to bid, in (0, 1].
    pub target_bid_percent: Decimal,
    pub bid_distribution: BidDistributionParams,
}

impl ProtocolParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("protocol.target_bid_percent", self.target_bid_percent)?;
        check_fraction("protocol.target_bid_percent", self.target_bid_percent)
    }
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            target_bid_percent: dec!(0.8),
            bid_distribution: BidDistributionParams::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// EcosystemParams
// ---------------------------------------------------------------------------

/// Assumptions about the wider market around the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EcosystemParams {
    /// Extractable MEV per dollar of trading volume.
    pub mev_volume_ratio: Decimal,
    /// Share of user rewards claimed and sold the same day.
    pub user_claim_percent: Decimal,
    /// Share of partner rewards claimed and sold the same day.
    pub partner_claim_percent: Decimal,
}

impl EcosystemParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("ecosystem.mev_volume_ratio", self.mev_volume_ratio)?;
        check_fraction("ecosystem.user_claim_percent", self.user_claim_percent)?;
        check_fraction("ecosystem.partner_claim_percent", self.partner_claim_percent)
    }
}

impl Default for EcosystemParams {
    fn default() -> Self {
        Self {
            mev_volume_ratio: dec!(0.001),
            user_claim_percent: dec!(0.9),
            partner_claim_percent: dec!(0.9),
        }
    }
}

// ---------------------------------------------------------------------------
// DaoParams
// ---------------------------------------------------------------------------

/// DAO operating expenses.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DaoParams {
    /// Dollars the treasury spends per day.
    pub daily_treasury_burn: Usd,
}

impl DaoParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("dao.daily_treasury_burn", self.daily_treasury_burn.0)
    }
}

impl Default for DaoParams {
    fn default() -> Self {
        Self {
            daily_treasury_burn: Usd(dec!(25000)),
        }
    }
}

// ---------------------------------------------------------------------------
// ParameterSet
// ---------------------------------------------------------------------------

/// All five parameter groups, validated together.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub protocol: ProtocolParams,
    pub ecosystem: EcosystemParams,
    pub dao: DaoParams,
    pub volume: VolumeModel,
}

impl ParameterSet {
    pub fn new(
        protocol: ProtocolParams,
        ecosystem: EcosystemParams,
        dao: DaoParams,
        volume: VolumeModel,
    ) -> Result<Self, ConfigError> {
        let set = Self { protocol, ecosystem, dao, volume };
        set.validate()?;
        Ok(set)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.protocol.validate()?;
        self.ecosystem.validate()?;
        self.dao.validate()?;
        self.volume.validate()
    }

    /// Bid distribution carried by the protocol group.
    pub fn bid_distribution(&self) -> &BidDistributionParams {
        &self.protocol.bid_distribution
    }

    /// Dollars bid per dollar of volume: `mev_volume_ratio * target_bid_percent`.
    pub fn bid_rate(&self) -> Decimal {
        self.ecosystem.mev_volume_ratio * self.protocol.target_bid_percent
    }
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            protocol: ProtocolParams::default(),
            ecosystem: EcosystemParams::default(),
            dao: DaoParams::default(),
            volume: VolumeModel::default(),
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_distribution_sums_to_one() {
        let bid = BidDistributionParams::default();
        assert_eq!(bid.user(), dec!(0.80));
        assert_eq!(bid.total(), Decimal::ONE);
    }

    #[test]
    fn user_share_is_the_residual() {
        let bid = BidDistributionParams::new(dec!(0.15), dec!(0.15), dec!(0.1), dec!(0.1))
            .expect("test: maximal dashboard split");
        assert_eq!(bid.user(), dec!(0.5));
        assert_eq!(bid.total(), Decimal::ONE);
    }

    #[test]
    fn user_share_may_be_zero() {
        let bid = BidDistributionParams::new(dec!(0.25), dec!(0.25), dec!(0.25), dec!(0.25))
            .expect("test: fully allocated split");
        assert_eq!(bid.user(), Decimal::ZERO);
    }

    #[test]
    fn over_allocation_rejected() {
        let err = BidDistributionParams::new(dec!(0.5), dec!(0.3), dec!(0.2), dec!(0.1))
            .expect_err("test: sums to 1.1");
        assert_eq!(err, ConfigError::BidDistributionOverAllocated { sum: dec!(1.1) });
    }

    #[test]
    fn negative_fraction_rejected() {
        let err = BidDistributionParams::new(dec!(-0.01), dec!(0), dec!(0), dec!(0))
            .expect_err("test: negative treasury share");
        assert!(
            matches!(err, ConfigError::FractionOutOfRange { field: "bid_distribution.treasury", .. }),
            "expected FractionOutOfRange, got {err:?}"
        );
    }

    #[test]
    fn distribution_deserializes_through_validation() {
        let ok: BidDistributionParams = serde_json::from_str(
            r#"{"treasury": 0.06, "partner": 0, "stake": 0.1, "burn": 0.04}"#,
        )
        .expect("test: valid split");
        assert_eq!(ok.user(), dec!(0.8));

        let bad = serde_json::from_str::<BidDistributionParams>(
            r#"{"treasury": 0.9, "partner": 0.9, "stake": 0, "burn": 0}"#,
        );
        assert!(bad.is_err(), "over-allocated split must not deserialize");
    }

    #[test]
    fn missing_fractions_fall_back_to_defaults() {
        let partial: BidDistributionParams =
            serde_json::from_str(r#"{"burn": 0.1}"#).expect("test: partial split");
        assert_eq!(partial.treasury(), dec!(0.06));
        assert_eq!(partial.burn(), dec!(0.1));
        assert_eq!(partial.user(), dec!(0.74));
    }

    #[test]
    fn target_bid_percent_bounds() {
        let mut protocol = ProtocolParams::default();
        protocol.target_bid_percent = dec!(0);
        assert!(protocol.validate().is_err());
        protocol.target_bid_percent = dec!(1);
        assert!(protocol.validate().is_ok());
        protocol.target_bid_percent = dec!(1.2);
        assert!(protocol.validate().is_err());
    }

    #[test]
    fn ecosystem_validation() {
        let mut eco = EcosystemParams::default();
        assert!(eco.validate().is_ok());
        eco.mev_volume_ratio = dec!(0);
        assert!(eco.validate().is_err());
        eco.mev_volume_ratio = dec!(0.001);
        eco.partner_claim_percent = dec!(1.5);
        assert!(eco.validate().is_err());
    }

    #[test]
    fn dao_burn_must_be_positive() {
        let dao = DaoParams { daily_treasury_burn: Usd::zero() };
        assert!(matches!(dao.validate(), Err(ConfigError::NotPositive { .. })));
    }

    #[test]
    fn bid_rate_combines_ratios() {
        let set = ParameterSet::default();
        assert_eq!(set.bid_rate(), dec!(0.0008));
    }
}
