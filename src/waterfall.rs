// Copyright 2026 Hypermesh Foundation. All rights reserved.
// ROOK Bid Simulation Suite - Bid Waterfall

//! Bid waterfall: splitting the ROOK a keeper bid acquires.
//!
//! No value creation occurs here. Every token bought is routed to exactly
//! one stakeholder. The fixed shares are truncated to whole base units and
//! the user takes the remainder, so the five parts add back to the amount
//! bought without a rounding step.

use serde::{Deserialize, Serialize};

use crate::core_types::Rook;
use crate::params::{BidDistributionParams, EcosystemParams};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One day's acquired ROOK, by recipient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BidSplit {
    pub user: Rook,
    pub treasury: Rook,
    pub partner: Rook,
    pub burn: Rook,
    pub stake: Rook,
}

impl BidSplit {
    pub fn total(&self) -> Rook {
        self.user + self.treasury + self.partner + self.burn + self.stake
    }
}

/// What users and partners do with their share on the day they receive it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimFlows {
    /// Claimed and sold straight back into the pool.
    pub sold_token: Rook,
    /// Left unclaimed, and therefore out of circulation.
    pub unclaimed_delta: Rook,
}

// ---------------------------------------------------------------------------
// Waterfall
// ---------------------------------------------------------------------------

/// Split `bought` by the configured fractions.
pub fn split_bid(bought: Rook, fractions: &BidDistributionParams) -> BidSplit {
    let treasury = bought.scale(fractions.treasury()).to_base_units();
    let partner = bought.scale(fractions.partner()).to_base_units();
    let burn = bought.scale(fractions.burn()).to_base_units();
    let stake = bought.scale(fractions.stake()).to_base_units();
    BidSplit {
        user: bought - treasury - partner - burn - stake,
        treasury,
        partner,
        burn,
        stake,
    }
}

/// Claimed share of user and partner rewards is dumped, the rest parks in
/// the unclaimed bucket.
pub fn claim_flows(split: &BidSplit, ecosystem: &EcosystemParams) -> ClaimFlows {
    let user_sold = split.user.scale(ecosystem.user_claim_percent);
    let partner_sold = split.partner.scale(ecosystem.partner_claim_percent);
    ClaimFlows {
        sold_token: user_sold + partner_sold,
        unclaimed_delta: (split.user - user_sold) + (split.partner - partner_sold),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_fractions_split_one_hundred() {
        let split = split_bid(Rook(dec!(100)), &BidDistributionParams::default());
        assert_eq!(split.treasury, Rook(dec!(6)));
        assert_eq!(split.burn, Rook(dec!(4)));
        assert_eq!(split.stake, Rook(dec!(10)));
        assert_eq!(split.partner, Rook::zero());
        assert_eq!(split.user, Rook(dec!(80)));
    }

    #[test]
    fn split_conserves_the_amount_bought() {
        let fractions = BidDistributionParams::new(dec!(0.13), dec!(0.07), dec!(0.011), dec!(0.09))
            .expect("test: odd split");
        let bought = Rook(dec!(31.9897641574));
        let split = split_bid(bought, &fractions);
        assert_eq!(split.total(), bought);
    }

    #[test]
    fn full_precision_amount_splits_exactly() {
        // 28 significant digits: unquantised shares lose the last one.
        let bought = Rook(dec!(16.720166177416010557119287246));
        let split = split_bid(bought, &BidDistributionParams::default());
        assert_eq!(split.total(), bought);
        assert_eq!(split.treasury, Rook(dec!(1.003209970644960633)));
        assert!(split.user.is_positive());
    }

    #[test]
    fn claims_divide_user_and_partner_shares() {
        let split = BidSplit {
            user: Rook(dec!(80)),
            partner: Rook(dec!(10)),
            ..BidSplit::default()
        };
        let eco = EcosystemParams {
            user_claim_percent: dec!(0.9),
            partner_claim_percent: dec!(0.5),
            ..EcosystemParams::default()
        };
        let flows = claim_flows(&split, &eco);
        assert_eq!(flows.sold_token, Rook(dec!(77)));
        assert_eq!(flows.unclaimed_delta, Rook(dec!(13)));
    }

    #[test]
    fn full_claim_leaves_nothing_unclaimed() {
        let split = split_bid(Rook(dec!(50)), &BidDistributionParams::default());
        let eco = EcosystemParams {
            user_claim_percent: dec!(1),
            partner_claim_percent: dec!(1),
            ..EcosystemParams::default()
        };
        let flows = claim_flows(&split, &eco);
        assert_eq!(flows.sold_token, Rook(dec!(40)));
        assert!(flows.unclaimed_delta.is_zero());
    }
}
