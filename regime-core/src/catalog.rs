//! Slab schedules for every supported regime.
//!
//! The catalog is the single source of bracket data: calculators look up a
//! [`SlabSchedule`] by [`ScheduleKey`] and never hardcode thresholds. Tables
//! are validated on construction, so a malformed built-in table fails at
//! first use rather than mid-request.

use std::sync::OnceLock;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AgeBand, ScheduleKey};

/// Errors raised while building or consulting the regime catalog.
///
/// These indicate a malformed table, not bad user input; the built-in
/// catalog can never produce them after construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("slab schedule has no tiers")]
    EmptySchedule,

    #[error("slab rate must be between 0 and 1, got {0}")]
    InvalidRate(Decimal),

    #[error("slab thresholds must be strictly ascending, got {0} after {1}")]
    NonAscendingThreshold(Decimal, Decimal),

    #[error("only the final slab tier may be unbounded")]
    UnboundedTierNotLast,

    #[error("the final slab tier must be unbounded")]
    BoundedTopTier,

    #[error("no slab schedule registered for {0:?}")]
    UnknownSchedule(ScheduleKey),
}

/// One marginal tier of a slab schedule.
///
/// `up_to` is the inclusive upper bound of the tier; `None` marks the
/// unbounded top tier. The lower bound is implied by the preceding tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlabTier {
    pub up_to: Option<Decimal>,
    pub rate: Decimal,
}

/// An ordered, validated sequence of marginal tiers.
///
/// Deserialization funnels through [`SlabSchedule::new`], so a schedule in
/// hand is always validated regardless of how it was constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SlabTier>", into = "Vec<SlabTier>")]
pub struct SlabSchedule {
    tiers: Vec<SlabTier>,
}

impl TryFrom<Vec<SlabTier>> for SlabSchedule {
    type Error = CatalogError;

    fn try_from(tiers: Vec<SlabTier>) -> Result<Self, Self::Error> {
        Self::new(tiers)
    }
}

impl From<SlabSchedule> for Vec<SlabTier> {
    fn from(schedule: SlabSchedule) -> Self {
        schedule.tiers
    }
}

impl SlabSchedule {
    /// Validates and wraps a tier list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the list is empty, a rate falls outside
    /// [0, 1], thresholds are not strictly ascending, an unbounded tier
    /// appears before the end, or the final tier is bounded.
    pub fn new(tiers: Vec<SlabTier>) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::EmptySchedule);
        }

        let mut lower = Decimal::ZERO;
        let last = tiers.len() - 1;
        for (index, tier) in tiers.iter().enumerate() {
            if tier.rate < Decimal::ZERO || tier.rate > Decimal::ONE {
                return Err(CatalogError::InvalidRate(tier.rate));
            }
            match tier.up_to {
                Some(upper) => {
                    if index == last {
                        return Err(CatalogError::BoundedTopTier);
                    }
                    if upper <= lower {
                        return Err(CatalogError::NonAscendingThreshold(upper, lower));
                    }
                    lower = upper;
                }
                None => {
                    if index != last {
                        return Err(CatalogError::UnboundedTierNotLast);
                    }
                }
            }
        }

        Ok(Self { tiers })
    }

    pub fn tiers(&self) -> &[SlabTier] {
        &self.tiers
    }

    /// Progressive slab tax on `amount`.
    ///
    /// Each tier taxes only the portion of `amount` that falls inside it, at
    /// that tier's marginal rate. Amounts at or below zero yield zero. No
    /// rounding happens here; calculators round once at the outer boundary.
    pub fn evaluate(&self, amount: Decimal) -> Decimal {
        if amount <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let mut tax = Decimal::ZERO;
        let mut lower = Decimal::ZERO;
        for tier in &self.tiers {
            let taxed_to = match tier.up_to {
                Some(upper) => amount.min(upper),
                None => amount,
            };
            if taxed_to > lower {
                tax += (taxed_to - lower) * tier.rate;
            }
            match tier.up_to {
                Some(upper) if amount > upper => lower = upper,
                _ => break,
            }
        }
        tax
    }
}

/// Registry of slab schedules keyed by regime.
#[derive(Debug, Clone)]
pub struct RegimeCatalog {
    schedules: Vec<(ScheduleKey, SlabSchedule)>,
}

impl RegimeCatalog {
    pub fn new(schedules: Vec<(ScheduleKey, SlabSchedule)>) -> Self {
        Self { schedules }
    }

    /// Looks up the schedule registered for `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnknownSchedule`] if no table is registered
    /// for the key.
    pub fn schedule(&self, key: ScheduleKey) -> Result<&SlabSchedule, CatalogError> {
        self.schedules
            .iter()
            .find(|(registered, _)| *registered == key)
            .map(|(_, schedule)| schedule)
            .ok_or(CatalogError::UnknownSchedule(key))
    }

    /// The process-wide catalog of built-in regime tables, constructed and
    /// validated once.
    pub fn standard() -> &'static RegimeCatalog {
        static STANDARD: OnceLock<RegimeCatalog> = OnceLock::new();
        STANDARD.get_or_init(|| {
            standard_catalog().expect("built-in slab tables are well-formed")
        })
    }
}

fn slab(up_to: Decimal, rate: Decimal) -> SlabTier {
    SlabTier {
        up_to: Some(up_to),
        rate,
    }
}

fn top(rate: Decimal) -> SlabTier {
    SlabTier { up_to: None, rate }
}

fn standard_catalog() -> Result<RegimeCatalog, CatalogError> {
    let schedules = vec![
        (
            ScheduleKey::OldRegimeFy2425(AgeBand::Below60),
            SlabSchedule::new(vec![
                slab(dec!(250000), dec!(0)),
                slab(dec!(500000), dec!(0.05)),
                slab(dec!(1000000), dec!(0.20)),
                top(dec!(0.30)),
            ])?,
        ),
        (
            ScheduleKey::OldRegimeFy2425(AgeBand::From60To80),
            SlabSchedule::new(vec![
                slab(dec!(300000), dec!(0)),
                slab(dec!(500000), dec!(0.05)),
                slab(dec!(1000000), dec!(0.20)),
                top(dec!(0.30)),
            ])?,
        ),
        (
            ScheduleKey::OldRegimeFy2425(AgeBand::Above80),
            SlabSchedule::new(vec![
                slab(dec!(500000), dec!(0)),
                slab(dec!(1000000), dec!(0.20)),
                top(dec!(0.30)),
            ])?,
        ),
        (
            ScheduleKey::NewRegimeFy2425,
            SlabSchedule::new(vec![
                slab(dec!(300000), dec!(0)),
                slab(dec!(600000), dec!(0.05)),
                slab(dec!(900000), dec!(0.10)),
                slab(dec!(1200000), dec!(0.15)),
                slab(dec!(1500000), dec!(0.20)),
                top(dec!(0.30)),
            ])?,
        ),
        (
            ScheduleKey::NewRegimeFy2526,
            SlabSchedule::new(vec![
                slab(dec!(300000), dec!(0)),
                slab(dec!(700000), dec!(0.05)),
                slab(dec!(1000000), dec!(0.10)),
                slab(dec!(1300000), dec!(0.15)),
                slab(dec!(1600000), dec!(0.20)),
                top(dec!(0.30)),
            ])?,
        ),
    ];

    Ok(RegimeCatalog::new(schedules))
}
