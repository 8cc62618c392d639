//! Business entity taxation.
//!
//! Branches on the entity type:
//!
//! | Entity          | Computation |
//! |-----------------|-------------|
//! | Proprietorship  | Profit through the old-regime below-60 slab table, plus a presumptive alternative (6%/8% of turnover through the same table); the cheaper scheme is recommended |
//! | Partnership/LLP | Flat 30% of profit, no alternative |
//! | Company         | Flat 30% regular and flat 22% concessional; the concessional label is always recommended |
//!
//! Every branch passes through the 4% cess before rounding. Effective rates
//! are quoted against profit, except the presumptive result which is quoted
//! against turnover.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::{
//!     BusinessProfile, BusinessTaxCalculator, BusinessTaxOutcome, BusinessType, CompanyScheme,
//!     RegimeCatalog,
//! };
//!
//! let profile = BusinessProfile {
//!     profit: Some(dec!(1000000)),
//!     ..BusinessProfile::new(BusinessType::Company)
//! };
//!
//! let calculator = BusinessTaxCalculator::new(RegimeCatalog::standard());
//! let outcome = calculator.calculate(&profile).unwrap();
//!
//! match outcome {
//!     BusinessTaxOutcome::Company {
//!         regular,
//!         concessional,
//!         recommended,
//!     } => {
//!         assert_eq!(regular.tax_amount, dec!(312000));
//!         assert_eq!(concessional.tax_amount, dec!(228800));
//!         assert_eq!(recommended, CompanyScheme::Concessional);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::debug;

use crate::calculations::cess::with_cess;
use crate::catalog::{CatalogError, RegimeCatalog};
use crate::models::{
    AgeBand, BusinessProfile, BusinessTaxOutcome, BusinessType, CompanyScheme,
    ProprietorshipScheme, ScheduleKey, TaxRegimeResult,
};

/// Flat rate for partnerships, LLPs and regular company taxation.
const FLAT_ENTITY_RATE: Decimal = dec!(0.30);

/// Concessional company rate (Section 115BAA style, no exemptions).
const CONCESSIONAL_COMPANY_RATE: Decimal = dec!(0.22);

/// Turnover at or below this figure earns the lower presumptive rate.
const PRESUMPTIVE_TURNOVER_CUTOFF: Decimal = dec!(10000000);

const PRESUMPTIVE_RATE_LOW: Decimal = dec!(0.06);
const PRESUMPTIVE_RATE_HIGH: Decimal = dec!(0.08);

/// Errors that can occur during a business tax calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BusinessTaxError {
    /// Proprietorship calculations need the turnover for the presumptive
    /// alternative; other entity types carry it as information only.
    #[error("turnover is required for {} taxation", .0.as_str())]
    MissingTurnover(BusinessType),

    #[error("profit is required for business taxation")]
    MissingProfit,

    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Calculator for business entity taxation.
#[derive(Debug, Clone)]
pub struct BusinessTaxCalculator<'a> {
    catalog: &'a RegimeCatalog,
}

impl<'a> BusinessTaxCalculator<'a> {
    pub fn new(catalog: &'a RegimeCatalog) -> Self {
        Self { catalog }
    }

    /// Computes the outcome for one business profile.
    ///
    /// # Errors
    ///
    /// Returns [`BusinessTaxError`] if a required amount is absent or
    /// negative, or the catalog is missing the proprietorship schedule.
    pub fn calculate(
        &self,
        profile: &BusinessProfile,
    ) -> Result<BusinessTaxOutcome, BusinessTaxError> {
        let profit = profile.profit.ok_or(BusinessTaxError::MissingProfit)?;
        if profit < Decimal::ZERO {
            return Err(BusinessTaxError::NegativeAmount {
                field: "profit",
                value: profit,
            });
        }
        if let Some(turnover) = profile.turnover
            && turnover < Decimal::ZERO
        {
            return Err(BusinessTaxError::NegativeAmount {
                field: "turnover",
                value: turnover,
            });
        }

        match profile.business_type {
            BusinessType::Proprietorship => self.proprietorship(profile, profit),
            BusinessType::Partnership => Ok(BusinessTaxOutcome::Partnership {
                tax: flat_rate_result(profit, FLAT_ENTITY_RATE),
            }),
            BusinessType::Llp => Ok(BusinessTaxOutcome::Llp {
                tax: flat_rate_result(profit, FLAT_ENTITY_RATE),
            }),
            BusinessType::Company => {
                let regular = flat_rate_result(profit, FLAT_ENTITY_RATE);
                let concessional = flat_rate_result(profit, CONCESSIONAL_COMPANY_RATE);
                Ok(BusinessTaxOutcome::Company {
                    regular,
                    concessional,
                    // The concessional scheme is lower by construction for
                    // any positive profit; the label is fixed rather than
                    // derived from a comparison.
                    recommended: CompanyScheme::Concessional,
                })
            }
        }
    }

    fn proprietorship(
        &self,
        profile: &BusinessProfile,
        profit: Decimal,
    ) -> Result<BusinessTaxOutcome, BusinessTaxError> {
        let turnover = profile
            .turnover
            .ok_or(BusinessTaxError::MissingTurnover(BusinessType::Proprietorship))?;

        // Personal slab rates apply; businesses carry no age band, so the
        // below-60 table is used for both schemes.
        let schedule = self
            .catalog
            .schedule(ScheduleKey::OldRegimeFy2425(AgeBand::Below60))?;

        let regular_tax = with_cess(schedule.evaluate(profit));

        // Presumptive taxation substitutes the taxable base, not the
        // bracket shape: assumed income is a fixed share of turnover run
        // through the same slab table.
        let presumptive_income = if turnover <= PRESUMPTIVE_TURNOVER_CUTOFF {
            turnover * PRESUMPTIVE_RATE_LOW
        } else {
            turnover * PRESUMPTIVE_RATE_HIGH
        };
        let presumptive_tax = with_cess(schedule.evaluate(presumptive_income));

        let recommended = if presumptive_tax < regular_tax {
            ProprietorshipScheme::Presumptive
        } else {
            ProprietorshipScheme::Regular
        };

        debug!(
            %profit,
            %presumptive_income,
            %regular_tax,
            %presumptive_tax,
            scheme = ?recommended,
            "evaluated proprietorship schemes"
        );

        Ok(BusinessTaxOutcome::Proprietorship {
            regular: TaxRegimeResult::new(regular_tax, profit),
            presumptive: TaxRegimeResult::new(presumptive_tax, turnover),
            recommended,
        })
    }
}

fn flat_rate_result(profit: Decimal, rate: Decimal) -> TaxRegimeResult {
    TaxRegimeResult::new(with_cess(profit * rate), profit)
}
