//! Individual income tax comparison across regimes.
//!
//! Computes the liability under each supported regime and recommends the
//! cheapest one:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Validate the profiles; total income must be positive |
//! | 2    | Old-regime taxable base: total income − itemized deduction total |
//! | 3    | New-regime taxable base: total income − fixed standard deduction |
//! | 4    | Evaluate each regime's slab schedule from the catalog |
//! | 5    | Apply the 4% cess to each slab tax |
//! | 6    | Pick the minimum post-cess liability (evaluation order breaks ties) |
//! | 7    | Round amounts to whole rupees, rates to two decimals |
//!
//! The comparison in step 6 runs on the un-rounded post-cess amounts.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::{
//!     AgeBand, DeductionProfile, IncomeProfile, IndividualTaxCalculator, RegimeCatalog,
//!     TaxRegime,
//! };
//!
//! let income = IncomeProfile {
//!     salary: dec!(600000),
//!     ..Default::default()
//! };
//! let deductions = DeductionProfile::default();
//!
//! let calculator = IndividualTaxCalculator::new(RegimeCatalog::standard());
//! let outcome = calculator
//!     .calculate(&income, &deductions, AgeBand::Below60)
//!     .unwrap();
//!
//! assert_eq!(outcome.old_regime_fy2425.tax_amount, dec!(23400));
//! assert_eq!(outcome.new_regime_fy2425.tax_amount, dec!(13000));
//! assert_eq!(outcome.best_option, TaxRegime::NewRegimeFy2425);
//! ```

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use crate::calculations::cess::with_cess;
use crate::catalog::{CatalogError, RegimeCatalog};
use crate::models::{
    AgeBand, DeductionProfile, IncomeProfile, IndividualTaxOutcome, STANDARD_DEDUCTION, TaxRegime,
    TaxRegimeResult,
};

/// Errors that can occur during an individual tax calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndividualTaxError {
    /// Total income must be positive to produce a meaningful comparison.
    /// A zero total is surfaced to the caller, never turned into a zero-tax
    /// outcome.
    #[error("total income must be positive, got {0}")]
    NonPositiveIncome(Decimal),

    /// A profile field was negative. Numeric coercion of raw form input is
    /// the caller's job; negative amounts are a contract violation.
    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: Decimal },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Calculator for the three-way individual regime comparison.
#[derive(Debug, Clone)]
pub struct IndividualTaxCalculator<'a> {
    catalog: &'a RegimeCatalog,
}

impl<'a> IndividualTaxCalculator<'a> {
    pub fn new(catalog: &'a RegimeCatalog) -> Self {
        Self { catalog }
    }

    /// Runs the full regime comparison for one income/deduction snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`IndividualTaxError`] if a profile field is negative, the
    /// income total is not positive, or the catalog is missing a schedule.
    pub fn calculate(
        &self,
        income: &IncomeProfile,
        deductions: &DeductionProfile,
        age_band: AgeBand,
    ) -> Result<IndividualTaxOutcome, IndividualTaxError> {
        validate_profiles(income, deductions)?;

        let total_income = income.total_income();
        if total_income <= Decimal::ZERO {
            return Err(IndividualTaxError::NonPositiveIncome(total_income));
        }

        let total_deductions = deductions.total_deductions();
        let taxable_old = (total_income - total_deductions).max(Decimal::ZERO);
        // The new regime ignores the itemized profile entirely and subtracts
        // the engine's fixed standard deduction.
        let taxable_new = (total_income - STANDARD_DEDUCTION).max(Decimal::ZERO);

        let evaluate = |regime: TaxRegime, taxable: Decimal| -> Result<Decimal, IndividualTaxError> {
            let schedule = self.catalog.schedule(regime.schedule_key(age_band))?;
            let tax = with_cess(schedule.evaluate(taxable));
            debug!(regime = regime.label(), %taxable, %tax, "evaluated regime");
            Ok(tax)
        };

        let old_tax = evaluate(TaxRegime::OldRegimeFy2425, taxable_old)?;
        let new_fy2425_tax = evaluate(TaxRegime::NewRegimeFy2425, taxable_new)?;
        let new_fy2526_tax = evaluate(TaxRegime::NewRegimeFy2526, taxable_new)?;

        // First strict minimum in evaluation order wins; a tie keeps the
        // earlier regime.
        let mut best_option = TaxRegime::OldRegimeFy2425;
        let mut best_tax = old_tax;
        for (regime, tax) in [
            (TaxRegime::NewRegimeFy2425, new_fy2425_tax),
            (TaxRegime::NewRegimeFy2526, new_fy2526_tax),
        ] {
            if tax < best_tax {
                best_option = regime;
                best_tax = tax;
            }
        }

        debug!(best = best_option.label(), %best_tax, "selected regime");

        Ok(IndividualTaxOutcome {
            total_income,
            total_deductions,
            taxable_income_old: taxable_old,
            taxable_income_new: taxable_new,
            old_regime_fy2425: TaxRegimeResult::new(old_tax, total_income),
            new_regime_fy2425: TaxRegimeResult::new(new_fy2425_tax, total_income),
            new_regime_fy2526: TaxRegimeResult::new(new_fy2526_tax, total_income),
            best_option,
        })
    }
}

fn validate_profiles(
    income: &IncomeProfile,
    deductions: &DeductionProfile,
) -> Result<(), IndividualTaxError> {
    let fields = income
        .components()
        .into_iter()
        .chain(deductions.components());
    for (field, value) in fields {
        if value < Decimal::ZERO {
            return Err(IndividualTaxError::NegativeAmount { field, value });
        }
    }
    Ok(())
}
