//! Multi-regime income tax computation engine.
//!
//! Given an income/expense snapshot, computes the liability under each
//! legally distinct taxation scheme — old and new individual regimes across
//! two fiscal years, and four business-entity modes including presumptive
//! taxation — and recommends the minimum-liability option. All computation
//! is pure and deterministic over immutable value objects; the slab tables
//! live in a read-only [`RegimeCatalog`] built once per process, so the
//! engine is safe to call from any number of concurrent callers.
//!
//! The two entry points below are the boundary consumed by the presentation
//! layer; callers are responsible for coercing raw form text into the
//! numeric profile fields before calling in.
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::{calculate_individual_tax, AgeBand, DeductionProfile, IncomeProfile};
//!
//! let income = IncomeProfile {
//!     salary: dec!(900000),
//!     ..Default::default()
//! };
//!
//! let outcome =
//!     calculate_individual_tax(&income, &DeductionProfile::default(), AgeBand::Below60).unwrap();
//! println!(
//!     "{}: {} ({}%)",
//!     outcome.best_option.label(),
//!     outcome.best_result().tax_amount,
//!     outcome.best_result().effective_rate_display()
//! );
//! ```

pub mod calculations;
pub mod catalog;
pub mod models;

pub use calculations::business::{BusinessTaxCalculator, BusinessTaxError};
pub use calculations::individual::{IndividualTaxCalculator, IndividualTaxError};
pub use catalog::{CatalogError, RegimeCatalog, SlabSchedule, SlabTier};
pub use models::*;

/// Compares the individual regimes for one income/deduction snapshot using
/// the built-in regime catalog.
///
/// # Errors
///
/// Returns [`IndividualTaxError`] if a profile field is negative or the
/// income total is not positive.
pub fn calculate_individual_tax(
    income: &IncomeProfile,
    deductions: &DeductionProfile,
    age_band: AgeBand,
) -> Result<IndividualTaxOutcome, IndividualTaxError> {
    IndividualTaxCalculator::new(RegimeCatalog::standard()).calculate(income, deductions, age_band)
}

/// Computes the business tax outcome for one profile using the built-in
/// regime catalog.
///
/// # Errors
///
/// Returns [`BusinessTaxError`] if a required amount is absent or negative.
pub fn calculate_business_tax(
    profile: &BusinessProfile,
) -> Result<BusinessTaxOutcome, BusinessTaxError> {
    BusinessTaxCalculator::new(RegimeCatalog::standard()).calculate(profile)
}
