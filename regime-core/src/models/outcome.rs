use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{round_percentage, round_rupees};
use crate::models::TaxRegime;

/// Liability computed for one regime or scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRegimeResult {
    /// Post-cess liability, rounded to the nearest whole rupee.
    pub tax_amount: Decimal,
    /// Liability as a percentage of the branch's reference income, rounded
    /// to two decimal places.
    pub effective_rate: Decimal,
}

impl TaxRegimeResult {
    /// Builds a result from an un-rounded post-cess liability and the
    /// reference income the rate is quoted against.
    pub(crate) fn new(post_cess_tax: Decimal, reference_income: Decimal) -> Self {
        let effective_rate = if reference_income > Decimal::ZERO {
            round_percentage(post_cess_tax / reference_income * dec!(100))
        } else {
            Decimal::ZERO
        };
        Self {
            tax_amount: round_rupees(post_cess_tax),
            effective_rate,
        }
    }

    /// Effective rate as the two-decimal percentage string shown to users,
    /// e.g. `"3.90"`.
    pub fn effective_rate_display(&self) -> String {
        format!("{:.2}", self.effective_rate)
    }
}

/// Outcome of the three-way individual regime comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualTaxOutcome {
    pub total_income: Decimal,
    /// Itemized deduction total; applies to the old regime only.
    pub total_deductions: Decimal,
    pub taxable_income_old: Decimal,
    pub taxable_income_new: Decimal,
    pub old_regime_fy2425: TaxRegimeResult,
    pub new_regime_fy2425: TaxRegimeResult,
    pub new_regime_fy2526: TaxRegimeResult,
    /// Regime with the lowest liability; ties resolve in evaluation order.
    pub best_option: TaxRegime,
}

impl IndividualTaxOutcome {
    pub fn result_for(&self, regime: TaxRegime) -> &TaxRegimeResult {
        match regime {
            TaxRegime::OldRegimeFy2425 => &self.old_regime_fy2425,
            TaxRegime::NewRegimeFy2425 => &self.new_regime_fy2425,
            TaxRegime::NewRegimeFy2526 => &self.new_regime_fy2526,
        }
    }

    pub fn best_result(&self) -> &TaxRegimeResult {
        self.result_for(self.best_option)
    }
}

/// Scheme recommended for a proprietorship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProprietorshipScheme {
    Regular,
    Presumptive,
}

/// Scheme recommended for a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanyScheme {
    Regular,
    Concessional,
}

/// Outcome of a business tax calculation, discriminated by entity type.
///
/// Effective-rate reference bases differ by branch: profit everywhere except
/// the presumptive result, which is quoted against turnover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BusinessTaxOutcome {
    Proprietorship {
        /// Profit run through the old-regime below-60 slab table.
        regular: TaxRegimeResult,
        /// Presumptive income (6% or 8% of turnover) through the same table.
        presumptive: TaxRegimeResult,
        recommended: ProprietorshipScheme,
    },
    Partnership {
        tax: TaxRegimeResult,
    },
    Llp {
        tax: TaxRegimeResult,
    },
    Company {
        regular: TaxRegimeResult,
        concessional: TaxRegimeResult,
        /// Always [`CompanyScheme::Concessional`]; the label is fixed, not
        /// the result of a minimum comparison.
        recommended: CompanyScheme,
    },
}

impl BusinessTaxOutcome {
    /// Result for the recommended scheme (or the only scheme, for flat-rate
    /// entity types).
    pub fn recommended_result(&self) -> &TaxRegimeResult {
        match self {
            Self::Proprietorship {
                regular,
                presumptive,
                recommended,
            } => match recommended {
                ProprietorshipScheme::Regular => regular,
                ProprietorshipScheme::Presumptive => presumptive,
            },
            Self::Partnership { tax } | Self::Llp { tax } => tax,
            Self::Company {
                regular,
                concessional,
                recommended,
            } => match recommended {
                CompanyScheme::Regular => regular,
                CompanyScheme::Concessional => concessional,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn new_rounds_amount_and_rate() {
        let result = TaxRegimeResult::new(dec!(23400), dec!(600000));

        assert_eq!(result.tax_amount, dec!(23400));
        assert_eq!(result.effective_rate, dec!(3.90));
        assert_eq!(result.effective_rate_display(), "3.90");
    }

    #[test]
    fn new_rounds_fractional_liability_to_whole_rupees() {
        let result = TaxRegimeResult::new(dec!(13000.5), dec!(600000));

        assert_eq!(result.tax_amount, dec!(13001));
    }

    #[test]
    fn zero_reference_income_yields_zero_rate() {
        let result = TaxRegimeResult::new(dec!(0), dec!(0));

        assert_eq!(result.effective_rate, dec!(0));
        assert_eq!(result.effective_rate_display(), "0.00");
    }

    #[test]
    fn recommended_result_follows_the_proprietorship_label() {
        let regular = TaxRegimeResult::new(dec!(75400), dec!(800000));
        let presumptive = TaxRegimeResult::new(dec!(108680), dec!(12000000));
        let outcome = BusinessTaxOutcome::Proprietorship {
            regular,
            presumptive,
            recommended: ProprietorshipScheme::Regular,
        };

        assert_eq!(outcome.recommended_result(), &regular);
    }

    #[test]
    fn recommended_result_for_flat_rate_entities_is_the_single_result() {
        let tax = TaxRegimeResult::new(dec!(156000), dec!(500000));
        let outcome = BusinessTaxOutcome::Llp { tax };

        assert_eq!(outcome.recommended_result(), &tax);
    }
}
