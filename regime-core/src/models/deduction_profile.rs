use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Fixed standard deduction for salaried individuals.
///
/// The new-regime taxable base always subtracts exactly this constant,
/// regardless of the value carried in a [`DeductionProfile`].
pub const STANDARD_DEDUCTION: Decimal = dec!(50000);

/// Itemized deductions claimed under the old regime.
///
/// Section amounts are summed as entered; no per-section statutory cap is
/// enforced (80C is not clipped at 150,000, and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionProfile {
    pub standard_deduction: Decimal,
    pub section_80c: Decimal,
    pub section_80d: Decimal,
    pub section_80g: Decimal,
    pub home_loan_interest: Decimal,
    pub nps: Decimal,
    pub education_loan: Decimal,
    pub other_deductions: Decimal,
}

impl Default for DeductionProfile {
    fn default() -> Self {
        Self {
            standard_deduction: STANDARD_DEDUCTION,
            section_80c: Decimal::ZERO,
            section_80d: Decimal::ZERO,
            section_80g: Decimal::ZERO,
            home_loan_interest: Decimal::ZERO,
            nps: Decimal::ZERO,
            education_loan: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
        }
    }
}

impl DeductionProfile {
    /// Named components, used for boundary validation and totalling.
    pub(crate) fn components(&self) -> [(&'static str, Decimal); 8] {
        [
            ("standard deduction", self.standard_deduction),
            ("section 80C", self.section_80c),
            ("section 80D", self.section_80d),
            ("section 80G", self.section_80g),
            ("home loan interest", self.home_loan_interest),
            ("NPS contribution", self.nps),
            ("education loan interest", self.education_loan),
            ("other deductions", self.other_deductions),
        ]
    }

    /// Sum of all deduction components. Applies only to the old regime.
    pub fn total_deductions(&self) -> Decimal {
        self.components().into_iter().map(|(_, value)| value).sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_carries_the_standard_deduction_only() {
        let deductions = DeductionProfile::default();

        assert_eq!(deductions.standard_deduction, dec!(50000));
        assert_eq!(deductions.total_deductions(), dec!(50000));
    }

    #[test]
    fn total_deductions_sums_every_section() {
        let deductions = DeductionProfile {
            section_80c: dec!(150000),
            section_80d: dec!(25000),
            home_loan_interest: dec!(200000),
            ..Default::default()
        };

        assert_eq!(deductions.total_deductions(), dec!(425000));
    }

    #[test]
    fn sections_are_not_capped() {
        let deductions = DeductionProfile {
            section_80c: dec!(900000),
            ..Default::default()
        };

        assert_eq!(deductions.total_deductions(), dec!(950000));
    }
}
