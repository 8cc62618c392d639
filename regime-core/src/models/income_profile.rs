use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Income components for an individual tax calculation.
///
/// All amounts are annual figures in the same currency unit. A profile is
/// built once per calculation request from user-entered values and is not
/// mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeProfile {
    pub salary: Decimal,
    pub rental_income: Decimal,
    pub business_income: Decimal,
    pub capital_gains: Decimal,
    pub other_income: Decimal,
    pub agricultural_income: Decimal,
}

impl IncomeProfile {
    /// Named components, used for boundary validation and totalling.
    pub(crate) fn components(&self) -> [(&'static str, Decimal); 6] {
        [
            ("salary", self.salary),
            ("rental income", self.rental_income),
            ("business income", self.business_income),
            ("capital gains", self.capital_gains),
            ("other income", self.other_income),
            ("agricultural income", self.agricultural_income),
        ]
    }

    /// Sum of all six income components.
    ///
    /// Agricultural income is counted in the total even though the law this
    /// models exempts it; every regime comparison and effective rate is
    /// defined against this sum.
    pub fn total_income(&self) -> Decimal {
        self.components().into_iter().map(|(_, value)| value).sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn total_income_sums_all_components() {
        let income = IncomeProfile {
            salary: dec!(500000),
            rental_income: dec!(120000),
            business_income: dec!(80000),
            capital_gains: dec!(25000),
            other_income: dec!(5000),
            agricultural_income: dec!(0),
        };

        assert_eq!(income.total_income(), dec!(730000));
    }

    #[test]
    fn total_income_includes_agricultural_income() {
        let income = IncomeProfile {
            salary: dec!(400000),
            agricultural_income: dec!(100000),
            ..Default::default()
        };

        assert_eq!(income.total_income(), dec!(500000));
    }

    #[test]
    fn default_profile_has_zero_total() {
        assert_eq!(IncomeProfile::default().total_income(), dec!(0));
    }
}
