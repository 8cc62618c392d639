use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Legal form of a business entity, which selects the taxation branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BusinessType {
    Proprietorship,
    Partnership,
    Llp,
    Company,
}

impl BusinessType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proprietorship => "proprietorship",
            Self::Partnership => "partnership",
            Self::Llp => "llp",
            Self::Company => "company",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "proprietorship" => Some(Self::Proprietorship),
            "partnership" => Some(Self::Partnership),
            "llp" => Some(Self::Llp),
            "company" => Some(Self::Company),
            _ => None,
        }
    }
}

/// Itemized operating expenses. Informational only: the engine never
/// subtracts these from profit, it just reports their total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessExpenses {
    pub operating_expenses: Decimal,
    pub depreciation: Decimal,
    pub interest_paid: Decimal,
    pub employee_benefits: Decimal,
    pub other_expenses: Decimal,
}

impl BusinessExpenses {
    pub fn total(&self) -> Decimal {
        self.operating_expenses
            + self.depreciation
            + self.interest_paid
            + self.employee_benefits
            + self.other_expenses
    }
}

/// Input snapshot for a business tax calculation.
///
/// `turnover` and `profit` are optional because the caller forwards raw form
/// state; a proprietorship calculation requires both, every other entity type
/// requires only `profit` (turnover stays informational).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    pub business_type: BusinessType,
    pub turnover: Option<Decimal>,
    pub profit: Option<Decimal>,
    pub expenses: Option<BusinessExpenses>,
}

impl BusinessProfile {
    pub fn new(business_type: BusinessType) -> Self {
        Self {
            business_type,
            turnover: None,
            profit: None,
            expenses: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_accepts_known_entity_types() {
        assert_eq!(
            BusinessType::parse("proprietorship"),
            Some(BusinessType::Proprietorship)
        );
        assert_eq!(BusinessType::parse("llp"), Some(BusinessType::Llp));
        assert_eq!(BusinessType::parse("trust"), None);
    }

    #[test]
    fn expenses_total_sums_every_category() {
        let expenses = BusinessExpenses {
            operating_expenses: dec!(300000),
            depreciation: dec!(50000),
            interest_paid: dec!(20000),
            employee_benefits: dec!(120000),
            other_expenses: dec!(10000),
        };

        assert_eq!(expenses.total(), dec!(500000));
    }
}
