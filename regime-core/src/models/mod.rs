mod age_band;
mod business_profile;
mod deduction_profile;
mod income_profile;
mod outcome;
mod regime;

pub use age_band::AgeBand;
pub use business_profile::{BusinessExpenses, BusinessProfile, BusinessType};
pub use deduction_profile::{DeductionProfile, STANDARD_DEDUCTION};
pub use income_profile::IncomeProfile;
pub use outcome::{
    BusinessTaxOutcome, CompanyScheme, IndividualTaxOutcome, ProprietorshipScheme, TaxRegimeResult,
};
pub use regime::{ScheduleKey, TaxRegime};
