use serde::{Deserialize, Serialize};

use crate::models::AgeBand;

/// An individual taxation regime evaluated by the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRegime {
    OldRegimeFy2425,
    NewRegimeFy2425,
    NewRegimeFy2526,
}

impl TaxRegime {
    /// Evaluation order for the regime comparison. The first regime with the
    /// minimum liability wins, so ties resolve towards the front of this
    /// list.
    pub const ALL: [TaxRegime; 3] = [
        TaxRegime::OldRegimeFy2425,
        TaxRegime::NewRegimeFy2425,
        TaxRegime::NewRegimeFy2526,
    ];

    /// User-facing label for the regime.
    pub fn label(&self) -> &'static str {
        match self {
            Self::OldRegimeFy2425 => "Old Regime (2024-25)",
            Self::NewRegimeFy2425 => "New Regime (2024-25)",
            Self::NewRegimeFy2526 => "New Regime (2025-26)",
        }
    }

    /// Catalog key for this regime. Only the old regime has age-banded
    /// tables; the new-regime keys ignore the band.
    pub fn schedule_key(self, age_band: AgeBand) -> ScheduleKey {
        match self {
            Self::OldRegimeFy2425 => ScheduleKey::OldRegimeFy2425(age_band),
            Self::NewRegimeFy2425 => ScheduleKey::NewRegimeFy2425,
            Self::NewRegimeFy2526 => ScheduleKey::NewRegimeFy2526,
        }
    }
}

/// Lookup key for a slab schedule in the regime catalog.
///
/// Adding a regime means registering a new key and table in the catalog, not
/// adding control flow to the calculators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScheduleKey {
    OldRegimeFy2425(AgeBand),
    NewRegimeFy2425,
    NewRegimeFy2526,
}
