use serde::{Deserialize, Serialize};

/// Age band of an individual taxpayer.
///
/// The band only affects the old-regime slab table; both new-regime tables
/// are age-independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBand {
    Below60,
    From60To80,
    Above80,
}

impl AgeBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Below60 => "below60",
            Self::From60To80 => "60to80",
            Self::Above80 => "above80",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "below60" => Some(Self::Below60),
            "60to80" => Some(Self::From60To80),
            "above80" => Some(Self::Above80),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_known_codes() {
        assert_eq!(AgeBand::parse("below60"), Some(AgeBand::Below60));
        assert_eq!(AgeBand::parse("60to80"), Some(AgeBand::From60To80));
        assert_eq!(AgeBand::parse("above80"), Some(AgeBand::Above80));
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(AgeBand::parse("senior"), None);
    }
}
