use {
    crate::{config::DASHBOARD, utils::format_reliability},
    strum_macros::{Display, EnumIter},
};

/// Investor classes covered by the institutional reference table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum InvestorClass {
    #[strum(to_string = "Hedge Funds")]
    HedgeFunds,
    #[strum(to_string = "Pension Funds")]
    PensionFunds,
    #[strum(to_string = "Mutual Funds")]
    MutualFunds,
}

/// Historical timing behaviour of one class of institutional investor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstitutionalPattern {
    pub class: InvestorClass,
    pub timing: &'static str,
    pub signal_type: &'static str,
    /// Confidence in [0, 1].
    pub reliability: f64,
    pub volume_threshold: &'static str,
}

impl InstitutionalPattern {
    pub fn tier(&self) -> ReliabilityTier {
        ReliabilityTier::from_reliability(self.reliability)
    }

    pub fn reliability_label(&self) -> String {
        format_reliability(self.reliability)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ReliabilityTier {
    #[strum(to_string = "high")]
    High,
    #[strum(to_string = "moderate")]
    Moderate,
    #[strum(to_string = "low")]
    Low,
}

impl ReliabilityTier {
    pub fn from_reliability(reliability: f64) -> Self {
        if reliability >= DASHBOARD.reliability_high {
            Self::High
        } else if reliability >= DASHBOARD.reliability_moderate {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::INSTITUTIONAL_PATTERNS;
    use strum::IntoEnumIterator;

    #[test]
    fn tier_boundaries_are_inclusive() {
        assert_eq!(ReliabilityTier::from_reliability(0.80), ReliabilityTier::High);
        assert_eq!(ReliabilityTier::from_reliability(0.79), ReliabilityTier::Moderate);
        assert_eq!(ReliabilityTier::from_reliability(0.70), ReliabilityTier::Moderate);
        assert_eq!(ReliabilityTier::from_reliability(0.69), ReliabilityTier::Low);
        assert_eq!(ReliabilityTier::from_reliability(0.0), ReliabilityTier::Low);
    }

    #[test]
    fn reference_table_covers_every_class_once() {
        let classes: Vec<InvestorClass> = INSTITUTIONAL_PATTERNS.iter().map(|p| p.class).collect();
        assert_eq!(classes, InvestorClass::iter().collect::<Vec<_>>());
    }

    #[test]
    fn reference_table_tiers() {
        let tiers: Vec<ReliabilityTier> = INSTITUTIONAL_PATTERNS.iter().map(|p| p.tier()).collect();
        assert_eq!(
            tiers,
            vec![ReliabilityTier::High, ReliabilityTier::Moderate, ReliabilityTier::Low]
        );
        assert_eq!(INSTITUTIONAL_PATTERNS[0].reliability_label(), "85% reliable");
        assert_eq!(INSTITUTIONAL_PATTERNS[2].reliability_label(), "65% reliable");
    }

    #[test]
    fn keys_match_reference_identifiers() {
        let keys: Vec<&str> = InvestorClass::iter().map(InvestorClass::key).collect();
        assert_eq!(keys, ["hedgeFunds", "pensionFunds", "mutualFunds"]);
    }
}
