use {
    crate::models::PercentRange,
    serde::{Deserialize, Serialize},
    strum_macros::Display,
};

/// Inflation contribution attached to a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CpiImpact {
    pub primary_sectors: Vec<SectorImpact>,
    pub net_contribution: PercentRange,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorImpact {
    pub name: String,
    pub range: PercentRange,
    pub drivers: Vec<String>,
}

/// Two-way classification of the net CPI contribution.
/// Inflationary pressure (min >= 0) is the warning case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ContributionTier {
    #[strum(to_string = "warning")]
    Warning,
    #[strum(to_string = "favorable")]
    Favorable,
}

impl ContributionTier {
    pub fn from_net_min(min: f64) -> Self {
        if min >= 0.0 {
            Self::Warning
        } else {
            Self::Favorable
        }
    }
}

impl CpiImpact {
    pub fn contribution_tier(&self) -> ContributionTier {
        ContributionTier::from_net_min(self.net_contribution.min)
    }
}
