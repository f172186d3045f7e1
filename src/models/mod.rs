mod cpi;
mod dataset;
mod institutional;
mod range;

pub use {
    cpi::{ContributionTier, CpiImpact, SectorImpact},
    dataset::{CategoryRecord, Direction, MarketImpact, RangeAnomaly, RegulatoryDataset},
    institutional::{InstitutionalPattern, InvestorClass, ReliabilityTier},
    range::PercentRange,
};
