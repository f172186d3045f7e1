//! Dashboard behaviour knobs.

pub struct DashboardConfig {
    /// Category shown before the user picks one.
    pub default_category: &'static str,
    /// Viewports narrower than this draw the compact card layout.
    pub compact_breakpoint_px: f32,
    /// Reliability at or above this is the high tier.
    pub reliability_high: f64,
    /// Reliability at or above this (and below high) is the moderate tier.
    pub reliability_moderate: f64,
}

pub const DASHBOARD: DashboardConfig = DashboardConfig {
    default_category: "immigrationRestrictions",
    compact_breakpoint_px: 640.0,
    reliability_high: 0.80,
    reliability_moderate: 0.70,
};
