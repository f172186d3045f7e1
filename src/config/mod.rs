//! Configuration module for the dashboard.

// Can all be private now because we have a public re-export.
mod dashboard;
mod debug;
mod institutional;
mod source;

// Re-export commonly used items
pub use dashboard::{DASHBOARD, DashboardConfig};
pub use debug::{DF, LogFlags};
pub use institutional::INSTITUTIONAL_PATTERNS;
pub use source::{DATA_SOURCE, DataSourceConfig, is_remote};
