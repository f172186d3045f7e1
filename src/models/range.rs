use {
    crate::utils::format_range,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// A `{min, max}` percent band as it appears in the dataset.
/// Bounds are taken as-is: an inverted band (min > max) is displayed unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PercentRange {
    pub min: f64,
    pub max: f64,
}

impl PercentRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }
}

impl fmt::Display for PercentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_range(self.min, self.max))
    }
}
