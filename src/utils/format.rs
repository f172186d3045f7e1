//! Display formatting for percent figures.

/// Shortest rendering of a percent value followed by `%` (`0.5%`, `1%`, `-0.2%`).
pub fn format_percent(value: f64) -> String {
    // Avoid printing "-0%".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}%", value)
}

/// `"<min>% to <max>%"`
pub fn format_range(min: f64, max: f64) -> String {
    format!("{} to {}", format_percent(min), format_percent(max))
}

/// Reliability in [0, 1] as a whole percentage, e.g. `"85% reliable"`.
pub fn format_reliability(reliability: f64) -> String {
    format!("{}% reliable", (reliability * 100.0).round())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_uses_shortest_form() {
        assert_eq!(format_percent(0.5), "0.5%");
        assert_eq!(format_percent(1.0), "1%");
        assert_eq!(format_percent(-0.25), "-0.25%");
        assert_eq!(format_percent(-0.0), "0%");
        assert_eq!(format_percent(12.0), "12%");
    }

    #[test]
    fn range_joins_both_bounds() {
        assert_eq!(format_range(0.4, 0.8), "0.4% to 0.8%");
        assert_eq!(format_range(-1.5, 0.0), "-1.5% to 0%");
    }

    #[test]
    fn reliability_rounds_to_whole_percent() {
        assert_eq!(format_reliability(0.85), "85% reliable");
        assert_eq!(format_reliability(0.75), "75% reliable");
        assert_eq!(format_reliability(0.655), "66% reliable");
        assert_eq!(format_reliability(1.0), "100% reliable");
    }
}
