/// Monotonic clock that also works in the browser.
pub type AppInstant = web_time::Instant;

/// Short human form for a measured duration, e.g. `"340ms"` or `"2.1s"`.
pub fn format_elapsed_ms(ms: u128) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}
