//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Fetch start, completion time and outcome.
    pub log_fetch: bool,

    /// Category picks and panel toggles.
    pub log_selection: bool,

    /// Chosen layout variant for the current viewport width (every frame).
    pub log_layout: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,
    log_selection: false,
    log_layout: false,
};
