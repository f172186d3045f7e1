mod format;
mod time_utils;

pub use format::{format_percent, format_range, format_reliability};
pub use time_utils::{AppInstant, format_elapsed_ms};
