use std::sync::LazyLock;

pub const ICON_TABLE: &str = "\u{1f4ca}"; // (Bar chart, ships with egui's emoji font)
pub const ICON_RELOAD: &str = "\u{1f504}";
pub const ICON_BULLET: &str = "\u{2022}";

pub struct UiText {
    pub icon_table: &'static str,
    pub icon_reload: &'static str,
    pub icon_bullet: &'static str,

    // --- Header ---
    pub heading: &'static str,
    pub show: &'static str,
    pub hide: &'static str,
    pub institutional_subject: &'static str,
    pub cpi_subject: &'static str,
    pub selector_hint: &'static str,

    // --- Fetch states ---
    pub loading: &'static str,
    pub error_prefix: &'static str,
    pub retry: &'static str,
    pub no_data: &'static str,

    // --- Impact columns / card labels ---
    pub col_index: &'static str,
    pub col_movement: &'static str,
    pub col_direction: &'static str,
    pub col_timing: &'static str,
    pub col_volume: &'static str,

    // --- CPI panel ---
    pub cpi_heading: &'static str,
    pub cpi_range: &'static str,
    pub cpi_duration: &'static str,

    // --- Institutional panel ---
    pub institutional_heading: &'static str,
    pub volume_threshold: &'static str,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    icon_table: ICON_TABLE,
    icon_reload: ICON_RELOAD,
    icon_bullet: ICON_BULLET,

    heading: "Market Movement Analysis",
    show: "Show",
    hide: "Hide",
    institutional_subject: "Institutional Patterns",
    cpi_subject: "CPI Impact",
    selector_hint: "select a category",

    loading: "Loading data...",
    error_prefix: "Error loading data:",
    retry: "Retry",
    no_data: "No data available",

    col_index: "Index/ETF",
    col_movement: "Movement Range",
    col_direction: "Direction",
    col_timing: "Timing",
    col_volume: "Volume",

    cpi_heading: "CPI Impact Analysis",
    cpi_range: "Range",
    cpi_duration: "Duration",

    institutional_heading: "Institutional Patterns",
    volume_threshold: "Volume threshold",
});
