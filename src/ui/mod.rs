mod screens;
mod styles;
mod ui_config;
mod ui_text;
mod view;

pub(crate) use screens::{render_dashboard, render_empty, render_failed, render_loading};

pub(crate) use styles::{ToneColor, UiStyleExt, colored_heading};

pub use ui_config::{LayoutStyle, UI_CONFIG, UI_TEXT, UiColors, UiConfig};

pub use view::{
    CpiPanel, DashboardView, ImpactRow, InstitutionalPanel, LayoutKind, LayoutView, PatternRow,
    Screen, SectorRow, SelectorOption, SelectorView, ToggleView,
};
