use eframe::egui::{Color32, CornerRadius, Frame, Margin, Stroke};

use crate::ui::view::LayoutKind;

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subdued: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
    pub card: Color32,
    pub card_border: Color32,

    // --- SEMANTIC ---
    pub favorable: Color32,
    pub favorable_bg: Color32,
    pub adverse: Color32,
    pub adverse_bg: Color32,
    pub caution: Color32,
    pub caution_bg: Color32,
    pub error: Color32,
    pub bar_track: Color32,
}

/// Size and spacing used when painting one layout variant.
#[derive(Clone, Copy)]
pub struct LayoutStyle {
    pub body_size: f32,
    pub heading_size: f32,
    pub row_height: f32,
    pub card_margin: i8,
    /// Columns in the institutional patterns grid.
    pub pattern_columns: usize,
    pub reliability_bar_width: f32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub compact: LayoutStyle,
    pub tabular: LayoutStyle,
    pub max_content_width: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::from_rgb(200, 200, 200),
        heading: Color32::WHITE,
        subdued: Color32::GRAY,
        central_panel: Color32::from_rgb(24, 26, 30),
        top_panel: Color32::from_rgb(32, 34, 40),
        card: Color32::from_rgb(38, 41, 48),
        card_border: Color32::from_rgb(60, 64, 72),

        favorable: Color32::from_rgb(134, 239, 172),
        favorable_bg: Color32::from_rgb(20, 83, 45),
        adverse: Color32::from_rgb(252, 165, 165),
        adverse_bg: Color32::from_rgb(127, 29, 29),
        caution: Color32::from_rgb(253, 224, 71),
        caution_bg: Color32::from_rgb(113, 63, 18),
        error: Color32::from_rgb(239, 68, 68),
        bar_track: Color32::from_rgb(70, 74, 82),
    },
    compact: LayoutStyle {
        body_size: 13.0,
        heading_size: 14.0,
        row_height: 22.0,
        card_margin: 8,
        pattern_columns: 1,
        reliability_bar_width: 160.0,
    },
    tabular: LayoutStyle {
        body_size: 15.0,
        heading_size: 17.0,
        row_height: 34.0,
        card_margin: 12,
        pattern_columns: 3,
        reliability_bar_width: 64.0,
    },
    max_content_width: 1152.0,
};

impl UiConfig {
    pub fn layout_style(&self, kind: LayoutKind) -> &LayoutStyle {
        match kind {
            LayoutKind::Compact => &self.compact,
            LayoutKind::Tabular => &self.tabular,
        }
    }

    /// Frame for the Top Toolbar (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.top_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::symmetric(12, 8),
            ..Default::default()
        }
    }

    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(12),
            ..Default::default()
        }
    }

    /// Rounded card used for impacts, CPI sectors and pattern entries.
    pub fn card_frame(&self, style: &LayoutStyle) -> Frame {
        Frame {
            fill: self.colors.card,
            stroke: Stroke::new(1.0, self.colors.card_border),
            inner_margin: Margin::same(style.card_margin),
            corner_radius: CornerRadius::same(6),
            ..Default::default()
        }
    }
}
