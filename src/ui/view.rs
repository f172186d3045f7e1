//! Frame-independent description of what the dashboard shows.
//!
//! Everything here is a pure function of the app state and the selection.
//! The egui painter only decides how (and which layout) to draw.

use strum_macros::{Display, EnumIter};

use crate::{
    app::{AppState, Selection},
    config::{DASHBOARD, INSTITUTIONAL_PATTERNS},
    models::{
        CategoryRecord, ContributionTier, CpiImpact, Direction, InvestorClass, RegulatoryDataset,
        ReliabilityTier,
    },
    ui::UI_TEXT,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// The two impact layouts. Both are always built; the painter draws one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum LayoutKind {
    /// Card per impact, for narrow viewports.
    #[strum(to_string = "mobile-view")]
    Compact,
    /// Full table, for wide viewports.
    #[strum(to_string = "desktop-view")]
    Tabular,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 2] = [LayoutKind::Compact, LayoutKind::Tabular];

    /// Stable identifier of this layout in the render output.
    pub const fn test_id(self) -> &'static str {
        match self {
            Self::Compact => "mobile-view",
            Self::Tabular => "desktop-view",
        }
    }

    /// Layout that should be painted for a viewport of `width` points.
    pub fn for_width(width: f32) -> Self {
        let kind = if width < DASHBOARD.compact_breakpoint_px {
            Self::Compact
        } else {
            Self::Tabular
        };
        #[cfg(debug_assertions)]
        if DF.log_layout {
            log::info!("Viewport {:.0}pt -> {}", width, kind);
        }
        kind
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Loading { label: String },
    Failed { message: String, retry_label: String },
    /// Loaded, but the document has no categories at all.
    Empty { label: String },
    Dashboard(DashboardView),
}

impl Screen {
    pub fn build(state: &AppState, selection: &Selection) -> Self {
        match state {
            AppState::Loading(_) => Screen::Loading {
                label: UI_TEXT.loading.to_string(),
            },
            AppState::Failed(failed) => Screen::Failed {
                message: format!("{} {}", UI_TEXT.error_prefix, failed.message),
                retry_label: UI_TEXT.retry.to_string(),
            },
            AppState::Loaded(loaded) if loaded.dataset.is_empty() => Screen::Empty {
                label: UI_TEXT.no_data.to_string(),
            },
            AppState::Loaded(loaded) => {
                Screen::Dashboard(DashboardView::build(&loaded.dataset, selection))
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Screen::Loading { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Screen::Failed { .. })
    }

    pub fn dashboard(&self) -> Option<&DashboardView> {
        match self {
            Screen::Dashboard(view) => Some(view),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleView {
    pub label: String,
    pub active: bool,
}

impl ToggleView {
    fn new(subject: &str, active: bool) -> Self {
        let verb = if active { UI_TEXT.hide } else { UI_TEXT.show };
        Self {
            label: format!("{} {}", verb, subject),
            active,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorView {
    pub hint: String,
    /// Current `selectedCategory`, even if the document lacks it.
    pub value: String,
    pub options: Vec<SelectorOption>,
}

impl SelectorView {
    /// Title of the selected option, if it exists.
    pub fn selected_label(&self) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.key == self.value)
            .map(|o| o.label.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactRow {
    pub index: String,
    pub movement: String,
    pub direction: Direction,
    pub timing: String,
    pub volume: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectorRow {
    pub name: String,
    pub range: String,
    pub drivers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpiPanel {
    pub sectors: Vec<SectorRow>,
    pub net_contribution: String,
    pub net_tier: ContributionTier,
    pub duration: String,
}

impl CpiPanel {
    fn build(cpi: &CpiImpact) -> Self {
        Self {
            sectors: cpi
                .primary_sectors
                .iter()
                .map(|s| SectorRow {
                    name: s.name.clone(),
                    range: s.range.to_string(),
                    drivers: s.drivers.clone(),
                })
                .collect(),
            net_contribution: cpi.net_contribution.to_string(),
            net_tier: cpi.contribution_tier(),
            duration: cpi.duration.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternRow {
    pub class: InvestorClass,
    pub signal_type: String,
    pub timing: String,
    pub volume_threshold: String,
    pub reliability: f64,
    pub reliability_label: String,
    pub tier: ReliabilityTier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstitutionalPanel {
    pub rows: Vec<PatternRow>,
}

impl InstitutionalPanel {
    fn build() -> Self {
        Self {
            rows: INSTITUTIONAL_PATTERNS
                .iter()
                .map(|p| PatternRow {
                    class: p.class,
                    signal_type: p.signal_type.to_string(),
                    timing: p.timing.to_string(),
                    volume_threshold: p.volume_threshold.to_string(),
                    reliability: p.reliability,
                    reliability_label: p.reliability_label(),
                    tier: p.tier(),
                })
                .collect(),
        }
    }
}

/// Impacts plus optional panels, for one layout kind.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutView {
    pub kind: LayoutKind,
    pub impacts: Vec<ImpactRow>,
    pub cpi: Option<CpiPanel>,
    pub institutional: Option<InstitutionalPanel>,
}

impl LayoutView {
    /// The single data-to-layout mapping shared by both layout kinds.
    /// A missing category yields no impacts and no CPI panel.
    pub fn build(kind: LayoutKind, record: Option<&CategoryRecord>, selection: &Selection) -> Self {
        let impacts = record
            .map(|r| {
                r.impacts
                    .iter()
                    .map(|i| ImpactRow {
                        index: i.index.clone(),
                        movement: i.movement.to_string(),
                        direction: i.direction,
                        timing: i.timing.clone(),
                        volume: i.volume.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let cpi = if selection.show_cpi() {
            record
                .and_then(|r| r.cpi_impacts.as_ref())
                .map(CpiPanel::build)
        } else {
            None
        };

        let institutional = selection
            .show_institutional()
            .then(InstitutionalPanel::build);

        Self {
            kind,
            impacts,
            cpi,
            institutional,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub heading: String,
    pub institutional_toggle: ToggleView,
    pub cpi_toggle: ToggleView,
    pub selector: SelectorView,
    pub layouts: Vec<LayoutView>,
}

impl DashboardView {
    pub fn build(dataset: &RegulatoryDataset, selection: &Selection) -> Self {
        let record = dataset.get(selection.category());
        Self {
            heading: UI_TEXT.heading.to_string(),
            institutional_toggle: ToggleView::new(
                UI_TEXT.institutional_subject,
                selection.show_institutional(),
            ),
            cpi_toggle: ToggleView::new(UI_TEXT.cpi_subject, selection.show_cpi()),
            selector: SelectorView {
                hint: UI_TEXT.selector_hint.to_string(),
                value: selection.category().to_string(),
                options: dataset
                    .iter()
                    .map(|(key, record)| SelectorOption {
                        key: key.to_string(),
                        label: record.title.clone(),
                    })
                    .collect(),
            },
            layouts: LayoutKind::ALL
                .iter()
                .map(|&kind| LayoutView::build(kind, record, selection))
                .collect(),
        }
    }

    /// Locate one layout variant by its identifier (`"mobile-view"` / `"desktop-view"`).
    pub fn layout_by_id(&self, test_id: &str) -> Option<&LayoutView> {
        self.layouts.iter().find(|l| l.kind.test_id() == test_id)
    }

    pub fn layout(&self, kind: LayoutKind) -> Option<&LayoutView> {
        self.layouts.iter().find(|l| l.kind == kind)
    }
}
