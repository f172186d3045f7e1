// src/app/state.rs

use std::sync::Arc;

use crate::{config::DASHBOARD, models::RegulatoryDataset};

/// Fetch lifecycle of one mount: Loading -> Failed | Loaded.
pub enum AppState {
    Loading(LoadingState),
    Failed(FailedState),
    Loaded(LoadedState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Loading(LoadingState::default())
    }
}

#[derive(Clone, Default)]
pub struct LoadingState;

#[derive(Clone, Debug)]
pub struct FailedState {
    pub message: String,
}

#[derive(Clone)]
pub struct LoadedState {
    pub dataset: Arc<RegulatoryDataset>,
}

/// Local UI choices. No cross-validation between the three fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    category: String,
    show_institutional: bool,
    show_cpi: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            category: DASHBOARD.default_category.to_string(),
            show_institutional: false,
            show_cpi: false,
        }
    }
}

impl Selection {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn show_institutional(&self) -> bool {
        self.show_institutional
    }

    pub fn show_cpi(&self) -> bool {
        self.show_cpi
    }

    pub(crate) fn select_category(&mut self, key: impl Into<String>) {
        self.category = key.into();
    }

    pub(crate) fn toggle_institutional(&mut self) {
        self.show_institutional = !self.show_institutional;
    }

    pub(crate) fn toggle_cpi(&mut self) {
        self.show_cpi = !self.show_cpi;
    }
}

/// User interactions coming back out of a rendered frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    SelectCategory(String),
    ToggleInstitutional,
    ToggleCpi,
    /// Discard everything and start over (the only recovery from a failed fetch).
    Reload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_defaults() {
        let selection = Selection::default();
        assert_eq!(selection.category(), "immigrationRestrictions");
        assert!(!selection.show_institutional());
        assert!(!selection.show_cpi());
    }

    #[test]
    fn toggles_are_independent() {
        let mut selection = Selection::default();
        selection.toggle_cpi();
        assert!(selection.show_cpi());
        assert!(!selection.show_institutional());
        selection.toggle_institutional();
        selection.toggle_cpi();
        assert!(!selection.show_cpi());
        assert!(selection.show_institutional());
    }

    #[test]
    fn app_state_starts_loading() {
        assert!(matches!(AppState::default(), AppState::Loading(_)));
    }
}
