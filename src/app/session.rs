use std::sync::Arc;

use crate::{
    app::{AppState, FailedState, LoadedState, LoadingState, Selection, UiEvent},
    data::{DatasetLoader, DatasetSource},
    ui::Screen,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// One mount of the dashboard: the fetch, its outcome and the user's choices.
/// Free of any egui types so it can be driven headlessly.
pub struct Session {
    source: Arc<dyn DatasetSource>,
    loader: Option<DatasetLoader>,
    state: AppState,
    selection: Selection,
}

impl Session {
    /// Starts the single fetch for this mount.
    pub fn mount(source: Arc<dyn DatasetSource>) -> Self {
        let loader = DatasetLoader::spawn(Arc::clone(&source));
        Self {
            source,
            loader: Some(loader),
            state: AppState::Loading(LoadingState::default()),
            selection: Selection::default(),
        }
    }

    /// Tear down and mount again. The pending request (if any) is aborted.
    pub fn remount(&mut self) {
        log::info!("Reloading dashboard from {}", self.source.describe());
        *self = Self::mount(Arc::clone(&self.source));
    }

    /// Picks up the fetch outcome. Returns true when the state changed.
    pub fn poll(&mut self) -> bool {
        let Some(loader) = &self.loader else {
            return false;
        };
        let Some(outcome) = loader.poll() else {
            return false;
        };
        self.loader = None;

        self.state = match outcome {
            Ok(dataset) => AppState::Loaded(LoadedState {
                dataset: Arc::new(dataset),
            }),
            Err(err) => {
                log::error!("Error fetching data: {}", err);
                AppState::Failed(FailedState {
                    message: err.to_string(),
                })
            }
        };
        true
    }

    pub fn apply(&mut self, event: UiEvent) {
        #[cfg(debug_assertions)]
        if DF.log_selection {
            log::info!("UI event: {:?}", event);
        }

        match event {
            UiEvent::SelectCategory(key) => self.selection.select_category(key),
            UiEvent::ToggleInstitutional => self.selection.toggle_institutional(),
            UiEvent::ToggleCpi => self.selection.toggle_cpi(),
            UiEvent::Reload => self.remount(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, AppState::Loading(_))
    }

    /// What a frame would show right now.
    pub fn screen(&self) -> Screen {
        Screen::build(&self.state, &self.selection)
    }
}
