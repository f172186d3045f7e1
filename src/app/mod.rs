mod root;
mod session;
mod state;

pub use state::{AppState, FailedState, LoadedState, LoadingState, Selection, UiEvent};

pub use root::App;
pub use session::Session;
