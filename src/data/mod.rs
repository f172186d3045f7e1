mod error;
mod loader;
mod source;

pub use {
    error::FetchError,
    loader::{DatasetLoader, FetchOutcome},
    source::{DatasetSource, HttpSource, decode_dataset, source_for},
};

#[cfg(not(target_arch = "wasm32"))]
pub use source::FileSource;
