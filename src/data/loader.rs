use std::future::Future;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use futures::future::{AbortHandle, Abortable};

use crate::data::{DatasetSource, FetchError};
use crate::models::RegulatoryDataset;

#[cfg(debug_assertions)]
use crate::{
    config::DF,
    utils::{AppInstant, format_elapsed_ms},
};

#[cfg(not(target_arch = "wasm32"))]
use std::thread;

pub type FetchOutcome = Result<RegulatoryDataset, FetchError>;

/// One in-flight retrieval of the dataset document.
///
/// The request runs off the UI loop and its outcome is picked up with [`poll`].
/// Dropping the loader aborts the request; a late result is discarded.
///
/// [`poll`]: DatasetLoader::poll
pub struct DatasetLoader {
    rx: Receiver<FetchOutcome>,
    abort: AbortHandle,
    #[cfg(debug_assertions)]
    started: AppInstant,
    origin: String,
}

impl DatasetLoader {
    pub fn spawn(source: Arc<dyn DatasetSource>) -> Self {
        let (tx, rx) = mpsc::channel();
        let (abort, registration) = AbortHandle::new_pair();
        let origin = source.describe();

        #[cfg(debug_assertions)]
        if DF.log_fetch {
            log::info!("Fetching dataset from {}", origin);
        }

        let request = Abortable::new(async move { source.fetch().await }, registration);
        let abandoned_origin = origin.clone();
        spawn_detached(async move {
            match request.await {
                Ok(outcome) => {
                    // Receiver may already be gone; nothing to do then.
                    let _ = tx.send(outcome);
                }
                Err(_aborted) => {
                    log::debug!("Dataset request to {} aborted", abandoned_origin);
                }
            }
        });

        Self {
            rx,
            abort,
            #[cfg(debug_assertions)]
            started: AppInstant::now(),
            origin,
        }
    }

    /// `None` while the request is still pending.
    pub fn poll(&self) -> Option<FetchOutcome> {
        let outcome = match self.rx.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(FetchError::Abandoned),
        };

        #[cfg(debug_assertions)]
        if DF.log_fetch {
            log::info!(
                "Dataset request to {} finished in {} ({})",
                self.origin,
                format_elapsed_ms(self.started.elapsed().as_millis()),
                if outcome.is_ok() { "ok" } else { "failed" }
            );
        }

        Some(outcome)
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl Drop for DatasetLoader {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

/// NATIVE: a throwaway thread drives a single-threaded tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
fn spawn_detached<F>(job: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    let spawned = thread::Builder::new()
        .name("dataset-fetch".to_string())
        .spawn(move || {
            match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt.block_on(job),
                Err(e) => log::error!("Failed to create fetch runtime: {}", e),
            }
        });
    if let Err(e) = spawned {
        // The job (and its sender) is dropped, so the loader reports Abandoned.
        log::error!("Failed to spawn fetch thread: {}", e);
    }
}

/// WASM: the browser event loop drives the future.
#[cfg(target_arch = "wasm32")]
fn spawn_detached<F>(job: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(job);
}
