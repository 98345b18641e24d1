//! Background snapshot loader.
//!
//! Fetching happens on its own thread; results reach the UI thread over a
//! channel, so the view state is only ever touched by the render loop.

use std::time::Duration;

use statim_core::retry::{fetch_with_retry, RetryPolicy};
use statim_core::{DashboardSnapshot, FetchError, SnapshotSource};

pub type FetchResult = Result<DashboardSnapshot, FetchError>;

pub struct Loader {
    results: flume::Receiver<FetchResult>,
    requests: flume::Sender<()>,
}

impl Loader {
    /// Start the loader thread. It fetches once immediately, then once per
    /// [`Loader::reload`] call.
    ///
    /// The thread exits when the `Loader` is dropped: a finished fetch whose
    /// receiver is gone is discarded.
    pub fn spawn(source: Box<dyn SnapshotSource>, policy: RetryPolicy) -> Self {
        Self::spawn_with_sleep(source, policy, std::thread::sleep)
    }

    pub fn spawn_with_sleep<F>(
        source: Box<dyn SnapshotSource>,
        policy: RetryPolicy,
        sleep: F,
    ) -> Self
    where
        F: FnMut(Duration) + Send + 'static,
    {
        let (result_tx, results) = flume::unbounded::<FetchResult>();
        let (requests, request_rx) = flume::unbounded::<()>();
        let mut sleep = sleep;

        std::thread::spawn(move || loop {
            tracing::debug!(source = %source.describe(), "fetching dashboard snapshot");
            let outcome = fetch_with_retry(&source, &policy, &mut sleep);
            if result_tx.send(outcome).is_err() {
                tracing::debug!("dashboard view closed, dropping fetch result");
                break;
            }
            if request_rx.recv().is_err() {
                break;
            }
            // Coalesce reload presses that queued up during the fetch.
            while request_rx.try_recv().is_ok() {}
        });

        Self { results, requests }
    }

    /// Ask for another fetch. Returns false if the loader thread is gone.
    pub fn reload(&self) -> bool {
        self.requests.send(()).is_ok()
    }

    /// All results that have arrived since the last call.
    pub fn drain(&self) -> Vec<FetchResult> {
        self.results.try_iter().collect()
    }

    /// Block until the next result arrives or `timeout` elapses.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<FetchResult> {
        self.results.recv_timeout(timeout).ok()
    }
}
