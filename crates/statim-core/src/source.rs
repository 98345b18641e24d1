//! Where snapshots come from.

use std::path::PathBuf;

use crate::error::FetchError;
use crate::snapshot::DashboardSnapshot;
use crate::view::ViewState;

/// A readable snapshot resource.
///
/// Implementations block; front-ends call them off their render thread.
pub trait SnapshotSource: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    fn fetch(&self) -> Result<DashboardSnapshot, FetchError>;
}

impl<S: SnapshotSource + ?Sized> SnapshotSource for Box<S> {
    fn describe(&self) -> String {
        (**self).describe()
    }

    fn fetch(&self) -> Result<DashboardSnapshot, FetchError> {
        (**self).fetch()
    }
}

/// Reads the snapshot document from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SnapshotSource for FileSource {
    fn describe(&self) -> String {
        format!("file://{}", self.path.display())
    }

    fn fetch(&self) -> Result<DashboardSnapshot, FetchError> {
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| FetchError::Io(format!("{}: {e}", self.path.display())))?;
        DashboardSnapshot::from_json(&text)
    }
}

/// Always yields the same outcome. Used for demos and tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    result: Result<DashboardSnapshot, FetchError>,
}

impl StaticSource {
    pub fn ok(snapshot: DashboardSnapshot) -> Self {
        Self { result: Ok(snapshot) }
    }

    pub fn failing(error: FetchError) -> Self {
        Self { result: Err(error) }
    }
}

impl SnapshotSource for StaticSource {
    fn describe(&self) -> String {
        "static".to_string()
    }

    fn fetch(&self) -> Result<DashboardSnapshot, FetchError> {
        self.result.clone()
    }
}

/// One fetch-and-apply cycle. Returns whether the view is now loaded.
pub fn load_once<S: SnapshotSource + ?Sized>(source: &S, state: &mut ViewState) -> bool {
    tracing::debug!(source = %source.describe(), "fetching dashboard snapshot");
    state.apply(source.fetch());
    !state.is_loading()
}
