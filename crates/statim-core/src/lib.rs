//! Core of the Statim dashboard.
//!
//! Holds everything the front-ends share:
//! - **Snapshot**: the JSON document published by the data source
//! - **Render / Display**: formatting rules and the derived display strings
//! - **View**: the `Loading` / `Loaded` lifecycle
//! - **Source / Retry**: fetching snapshots, optionally with bounded retry
//! - **Config**: `~/.statim/config.toml`

pub mod card;
pub mod config;
pub mod display;
pub mod error;
pub mod render;
pub mod retry;
pub mod snapshot;
pub mod source;
pub mod view;

pub use card::{CardConfig, Icon};
pub use display::DashboardDisplay;
pub use error::FetchError;
pub use snapshot::DashboardSnapshot;
pub use source::{load_once, FileSource, SnapshotSource, StaticSource};
pub use view::ViewState;
