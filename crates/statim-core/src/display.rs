//! Display model: every string the dashboard shows, derived from one snapshot.

use chrono::{Local, TimeZone};
use serde::Serialize;

use crate::render::{
    format_percentage, format_quota_limit, format_time_of_day_in, format_token_count,
    progress_width,
};
use crate::snapshot::DashboardSnapshot;

/// Headline of the pulse card. The status field is display-only and never
/// changes this.
pub const PULSE_HEADLINE: &str = "Active";
/// Headline of the sync card, independent of `is_active`.
pub const SYNC_HEADLINE: &str = "Synced";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardDisplay {
    pub updated_at: String,
    pub pulse_headline: String,
    pub pulse_status: String,
    pub last_heartbeat: String,
    pub token_count: String,
    pub quota_limit: String,
    /// Raw percentage, used to size terminal gauges.
    pub percentage: f64,
    pub progress_width: String,
    pub quota_caption: String,
    pub sync_headline: String,
    pub last_sync: String,
    pub journal: Vec<String>,
}

impl DashboardDisplay {
    pub fn from_snapshot(snapshot: &DashboardSnapshot) -> Self {
        Self::from_snapshot_in(snapshot, &Local)
    }

    pub fn from_snapshot_in<Tz>(snapshot: &DashboardSnapshot, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let usage = &snapshot.token_usage;
        Self {
            updated_at: format_time_of_day_in(&snapshot.updated_at, tz),
            pulse_headline: PULSE_HEADLINE.to_string(),
            pulse_status: snapshot.pulse.status.clone(),
            last_heartbeat: format_time_of_day_in(&snapshot.pulse.last_heartbeat, tz),
            token_count: format_token_count(usage.current_usage),
            quota_limit: format!("/ {} limit", format_quota_limit(usage.daily_limit)),
            percentage: usage.percentage,
            progress_width: progress_width(usage.percentage),
            quota_caption: format!(
                "{}% of daily quota used",
                format_percentage(usage.percentage)
            ),
            sync_headline: SYNC_HEADLINE.to_string(),
            last_sync: format_time_of_day_in(&snapshot.active_state.notion_sync, tz),
            journal: snapshot.journal.clone(),
        }
    }
}
