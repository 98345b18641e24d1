use leptos::prelude::*;
use leptos::task::spawn_local;
use statim_core::{DashboardDisplay, Icon, ViewState};

use crate::api;
use crate::components::glass_card::GlassCard;
use crate::components::loading::LoadingPlaceholder;

#[component]
pub fn DashboardPage(#[prop(default = api::SNAPSHOT_PATH)] src: &'static str) -> impl IntoView {
    // Component-local: each mounted page owns its snapshot.
    let state = RwSignal::new(ViewState::new());

    // Single fetch on mount. No retry; a failure leaves the placeholder up.
    spawn_local(async move {
        let result = api::fetch_snapshot(src).await;
        if let Err(e) = &result {
            web_sys::console::error_1(&format!("dashboard fetch failed: {e}").into());
        }
        // The page may have been unmounted while the request was in flight.
        if state.try_update(|s| s.apply(result)).is_none() {
            web_sys::console::debug_1(&"dashboard unmounted, fetch result dropped".into());
        }
    });

    view! {
        {move || match state.with(|s| s.display()) {
            Some(display) => view! { <DashboardContent display=display /> }.into_any(),
            None => view! { <LoadingPlaceholder /> }.into_any(),
        }}
    }
}

#[component]
pub fn DashboardContent(display: DashboardDisplay) -> impl IntoView {
    let DashboardDisplay {
        updated_at,
        pulse_headline,
        pulse_status,
        last_heartbeat,
        token_count,
        quota_limit,
        progress_width,
        quota_caption,
        sync_headline,
        last_sync,
        journal,
        ..
    } = display;

    view! {
        <div class="dashboard">
            <div class="dashboard-inner">
                <header class="dashboard-header">
                    <div>
                        <div class="dashboard-brand">
                            <span class="dashboard-brand-mark">
                                <span class=Icon::Shield.css_class() aria-hidden="true"></span>
                            </span>
                            <span class="dashboard-brand-name">"Statim"</span>
                        </div>
                        <h1 class="dashboard-title">"System Overview"</h1>
                    </div>
                    <div class="dashboard-updated">
                        <p class="dashboard-updated-label">"LATEST UPDATE"</p>
                        <p class="dashboard-updated-value">{updated_at}</p>
                    </div>
                </header>

                <div class="dashboard-grid">
                    <GlassCard title="Pulse" icon=Icon::Activity>
                        <div class="card-row">
                            <span class="pulse-dot"></span>
                            <span class="card-headline">{pulse_headline}</span>
                        </div>
                        <p class="card-status">{pulse_status}</p>
                        <p class="card-detail">"Last heartbeat: "{last_heartbeat}</p>
                    </GlassCard>

                    <GlassCard title="Token Usage" icon=Icon::Cpu>
                        <div class="card-row card-row-split">
                            <span class="card-headline token-count">{token_count}</span>
                            <span class="token-limit">{quota_limit}</span>
                        </div>
                        <div class="progress-track">
                            <div
                                class="progress-fill"
                                style=format!("width: {progress_width}")
                            ></div>
                        </div>
                        <p class="card-caption">{quota_caption}</p>
                    </GlassCard>

                    <GlassCard title="Notion Sync" icon=Icon::Refresh>
                        <div class="card-row">
                            <span class="sync-bolt" aria-hidden="true">"\u{26A1}"</span>
                            <span class="card-headline">{sync_headline}</span>
                        </div>
                        <p class="card-detail">"Last sync: "{last_sync}</p>
                    </GlassCard>
                </div>

                <GlassCard title="Recent Memory Logs" icon=Icon::FileText class="journal-card">
                    <ol class="journal">
                        {journal
                            .into_iter()
                            .map(|entry| view! {
                                <li class="journal-entry">
                                    <span class="journal-bullet" aria-hidden="true"></span>
                                    <p class="journal-text">{entry}</p>
                                </li>
                            })
                            .collect_view()}
                    </ol>
                </GlassCard>

                <footer class="dashboard-footer">
                    <p>"Statim Intelligence System \u{2022} Encrypted & Secure"</p>
                </footer>
            </div>
        </div>
    }
}
