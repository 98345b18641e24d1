use leptos::prelude::*;

/// Pulsing skeleton shown until the snapshot arrives.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="dashboard-loading" role="status" aria-live="polite">
            <div class="skeleton-pulse">
                <div class="skeleton skeleton-circle"></div>
                <div class="skeleton skeleton-bar"></div>
            </div>
            <span class="sr-only">"Loading dashboard"</span>
        </div>
    }
}
