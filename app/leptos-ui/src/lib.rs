use leptos::prelude::*;

pub mod api;
pub mod components;
pub mod pages;

use wasm_bindgen::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <pages::dashboard::DashboardPage />
    }
}

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
