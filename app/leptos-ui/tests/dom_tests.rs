//! Browser-only rendering checks. Run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use leptos::prelude::*;
use statim_core::{DashboardDisplay, DashboardSnapshot};
use statim_web::components::loading::LoadingPlaceholder;
use statim_web::pages::dashboard::{DashboardContent, DashboardPage};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> web_sys::HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div.unchecked_into()
}

fn display(journal: &[&str]) -> DashboardDisplay {
    let mut snap = DashboardSnapshot::default();
    snap.token_usage.current_usage = 42_500;
    snap.token_usage.percentage = 37.0;
    snap.journal = journal.iter().map(|s| s.to_string()).collect();
    DashboardDisplay::from_snapshot(&snap)
}

#[wasm_bindgen_test]
fn content_renders_cards_and_journal() {
    let parent = container();
    let d = display(&["a", "b", "c"]);
    let handle = leptos::mount::mount_to(parent.clone(), move || {
        view! { <DashboardContent display=d /> }
    });

    let text = parent.text_content().unwrap_or_default();
    assert!(text.contains("42k"));
    assert!(text.contains("System Overview"));

    let fill = parent.query_selector(".progress-fill").unwrap().unwrap();
    assert_eq!(fill.get_attribute("style").as_deref(), Some("width: 37%"));

    let entries = parent.query_selector_all(".journal-entry").unwrap();
    assert_eq!(entries.length(), 3);
    let texts: Vec<String> = (0..entries.length())
        .filter_map(|i| entries.item(i))
        .filter_map(|n| n.text_content())
        .collect();
    assert_eq!(texts, vec!["a", "b", "c"]);

    drop(handle);
}

#[wasm_bindgen_test]
fn placeholder_renders_skeleton() {
    let parent = container();
    let handle = leptos::mount::mount_to(parent.clone(), || view! { <LoadingPlaceholder /> });
    assert!(parent.query_selector(".dashboard-loading").unwrap().is_some());
    drop(handle);
}

#[wasm_bindgen_test]
fn page_starts_in_loading_state() {
    let parent = container();
    let handle = leptos::mount::mount_to(parent.clone(), || {
        view! { <DashboardPage src="/statim-test-missing.json" /> }
    });
    assert!(parent.query_selector(".dashboard-loading").unwrap().is_some());
    assert!(parent.query_selector(".dashboard").unwrap().is_none());
    drop(handle);
}
