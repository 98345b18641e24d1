use statim_core::{DashboardSnapshot, FetchError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

/// Static resource the dashboard reads on mount.
pub const SNAPSHOT_PATH: &str = "/public_dashboard.json";

/// GET `url` and parse the body as a snapshot.
pub async fn fetch_snapshot(url: &str) -> Result<DashboardSnapshot, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");

    let request = Request::new_with_str_and_init(url, &opts).map_err(network)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(network)?;

    let window =
        web_sys::window().ok_or_else(|| FetchError::Network("no global window".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network)?;

    let resp: Response = resp_value.dyn_into().map_err(network)?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    let body = JsFuture::from(resp.text().map_err(network)?)
        .await
        .map_err(network)?;
    let text = body
        .as_string()
        .ok_or_else(|| FetchError::Parse("response body is not text".into()))?;

    DashboardSnapshot::from_json(&text)
}

fn network(err: JsValue) -> FetchError {
    FetchError::Network(format!("{:?}", err))
}
