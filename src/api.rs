//! HTTP bridge to the incident backend, over the browser fetch API.

use crate::dto::{IncidentRecord, NewIncident};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

const DEFAULT_BASE_URL: &str = "http://localhost:8080";

fn base_url() -> &'static str {
    option_env!("INCIDENT_API_URL").unwrap_or(DEFAULT_BASE_URL)
}

async fn send(method: &str, path: &str, body: Option<String>) -> Result<Response, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);

    if let Some(payload) = body {
        let headers = Headers::new().map_err(|e| format!("headers: {e:?}"))?;
        headers
            .append("Content-Type", "application/json")
            .map_err(|e| format!("headers: {e:?}"))?;
        opts.set_headers(&headers);
        opts.set_body(&JsValue::from_str(&payload));
    }

    let url = format!("{}{path}", base_url());
    let request =
        Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("request: {e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "window not available".to_string())?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch failed: {e:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| "unexpected fetch result".to_string())?;

    if !response.ok() {
        return Err(format!("backend returned {}", response.status()));
    }
    Ok(response)
}

async fn get_json<R>(path: &str) -> Result<R, String>
where
    R: DeserializeOwned,
{
    let response = send("GET", path, None).await?;
    let text = JsFuture::from(response.text().map_err(|e| format!("body: {e:?}"))?)
        .await
        .map_err(|e| format!("body read: {e:?}"))?;
    let text = text
        .as_string()
        .ok_or_else(|| "non-text body".to_string())?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

async fn post_json<A>(path: &str, payload: &A) -> Result<(), String>
where
    A: Serialize,
{
    let body = serde_json::to_string(payload).map_err(|e| e.to_string())?;
    send("POST", path, Some(body)).await.map(|_| ())
}

pub async fn list_incidents() -> Result<Vec<IncidentRecord>, String> {
    get_json("/investigacoes").await
}

/// The response body is unused beyond the success check; the caller refetches
/// the full list instead of patching it.
pub async fn create_incident(incident: &NewIncident) -> Result<(), String> {
    post_json("/investigacoes", incident).await
}
