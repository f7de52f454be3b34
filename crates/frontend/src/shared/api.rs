//! Fetch glue for the REST backend.
//!
//! The backend is a plain read-only collection server: three endpoints,
//! each returning a JSON array of records with uncontrolled field
//! names. Records are handed to the caller as raw `serde_json::Value`s;
//! normalization happens in the `contracts` crate.

use contracts::domain::fields::coerce_array;
use gloo_net::http::Request;
use serde_json::Value;

/// Get the base URL for API requests.
///
/// Constructed from the current window location; the backend listens on
/// port 3001 of the same host.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3001", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Fetch one backend collection as raw records.
///
/// Transport failures and non-success statuses surface as
/// human-readable messages; a body that is not a JSON array degrades to
/// an empty list rather than failing the view.
pub async fn fetch_records(path: &str) -> Result<Vec<Value>, String> {
    let response = Request::get(&api_url(path))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let payload: Value = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(coerce_array(payload))
}

pub async fn fetch_sales() -> Result<Vec<Value>, String> {
    fetch_records("/vendas").await
}

pub async fn fetch_customers() -> Result<Vec<Value>, String> {
    fetch_records("/clientes").await
}

pub async fn fetch_products() -> Result<Vec<Value>, String> {
    fetch_records("/produtos").await
}
