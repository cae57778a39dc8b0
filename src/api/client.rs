//! HTTP API Client
//!
//! Functions for communicating with the Wayfarer REST API.

use gloo_net::http::Request;

use crate::model::{Expense, Trip, TripSummary};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("wayfarer_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Get the map SDK key: local storage override, else the key baked in at
/// build time via `WAYFARER_MAP_KEY`.
pub fn get_map_key() -> String {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(key)) = storage.get_item("wayfarer_map_key") {
                return key;
            }
        }
    }
    option_env!("WAYFARER_MAP_KEY").unwrap_or("").to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct PlanResponse {
    pub trip_id: String,
}

/// Error body in the backend's shape
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub detail: String,
}

// ============ API Functions ============

/// Fetch all trip summaries
pub async fn fetch_trips() -> Result<Vec<TripSummary>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/trips", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Failed to load trips".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit a prompt and get back the id of the generated trip
pub async fn plan_trip(prompt: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct PlanRequest {
        prompt: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/trips/plan", api_base))
        .json(&PlanRequest { prompt: prompt.to_string() })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Trip generation failed, please retry".to_string() });
        return Err(error.detail);
    }

    let result: PlanResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(result.trip_id)
}

/// Fetch one full trip
pub async fn fetch_trip(trip_id: &str) -> Result<Trip, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/trips/{}", api_base, trip_id))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Failed to load trip".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit a free-text expense; amount and category are inferred server-side
pub async fn log_expense(trip_id: &str, description: &str) -> Result<Expense, String> {
    #[derive(serde::Serialize)]
    struct ExpenseRequest {
        trip_id: String,
        description: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/trips/expense", api_base))
        .json(&ExpenseRequest {
            trip_id: trip_id.to_string(),
            description: description.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { detail: "Failed to record expense".to_string() });
        return Err(error.detail);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}
