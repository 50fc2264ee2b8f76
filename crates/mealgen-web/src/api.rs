//! Backend API client
//!
//! Thin gloo-net wrappers around the two backend endpoints. Failures come
//! back as [`ApiError`] so callers pick the user-facing message with the
//! helpers in `mealgen_core::api`.

use gloo_net::http::Request;
use mealgen_core::api::{classify_http_failure, ApiError, ANALYZE_PANTRY_PATH, GENERATE_MEAL_PATH};
use mealgen_core::models::{GenerateMealRequest, MealResponse, PantryAnalysis};
use wasm_bindgen::JsValue;

/// Request a generated recipe for the given form contents.
pub async fn generate_meal(
    base_url: &str,
    request: &GenerateMealRequest,
) -> Result<MealResponse, ApiError> {
    let result = send_generate(base_url, request).await;
    if let Err(error) = &result {
        log::error!("Recipe generation failed: {error}");
    }
    result
}

async fn send_generate(
    base_url: &str,
    request: &GenerateMealRequest,
) -> Result<MealResponse, ApiError> {
    let url = format!("{base_url}{GENERATE_MEAL_PATH}");
    let response = Request::post(&url)
        .json(request)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let raw = response.text().await.unwrap_or_default();
        return Err(classify_http_failure(status, &raw));
    }

    response
        .json::<MealResponse>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

/// Upload a pantry photo for ingredient analysis.
pub async fn analyze_pantry(
    base_url: &str,
    file: &web_sys::File,
) -> Result<PantryAnalysis, ApiError> {
    let result = send_pantry_file(base_url, file).await;
    if let Err(ApiError::Transport(message)) = &result {
        // HTTP failures are logged with the response body in send_pantry_file.
        log::error!("Pantry upload failed: {message}");
    }
    result
}

async fn send_pantry_file(
    base_url: &str,
    file: &web_sys::File,
) -> Result<PantryAnalysis, ApiError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    // File derefs to Blob; the backend sees the original filename.
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(js_error)?;

    let url = format!("{base_url}{ANALYZE_PANTRY_PATH}");
    // No explicit content type: the browser supplies the multipart boundary.
    let response = Request::post(&url)
        .body(form)
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let raw = response.text().await.unwrap_or_default();
        let error = classify_http_failure(status, &raw);
        log::error!("Pantry analysis failed: {error} (status {status}, body {raw:?})");
        return Err(error);
    }

    response
        .json::<PantryAnalysis>()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Transport(format!("{value:?}"))
}

/// Surface a failure to the user with a browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
