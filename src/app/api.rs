//! Client-side JSON helpers and the payload types shared between the pages
//! and the `/api` handlers.
//!
//! On wasm these helpers go through the browser `fetch`; during server-side
//! rendering they report an error so `use_resource` callers fall back to
//! `None` and load after hydration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Human-readable request failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct FetchError(pub String);

// ---------------------------------------------------------------------------
// Shared payload types
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Established session handed to the browser after sign-in/sign-up.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub access_token: String,
    pub user_id: String,
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecoverRequest {
    pub email: String,
}

/// Recovery-token exchange. The refresh credential is optional because the
/// recovery grant only carries a short-lived access token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionExchange {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PasswordUpdate {
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub venue: String,
    pub city: String,
    pub category: String,
    pub starts_at: DateTime<Utc>,
    pub price_cents: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub event_id: String,
    pub quantity: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub reference: String,
    pub event_id: String,
    pub quantity: u32,
    pub total_cents: i64,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// System toggles, stored as a single row the admin form overwrites whole.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    pub id: String,
    pub booking_enabled: bool,
    pub maintenance_mode: bool,
    #[serde(default)]
    pub maintenance_message: Option<String>,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            id: "default".to_string(),
            booking_enabled: true,
            maintenance_mode: false,
            maintenance_message: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerSlide {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    pub image_url: String,
    #[serde(default)]
    pub link_url: Option<String>,
    pub position: i32,
    pub active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NotificationTemplate {
    pub id: String,
    pub name: String,
    pub subject: String,
    pub body: String,
}

/// Error body shape returned by the `/api` handlers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// ---------------------------------------------------------------------------
// Browser fetch helpers
// ---------------------------------------------------------------------------

pub async fn fetch_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    request(path, "GET", None, None).await
}

pub async fn fetch_json_auth<T: serde::de::DeserializeOwned>(
    path: &str,
    token: &str,
) -> Result<T, FetchError> {
    request(path, "GET", Some(token), None).await
}

pub async fn post_json<T: serde::de::DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, FetchError> {
    request(path, "POST", None, Some(encode(body)?)).await
}

pub async fn post_json_auth<T: serde::de::DeserializeOwned, B: Serialize>(
    path: &str,
    token: &str,
    body: &B,
) -> Result<T, FetchError> {
    request(path, "POST", Some(token), Some(encode(body)?)).await
}

pub async fn post_json_no_response<B: Serialize>(path: &str, body: &B) -> Result<(), FetchError> {
    let _: serde_json::Value = request(path, "POST", None, Some(encode(body)?)).await?;
    Ok(())
}

pub async fn put_json_no_response<B: Serialize>(
    path: &str,
    token: Option<&str>,
    body: &B,
) -> Result<(), FetchError> {
    let _: serde_json::Value = request(path, "PUT", token, Some(encode(body)?)).await?;
    Ok(())
}

fn encode<B: Serialize>(body: &B) -> Result<String, FetchError> {
    serde_json::to_string(body).map_err(|err| FetchError(err.to_string()))
}

#[cfg(target_arch = "wasm32")]
async fn request<T: serde::de::DeserializeOwned>(
    path: &str,
    method: &str,
    bearer: Option<&str>,
    body: Option<String>,
) -> Result<T, FetchError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let js = |err: wasm_bindgen::JsValue| {
        FetchError(err.as_string().unwrap_or_else(|| "request failed".to_string()))
    };

    let window = web_sys::window().ok_or_else(|| FetchError("no window".to_string()))?;

    let opts = web_sys::RequestInit::new();
    opts.set_method(method);
    if let Some(ref body) = body {
        opts.set_body(&wasm_bindgen::JsValue::from_str(body));
    }

    let request = web_sys::Request::new_with_str_and_init(path, &opts).map_err(js)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js)?;
    if let Some(token) = bearer {
        request
            .headers()
            .set("Authorization", &format!("Bearer {token}"))
            .map_err(js)?;
    }

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js)?;
    let response: web_sys::Response = response.dyn_into().map_err(js)?;

    let text = JsFuture::from(response.text().map_err(js)?).await.map_err(js)?;
    let text = text.as_string().unwrap_or_default();

    if !response.ok() {
        let message = serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error)
            .unwrap_or_else(|_| format!("request failed: {}", response.status()));
        return Err(FetchError(message));
    }

    serde_json::from_str(&text).map_err(|err| FetchError(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn request<T: serde::de::DeserializeOwned>(
    _path: &str,
    _method: &str,
    _bearer: Option<&str>,
    _body: Option<String>,
) -> Result<T, FetchError> {
    // Same-origin requests only make sense in the browser; during SSR the
    // resources resolve after hydration.
    Err(FetchError("requests run in the browser".to_string()))
}
