//! HTTP API handlers
//!
//! Same-origin endpoints the browser calls. Each handler is a thin
//! translation layer: parse the request, call the hosted backend with the
//! caller's bearer token, map the result back to JSON. No session state is
//! held here; the access token in the Authorization header is the session.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use rand::Rng;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::app::api::{
    BannerSlide, Booking, BookingRequest, Credentials, ErrorBody, EventSummary,
    NotificationTemplate, PasswordUpdate, Profile, RecoverRequest, SessionExchange, SessionInfo,
    SiteSettings,
};
use crate::backend::{AuthClient, BackendError, RestClient};
use crate::backend::auth::UserUpdate;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthClient>,
    pub rest: Arc<RestClient>,
    pub public_url: String,
    pub started: Instant,
}

impl AppState {
    pub fn new(auth: AuthClient, rest: RestClient, public_url: &str) -> Self {
        Self {
            auth: Arc::new(auth),
            rest: Arc::new(rest),
            public_url: public_url.trim_end_matches('/').to_string(),
            started: Instant::now(),
        }
    }
}

/// API failure rendered as `{"error": "..."}` with a matching status code.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    fn unauthorized(message: &str) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    fn not_found(message: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }
}

impl From<BackendError> for ApiError {
    fn from(err: BackendError) -> Self {
        let status =
            StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, message = %self.message, "api error");
        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

/// Extract the bearer token from the Authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| ApiError::unauthorized("Missing bearer token"))
}

/// Booking references are short, unambiguous, and shown on tickets, so the
/// alphabet skips 0/O and 1/I.
const REFERENCE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const REFERENCE_LEN: usize = 6;

fn booking_reference<R: Rng>(rng: &mut R) -> String {
    let suffix: String = (0..REFERENCE_LEN)
        .map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
        .collect();
    format!("MQ-{suffix}")
}

fn generated_id<R: Rng>(rng: &mut R, prefix: &str) -> String {
    let suffix: String = (0..10)
        .map(|_| REFERENCE_ALPHABET[rng.gen_range(0..REFERENCE_ALPHABET.len())] as char)
        .collect();
    format!("{prefix}-{}", suffix.to_lowercase())
}

/// Build the `/api` router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_handler))
        .route("/auth/signup", post(signup_handler))
        .route("/auth/signin", post(signin_handler))
        .route("/auth/recover", post(recover_handler))
        .route("/auth/session", post(session_handler))
        .route("/auth/password", put(password_handler))
        .route("/events", get(events_handler))
        .route("/events/{id}", get(event_handler))
        .route("/profile", get(profile_handler).put(profile_update_handler))
        .route("/bookings", get(bookings_handler).post(book_handler))
        .route("/settings", get(settings_handler).put(settings_update_handler))
        .route("/banner", get(banner_handler).put(banner_update_handler))
        .route(
            "/templates",
            get(templates_handler).put(templates_update_handler),
        )
        .with_state(state)
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// GET /api/status - Service health check
async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "marquee",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started.elapsed().as_secs(),
    })
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// POST /api/auth/signup
async fn signup_handler(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state
        .auth
        .sign_up(&credentials.email, &credentials.password)
        .await?;
    info!(email = %credentials.email, "account registered");
    Ok(Json(json!({ "ok": true })))
}

/// POST /api/auth/signin
async fn signin_handler(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<SessionInfo>, ApiError> {
    let session = state
        .auth
        .sign_in(&credentials.email, &credentials.password)
        .await?;
    Ok(Json(SessionInfo {
        access_token: session.access_token,
        user_id: session.user.id,
        email: session.user.email,
    }))
}

/// POST /api/auth/recover - Sends the recovery email. The emailed link
/// redirects back to this deployment's reset page.
async fn recover_handler(
    State(state): State<AppState>,
    Json(request): Json<RecoverRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let redirect_to = format!("{}/reset-password", state.public_url);
    state
        .auth
        .request_recovery(&request.email, &redirect_to)
        .await?;
    Ok(Json(json!({ "ok": true })))
}

/// POST /api/auth/session - Confirms a recovery token grants a session.
async fn session_handler(
    State(state): State<AppState>,
    Json(exchange): Json<SessionExchange>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user = state.auth.verify_session(&exchange.access_token).await?;
    info!(user_id = %user.id, "recovery session established");
    Ok(Json(json!({ "ok": true })))
}

/// PUT /api/auth/password
async fn password_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(update): Json<PasswordUpdate>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let token = bearer_token(&headers)?;
    let user_update = UserUpdate {
        password: Some(update.password),
        data: None,
    };
    let user = state.auth.update_user(token, &user_update).await?;
    info!(user_id = %user.id, "password updated");
    Ok(Json(json!({ "ok": true })))
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// GET /api/events - Upcoming events, soonest first.
async fn events_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<EventSummary>>, ApiError> {
    let events = state
        .rest
        .select("events", &[("order", "starts_at.asc")], None)
        .await?;
    Ok(Json(events))
}

/// GET /api/events/{id}
async fn event_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventSummary>, ApiError> {
    let filter = format!("eq.{id}");
    let mut events: Vec<EventSummary> = state
        .rest
        .select("events", &[("id", &filter)], None)
        .await?;
    events
        .pop()
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Event not found"))
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// GET /api/profile - The caller's profile row, empty defaults if none yet.
async fn profile_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Profile>, ApiError> {
    let token = bearer_token(&headers)?;
    let user = state.auth.verify_session(token).await?;
    let filter = format!("eq.{}", user.id);
    let mut rows: Vec<Profile> = state
        .rest
        .select("profiles", &[("id", &filter)], Some(token))
        .await?;
    let profile = rows.pop().unwrap_or(Profile {
        id: user.id,
        ..Default::default()
    });
    Ok(Json(profile))
}

/// PUT /api/profile - Whole-row write keyed by the session's user id, so a
/// caller can never address another user's row.
async fn profile_update_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(update): Json<Profile>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let token = bearer_token(&headers)?;
    let user = state.auth.verify_session(token).await?;
    let row = Profile {
        id: user.id,
        updated_at: None,
        ..update
    };
    state.rest.upsert("profiles", &[row], Some(token)).await?;
    Ok(Json(json!({ "ok": true })))
}

// ---------------------------------------------------------------------------
// Bookings
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct NewBookingRow<'a> {
    user_id: &'a str,
    event_id: &'a str,
    quantity: u32,
    total_cents: i64,
    reference: String,
    status: &'static str,
}

/// GET /api/bookings - The caller's bookings, newest first.
async fn bookings_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Booking>>, ApiError> {
    let token = bearer_token(&headers)?;
    let user = state.auth.verify_session(token).await?;
    let filter = format!("eq.{}", user.id);
    let bookings = state
        .rest
        .select(
            "bookings",
            &[("user_id", &filter), ("order", "created_at.desc")],
            Some(token),
        )
        .await?;
    Ok(Json(bookings))
}

/// POST /api/bookings - Books tickets. The total is computed here from the
/// stored price, never trusted from the client.
async fn book_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<BookingRequest>,
) -> Result<Json<Booking>, ApiError> {
    let token = bearer_token(&headers)?;
    let user = state.auth.verify_session(token).await?;

    let settings = load_settings(&state).await?;
    if !settings.booking_enabled {
        return Err(ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "Booking is currently disabled",
        ));
    }
    if request.quantity == 0 {
        return Err(ApiError::new(
            StatusCode::BAD_REQUEST,
            "Quantity must be at least 1",
        ));
    }

    let filter = format!("eq.{}", request.event_id);
    let mut events: Vec<EventSummary> = state
        .rest
        .select("events", &[("id", &filter)], None)
        .await?;
    let event = events
        .pop()
        .ok_or_else(|| ApiError::not_found("Event not found"))?;

    let row = NewBookingRow {
        user_id: &user.id,
        event_id: &event.id,
        quantity: request.quantity,
        total_cents: event.price_cents * i64::from(request.quantity),
        reference: booking_reference(&mut rand::thread_rng()),
        status: "confirmed",
    };
    let booking: Booking = state.rest.insert("bookings", &row, Some(token)).await?;
    info!(
        user_id = %user.id,
        event_id = %event.id,
        reference = %booking.reference,
        "booking created"
    );
    Ok(Json(booking))
}

// ---------------------------------------------------------------------------
// Site settings
// ---------------------------------------------------------------------------

async fn load_settings(state: &AppState) -> Result<SiteSettings, BackendError> {
    let mut rows: Vec<SiteSettings> = state
        .rest
        .select("site_settings", &[("id", "eq.default")], None)
        .await?;
    Ok(rows.pop().unwrap_or_default())
}

/// GET /api/settings
async fn settings_handler(State(state): State<AppState>) -> Result<Json<SiteSettings>, ApiError> {
    Ok(Json(load_settings(&state).await?))
}

/// PUT /api/settings
async fn settings_update_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(settings): Json<SiteSettings>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let token = bearer_token(&headers)?;
    let row = SiteSettings {
        id: "default".to_string(),
        ..settings
    };
    state
        .rest
        .upsert("site_settings", &[row], Some(token))
        .await?;
    Ok(Json(json!({ "ok": true })))
}

// ---------------------------------------------------------------------------
// Hero banner
// ---------------------------------------------------------------------------

/// GET /api/banner - All slides in display order, inactive ones included so
/// the admin form can re-enable them.
async fn banner_handler(State(state): State<AppState>) -> Result<Json<Vec<BannerSlide>>, ApiError> {
    let slides = state
        .rest
        .select("banner_slides", &[("order", "position.asc")], None)
        .await?;
    Ok(Json(slides))
}

/// PUT /api/banner - Whole-list write; new slides get ids here.
async fn banner_update_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(slides): Json<Vec<BannerSlide>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let token = bearer_token(&headers)?;
    let slides: Vec<BannerSlide> = {
        let mut rng = rand::thread_rng();
        slides
            .into_iter()
            .map(|slide| {
                if slide.id.is_empty() {
                    BannerSlide {
                        id: generated_id(&mut rng, "slide"),
                        ..slide
                    }
                } else {
                    slide
                }
            })
            .collect()
    };
    state
        .rest
        .upsert("banner_slides", &slides, Some(token))
        .await?;
    Ok(Json(json!({ "ok": true })))
}

// ---------------------------------------------------------------------------
// Notification templates
// ---------------------------------------------------------------------------

/// GET /api/templates
async fn templates_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<NotificationTemplate>>, ApiError> {
    let templates = state
        .rest
        .select("notification_templates", &[("order", "name.asc")], None)
        .await?;
    Ok(Json(templates))
}

/// PUT /api/templates
async fn templates_update_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(templates): Json<Vec<NotificationTemplate>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let token = bearer_token(&headers)?;
    state
        .rest
        .upsert("notification_templates", &templates, Some(token))
        .await?;
    Ok(Json(json!({ "ok": true })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn bearer_token_requires_scheme_prefix() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer abc123".parse().unwrap());
        assert_eq!(bearer_token(&headers).ok(), Some("abc123"));

        let mut bare = HeaderMap::new();
        bare.insert("authorization", "abc123".parse().unwrap());
        assert!(bearer_token(&bare).is_err());

        assert!(bearer_token(&HeaderMap::new()).is_err());
    }

    #[test]
    fn booking_reference_has_prefix_and_length() {
        let mut rng = StepRng::new(0, 7);
        let reference = booking_reference(&mut rng);
        assert!(reference.starts_with("MQ-"));
        assert_eq!(reference.len(), 3 + REFERENCE_LEN);
        assert!(reference[3..]
            .chars()
            .all(|c| REFERENCE_ALPHABET.contains(&(c as u8))));
    }

    #[test]
    fn generated_ids_are_prefixed_and_lowercase() {
        let mut rng = StepRng::new(0, 3);
        let id = generated_id(&mut rng, "slide");
        assert!(id.starts_with("slide-"));
        assert_eq!(id.len(), "slide-".len() + 10);
        assert_eq!(id, id.to_lowercase());
    }
}
