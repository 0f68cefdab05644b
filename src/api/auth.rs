//! Session/Auth Client
//!
//! Single source of truth for the bearer token. This is the only module that
//! reads or writes persisted session state, and the only one allowed to force
//! a navigation to the sign-in page as a side effect of an API failure.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Where unauthenticated users are sent
pub const SIGNIN_PATH: &str = "/signin";

const API_BASE_KEY: &str = "ml_api_base";
const TOKEN_KEY: &str = "ml_access_token";
const USER_KEY: &str = "ml_user";
const USER_ID_KEY: &str = "ml_user_id";

/// Errors surfaced by authenticated API calls.
///
/// Callers are individually responsible for catching these and deciding
/// whether to log, fall back, or redirect. There is no retry policy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No token present when one is required; no request was issued.
    #[error("UNAUTHENTICATED")]
    Unauthenticated,
    /// The backend rejected the token; the session has been cleared.
    #[error("UNAUTHORIZED")]
    Unauthorized,
    /// Any other non-2xx status.
    #[error("HTTP_{0}")]
    Http(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
}

// ============ Local storage ============

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn storage_get(key: &str) -> Option<String> {
    storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn storage_set(key: &str, value: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(key, value);
    }
}

pub fn storage_remove(key: &str) {
    if let Some(s) = storage() {
        let _ = s.remove_item(key);
    }
}

/// Get the API base URL from local storage or use the default
pub fn api_base() -> String {
    storage_get(API_BASE_KEY)
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
        .trim_end_matches('/')
        .to_string()
}

// ============ Session ============

/// Read the persisted token. No side effects.
pub fn get_token() -> Option<String> {
    storage_get(TOKEN_KEY).filter(|t| !t.is_empty())
}

/// Persist a freshly issued token. Written only by the login and
/// verify-then-login flows.
pub fn set_token(token: &str) {
    storage_set(TOKEN_KEY, token);
}

/// Token presence check only; no validity check against the backend.
pub fn is_authenticated() -> bool {
    has_session(get_token().as_deref())
}

fn has_session(token: Option<&str>) -> bool {
    token.map_or(false, |t| !t.is_empty())
}

/// Clear the persisted token and cached profile. Idempotent.
pub fn logout(redirect: bool) {
    storage_remove(TOKEN_KEY);
    storage_remove(USER_KEY);
    storage_remove(USER_ID_KEY);
    if redirect {
        redirect_to(SIGNIN_PATH);
    }
}

/// Hard navigation, used for auth redirects and external URLs.
pub fn redirect_to(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

/// Page-load guard for authenticated views. When no token is present,
/// redirects to sign-in and returns false; the caller must render nothing
/// and issue no API calls.
pub fn require_auth() -> bool {
    if is_authenticated() {
        true
    } else {
        redirect_to(SIGNIN_PATH);
        false
    }
}

// ============ Authenticated fetch ============

/// GET an authenticated endpoint and parse the JSON body.
pub async fn api_get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let token = get_token().ok_or(ApiError::Unauthenticated)?;

    let response = Request::get(&format!("{}{}", api_base(), path))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    handle_response(response).await
}

/// POST a JSON body to an authenticated endpoint.
pub async fn api_post<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let token = get_token().ok_or(ApiError::Unauthenticated)?;

    let response = Request::post(&format!("{}{}", api_base(), path))
        .header("Authorization", &format!("Bearer {}", token))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    handle_response(response).await
}

/// Session consequence of an authenticated response status.
#[derive(Debug, PartialEq, Eq)]
enum StatusOutcome {
    Success,
    /// The backend rejected the token: the stored session must be cleared
    /// and the user sent back to sign-in.
    SessionRejected,
    Failed(u16),
}

fn classify_status(status: u16) -> StatusOutcome {
    match status {
        401 => StatusOutcome::SessionRejected,
        200..=299 => StatusOutcome::Success,
        other => StatusOutcome::Failed(other),
    }
}

async fn handle_response<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    match classify_status(response.status()) {
        StatusOutcome::SessionRejected => {
            logout(true);
            Err(ApiError::Unauthorized)
        }
        StatusOutcome::Failed(status) => Err(ApiError::Http(status)),
        StatusOutcome::Success => response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_presence() {
        assert!(!has_session(None));
        assert!(!has_session(Some("")));
        assert!(has_session(Some("tok-123")));
    }

    #[test]
    fn test_rejected_token_clears_session_other_failures_do_not() {
        // Only a 401 invalidates the stored session
        assert_eq!(classify_status(401), StatusOutcome::SessionRejected);
        assert_eq!(classify_status(200), StatusOutcome::Success);
        assert_eq!(classify_status(204), StatusOutcome::Success);
        assert_eq!(classify_status(403), StatusOutcome::Failed(403));
        assert_eq!(classify_status(500), StatusOutcome::Failed(500));
    }

    #[test]
    fn test_error_display_codes() {
        assert_eq!(ApiError::Unauthenticated.to_string(), "UNAUTHENTICATED");
        assert_eq!(ApiError::Unauthorized.to_string(), "UNAUTHORIZED");
        assert_eq!(ApiError::Http(503).to_string(), "HTTP_503");
    }
}
