//! REST Endpoint Bindings
//!
//! Typed functions over the Market Llama backend paths. Dashboard data goes
//! through the session client in [`super::auth`]; the landing auth forms post
//! directly since no session exists yet.

use gloo_net::http::Request;
use serde::Deserialize;

use super::auth::{self, ApiError};
use crate::state::global::{
    Account, AccountKind, AccountSummary, PerformanceOverview, Plan, Profile, TradeRecord,
};

// ============ Response types ============

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OauthUrlResponse {
    pub url: String,
}

/// The backend has shipped two shapes for the accounts endpoint: a flat
/// per-account array (legacy) and a pre-aggregated summary object. The
/// summary is the canonical contract; the legacy array is still parsed but
/// immediately normalized, so only one render path exists.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AccountsResponse {
    Summary(AccountSummary),
    Legacy(Vec<Account>),
}

impl AccountsResponse {
    pub fn into_summary(self) -> AccountSummary {
        match self {
            AccountsResponse::Summary(summary) => summary,
            AccountsResponse::Legacy(accounts) => {
                let mut summary = AccountSummary::default();
                for account in &accounts {
                    match account.kind {
                        AccountKind::Live => summary.live_balance += account.balance,
                        AccountKind::Demo => summary.demo_balance += account.balance,
                    }
                }
                summary.currency = accounts.first().map(|a| a.currency.clone());
                summary.accounts = Some(accounts);
                summary
            }
        }
    }
}

// ============ Errors from the landing auth forms ============

/// Failure of an unauthenticated auth-form call, carrying the HTTP status
/// and whatever human-readable message the backend offered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    Status(u16, String),
    Network(String),
}

/// Pull a display message out of a backend error body. The backend is not
/// consistent: FastAPI-style `detail`, plain `message`, or a validation
/// `errors[0].msg` all occur.
pub fn extract_backend_message(body: &serde_json::Value) -> String {
    if let Some(s) = body.as_str() {
        return s.to_string();
    }
    if let Some(detail) = body.get("detail").and_then(|v| v.as_str()) {
        return detail.to_string();
    }
    if let Some(message) = body.get("message").and_then(|v| v.as_str()) {
        return message.to_string();
    }
    body.get("errors")
        .and_then(|v| v.get(0))
        .and_then(|v| v.get("msg"))
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Login failures on 401 and 400 always render the same text regardless of
/// backend detail; other statuses surface the backend message when present.
pub fn login_error_text(status: u16, backend_msg: &str) -> String {
    match status {
        400 | 401 => "Incorrect email or password.".to_string(),
        _ if !backend_msg.is_empty() => backend_msg.to_string(),
        _ => "Sign in failed. Please check your details.".to_string(),
    }
}

/// Does a register failure mean the address is already taken?
pub fn is_email_taken_message(backend_msg: &str) -> bool {
    let lower = backend_msg.to_lowercase();
    lower.contains("already") && (lower.contains("email") || lower.contains("registered"))
}

async fn post_unauthenticated(
    path: &str,
    body: &serde_json::Value,
) -> Result<serde_json::Value, AuthError> {
    let response = Request::post(&format!("{}{}", auth::api_base(), path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| AuthError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| AuthError::Network(e.to_string()))?;

    let status = response.status();
    let parsed: serde_json::Value = response.json().await.unwrap_or(serde_json::Value::Null);

    if !(200..300).contains(&status) {
        return Err(AuthError::Status(status, extract_backend_message(&parsed)));
    }

    Ok(parsed)
}

// ============ Auth flows (no session yet) ============

/// Create an account. The verify-email step follows; any token in the
/// response is ignored until verification completes.
pub async fn register(email: &str, password: &str) -> Result<(), AuthError> {
    post_unauthenticated(
        "/api/auth/register",
        &serde_json::json!({ "email": email, "password": password }),
    )
    .await
    .map(|_| ())
}

/// Exchange credentials for a bearer token.
pub async fn login(email: &str, password: &str) -> Result<String, AuthError> {
    let body = post_unauthenticated(
        "/api/auth/login",
        &serde_json::json!({ "email": email, "password": password }),
    )
    .await?;

    let parsed: TokenResponse = serde_json::from_value(body)
        .map_err(|e| AuthError::Network(format!("unexpected login response: {}", e)))?;

    parsed
        .access_token
        .ok_or_else(|| AuthError::Network("login response had no access_token".to_string()))
}

pub async fn verify_email(email: &str, code: &str) -> Result<(), AuthError> {
    post_unauthenticated(
        "/api/auth/verify-email",
        &serde_json::json!({ "email": email, "code": code }),
    )
    .await
    .map(|_| ())
}

pub async fn resend_verification_email(email: &str) -> Result<(), AuthError> {
    post_unauthenticated(
        "/api/auth/resend-verification-email",
        &serde_json::json!({ "email": email }),
    )
    .await
    .map(|_| ())
}

pub async fn request_password_reset(email: &str) -> Result<(), AuthError> {
    post_unauthenticated(
        "/api/auth/request-password-reset",
        &serde_json::json!({ "email": email }),
    )
    .await
    .map(|_| ())
}

// ============ Authenticated data ============

pub async fn fetch_profile() -> Result<Profile, ApiError> {
    auth::api_get("/api/auth/me").await
}

pub async fn fetch_account_summary() -> Result<AccountSummary, ApiError> {
    let response: AccountsResponse = auth::api_get("/api/accounts/summary").await?;
    Ok(response.into_summary())
}

pub async fn fetch_performance_overview() -> Result<PerformanceOverview, ApiError> {
    auth::api_get("/api/performance/overview").await
}

pub async fn fetch_performance_history() -> Result<Vec<TradeRecord>, ApiError> {
    auth::api_get("/api/performance/history").await
}

pub async fn fetch_plans() -> Result<Vec<Plan>, ApiError> {
    auth::api_get("/api/plans").await
}

/// OAuth entry point for linking a Deriv broker account.
pub async fn fetch_deriv_oauth_url() -> Result<String, ApiError> {
    let response: OauthUrlResponse = auth::api_get("/api/deriv/oauth/url").await?;
    Ok(response.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_shape_parses_as_is() {
        let body = serde_json::json!({
            "live_balance": 150.25,
            "demo_balance": 10000.0,
            "currency": "USD",
            "accounts": [
                { "id": "cr-1", "type": "live", "broker": "Deriv", "balance": 150.25, "currency": "USD" }
            ]
        });

        let parsed: AccountsResponse = serde_json::from_value(body).unwrap();
        let summary = parsed.into_summary();
        assert_eq!(summary.live_balance, 150.25);
        assert_eq!(summary.demo_balance, 10000.0);
        assert_eq!(summary.accounts.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn test_legacy_array_normalizes_to_summary() {
        let body = serde_json::json!([
            { "id": "a", "type": "live", "broker": "Deriv", "balance": 100.0, "currency": "USD" },
            { "id": "b", "type": "live", "broker": "Deriv", "balance": 50.0, "currency": "USD" },
            { "id": "c", "type": "demo", "broker": "Deriv", "balance": 10000.0, "currency": "USD" }
        ]);

        let parsed: AccountsResponse = serde_json::from_value(body).unwrap();
        let summary = parsed.into_summary();
        assert_eq!(summary.live_balance, 150.0);
        assert_eq!(summary.demo_balance, 10000.0);
        assert_eq!(summary.currency.as_deref(), Some("USD"));
        assert_eq!(summary.accounts.unwrap().len(), 3);
    }

    #[test]
    fn test_backend_message_precedence() {
        let detail = serde_json::json!({ "detail": "email already registered", "message": "x" });
        assert_eq!(extract_backend_message(&detail), "email already registered");

        let message = serde_json::json!({ "message": "try later" });
        assert_eq!(extract_backend_message(&message), "try later");

        let errors = serde_json::json!({ "errors": [{ "msg": "field required" }] });
        assert_eq!(extract_backend_message(&errors), "field required");

        let plain = serde_json::json!("server exploded");
        assert_eq!(extract_backend_message(&plain), "server exploded");

        assert_eq!(extract_backend_message(&serde_json::Value::Null), "");
    }

    #[test]
    fn test_login_errors_never_leak_backend_detail_on_bad_credentials() {
        assert_eq!(
            login_error_text(401, "user record missing in shard 7"),
            "Incorrect email or password."
        );
        assert_eq!(login_error_text(400, ""), "Incorrect email or password.");
        assert_eq!(login_error_text(503, "maintenance window"), "maintenance window");
        assert_eq!(
            login_error_text(500, ""),
            "Sign in failed. Please check your details."
        );
    }

    #[test]
    fn test_email_taken_detection() {
        assert!(is_email_taken_message("Email already in use"));
        assert!(is_email_taken_message("this address is already registered"));
        assert!(!is_email_taken_message("password too short"));
        assert!(!is_email_taken_message("already"));
    }
}
