//! Super-admin session endpoints.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{json, Value};
use subtle::ConstantTimeEq;

use crate::auth::{self, cookie, SuperAdminClaims, SA_COOKIE};
use crate::config;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/superadmin/login
///
/// Checks both fields before answering and keeps the failure message
/// generic, so the response does not reveal which one was wrong.
pub async fn login(
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let Json(request) = body.map_err(|_| ApiError::bad_request("Invalid JSON body."))?;

    let config = config::config();
    let username_ok = request
        .username
        .as_bytes()
        .ct_eq(config.superadmin.username.as_bytes());
    let password_ok = request
        .password
        .as_bytes()
        .ct_eq(config.superadmin.password.as_bytes());
    if !bool::from(username_ok & password_ok) {
        return Err(ApiError::unauthorized("Invalid credentials"));
    }

    let claims = SuperAdminClaims::new(config.session.superadmin_session_days);
    let token = auth::superadmin_tokens()
        .issue(&claims)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to issue session: {e}")))?;

    tracing::info!("super admin logged in");

    let jar = jar.add(cookie::session_cookie(
        SA_COOKIE,
        token,
        config.session.superadmin_session_days,
        config.is_production(),
    ));
    Ok((jar, Json(json!({ "ok": true }))))
}

/// POST /api/superadmin/logout
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.add(cookie::expired_cookie(
        SA_COOKIE,
        config::config().is_production(),
    ));
    (jar, Json(json!({ "ok": true })))
}

/// GET /api/superadmin/me
pub async fn me(jar: CookieJar) -> Response {
    let token = jar.get(SA_COOKIE).map(|c| c.value().to_string());
    match auth::superadmin_tokens().verify(token.as_deref()) {
        Some(claims) => Json(json!({
            "ok": true,
            "user": { "role": "superadmin", "iat": claims.iat, "exp": claims.exp }
        }))
        .into_response(),
        None => (StatusCode::UNAUTHORIZED, Json(json!({ "ok": false }))).into_response(),
    }
}
