//! Tenant-admin session endpoints: login, logout, session probe.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{json, Value};
use subtle::ConstantTimeEq;

use crate::auth::{self, cookie, AdminClaims, ADMIN_COOKIE};
use crate::config;
use crate::error::ApiError;
use crate::services::admins::AdminDirectory;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub license_key: String,
}

/// POST /api/admin/login
///
/// Validates the submitted domain and license key against the admins
/// directory, then issues the tenant session cookie. Each failure mode
/// returns a distinct message but the same 401 status.
pub async fn login(
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let Json(request) = body.map_err(|_| ApiError::bad_request("Invalid JSON body."))?;
    if request.domain.is_empty() || request.license_key.is_empty() {
        return Err(ApiError::bad_request("Domain and license key are required."));
    }

    let directory = AdminDirectory::from_config()?;
    let admin = directory
        .find_by_domain(&request.domain)
        .await?
        .ok_or_else(|| ApiError::unauthorized("No admin found for this domain."))?;

    if !admin.license_is_active() {
        return Err(ApiError::unauthorized("License not active."));
    }
    if admin.license_is_expired(Utc::now()) {
        return Err(ApiError::unauthorized("License expired."));
    }
    let key_matches: bool = admin
        .license_key
        .as_bytes()
        .ct_eq(request.license_key.as_bytes())
        .into();
    if !key_matches {
        return Err(ApiError::unauthorized("Invalid license key."));
    }

    let config = config::config();
    let claims = AdminClaims::new(
        &admin.domain,
        &admin.license_key,
        config.session.admin_session_days,
    );
    let token = auth::admin_tokens()
        .issue(&claims)
        .map_err(|e| ApiError::internal_server_error(format!("Failed to issue session: {e}")))?;

    tracing::info!(domain = %admin.domain, "tenant admin logged in");

    let jar = jar.add(cookie::session_cookie(
        ADMIN_COOKIE,
        token,
        config.session.admin_session_days,
        config.is_production(),
    ));
    Ok((
        jar,
        Json(json!({
            "ok": true,
            "admin": {
                "domain": admin.domain,
                "name": admin.display_name(),
                "email": admin.email,
            }
        })),
    ))
}

/// POST /api/admin/logout - clear the cookie, unconditionally succeeds.
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<Value>) {
    let jar = jar.add(cookie::expired_cookie(
        ADMIN_COOKIE,
        config::config().is_production(),
    ));
    (jar, Json(json!({ "ok": true })))
}

/// GET /api/admin/me - session probe for the tenant console frontend.
pub async fn me(jar: CookieJar) -> Response {
    let token = jar.get(ADMIN_COOKIE).map(|c| c.value().to_string());
    match auth::admin_tokens().verify(token.as_deref()) {
        Some(claims) => Json(json!({
            "ok": true,
            "admin": { "domain": claims.dom, "exp": claims.exp }
        }))
        .into_response(),
        None => (StatusCode::UNAUTHORIZED, Json(json!({ "ok": false }))).into_response(),
    }
}
