//! Routing gate: verifies the tier-appropriate session cookie before any
//! handler runs, or redirects to the matching login page.
//!
//! Single pass per request, read-only on cookies, and it must never panic
//! on whatever bytes arrive in the Cookie header.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use url::form_urlencoded;

use super::policy::{classify, RouteClass};
use crate::auth::{self, ADMIN_COOKIE, SA_COOKIE};

/// Paths the gate never inspects: static assets plus the API surface, which
/// enforces its own cookie checks (the login/logout/me endpoints would
/// otherwise be gated against the session they exist to create or probe).
const GATE_EXEMPT_PREFIXES: &[&str] = &["/api/", "/assets/", "/public/"];
const GATE_EXEMPT_ROUTES: &[&str] = &["/favicon.ico", "/health"];

pub async fn session_gate(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();

    if is_exempt(&path) {
        return next.run(request).await;
    }

    match classify(&path) {
        RouteClass::Public => next.run(request).await,
        RouteClass::TenantAdmin => {
            let jar = CookieJar::from_headers(request.headers());
            let token = jar.get(ADMIN_COOKIE).map(|c| c.value().to_string());
            match auth::admin_gate_tokens().verify(token.as_deref()) {
                Some(_) => next.run(request).await,
                None => {
                    tracing::debug!(%path, "no valid tenant-admin session, redirecting to login");
                    redirect_to_login("/admin/login", &path)
                }
            }
        }
        RouteClass::SuperAdmin => {
            let jar = CookieJar::from_headers(request.headers());
            let token = jar.get(SA_COOKIE).map(|c| c.value().to_string());
            match auth::superadmin_gate_tokens().verify(token.as_deref()) {
                Some(_) => next.run(request).await,
                None => {
                    tracing::debug!(%path, "no valid super-admin session, redirecting to login");
                    redirect_to_login("/superadmin/login", &path)
                }
            }
        }
    }
}

fn is_exempt(path: &str) -> bool {
    GATE_EXEMPT_PREFIXES.iter().any(|p| path.starts_with(p))
        || GATE_EXEMPT_ROUTES.contains(&path)
        || path == "/api"
}

/// Redirect to the tier's login page, preserving the original path in the
/// `next` query parameter so the frontend can return after login.
fn redirect_to_login(login_path: &str, original: &str) -> Response {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("next", original)
        .finish();
    Redirect::temporary(&format!("{login_path}?{query}")).into_response()
}
