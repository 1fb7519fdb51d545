//! Thin page handlers. The consoles themselves are rendered by the
//! frontend; these endpoints exist so the routing gate has concrete
//! surfaces to guard and the login redirects land somewhere real.

use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use serde_json::{json, Value};

/// GET /admin/login (public)
pub async fn admin_login_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html>
<head><title>Tenant Admin Login</title></head>
<body>
  <h1>Tenant Admin Login</h1>
  <form method="post" action="/api/admin/login">
    <label>Domain <input name="domain" autocomplete="off"></label>
    <label>License key <input name="licenseKey" type="password"></label>
    <button type="submit">Sign in</button>
  </form>
</body>
</html>"#,
    )
}

/// GET /superadmin/login (public)
pub async fn superadmin_login_page() -> Html<&'static str> {
    Html(
        r#"<!doctype html>
<html>
<head><title>Super Admin Login</title></head>
<body>
  <h1>Super Admin Login</h1>
  <form method="post" action="/api/superadmin/login">
    <label>Username <input name="username" autocomplete="off"></label>
    <label>Password <input name="password" type="password"></label>
    <button type="submit">Sign in</button>
  </form>
</body>
</html>"#,
    )
}

/// GET / - super-admin console landing (gated by the catch-all tier).
pub async fn overview() -> Json<Value> {
    Json(json!({
        "ok": true,
        "console": "superadmin",
        "sections": {
            "register-domains": "/register-domains",
            "admin-management": "/admin-management",
        }
    }))
}

/// GET /admin - tenant console landing (gated by the tenant tier).
pub async fn tenant_home() -> Json<Value> {
    Json(json!({
        "ok": true,
        "console": "admin",
        "sections": {
            "dashboard": "/admin/dashboard",
            "questions": "/admin/questions",
            "checkin-responses": "/admin/checkin-responses",
            "privacy-policies": "/admin/privacy-policies",
            "resources": "/admin/resources",
            "users": "/admin/users",
        }
    }))
}

/// Fallback for paths with no handler. Runs after the gate, so reaching it
/// already implies a valid session for the path's tier.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "ok": false, "message": "Not found." })),
    )
}

/// GET /health - liveness probe, no session required.
pub async fn health() -> Json<Value> {
    Json(json!({
        "ok": true,
        "status": "ok",
        "timestamp": chrono::Utc::now(),
    }))
}
