//! Session cookie contracts for both tiers.
//!
//! Cookie names are part of the wire contract and must not change: the
//! issuing handlers and the routing gate only interoperate through them.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

pub const ADMIN_COOKIE: &str = "admin_session";
pub const SA_COOKIE: &str = "sa_session";

/// Attribute policy shared by both tiers: HttpOnly, SameSite=Lax, Path=/,
/// Secure only in production. `max_age_days` is the tier's configured
/// session length.
pub fn session_cookie(name: &'static str, token: String, max_age_days: u64, secure: bool) -> Cookie<'static> {
    Cookie::build((name, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .max_age(Duration::days(max_age_days as i64))
        .build()
}

/// Logout: overwrite with an empty value and Max-Age=0 so the browser drops
/// the cookie immediately. The token itself stays valid until `exp`; there
/// is no server-side revocation list.
pub fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    Cookie::build((name, ""))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}
