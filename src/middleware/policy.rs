//! Route classification: which trust tier guards a given path.
//!
//! The partition is asymmetric on purpose. The tenant namespace is the
//! narrow, explicitly carved `/admin` segment; everything else that is not
//! on the public allow-list belongs to the super-admin tier, so a newly
//! added top-level area is protected by default instead of leaking open.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    TenantAdmin,
    SuperAdmin,
}

/// Closed allow-list: login pages, their backing API endpoints, the session
/// probes, and static assets. Anything added to the router that should be
/// reachable without a session must be added here explicitly.
const PUBLIC_ROUTES: &[&str] = &[
    "/superadmin/login",
    "/api/superadmin/login",
    "/api/superadmin/logout",
    "/admin/login",
    "/api/admin/login",
    "/api/admin/logout",
    "/api/admin/me",
    "/favicon.ico",
    "/health",
];

const PUBLIC_PREFIXES: &[&str] = &["/assets", "/public"];

pub fn classify(path: &str) -> RouteClass {
    let public = PUBLIC_ROUTES.iter().chain(PUBLIC_PREFIXES).any(|p| path.starts_with(p));
    if public {
        return RouteClass::Public;
    }

    // Only the `/admin` root or its subpaths are the tenant area. Distinct
    // segments that merely share the prefix ("/admin-management") are not.
    if path == "/admin" || path.starts_with("/admin/") {
        return RouteClass::TenantAdmin;
    }

    RouteClass::SuperAdmin
}
