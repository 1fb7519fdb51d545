pub mod codec;
pub mod cookie;
pub mod mac;
pub mod token;

pub use cookie::{ADMIN_COOKIE, SA_COOKIE};
pub use token::{AdminClaims, SessionClaims, SuperAdminClaims, TokenEngine};

use mac::{Portable, RustCrypto};

use crate::config;

/// Tenant-admin engine used by request handlers (issue + probe).
pub fn admin_tokens() -> TokenEngine<AdminClaims, RustCrypto> {
    TokenEngine::new(config::config().session.admin_secret.as_bytes(), RustCrypto)
}

/// Tenant-admin engine used by the routing gate.
pub fn admin_gate_tokens() -> TokenEngine<AdminClaims, Portable> {
    TokenEngine::new(config::config().session.admin_secret.as_bytes(), Portable)
}

/// Super-admin engine used by request handlers.
pub fn superadmin_tokens() -> TokenEngine<SuperAdminClaims, RustCrypto> {
    TokenEngine::new(config::config().session.superadmin_secret.as_bytes(), RustCrypto)
}

/// Super-admin engine used by the routing gate.
pub fn superadmin_gate_tokens() -> TokenEngine<SuperAdminClaims, Portable> {
    TokenEngine::new(config::config().session.superadmin_secret.as_bytes(), Portable)
}
