//! Compact signed session tokens.
//!
//! Format: `b64url(header) "." b64url(payload) "." b64url(hmac_sha256(header_b64 "." payload_b64))`.
//! The header is the fixed `{"alg":"HS256","typ":"JWT"}` for wire
//! compatibility; verification only recomputes the MAC over the literal
//! header and payload segments, so nothing inside the header is trusted.

use std::marker::PhantomData;

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use thiserror::Error;

use super::codec;
use super::mac::Mac256;

const SCHEMA_VERSION: u8 = 1;

#[derive(Debug, Serialize)]
struct Header {
    alg: &'static str,
    typ: &'static str,
}

const HEADER: Header = Header { alg: "HS256", typ: "JWT" };

/// Claims carried by one tier's session token.
pub trait SessionClaims: Serialize + DeserializeOwned {
    /// The `sub` literal this tier issues and accepts. A token whose subject
    /// does not match is rejected even with a valid signature, so a cookie
    /// from one tier can never cross into the other.
    const SUBJECT: &'static str;

    fn subject(&self) -> &str;
    fn expires_at(&self) -> i64;
    fn schema_version(&self) -> u8;
}

/// Super-admin tier payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuperAdminClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub v: u8,
}

impl SuperAdminClaims {
    pub fn new(days: u64) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            sub: Self::SUBJECT.to_string(),
            iat,
            exp: iat + days as i64 * 86_400,
            v: SCHEMA_VERSION,
        }
    }
}

impl SessionClaims for SuperAdminClaims {
    const SUBJECT: &'static str = "superadmin";

    fn subject(&self) -> &str {
        &self.sub
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }

    fn schema_version(&self) -> u8 {
        self.v
    }
}

/// Tenant-admin tier payload. Carries the tenant domain and a truncated
/// hash of the license key; the raw key itself never enters the cookie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminClaims {
    pub sub: String,
    pub dom: String,
    pub lic: String,
    pub iat: i64,
    pub exp: i64,
    pub v: u8,
}

impl AdminClaims {
    pub fn new(domain: &str, license_key: &str, days: u64) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            sub: Self::SUBJECT.to_string(),
            dom: domain.to_string(),
            lic: license_hint(license_key),
            iat,
            exp: iat + days as i64 * 86_400,
            v: SCHEMA_VERSION,
        }
    }
}

impl SessionClaims for AdminClaims {
    const SUBJECT: &'static str = "admin";

    fn subject(&self) -> &str {
        &self.sub
    }

    fn expires_at(&self) -> i64 {
        self.exp
    }

    fn schema_version(&self) -> u8 {
        self.v
    }
}

/// First 12 hex chars of sha256(license_key), binding a token to the
/// credential it was issued against without storing the credential.
pub fn license_hint(license_key: &str) -> String {
    let digest = Sha256::digest(license_key.as_bytes());
    hex::encode(digest)[..12].to_string()
}

/// Why a token failed verification. Internal only: callers on the request
/// path see a uniform `None` so validity information never leaks outward.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("token is structurally malformed")]
    Malformed,
    #[error("token signature mismatch")]
    BadSignature,
    #[error("unsupported token schema version {0}")]
    UnsupportedVersion(u8),
    #[error("token subject does not match this tier")]
    TierMismatch,
    #[error("token expired")]
    Expired,
}

/// Signs and verifies one tier's tokens with that tier's secret.
#[derive(Debug, Clone)]
pub struct TokenEngine<C, M> {
    secret: Vec<u8>,
    mac: M,
    _claims: PhantomData<C>,
}

impl<C: SessionClaims, M: Mac256> TokenEngine<C, M> {
    pub fn new(secret: impl Into<Vec<u8>>, mac: M) -> Self {
        Self { secret: secret.into(), mac, _claims: PhantomData }
    }

    /// Build the three-part token string for already-validated claims.
    pub fn issue(&self, claims: &C) -> Result<String, serde_json::Error> {
        let header = codec::encode(serde_json::to_vec(&HEADER)?);
        let payload = codec::encode(serde_json::to_vec(claims)?);
        let signing_input = format!("{header}.{payload}");
        let signature = codec::encode(self.mac.sign(&self.secret, signing_input.as_bytes()));
        Ok(format!("{signing_input}.{signature}"))
    }

    /// Verify a possibly absent cookie value. Every failure mode collapses
    /// to `None`; this function must never panic on hostile input.
    pub fn verify(&self, token: Option<&str>) -> Option<C> {
        self.verify_at(token?, Utc::now().timestamp()).ok()
    }

    pub(crate) fn verify_at(&self, token: &str, now: i64) -> Result<C, VerifyError> {
        let mut parts = token.split('.');
        let (header, payload, signature) =
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(h), Some(p), Some(s), None)
                    if !h.is_empty() && !p.is_empty() && !s.is_empty() =>
                {
                    (h, p, s)
                }
                _ => return Err(VerifyError::Malformed),
            };

        let given = codec::decode(signature).map_err(|_| VerifyError::Malformed)?;
        let signing_input = format!("{header}.{payload}");
        let expected = self.mac.sign(&self.secret, signing_input.as_bytes());
        if !bool::from(expected.ct_eq(given.as_slice())) {
            return Err(VerifyError::BadSignature);
        }

        let raw = codec::decode(payload).map_err(|_| VerifyError::Malformed)?;
        let claims: C = serde_json::from_slice(&raw).map_err(|_| VerifyError::Malformed)?;

        // Version dispatch: only v1 is defined today, but unknown versions
        // must fail here rather than fall through the remaining checks.
        match claims.schema_version() {
            SCHEMA_VERSION => {}
            other => return Err(VerifyError::UnsupportedVersion(other)),
        }

        if claims.subject() != C::SUBJECT {
            return Err(VerifyError::TierMismatch);
        }
        if claims.expires_at() <= now {
            return Err(VerifyError::Expired);
        }
        Ok(claims)
    }
}
