//! Client for the external admins directory, the collaborator that knows
//! which tenant admin owns a domain and what license it holds.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::config;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminRecord {
    pub domain: String,
    pub license_key: String,
    #[serde(default)]
    pub license_status: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl AdminRecord {
    pub fn display_name(&self) -> String {
        let first = self.first_name.as_deref().unwrap_or("");
        let last = self.last_name.as_deref().unwrap_or("");
        format!("{first} {last}").trim().to_string()
    }

    pub fn license_is_active(&self) -> bool {
        self.license_status == "active"
    }

    pub fn license_is_expired(&self, now: DateTime<Utc>) -> bool {
        matches!(self.expires_at, Some(at) if at <= now)
    }
}

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("admins directory base URL is not configured")]
    NotConfigured,
    #[error("{0}")]
    Lookup(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Malformed(String),
}

pub struct AdminDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl AdminDirectory {
    /// Build from the configured `API_BASE`. Errors when the base is absent
    /// so login surfaces a 500 instead of silently failing every lookup.
    pub fn from_config() -> Result<Self, DirectoryError> {
        let base_url = config::config()
            .upstream
            .api_base
            .clone()
            .ok_or(DirectoryError::NotConfigured)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client, base_url })
    }

    /// Look up the tenant admin registered for `domain`.
    ///
    /// The directory replies with either a raw array or an `{items: [...]}`
    /// envelope; both shapes are accepted. A `{ok:false}` body is surfaced
    /// as a lookup failure with the upstream's message.
    pub async fn find_by_domain(&self, domain: &str) -> Result<Option<AdminRecord>, DirectoryError> {
        let url = format!("{}/admins", self.base_url.trim_end_matches('/'));
        let body: Value = self
            .client
            .get(&url)
            .query(&[("domain", domain), ("limit", "1")])
            .send()
            .await?
            .json()
            .await?;

        if body.get("ok").and_then(Value::as_bool) == Some(false) {
            let message = body
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("Lookup failed.")
                .to_string();
            return Err(DirectoryError::Lookup(message));
        }

        let items = match body {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("items") {
                Some(Value::Array(items)) => items,
                Some(_) | None => {
                    return Err(DirectoryError::Malformed(
                        "expected an array or {items: [...]}".to_string(),
                    ))
                }
            },
            _ => {
                return Err(DirectoryError::Malformed(
                    "expected an array or {items: [...]}".to_string(),
                ))
            }
        };

        match items.into_iter().next() {
            Some(item) => serde_json::from_value(item)
                .map(Some)
                .map_err(|e| DirectoryError::Malformed(e.to_string())),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> AdminRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn parses_camel_case_directory_records() {
        let admin = record(json!({
            "domain": "acme.example.com",
            "licenseKey": "LIC-42",
            "licenseStatus": "active",
            "expiresAt": "2099-01-01T00:00:00Z",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@acme.example.com"
        }));
        assert_eq!(admin.license_key, "LIC-42");
        assert!(admin.license_is_active());
        assert!(!admin.license_is_expired(Utc::now()));
        assert_eq!(admin.display_name(), "Ada Lovelace");
    }

    #[test]
    fn missing_optional_fields_default() {
        let admin = record(json!({
            "domain": "acme.example.com",
            "licenseKey": "LIC-42"
        }));
        assert!(!admin.license_is_active());
        assert!(!admin.license_is_expired(Utc::now()));
        assert_eq!(admin.display_name(), "");
    }

    #[test]
    fn past_expiry_counts_as_expired() {
        let admin = record(json!({
            "domain": "acme.example.com",
            "licenseKey": "LIC-42",
            "licenseStatus": "active",
            "expiresAt": "2001-01-01T00:00:00Z"
        }));
        assert!(admin.license_is_expired(Utc::now()));
    }
}
