//! Core domain types and service traits for certnotify
//!
//! This module defines the issuance record handed over by the scanning
//! pipeline and the trait contract notifiers implement.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Describes one certificate-issuance event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct IssuanceResult {
    /// The primary hostname the certificate was issued for
    pub domain: String,
    /// The certificate authority that issued the certificate
    pub issuer: String,
    /// Unicode rendering of `domain`, empty when the domain is not an IDN
    pub idn: String,
    /// Subject alternative names, in certificate order
    pub san: Vec<String>,
    /// Network addresses `domain` resolved to
    pub addresses: Vec<String>,
}

impl IssuanceResult {
    /// Returns the label used in summaries: `domain`, or `domain (idn)` for IDNs.
    pub fn label(&self) -> String {
        if self.idn.is_empty() {
            self.domain.clone()
        } else {
            format!("{} ({})", self.domain, self.idn)
        }
    }

    /// Reads a JSON-encoded issuance result.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        serde_json::from_reader(reader).context("Failed to parse issuance result JSON")
    }
}

// =============================================================================
// Service Traits
// =============================================================================

/// Sends a notification for an issuance event
#[async_trait]
pub trait Notifier: Send + Sync {
    /// A short, descriptive name for the notifier (e.g., "slack").
    fn name(&self) -> &str;

    /// Notifies about `result`.
    ///
    /// Delivery is best-effort: failures are logged by the implementation and
    /// never surfaced to the caller.
    async fn notify(&self, result: &IssuanceResult);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_without_idn() {
        let result = IssuanceResult {
            domain: "example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(result.label(), "example.com");
    }

    #[test]
    fn test_label_with_idn() {
        let result = IssuanceResult {
            domain: "xn--r8jz45g.com".to_string(),
            idn: "例え.com".to_string(),
            ..Default::default()
        };
        assert_eq!(result.label(), "xn--r8jz45g.com (例え.com)");
    }

    #[test]
    fn test_from_json_reader_fills_missing_fields() {
        let json = r#"{"domain": "example.com", "issuer": "Let's Encrypt"}"#;
        let result = IssuanceResult::from_json_reader(json.as_bytes()).unwrap();

        assert_eq!(result.domain, "example.com");
        assert_eq!(result.issuer, "Let's Encrypt");
        assert!(result.idn.is_empty());
        assert!(result.san.is_empty());
        assert!(result.addresses.is_empty());
    }

    #[test]
    fn test_from_json_reader_rejects_garbage() {
        let result = IssuanceResult::from_json_reader("not json".as_bytes());
        assert!(result.is_err());
    }
}
