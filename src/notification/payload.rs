//! Builds the Slack incoming-webhook payload for an issuance event.

use crate::config::SlackConfig;
use crate::core::IssuanceResult;
use serde::Serialize;

/// Attachment color used for new-certificate notifications.
pub const ISSUANCE_COLOR: &str = "#ff5400";

/// A single key/value row inside an attachment.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    /// Whether Slack may render this field next to another short field.
    pub short: bool,
}

impl AttachmentField {
    fn new(title: &str, value: impl Into<String>, short: bool) -> Self {
        Self {
            title: title.to_string(),
            value: value.into(),
            short,
        }
    }
}

/// A colored block of fields.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Attachment {
    pub color: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    pub fields: Vec<AttachmentField>,
}

/// A message to send to a Slack incoming webhook.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SlackPayload {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub username: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub icon_url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
}

impl SlackPayload {
    /// Builds the notification for `result`, signed with the sender identity
    /// from `config`.
    ///
    /// Fields are emitted as Domain, Issuer, IDN (only when `result.idn` is
    /// set), SAN and Addresses. SAN and Addresses are always present, even
    /// when their lists are empty.
    pub fn new(config: &SlackConfig, result: &IssuanceResult) -> Self {
        let idn = (!result.idn.is_empty()).then(|| AttachmentField::new("IDN", &result.idn, true));

        let fields = [
            Some(AttachmentField::new("Domain", &result.domain, true)),
            Some(AttachmentField::new("Issuer", &result.issuer, true)),
            idn,
            Some(AttachmentField::new("SAN", result.san.join(", "), false)),
            Some(AttachmentField::new(
                "Addresses",
                result.addresses.join(", "),
                false,
            )),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self {
            text: format!("A certificate for {} has been issued", result.label()),
            username: config.username.clone(),
            icon_url: config.icon_url.clone(),
            attachments: vec![Attachment {
                color: ISSUANCE_COLOR.to_string(),
                text: String::new(),
                fields,
            }],
        }
    }

    /// Returns the fields of the first attachment.
    pub fn fields(&self) -> &[AttachmentField] {
        self.attachments
            .first()
            .map(|a| a.fields.as_slice())
            .unwrap_or_default()
    }
}
