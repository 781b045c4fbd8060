//! A client for posting issuance notifications to a Slack webhook.

use crate::config::SlackConfig;
use crate::core::{IssuanceResult, Notifier};
use crate::notification::payload::SlackPayload;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use tracing::{debug, instrument, warn};

/// Errors surfaced by [`SlackClient::try_deliver`].
#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Slack post error: {0}")]
    Transport(#[source] reqwest::Error),
}

/// Posts payloads to the configured Slack incoming webhook.
///
/// Every delivery is a single attempt on a fresh HTTP client with no timeout.
/// The response status is never inspected.
#[derive(Debug, Clone)]
pub struct SlackClient {
    config: SlackConfig,
}

impl SlackClient {
    /// Creates a new `SlackClient`.
    pub fn new(config: SlackConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this client posts with.
    pub fn config(&self) -> &SlackConfig {
        &self.config
    }

    /// Posts `payload` to the webhook, logging a warning if the request
    /// could not be sent.
    pub async fn deliver(&self, payload: &SlackPayload) {
        if let Err(e) = self.try_deliver(payload).await {
            warn!(error = %e, "Slack post error");
        }
    }

    /// Posts `payload` to the webhook and reports transport failures to the
    /// caller instead of logging them.
    ///
    /// A response with any status code, including 4xx and 5xx, counts as
    /// delivered.
    #[instrument(skip_all, fields(field_count = payload.fields().len()))]
    pub async fn try_deliver(&self, payload: &SlackPayload) -> Result<(), DeliveryError> {
        // An unserializable payload is still posted, with an empty body.
        let body = serde_json::to_vec(payload).unwrap_or_else(|e| {
            debug!(error = %e, "Failed to serialize Slack payload");
            Vec::new()
        });

        let client = reqwest::Client::builder()
            .build()
            .map_err(DeliveryError::Client)?;

        let response = client
            .post(&self.config.webhook_url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(DeliveryError::Transport)?;

        debug!(status = %response.status(), "Posted notification to Slack.");
        Ok(())
    }
}

#[async_trait]
impl Notifier for SlackClient {
    fn name(&self) -> &str {
        "slack"
    }

    async fn notify(&self, result: &IssuanceResult) {
        let payload = SlackPayload::new(&self.config, result);
        self.deliver(&payload).await;
    }
}
