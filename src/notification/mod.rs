//! Builds and delivers chat notifications for certificate-issuance events.
//!
//! [`payload`] turns an [`IssuanceResult`](crate::core::IssuanceResult) into a
//! Slack webhook message, and [`slack`] posts that message.
pub mod payload;
pub mod slack;

pub use payload::SlackPayload;
pub use slack::{DeliveryError, SlackClient};
