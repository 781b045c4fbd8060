/// certnotify - Slack notifications for certificate issuance
///
/// This library formats certificate-issuance events into Slack webhook
/// payloads and posts them on a best-effort basis.
pub mod cli;
pub mod config;
pub mod core;
pub mod notification;

// Re-export core types for convenience
pub use core::*;
