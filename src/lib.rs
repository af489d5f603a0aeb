//! Library root for `digest-bot`.
//!
//! Digest-bot is a Gemini-powered notification tool that, once per scheduled
//! run, does exactly one thing:
//! - Builds a prompt for the requested digest kind (daily business news,
//!   weekly tech news, or daily business-English vocabulary)
//! - Asks the Gemini `generateContent` API for the digest text
//! - Wraps the result in a fixed email template
//! - Submits the email to an SMTP relay for a single fixed recipient
//!
//! There is no state between runs: an external time-based scheduler (cron, a
//! systemd timer) invokes the binary with a digest kind, and the process runs
//! to completion or failure. The architecture is built around extensible
//! traits that allow for different implementations of each service.

pub mod base;
pub mod digest;
pub mod prelude;
pub mod runtime;
pub mod service;

use base::{
    config::Config,
    types::{DigestKind, DigestOutcome, DigestRequest, Res},
};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Builds the runtime from validated configuration, anchors the digest to
/// today's local date, and executes one run.
pub async fn start(config: Config, kind: DigestKind) -> Res<DigestOutcome> {
    info!(kind = kind.as_str(), "Starting digest-bot ...");

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config)?;

    // One request per invocation, anchored to the trigger date.
    let request = DigestRequest::new(kind, chrono::Local::now().date_naive());

    runtime.run(&request).await
}
