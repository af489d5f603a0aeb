//! The digest pipeline: one parameterized run per scheduler invocation.
//!
//! A run walks a three-state machine: build the prompt and generate text,
//! then either send the composed email or skip the run entirely. Generation
//! failures are logged and downgrade the run to a skip; mail delivery
//! failures are fatal and propagate to the caller.

pub mod compose;

use tracing::{info, instrument, warn};

use crate::{
    base::{
        prompts,
        types::{DigestKind, DigestOutcome, DigestRequest, Res},
    },
    runtime::Runtime,
};

/// Execute one digest run end to end.
#[instrument(skip_all, fields(kind = request.kind.as_str(), reference_date = %request.reference_date))]
pub async fn run(runtime: &Runtime, request: &DigestRequest) -> Res<DigestOutcome> {
    if request.kind == DigestKind::WeeklyTech && !prompts::is_weekly_cadence(request.reference_date) {
        warn!("Weekly digest triggered off its Saturday cadence; the window is anchored to the most recent Saturday.");
    }

    let prompt = prompts::build_prompt(request.kind, request.reference_date);

    let text = match runtime.llm.generate(&prompt).await {
        Ok(text) => text,
        Err(error) => {
            warn!(%error, "Digest generation failed; skipping this run without sending.");
            return Ok(DigestOutcome::Skipped);
        }
    };

    let message = compose::compose(request.kind, &text, &runtime.config.recipient_name, &runtime.config.recipient_email);

    runtime.mailer.send(&message).await?;

    info!(recipient = %message.recipient, subject = %message.subject, "Digest email submitted for delivery.");

    Ok(DigestOutcome::Sent)
}
