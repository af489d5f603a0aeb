//! Common types and result handling for digest-bot.

use chrono::NaiveDate;
use clap::ValueEnum;
use thiserror::Error;

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// The kind of digest produced by one scheduled run.
///
/// Each variant corresponds to one of the external scheduler's entry points;
/// all three share a single parameterized pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum DigestKind {
    /// Yesterday's major business news, delivered every morning.
    DailyNews,
    /// The past week's major tech news, delivered on Saturdays.
    WeeklyTech,
    /// Ten C1-level business English words drawn from yesterday's news.
    DailyVocab,
}

impl DigestKind {
    /// Stable lowercase name used in log records.
    pub fn as_str(&self) -> &'static str {
        match self {
            DigestKind::DailyNews => "daily-news",
            DigestKind::WeeklyTech => "weekly-tech",
            DigestKind::DailyVocab => "daily-vocab",
        }
    }
}

/// One scheduled invocation: which digest to produce, anchored to which date.
///
/// The reference date is normally "today" at the scheduler's trigger time; the
/// operative period of the prompt is always derived from it, never from wall
/// clock reads mid-pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestRequest {
    pub kind: DigestKind,
    pub reference_date: NaiveDate,
}

impl DigestRequest {
    pub fn new(kind: DigestKind, reference_date: NaiveDate) -> Self {
        Self { kind, reference_date }
    }
}

/// A fully rendered email, ready to hand to the mailer.
///
/// Transient: exists only for the duration of the send call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Terminal state of one digest run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestOutcome {
    /// The digest was generated and handed to the mailer.
    Sent,
    /// Generation failed; the run was logged and no email was sent.
    Skipped,
}

/// Failure modes of the LLM generation step.
///
/// The original pipeline logged malformed responses and returned an empty
/// result; here both failure modes are typed so the orchestration layer
/// decides what to do with them.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Network failure, non-success HTTP status, or a body that was not JSON.
    #[error("transport failure calling the generation endpoint")]
    Transport(#[from] reqwest::Error),

    /// The response parsed as JSON but lacked
    /// `candidates[0].content.parts[0].text`.
    #[error("response was well-formed JSON but contained no candidate text")]
    MalformedResponse,
}
