//! Runtime services and shared state for digest-bot.

use tracing::instrument;

use crate::{
    base::{
        config::Config,
        types::{DigestOutcome, DigestRequest, Res},
    },
    digest,
    service::{llm::LlmClient, mailer::Mailer},
};

/// Runtime service context shared across one invocation.
///
/// This struct holds the configuration, the LLM client, and the mailer. It is
/// designed to be trivially cloneable, allowing it to be passed around without
/// the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The LLM client instance.
    pub llm: LlmClient,
    /// The mailer instance.
    pub mailer: Mailer,
}

impl Runtime {
    /// Create a new runtime instance.
    ///
    /// Configuration has already been validated at load time, so client
    /// construction here can assume credentials are present.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Res<Self> {
        // Initialize the LLM client.
        let llm = LlmClient::gemini(&config);

        // Initialize the SMTP mailer.
        let mailer = Mailer::smtp(&config)?;

        Ok(Self { config, llm, mailer })
    }

    /// Execute one digest run.
    pub async fn run(&self, request: &DigestRequest) -> Res<DigestOutcome> {
        digest::run(self, request).await
    }
}
