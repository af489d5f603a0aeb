//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default Gemini model to use.
fn default_gemini_model() -> String {
    "gemini-2.5-flash-preview-05-20".to_string()
}

/// Default Gemini API endpoint.
fn default_gemini_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

/// Default SMTP submission port (STARTTLS).
fn default_smtp_port() -> u16 {
    587
}

/// Configuration for the digest-bot application.
#[derive(Debug, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Gemini API key (`GEMINI_API_KEY`).
    pub gemini_api_key: String,
    /// Gemini model to use (`GEMINI_MODEL`).
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// Base URL of the Gemini API (`GEMINI_ENDPOINT`).
    #[serde(default = "default_gemini_endpoint")]
    pub gemini_endpoint: String,
    /// Address every digest is sent to (`RECIPIENT_EMAIL`).
    pub recipient_email: String,
    /// Name used in the email greeting (`RECIPIENT_NAME`).
    pub recipient_name: String,
    /// SMTP relay hostname (`SMTP_HOST`).
    pub smtp_host: String,
    /// SMTP submission port (`SMTP_PORT`).
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username, if the relay requires authentication (`SMTP_USERNAME`).
    #[serde(default)]
    pub smtp_username: Option<String>,
    /// SMTP password, if the relay requires authentication (`SMTP_PASSWORD`).
    #[serde(default)]
    pub smtp_password: Option<String>,
    /// Sender mailbox, e.g. `Digest Bot <digest@example.com>` (`SMTP_FROM`).
    pub smtp_from: String,
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("DIGEST_BOT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    /// Reject configurations the pipeline cannot run with.
    ///
    /// A missing API key or recipient is a configuration error, caught here
    /// before any client is constructed or any network call is made.
    pub fn validate(&self) -> Res<()> {
        if self.gemini_api_key.is_empty() {
            return Err(anyhow::anyhow!("Gemini API key is not set."));
        }

        if self.recipient_email.is_empty() {
            return Err(anyhow::anyhow!("Recipient email address is not set."));
        }

        if self.recipient_name.is_empty() {
            return Err(anyhow::anyhow!("Recipient name is not set."));
        }

        if self.smtp_host.is_empty() {
            return Err(anyhow::anyhow!("SMTP relay host is not set."));
        }

        if self.smtp_from.is_empty() {
            return Err(anyhow::anyhow!("SMTP sender mailbox is not set."));
        }

        Ok(())
    }
}
