//! SMTP mail delivery for composed digests.

use std::{ops::Deref, sync::Arc};

use anyhow::Context;
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{debug, instrument};

use crate::base::{
    config::Config,
    types::{EmailMessage, Res, Void},
};

// Traits.

/// Generic mail delivery trait that clients must implement.
///
/// Delivery is fire-and-forget: a successful submission to the relay is the
/// terminal success state, and no delivery confirmation is consumed.
#[async_trait]
pub trait GenericMailer: Send + Sync + 'static {
    /// Submit one composed email for delivery.
    async fn send(&self, message: &EmailMessage) -> Void;
}

// Structs.

/// Mailer for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Mailer {
    inner: Arc<dyn GenericMailer>,
}

impl Deref for Mailer {
    type Target = dyn GenericMailer;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl Mailer {
    /// Creates a mailer backed by an SMTP relay.
    pub fn smtp(config: &Config) -> Res<Self> {
        let mailer = SmtpMailer::new(config)?;
        Ok(Self { inner: Arc::new(mailer) })
    }

    /// Wraps any [`GenericMailer`] implementation.
    pub fn new(inner: Arc<dyn GenericMailer>) -> Self {
        Self { inner }
    }
}

// Specific implementations.

/// SMTP mailer implementation over lettre's async transport.
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &Config) -> Res<Self> {
        let from = config
            .smtp_from
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid sender mailbox: {}", config.smtp_from))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .with_context(|| format!("Failed to set up SMTP relay for {}", config.smtp_host))?
            .port(config.smtp_port);

        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }

    /// Assemble the wire-format message from a composed digest email.
    fn build_message(&self, message: &EmailMessage) -> Res<Message> {
        let to = message
            .recipient
            .parse::<Mailbox>()
            .with_context(|| format!("Invalid recipient address: {}", message.recipient))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())?;

        Ok(email)
    }
}

#[async_trait]
impl GenericMailer for SmtpMailer {
    #[instrument(skip_all, fields(recipient = %message.recipient))]
    async fn send(&self, message: &EmailMessage) -> Void {
        debug!("Submitting digest email to the SMTP relay");

        let email = self.build_message(message)?;

        self.transport.send(email).await.context("Failed to submit email to the SMTP relay")?;

        Ok(())
    }
}

// Tests.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::config::ConfigInner;

    fn test_mailer() -> SmtpMailer {
        let config = Config {
            inner: Arc::new(ConfigInner {
                smtp_host: "smtp.example.com".to_string(),
                smtp_from: "Digest Bot <digest@example.com>".to_string(),
                ..Default::default()
            }),
        };

        SmtpMailer::new(&config).unwrap()
    }

    // The pooled async transport needs an ambient Tokio runtime even at
    // construction time, so these run under `#[tokio::test]`.

    #[tokio::test]
    async fn build_message_accepts_a_valid_recipient() {
        let mailer = test_mailer();
        let message = EmailMessage {
            recipient: "reader@example.com".to_string(),
            subject: "Subject".to_string(),
            body: "Body".to_string(),
        };

        assert!(mailer.build_message(&message).is_ok());
    }

    #[tokio::test]
    async fn build_message_rejects_an_invalid_recipient() {
        let mailer = test_mailer();
        let message = EmailMessage {
            recipient: "not an address".to_string(),
            subject: "Subject".to_string(),
            body: "Body".to_string(),
        };

        assert!(mailer.build_message(&message).is_err());
    }

    #[tokio::test]
    async fn rejects_an_invalid_sender_mailbox() {
        let config = Config {
            inner: Arc::new(ConfigInner {
                smtp_host: "smtp.example.com".to_string(),
                smtp_from: "not a mailbox".to_string(),
                ..Default::default()
            }),
        };

        assert!(SmtpMailer::new(&config).is_err());
    }
}
