//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for the two external collaborators of
//! digest-bot:
//! - LLM services (Gemini)
//! - Mail delivery (SMTP)
//!
//! Each service module defines both a generic trait and a concrete
//! implementation, allowing for extensibility and easy testing.

pub mod llm;
pub mod mailer;
