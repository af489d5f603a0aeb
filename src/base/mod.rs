//! Core components, types, and utilities for digest-bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Prompt templates and date arithmetic for digest generation.
//! - Common types and result handling.

pub mod config;
pub mod prompts;
pub mod types;
