//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into identity-level use-cases.
//! - Keep CLI/UI layers decoupled from storage details.

pub mod account_service;
