//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Constants ─────────────────────────────────────────────────────────────────

/// Message substituted when the provider returns neither a payload nor an
/// error. Adapters must never surface a bare empty response; this string is
/// the contractual stand-in.
pub const NIL_RESPONSE: &str = "the response was nil";

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration discovery.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Configuration '{name}' not found at {path}. Add the file or run without a name to use defaults."
    )]
    NotFound { name: String, path: String },
}

// ── Template errors ───────────────────────────────────────────────────────────

/// Errors related to locating stack templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error(
        "No template found for stack '{stack}' under {dir}. Expected {stack}.yaml, {stack}.yml, or {stack}.json."
    )]
    NotFound { stack: String, dir: String },
}

// ── Stack errors ──────────────────────────────────────────────────────────────

/// Errors raised while provisioning or inspecting a stack.
#[derive(Debug, Error)]
pub enum StackError {
    #[error("Template validation failed: {0}")]
    ValidationFailed(String),

    #[error("No value provided for required parameter '{key}'.")]
    MissingParameter { key: String },

    #[error("Stack creation failed: {0}")]
    CreateFailed(String),

    #[error("Failed to describe stack: {0}")]
    DescribeFailed(String),

    #[error("Failed to delete stack: {0}")]
    DeleteFailed(String),

    #[error("Failed to read parameter input: {0}")]
    Input(#[from] std::io::Error),
}
