//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use anyhow::Result;

use crate::domain::{
    KilnConfig, NIL_RESPONSE, ParameterDecl, ResolvedParameter, StackDescriptor, Template,
};

// ── Provider responses ────────────────────────────────────────────────────────

/// Outcome of a single provider call.
///
/// A provider reports exactly one of three things: a payload, an error
/// message, or nothing at all. `Empty` is a first-class outcome so every
/// caller decides what an absent body means instead of dereferencing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResponse<T> {
    /// The call succeeded and returned a body.
    Payload(T),
    /// The call failed; the provider's message, verbatim.
    Error(String),
    /// The call neither failed nor returned a body.
    Empty,
}

impl<T> ApiResponse<T> {
    /// Collapse into a `Result`, wrapping the failure message with `wrap`.
    ///
    /// `Empty` becomes an error carrying [`NIL_RESPONSE`].
    ///
    /// # Errors
    ///
    /// Returns `wrap(message)` for `Error` and `wrap(NIL_RESPONSE)` for
    /// `Empty`.
    pub fn into_result<E>(self, wrap: impl FnOnce(String) -> E) -> Result<T, E> {
        match self {
            Self::Payload(value) => Ok(value),
            Self::Error(message) => Err(wrap(message)),
            Self::Empty => Err(wrap(NIL_RESPONSE.to_string())),
        }
    }
}

// ── Cloud provider ports ──────────────────────────────────────────────────────

/// The three stack operations every provider backend must implement.
#[allow(async_fn_in_trait)]
pub trait StackOperations {
    /// Ask the provider to validate `template` and report the parameters it
    /// declares.
    async fn validate_template(&self, template: &Template) -> ApiResponse<Vec<ParameterDecl>>;

    /// Begin creating stack `name` from `template` with the given parameter
    /// values. Returns the provider-assigned stack identifier; completion is
    /// observed via `describe_stacks`.
    async fn create_stack(
        &self,
        name: &str,
        template: &Template,
        parameters: &[ResolvedParameter],
    ) -> ApiResponse<String>;

    /// Describe the stacks matching `name`.
    async fn describe_stacks(&self, name: &str) -> ApiResponse<Vec<StackDescriptor>>;
}

/// Stack teardown.
#[allow(async_fn_in_trait)]
pub trait StackRemoval {
    /// Begin deleting stack `name`. Completion is observed via
    /// `describe_stacks`.
    async fn delete_stack(&self, name: &str) -> ApiResponse<()>;
}

/// Composite trait — any type implementing both sub-traits is a `CloudProvider`.
pub trait CloudProvider: StackOperations + StackRemoval {}

/// Blanket implementation: any type implementing both sub-traits is a `CloudProvider`.
impl<T> CloudProvider for T where T: StackOperations + StackRemoval {}

// ── Config and template ports ─────────────────────────────────────────────────

/// Abstracts configuration loading so commands can be tested without a real
/// home directory.
pub trait ConfigStore {
    /// Load the default configuration. A missing file yields defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load(&self) -> Result<KilnConfig>;

    /// Load the named configuration `<name>.yaml`. Unlike [`load`], a
    /// missing file is an error.
    ///
    /// [`load`]: ConfigStore::load
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::ConfigError::NotFound`] if the file does not
    /// exist, or an error if it cannot be read or parsed.
    fn load_named(&self, name: &str) -> Result<KilnConfig>;
}

/// Abstracts template lookup so commands can be tested without a real home
/// directory.
pub trait TemplateSource {
    /// Read the template for `stack`, probing the supported extensions.
    ///
    /// # Errors
    ///
    /// Returns [`crate::domain::TemplateError::NotFound`] if no candidate
    /// file exists.
    fn load(&self, stack: &str) -> Result<Template>;
}

// ── Progress reporting port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
}

// ── Unit tests ────────────────────────────────────────────────────────────────
