//! Application service — stack creation use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits and reader/writer seams.

use std::io::{BufRead, Write};
use std::time::Duration;

use crate::application::ports::{ProgressReporter, StackOperations};
use crate::application::services::{params, wait};
use crate::domain::{StackDescriptor, StackError, Template};

/// Provision a stack end to end: validate the template, resolve its
/// parameters interactively, start creation, wait for the provider to
/// settle, and describe the result.
///
/// The returned descriptors are whatever the final describe reported —
/// possibly none. Deciding whether an empty answer is acceptable is the
/// caller's policy, not this service's.
///
/// # Errors
///
/// Returns [`StackError::ValidationFailed`] when the provider rejects the
/// template, [`StackError::MissingParameter`] or [`StackError::Input`] from
/// parameter resolution, [`StackError::CreateFailed`] when creation cannot
/// start, and [`StackError::DescribeFailed`] when the final describe fails.
pub async fn create_stack(
    provider: &impl StackOperations,
    reporter: &impl ProgressReporter,
    input: &mut impl BufRead,
    prompt: &mut impl Write,
    name: &str,
    template: &Template,
    poll_interval: Duration,
) -> Result<Vec<StackDescriptor>, StackError> {
    reporter.step("Validating template...");
    let declared = provider
        .validate_template(template)
        .await
        .into_result(StackError::ValidationFailed)?;

    let parameters = params::resolve_parameters(input, prompt, &declared)?;

    reporter.step(&format!("Creating stack '{name}'..."));
    let stack_id = provider
        .create_stack(name, template, &parameters)
        .await
        .into_result(StackError::CreateFailed)?;
    reporter.success(&format!("Creation started (stack ID: {stack_id})"));

    reporter.step("Waiting for the stack to settle...");
    wait::wait_for_completion(provider, name, poll_interval).await;

    let stacks = provider
        .describe_stacks(name)
        .await
        .into_result(StackError::DescribeFailed)?;

    if let Some(stack) = stacks.first() {
        if stack.status.is_failure() {
            reporter.warn(&format!("Stack settled in {}", stack.status));
        }
    }

    Ok(stacks)
}
