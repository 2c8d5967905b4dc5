//! `kiln status [config]` — describe the configured stack.

use anyhow::{Result, bail};
use chrono::{DateTime, Utc};
use clap::Args;
use owo_colors::OwoColorize as _;
use owo_colors::Style;

use crate::app::AppContext;
use crate::application::ports::StackOperations;
use crate::commands::load_config;
use crate::domain::{StackDescriptor, StackError, StackStatus};
use crate::infra::cloudformation::CloudFormationProvider;
use crate::output::{OutputContext, Styles};

/// Arguments for the status command.
#[derive(Args, Default)]
pub struct StatusArgs {
    /// Named configuration to load instead of the default
    pub config: Option<String>,
}

/// Run `kiln status [config]`.
///
/// # Errors
///
/// Returns an error if configuration loading fails, the describe call
/// fails, or the provider reports no stack under the configured name.
pub async fn run(args: &StatusArgs, app: &AppContext) -> Result<()> {
    let config = load_config(&app.config_store, args.config.as_deref())?;
    let provider = CloudFormationProvider::connect(config.aws.region.clone()).await;

    let stacks = provider
        .describe_stacks(&config.main.stack_name)
        .await
        .into_result(StackError::DescribeFailed)?;

    if stacks.is_empty() {
        bail!("No stack named '{}' was found.", config.main.stack_name);
    }

    if app.is_json() {
        println!("{}", serde_json::to_string_pretty(&stacks)?);
        return Ok(());
    }
    for stack in &stacks {
        print_descriptor(&app.output, stack);
    }
    Ok(())
}

/// Render one stack descriptor as a header plus key-value block.
pub fn print_descriptor(ctx: &OutputContext, stack: &StackDescriptor) {
    ctx.header(&stack.name);
    let status = format!(
        "{}",
        stack
            .status
            .as_str()
            .style(status_style(&ctx.styles, &stack.status))
    );
    ctx.kv("Status", &status);
    if !stack.id.is_empty() {
        ctx.kv("ID", &stack.id);
    }
    if let Some(created) = stack.created_at {
        ctx.kv("Created", &format_created(created));
    }
    if !stack.outputs.is_empty() {
        ctx.header("Outputs");
        for output in &stack.outputs {
            ctx.kv(&output.key, &output.value);
        }
    }
    if stack.status.is_failure() {
        ctx.warn(&format!(
            "Last operation did not succeed ({}).",
            stack.status
        ));
    }
}

/// Style for rendering a stack status: red for failures, yellow for
/// in-progress, green otherwise.
#[must_use]
pub fn status_style(styles: &Styles, status: &StackStatus) -> Style {
    if status.is_failure() {
        styles.error
    } else if status.is_in_progress() {
        styles.warning
    } else {
        styles.success
    }
}

/// Format a creation timestamp for human output.
#[must_use]
pub fn format_created(created: DateTime<Utc>) -> String {
    created.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
