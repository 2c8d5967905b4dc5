//! `kiln delete [config]` — tear down the configured stack.

use std::time::Duration;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::CloudProvider;
use crate::application::services::wait;
use crate::commands::load_config;
use crate::domain::StackError;
use crate::infra::cloudformation::CloudFormationProvider;
use crate::output::{OutputContext, progress};

/// Arguments for the delete command.
#[derive(Args, Default)]
pub struct DeleteArgs {
    /// Named configuration to load instead of the default
    pub config: Option<String>,
}

/// Run `kiln delete [config]`.
///
/// # Errors
///
/// Returns an error if configuration loading fails, the confirmation prompt
/// fails, or the provider rejects the delete call.
pub async fn run(args: &DeleteArgs, app: &AppContext) -> Result<()> {
    let config = load_config(&app.config_store, args.config.as_deref())?;
    let name = &config.main.stack_name;

    let proceed = app.non_interactive || app.confirm(&format!("Delete stack '{name}'?"), false)?;
    if !proceed {
        app.output.info("Cancelled.");
        return Ok(());
    }

    let provider = CloudFormationProvider::connect(config.aws.region.clone()).await;
    delete_and_wait(&provider, &app.output, name, config.wait.poll_interval()).await
}

/// Delete `name` and wait until the provider stops reporting work on it.
///
/// # Errors
///
/// Returns an error if the provider rejects the delete call. The wait
/// itself cannot fail; a stack the provider no longer knows is done.
pub async fn delete_and_wait(
    provider: &impl CloudProvider,
    output: &OutputContext,
    name: &str,
    poll_interval: Duration,
) -> Result<()> {
    provider
        .delete_stack(name)
        .await
        .into_result(StackError::DeleteFailed)?;

    let pb = output
        .show_progress()
        .then(|| progress::spinner(&format!("Deleting stack '{name}'...")));

    wait::wait_for_completion(provider, name, poll_interval).await;

    let done = format!("Stack '{name}' removed.");
    match pb {
        Some(pb) => progress::finish_ok(&pb, &done),
        None => output.success(&done),
    }
    Ok(())
}
