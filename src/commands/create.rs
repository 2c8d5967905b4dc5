//! `kiln create [config]` — provision a stack from its template.

use anyhow::{Result, ensure};
use clap::Args;

use crate::app::AppContext;
use crate::application::ports::TemplateSource;
use crate::application::services::stack_create;
use crate::commands::{load_config, status};
use crate::infra::cloudformation::CloudFormationProvider;

/// Arguments for the create command.
#[derive(Args, Default)]
pub struct CreateArgs {
    /// Named configuration to load instead of the default
    pub config: Option<String>,
}

/// Run `kiln create [config]`.
///
/// Configuration and template problems are reported before the provider is
/// contacted, so a mistyped config name never costs a network round trip.
///
/// # Errors
///
/// Returns an error if configuration or template loading fails, any
/// provisioning step fails, or the provider reports no stacks afterwards.
pub async fn run(args: &CreateArgs, app: &AppContext) -> Result<()> {
    let config = load_config(&app.config_store, args.config.as_deref())?;
    let template = app.templates.load(&config.main.stack_name)?;

    let provider = CloudFormationProvider::connect(config.aws.region.clone()).await;
    let reporter = app.terminal_reporter();

    // Prompts go to stderr, like dialoguer's, so JSON stdout stays clean.
    let mut input = std::io::stdin().lock();
    let mut prompt = std::io::stderr();
    let stacks = stack_create::create_stack(
        &provider,
        &reporter,
        &mut input,
        &mut prompt,
        &config.main.stack_name,
        &template,
        config.wait.poll_interval(),
    )
    .await?;

    ensure!(
        !stacks.is_empty(),
        "Stack '{}' was created but the provider reported no stacks.",
        config.main.stack_name
    );

    if app.is_json() {
        println!("{}", serde_json::to_string_pretty(&stacks)?);
        return Ok(());
    }
    for stack in &stacks {
        status::print_descriptor(&app.output, stack);
    }
    Ok(())
}
