//! Infrastructure implementation of the cloud provider ports over the AWS
//! CloudFormation API.
//!
//! Every operation maps the SDK's outcome onto [`ApiResponse`]: a usable
//! body becomes `Payload`, a failed call becomes `Error` carrying the
//! service's own message, and a success with no body becomes `Empty`.

use aws_config::BehaviorVersion;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_cloudformation::Client;
use aws_sdk_cloudformation::config::Region;
use aws_sdk_cloudformation::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_cloudformation::types;

use crate::application::ports::{ApiResponse, StackOperations, StackRemoval};
use crate::domain::{
    ParameterDecl, ResolvedParameter, StackDescriptor, StackOutput, StackStatus, Template,
};

/// Region used when neither the configuration nor the environment names one.
const FALLBACK_REGION: &str = "us-east-1";

/// Production provider backed by the CloudFormation API.
pub struct CloudFormationProvider {
    client: Client,
}

impl CloudFormationProvider {
    /// Build a client from the default credential and region chain, with
    /// `region` (from configuration) taking precedence when present.
    pub async fn connect(region: Option<String>) -> Self {
        let region_provider = RegionProviderChain::first_try(region.map(Region::new))
            .or_default_provider()
            .or_else(Region::new(FALLBACK_REGION));
        let sdk_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region_provider)
            .load()
            .await;
        Self {
            client: Client::new(&sdk_config),
        }
    }
}

impl StackOperations for CloudFormationProvider {
    async fn validate_template(&self, template: &Template) -> ApiResponse<Vec<ParameterDecl>> {
        match self
            .client
            .validate_template()
            .template_body(template.body())
            .send()
            .await
        {
            // An absent parameter list is a valid template that declares
            // no parameters, not a missing body.
            Ok(out) => ApiResponse::Payload(
                out.parameters
                    .unwrap_or_default()
                    .into_iter()
                    .map(decl_from)
                    .collect(),
            ),
            Err(err) => ApiResponse::Error(provider_error(err)),
        }
    }

    async fn create_stack(
        &self,
        name: &str,
        template: &Template,
        parameters: &[ResolvedParameter],
    ) -> ApiResponse<String> {
        let mut req = self
            .client
            .create_stack()
            .stack_name(name)
            .template_body(template.body());
        for parameter in parameters {
            req = req.parameters(
                types::Parameter::builder()
                    .parameter_key(&parameter.key)
                    .parameter_value(&parameter.value)
                    .build(),
            );
        }
        match req.send().await {
            Ok(out) => match out.stack_id {
                Some(id) => ApiResponse::Payload(id),
                None => ApiResponse::Empty,
            },
            Err(err) => ApiResponse::Error(provider_error(err)),
        }
    }

    async fn describe_stacks(&self, name: &str) -> ApiResponse<Vec<StackDescriptor>> {
        match self
            .client
            .describe_stacks()
            .stack_name(name)
            .send()
            .await
        {
            Ok(out) => match out.stacks {
                Some(stacks) => {
                    ApiResponse::Payload(stacks.into_iter().map(descriptor_from).collect())
                }
                None => ApiResponse::Empty,
            },
            Err(err) => ApiResponse::Error(provider_error(err)),
        }
    }
}

impl StackRemoval for CloudFormationProvider {
    async fn delete_stack(&self, name: &str) -> ApiResponse<()> {
        match self.client.delete_stack().stack_name(name).send().await {
            Ok(_) => ApiResponse::Payload(()),
            Err(err) => ApiResponse::Error(provider_error(err)),
        }
    }
}

// ── SDK type mapping ──────────────────────────────────────────────────────────

fn decl_from(parameter: types::TemplateParameter) -> ParameterDecl {
    ParameterDecl {
        key: parameter.parameter_key.unwrap_or_default(),
        default_value: parameter.default_value,
        description: parameter.description,
        sensitive: parameter.no_echo.unwrap_or(false),
    }
}

fn descriptor_from(stack: types::Stack) -> StackDescriptor {
    let status = StackStatus::from(
        stack
            .stack_status
            .as_ref()
            .map_or("", types::StackStatus::as_str),
    );
    let outputs = stack
        .outputs
        .unwrap_or_default()
        .into_iter()
        .map(|output| StackOutput {
            key: output.output_key.unwrap_or_default(),
            value: output.output_value.unwrap_or_default(),
            description: output.description,
        })
        .collect();
    // Out-of-range timestamps cannot be represented; drop them rather
    // than fail the whole describe.
    let created_at = stack
        .creation_time
        .and_then(|time| chrono::DateTime::from_timestamp(time.secs(), time.subsec_nanos()));

    StackDescriptor {
        name: stack.stack_name.unwrap_or_default(),
        id: stack.stack_id.unwrap_or_default(),
        status,
        outputs,
        created_at,
    }
}

/// The service's own message when it sent one, otherwise the full error
/// chain. `SdkError`'s bare `Display` is a one-word category and useless
/// to a user.
fn provider_error<E>(err: SdkError<E>) -> String
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let message = match &err {
        SdkError::ServiceError(context) => context.err().meta().message().map(ToString::to_string),
        _ => None,
    };
    message.unwrap_or_else(|| DisplayErrorContext(&err).to_string())
}
