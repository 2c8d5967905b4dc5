//! Unit tests for the `stack_create` application service.
//!
//! Verifies that `create_stack()` routes every provider interaction through
//! the injected `StackOperations` port and stops at the first failing step.

#![allow(clippy::expect_used)]

use std::time::Duration;

use kiln_cli::application::ports::{ApiResponse, StackOperations};
use kiln_cli::application::services::stack_create::create_stack;
use kiln_cli::domain::{
    ParameterDecl, ResolvedParameter, StackDescriptor, StackError, StackStatus, Template,
};

use crate::helpers::{NoopReporter, RecordingReporter, decl, descriptor, template};
use crate::mocks::{CreateReturnsEmpty, DescribesNothing, HappyProvider, ValidationFails};

// ── Happy path ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn returns_the_settled_stack() {
    let provider = HappyProvider::new();
    let mut input: &[u8] = b"";
    let mut prompt = Vec::new();

    let stacks = create_stack(
        &provider,
        &NoopReporter,
        &mut input,
        &mut prompt,
        "TestStack",
        &template(),
        Duration::ZERO,
    )
    .await
    .expect("creation should succeed");

    assert_eq!(stacks.len(), 1);
    assert_eq!(stacks[0].name, "TestStack");
    assert_eq!(stacks[0].id, "DummyID");
    assert_eq!(stacks[0].status, StackStatus::CreateComplete);
}

#[tokio::test]
async fn resolved_parameters_reach_the_create_call() {
    let provider = HappyProvider::with_declared(vec![
        decl("KeyName", None),
        decl("Region", Some("us-east-1")),
    ]);
    // Type the first value, take the default for the second.
    let mut input: &[u8] = b"deployer\n\n";
    let mut prompt = Vec::new();

    create_stack(
        &provider,
        &NoopReporter,
        &mut input,
        &mut prompt,
        "TestStack",
        &template(),
        Duration::ZERO,
    )
    .await
    .expect("creation should succeed");

    let sent = provider.created_with();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].key, "KeyName");
    assert_eq!(sent[0].value, "deployer");
    assert_eq!(sent[1].key, "Region");
    assert_eq!(sent[1].value, "us-east-1");
}

#[tokio::test]
async fn reporter_sees_each_phase() {
    let provider = HappyProvider::new();
    let reporter = RecordingReporter::new();
    let mut input: &[u8] = b"";
    let mut prompt = Vec::new();

    create_stack(
        &provider,
        &reporter,
        &mut input,
        &mut prompt,
        "TestStack",
        &template(),
        Duration::ZERO,
    )
    .await
    .expect("creation should succeed");

    let steps = reporter.steps();
    assert!(steps.iter().any(|m| m.contains("Validating")), "{steps:?}");
    assert!(
        steps.iter().any(|m| m.contains("Creating stack 'TestStack'")),
        "{steps:?}"
    );
    assert!(steps.iter().any(|m| m.contains("Waiting")), "{steps:?}");
    assert!(
        reporter
            .successes()
            .iter()
            .any(|m| m.contains("stack ID: DummyID")),
        "success should carry the stack ID"
    );
    assert!(reporter.warnings().is_empty());
}

// ── Validation failure ───────────────────────────────────────────────────────

#[tokio::test]
async fn rejected_template_stops_before_creation() {
    // ValidationFails panics if create or describe is reached.
    let mut input: &[u8] = b"";
    let mut prompt = Vec::new();

    let err = create_stack(
        &ValidationFails,
        &NoopReporter,
        &mut input,
        &mut prompt,
        "TestStack",
        &template(),
        Duration::ZERO,
    )
    .await
    .expect_err("validation failure must propagate");

    assert!(
        matches!(&err, StackError::ValidationFailed(m) if m.contains("Template format error")),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn missing_parameter_stops_before_creation() {
    let provider = HappyProvider::with_declared(vec![decl("KeyName", None)]);
    let mut input: &[u8] = b"\n";
    let mut prompt = Vec::new();

    let err = create_stack(
        &provider,
        &NoopReporter,
        &mut input,
        &mut prompt,
        "TestStack",
        &template(),
        Duration::ZERO,
    )
    .await
    .expect_err("missing parameter must propagate");

    assert!(matches!(&err, StackError::MissingParameter { key } if key == "KeyName"));
    assert!(
        provider.created_with().is_empty(),
        "create_stack must not be called"
    );
}

// ── Provider failures ────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_create_response_is_a_creation_failure() {
    let mut input: &[u8] = b"";
    let mut prompt = Vec::new();

    let err = create_stack(
        &CreateReturnsEmpty,
        &NoopReporter,
        &mut input,
        &mut prompt,
        "TestStack",
        &template(),
        Duration::ZERO,
    )
    .await
    .expect_err("empty response must propagate");

    assert!(
        matches!(&err, StackError::CreateFailed(m) if m == "the response was nil"),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn empty_describe_result_is_returned_to_the_caller() {
    // Whether "no stacks" is acceptable is the caller's policy.
    let mut input: &[u8] = b"";
    let mut prompt = Vec::new();

    let stacks = create_stack(
        &DescribesNothing,
        &NoopReporter,
        &mut input,
        &mut prompt,
        "TestStack",
        &template(),
        Duration::ZERO,
    )
    .await
    .expect("empty describe is not an error here");

    assert!(stacks.is_empty());
}

// ── Settling in a failure state ──────────────────────────────────────────────

/// Creation starts fine but the stack settles in `ROLLBACK_COMPLETE`.
struct RollsBack;

impl StackOperations for RollsBack {
    async fn validate_template(&self, _: &Template) -> ApiResponse<Vec<ParameterDecl>> {
        ApiResponse::Payload(Vec::new())
    }
    async fn create_stack(
        &self,
        _: &str,
        _: &Template,
        _: &[ResolvedParameter],
    ) -> ApiResponse<String> {
        ApiResponse::Payload("DummyID".to_string())
    }
    async fn describe_stacks(&self, name: &str) -> ApiResponse<Vec<StackDescriptor>> {
        ApiResponse::Payload(vec![descriptor(name, "ROLLBACK_COMPLETE")])
    }
}

#[tokio::test]
async fn settling_in_rollback_is_reported_not_fatal() {
    let reporter = RecordingReporter::new();
    let mut input: &[u8] = b"";
    let mut prompt = Vec::new();

    let stacks = create_stack(
        &RollsBack,
        &reporter,
        &mut input,
        &mut prompt,
        "TestStack",
        &template(),
        Duration::ZERO,
    )
    .await
    .expect("a rolled-back stack is still described");

    assert_eq!(stacks[0].status, StackStatus::RollbackComplete);
    assert!(
        reporter
            .warnings()
            .iter()
            .any(|m| m.contains("ROLLBACK_COMPLETE")),
        "warning should name the settled status"
    );
}
