//! Unit tests for the delete command's provider flow.
//!
//! `delete_and_wait` is exercised directly with mocked providers and a quiet
//! output context; confirmation prompting is covered at the `AppContext`
//! level and skipped here.

#![allow(clippy::expect_used)]

use std::time::Duration;

use kiln_cli::commands::delete::delete_and_wait;
use kiln_cli::output::OutputContext;

use crate::mocks::{DeleteFails, HappyProvider, StackGoneAfterDelete};

fn ctx() -> OutputContext {
    OutputContext::new(true, true)
}

#[tokio::test]
async fn removes_the_stack_and_waits() {
    let provider = HappyProvider::new();

    delete_and_wait(&provider, &ctx(), "TestStack", Duration::ZERO)
        .await
        .expect("delete should succeed");
}

#[tokio::test]
async fn a_vanished_stack_counts_as_removed() {
    // Once the stack is gone, describe_stacks errors; the wait treats that
    // as completion rather than a failure.
    let provider = StackGoneAfterDelete;

    delete_and_wait(&provider, &ctx(), "TestStack", Duration::ZERO)
        .await
        .expect("a stack the provider no longer knows is done");
}

#[tokio::test]
async fn a_rejected_delete_surfaces_the_provider_message() {
    let err = delete_and_wait(&DeleteFails, &ctx(), "TestStack", Duration::ZERO)
        .await
        .expect_err("rejection must propagate");

    let message = err.to_string();
    assert!(message.contains("Failed to delete stack"), "{message}");
    assert!(message.contains("TerminationProtection"), "{message}");
}
