//! Application service — completion waiting.
//!
//! Imports only from `crate::application::ports` and `crate::domain`.

use std::time::Duration;

use crate::application::ports::{ApiResponse, StackOperations};

/// Poll `describe_stacks` until no stack for `name` reports an in-progress
/// status.
///
/// Terminates silently on a provider error or an absent payload: transient
/// describe failures surface on the caller's own follow-up describe, and a
/// stack the provider no longer reports is a finished delete. An empty
/// stack list is terminal for the same reason.
pub async fn wait_for_completion(
    provider: &impl StackOperations,
    name: &str,
    poll_interval: Duration,
) {
    loop {
        match provider.describe_stacks(name).await {
            ApiResponse::Payload(stacks) => {
                if !stacks.iter().any(|s| s.status.is_in_progress()) {
                    return;
                }
            }
            ApiResponse::Error(_) | ApiResponse::Empty => return,
        }
        tokio::time::sleep(poll_interval).await;
    }
}
