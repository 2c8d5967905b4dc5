//! Domain layer — pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod stack;
pub mod template;

#[allow(unused_imports)]
pub use config::{AwsConfig, KilnConfig, MainConfig, WaitConfig};
#[allow(unused_imports)]
pub use error::{ConfigError, NIL_RESPONSE, StackError, TemplateError};
#[allow(unused_imports)]
pub use stack::{ParameterDecl, ResolvedParameter, StackDescriptor, StackOutput, StackStatus};
#[allow(unused_imports)]
pub use template::Template;
