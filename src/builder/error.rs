//! Build errors for the machine builder.

use crate::core::Action;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Machine is misconfigured: {}", join_issues(.0))]
    Misconfigured(Vec<ConfigIssue>),

    #[error("Invalid machine options: {0}")]
    InvalidOptions(String),
}

/// A single configuration problem found by strict validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigIssue {
    #[error("no binding for action '{0}'")]
    UnboundAction(Action),

    #[error("history limit is zero but ignored events are recorded")]
    EmptyHistoryWindow,
}

fn join_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
