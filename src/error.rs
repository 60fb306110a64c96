//! Error types

use crate::state::Mode;

/// Rejected timer configuration
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("{0} duration must be at least one minute")]
    NonPositiveDuration(Mode),

    #[error("long break interval must be at least one session")]
    NonPositiveLongBreakInterval,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("countdown engine is no longer running")]
    Closed,
}
