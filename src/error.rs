//! Error types for cmdtree

use crate::value::ValueType;
use thiserror::Error;

/// Result type alias for cmdtree operations
pub type Result<T> = std::result::Result<T, CmdError>;

/// Main error type for command execution
///
/// Completion never produces these: every ambiguity or parse failure on the
/// completion path degrades to "no suggestions" instead.
#[derive(Error, Debug)]
pub enum CmdError {
    /// Malformed input (missing arguments, unknown subcommands, bad parses)
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Validator failures and misconfigured validators
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Failure reported by a terminal command's handler
    #[error("handler error: {0}")]
    Handler(#[from] anyhow::Error),
}

/// Usage errors: the token stream did not satisfy the command tree
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("no argument provided for \"{0}\"")]
    MissingArg(String),

    #[error("not enough arguments for \"{0}\"")]
    NotEnoughArgs(String),

    #[error("not enough arguments for flag \"{0}\"")]
    NotEnoughFlagArgs(String),

    #[error("extra unknown args ({0:?})")]
    ExtraArgs(Vec<String>),

    #[error("unknown subcommand \"{0}\"")]
    UnknownSubcommand(String),

    #[error("more args required")]
    MoreArgsRequired,

    #[error("no executor defined")]
    NoExecutor,

    #[error("value {value:?} is not a valid {expected}")]
    BadScalar { value: String, expected: ValueType },
}

/// Validator errors raised while checking a produced value
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("option can only be bound to arguments with type {expected}")]
    TypeMismatch { expected: String },

    #[error("validation failed: {0}")]
    Failed(String),
}

/// Specialized result type for token-to-value conversions
pub type UsageResult<T> = std::result::Result<T, UsageError>;

/// Specialized result type for validator checks
pub type ValidationResult<T> = std::result::Result<T, ValidationError>;

/// Helper function to determine if an error is a usage error
/// (reported to the user as malformed input rather than a bug)
pub fn is_usage_error(err: &CmdError) -> bool {
    matches!(err, CmdError::Usage(_))
}
