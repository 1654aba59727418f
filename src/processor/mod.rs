//! Token-consuming processors
//!
//! Positional arguments and named flags share one consumption contract: given
//! a slice of raw tokens, take the arity's worth of them and produce a typed
//! value. Execution and completion run the same bookkeeping; only failure
//! handling differs.

pub mod arg;
pub mod flag;
pub mod opts;

// Re-export main types
pub use arg::Arg;
pub use flag::Flag;
pub use opts::ArgOpt;

use serde::{Deserialize, Serialize};

use crate::error::{CmdError, UsageError};
use crate::value::{Value, ValueType};

/// Upper bound on tokens accepted beyond the required minimum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    /// Up to this many additional tokens
    Limited(usize),

    /// No upper bound; the processor consumes everything it is offered
    Unbounded,
}

/// Outcome of consuming tokens during execution
#[derive(Debug)]
pub struct Processed {
    /// The typed value produced from the consumed tokens
    pub value: Value,

    /// How many tokens were consumed
    pub consumed: usize,

    /// Whether the processor can accept no further tokens
    pub fully_consumed: bool,
}

/// Total capacity in tokens, `None` meaning unbounded
pub(crate) fn capacity(min_n: usize, extra: Bound) -> Option<usize> {
    match extra {
        Bound::Limited(n) => Some(min_n + n),
        Bound::Unbounded => None,
    }
}

/// Shared execution-path consumption
///
/// Consumes `min(min_n + extra, available)` tokens, or everything when
/// unbounded. Under-supplying the minimum is an error; overflow beyond
/// capacity is left for the caller to reject.
pub(crate) fn consume_execute(
    name: &str,
    value_type: ValueType,
    min_n: usize,
    extra: Bound,
    opts: &[ArgOpt],
    tokens: &[String],
) -> Result<Processed, CmdError> {
    let available = tokens.len();
    if available < min_n {
        return Err(UsageError::NotEnoughArgs(name.to_string()).into());
    }

    let cap = capacity(min_n, extra);
    let take = cap.map_or(available, |c| c.min(available));

    let value = if value_type.is_list() {
        let (value, errors) = value_type.parse_list(&tokens[..take]);
        if let Some(err) = errors.into_iter().next() {
            return Err(err.into());
        }
        value
    } else if take == 0 {
        value_type.zero()
    } else {
        value_type.parse_scalar(&tokens[0])?
    };

    for opt in opts {
        opt.check(value_type, &value)?;
    }

    Ok(Processed {
        value,
        consumed: take,
        fully_consumed: cap.is_some_and(|c| take >= c),
    })
}

/// Shared completion-path consumption: how many tokens this arity takes
///
/// Never fails; under-supply just consumes what is there.
pub(crate) fn consume_complete(min_n: usize, extra: Bound, tokens: &[String]) -> usize {
    capacity(min_n, extra).map_or(tokens.len(), |c| c.min(tokens.len()))
}

/// Best-effort value for the completion path: parse errors are discarded
pub(crate) fn consume_lenient(value_type: ValueType, tokens: &[String]) -> Value {
    if value_type.is_list() {
        let (value, _) = value_type.parse_list(tokens);
        value
    } else {
        match tokens.first() {
            Some(token) => value_type
                .parse_scalar(token)
                .unwrap_or_else(|_| value_type.zero()),
            None => value_type.zero(),
        }
    }
}

/// Uppercase a descriptor name for usage display, spaces to underscores
pub(crate) fn display_name(name: &str) -> String {
    name.to_uppercase().replace(' ', "_")
}
