//! cmdtree - declarative tree-structured command-line interfaces
//!
//! A command tree is built once from [`Branch`] and [`Terminal`] nodes; the
//! library then drives both execution and shell tab-completion from that one
//! declarative model: it splits a raw shell-like token stream into logical
//! tokens, routes them to a terminal handler, converts them into typed,
//! validated values, and produces completion suggestions for any prefix of a
//! partially typed line.

// Public modules
pub mod command;
pub mod complete;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod processor;
pub mod tokenize;
pub mod value;

// Re-export commonly used types
pub use command::{Branch, Command, CommandData, Handler, Terminal};
pub use complete::{Completor, Fetcher, FileFetcher, ListFetcher};
pub use dispatch::{autocomplete, execute};
pub use error::{CmdError, Result, UsageError, ValidationError};
pub use output::{CommandOs, ExecutorResponse, FakeOs, StdOs};
pub use processor::{Arg, ArgOpt, Bound, Flag};
pub use value::{Value, ValueType};

/// Current version of cmdtree
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
