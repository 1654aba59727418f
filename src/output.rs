//! Output channels and the execution response envelope
//!
//! Handlers never print directly: they emit lines through a caller-supplied
//! [`CommandOs`], which keeps execution pure over its inputs and lets tests
//! capture everything verbatim.

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Line-oriented output contract supplied by the caller
///
/// Emission order is preserved; implementations decide where lines land.
pub trait CommandOs {
    /// Emit a line on the standard output channel
    fn stdout(&mut self, line: &str);

    /// Emit a line on the diagnostic channel
    fn stderr(&mut self, line: &str);
}

/// Default output: process stdout/stderr, diagnostics in red
pub struct StdOs;

impl CommandOs for StdOs {
    fn stdout(&mut self, line: &str) {
        println!("{}", line);
    }

    fn stderr(&mut self, line: &str) {
        eprintln!("{}", line.red());
    }
}

/// Test double that captures emitted lines verbatim, in order
#[derive(Debug, Default)]
pub struct FakeOs {
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl FakeOs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommandOs for FakeOs {
    fn stdout(&mut self, line: &str) {
        self.stdout.push(line.to_string());
    }

    fn stderr(&mut self, line: &str) {
        self.stderr.push(line.to_string());
    }
}

/// Output envelope produced by a successful execution
///
/// Side effects go through [`CommandOs`]; the envelope carries what the
/// wrapping process layer maps onto its own channels, plus an optional
/// follow-up command line for the shell to run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutorResponse {
    /// Lines for standard output
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stdout: Vec<String>,

    /// Lines for diagnostic output
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stderr: Vec<String>,

    /// A follow-up command line to execute
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub executable: Option<Vec<String>>,
}

impl ExecutorResponse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a follow-up command line
    pub fn with_executable(mut self, tokens: Vec<String>) -> Self {
        self.executable = Some(tokens);
        self
    }
}
