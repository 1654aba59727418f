//! The command tree
//!
//! Two node kinds resolve both execution and completion from one declarative
//! model: a [`Branch`] routes by subcommand name and a [`Terminal`] binds
//! tokens to descriptors and invokes a handler. Trees are built once and are
//! read-only afterwards.

mod complete;
mod execute;

use std::collections::HashMap;

use crate::output::{CommandOs, ExecutorResponse};
use crate::processor::{Arg, Flag};
use crate::value::Value;

/// A terminal command's handler
///
/// Receives the fully resolved argument/flag mapping and the output channels.
/// Handlers needing mutable state across calls own it themselves (e.g. an
/// `Rc<RefCell<..>>` captured by the closure); no synchronization is provided.
pub type Handler = Box<dyn Fn(&CommandData, &mut dyn CommandOs) -> anyhow::Result<ExecutorResponse>>;

/// Resolved arguments and flags, keyed by descriptor name
#[derive(Debug, Clone, Default)]
pub struct CommandData {
    pub args: HashMap<String, Value>,
    pub flags: HashMap<String, Value>,
}

impl CommandData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    pub fn flag(&self, name: &str) -> Option<&Value> {
        self.flags.get(name)
    }
}

/// A node in the command tree
pub enum Command {
    Branch(Branch),
    Terminal(Terminal),
}

impl Command {
    /// Route the token stream to a handler and run it
    pub fn execute(
        &self,
        tokens: &[String],
        os: &mut dyn CommandOs,
    ) -> crate::error::Result<ExecutorResponse> {
        match self {
            Command::Branch(branch) => branch.execute_tokens(tokens, os),
            Command::Terminal(terminal) => terminal.execute_tokens(tokens, os),
        }
    }

    /// Suggestions for the final token of the stream
    ///
    /// The final token is the one being completed; an empty stream is treated
    /// as one empty token. Results are unsorted and unquoted at this layer.
    pub fn complete(&self, tokens: &[String]) -> Vec<String> {
        if tokens.is_empty() {
            let padded = [String::new()];
            return self.complete_tokens(&padded);
        }
        self.complete_tokens(tokens)
    }

    pub(crate) fn complete_tokens(&self, tokens: &[String]) -> Vec<String> {
        match self {
            Command::Branch(branch) => branch.complete_tokens(tokens),
            Command::Terminal(terminal) => terminal.complete_tokens(tokens),
        }
    }

    /// Display tokens describing how to invoke this subtree
    pub fn usage(&self) -> Vec<String> {
        match self {
            Command::Branch(branch) => branch.usage(),
            Command::Terminal(terminal) => terminal.usage(),
        }
    }
}

impl From<Branch> for Command {
    fn from(branch: Branch) -> Self {
        Command::Branch(branch)
    }
}

impl From<Terminal> for Command {
    fn from(terminal: Terminal) -> Self {
        Command::Terminal(terminal)
    }
}

/// A routing node: named children plus an optional fallback terminal
///
/// A branch with no matching child and no fallback is a dead end: execution
/// fails and completion yields nothing.
pub struct Branch {
    children: HashMap<String, Command>,
    fallback: Option<Box<Terminal>>,
    suppress_subcommands: bool,
}

impl Branch {
    pub fn new() -> Self {
        Branch {
            children: HashMap::new(),
            fallback: None,
            suppress_subcommands: false,
        }
    }

    /// Add a child command reachable by name
    pub fn with_child(mut self, name: impl Into<String>, child: impl Into<Command>) -> Self {
        self.children.insert(name.into(), child.into());
        self
    }

    /// Terminal to dispatch to when no child matches
    pub fn with_fallback(mut self, terminal: Terminal) -> Self {
        self.fallback = Some(Box::new(terminal));
        self
    }

    /// Leave subcommand names out of completion suggestions
    pub fn without_subcommand_completion(mut self) -> Self {
        self.suppress_subcommands = true;
        self
    }

    pub(crate) fn children(&self) -> &HashMap<String, Command> {
        &self.children
    }

    pub(crate) fn fallback(&self) -> Option<&Terminal> {
        self.fallback.as_deref()
    }

    pub(crate) fn suppresses_subcommands(&self) -> bool {
        self.suppress_subcommands
    }

    /// Display tokens: sorted subcommand alternates, then the fallback's own
    /// usage when one exists
    pub fn usage(&self) -> Vec<String> {
        let mut tokens = Vec::new();
        if !self.children.is_empty() {
            let mut names: Vec<&str> = self.children.keys().map(String::as_str).collect();
            names.sort_unstable();
            tokens.push(names.join("|"));
        }
        if let Some(fallback) = &self.fallback {
            tokens.extend(fallback.usage());
        }
        tokens
    }
}

impl Default for Branch {
    fn default() -> Self {
        Self::new()
    }
}

/// A leaf node: ordered positional args, flags, and a handler
///
/// Argument order defines positional binding order and is fixed at
/// construction.
pub struct Terminal {
    args: Vec<Arg>,
    flags: Vec<Flag>,
    executor: Option<Handler>,
}

impl Terminal {
    pub fn new() -> Self {
        Terminal {
            args: Vec::new(),
            flags: Vec::new(),
            executor: None,
        }
    }

    /// Append a positional argument; declaration order is binding order
    pub fn with_arg(mut self, arg: Arg) -> Self {
        self.args.push(arg);
        self
    }

    /// Register a flag, recognized anywhere in the token stream
    pub fn with_flag(mut self, flag: Flag) -> Self {
        self.flags.push(flag);
        self
    }

    /// Set the handler invoked once tokens are resolved
    pub fn with_executor(
        mut self,
        executor: impl Fn(&CommandData, &mut dyn CommandOs) -> anyhow::Result<ExecutorResponse>
            + 'static,
    ) -> Self {
        self.executor = Some(Box::new(executor));
        self
    }

    pub(crate) fn args(&self) -> &[Arg] {
        &self.args
    }

    pub(crate) fn flags(&self) -> &[Flag] {
        &self.flags
    }

    pub(crate) fn executor(&self) -> Option<&Handler> {
        self.executor.as_ref()
    }

    /// Display tokens: positional args in order, then flags
    pub fn usage(&self) -> Vec<String> {
        let mut tokens: Vec<String> = self.args.iter().flat_map(|a| a.usage_tokens()).collect();
        tokens.extend(self.flags.iter().map(|f| f.usage_token()));
        tokens
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::Bound;

    #[test]
    fn test_usage_terminal() {
        let terminal = Terminal::new()
            .with_arg(Arg::string("name", true))
            .with_arg(Arg::string("nickname", false))
            .with_arg(Arg::string_list("rest", 1, Bound::Unbounded))
            .with_flag(Flag::string("state", Some('s')));
        assert_eq!(
            terminal.usage(),
            vec!["NAME", "[NICKNAME]", "REST", "[REST ...]", "--state|-s <STR>"]
        );
    }

    #[test]
    fn test_usage_branch_sorts_children() {
        let branch = Branch::new()
            .with_child("zeta", Terminal::new())
            .with_child("alpha", Terminal::new());
        assert_eq!(branch.usage(), vec!["alpha|zeta"]);
    }

    #[test]
    fn test_usage_branch_with_fallback() {
        let branch = Branch::new()
            .with_child("sub", Terminal::new())
            .with_fallback(Terminal::new().with_arg(Arg::string("path", true)));
        assert_eq!(branch.usage(), vec!["sub", "PATH"]);
    }

    #[test]
    fn test_command_data_lookup() {
        let mut data = CommandData::new();
        data.args.insert("k".to_string(), Value::int(1));
        assert_eq!(data.arg("k").and_then(Value::as_int), Some(1));
        assert!(data.arg("missing").is_none());
        assert!(data.flag("k").is_none());
    }
}
