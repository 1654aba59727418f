//! Tree execution
//!
//! Terminal execution runs in two phases: flags are extracted from the token
//! stream wherever they appear, then the flagless remainder is bound to the
//! positional arguments in declared order.

use std::collections::HashMap;

use crate::command::{Branch, CommandData, Terminal};
use crate::error::{Result, UsageError};
use crate::output::{CommandOs, ExecutorResponse};
use crate::value::Value;

impl Branch {
    pub(crate) fn execute_tokens(
        &self,
        tokens: &[String],
        os: &mut dyn CommandOs,
    ) -> Result<ExecutorResponse> {
        match tokens.split_first() {
            None => match self.fallback() {
                Some(fallback) => fallback.execute_tokens(tokens, os),
                None => Err(UsageError::MoreArgsRequired.into()),
            },
            Some((first, rest)) => {
                if let Some(child) = self.children().get(first) {
                    return child.execute(rest, os);
                }
                // No child matched; the fallback sees the whole stream,
                // including the token that failed to match
                match self.fallback() {
                    Some(fallback) => fallback.execute_tokens(tokens, os),
                    None => Err(UsageError::UnknownSubcommand(first.clone()).into()),
                }
            }
        }
    }
}

impl Terminal {
    pub(crate) fn execute_tokens(
        &self,
        tokens: &[String],
        os: &mut dyn CommandOs,
    ) -> Result<ExecutorResponse> {
        let (flagless, flags) = self.extract_flags(tokens)?;
        let mut data = CommandData {
            args: HashMap::new(),
            flags,
        };

        let mut idx = 0;
        for arg in self.args() {
            let rest = &flagless[idx..];
            if rest.is_empty() && arg.required() {
                return Err(UsageError::MissingArg(arg.name().to_string()).into());
            }
            let processed = arg.process_execute(rest)?;
            idx += processed.consumed;
            data.args.insert(arg.name().to_string(), processed.value);
        }

        if idx < flagless.len() {
            return Err(UsageError::ExtraArgs(flagless[idx..].to_vec()).into());
        }

        let executor = self.executor().ok_or(UsageError::NoExecutor)?;
        executor(&data, os).map_err(Into::into)
    }

    /// Single left-to-right scan pulling out flags and their arity's worth of
    /// following tokens; everything else keeps its relative order
    fn extract_flags(&self, tokens: &[String]) -> Result<(Vec<String>, HashMap<String, Value>)> {
        let mut flagless = Vec::new();
        let mut flags = HashMap::new();
        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];
            match self.flags().iter().find(|f| f.matches(token)) {
                Some(flag) => {
                    let processed = flag.process_execute(&tokens[i + 1..])?;
                    flags.insert(flag.name().to_string(), processed.value);
                    i += 1 + processed.consumed;
                }
                None => {
                    flagless.push(token.clone());
                    i += 1;
                }
            }
        }
        Ok((flagless, flags))
    }
}
