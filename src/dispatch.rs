//! Public entry points tying the tokenizer to the command tree

use crate::command::Command;
use crate::error::Result;
use crate::output::{CommandOs, ExecutorResponse};
use crate::tokenize::tokenize;

/// Tokenize a raw argument vector and execute it against the tree
///
/// Any failure is reported on the diagnostic channel before being returned,
/// so callers that only care about success can ignore the error payload.
pub fn execute(
    command: &Command,
    raw_args: &[String],
    os: &mut dyn CommandOs,
) -> Result<ExecutorResponse> {
    let (tokens, _) = tokenize(raw_args);
    match command.execute(&tokens, os) {
        Ok(response) => Ok(response),
        Err(err) => {
            os.stderr(&err.to_string());
            Err(err)
        }
    }
}

/// Tokenize a raw argument vector and produce completion suggestions
///
/// `cursor_idx` is the index of the logical token being completed; at or past
/// the end of the recognized tokens it means the user is starting a fresh
/// word, which is represented by an empty trailing token. Suggestions come back sorted,
/// with any suggestion containing a space wrapped in the quote delimiter
/// matching the user's in-progress quoting.
pub fn autocomplete(command: &Command, raw_args: &[String], cursor_idx: usize) -> Vec<String> {
    let (mut tokens, delimiter) = tokenize(raw_args);
    if cursor_idx >= tokens.len() {
        tokens.push(String::new());
    }

    let mut suggestions = command.complete(&tokens);
    suggestions.sort();
    suggestions
        .into_iter()
        .map(|s| {
            if s.contains(' ') {
                format!("{}{}{}", delimiter, s, delimiter)
            } else {
                s
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Branch, Terminal};
    use crate::complete::{Completor, ListFetcher};
    use crate::output::FakeOs;
    use crate::processor::Arg;

    fn toks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_execute_reports_errors_on_stderr() {
        let cmd: Command = Terminal::new().into();
        let mut os = FakeOs::new();
        let result = execute(&cmd, &toks(&[]), &mut os);
        assert!(result.is_err());
        assert_eq!(os.stderr, vec!["no executor defined"]);
    }

    #[test]
    fn test_autocomplete_pads_fresh_word() {
        let cmd: Command = Branch::new()
            .with_child("b", Terminal::new())
            .with_child("a", Terminal::new())
            .with_child("c", Terminal::new())
            .into();
        assert_eq!(autocomplete(&cmd, &toks(&[]), 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_autocomplete_sorts_suggestions() {
        let fetcher = ListFetcher::new(toks(&["zeta", "alpha", "mid"]));
        let cmd: Command = Terminal::new()
            .with_arg(Arg::string("word", true).with_completor(Completor::new(fetcher)))
            .into();
        assert_eq!(
            autocomplete(&cmd, &toks(&[]), 0),
            vec!["alpha", "mid", "zeta"]
        );
    }

    #[test]
    fn test_autocomplete_requotes_spaced_suggestions() {
        let fetcher = ListFetcher::new(vec!["New York".to_string(), "Maine".to_string()]);
        let cmd: Command = Terminal::new()
            .with_arg(Arg::string("state", true).with_completor(Completor::new(fetcher)))
            .into();

        // Default delimiter
        assert_eq!(
            autocomplete(&cmd, &toks(&[]), 0),
            vec!["Maine", "\"New York\""]
        );

        // The user opened a single quote
        assert_eq!(
            autocomplete(&cmd, &toks(&["'"]), 1),
            vec!["Maine", "'New York'"]
        );
    }

    #[test]
    fn test_autocomplete_mid_token() {
        let fetcher = ListFetcher::new(toks(&["maine", "maryland", "texas"]));
        let cmd: Command = Terminal::new()
            .with_arg(Arg::string("state", true).with_completor(Completor::new(fetcher)))
            .into();
        assert_eq!(
            autocomplete(&cmd, &toks(&["ma"]), 0),
            vec!["maine", "maryland"]
        );
    }
}
