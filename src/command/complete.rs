//! Tree completion
//!
//! Mirrors the execution walk but stops at the first unit that is still
//! incomplete: a flag-like final token completes flag names, a flag still
//! accepting value tokens defers to that flag's fetcher, and otherwise the
//! positional argument reached by the walk completes the partial token.
//! Everything resolved on the way is handed to the fetcher as context, parsed
//! best-effort so a malformed earlier token never aborts completion.

use crate::command::{Branch, CommandData, Terminal};

impl Branch {
    pub(crate) fn complete_tokens(&self, tokens: &[String]) -> Vec<String> {
        // With more than one token the first one is settled input
        if tokens.len() > 1 {
            let (first, rest) = match tokens.split_first() {
                Some(split) => split,
                None => return Vec::new(),
            };
            if let Some(child) = self.children().get(first) {
                return child.complete_tokens(rest);
            }
            return match self.fallback() {
                Some(fallback) => fallback.complete_tokens(tokens),
                None => Vec::new(),
            };
        }

        // Still typing the first token: union subcommand names with whatever
        // the fallback suggests for the same stream
        let prefix = tokens.first().map(String::as_str).unwrap_or("");
        let mut suggestions = Vec::new();
        if !self.suppresses_subcommands() {
            suggestions.extend(
                self.children()
                    .keys()
                    .filter(|name| name.starts_with(prefix))
                    .cloned(),
            );
        }
        if let Some(fallback) = self.fallback() {
            suggestions.extend(fallback.complete_tokens(tokens));
        }
        suggestions
    }
}

impl Terminal {
    pub(crate) fn complete_tokens(&self, tokens: &[String]) -> Vec<String> {
        let Some((partial, _)) = tokens.split_last() else {
            return Vec::new();
        };
        let last_idx = tokens.len() - 1;
        let mut data = CommandData::new();
        let mut flagless: Vec<String> = Vec::new();

        let mut i = 0;
        while i < tokens.len() {
            let token = &tokens[i];

            if i == last_idx {
                if token.starts_with('-') {
                    let mut names: Vec<String> = self
                        .flags()
                        .iter()
                        .flat_map(|f| f.name_suggestions())
                        .collect();
                    names.retain(|name| name.starts_with(token.as_str()));
                    // A bare dash or a known flag prefix completes flag
                    // names; anything else (say a negative number) is
                    // positional text
                    if token == "-" || token == "--" || !names.is_empty() {
                        return names;
                    }
                }
                flagless.push(token.clone());
                i += 1;
                continue;
            }

            match self.flags().iter().find(|f| f.matches(token)) {
                Some(flag) => {
                    let rest = &tokens[i + 1..];
                    // rest ends with the partial token; if this flag's arity
                    // still reaches it, the flag owns the completion
                    if flag.capacity().is_none_or(|cap| rest.len() <= cap) {
                        let value = flag.lenient_value(rest);
                        return flag.complete(partial, &value, &data);
                    }
                    let consumed = flag.process_complete(rest);
                    data.flags.insert(
                        flag.name().to_string(),
                        flag.lenient_value(&rest[..consumed]),
                    );
                    i += 1 + consumed;
                }
                None => {
                    flagless.push(token.clone());
                    i += 1;
                }
            }
        }

        let mut idx = 0;
        for arg in self.args() {
            let rest = &flagless[idx..];
            // rest ends with the partial token; the first argument whose
            // arity reaches it is the one being typed
            if arg.capacity().is_none_or(|cap| rest.len() <= cap) {
                let value = arg.lenient_value(rest);
                return arg.complete(partial, &value, &data);
            }
            let consumed = arg.process_complete(rest);
            data.args.insert(
                arg.name().to_string(),
                arg.lenient_value(&rest[..consumed]),
            );
            idx += consumed;
        }

        // Every argument is already satisfied; nothing left to suggest
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::command::{Branch, Command, Terminal};
    use crate::complete::{Completor, ListFetcher};
    use crate::processor::{Arg, Bound, Flag};

    fn toks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn fetch(options: &[&str]) -> Completor {
        Completor::new(ListFetcher::new(
            options.iter().map(|s| s.to_string()).collect(),
        ))
    }

    #[test]
    fn test_branch_suggests_children_for_first_token() {
        let cmd: Command = Branch::new()
            .with_child("apply", Terminal::new())
            .with_child("append", Terminal::new())
            .with_child("reset", Terminal::new())
            .into();
        let mut suggestions = cmd.complete(&toks(&["ap"]));
        suggestions.sort();
        assert_eq!(suggestions, vec!["append", "apply"]);
    }

    #[test]
    fn test_branch_suppressed_children_yield_nothing() {
        let cmd: Command = Branch::new()
            .with_child("apply", Terminal::new())
            .without_subcommand_completion()
            .into();
        assert!(cmd.complete(&toks(&["ap"])).is_empty());
    }

    #[test]
    fn test_branch_descends_into_matching_child() {
        let child = Terminal::new().with_arg(
            Arg::string("color", true).with_completor(fetch(&["red", "green", "blue"])),
        );
        let cmd: Command = Branch::new().with_child("paint", child).into();
        assert_eq!(cmd.complete(&toks(&["paint", "gr"])), vec!["green"]);
    }

    #[test]
    fn test_branch_unions_fallback_suggestions() {
        let fallback = Terminal::new()
            .with_arg(Arg::string("target", true).with_completor(fetch(&["all", "none"])));
        let cmd: Command = Branch::new()
            .with_child("add", Terminal::new())
            .with_fallback(fallback)
            .into();
        let mut suggestions = cmd.complete(&toks(&["a"]));
        suggestions.sort();
        assert_eq!(suggestions, vec!["add", "all"]);
    }

    #[test]
    fn test_flag_like_token_completes_flag_names() {
        let cmd: Command = Terminal::new()
            .with_arg(Arg::string("name", true))
            .with_flag(Flag::string("state", Some('s')))
            .with_flag(Flag::boolean("verbose", None))
            .into();
        let mut suggestions = cmd.complete(&toks(&["--"]));
        suggestions.sort();
        assert_eq!(suggestions, vec!["--state", "--verbose"]);

        let mut suggestions = cmd.complete(&toks(&["-"]));
        suggestions.sort();
        assert_eq!(suggestions, vec!["--state", "--verbose", "-s"]);
    }

    #[test]
    fn test_incomplete_flag_defers_to_its_fetcher() {
        let cmd: Command = Terminal::new()
            .with_arg(Arg::string("name", true))
            .with_flag(Flag::string("state", Some('s')).with_completor(fetch(&["maine", "texas"])))
            .into();
        assert_eq!(cmd.complete(&toks(&["--state", "ma"])), vec!["maine"]);
    }

    #[test]
    fn test_satisfied_flag_releases_completion_to_args() {
        let cmd: Command = Terminal::new()
            .with_arg(Arg::string("name", true).with_completor(fetch(&["alice", "bob"])))
            .with_flag(Flag::string("state", None).with_completor(fetch(&["maine"])))
            .into();
        assert_eq!(cmd.complete(&toks(&["--state", "maine", "a"])), vec!["alice"]);
    }

    #[test]
    fn test_walk_reaches_argument_being_typed() {
        let cmd: Command = Terminal::new()
            .with_arg(Arg::string_list("first", 2, Bound::Limited(0)))
            .with_arg(Arg::string("second", true).with_completor(fetch(&["left", "right"])))
            .into();
        assert_eq!(cmd.complete(&toks(&["a", "b", "le"])), vec!["left"]);
    }

    #[test]
    fn test_unbounded_list_keeps_completing() {
        let cmd: Command = Terminal::new()
            .with_arg(
                Arg::string_list("items", 1, Bound::Unbounded).with_completor(fetch(&["x", "y"])),
            )
            .into();
        assert_eq!(cmd.complete(&toks(&["x", "x", "x", ""])), vec!["x", "y"]);
    }

    #[test]
    fn test_exhausted_args_yield_nothing() {
        let cmd: Command = Terminal::new()
            .with_arg(Arg::string("only", true).with_completor(fetch(&["a"])))
            .into();
        assert!(cmd.complete(&toks(&["done", "next"])).is_empty());
    }

    #[test]
    fn test_bad_earlier_token_degrades_not_fails() {
        // The malformed int for "count" becomes a zero value; completion of
        // the second argument proceeds
        let cmd: Command = Terminal::new()
            .with_arg(Arg::int_list("count", 2, Bound::Limited(0)))
            .with_arg(Arg::string("name", true).with_completor(fetch(&["sam"])))
            .into();
        assert_eq!(cmd.complete(&toks(&["1", "oops", "s"])), vec!["sam"]);
    }

    #[test]
    fn test_dead_end_branch_has_no_suggestions() {
        let cmd: Command = Branch::new().with_child("only", Terminal::new()).into();
        assert!(cmd.complete(&toks(&["other", "x"])).is_empty());
    }
}
