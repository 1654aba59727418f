//! Named flag descriptors

use crate::command::CommandData;
use crate::complete::Completor;
use crate::error::{CmdError, UsageError};
use crate::processor::{self, ArgOpt, Bound, Processed};
use crate::value::{Value, ValueType};

/// A named parameter descriptor
///
/// Recognized anywhere in the token stream as `--name` or `-c`. Shares the
/// positional arity machinery; only recognition differs.
pub struct Flag {
    name: String,
    short: Option<char>,
    value_type: ValueType,
    min_n: usize,
    extra: Bound,
    completor: Option<Completor>,
    opts: Vec<ArgOpt>,
}

impl Flag {
    fn new(
        name: impl Into<String>,
        short: Option<char>,
        value_type: ValueType,
        min_n: usize,
        extra: Bound,
    ) -> Self {
        Flag {
            name: name.into(),
            short,
            value_type,
            min_n,
            extra,
            completor: None,
            opts: Vec::new(),
        }
    }

    /// A switch taking no value; present means `true`
    pub fn boolean(name: impl Into<String>, short: Option<char>) -> Self {
        Self::new(name, short, ValueType::Bool, 0, Bound::Limited(0))
    }

    /// A flag taking one string value
    pub fn string(name: impl Into<String>, short: Option<char>) -> Self {
        Self::new(name, short, ValueType::Str, 1, Bound::Limited(0))
    }

    /// A flag taking one int value
    pub fn int(name: impl Into<String>, short: Option<char>) -> Self {
        Self::new(name, short, ValueType::Int, 1, Bound::Limited(0))
    }

    /// A flag taking one float value
    pub fn float(name: impl Into<String>, short: Option<char>) -> Self {
        Self::new(name, short, ValueType::Float, 1, Bound::Limited(0))
    }

    /// A flag taking a string list
    pub fn string_list(
        name: impl Into<String>,
        short: Option<char>,
        min_n: usize,
        extra: Bound,
    ) -> Self {
        Self::new(name, short, ValueType::StrList, min_n, extra)
    }

    /// A flag taking an int list
    pub fn int_list(
        name: impl Into<String>,
        short: Option<char>,
        min_n: usize,
        extra: Bound,
    ) -> Self {
        Self::new(name, short, ValueType::IntList, min_n, extra)
    }

    /// A flag taking a float list
    pub fn float_list(
        name: impl Into<String>,
        short: Option<char>,
        min_n: usize,
        extra: Bound,
    ) -> Self {
        Self::new(name, short, ValueType::FloatList, min_n, extra)
    }

    /// Attach a completion source
    pub fn with_completor(mut self, completor: Completor) -> Self {
        self.completor = Some(completor);
        self
    }

    /// Append a validator; validators run in the order they were added
    pub fn with_opt(mut self, opt: ArgOpt) -> Self {
        self.opts.push(opt);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short(&self) -> Option<char> {
        self.short
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Whether a raw token names this flag
    pub fn matches(&self, token: &str) -> bool {
        if let Some(long) = token.strip_prefix("--") {
            return long == self.name;
        }
        match (self.short, token.strip_prefix('-')) {
            (Some(c), Some(rest)) => {
                let mut chars = rest.chars();
                chars.next() == Some(c) && chars.next().is_none()
            }
            _ => false,
        }
    }

    /// Whether this flag takes no value tokens
    fn is_switch(&self) -> bool {
        self.value_type == ValueType::Bool && self.min_n == 0
    }

    /// Total token capacity, `None` meaning unbounded
    pub(crate) fn capacity(&self) -> Option<usize> {
        processor::capacity(self.min_n, self.extra)
    }

    /// Consume this flag's arity worth of tokens for execution
    ///
    /// `tokens` is the stream immediately after the flag token itself.
    pub fn process_execute(&self, tokens: &[String]) -> Result<Processed, CmdError> {
        if self.is_switch() {
            return Ok(Processed {
                value: Value::boolean(true),
                consumed: 0,
                fully_consumed: true,
            });
        }
        processor::consume_execute(
            &self.name,
            self.value_type,
            self.min_n,
            self.extra,
            &self.opts,
            tokens,
        )
        .map_err(|err| match err {
            CmdError::Usage(UsageError::NotEnoughArgs(name)) => {
                UsageError::NotEnoughFlagArgs(name).into()
            }
            other => other,
        })
    }

    /// How many tokens this flag consumes during completion
    pub fn process_complete(&self, tokens: &[String]) -> usize {
        processor::consume_complete(self.min_n, self.extra, tokens)
    }

    /// Best-effort value from the tokens bound so far
    pub(crate) fn lenient_value(&self, tokens: &[String]) -> Value {
        if self.is_switch() {
            return Value::boolean(true);
        }
        processor::consume_lenient(self.value_type, tokens)
    }

    /// Suggestions for the partial token currently being typed
    pub(crate) fn complete(&self, partial: &str, value: &Value, data: &CommandData) -> Vec<String> {
        match &self.completor {
            Some(completor) => completor.complete(partial, value, data),
            None => Vec::new(),
        }
    }

    /// The names a completion suggestion can offer for this flag
    pub(crate) fn name_suggestions(&self) -> Vec<String> {
        let mut names = vec![format!("--{}", self.name)];
        if let Some(c) = self.short {
            names.push(format!("-{}", c));
        }
        names
    }

    /// Usage display token, e.g. `--state|-s <STR>`
    pub(crate) fn usage_token(&self) -> String {
        let mut token = format!("--{}", self.name);
        if let Some(c) = self.short {
            token.push_str(&format!("|-{}", c));
        }
        if !self.is_switch() {
            let label = match self.value_type {
                ValueType::Str | ValueType::StrList => "STR",
                ValueType::Int | ValueType::IntList => "INT",
                ValueType::Float | ValueType::FloatList => "FLOAT",
                ValueType::Bool => "BOOL",
            };
            token.push_str(&format!(" <{}>", label));
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_matches_long_and_short() {
        let flag = Flag::string("state", Some('s'));
        assert!(flag.matches("--state"));
        assert!(flag.matches("-s"));
        assert!(!flag.matches("--states"));
        assert!(!flag.matches("-st"));
        assert!(!flag.matches("state"));
    }

    #[test]
    fn test_matches_without_short() {
        let flag = Flag::string("state", None);
        assert!(flag.matches("--state"));
        assert!(!flag.matches("-s"));
    }

    #[test]
    fn test_switch_consumes_nothing() {
        let flag = Flag::boolean("verbose", Some('v'));
        let p = flag.process_execute(&toks(&["next"])).unwrap();
        assert_eq!(p.consumed, 0);
        assert_eq!(p.value.as_bool(), Some(true));
        assert!(p.value.provided());
    }

    #[test]
    fn test_under_arity_reports_flag_error() {
        let flag = Flag::string_list("state", Some('s'), 2, Bound::Limited(0));
        let err = flag.process_execute(&toks(&["maine"])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "not enough arguments for flag \"state\""
        );
    }

    #[test]
    fn test_value_flag_consumes_one() {
        let flag = Flag::int("count", None);
        let p = flag.process_execute(&toks(&["3", "rest"])).unwrap();
        assert_eq!(p.consumed, 1);
        assert_eq!(p.value.as_int(), Some(3));
    }

    #[test]
    fn test_name_suggestions() {
        let flag = Flag::string("state", Some('s'));
        assert_eq!(flag.name_suggestions(), vec!["--state", "-s"]);

        let flag = Flag::string("plain", None);
        assert_eq!(flag.name_suggestions(), vec!["--plain"]);
    }

    #[test]
    fn test_usage_token() {
        assert_eq!(Flag::string("state", Some('s')).usage_token(), "--state|-s <STR>");
        assert_eq!(Flag::boolean("verbose", None).usage_token(), "--verbose");
        assert_eq!(Flag::int_list("n", None, 1, Bound::Unbounded).usage_token(), "--n <INT>");
    }
}
