//! Positional argument descriptors

use crate::command::CommandData;
use crate::complete::Completor;
use crate::error::CmdError;
use crate::processor::{self, ArgOpt, Bound, Processed};
use crate::value::{Value, ValueType};

/// A positional parameter descriptor
///
/// Constructed once when the tree is built; stateless and reused across
/// executions. The name is the key in the resolved-argument mapping.
pub struct Arg {
    name: String,
    value_type: ValueType,
    min_n: usize,
    extra: Bound,
    completor: Option<Completor>,
    opts: Vec<ArgOpt>,
}

impl Arg {
    fn new(name: impl Into<String>, value_type: ValueType, min_n: usize, extra: Bound) -> Self {
        Arg {
            name: name.into(),
            value_type,
            min_n,
            extra,
            completor: None,
            opts: Vec::new(),
        }
    }

    /// A single string argument
    pub fn string(name: impl Into<String>, required: bool) -> Self {
        Self::scalar(name, ValueType::Str, required)
    }

    /// A single int argument
    pub fn int(name: impl Into<String>, required: bool) -> Self {
        Self::scalar(name, ValueType::Int, required)
    }

    /// A single float argument
    pub fn float(name: impl Into<String>, required: bool) -> Self {
        Self::scalar(name, ValueType::Float, required)
    }

    /// A single bool argument, parsed from `true/false/t/f`
    pub fn boolean(name: impl Into<String>, required: bool) -> Self {
        Self::scalar(name, ValueType::Bool, required)
    }

    fn scalar(name: impl Into<String>, value_type: ValueType, required: bool) -> Self {
        if required {
            Self::new(name, value_type, 1, Bound::Limited(0))
        } else {
            Self::new(name, value_type, 0, Bound::Limited(1))
        }
    }

    /// A string list taking at least `min_n` tokens and up to `extra` more
    pub fn string_list(name: impl Into<String>, min_n: usize, extra: Bound) -> Self {
        Self::new(name, ValueType::StrList, min_n, extra)
    }

    /// An int list taking at least `min_n` tokens and up to `extra` more
    pub fn int_list(name: impl Into<String>, min_n: usize, extra: Bound) -> Self {
        Self::new(name, ValueType::IntList, min_n, extra)
    }

    /// A float list taking at least `min_n` tokens and up to `extra` more
    pub fn float_list(name: impl Into<String>, min_n: usize, extra: Bound) -> Self {
        Self::new(name, ValueType::FloatList, min_n, extra)
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

    /// Uppercased name with spaces as underscores, for usage text
    pub fn display_name(&self) -> String {
        processor::display_name(&self.name)
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Whether at least one token must be supplied
    pub fn required(&self) -> bool {
        self.min_n > 0
    }

    /// Total token capacity, `None` meaning unbounded
    pub(crate) fn capacity(&self) -> Option<usize> {
        processor::capacity(self.min_n, self.extra)
    }

    /// Consume this argument's arity worth of tokens for execution
    pub fn process_execute(&self, tokens: &[String]) -> Result<Processed, CmdError> {
        processor::consume_execute(
            &self.name,
            self.value_type,
            self.min_n,
            self.extra,
            &self.opts,
            tokens,
        )
    }

    /// How many tokens this argument consumes during completion
    pub fn process_complete(&self, tokens: &[String]) -> usize {
        processor::consume_complete(self.min_n, self.extra, tokens)
    }

    /// Best-effort value from the tokens bound so far
    pub(crate) fn lenient_value(&self, tokens: &[String]) -> Value {
        processor::consume_lenient(self.value_type, tokens)
    }

    /// Suggestions for the partial token currently being typed
    pub(crate) fn complete(&self, partial: &str, value: &Value, data: &CommandData) -> Vec<String> {
        match &self.completor {
            Some(completor) => completor.complete(partial, value, data),
            None => Vec::new(),
        }
    }

    /// Usage display tokens, e.g. `NAME`, `[NAME]`, or `NAME [NAME ...]`
    pub(crate) fn usage_tokens(&self) -> Vec<String> {
        let display = self.display_name();
        let mut tokens = Vec::new();
        if self.value_type.is_list() {
            for _ in 0..self.min_n {
                tokens.push(display.clone());
            }
            match self.extra {
                Bound::Limited(0) => {}
                _ => tokens.push(format!("[{} ...]", display)),
            }
        } else if self.required() {
            tokens.push(display);
        } else {
            tokens.push(format!("[{}]", display));
        }
        tokens
    }
}
