//! Validator options bound to arguments and flags
//!
//! An `ArgOpt` pairs a predicate with the value types it can legally be bound
//! to. Validators run in declaration order after the transform; the first
//! failure aborts processing.

use regex::Regex;

use crate::error::{ValidationError, ValidationResult};
use crate::value::{Value, ValueType};

/// A pluggable validator for a produced value
pub struct ArgOpt {
    applies_to: Vec<ValueType>,
    message: String,
    predicate: Box<dyn Fn(&Value) -> bool>,
}

impl ArgOpt {
    /// Build a validator from arbitrary parts
    ///
    /// `message` is reported as "validation failed: {message}" when the
    /// predicate rejects a value.
    pub fn custom(
        applies_to: Vec<ValueType>,
        message: impl Into<String>,
        predicate: impl Fn(&Value) -> bool + 'static,
    ) -> Self {
        ArgOpt {
            applies_to,
            message: message.into(),
            predicate: Box::new(predicate),
        }
    }

    /// Every string (or string list element) must contain the substring
    pub fn contains(substring: impl Into<String>) -> Self {
        let substring = substring.into();
        let message = format!("value does not contain substring {:?}", substring);
        Self::custom(
            vec![ValueType::Str, ValueType::StrList],
            message,
            move |value| {
                strings_of(value).iter().all(|s| s.contains(&substring))
            },
        )
    }

    /// Every string (or string list element) must match the pattern
    pub fn matches_regex(pattern: Regex) -> Self {
        let message = format!("value does not match pattern {:?}", pattern.as_str());
        Self::custom(
            vec![ValueType::Str, ValueType::StrList],
            message,
            move |value| strings_of(value).iter().all(|s| pattern.is_match(s)),
        )
    }

    /// The string must be at least this many characters long
    pub fn min_length(length: usize) -> Self {
        let message = format!("value is shorter than {} characters", length);
        Self::custom(vec![ValueType::Str], message, move |value| {
            value.as_str().is_some_and(|s| s.chars().count() >= length)
        })
    }

    /// Every int must be strictly positive
    pub fn int_positive() -> Self {
        Self::custom(
            vec![ValueType::Int, ValueType::IntList],
            "value is not positive",
            |value| ints_of(value).iter().all(|n| *n > 0),
        )
    }

    /// Every int must be zero or greater
    pub fn int_non_negative() -> Self {
        Self::custom(
            vec![ValueType::Int, ValueType::IntList],
            "value is negative",
            |value| ints_of(value).iter().all(|n| *n >= 0),
        )
    }

    /// Every int must be strictly below the limit
    pub fn int_less_than(limit: i64) -> Self {
        let message = format!("value is not less than {}", limit);
        Self::custom(
            vec![ValueType::Int, ValueType::IntList],
            message,
            move |value| ints_of(value).iter().all(|n| *n < limit),
        )
    }

    /// Every float must be strictly positive
    pub fn float_positive() -> Self {
        Self::custom(
            vec![ValueType::Float, ValueType::FloatList],
            "value is not positive",
            |value| floats_of(value).iter().all(|x| *x > 0.0),
        )
    }

    /// Every float must be zero or greater
    pub fn float_non_negative() -> Self {
        Self::custom(
            vec![ValueType::Float, ValueType::FloatList],
            "value is negative",
            |value| floats_of(value).iter().all(|x| *x >= 0.0),
        )
    }

    /// Check a produced value against this validator
    ///
    /// Binding to a type outside `applies_to` is itself an error, even when
    /// the value was never supplied. The predicate only runs on supplied
    /// values; absent optional values pass.
    pub(crate) fn check(&self, declared: ValueType, value: &Value) -> ValidationResult<()> {
        if !self.applies_to.contains(&declared) {
            let expected = self
                .applies_to
                .iter()
                .map(|t| t.to_string())
                .collect::<Vec<_>>()
                .join(" or ");
            return Err(ValidationError::TypeMismatch { expected });
        }
        if value.provided() && !(self.predicate)(value) {
            return Err(ValidationError::Failed(self.message.clone()));
        }
        Ok(())
    }
}

fn strings_of(value: &Value) -> Vec<&str> {
    match value.as_str() {
        Some(s) => vec![s],
        None => value.str_list_ref().iter().map(String::as_str).collect(),
    }
}

fn ints_of(value: &Value) -> Vec<i64> {
    match value.as_int() {
        Some(n) => vec![n],
        None => value.int_list_ref().to_vec(),
    }
}

fn floats_of(value: &Value) -> Vec<f64> {
    match value.as_float() {
        Some(x) => vec![x],
        None => value.float_list_ref().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_accepts_and_rejects() {
        let opt = ArgOpt::contains("ell");
        assert!(opt.check(ValueType::Str, &Value::str("hello")).is_ok());

        let result = opt.check(ValueType::Str, &Value::str("goodbye"));
        assert!(matches!(result, Err(ValidationError::Failed(_))));
    }

    #[test]
    fn test_contains_checks_every_list_element() {
        let opt = ArgOpt::contains("a");
        let ok = Value::str_list(vec!["cat".to_string(), "bat".to_string()]);
        assert!(opt.check(ValueType::StrList, &ok).is_ok());

        let bad = Value::str_list(vec!["cat".to_string(), "dog".to_string()]);
        assert!(opt.check(ValueType::StrList, &bad).is_err());
    }

    #[test]
    fn test_type_mismatch_beats_passing_predicate() {
        let opt = ArgOpt::int_positive();
        let result = opt.check(ValueType::Str, &Value::str("5"));
        assert!(matches!(result, Err(ValidationError::TypeMismatch { .. })));
    }

    #[test]
    fn test_type_mismatch_message_names_types() {
        let opt = ArgOpt::int_positive();
        let err = opt.check(ValueType::Str, &Value::str("x")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "option can only be bound to arguments with type int or int list"
        );
    }

    #[test]
    fn test_absent_value_passes_predicate() {
        let opt = ArgOpt::min_length(3);
        assert!(opt.check(ValueType::Str, &ValueType::Str.zero()).is_ok());
    }

    #[test]
    fn test_matches_regex() {
        let opt = ArgOpt::matches_regex(Regex::new(r"^\d+$").unwrap());
        assert!(opt.check(ValueType::Str, &Value::str("123")).is_ok());
        assert!(opt.check(ValueType::Str, &Value::str("12a")).is_err());
    }

    #[test]
    fn test_int_bounds() {
        let positive = ArgOpt::int_positive();
        assert!(positive.check(ValueType::Int, &Value::int(1)).is_ok());
        assert!(positive.check(ValueType::Int, &Value::int(0)).is_err());

        let below_ten = ArgOpt::int_less_than(10);
        assert!(below_ten.check(ValueType::IntList, &Value::int_list(vec![3, 9])).is_ok());
        assert!(below_ten.check(ValueType::IntList, &Value::int_list(vec![3, 10])).is_err());
    }

    #[test]
    fn test_float_bounds() {
        let non_negative = ArgOpt::float_non_negative();
        assert!(non_negative.check(ValueType::Float, &Value::float(0.0)).is_ok());
        assert!(non_negative.check(ValueType::Float, &Value::float(-0.1)).is_err());
    }

    #[test]
    fn test_custom_validator_message() {
        let opt = ArgOpt::custom(vec![ValueType::Str], "value is not lowercase", |v| {
            v.as_str().is_some_and(|s| s.chars().all(|c| !c.is_uppercase()))
        });
        let err = opt.check(ValueType::Str, &Value::str("Mixed")).unwrap_err();
        assert_eq!(err.to_string(), "validation failed: value is not lowercase");
    }
}
