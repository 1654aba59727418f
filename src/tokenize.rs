//! Shell-quote-aware tokenization
//!
//! The outer shell word-splits on unquoted whitespace before the argument
//! vector ever reaches this crate, destroying spaces inside quoted regions.
//! This module re-joins those regions into logical tokens and reports which
//! quote delimiter is active, so completion suggestions containing spaces can
//! be re-quoted to match what the user is typing.

/// Delimiter used for re-quoting when no quote region is open
pub const DEFAULT_DELIMITER: char = '"';

/// Split a raw argument vector into logical tokens
///
/// Returns the tokens plus the active quote delimiter. A `'` toggles a
/// single-quote region unless a double-quote region is open, and
/// symmetrically for `"`. While a region is open, the word boundary the shell
/// split on is restored as a single space.
///
/// A final raw token that is exactly a lone `'` or `"` (outside any open
/// region) is treated as a completion cue: it terminates the current word and
/// selects that delimiter, rather than opening a quote. Whether real shell
/// completion protocols ever deliver a lone quote as literal input is
/// undetermined; this interpretation is assumed.
///
/// Never fails: unbalanced quoting degrades to best-effort joining.
pub fn tokenize(raw: &[String]) -> (Vec<String>, char) {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_single = false;
    let mut in_double = false;
    let mut delimiter = DEFAULT_DELIMITER;

    for (i, word) in raw.iter().enumerate() {
        let is_last = i + 1 == raw.len();
        if is_last && !in_single && !in_double && (word == "'" || word == "\"") {
            if word == "'" {
                delimiter = '\'';
            }
            return (tokens, delimiter);
        }

        // Restore the space the shell split on inside an open region
        if in_single || in_double {
            current.push(' ');
        }

        for ch in word.chars() {
            match ch {
                '\'' if !in_double => in_single = !in_single,
                '"' if !in_single => in_double = !in_double,
                _ => current.push(ch),
            }
        }

        if !in_single && !in_double {
            tokens.push(std::mem::take(&mut current));
        }
    }

    // An unterminated region still flushes whatever accumulated
    if in_single || in_double {
        tokens.push(current);
        if in_single {
            delimiter = '\'';
        }
    }

    (tokens, delimiter)
}
