//! Common test utilities

use cmdtree::{Completor, ListFetcher};

/// Build an owned token vector from string literals
pub fn toks(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}

/// A completor over a fixed candidate list
pub fn fetch(options: &[&str]) -> Completor {
    Completor::new(ListFetcher::new(toks(options)))
}

/// A distinct-mode completor over a fixed candidate list
pub fn fetch_distinct(options: &[&str]) -> Completor {
    Completor::distinct(ListFetcher::new(toks(options)))
}
