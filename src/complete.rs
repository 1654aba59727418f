//! Completion engine
//!
//! A `Completor` wraps a pluggable [`Fetcher`] that supplies candidate
//! strings for the value currently being typed. Completion is best-effort by
//! contract: a missing fetcher, an unreadable directory, or a malformed prior
//! token all degrade to "no suggestions", never an error.

use std::collections::HashSet;
use std::path::PathBuf;

use crate::command::CommandData;
use crate::value::Value;

/// A pluggable source of completion candidates
///
/// `value` is the typed value accumulated so far for the descriptor being
/// completed (including a best-effort parse of the partial token); `data`
/// holds everything already resolved to the left of it.
pub trait Fetcher {
    fn fetch(&self, value: &Value, data: &CommandData) -> Vec<String>;
}

/// Adapter letting plain functions act as fetchers
struct FnFetcher<F>(F);

impl<F> Fetcher for FnFetcher<F>
where
    F: Fn(&Value, &CommandData) -> Vec<String>,
{
    fn fetch(&self, value: &Value, data: &CommandData) -> Vec<String> {
        (self.0)(value, data)
    }
}

/// Completion configuration for a single argument or flag
pub struct Completor {
    distinct: bool,
    fetcher: Option<Box<dyn Fetcher>>,
}

impl Completor {
    /// Complete from the given fetcher
    pub fn new(fetcher: impl Fetcher + 'static) -> Self {
        Completor {
            distinct: false,
            fetcher: Some(Box::new(fetcher)),
        }
    }

    /// Complete from the given fetcher, excluding candidates already bound
    /// earlier in a list value
    pub fn distinct(fetcher: impl Fetcher + 'static) -> Self {
        Completor {
            distinct: true,
            fetcher: Some(Box::new(fetcher)),
        }
    }

    /// Complete from a plain function
    pub fn from_fn(f: impl Fn(&Value, &CommandData) -> Vec<String> + 'static) -> Self {
        Self::new(FnFetcher(f))
    }

    /// A completor that never suggests anything
    pub fn empty() -> Self {
        Completor {
            distinct: false,
            fetcher: None,
        }
    }

    /// Candidates for the partial token, deduplicated and prefix-filtered
    pub(crate) fn complete(&self, partial: &str, value: &Value, data: &CommandData) -> Vec<String> {
        let Some(fetcher) = &self.fetcher else {
            return Vec::new();
        };
        let mut candidates = fetcher.fetch(value, data);

        // Distinct mode only applies to list values; the element being typed
        // is not yet bound, so it does not exclude itself
        if self.distinct && value.value_type().is_list() {
            let elements = value.str_list_ref();
            let bound: HashSet<&String> = elements
                .iter()
                .take(elements.len().saturating_sub(1))
                .collect();
            candidates.retain(|c| !bound.contains(c));
        }

        candidates.retain(|c| c.starts_with(partial));
        candidates
    }
}

/// Fetcher over a fixed candidate list
pub struct ListFetcher {
    options: Vec<String>,
}

impl ListFetcher {
    pub fn new(options: Vec<String>) -> Self {
        ListFetcher { options }
    }
}

impl Fetcher for ListFetcher {
    fn fetch(&self, _value: &Value, _data: &CommandData) -> Vec<String> {
        self.options.clone()
    }
}

/// Fetcher listing directory entries
///
/// Defaults to the process working directory; the base directory is
/// injectable so tests can point it at a temporary directory without touching
/// global state.
#[derive(Default)]
pub struct FileFetcher {
    base_dir: Option<PathBuf>,
}

impl FileFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// List entries of a specific directory instead of the working directory
    pub fn with_base_dir(mut self, dir: PathBuf) -> Self {
        self.base_dir = Some(dir);
        self
    }
}

impl Fetcher for FileFetcher {
    fn fetch(&self, _value: &Value, _data: &CommandData) -> Vec<String> {
        let dir = self
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };
        entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect()
    }
}
