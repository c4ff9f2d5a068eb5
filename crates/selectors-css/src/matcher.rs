//! Whole-string matching against grammar fragments.
//!
//! [`Production::is_exact_match`](crate::grammar::Production::is_exact_match)
//! covers the named productions. This module handles arbitrary pattern text
//! (a fragment, or a composition of fragments) by compiling it on first use
//! and keeping the automaton for the life of the process.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;
use regex::Regex;
use selectors_common::warning::warn_once;

use crate::grammar::compile_exact;

/// Anchored automata keyed by their unanchored pattern text.
///
/// Entries are only ever added. Two threads racing on the same pattern both
/// compile it, and the first insertion wins.
static CACHE: Lazy<RwLock<HashMap<String, Arc<Regex>>>> = Lazy::new(Default::default);

/// Whether `candidate` matches `pattern` in its entirety.
///
/// A pattern that fails to compile matches nothing; the failure is reported
/// once through [`warn_once`].
#[must_use]
pub fn is_exact_match(pattern: &str, candidate: &str) -> bool {
    compiled(pattern).is_some_and(|regex| regex.is_match(candidate))
}

fn compiled(pattern: &str) -> Option<Arc<Regex>> {
    if let Some(regex) = CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(pattern)
    {
        return Some(Arc::clone(regex));
    }

    #[cfg(feature = "grammar-trace")]
    eprintln!("[grammar] compiling ad-hoc pattern ({} bytes)", pattern.len());

    let regex = match compile_exact(pattern) {
        Ok(regex) => Arc::new(regex),
        Err(err) => {
            warn_once("Selectors", &format!("unusable grammar pattern: {err}"));
            return None;
        }
    };

    let mut cache = CACHE.write().unwrap_or_else(PoisonError::into_inner);
    Some(Arc::clone(cache.entry(pattern.to_owned()).or_insert(regex)))
}

/// Number of distinct patterns compiled so far.
#[must_use]
pub fn cached_patterns() -> usize {
    CACHE.read().unwrap_or_else(PoisonError::into_inner).len()
}
