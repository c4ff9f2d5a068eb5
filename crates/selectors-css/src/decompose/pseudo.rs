//! Pseudo-class and pseudo-element decomposition.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::classify::{LEGACY_PSEUDO_ELEMENTS, get_type};
use crate::error::GrammarError;
use crate::grammar::compile_exact;
use crate::grammar::extended::VENDOR_PREFIX_CAPTURE;
use crate::pseudo::is_valid_css_pseudo_element;

/// How many colons introduced a legacy pseudo-element.
///
/// Only recorded for the pseudo-elements that may be written either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Colons {
    /// `:before`
    One,
    /// `::before`
    Two,
}

impl From<Colons> for u8 {
    fn from(colons: Colons) -> Self {
        match colons {
            Colons::One => 1,
            Colons::Two => 2,
        }
    }
}

impl TryFrom<u8> for Colons {
    type Error = String;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        match count {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            other => Err(format!("a pseudo-element has 1 or 2 colons, not {other}")),
        }
    }
}

/// The parts of a pseudo-class or pseudo-element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PseudoProperties {
    /// Vendor prefix including both hyphens, e.g. `-webkit-`
    pub vendor: Option<String>,
    /// Name without colons, vendor prefix or arguments
    pub name: String,
    /// Raw text between the parentheses of a functional pseudo-class
    pub args: Option<String>,
    /// Colon count of a legacy pseudo-element
    pub colons: Option<Colons>,
}

static VENDOR_PREFIX: Lazy<Regex> = Lazy::new(|| {
    compile_exact(&VENDOR_PREFIX_CAPTURE)
        .unwrap_or_else(|err| panic!("vendor prefix pattern is invalid: {err}"))
});

/// Decompose a pseudo-class or pseudo-element such as `:-moz-any-link` or
/// `:nth-child(2n + 1)`.
///
/// Returns `Ok(None)` for empty input.
///
/// # Errors
///
/// Returns [`GrammarError::NoMatch`] if `selector` is not a simple selector,
/// or [`GrammarError::WrongCategory`] if it is not a pseudo-class or
/// pseudo-element.
pub fn get_pseudo_properties(selector: &str) -> Result<Option<PseudoProperties>, GrammarError> {
    if selector.is_empty() {
        return Ok(None);
    }

    let classification = get_type(selector)?;
    if !classification.category.is_pseudo() {
        return Err(GrammarError::wrong_category(
            "pseudo-class or pseudo-element",
            classification.category,
            selector,
        ));
    }

    let (vendor, unprefixed) = match VENDOR_PREFIX.captures(selector) {
        Some(captures) => (
            captures.name("vendor").map(|vendor| vendor.as_str()),
            captures.name("rest").map_or("", |rest| rest.as_str()),
        ),
        None => (None, selector.trim_start_matches(':')),
    };

    let name = unprefixed
        .split_once('(')
        .map_or(unprefixed, |(name, _)| name);

    let args = if is_valid_css_pseudo_element(selector) {
        None
    } else {
        selector
            .split_once('(')
            .and_then(|(_, rest)| rest.strip_suffix(')'))
    };

    // Only the bare legacy spellings carry a colon count: no vendor prefix,
    // no arguments.
    let bare = selector
        .strip_prefix("::")
        .or_else(|| selector.strip_prefix(':'))
        .unwrap_or(selector);
    let colons = LEGACY_PSEUDO_ELEMENTS
        .iter()
        .any(|legacy| legacy.eq_ignore_ascii_case(bare))
        .then(|| {
            if selector.starts_with("::") {
                Colons::Two
            } else {
                Colons::One
            }
        });

    Ok(Some(PseudoProperties {
        vendor: vendor.map(str::to_owned),
        name: name.to_owned(),
        args: args.map(str::to_owned),
        colons,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colons_serialize_as_counts() {
        assert_eq!(u8::from(Colons::Two), 2);
        assert_eq!(Colons::try_from(1), Ok(Colons::One));
        assert!(Colons::try_from(3).is_err());
    }

    #[test]
    fn test_vendor_prefix_is_the_shortest_split() {
        let properties = get_pseudo_properties(":_potato-bar-baz")
            .expect("pseudo")
            .expect("non-empty");
        assert_eq!(properties.vendor.as_deref(), Some("_potato-"));
        assert_eq!(properties.name, "bar-baz");
    }

    #[test]
    fn test_functional_vendor_pseudo_keeps_prefix_in_name() {
        let properties = get_pseudo_properties(":-moz-any(a)")
            .expect("pseudo")
            .expect("non-empty");
        assert_eq!(properties.vendor, None);
        assert_eq!(properties.name, "-moz-any");
        assert_eq!(properties.args.as_deref(), Some("a"));
    }

    #[test]
    fn test_colon_count_needs_the_bare_legacy_name() {
        let properties = get_pseudo_properties(":FIRST-LETTER")
            .expect("pseudo")
            .expect("non-empty");
        assert_eq!(properties.colons, Some(Colons::One));

        for selector in ["::-moz-before", ":-x-after", ":before(x)", ":_potato-first-line"] {
            let properties = get_pseudo_properties(selector)
                .expect("pseudo")
                .expect("non-empty");
            assert_eq!(properties.colons, None, "{selector:?}");
        }
    }
}
