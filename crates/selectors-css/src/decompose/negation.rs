//! Negation argument extraction.
//!
//! [§ 6.6.7 The negation pseudo-class](https://www.w3.org/TR/selectors/#negation)
//! "The negation pseudo-class, :not(X), is a functional notation taking a
//! simple selector (excluding the negation pseudo-class itself) as an
//! argument."
//!
//! [§ 7 Pseudo-elements](https://www.w3.org/TR/selectors/#pseudo-elements)
//! "Pseudo-elements cannot be represented by the negation pseudo-class"

use serde::{Deserialize, Serialize};

use crate::category::SelectorCategory;
use crate::classify::get_type;
use crate::error::GrammarError;

/// The simple selector inside `:not(...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegationInnerSelector {
    /// The argument with surrounding whitespace removed
    pub selector: String,
    /// Its category, never negation or pseudo-element
    #[serde(rename = "type")]
    pub category: SelectorCategory,
}

/// Extract and classify the argument of a negation.
///
/// Returns `Ok(None)` for empty input.
///
/// # Errors
///
/// Returns [`GrammarError::NoMatch`] if `selector` is not a simple selector,
/// [`GrammarError::WrongCategory`] if it is not a negation, or
/// [`GrammarError::ForbiddenNesting`] if the argument is itself a negation or
/// a pseudo-element.
pub fn get_negation_inner_selector_properties(
    selector: &str,
) -> Result<Option<NegationInnerSelector>, GrammarError> {
    if selector.is_empty() {
        return Ok(None);
    }

    let classification = get_type(selector)?;
    if classification.category != SelectorCategory::Negation {
        return Err(GrammarError::wrong_category(
            "negation",
            classification.category,
            selector,
        ));
    }

    // STEP 1: Strip `:not(` (in any of its escaped spellings) and the final `)`
    let inner = selector
        .split_once('(')
        .and_then(|(_, rest)| rest.strip_suffix(')'))
        .map(|inner| inner.trim_matches([' ', '\t', '\r', '\n', '\u{c}']))
        .ok_or_else(|| GrammarError::no_match(selector))?;

    // STEP 2: Classify the argument on its own
    let category = get_type(inner)?.category;
    if matches!(
        category,
        SelectorCategory::Negation | SelectorCategory::PseudoElement
    ) {
        return Err(GrammarError::ForbiddenNesting {
            inner: inner.to_owned(),
            category,
        });
    }

    Ok(Some(NegationInnerSelector {
        selector: inner.to_owned(),
        category,
    }))
}
