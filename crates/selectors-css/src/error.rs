//! Errors raised while classifying or decomposing a selector.

use thiserror::Error;

use crate::category::SelectorCategory;

/// Why a selector could not be classified or decomposed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GrammarError {
    /// The text matches no simple selector or combinator production
    #[error("`{selector}` is not a simple selector or combinator")]
    NoMatch {
        /// The rejected text
        selector: String,
    },

    /// The selector is valid but not of the kind the operation needs
    #[error("`{selector}` is a {found} selector, expected {expected}")]
    WrongCategory {
        /// What the operation accepts
        expected: &'static str,
        /// What the selector turned out to be
        found: SelectorCategory,
        /// The rejected text
        selector: String,
    },

    /// A negation wraps something a negation may not contain
    #[error("`:not()` may not contain a {category} selector (`{inner}`)")]
    ForbiddenNesting {
        /// The argument of the negation
        inner: String,
        /// Its category
        category: SelectorCategory,
    },

    /// A simple selector sequence contains text no production accepts
    #[error("unexpected input at byte {offset}: `{remainder}`")]
    UnexpectedInput {
        /// Byte offset into the sequence
        offset: usize,
        /// Everything from `offset` onward
        remainder: String,
    },
}

impl GrammarError {
    pub(crate) fn no_match(selector: &str) -> Self {
        Self::NoMatch {
            selector: selector.to_owned(),
        }
    }

    pub(crate) fn wrong_category(
        expected: &'static str,
        found: SelectorCategory,
        selector: &str,
    ) -> Self {
        Self::WrongCategory {
            expected,
            found,
            selector: selector.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_text() {
        let err = GrammarError::wrong_category("attribute", SelectorCategory::Class, ".foo");
        assert_eq!(err.to_string(), "`.foo` is a class selector, expected attribute");

        let err = GrammarError::ForbiddenNesting {
            inner: "::before".to_owned(),
            category: SelectorCategory::PseudoElement,
        };
        assert_eq!(
            err.to_string(),
            "`:not()` may not contain a pseudo-element selector (`::before`)"
        );
    }
}
