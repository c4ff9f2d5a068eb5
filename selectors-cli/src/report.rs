//! What `selectors inspect` knows about each token.

use anyhow::Result;
use selectors_css::{
    AttributeProperties, NegationInnerSelector, PseudoProperties, SelectorCategory,
    get_attribute_properties, get_elements, get_negation_inner_selector_properties,
    get_pseudo_properties, get_type, tokenize_sequence,
};
use serde::Serialize;

/// One simple selector or combinator and everything derived from it.
#[derive(Debug, Serialize)]
pub struct TokenReport {
    /// Normalized token text
    pub text: String,
    /// Byte offset in the inspected selector
    pub offset: usize,
    /// Classification
    pub category: SelectorCategory,
    /// Namespace prefix of type, universal and attribute selectors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    /// Whether the token passes validation
    pub valid: bool,
    /// Attribute fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<AttributeProperties>,
    /// Pseudo-class or pseudo-element fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pseudo: Option<PseudoProperties>,
    /// Negation argument
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negation: Option<NegationInnerSelector>,
}

/// A whole selector, token by token.
#[derive(Debug, Serialize)]
pub struct SequenceReport {
    /// The inspected text
    pub sequence: String,
    /// Tokens grouped by the combinator that leads them
    pub elements: Vec<Vec<String>>,
    /// Per-token detail
    pub tokens: Vec<TokenReport>,
}

impl SequenceReport {
    /// Tokenize and classify `sequence`.
    pub fn build(sequence: &str, strict: bool) -> Result<Self> {
        let mut tokens = Vec::new();
        for token in tokenize_sequence(sequence)? {
            let text = token.text();
            let classification = get_type(text)?;
            let (attribute, pseudo, negation) = match classification.category {
                SelectorCategory::Attribute => (get_attribute_properties(text)?, None, None),
                SelectorCategory::PseudoClass | SelectorCategory::PseudoElement => {
                    (None, get_pseudo_properties(text)?, None)
                }
                // A forbidden argument is reported through `valid`
                SelectorCategory::Negation => (
                    None,
                    None,
                    get_negation_inner_selector_properties(text).ok().flatten(),
                ),
                _ => (None, None, None),
            };

            tokens.push(TokenReport {
                text: text.to_owned(),
                offset: token.offset,
                category: classification.category,
                namespace: classification.namespace,
                valid: selectors_html::is_valid_selector(text, strict),
                attribute,
                pseudo,
                negation,
            });
        }

        Ok(Self {
            sequence: sequence.to_owned(),
            elements: get_elements(sequence)?,
            tokens,
        })
    }

    /// Whether every token is valid.
    pub fn is_valid(&self) -> bool {
        self.tokens.iter().all(|token| token.valid)
    }
}
