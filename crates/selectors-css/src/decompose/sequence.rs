//! Tokenizing a selector into simple selectors and combinators.
//!
//! [§ 3 Selector syntax](https://www.w3.org/TR/selectors/#selector-syntax)
//! "A selector is a chain of one or more sequences of simple selectors
//! separated by combinators."

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::decompose::group::CSS_WHITESPACE;
use crate::error::GrammarError;
use crate::grammar::{Production, compile_prefix};

/// Productions a token can be, in tie-break order.
///
/// At each position the longest match wins; equal lengths go to the earlier
/// entry. `ns|*` is a universal selector rather than the type selector `ns`
/// followed by garbage, and `:not(.a)` is a negation rather than `:not`.
const TOKEN_PRODUCTIONS: [Production; 8] = [
    Production::TypeSelector,
    Production::Universal,
    Production::Id,
    Production::Class,
    Production::Attrib,
    Production::Negation,
    Production::Pseudo,
    Production::Combinator,
];

static TOKEN_PATTERNS: Lazy<Vec<(Production, Regex)>> = Lazy::new(|| {
    TOKEN_PRODUCTIONS
        .iter()
        .map(|&production| {
            let regex = compile_prefix(production.source()).unwrap_or_else(|err| {
                panic!("token pattern for `{production}` is invalid: {err}")
            });
            (production, regex)
        })
        .collect()
});

/// One simple selector or combinator, borrowed from the tokenized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectorToken<'a> {
    /// The production that consumed this token
    pub production: Production,
    /// Byte offset of `raw` in the tokenized text
    pub offset: usize,
    /// The exact consumed text, whitespace included
    pub raw: &'a str,
}

impl SelectorToken<'_> {
    /// Whether this token separates two sequences.
    #[must_use]
    pub fn is_combinator(&self) -> bool {
        self.production == Production::Combinator
    }

    /// Normalized token text.
    ///
    /// Combinators lose their surrounding whitespace, and a combinator made of
    /// whitespace alone becomes a single space. Other tokens are returned as
    /// written.
    #[must_use]
    pub fn text(&self) -> &str {
        if !self.is_combinator() {
            return self.raw;
        }
        match self.raw.trim_matches(CSS_WHITESPACE) {
            "" => " ",
            symbol => symbol,
        }
    }
}

/// Tokenize a selector, keeping the exact span of every token.
///
/// Concatenating the `raw` text of the returned tokens reproduces `sequence`.
///
/// # Errors
///
/// Returns [`GrammarError::UnexpectedInput`] at the first position where no
/// simple selector or combinator can start.
pub fn tokenize_sequence(sequence: &str) -> Result<Vec<SelectorToken<'_>>, GrammarError> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    while offset < sequence.len() {
        let rest = &sequence[offset..];
        let (production, length) = TOKEN_PATTERNS
            .iter()
            .filter_map(|(production, regex)| {
                regex
                    .find(rest)
                    .map(|found| (*production, found.end()))
                    .filter(|&(_, length)| length > 0)
            })
            .fold(None, |best: Option<(Production, usize)>, candidate| match best {
                Some((_, best_length)) if best_length >= candidate.1 => best,
                _ => Some(candidate),
            })
            .ok_or_else(|| GrammarError::UnexpectedInput {
                offset,
                remainder: rest.to_owned(),
            })?;

        tokens.push(SelectorToken {
            production,
            offset,
            raw: &rest[..length],
        });
        offset += length;
    }

    Ok(tokens)
}

/// Split a selector into its simple selectors and combinators.
///
/// ```ignore
/// assert_eq!(
///     get_selectors(".foo:nth-child(2n) > p#bar")?,
///     [".foo", ":nth-child(2n)", ">", "p", "#bar"],
/// );
/// ```
///
/// # Errors
///
/// Returns [`GrammarError::UnexpectedInput`] if part of `sequence` is not a
/// simple selector or combinator.
pub fn get_selectors(sequence: &str) -> Result<Vec<String>, GrammarError> {
    Ok(tokenize_sequence(sequence)?
        .iter()
        .map(|token| token.text().to_owned())
        .collect())
}

/// Split a selector into groups, each led by the combinator that joins it to
/// the previous group.
///
/// ```ignore
/// assert_eq!(get_elements(".foo #bar")?, [vec![".foo"], vec![" ", "#bar"]]);
/// ```
///
/// # Errors
///
/// Returns [`GrammarError::UnexpectedInput`] if part of `sequence` is not a
/// simple selector or combinator.
pub fn get_elements(sequence: &str) -> Result<Vec<Vec<String>>, GrammarError> {
    let mut elements: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    for token in tokenize_sequence(sequence)? {
        if token.is_combinator() && !current.is_empty() {
            elements.push(std::mem::take(&mut current));
        }
        current.push(token.text().to_owned());
    }
    if !current.is_empty() {
        elements.push(current);
    }

    Ok(elements)
}
