//! The Selectors Level 3 grammar as composed regular expressions.
//!
//! [§ 10 The grammar of Selectors](https://www.w3.org/TR/selectors/#w3cselgrammar)
//!
//! - [`lexical`]: tokens of the CSS 2.1 scanner (identifiers, strings, escapes)
//! - [`productions`]: the selectors grammar built on top of them
//! - [`extended`]: argument grammars for `:nth-*()`, `:lang()` and vendor pseudos
//!
//! The fragments are plain regex text. [`Production`] is the typed registry
//! over the ones callers validate against; it compiles every anchored
//! automaton once, on first use or through [`warm_up`].
//!
//! Matching uses the `regex` crate, whose automata run in time linear in the
//! input. None of the fragments use lookaround or backreferences.

pub mod extended;
pub mod lexical;
pub mod productions;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::Serialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

/// Compiled program budget for a single pattern.
///
/// The full `selectors_group` production inlines every identifier and string
/// fragment many times over and exceeds the crate's default limit.
pub const COMPILED_SIZE_LIMIT: usize = 256 * (1 << 20);

/// Lazy DFA cache budget for a single pattern.
pub const DFA_SIZE_LIMIT: usize = 64 * (1 << 20);

/// Compile `source` so that it must match the entire candidate.
///
/// # Errors
///
/// Returns the `regex` error if `source` is not a valid pattern or exceeds the
/// size limits.
pub fn compile_exact(source: &str) -> Result<Regex, regex::Error> {
    build(&format!("^(?:{source})$"))
}

/// Compile `source` so that it must match starting at the first byte of the
/// candidate, with any suffix allowed.
///
/// # Errors
///
/// Returns the `regex` error if `source` is not a valid pattern or exceeds the
/// size limits.
pub fn compile_prefix(source: &str) -> Result<Regex, regex::Error> {
    build(&format!("^(?:{source})"))
}

fn build(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern)
        .size_limit(COMPILED_SIZE_LIMIT)
        .dfa_size_limit(DFA_SIZE_LIMIT)
        .build()
}

/// Named grammar productions.
///
/// Variants are declared leaves first, the order the registry compiles them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Production {
    /// `ident`
    Ident,
    /// `string`
    String,
    /// `namespace_prefix`
    NamespacePrefix,
    /// `combinator`
    Combinator,
    /// `type_selector`
    TypeSelector,
    /// `universal`
    Universal,
    /// `class`
    Class,
    /// `HASH`
    Id,
    /// `attrib`
    Attrib,
    /// `expression`
    Expression,
    /// `functional_pseudo`
    FunctionalPseudo,
    /// `pseudo`
    Pseudo,
    /// `negation_arg`
    NegationArg,
    /// `negation`
    Negation,
    /// `simple_selector_sequence`
    SimpleSelectorSequence,
    /// `selector`
    Selector,
    /// `selectors_group`
    SelectorsGroup,
    /// The `an+b` argument of `:nth-*()`
    Nth,
    /// `:lang(ident)`
    Lang,
    /// Vendor-prefixed pseudo-class or pseudo-element
    VendorPrefixedPseudo,
}

impl Production {
    /// The regex text of this production, without anchors.
    #[must_use]
    pub fn source(self) -> &'static str {
        match self {
            Self::Ident => &lexical::IDENT,
            Self::String => &lexical::STRING,
            Self::NamespacePrefix => &productions::NAMESPACE_PREFIX,
            Self::Combinator => &productions::COMBINATOR,
            Self::TypeSelector => &productions::TYPE_SELECTOR,
            Self::Universal => &productions::UNIVERSAL,
            Self::Class => &productions::CLASS,
            Self::Id => &productions::ID,
            Self::Attrib => &productions::ATTRIB,
            Self::Expression => &productions::EXPRESSION,
            Self::FunctionalPseudo => &productions::FUNCTIONAL_PSEUDO,
            Self::Pseudo => &productions::PSEUDO,
            Self::NegationArg => &productions::NEGATION_ARG,
            Self::Negation => &productions::NEGATION,
            Self::SimpleSelectorSequence => &productions::SIMPLE_SELECTOR_SEQUENCE,
            Self::Selector => &productions::SELECTOR,
            Self::SelectorsGroup => &productions::SELECTORS_GROUP,
            Self::Nth => &extended::NTH,
            Self::Lang => &extended::LANG,
            Self::VendorPrefixedPseudo => &extended::VENDOR_PREFIXED_PSEUDO,
        }
    }

    /// The compiled whole-input automaton for this production.
    #[must_use]
    pub fn anchored(self) -> &'static Regex {
        &REGISTRY[self as usize]
    }

    /// Whether `candidate` is, in its entirety, an instance of this production.
    #[must_use]
    pub fn is_exact_match(self, candidate: &str) -> bool {
        self.anchored().is_match(candidate)
    }
}

/// Anchored automata indexed by `Production as usize`.
static REGISTRY: Lazy<Vec<Regex>> = Lazy::new(|| {
    Production::iter()
        .map(|production| {
            #[cfg(feature = "grammar-trace")]
            eprintln!(
                "[grammar] compiling {production} ({} bytes of pattern)",
                production.source().len()
            );
            // The fragments are compile-time constants; failing here is a bug
            // in this module, not in caller input.
            compile_exact(production.source())
                .unwrap_or_else(|err| panic!("grammar production `{production}` is invalid: {err}"))
        })
        .collect()
});

/// Compile every production now rather than on first validation.
pub fn warm_up() {
    let _ = Lazy::force(&REGISTRY);
}
