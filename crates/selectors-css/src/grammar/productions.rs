//! The selectors grammar proper.
//!
//! [§ 10.1 Grammar](https://www.w3.org/TR/selectors/#w3cselgrammar)
//! "The grammar below defines the syntax of Selectors. It is globally LL(1)
//! and can be locally LL(2)"
//!
//! Each production is built from the lexical fragments and the productions
//! declared before it.

use once_cell::sync::Lazy;

use super::lexical::{
    COMMA, DASH_MATCH, DIMENSION, FUNCTION, GREATER, HASH, IDENT, INCLUDES, NOT, NUM,
    OPTIONAL_WHITESPACE, PLUS, PREFIX_MATCH, STRING, SUBSTRING_MATCH, SUFFIX_MATCH, TILDE,
    WHITESPACE, group,
};

const W: &str = OPTIONAL_WHITESPACE;

/// ```text
/// combinator
///   : PLUS S* | GREATER S* | TILDE S* | S+
/// ```
pub static COMBINATOR: Lazy<String> = Lazy::new(|| {
    group(&["(?:", &PLUS, "|", &GREATER, "|", &TILDE, ")", W, "|", WHITESPACE])
});

/// ```text
/// namespace_prefix
///   : [ IDENT | '*' ]? '|'
/// ```
pub static NAMESPACE_PREFIX: Lazy<String> = Lazy::new(|| group(&["(?:", &IDENT, r"|\*)?\|"]));

/// ```text
/// type_selector
///   : [ namespace_prefix ]? element_name
/// ```
pub static TYPE_SELECTOR: Lazy<String> =
    Lazy::new(|| group(&["(?:", &NAMESPACE_PREFIX, ")?", &IDENT]));

/// ```text
/// universal
///   : [ namespace_prefix ]? '*'
/// ```
pub static UNIVERSAL: Lazy<String> =
    Lazy::new(|| group(&["(?:", &NAMESPACE_PREFIX, r")?\*"]));

/// ```text
/// class
///   : '.' IDENT
/// ```
pub static CLASS: Lazy<String> = Lazy::new(|| group(&[r"\.", &IDENT]));

/// `HASH`, the id selector.
pub static ID: Lazy<String> = Lazy::new(|| HASH.clone());

/// The operators accepted between an attribute name and its value.
pub static ATTRIBUTE_OPERATOR: Lazy<String> = Lazy::new(|| {
    group(&[
        PREFIX_MATCH,
        "|",
        SUFFIX_MATCH,
        "|",
        SUBSTRING_MATCH,
        "|=|",
        INCLUDES,
        "|",
        DASH_MATCH,
    ])
});

/// ```text
/// attrib
///   : '[' S* [ namespace_prefix ]? IDENT S*
///         [ [ PREFIXMATCH | SUFFIXMATCH | SUBSTRINGMATCH | '=' |
///             INCLUDES | DASHMATCH ] S* [ IDENT | STRING ] S*
///         ]? ']'
/// ```
pub static ATTRIB: Lazy<String> = Lazy::new(|| {
    group(&[
        r"\[",
        W,
        "(?:",
        &NAMESPACE_PREFIX,
        ")?",
        &IDENT,
        W,
        "(?:",
        &ATTRIBUTE_OPERATOR,
        W,
        "(?:",
        &IDENT,
        "|",
        &STRING,
        ")",
        W,
        r")?\]",
    ])
});

/// [`ATTRIB`] with the namespace prefix, name, operator and value captured.
pub static ATTRIB_CAPTURE: Lazy<String> = Lazy::new(|| {
    group(&[
        r"\[",
        W,
        "(?P<prefix>",
        &NAMESPACE_PREFIX,
        ")?(?P<name>",
        &IDENT,
        ")",
        W,
        "(?:(?P<operator>",
        &ATTRIBUTE_OPERATOR,
        ")",
        W,
        "(?P<value>",
        &IDENT,
        "|",
        &STRING,
        ")",
        W,
        r")?\]",
    ])
});

/// ```text
/// expression
///   : [ [ PLUS | '-' | DIMENSION | NUMBER | STRING | IDENT ] S* ]+
/// ```
pub static EXPRESSION: Lazy<String> = Lazy::new(|| {
    group(&[
        "(?:(?:",
        &PLUS,
        "|-|",
        &DIMENSION,
        "|",
        NUM,
        "|",
        &STRING,
        "|",
        &IDENT,
        ")",
        W,
        ")+",
    ])
});

/// ```text
/// functional_pseudo
///   : FUNCTION S* expression ')'
/// ```
pub static FUNCTIONAL_PSEUDO: Lazy<String> =
    Lazy::new(|| group(&[&FUNCTION, W, &EXPRESSION, r"\)"]));

/// ```text
/// pseudo
///   : ':' ':'? [ IDENT | functional_pseudo ]
/// ```
pub static PSEUDO: Lazy<String> =
    Lazy::new(|| group(&["::?(?:", &FUNCTIONAL_PSEUDO, "|", &IDENT, ")"]));

/// ```text
/// negation_arg
///   : type_selector | universal | HASH | class | attrib | pseudo
/// ```
pub static NEGATION_ARG: Lazy<String> = Lazy::new(|| {
    group(&[
        &TYPE_SELECTOR,
        "|",
        &UNIVERSAL,
        "|",
        &ID,
        "|",
        &CLASS,
        "|",
        &ATTRIB,
        "|",
        &PSEUDO,
    ])
});

/// ```text
/// negation
///   : NOT S* negation_arg S* ')'
/// ```
pub static NEGATION: Lazy<String> =
    Lazy::new(|| group(&[&NOT, W, &NEGATION_ARG, W, r"\)"]));

/// ```text
/// simple_selector_sequence
///   : [ type_selector | universal ]
///     [ HASH | class | attrib | pseudo | negation ]*
///   | [ HASH | class | attrib | pseudo | negation ]+
/// ```
pub static SIMPLE_SELECTOR_SEQUENCE: Lazy<String> = Lazy::new(|| {
    let qualifier = group(&[
        &ID,
        "|",
        &CLASS,
        "|",
        &ATTRIB,
        "|",
        &PSEUDO,
        "|",
        &NEGATION,
    ]);
    group(&[
        "(?:",
        &TYPE_SELECTOR,
        "|",
        &UNIVERSAL,
        ")",
        &qualifier,
        "*|",
        &qualifier,
        "+",
    ])
});

/// ```text
/// selector
///   : simple_selector_sequence [ combinator simple_selector_sequence ]*
/// ```
pub static SELECTOR: Lazy<String> = Lazy::new(|| {
    group(&[
        &SIMPLE_SELECTOR_SEQUENCE,
        "(?:",
        &COMBINATOR,
        &SIMPLE_SELECTOR_SEQUENCE,
        ")*",
    ])
});

/// ```text
/// selectors_group
///   : selector [ COMMA S* selector ]*
/// ```
pub static SELECTORS_GROUP: Lazy<String> =
    Lazy::new(|| group(&[&SELECTOR, "(?:", &COMMA, W, &SELECTOR, ")*"]));
