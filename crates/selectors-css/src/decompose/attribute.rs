//! Attribute selector decomposition.
//!
//! [§ 6.3 Attribute selectors](https://www.w3.org/TR/selectors/#attribute-selectors)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::category::SelectorCategory;
use crate::classify::get_type;
use crate::error::GrammarError;
use crate::grammar::compile_exact;
use crate::grammar::productions::ATTRIB_CAPTURE;

/// [§ 6.3.1 Attribute presence and value selectors](https://www.w3.org/TR/selectors/#attribute-representation)
/// [§ 6.3.2 Substring matching attribute selectors](https://www.w3.org/TR/selectors/#attribute-substrings)
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    AsRefStr,
    EnumIter,
    Serialize,
    Deserialize,
)]
pub enum AttrOperator {
    /// `[att=val]`
    /// "Represents an element with the att attribute whose value is exactly "val"."
    #[strum(serialize = "=")]
    #[serde(rename = "=")]
    Equals,

    /// `[att~=val]`
    /// "Represents an element with the att attribute whose value is a
    /// whitespace-separated list of words, one of which is exactly "val"."
    #[strum(serialize = "~=")]
    #[serde(rename = "~=")]
    Includes,

    /// `[att|=val]`
    /// "Represents an element with the att attribute, its value either being
    /// exactly "val" or beginning with "val" immediately followed by "-""
    #[strum(serialize = "|=")]
    #[serde(rename = "|=")]
    DashMatch,

    /// `[att^=val]`
    /// "Represents an element with the att attribute whose value begins with
    /// the prefix "val"."
    #[strum(serialize = "^=")]
    #[serde(rename = "^=")]
    PrefixMatch,

    /// `[att$=val]`
    /// "Represents an element with the att attribute whose value ends with
    /// the suffix "val"."
    #[strum(serialize = "$=")]
    #[serde(rename = "$=")]
    SuffixMatch,

    /// `[att*=val]`
    /// "Represents an element with the att attribute whose value contains at
    /// least one instance of the substring "val"."
    #[strum(serialize = "*=")]
    #[serde(rename = "*=")]
    SubstringMatch,
}

/// The parts of an attribute selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeProperties {
    /// Namespace prefix without its `|`; `Some("")` for `[|att]`
    pub namespace: Option<String>,
    /// Attribute name, escapes kept verbatim
    pub name: String,
    /// Comparison operator, absent for presence selectors
    #[serde(rename = "symbol")]
    pub operator: Option<AttrOperator>,
    /// Comparison value with surrounding quotes removed and escapes kept
    pub value: Option<String>,
}

/// Borrowed view of an attribute selector, value quotes still attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AttributeParts<'a> {
    pub namespace: Option<&'a str>,
    pub name: &'a str,
    pub operator: Option<AttrOperator>,
    pub raw_value: Option<&'a str>,
}

static ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    compile_exact(&ATTRIB_CAPTURE)
        .unwrap_or_else(|err| panic!("attribute capture pattern is invalid: {err}"))
});

/// Split an attribute selector into its parts, or `None` if it is not one.
pub(crate) fn split_attribute(selector: &str) -> Option<AttributeParts<'_>> {
    let captures = ATTRIBUTE.captures(selector)?;
    let name = captures.name("name")?.as_str();
    let namespace = captures
        .name("prefix")
        .map(|prefix| {
            let prefix = prefix.as_str();
            prefix.strip_suffix('|').unwrap_or(prefix)
        });
    let operator = captures
        .name("operator")
        .and_then(|operator| operator.as_str().parse().ok());
    let raw_value = captures.name("value").map(|value| value.as_str());

    Some(AttributeParts {
        namespace,
        name,
        operator,
        raw_value,
    })
}

/// Remove one pair of matching quotes around a CSS string.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Decompose an attribute selector such as `[ns|att~="val"]`.
///
/// Returns `Ok(None)` for empty input.
///
/// # Errors
///
/// Returns [`GrammarError::NoMatch`] if `selector` is not a simple selector,
/// or [`GrammarError::WrongCategory`] if it is not an attribute selector.
pub fn get_attribute_properties(
    selector: &str,
) -> Result<Option<AttributeProperties>, GrammarError> {
    if selector.is_empty() {
        return Ok(None);
    }

    let classification = get_type(selector)?;
    if classification.category != SelectorCategory::Attribute {
        return Err(GrammarError::wrong_category(
            "attribute",
            classification.category,
            selector,
        ));
    }

    let parts = split_attribute(selector).ok_or_else(|| GrammarError::no_match(selector))?;
    Ok(Some(AttributeProperties {
        namespace: parts.namespace.map(str::to_owned),
        name: parts.name.to_owned(),
        operator: parts.operator,
        value: parts.raw_value.map(|value| unquote(value).to_owned()),
    }))
}
