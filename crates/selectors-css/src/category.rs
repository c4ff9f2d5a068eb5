//! Selector categories.
//!
//! [§ 3 Selector syntax](https://www.w3.org/TR/selectors/#selector-syntax)
//! "A simple selector is either a type selector, universal selector,
//! attribute selector, class selector, ID selector, or pseudo-class."

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// What kind of simple selector (or combinator) a piece of text is.
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
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SelectorCategory {
    /// [§ 8 Combinators](https://www.w3.org/TR/selectors/#combinators)
    ///
    /// Examples: ` `, `>`, `+`, `~`
    Combinator,

    /// [§ 6.1 Type selector](https://www.w3.org/TR/selectors/#type-selectors)
    /// "A type selector is the name of a document language element type
    /// written using the syntax of CSS qualified names"
    ///
    /// Examples: `div`, `svg|rect`, `*|p`
    Type,

    /// [§ 6.2 Universal selector](https://www.w3.org/TR/selectors/#universal-selector)
    ///
    /// Examples: `*`, `ns|*`
    Universal,

    /// [§ 6.4 Class selectors](https://www.w3.org/TR/selectors/#class-html)
    ///
    /// Example: `.warning`
    Class,

    /// [§ 6.5 ID selectors](https://www.w3.org/TR/selectors/#id-selectors)
    ///
    /// Example: `#chapter1`
    Id,

    /// [§ 6.3 Attribute selectors](https://www.w3.org/TR/selectors/#attribute-selectors)
    ///
    /// Examples: `[title]`, `[lang|=en]`, `[xml|lang]`
    Attribute,

    /// [§ 6.6.7 The negation pseudo-class](https://www.w3.org/TR/selectors/#negation)
    ///
    /// Example: `:not(.external)`
    Negation,

    /// [§ 6.6 Pseudo-classes](https://www.w3.org/TR/selectors/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:nth-child(2n+1)`
    PseudoClass,

    /// [§ 7 Pseudo-elements](https://www.w3.org/TR/selectors/#pseudo-elements)
    ///
    /// Examples: `::first-line`, `:before`
    PseudoElement,
}

impl SelectorCategory {
    /// Whether selectors of this category may carry a namespace prefix.
    #[must_use]
    pub const fn takes_namespace(self) -> bool {
        matches!(self, Self::Type | Self::Universal | Self::Attribute)
    }

    /// Whether this is either pseudo category.
    #[must_use]
    pub const fn is_pseudo(self) -> bool {
        matches!(self, Self::PseudoClass | Self::PseudoElement)
    }
}

/// Result of classifying a single simple selector or combinator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// What kind of selector it is
    pub category: SelectorCategory,

    /// [§ 6.1.1 Type selectors and namespaces](https://www.w3.org/TR/selectors/#typenmsp)
    ///
    /// Only set for type, universal and attribute selectors that carry a
    /// prefix. `Some("")` is the explicit "no namespace" prefix (`|foo`),
    /// `Some("*")` means any namespace (`*|foo`).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub namespace: Option<String>,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_names_are_kebab_case() {
        assert_eq!(SelectorCategory::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(SelectorCategory::PseudoElement.as_ref(), "pseudo-element");
        assert_eq!(
            SelectorCategory::from_str("pseudo-element"),
            Ok(SelectorCategory::PseudoElement)
        );
    }

    #[test]
    fn test_display_and_parse_agree() {
        for category in SelectorCategory::iter() {
            assert_eq!(SelectorCategory::from_str(&category.to_string()), Ok(category));
        }
    }

    #[test]
    fn test_only_qualified_names_take_namespaces() {
        let namespaced: Vec<_> = SelectorCategory::iter()
            .filter(|category| category.takes_namespace())
            .collect();
        assert_eq!(
            namespaced,
            [
                SelectorCategory::Type,
                SelectorCategory::Universal,
                SelectorCategory::Attribute
            ]
        );
    }
}
