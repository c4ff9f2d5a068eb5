//! HTML vocabulary checks for CSS selectors
//!
//! [`selectors_css`] validates selector syntax only. This crate adds the
//! document-language half: whether a type selector names an element, and an
//! attribute selector an attribute, that HTML5, SVG 1.1, MathML 3 or
//! WAI-ARIA define.
//!
//! ```ignore
//! use selectors_html::is_valid_selector;
//!
//! assert!(is_valid_selector("marquee", false));
//! assert!(!is_valid_selector("marquee", true));
//! assert!(is_valid_selector("[aria-label]", true));
//! ```

pub mod attributes;
pub mod elements;

use selectors_css::{StrictMode, Validator, get_attribute_properties, split_namespace_and_name};
use serde::Serialize;
use strum_macros::{Display, EnumIter};

use crate::attributes::{HTML_ATTRIBUTES, MATHML_ATTRIBUTES, SVG_ATTRIBUTES, WAI_ARIA_ATTRIBUTES};
use crate::elements::{HTML_ELEMENTS, MATHML_ELEMENTS, SVG_ELEMENTS};

/// [Custom Elements § 2.3](https://www.w3.org/TR/custom-elements/#valid-custom-element-name)
///
/// A lowercase name containing at least one hyphen. The reserved hyphenated
/// names (`font-face`, `missing-glyph`, ...) are all SVG or MathML elements
/// and are already accepted through those lists.
const CUSTOM_ELEMENT_NAME: &str = "(?:[a-z]+-)+[a-z]+";

/// [HTML5 § 3.2.3.9 Embedding custom non-visible data with the data-* attributes](https://www.w3.org/TR/html5/dom.html#embedding-custom-non-visible-data-with-the-data-*-attributes)
const DATA_ATTRIBUTE_PREFIX: &str = "data-";

/// Where a name is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize)]
pub enum Vocabulary {
    /// HTML5
    #[strum(serialize = "HTML")]
    Html,
    /// SVG 1.1
    #[strum(serialize = "SVG")]
    Svg,
    /// MathML 3
    #[strum(serialize = "MathML")]
    MathMl,
    /// WAI-ARIA states and properties
    #[strum(serialize = "WAI-ARIA")]
    WaiAria,
    /// An author-defined element such as `<my-widget>`
    #[strum(serialize = "custom element")]
    CustomElement,
    /// An author-defined `data-*` attribute
    #[strum(serialize = "data attribute")]
    DataAttribute,
}

fn listed(names: &[&str], candidate: &str) -> bool {
    names.iter().any(|name| name.eq_ignore_ascii_case(candidate))
}

/// Which vocabulary defines the element `name`, if any.
///
/// Listed names compare ASCII case-insensitively; custom element names must
/// be lowercase.
#[must_use]
pub fn element_vocabulary(name: &str) -> Option<Vocabulary> {
    [
        (Vocabulary::Html, HTML_ELEMENTS),
        (Vocabulary::Svg, SVG_ELEMENTS),
        (Vocabulary::MathMl, MATHML_ELEMENTS),
    ]
    .into_iter()
    .find(|(_, names)| listed(names, name))
    .map(|(vocabulary, _)| vocabulary)
    .or_else(|| {
        selectors_css::is_exact_match(CUSTOM_ELEMENT_NAME, name)
            .then_some(Vocabulary::CustomElement)
    })
}

/// Which vocabulary defines the attribute `name`, if any.
///
/// `name` is compared ASCII case-insensitively, escapes included.
#[must_use]
pub fn attribute_vocabulary(name: &str) -> Option<Vocabulary> {
    [
        (Vocabulary::Html, HTML_ATTRIBUTES),
        (Vocabulary::Svg, SVG_ATTRIBUTES),
        (Vocabulary::MathMl, MATHML_ATTRIBUTES),
        (Vocabulary::WaiAria, WAI_ARIA_ATTRIBUTES),
    ]
    .into_iter()
    .find(|(_, names)| listed(names, name))
    .map(|(vocabulary, _)| vocabulary)
    .or_else(|| {
        let is_data = name.len() > DATA_ATTRIBUTE_PREFIX.len()
            && name
                .get(..DATA_ATTRIBUTE_PREFIX.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(DATA_ATTRIBUTE_PREFIX));
        is_data.then_some(Vocabulary::DataAttribute)
    })
}

/// Whether the type selector `selector` names a known or custom element.
///
/// A namespace prefix is ignored: `svg|rect` is checked as `rect`.
#[must_use]
pub fn is_valid_html_element(selector: &str) -> bool {
    element_vocabulary(split_namespace_and_name(selector).1).is_some()
}

/// Whether the attribute selector `selector` names a known or `data-*`
/// attribute. Anything that is not an attribute selector is rejected.
#[must_use]
pub fn is_valid_html_attribute(selector: &str) -> bool {
    matches!(
        get_attribute_properties(selector),
        Ok(Some(properties)) if attribute_vocabulary(&properties.name).is_some()
    )
}

/// The HTML5, SVG, MathML and WAI-ARIA vocabulary as a [`StrictMode`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlStrict;

impl StrictMode for HtmlStrict {
    fn is_valid_element(&self, name: &str) -> bool {
        element_vocabulary(name).is_some()
    }

    fn is_valid_attribute(&self, name: &str) -> bool {
        attribute_vocabulary(name).is_some()
    }
}

/// Whether `selector` is a valid simple selector or combinator, also
/// requiring known element and attribute names when `html_strict` is set.
#[must_use]
pub fn is_valid_selector(selector: &str, html_strict: bool) -> bool {
    let validator = Validator::new();
    if html_strict {
        validator.with_strict_mode(&HtmlStrict).is_valid_selector(selector)
    } else {
        validator.is_valid_selector(selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_lists_are_lowercase() {
        for names in [HTML_ELEMENTS, SVG_ELEMENTS, MATHML_ELEMENTS] {
            for name in names {
                assert_eq!(*name, name.to_ascii_lowercase());
            }
        }
        for names in [HTML_ATTRIBUTES, SVG_ATTRIBUTES, MATHML_ATTRIBUTES, WAI_ARIA_ATTRIBUTES] {
            for name in names {
                assert_eq!(*name, name.to_ascii_lowercase());
            }
        }
    }

    #[test]
    fn test_first_vocabulary_wins() {
        assert_eq!(element_vocabulary("a"), Some(Vocabulary::Html));
        assert_eq!(element_vocabulary("rect"), Some(Vocabulary::Svg));
        assert_eq!(element_vocabulary("mrow"), Some(Vocabulary::MathMl));
        assert_eq!(element_vocabulary("x-foo"), Some(Vocabulary::CustomElement));
        assert_eq!(attribute_vocabulary("aria-label"), Some(Vocabulary::WaiAria));
        assert_eq!(attribute_vocabulary("data-x"), Some(Vocabulary::DataAttribute));
        assert_eq!(attribute_vocabulary("data-"), None);
    }

    #[test]
    fn test_vocabulary_display_names() {
        assert_eq!(Vocabulary::MathMl.to_string(), "MathML");
        assert_eq!(Vocabulary::DataAttribute.to_string(), "data attribute");
    }
}
