//! Classification of a single simple selector or combinator.

use crate::category::{Classification, SelectorCategory};
use crate::decompose::attribute::split_attribute;
use crate::decompose::split_namespace_and_name;
use crate::error::GrammarError;
use crate::grammar::Production;

/// Pseudo-elements that CSS levels 1 and 2 wrote with a single colon.
///
/// [§ 7 Pseudo-elements](https://www.w3.org/TR/selectors/#pseudo-elements)
/// "For compatibility with existing style sheets, user agents must also
/// accept the previous one-colon notation for pseudo-elements introduced in
/// CSS levels 1 and 2 (namely, :first-line, :first-letter, :before and
/// :after)."
pub const LEGACY_PSEUDO_ELEMENTS: [&str; 4] = ["first-line", "first-letter", "before", "after"];

/// Tried in order; the first production matching the whole text wins.
const CLASSIFICATION_ORDER: [(Production, SelectorCategory); 7] = [
    (Production::Combinator, SelectorCategory::Combinator),
    (Production::TypeSelector, SelectorCategory::Type),
    (Production::Universal, SelectorCategory::Universal),
    (Production::Class, SelectorCategory::Class),
    (Production::Id, SelectorCategory::Id),
    (Production::Attrib, SelectorCategory::Attribute),
    (Production::Negation, SelectorCategory::Negation),
];

/// Classify `selector` as one simple selector or one combinator.
///
/// Pseudo selectors are reported as pseudo-elements when they use the `::`
/// notation or are one of the [`LEGACY_PSEUDO_ELEMENTS`] written with a
/// single colon, and as pseudo-classes otherwise. This only decides the
/// category; whether the pseudo is one CSS defines is checked by
/// [`is_valid_css_pseudo_class`](crate::pseudo::is_valid_css_pseudo_class)
/// and [`is_valid_css_pseudo_element`](crate::pseudo::is_valid_css_pseudo_element).
///
/// # Errors
///
/// Returns [`GrammarError::NoMatch`] if `selector` is empty or matches no
/// production.
pub fn get_type(selector: &str) -> Result<Classification, GrammarError> {
    if selector.is_empty() {
        return Err(GrammarError::no_match(selector));
    }

    let category = CLASSIFICATION_ORDER
        .iter()
        .find(|(production, _)| production.is_exact_match(selector))
        .map(|&(_, category)| category)
        .or_else(|| {
            Production::Pseudo
                .is_exact_match(selector)
                .then(|| pseudo_category(selector))
        })
        .ok_or_else(|| GrammarError::no_match(selector))?;

    let namespace = match category {
        SelectorCategory::Type | SelectorCategory::Universal => {
            split_namespace_and_name(selector).0.map(str::to_owned)
        }
        SelectorCategory::Attribute => split_attribute(selector)
            .and_then(|parts| parts.namespace)
            .map(str::to_owned),
        _ => None,
    };

    Ok(Classification {
        category,
        namespace,
    })
}

/// Whether `selector`, already known to be a pseudo, uses pseudo-element
/// notation.
#[must_use]
pub fn is_pseudo_element_form(selector: &str) -> bool {
    if selector.starts_with("::") {
        return true;
    }
    selector.strip_prefix(':').is_some_and(|name| {
        LEGACY_PSEUDO_ELEMENTS
            .iter()
            .any(|legacy| legacy.eq_ignore_ascii_case(name))
    })
}

fn pseudo_category(selector: &str) -> SelectorCategory {
    if is_pseudo_element_form(selector) {
        SelectorCategory::PseudoElement
    } else {
        SelectorCategory::PseudoClass
    }
}
