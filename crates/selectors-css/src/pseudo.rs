//! Which pseudo-classes and pseudo-elements CSS actually defines.
//!
//! The grammar accepts any identifier after a colon. These checks narrow that
//! to the Level 3 names, plus anything carrying a vendor prefix.

use crate::grammar::Production;

/// [§ 6.6 Pseudo-classes](https://www.w3.org/TR/selectors/#pseudo-classes)
///
/// The non-functional pseudo-classes of Selectors Level 3.
pub const SIMPLE_PSEUDO_CLASSES: [&str; 17] = [
    "root",
    "first-child",
    "last-child",
    "first-of-type",
    "last-of-type",
    "only-child",
    "only-of-type",
    "empty",
    "link",
    "visited",
    "active",
    "hover",
    "focus",
    "target",
    "enabled",
    "disabled",
    "checked",
];

/// [§ 6.6.5 Structural pseudo-classes](https://www.w3.org/TR/selectors/#structural-pseudos)
///
/// The functional pseudo-classes taking an `an+b` argument.
pub const NTH_PSEUDO_CLASSES: [&str; 4] =
    ["nth-child", "nth-last-child", "nth-of-type", "nth-last-of-type"];

/// [§ 7 Pseudo-elements](https://www.w3.org/TR/selectors/#pseudo-elements)
pub const PSEUDO_ELEMENTS: [&str; 8] = [
    ":first-line",
    ":first-letter",
    ":before",
    ":after",
    "::first-line",
    "::first-letter",
    "::before",
    "::after",
];

fn contains_ignore_case(names: &[&str], candidate: &str) -> bool {
    names.iter().any(|name| name.eq_ignore_ascii_case(candidate))
}

/// Whether `pseudo` is a pseudo-class CSS defines.
///
/// Accepts the [`SIMPLE_PSEUDO_CLASSES`], `:lang(<ident>)`, the
/// [`NTH_PSEUDO_CLASSES`] with a well-formed `an+b` argument, and any
/// vendor-prefixed pseudo without arguments. Names compare ASCII
/// case-insensitively. Two colons always make a pseudo-element, never a
/// pseudo-class.
///
/// ```ignore
/// assert!(is_valid_css_pseudo_class(":nth-child( 2n + 1 )"));
/// assert!(is_valid_css_pseudo_class(":-webkit-autofill"));
/// assert!(!is_valid_css_pseudo_class(":hover(odd)"));
/// ```
#[must_use]
pub fn is_valid_css_pseudo_class(pseudo: &str) -> bool {
    if pseudo.starts_with("::") {
        return false;
    }
    let Some(body) = pseudo.strip_prefix(':') else {
        return false;
    };

    // Functional form: `name(args)`
    if let Some((name, rest)) = body.split_once('(') {
        let Some(args) = rest.strip_suffix(')') else {
            return false;
        };
        if name.eq_ignore_ascii_case("lang") {
            return Production::Lang.is_exact_match(pseudo);
        }
        return contains_ignore_case(&NTH_PSEUDO_CLASSES, name)
            && Production::Nth.is_exact_match(args);
    }

    contains_ignore_case(&SIMPLE_PSEUDO_CLASSES, body)
        || Production::VendorPrefixedPseudo.is_exact_match(pseudo)
}

/// Whether `pseudo` is a pseudo-element CSS defines.
///
/// Accepts the four CSS 2.1 pseudo-elements in either colon notation, and
/// any vendor-prefixed pseudo.
///
/// ```ignore
/// assert!(is_valid_css_pseudo_element(":before"));
/// assert!(is_valid_css_pseudo_element("::-moz-selection"));
/// assert!(!is_valid_css_pseudo_element("::foo"));
/// ```
#[must_use]
pub fn is_valid_css_pseudo_element(pseudo: &str) -> bool {
    contains_ignore_case(&PSEUDO_ELEMENTS, pseudo)
        || Production::VendorPrefixedPseudo.is_exact_match(pseudo)
}
