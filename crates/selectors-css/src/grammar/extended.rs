//! Grammar fragments that sit outside the core selectors grammar.
//!
//! The core grammar accepts any `FUNCTION expression ')'` pseudo-class; the
//! arguments of the structural and `:lang()` pseudo-classes are refined here.

use once_cell::sync::Lazy;

use super::lexical::{
    IDENT, LETTER_D, LETTER_E, LETTER_N, LETTER_O, LETTER_V, NAME_CHAR, NAME_START,
    OPTIONAL_WHITESPACE, group,
};

/// `integer  [0-9]+`
pub const INTEGER: &str = "[0-9]+";

/// `ODD` spelled through the letter fragments.
pub static ODD: Lazy<String> = Lazy::new(|| group(&[&LETTER_O, &LETTER_D, &LETTER_D]));

/// `EVEN` spelled through the letter fragments.
pub static EVEN: Lazy<String> =
    Lazy::new(|| group(&[&LETTER_E, &LETTER_V, &LETTER_E, &LETTER_N]));

/// The `an+b` argument of the `:nth-*()` pseudo-classes.
///
/// [§ 6.6.5.2 :nth-child() pseudo-class](https://www.w3.org/TR/selectors/#nth-child-pseudo)
/// "The :nth-child(an+b) pseudo-class notation represents an element that has
/// an+b-1 siblings before it in the document tree, for any positive integer or
/// zero value of n"
///
/// ```text
/// nth
///   : S* [ ['-'|'+']? INTEGER? {N} [ S* ['-'|'+'] S* INTEGER ]? |
///          ['-'|'+']? INTEGER | {O}{D}{D} | {E}{V}{E}{N} ] S*
/// ```
///
/// A sign directly before the `a` coefficient may not be followed by
/// whitespace, so `+ 2n` and `+ 2` are rejected.
pub static NTH: Lazy<String> = Lazy::new(|| {
    let w = OPTIONAL_WHITESPACE;
    let coefficient = group(&[
        "[-+]?(?:",
        INTEGER,
        ")?",
        &LETTER_N,
        "(?:",
        w,
        "[-+]",
        w,
        INTEGER,
        ")?",
    ]);
    let constant = group(&["[-+]?", INTEGER]);
    group(&[w, "(?:", &coefficient, "|", &constant, "|", &ODD, "|", &EVEN, ")", w])
});

/// `:lang(ident)`
///
/// [§ 6.6.3 The language pseudo-class](https://www.w3.org/TR/selectors/#lang-pseudo)
/// "The pseudo-class :lang(C) represents an element that is in language C."
pub static LANG: Lazy<String> = Lazy::new(|| group(&[":(?i:lang)\\(", &IDENT, "\\)"]));

/// A vendor-prefixed pseudo such as `:-webkit-scrollbar` or `::-moz-selection`.
///
/// [CSS 2.1 § 4.1.2.1 Vendor-specific extensions](https://www.w3.org/TR/CSS21/syndata.html#vendor-keywords)
/// "An initial dash or underscore is guaranteed never to be used in a property
/// or keyword by any current or future level of CSS."
///
/// ```text
/// '::'? [-_] nmstart nmchar* '-' nmstart nmchar*
/// ```
pub static VENDOR_PREFIXED_PSEUDO: Lazy<String> = Lazy::new(|| {
    group(&[
        "::?[-_]",
        &NAME_START,
        &NAME_CHAR,
        "*-",
        &NAME_START,
        &NAME_CHAR,
        "*",
    ])
});

/// Same shape as [`VENDOR_PREFIXED_PSEUDO`], with the shortest possible
/// prefix (marker through the first separating hyphen) captured as `vendor`.
pub static VENDOR_PREFIX_CAPTURE: Lazy<String> = Lazy::new(|| {
    group(&[
        "::?(?P<vendor>[-_]",
        &NAME_START,
        &NAME_CHAR,
        "*?-)(?P<rest>",
        &NAME_START,
        &NAME_CHAR,
        "*)",
    ])
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::is_exact_match;

    #[test]
    fn test_nth_accepts_formula_forms() {
        for valid in ["+2n", " 3n + 1 ", " +3n - 2 ", " -n+ 6", " +6 ", "n", "1n+0", "n+0"] {
            assert!(is_exact_match(&NTH, valid), "{valid:?} should be valid");
        }
    }

    #[test]
    fn test_nth_accepts_keywords_case_insensitively() {
        for valid in ["odd", "even", " ODD ", "Even", r"\6f dd"] {
            assert!(is_exact_match(&NTH, valid), "{valid:?} should be valid");
        }
    }

    #[test]
    fn test_nth_rejects_detached_signs() {
        for invalid in ["+ 2n", "+ 2", "3 n", "10n+-1", "", "2n+", "oddd"] {
            assert!(!is_exact_match(&NTH, invalid), "{invalid:?} should be invalid");
        }
    }

    #[test]
    fn test_lang_requires_identifier() {
        assert!(is_exact_match(&LANG, ":lang(en)"));
        assert!(is_exact_match(&LANG, ":LANG(fr-be)"));
        assert!(!is_exact_match(&LANG, ":lang()"));
        assert!(!is_exact_match(&LANG, ":lang(1en)"));
    }

    #[test]
    fn test_vendor_prefixed_pseudo() {
        assert!(is_exact_match(&VENDOR_PREFIXED_PSEUDO, ":-webkit-scrollbar"));
        assert!(is_exact_match(&VENDOR_PREFIXED_PSEUDO, "::-moz-selection"));
        assert!(is_exact_match(&VENDOR_PREFIXED_PSEUDO, ":_snack-bar"));
        assert!(!is_exact_match(&VENDOR_PREFIXED_PSEUDO, ":-o-"));
        assert!(!is_exact_match(&VENDOR_PREFIXED_PSEUDO, ":--baz"));
        assert!(!is_exact_match(&VENDOR_PREFIXED_PSEUDO, ":::-moz-foo"));
    }
}
