//! Decomposition of selector text into its parts.
//!
//! - [`group`]: a selectors group into its comma-separated selectors
//! - [`sequence`]: a selector into simple selectors and combinators
//! - [`attribute`], [`pseudo`], [`negation`]: one simple selector into fields
//!
//! Decomposition does not validate. Text that tokenizes is split even when
//! the whole would be rejected by
//! [`is_valid_selectors_group`](crate::validate::is_valid_selectors_group).

pub mod attribute;
pub mod group;
pub mod negation;
pub mod pseudo;
pub mod sequence;

/// Split a qualified name at its namespace separator.
///
/// [§ 6.1.1 Type selectors and namespaces](https://www.w3.org/TR/selectors/#typenmsp)
/// "Type selectors allow an optional namespace component: a namespace prefix
/// that has been previously declared may be prepended to the element name
/// separated by the namespace separator "vertical bar" (U+007C, |)."
///
/// The separator is the first `|` that is not part of an escape, so
/// `ns\|foo|bar` splits into `ns\|foo` and `bar`. Text without a separator
/// has no namespace.
///
/// ```ignore
/// assert_eq!(split_namespace_and_name("svg|rect"), (Some("svg"), "rect"));
/// assert_eq!(split_namespace_and_name("|p"), (Some(""), "p"));
/// assert_eq!(split_namespace_and_name("p"), (None, "p"));
/// ```
#[must_use]
pub fn split_namespace_and_name(text: &str) -> (Option<&str>, &str) {
    let mut chars = text.char_indices();
    while let Some((index, c)) = chars.next() {
        match c {
            '\\' => {
                let _ = chars.next();
            }
            '|' => return (Some(&text[..index]), &text[index + 1..]),
            _ => {}
        }
    }
    (None, text)
}
