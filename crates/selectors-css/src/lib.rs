//! CSS Selectors Level 3 validation and decomposition
//!
//! This crate checks selector text against the grammar of
//! [Selectors Level 3](https://www.w3.org/TR/selectors/) and breaks valid
//! text into its parts, without a browser engine.
//!
//! - [`grammar`]: the W3C grammar as composed regular expressions
//! - [`matcher`]: whole-string matching with compiled-pattern caching
//! - [`classify`]: which kind of simple selector a piece of text is
//! - [`decompose`]: groups, sequences, attribute and pseudo fields
//! - [`pseudo`]: which pseudo-classes and pseudo-elements CSS defines
//! - [`validate`]: validity checks, with pluggable document-language rules
//!
//! ```ignore
//! use selectors_css::{get_selectors, is_valid_selectors_group};
//!
//! assert!(is_valid_selectors_group("ul > li:nth-child(2n+1), a[href^='https']"));
//! assert_eq!(get_selectors("a:hover > b")?, ["a", ":hover", ">", "b"]);
//! ```

pub mod category;
pub mod classify;
pub mod decompose;
pub mod error;
pub mod grammar;
pub mod matcher;
pub mod pseudo;
pub mod validate;

pub use category::{Classification, SelectorCategory};
pub use classify::{get_type, is_pseudo_element_form};
pub use decompose::attribute::{AttrOperator, AttributeProperties, get_attribute_properties};
pub use decompose::group::get_sequences;
pub use decompose::negation::{NegationInnerSelector, get_negation_inner_selector_properties};
pub use decompose::pseudo::{Colons, PseudoProperties, get_pseudo_properties};
pub use decompose::sequence::{SelectorToken, get_elements, get_selectors, tokenize_sequence};
pub use decompose::split_namespace_and_name;
pub use error::GrammarError;
pub use grammar::{Production, warm_up};
pub use matcher::is_exact_match;
pub use pseudo::{is_valid_css_pseudo_class, is_valid_css_pseudo_element};
pub use validate::{
    SelectorEngine, StrictMode, Validator, is_valid_selector, is_valid_selectors_group,
    quick_validation,
};
