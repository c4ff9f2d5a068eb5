//! Validation entry points.
//!
//! [§ 12 Conformance](https://www.w3.org/TR/selectors/#conformance)
//! "Invalid selectors: user agents must observe the rules for handling
//! parsing errors"
//!
//! Grammar validation is self-contained. Document-language knowledge (which
//! element and attribute names exist) is supplied from outside through
//! [`StrictMode`], so this crate stays free of any HTML vocabulary.

use crate::category::SelectorCategory;
use crate::classify::get_type;
use crate::decompose::attribute::get_attribute_properties;
use crate::decompose::negation::get_negation_inner_selector_properties;
use crate::decompose::split_namespace_and_name;
use crate::grammar::Production;
use crate::pseudo::{is_valid_css_pseudo_class, is_valid_css_pseudo_element};

/// A document language's vocabulary of element and attribute names.
pub trait StrictMode {
    /// Whether `name` (a local name, namespace prefix removed) is an element
    /// the document language defines.
    fn is_valid_element(&self, name: &str) -> bool;

    /// Whether `name` (a local name, namespace prefix removed, escapes kept)
    /// is an attribute the document language defines.
    fn is_valid_attribute(&self, name: &str) -> bool;
}

/// A live selector engine, such as a browser's `querySelector`.
pub trait SelectorEngine {
    /// Whether the engine's own parser accepts `selectors`.
    fn accepts(&self, selectors: &str) -> bool;
}

/// Ask a live engine instead of the grammar.
///
/// Only as good as the engine: it reflects what that engine supports, which
/// may be more or less than Selectors Level 3.
#[must_use]
pub fn quick_validation(engine: &dyn SelectorEngine, selectors: &str) -> bool {
    engine.accepts(selectors)
}

/// Whether `text` is a valid selectors group (one or more comma-separated
/// selectors). Empty text is not.
#[must_use]
pub fn is_valid_selectors_group(text: &str) -> bool {
    !text.is_empty() && Production::SelectorsGroup.is_exact_match(text)
}

/// Whether `text` is a single valid simple selector or combinator, without
/// any document-language checks.
#[must_use]
pub fn is_valid_selector(text: &str) -> bool {
    Validator::new().is_valid_selector(text)
}

/// Validation settings.
///
/// ```ignore
/// let validator = Validator::new().with_strict_mode(&html);
/// assert!(!validator.is_valid_selector("marquee"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct Validator<'a> {
    strict_mode: Option<&'a dyn StrictMode>,
    engine: Option<&'a dyn SelectorEngine>,
}

impl std::fmt::Debug for Validator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("strict_mode", &self.strict_mode.is_some())
            .field("engine", &self.engine.is_some())
            .finish()
    }
}

impl<'a> Validator<'a> {
    /// Grammar-only validation with no engine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict_mode: None,
            engine: None,
        }
    }

    /// Also require type and attribute names to exist in `strict_mode`.
    #[must_use]
    pub const fn with_strict_mode(mut self, strict_mode: &'a dyn StrictMode) -> Self {
        self.strict_mode = Some(strict_mode);
        self
    }

    /// Make `engine` available to [`Self::quick_validation`].
    #[must_use]
    pub const fn with_engine(mut self, engine: &'a dyn SelectorEngine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Whether strict mode is enabled.
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict_mode.is_some()
    }

    /// The configured engine's opinion of `selectors`, or `None` without one.
    #[must_use]
    pub fn quick_validation(&self, selectors: &str) -> Option<bool> {
        self.engine.map(|engine| quick_validation(engine, selectors))
    }

    /// Whether `text` is a single valid simple selector or combinator.
    ///
    /// - type selectors: grammar, plus the element check in strict mode
    /// - attribute selectors: grammar, plus the attribute check in strict mode
    /// - universal, class, ID, combinator: grammar alone
    /// - pseudo-classes and pseudo-elements: must be ones CSS defines
    /// - negations: the argument must itself be valid
    #[must_use]
    pub fn is_valid_selector(&self, text: &str) -> bool {
        let Ok(classification) = get_type(text) else {
            return false;
        };

        match classification.category {
            SelectorCategory::Type => self.strict_mode.is_none_or(|strict| {
                strict.is_valid_element(split_namespace_and_name(text).1)
            }),
            SelectorCategory::Attribute => self.strict_mode.is_none_or(|strict| {
                matches!(
                    get_attribute_properties(text),
                    Ok(Some(properties)) if strict.is_valid_attribute(&properties.name)
                )
            }),
            SelectorCategory::Universal
            | SelectorCategory::Class
            | SelectorCategory::Id
            | SelectorCategory::Combinator => true,
            SelectorCategory::PseudoClass => is_valid_css_pseudo_class(text),
            SelectorCategory::PseudoElement => is_valid_css_pseudo_element(text),
            SelectorCategory::Negation => matches!(
                get_negation_inner_selector_properties(text),
                Ok(Some(inner)) if self.is_valid_selector(&inner.selector)
            ),
        }
    }
}
