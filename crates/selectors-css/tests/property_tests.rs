//! Property tests over generated selectors.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use selectors_css::{
    get_pseudo_properties, get_selectors, get_type, is_valid_selectors_group, tokenize_sequence,
};

const HEADS: &[&str] = &[
    "p", "svg|rect", "*", "ns|*", "|a", "-x-y", ".c", "#i", "[t]", ":hover",
];

const QUALIFIERS: &[&str] = &[
    ".cls",
    "#id-1",
    "[lang|=en]",
    "[ns|href^='https:']",
    r#"[title="a, b"]"#,
    ":first-child",
    ":nth-child( 2n + 1 )",
    ":not(.x)",
    ":not([y])",
    "::before",
    r".a\:b",
];

const COMBINATORS: &[&str] = &[" ", " > ", "+", " ~ ", "\t", ">"];

/// A selector built from known-valid parts.
#[derive(Debug, Clone)]
struct GeneratedSelector(String);

fn pick(g: &mut Gen, choices: &'static [&'static str]) -> &'static str {
    g.choose(choices).copied().unwrap_or_default()
}

impl Arbitrary for GeneratedSelector {
    fn arbitrary(g: &mut Gen) -> Self {
        let sequences = usize::arbitrary(g) % 4 + 1;
        let mut text = String::new();
        for index in 0..sequences {
            if index > 0 {
                text.push_str(pick(g, COMBINATORS));
            }
            text.push_str(pick(g, HEADS));
            for _ in 0..usize::arbitrary(g) % 3 {
                text.push_str(pick(g, QUALIFIERS));
            }
        }
        Self(text)
    }
}

#[quickcheck]
fn generated_selectors_are_valid_groups(selector: GeneratedSelector) -> bool {
    is_valid_selectors_group(&selector.0)
}

#[quickcheck]
fn token_spans_reassemble_the_input(selector: GeneratedSelector) -> bool {
    let tokens = tokenize_sequence(&selector.0).unwrap();
    let rebuilt: String = tokens.iter().map(|token| token.raw).collect();
    rebuilt == selector.0
}

#[quickcheck]
fn every_token_classifies(selector: GeneratedSelector) -> bool {
    get_selectors(&selector.0)
        .unwrap()
        .iter()
        .all(|token| get_type(token).is_ok())
}

#[quickcheck]
fn classification_is_deterministic(text: String) -> bool {
    get_type(&text) == get_type(&text)
}

#[quickcheck]
fn pseudo_properties_are_deterministic(text: String) -> bool {
    let pseudo = format!(":{text}");
    get_pseudo_properties(&pseudo) == get_pseudo_properties(&pseudo)
}
