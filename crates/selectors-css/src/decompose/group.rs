//! Splitting a selectors group at its top-level commas.
//!
//! [§ 5 Groups of selectors](https://www.w3.org/TR/selectors/#grouping)
//! "A comma-separated list of selectors represents the union of all elements
//! selected by each of the individual selectors in the list."

/// CSS whitespace, as opposed to Unicode whitespace.
pub(crate) const CSS_WHITESPACE: [char; 5] = [' ', '\t', '\r', '\n', '\u{c}'];

/// Split a selectors group into its selectors.
///
/// Commas inside strings, attribute brackets, parentheses and escapes do not
/// separate selectors. Each selector is trimmed of surrounding whitespace.
/// Empty input yields no selectors.
///
/// ```ignore
/// assert_eq!(get_sequences(".foo, #bar"), [".foo", "#bar"]);
/// assert_eq!(get_sequences("[title='a,b']"), ["[title='a,b']"]);
/// ```
#[must_use]
pub fn get_sequences(group: &str) -> Vec<String> {
    if group.is_empty() {
        return Vec::new();
    }

    let mut sequences = Vec::new();
    let mut depth = 0_usize;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    let mut start = 0;

    for (index, c) in group.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match (quote, c) {
            (_, '\\') => escaped = true,
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '(' | '[') => depth += 1,
            (None, ')' | ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                sequences.push(group[start..index].trim_matches(CSS_WHITESPACE).to_owned());
                start = index + 1;
            }
            (None, _) => {}
        }
    }
    sequences.push(group[start..].trim_matches(CSS_WHITESPACE).to_owned());
    sequences
}
