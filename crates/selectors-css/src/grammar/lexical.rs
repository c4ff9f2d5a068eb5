//! Lexical fragments of the selectors grammar.
//!
//! Mirrors the tokenizer sections of
//! [CSS 2.1 § 4.1.1 Tokenization](https://www.w3.org/TR/CSS21/syndata.html#tokenization),
//! [CSS 2.1 Appendix G.2 Lexical scanner](https://www.w3.org/TR/CSS21/grammar.html#scanner)
//! and [Selectors Level 3 § 10.2 Lexical scanner](https://www.w3.org/TR/selectors/#lex).
//!
//! Every fragment is regex text and is wrapped in a non-capturing group so it
//! can be quantified or concatenated without re-bracketing. Fragments are
//! composed bottom-up; each depends only on fragments above it in this file.
//!
//! [§ 4 Case sensitivity](https://www.w3.org/TR/selectors/#casesens)
//! "All Selectors syntax is case-insensitive within the ASCII range (i.e.
//! [a-z] and [A-Z] are equivalent), except for parts that are not under the
//! control of Selectors."
//!
//! Case-insensitivity is spelled out in the character classes rather than
//! applied as a global flag, so the compiled automata stay small.

use once_cell::sync::Lazy;

/// Build a fragment by concatenating parts inside a non-capturing group.
pub(crate) fn group(parts: &[&str]) -> String {
    let mut out = String::from("(?:");
    for part in parts {
        out.push_str(part);
    }
    out.push(')');
    out
}

/// `h  [0-9a-f]`
pub const HEX_DIGIT: &str = "[0-9a-fA-F]";

/// `nonascii  [\240-\4177777]`
///
/// Every code point from U+00A0 upward.
pub const NON_ASCII: &str = r"[^\x00-\x9F]";

/// `s  [ \t\r\n\f]+`
pub const WHITESPACE: &str = r"[ \t\r\n\f]+";

/// `w  {s}?`
pub const OPTIONAL_WHITESPACE: &str = r"[ \t\r\n\f]*";

/// `nl  \n|\r\n|\r|\f`
pub const NEWLINE: &str = r"(?:\n|\r\n|\r|\f)";

/// `unicode  \\{h}{1,6}(\r\n|[ \t\r\n\f])?`
pub static UNICODE: Lazy<String> =
    Lazy::new(|| group(&[r"\\", HEX_DIGIT, r"{1,6}(?:\r\n|[ \t\r\n\f])?"]));

/// `escape  {unicode}|\\[^\r\n\f0-9a-f]`
pub static ESCAPE: Lazy<String> = Lazy::new(|| group(&[&UNICODE, r"|\\[^\r\n\f0-9a-fA-F]"]));

/// `nmstart  [_a-z]|{nonascii}|{escape}`
pub static NAME_START: Lazy<String> =
    Lazy::new(|| group(&["[_a-zA-Z]|", NON_ASCII, "|", &ESCAPE]));

/// `nmchar  [_a-z0-9-]|{nonascii}|{escape}`
pub static NAME_CHAR: Lazy<String> =
    Lazy::new(|| group(&["[_a-zA-Z0-9-]|", NON_ASCII, "|", &ESCAPE]));

/// `ident  -?{nmstart}{nmchar}*`
///
/// [CSS 2.1 § 4.1.3](https://www.w3.org/TR/CSS21/syndata.html#value-def-identifier)
/// "they cannot start with a digit, two hyphens, or a hyphen followed by a digit."
pub static IDENT: Lazy<String> = Lazy::new(|| group(&["-?", &NAME_START, &NAME_CHAR, "*"]));

/// `name  {nmchar}+`
pub static NAME: Lazy<String> = Lazy::new(|| group(&[&NAME_CHAR, "+"]));

/// `num  [0-9]+|[0-9]*"."[0-9]+`
pub const NUM: &str = r"(?:[0-9]+|[0-9]*\.[0-9]+)";

/// `string1  \"([^\n\r\f\\"]|\\{nl}|{nonascii}|{escape})*\"`
pub static STRING1: Lazy<String> = Lazy::new(|| {
    group(&[
        r#""(?:[^\n\r\f\\"]|\\"#,
        NEWLINE,
        "|",
        NON_ASCII,
        "|",
        &ESCAPE,
        r#")*""#,
    ])
});

/// `string2  \'([^\n\r\f\\']|\\{nl}|{nonascii}|{escape})*\'`
pub static STRING2: Lazy<String> = Lazy::new(|| {
    group(&[
        r"'(?:[^\n\r\f\\']|\\",
        NEWLINE,
        "|",
        NON_ASCII,
        "|",
        &ESCAPE,
        r")*'",
    ])
});

/// `string  {string1}|{string2}`
pub static STRING: Lazy<String> = Lazy::new(|| group(&[&STRING1, "|", &STRING2]));

/// Letter fragment: the letter in either case, or its hex escape
/// `\0{0,4}(XX|YY)` with optional trailing whitespace, optionally also the
/// backslash-letter escape.
fn letter(lower: char, upper_hex: &str, lower_hex: &str, letter_escape: bool) -> String {
    let upper = lower.to_ascii_uppercase();
    let mut out = format!(
        r"(?:[{lower}{upper}]|\\0{{0,4}}(?:{upper_hex}|{lower_hex})(?:\r\n|[ \t\r\n\f])?"
    );
    if letter_escape {
        out.push_str(&format!(r"|\\[{lower}{upper}]"));
    }
    out.push(')');
    out
}

/// `D  d|\\0{0,4}(44|64)(\r\n|[ \t\r\n\f])?`
pub static LETTER_D: Lazy<String> = Lazy::new(|| letter('d', "44", "64", false));

/// `E  e|\\0{0,4}(45|65)(\r\n|[ \t\r\n\f])?`
pub static LETTER_E: Lazy<String> = Lazy::new(|| letter('e', "45", "65", false));

/// `N  n|\\0{0,4}(4e|6e)(\r\n|[ \t\r\n\f])?|\\n`
pub static LETTER_N: Lazy<String> = Lazy::new(|| letter('n', "4[eE]", "6[eE]", true));

/// `O  o|\\0{0,4}(4f|6f)(\r\n|[ \t\r\n\f])?|\\o`
pub static LETTER_O: Lazy<String> = Lazy::new(|| letter('o', "4[fF]", "6[fF]", true));

/// `T  t|\\0{0,4}(54|74)(\r\n|[ \t\r\n\f])?|\\t`
pub static LETTER_T: Lazy<String> = Lazy::new(|| letter('t', "54", "74", true));

/// `V  v|\\0{0,4}(56|76)(\r\n|[ \t\r\n\f])?|\\v`
///
/// CSS 2.1 lists `58|78` here, which are the code points of `X`.
pub static LETTER_V: Lazy<String> = Lazy::new(|| letter('v', "56", "76", true));

/// `"~="  return INCLUDES;`
pub const INCLUDES: &str = "~=";

/// `"|="  return DASHMATCH;`
pub const DASH_MATCH: &str = r"\|=";

/// `"^="  return PREFIXMATCH;`
pub const PREFIX_MATCH: &str = r"\^=";

/// `"$="  return SUFFIXMATCH;`
pub const SUFFIX_MATCH: &str = r"\$=";

/// `"*="  return SUBSTRINGMATCH;`
pub const SUBSTRING_MATCH: &str = r"\*=";

/// `{ident}"("  return FUNCTION;`
pub static FUNCTION: Lazy<String> = Lazy::new(|| group(&[&IDENT, r"\("]));

/// `"#"{name}  return HASH;`
pub static HASH: Lazy<String> = Lazy::new(|| group(&["#", &NAME]));

/// `{w}"+"  return PLUS;`
pub static PLUS: Lazy<String> = Lazy::new(|| group(&[OPTIONAL_WHITESPACE, r"\+"]));

/// `{w}">"  return GREATER;`
pub static GREATER: Lazy<String> = Lazy::new(|| group(&[OPTIONAL_WHITESPACE, ">"]));

/// `{w}","  return COMMA;`
pub static COMMA: Lazy<String> = Lazy::new(|| group(&[OPTIONAL_WHITESPACE, ","]));

/// `{w}"~"  return TILDE;`
pub static TILDE: Lazy<String> = Lazy::new(|| group(&[OPTIONAL_WHITESPACE, "~"]));

/// `":"{N}{O}{T}"("  return NOT;`
pub static NOT: Lazy<String> =
    Lazy::new(|| group(&[":", &LETTER_N, &LETTER_O, &LETTER_T, r"\("]));

/// `{num}{ident}  return DIMENSION;`
pub static DIMENSION: Lazy<String> = Lazy::new(|| group(&[NUM, &IDENT]));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::is_exact_match;

    #[test]
    fn test_ident_rejects_leading_digit_and_double_hyphen() {
        assert!(is_exact_match(&IDENT, "foo"));
        assert!(is_exact_match(&IDENT, "-foo--"));
        assert!(is_exact_match(&IDENT, "_bar"));
        assert!(!is_exact_match(&IDENT, "1foo"));
        assert!(!is_exact_match(&IDENT, "-1foo"));
        assert!(!is_exact_match(&IDENT, "--foo"));
    }

    #[test]
    fn test_ident_accepts_escapes_and_non_ascii() {
        assert!(is_exact_match(&IDENT, r"ns\|foo"));
        assert!(is_exact_match(&IDENT, r"\31 23"));
        assert!(is_exact_match(&IDENT, "caf\u{e9}"));
        assert!(is_exact_match(&IDENT, "\u{1F600}"));
    }

    #[test]
    fn test_string_allows_escaped_quotes_and_newlines() {
        assert!(is_exact_match(&STRING, r#""val""#));
        assert!(is_exact_match(&STRING, r"'v\'al'"));
        assert!(is_exact_match(&STRING, "\"a\\\nb\""));
        assert!(!is_exact_match(&STRING, "\"a\nb\""));
        assert!(!is_exact_match(&STRING, r#""unterminated"#));
    }

    #[test]
    fn test_letter_fragments_accept_escaped_spellings() {
        assert!(is_exact_match(&NOT, ":not("));
        assert!(is_exact_match(&NOT, ":NOT("));
        assert!(is_exact_match(&NOT, r":\6e ot("));
        assert!(is_exact_match(&NOT, r":\n\o\t("));
        assert!(!is_exact_match(&NOT, ":nat("));
    }
}
