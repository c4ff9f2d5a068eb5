//! Integration tests for splitting selectors into their parts.

use selectors_css::{
    AttrOperator, Colons, GrammarError, SelectorCategory, get_attribute_properties, get_elements,
    get_negation_inner_selector_properties, get_pseudo_properties, get_selectors, get_sequences,
};

// --- get_sequences ---

#[test]
fn test_sequences_of_single_selector() {
    assert_eq!(get_sequences(".foo"), [".foo"]);
    assert_eq!(
        get_sequences(".foo:nth-child(2n) > p"),
        [".foo:nth-child(2n) > p"]
    );
}

#[test]
fn test_sequences_of_group() {
    assert_eq!(get_sequences(".foo, #bar"), [".foo", "#bar"]);
    assert_eq!(
        get_sequences("a[title=\"x, y\"], :not(b) , c"),
        ["a[title=\"x, y\"]", ":not(b)", "c"]
    );
}

// --- get_selectors / get_elements ---

#[test]
fn test_selectors_of_sequence() {
    assert_eq!(get_selectors(".foo").unwrap(), [".foo"]);
    assert_eq!(get_selectors(".foo#bar").unwrap(), [".foo", "#bar"]);
    assert_eq!(
        get_selectors(".foo:nth-child(2n) > p#bar").unwrap(),
        [".foo", ":nth-child(2n)", ">", "p", "#bar"]
    );
    assert_eq!(get_selectors(":hover::before").unwrap(), [":hover", "::before"]);
    assert_eq!(get_selectors("foo .bar").unwrap(), ["foo", " ", ".bar"]);
}

#[test]
fn test_selectors_keep_qualified_names_whole() {
    assert_eq!(
        get_selectors("svg|rect[xlink|href]:not(ns|*)").unwrap(),
        ["svg|rect", "[xlink|href]", ":not(ns|*)"]
    );
    assert_eq!(get_selectors("ns|*.a").unwrap(), ["ns|*", ".a"]);
}

#[test]
fn test_selectors_of_empty_input() {
    assert!(get_selectors("").unwrap().is_empty());
    assert!(get_elements("").unwrap().is_empty());
}

#[test]
fn test_selectors_of_garbage() {
    assert!(matches!(
        get_selectors(".foo ! .bar"),
        Err(GrammarError::UnexpectedInput { offset: 5, .. })
    ));
}

#[test]
fn test_elements_of_sequence() {
    assert_eq!(get_elements(".foo").unwrap(), [vec![".foo"]]);
    assert_eq!(
        get_elements(".foo #bar").unwrap(),
        [vec![".foo"], vec![" ", "#bar"]]
    );
    assert_eq!(
        get_elements("ul > li.a + li").unwrap(),
        [vec!["ul"], vec![">", "li", ".a"], vec!["+", "li"]]
    );
}

// --- get_attribute_properties ---

#[test]
fn test_attribute_presence() {
    let properties = get_attribute_properties("[att]").unwrap().unwrap();
    assert_eq!(properties.namespace, None);
    assert_eq!(properties.name, "att");
    assert_eq!(properties.operator, None);
    assert_eq!(properties.value, None);
}

#[test]
fn test_attribute_namespaces() {
    let ns = |selector| {
        get_attribute_properties(selector)
            .unwrap()
            .unwrap()
            .namespace
    };
    assert_eq!(ns("[ns|att]").as_deref(), Some("ns"));
    assert_eq!(ns("[*|att]").as_deref(), Some("*"));
    assert_eq!(ns("[|att]").as_deref(), Some(""));
}

#[test]
fn test_attribute_operators() {
    for (selector, operator) in [
        ("[att=val]", AttrOperator::Equals),
        ("[att~=val]", AttrOperator::Includes),
        ("[att|=val]", AttrOperator::DashMatch),
        ("[att^=val]", AttrOperator::PrefixMatch),
        ("[att$=val]", AttrOperator::SuffixMatch),
        ("[att*=val]", AttrOperator::SubstringMatch),
    ] {
        let properties = get_attribute_properties(selector).unwrap().unwrap();
        assert_eq!(properties.namespace, None, "{selector}");
        assert_eq!(properties.name, "att", "{selector}");
        assert_eq!(properties.operator, Some(operator), "{selector}");
        assert_eq!(properties.value.as_deref(), Some("val"), "{selector}");
    }
}

#[test]
fn test_attribute_with_namespace_and_string_value() {
    let properties = get_attribute_properties(r#"[ns|foo*="bar"]"#).unwrap().unwrap();
    assert_eq!(properties.namespace.as_deref(), Some("ns"));
    assert_eq!(properties.name, "foo");
    assert_eq!(properties.operator, Some(AttrOperator::SubstringMatch));
    assert_eq!(properties.value.as_deref(), Some("bar"));
}

#[test]
fn test_attribute_escaped_pipes() {
    let properties = get_attribute_properties(r"[ns\|foo|att=val]").unwrap().unwrap();
    assert_eq!(properties.namespace.as_deref(), Some(r"ns\|foo"));
    assert_eq!(properties.name, "att");

    let properties = get_attribute_properties(r"[ns|att\|bar=val]").unwrap().unwrap();
    assert_eq!(properties.namespace.as_deref(), Some("ns"));
    assert_eq!(properties.name, r"att\|bar");

    let properties = get_attribute_properties(r#"[ns\|foo|att\|bar|="|"]"#)
        .unwrap()
        .unwrap();
    assert_eq!(properties.namespace.as_deref(), Some(r"ns\|foo"));
    assert_eq!(properties.name, r"att\|bar");
    assert_eq!(properties.operator, Some(AttrOperator::DashMatch));
    assert_eq!(properties.value.as_deref(), Some("|"));
}

#[test]
fn test_attribute_value_keeps_inner_escapes_and_quotes() {
    let value = |selector| get_attribute_properties(selector).unwrap().unwrap().value;
    assert_eq!(value(r#"[att="\"val"]"#).as_deref(), Some(r#"\"val"#));
    assert_eq!(value(r#"[att="'val'"]"#).as_deref(), Some("'val'"));
    assert_eq!(value("[att='val']").as_deref(), Some("val"));
}

#[test]
fn test_attribute_errors() {
    assert_eq!(get_attribute_properties("").unwrap(), None);
    assert!(matches!(
        get_attribute_properties("[att=]"),
        Err(GrammarError::NoMatch { .. })
    ));
    assert!(matches!(
        get_attribute_properties("[=var]"),
        Err(GrammarError::NoMatch { .. })
    ));
    assert!(matches!(
        get_attribute_properties(".foo"),
        Err(GrammarError::WrongCategory {
            found: SelectorCategory::Class,
            ..
        })
    ));
    assert!(matches!(
        get_attribute_properties("wildebeest"),
        Err(GrammarError::WrongCategory {
            found: SelectorCategory::Type,
            ..
        })
    ));
}

// --- get_pseudo_properties ---

#[test]
fn test_plain_pseudo_class() {
    let properties = get_pseudo_properties(":hover").unwrap().unwrap();
    assert_eq!(properties.vendor, None);
    assert_eq!(properties.name, "hover");
    assert_eq!(properties.args, None);
    assert_eq!(properties.colons, None);
}

#[test]
fn test_vendor_prefixes() {
    let vendor = |selector| get_pseudo_properties(selector).unwrap().unwrap().vendor;
    assert_eq!(vendor(":-custom-foo").as_deref(), Some("-custom-"));
    assert_eq!(vendor(":_potato-bar-baz").as_deref(), Some("_potato-"));
    assert_eq!(vendor("::-webkit-scrollbar").as_deref(), Some("-webkit-"));
    assert_eq!(vendor("::_potato-foo").as_deref(), Some("_potato-"));
    assert_eq!(vendor("::first-letter"), None);
}

#[test]
fn test_functional_pseudo_class() {
    let properties = get_pseudo_properties(":nth-of-type(even)").unwrap().unwrap();
    assert_eq!(properties.name, "nth-of-type");
    assert_eq!(properties.args.as_deref(), Some("even"));

    let properties = get_pseudo_properties(":nth-child( 2n + 1 )").unwrap().unwrap();
    assert_eq!(properties.args.as_deref(), Some(" 2n + 1 "));
}

#[test]
fn test_pseudo_elements() {
    let properties = get_pseudo_properties("::before").unwrap().unwrap();
    assert_eq!(properties.name, "before");
    assert_eq!(properties.colons, Some(Colons::Two));

    let properties = get_pseudo_properties("::first-line").unwrap().unwrap();
    assert_eq!(properties.args, None);

    assert_eq!(
        get_pseudo_properties("::after").unwrap().unwrap().colons,
        Some(Colons::Two)
    );
    assert_eq!(
        get_pseudo_properties(":after").unwrap().unwrap().colons,
        Some(Colons::One)
    );
    assert_eq!(get_pseudo_properties("::-custom-foo").unwrap().unwrap().colons, None);
    assert_eq!(
        get_pseudo_properties("::_potato-foo-bar").unwrap().unwrap().colons,
        None
    );

    let properties = get_pseudo_properties("::-moz-before").unwrap().unwrap();
    assert_eq!(properties.vendor.as_deref(), Some("-moz-"));
    assert_eq!(properties.colons, None);
    assert_eq!(get_pseudo_properties(":-x-after").unwrap().unwrap().colons, None);

    let properties = get_pseudo_properties(":before(x)").unwrap().unwrap();
    assert_eq!(properties.args.as_deref(), Some("x"));
    assert_eq!(properties.colons, None);
}

#[test]
fn test_pseudo_errors() {
    assert_eq!(get_pseudo_properties("").unwrap(), None);
    assert!(matches!(
        get_pseudo_properties(".foo"),
        Err(GrammarError::WrongCategory { .. })
    ));
    assert!(matches!(
        get_pseudo_properties(":nth-child(2n"),
        Err(GrammarError::NoMatch { .. })
    ));
}

#[test]
fn test_pseudo_properties_serialize_colon_count() {
    let properties = get_pseudo_properties(":before").unwrap().unwrap();
    let json = serde_json::to_value(&properties).unwrap();
    assert_eq!(json["colons"], 1);
    assert_eq!(json["name"], "before");
}

#[test]
fn test_attribute_properties_serialize_symbol() {
    let properties = get_attribute_properties("[ns|att^='val']").unwrap().unwrap();
    let json = serde_json::to_value(&properties).unwrap();
    assert_eq!(json["namespace"], "ns");
    assert_eq!(json["name"], "att");
    assert_eq!(json["symbol"], "^=");
    assert_eq!(json["value"], "val");
    assert!(json.get("operator").is_none());
}

#[test]
fn test_negation_inner_selector_serializes_type() {
    let inner = get_negation_inner_selector_properties(":not(.foo)")
        .unwrap()
        .unwrap();
    let json = serde_json::to_value(&inner).unwrap();
    assert_eq!(json["selector"], ".foo");
    assert_eq!(json["type"], "class");
    assert!(json.get("category").is_none());
}

// --- get_negation_inner_selector_properties ---

#[test]
fn test_negation_inner_selector() {
    let inner = get_negation_inner_selector_properties(":not(foo)")
        .unwrap()
        .unwrap();
    assert_eq!(inner.selector, "foo");
    assert_eq!(inner.category, SelectorCategory::Type);

    let inner = get_negation_inner_selector_properties(":not([bar=baz])")
        .unwrap()
        .unwrap();
    assert_eq!(inner.selector, "[bar=baz]");
    assert_eq!(inner.category, SelectorCategory::Attribute);

    let inner = get_negation_inner_selector_properties(":not( .bar )")
        .unwrap()
        .unwrap();
    assert_eq!(inner.selector, ".bar");
    assert_eq!(inner.category, SelectorCategory::Class);
}

#[test]
fn test_negation_forbidden_nesting() {
    assert!(matches!(
        get_negation_inner_selector_properties(":not(:not(foo))"),
        Err(GrammarError::ForbiddenNesting {
            category: SelectorCategory::Negation,
            ..
        })
    ));
    assert!(matches!(
        get_negation_inner_selector_properties(":not(::before)"),
        Err(GrammarError::ForbiddenNesting {
            category: SelectorCategory::PseudoElement,
            ..
        })
    ));
}

#[test]
fn test_negation_errors() {
    assert_eq!(get_negation_inner_selector_properties("").unwrap(), None);
    assert!(matches!(
        get_negation_inner_selector_properties(":not(foo"),
        Err(GrammarError::NoMatch { .. })
    ));
    assert!(matches!(
        get_negation_inner_selector_properties(".foo"),
        Err(GrammarError::WrongCategory { .. })
    ));
}
