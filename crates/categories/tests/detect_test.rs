//! Unit tests for [`categories::CategoryRegistry::detect`].
//!
//! Covers: case-insensitive substring matching, registry-order tie-breaking,
//! blank input, Polish keywords, and override lookup. Uses the built-in
//! registry plus small hand-built registries for order tests.

use categories::{CategoryRegistry, CategoryRule, Template};

fn rule(name: &str, keywords: &[&str]) -> CategoryRule {
    CategoryRule {
        name: name.to_string(),
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        template: Template::new(format!("About {{target}} ({name}).")).unwrap(),
        description: format!("{name} test rule"),
    }
}

/// **Test: a registered keyword anywhere in the text selects its category.**
///
/// **Expected:** "What's the price of iPhone" matches `price` (keyword "price"),
/// regardless of position or surrounding text.
#[test]
fn detect_matches_keyword_substring() {
    let registry = CategoryRegistry::builtin();
    let d = registry.detect("What's the price of iPhone").unwrap();
    assert_eq!(d.category, "price");
}

/// **Test: matching is case-insensitive.**
#[test]
fn detect_is_case_insensitive() {
    let registry = CategoryRegistry::builtin();
    assert_eq!(registry.detect("COMPARE rust and go").unwrap().category, "compare");
    assert_eq!(registry.detect("Who Is Marie Curie").unwrap().category, "person");
}

/// **Test: overlapping keywords are resolved by registry order, earlier wins.**
#[test]
fn detect_honors_registry_order_on_overlap() {
    let registry = CategoryRegistry::new(vec![
        rule("first", &["shared", "alpha"]),
        rule("second", &["shared", "beta"]),
    ]);
    assert_eq!(registry.detect("a shared keyword").unwrap().category, "first");
    // A keyword unique to the later rule still reaches it.
    assert_eq!(registry.detect("beta only").unwrap().category, "second");
}

/// **Test: uppercase keywords in a custom registry still match.**
///
/// **Expected:** case-insensitivity holds on both sides of the containment
/// test, not just for the input text.
#[test]
fn detect_matches_mixed_case_keywords() {
    let registry = CategoryRegistry::new(vec![rule("shout", &["LOUD", "Mixed Case"])]);
    assert_eq!(registry.detect("that was loud indeed").unwrap().category, "shout");
    assert_eq!(registry.detect("a mixed case phrase").unwrap().category, "shout");
}

/// **Test: blank or empty text never matches any rule.**
#[test]
fn detect_rejects_blank_text() {
    let registry = CategoryRegistry::builtin();
    assert!(registry.detect("").is_none());
    assert!(registry.detect("   \n\t ").is_none());
}

/// **Test: text without any registered keyword returns None.**
#[test]
fn detect_returns_none_without_keywords() {
    let registry = CategoryRegistry::builtin();
    assert!(registry.detect("hello there friend").is_none());
}

/// **Test: Polish event keyword "kiedy gra" selects the event category.**
///
/// **Expected:** "kiedy gra Real Madrid" matches `event`, not `timeline`
/// (the built-in registry assigns the `kiedy` family to `event`).
#[test]
fn detect_polish_event_keyword() {
    let registry = CategoryRegistry::builtin();
    let d = registry.detect("kiedy gra Real Madrid").unwrap();
    assert_eq!(d.category, "event");
}

/// **Test: rule() finds a category by exact name for overrides.**
#[test]
fn rule_lookup_by_name() {
    let registry = CategoryRegistry::builtin();
    assert!(registry.rule("price").is_some());
    assert!(registry.rule("prices").is_none());
    assert!(registry.rule("").is_none());
}

/// **Test: the onboarding tip lists bilingual categories with descriptions.**
///
/// **Expected:** categories with both English and Polish keywords appear as
/// `` `en` / `pl` – description ``; categories with English-only keyword lists
/// (e.g. `price`) are skipped.
#[test]
fn onboarding_tip_lists_bilingual_categories() {
    let registry = CategoryRegistry::builtin();
    let tip = registry.onboarding_tip();
    assert!(tip.contains("`weather` / `śnieg`"));
    assert!(tip.contains("Returns a short biography for a person."));
    assert!(!tip.contains("`price` /"));
    assert!(tip.ends_with("Just include one of these keywords in your question!"));
}
