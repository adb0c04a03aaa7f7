//! Code completion tests for the IDE layer.

use crate::helpers::assertions::*;
use crate::helpers::fixtures::*;
use beanref::hir::{AttributePart, BeanRegistry, BeanResolver, ReferenceKind, ReferenceSite};
use beanref::ide::{CompletionKind, complete_at, completions};
use rstest::rstest;

// =============================================================================
// PROPERTY NAMES
// =============================================================================

#[test]
fn test_setter_prefix() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);
    let a = registry.find_bean_by_name_or_id("a").unwrap();

    let items = completions(&resolver, a, ReferenceKind::PropertyName, "na", "");
    assert_eq!(labels(&items), vec!["name"]);
    assert_eq!(items[0].kind, CompletionKind::Property);
}

#[test]
fn test_shorthand_emits_reference_variant() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);
    let a = registry.find_bean_by_name_or_id("a").unwrap();

    let items = completions(&resolver, a, ReferenceKind::ShorthandProperty, "", "p:");
    assert_eq!(labels(&items), vec!["p:name", "p:name-ref"]);
}

#[test]
fn test_complete_at_splits_typed_namespace() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);

    let a = doc.find_by_attribute("id", "a").unwrap();
    let site = ReferenceSite::namespaced(a, P_NS, "name", AttributePart::Name);
    let items = complete_at(&resolver, &doc, &site, "p:na");
    assert_eq!(labels(&items), vec!["p:name", "p:name-ref"]);

    // A bare leading colon carries no namespace prefix.
    let items = complete_at(&resolver, &doc, &site, ":na");
    assert_eq!(labels(&items), vec!["name", "name-ref"]);

    let property = doc.find_by_attribute("ref", "x").unwrap();
    let site = ReferenceSite::value(property, "name");
    assert_eq!(labels(&complete_at(&resolver, &doc, &site, "n")), vec!["name"]);
}

#[test]
fn test_setters_follow_inferred_class() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);

    // `c` inherits from `b`, which a factory method narrows to `Bar`.
    let c = registry.find_bean_by_name_or_id("c").unwrap();
    let items = completions(&resolver, c, ReferenceKind::PropertyName, "", "");
    assert_eq!(labels(&items), vec!["label"]);
}

// =============================================================================
// METHOD NAMES
// =============================================================================

#[rstest]
#[case("a", ReferenceKind::InitMethod, "", vec!["init", "dispose"])]
#[case("a", ReferenceKind::DestroyMethod, "d", vec!["dispose"])]
#[case("a", ReferenceKind::FactoryMethod, "", vec!["make", "count"])]
#[case("b", ReferenceKind::FactoryMethod, "m", vec!["make"])]
#[case("b", ReferenceKind::DestroyMethod, "", vec!["close"])]
#[case("abstract", ReferenceKind::InitMethod, "", vec![])]
fn test_method_candidates(
    #[case] id: &str,
    #[case] kind: ReferenceKind,
    #[case] prefix: &str,
    #[case] expected: Vec<&str>,
) {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);
    let bean = registry.find_bean_by_name_or_id(id).unwrap();

    let items = completions(&resolver, bean, kind, prefix, "");
    assert_eq!(labels(&items), expected);
    assert!(items.iter().all(|item| item.kind == CompletionKind::Method));
}

#[test]
fn test_constructor_arg_candidates_keep_duplicates() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);
    let a = registry.find_bean_by_name_or_id("a").unwrap();

    let items = completions(&resolver, a, ReferenceKind::ConstructorArgName, "", "");
    assert_eq!(labels(&items), vec!["first", "first", "second"]);
}

// =============================================================================
// BEAN REFERENCES
// =============================================================================

#[test]
fn test_bean_candidates() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);

    let b = doc.find_by_attribute("id", "b").unwrap();
    let items = complete_at(&resolver, &doc, &ReferenceSite::value(b, "factory-bean"), "a");
    assert_eq!(labels(&items), vec!["a", "alpha", "abstract"]);

    let kinds: Vec<_> = items.iter().map(|item| item.kind).collect();
    assert_eq!(
        kinds,
        vec![CompletionKind::BeanById, CompletionKind::BeanByName, CompletionKind::BeanById]
    );

    let all = complete_at(&resolver, &doc, &ReferenceSite::value(b, "factory-bean"), "");
    assert_eq!(labels(&all), vec!["a", "alpha", "b", "c", "abstract", "x", "y"]);
    assert_eq!(all.last().map(|item| item.kind), Some(CompletionKind::Alias));
}

#[test]
fn test_non_reference_sites_complete_nothing() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);

    let a = doc.find_by_attribute("id", "a").unwrap();
    assert!(complete_at(&resolver, &doc, &ReferenceSite::value(a, "id"), "").is_empty());
    assert!(complete_at(&resolver, &doc, &ReferenceSite::value(a, "class"), "com").is_empty());
}
