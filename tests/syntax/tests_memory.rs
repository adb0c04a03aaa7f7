//! In-memory document tree tests.

use crate::helpers::fixtures::*;
use beanref::hir::BeanDeclaration;
use beanref::syntax::{DocumentTree, child_elements, nearest_ancestor};
use beanref::ResolverConfig;

#[test]
fn test_tree_navigation() {
    let doc = registry_document();
    let root = doc.root_element().unwrap();
    assert_eq!(doc.local_name(root), "beans");
    assert_eq!(doc.namespace(root), BEANS_NS);
    assert!(doc.parent(root).is_none());

    let a = doc.find_by_attribute("id", "a").unwrap();
    let args: Vec<_> = child_elements(&doc, a, "constructor-arg").collect();
    assert_eq!(args.len(), 2);
    assert_eq!(doc.parent(args[0]), Some(a));
    assert_eq!(
        nearest_ancestor(&doc, args[1], |node| doc.local_name(node) == "beans"),
        Some(root)
    );
}

#[test]
fn test_shorthand_attributes_are_namespaced() {
    let doc = registry_document();
    let a = doc.find_by_attribute("id", "a").unwrap();

    // `p:name` is not visible as an unqualified attribute.
    assert_eq!(doc.attribute(a, "name"), Some("alpha"));
    let shorthand: Vec<_> = doc
        .attributes(a)
        .into_iter()
        .filter(|attr| attr.namespace == P_NS)
        .map(|attr| (attr.local_name, attr.value))
        .collect();
    assert_eq!(shorthand, vec![("name", "n")]);
}

#[test]
fn test_enclosing_bean_from_nested_element() {
    let doc = registry_document();
    let config = ResolverConfig::default();
    let property = doc.find_by_attribute("ref", "x").unwrap();

    let bean = BeanDeclaration::enclosing(&doc, property, &config).unwrap();
    assert_eq!(bean.id(), Some("a"));
    assert_eq!(bean.properties(&config)[0].reference, Some("x"));
}
