//! Symbol resolution tests, driven through attribute sites.

use crate::helpers::assertions::*;
use crate::helpers::fixtures::*;
use beanref::hir::{AttributePart, BeanRegistry, BeanResolver, ReferenceKind, ReferenceSite};
use beanref::syntax::MemoryDocument;
use beanref::{ResolverConfig, Resolution};

#[test]
fn test_property_and_shorthand_setters() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);

    let property = doc.find_by_attribute("ref", "x").unwrap();
    let resolved = resolver.resolve_site(&doc, &ReferenceSite::value(property, "name"));
    assert_eq!(method_name(&resolved).as_deref(), Some("setName"));

    let a = doc.find_by_attribute("id", "a").unwrap();
    let shorthand = ReferenceSite::namespaced(a, P_NS, "name", AttributePart::Name);
    assert_eq!(method_name(&resolver.resolve_site(&doc, &shorthand)).as_deref(), Some("setName"));

    let by_reference = ReferenceSite::namespaced(a, P_NS, "name-ref", AttributePart::Name);
    assert_eq!(
        resolver.resolve_site(&doc, &by_reference),
        resolver.resolve_site(&doc, &shorthand)
    );
}

#[test]
fn test_private_setter_is_not_a_target() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);

    let a = registry.find_bean_by_name_or_id("a").unwrap();
    assert!(resolver.resolve_setter(a, "native").is_absent());
}

#[test]
fn test_method_attributes() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);

    let a = doc.find_by_attribute("id", "a").unwrap();
    let init = resolver.resolve_site(&doc, &ReferenceSite::value(a, "init-method"));
    assert_eq!(method_name(&init).as_deref(), Some("init"));

    let b = doc.find_by_attribute("id", "b").unwrap();
    let factory = resolver.resolve_site(&doc, &ReferenceSite::value(b, "factory-method"));
    assert_eq!(method_name(&factory).as_deref(), Some("make"));
    assert_eq!(class_of(&factory).as_deref(), Some("com.x.Foo"));

    let destroy = resolver.resolve_site(&doc, &ReferenceSite::value(b, "destroy-method"));
    assert_eq!(method_name(&destroy).as_deref(), Some("close"));
    assert_eq!(class_of(&destroy).as_deref(), Some("com.x.Bar"));
}

#[test]
fn test_constructor_arg_prefers_declared_arity() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);
    let a = registry.find_bean_by_name_or_id("a").unwrap();

    // Two constructor-arg entries: the arity-2 constructor is searched first.
    match resolver.resolve_constructor_arg(a, "first") {
        Resolution::Parameter(parameter) => {
            assert_eq!(parameter.constructor().method().parameter_count(), 2);
            assert_eq!(parameter.position(), 0);
        }
        other => panic!("expected a parameter, got {:?}", other),
    }

    let arg = doc.find_by_attribute("name", "second").unwrap();
    let resolved = resolver.resolve_site(&doc, &ReferenceSite::value(arg, "name"));
    assert!(matches!(resolved, Resolution::Parameter(ref p) if p.name() == "second"));
}

#[test]
fn test_constructor_arity_counts_bean_namespace_only() {
    let doc = MemoryDocument::builder("")
        .open("beans")
        .open("bean")
        .attr("id", "a")
        .attr("class", "com.x.Foo")
        .open("constructor-arg")
        .attr("name", "first")
        .close()
        .open_ns("urn:other", "constructor-arg")
        .attr("name", "second")
        .close()
        .close()
        .build();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);
    let a = registry.find_bean_by_name_or_id("a").unwrap();

    assert_eq!(a.constructor_arg_count(resolver.config()), 1);
    match resolver.resolve_constructor_arg(a, "first") {
        Resolution::Parameter(parameter) => {
            assert_eq!(parameter.constructor().method().parameter_count(), 1);
            assert_eq!(parameter.name(), "first");
        }
        other => panic!("expected a parameter, got {:?}", other),
    }
}

#[test]
fn test_bean_references() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);

    let b = doc.find_by_attribute("id", "b").unwrap();
    let factory = resolver.resolve_site(&doc, &ReferenceSite::value(b, "factory-bean"));
    assert!(matches!(factory, Resolution::Bean(_)));
    assert_eq!(bean_id(&factory).as_deref(), Some("a"));

    let property = doc.find_by_attribute("ref", "x").unwrap();
    let via_alias = resolver.resolve_site(&doc, &ReferenceSite::value(property, "ref"));
    assert!(matches!(via_alias, Resolution::Alias { .. }));
    assert_eq!(bean_id(&via_alias).as_deref(), Some("a"));

    // <alias name="x" alias="y"/>: the target `x` is itself an alias of `a`.
    let chained = doc.find_by_attribute("alias", "y").unwrap();
    let target = resolver.resolve_site(&doc, &ReferenceSite::value(chained, "name"));
    assert_eq!(bean_id(&target).as_deref(), Some("a"));
}

#[test]
fn test_two_hop_alias_is_absent_by_default() {
    let doc = registry_document();
    let types = sample_types();

    let registry = BeanRegistry::new(&doc);
    let resolver = BeanResolver::new(&registry, &types);
    assert!(resolver.resolve_bean_reference("y").is_absent());

    let chained = BeanRegistry::builder(ResolverConfig::default().with_alias_chains(true))
        .add_document(&doc)
        .build();
    let resolver = BeanResolver::new(&chained, &types);
    assert_eq!(bean_id(&resolver.resolve_bean_reference("y")).as_deref(), Some("a"));
}

#[test]
fn test_class_attribute() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);

    let a = doc.find_by_attribute("id", "a").unwrap();
    let class = resolver.resolve_site(&doc, &ReferenceSite::value(a, "class"));
    assert_eq!(class_of(&class).as_deref(), Some("com.x.Foo"));
    assert_eq!(
        ReferenceKind::classify(&doc, &ReferenceSite::value(a, "class"), registry.config()),
        Some(ReferenceKind::ClassName)
    );
}

#[test]
fn test_repeated_resolution_is_identical() {
    let doc = registry_document();
    let registry = BeanRegistry::new(&doc);
    let types = sample_types();
    let resolver = BeanResolver::new(&registry, &types);

    let b = doc.find_by_attribute("id", "b").unwrap();
    let sites = [
        ReferenceSite::value(b, "factory-bean"),
        ReferenceSite::value(b, "factory-method"),
        ReferenceSite::value(b, "destroy-method"),
        ReferenceSite::value(b, "id"),
    ];
    for site in &sites {
        assert_eq!(resolver.resolve_site(&doc, site), resolver.resolve_site(&doc, site));
    }
}
