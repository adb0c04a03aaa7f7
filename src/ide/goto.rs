//! Go-to-definition implementation.

use crate::hir::{BeanResolver, ReferenceKind, ReferenceSite, Resolution};
use crate::project::{DocumentLoader, StrategySelector, resolve_imports};
use crate::syntax::DocumentTree;

/// Resolve the reference at `site` to its definition.
///
/// Returns [`Resolution::Absent`] for attributes that are not references, or
/// whose target cannot be found. Import resources go through [`goto_import`].
pub fn goto_definition<'a>(
    resolver: &BeanResolver<'a>,
    doc: &dyn DocumentTree,
    site: &ReferenceSite<'_>,
) -> Resolution<'a> {
    let resolution = resolver.resolve_site(doc, site);
    if resolution.is_absent() {
        tracing::trace!("no definition for {:?}", site);
    }
    resolution
}

/// Documents an `<import resource="..."/>` at `site` points to.
///
/// Empty when the site is not an import resource or nothing exists on disk.
pub fn goto_import<L: DocumentLoader>(
    resolver: &BeanResolver<'_>,
    doc: &dyn DocumentTree,
    site: &ReferenceSite<'_>,
    selector: &StrategySelector,
    loader: &L,
) -> Vec<L::Document> {
    let kind = ReferenceKind::classify(doc, site, resolver.config());
    if kind != Some(ReferenceKind::ImportResource) {
        return Vec::new();
    }
    let Some(resource) = site.read(doc) else {
        return Vec::new();
    };

    let (strategy, reference) = selector.select(resource);
    resolve_imports(reference, strategy, doc, loader).collect()
}
