//! Resolving `<import resource="..."/>` references to documents.
//!
//! A reference is joined with every root the active [`SearchStrategy`]
//! supplies. Only existing regular files are kept, and each one is handed to
//! the host's [`DocumentLoader`].

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use super::search_strategy::{SearchStrategy, StrategySelector};
use crate::base::constants::{BEANS, IMPORT, RESOURCE};
use crate::config::ResolverConfig;
use crate::syntax::{DocumentTree, NodeId};

// ============================================================================
// LOADERS
// ============================================================================

/// Turns a file into a document. Owned by the host.
pub trait DocumentLoader {
    type Document: DocumentTree;

    /// Load the document at `path`, or `None` if it cannot be read.
    fn load(&self, path: &Path) -> Option<Self::Document>;
}

impl<F, D> DocumentLoader for F
where
    F: Fn(&Path) -> Option<D>,
    D: DocumentTree,
{
    type Document = D;

    fn load(&self, path: &Path) -> Option<D> {
        self(path)
    }
}

/// Loads XML files from disk into memory documents.
#[cfg(feature = "xml")]
#[derive(Clone, Copy, Debug, Default)]
pub struct XmlFileLoader;

#[cfg(feature = "xml")]
impl DocumentLoader for XmlFileLoader {
    type Document = crate::syntax::MemoryDocument;

    fn load(&self, path: &Path) -> Option<Self::Document> {
        match crate::syntax::xml::load_document(path) {
            Ok(document) => Some(document),
            Err(err) => {
                tracing::debug!("Failed to load {}: {}", path.display(), err);
                None
            }
        }
    }
}

// ============================================================================
// RESOLUTION
// ============================================================================

/// Normalise a reference into a relative path, rejecting patterns.
fn relative_reference(reference: &str) -> Option<&str> {
    let trimmed = reference.trim().trim_start_matches('/');
    if trimmed.is_empty() || trimmed.contains(['*', '?']) {
        return None;
    }
    Some(trimmed)
}

/// Existing regular files the reference points at, in strategy root order.
pub fn import_candidates(
    reference: &str,
    strategy: &dyn SearchStrategy,
    origin: &dyn DocumentTree,
) -> Vec<PathBuf> {
    let Some(relative) = relative_reference(reference) else {
        tracing::debug!("Skipping unsupported import reference '{}'", reference);
        return Vec::new();
    };

    let roots = strategy.candidate_roots(origin);
    tracing::debug!("Resolving import '{}' against {} root(s)", relative, roots.len());

    roots
        .into_iter()
        .map(|root| root.join(relative))
        .filter(|path| {
            let keep = path.is_file();
            if !keep {
                tracing::debug!("Skipping import candidate {}", path.display());
            }
            keep
        })
        .collect()
}

/// Documents an import reference resolves to.
///
/// Candidate paths are computed up front; documents are loaded lazily as the
/// iterator is consumed. Wildcard and empty references give nothing.
pub fn resolve_imports<'l, L: DocumentLoader>(
    reference: &str,
    strategy: &dyn SearchStrategy,
    origin: &dyn DocumentTree,
    loader: &'l L,
) -> impl Iterator<Item = L::Document> + use<'l, L> {
    import_candidates(reference, strategy, origin)
        .into_iter()
        .filter_map(move |path| loader.load(&path))
}

/// `resource` values of every `<import>` in the document, in document order.
pub fn import_resources(doc: &dyn DocumentTree, config: &ResolverConfig) -> Vec<String> {
    let mut resources = Vec::new();
    if let Some(root) = doc.root_element() {
        collect_resources(doc, root, config, &mut resources);
    }
    resources
}

fn collect_resources(
    doc: &dyn DocumentTree,
    group: NodeId,
    config: &ResolverConfig,
    out: &mut Vec<String>,
) {
    for child in doc.children(group) {
        if !config.is_bean_namespace(doc.namespace(child)) {
            continue;
        }
        match doc.local_name(child) {
            IMPORT => {
                if let Some(resource) = doc.attribute(child, RESOURCE) {
                    out.push(resource.to_string());
                }
            }
            BEANS => collect_resources(doc, child, config, out),
            _ => {}
        }
    }
}

/// The origin and every document reachable from it through imports.
///
/// Breadth first; each file is loaded at most once, so import cycles
/// terminate. The origin is always the first element.
pub fn collect_import_closure<L: DocumentLoader>(
    origin: L::Document,
    selector: &StrategySelector,
    loader: &L,
    config: &ResolverConfig,
) -> Vec<L::Document> {
    let mut seen: FxHashSet<PathBuf> = FxHashSet::default();
    if let Some(location) = origin.location() {
        seen.insert(canonical(location));
    }

    let mut documents = vec![origin];
    let mut next = 0;
    while next < documents.len() {
        let current = &documents[next];
        let mut paths = Vec::new();
        for resource in import_resources(current, config) {
            let (strategy, reference) = selector.select(&resource);
            paths.extend(import_candidates(reference, strategy, current));
        }
        next += 1;

        for path in paths {
            if !seen.insert(canonical(&path)) {
                continue;
            }
            if let Some(document) = loader.load(&path) {
                documents.push(document);
            }
        }
    }

    tracing::debug!("Import closure holds {} document(s)", documents.len());
    documents
}

fn canonical(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
