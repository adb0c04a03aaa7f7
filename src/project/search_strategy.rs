//! Where relative import references are looked up.

use std::path::PathBuf;

use crate::syntax::DocumentTree;

/// Reference prefixes that select the source-root lookup.
pub const CLASSPATH_PREFIXES: [&str; 2] = ["classpath*:", "classpath:"];

/// Supplies candidate root directories for an import reference.
pub trait SearchStrategy {
    /// Root directories to join the reference with, in search order.
    fn candidate_roots(&self, origin: &dyn DocumentTree) -> Vec<PathBuf>;
}

/// Looks next to the importing document.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalDirectoryStrategy;

impl SearchStrategy for LocalDirectoryStrategy {
    fn candidate_roots(&self, origin: &dyn DocumentTree) -> Vec<PathBuf> {
        origin
            .location()
            .and_then(|path| path.parent())
            .map(|dir| vec![dir.to_path_buf()])
            .unwrap_or_default()
    }
}

/// Looks in a fixed list of source roots, regardless of the importing document.
#[derive(Clone, Debug, Default)]
pub struct SourceRootsStrategy {
    roots: Vec<PathBuf>,
}

impl SourceRootsStrategy {
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl SearchStrategy for SourceRootsStrategy {
    fn candidate_roots(&self, _origin: &dyn DocumentTree) -> Vec<PathBuf> {
        self.roots.clone()
    }
}

/// Chooses a strategy from the shape of the reference string.
///
/// `classpath:` and `classpath*:` references search the source roots with the
/// prefix removed; everything else is relative to the importing document.
#[derive(Clone, Debug, Default)]
pub struct StrategySelector {
    local: LocalDirectoryStrategy,
    source_roots: SourceRootsStrategy,
}

impl StrategySelector {
    pub fn new(source_roots: SourceRootsStrategy) -> Self {
        Self {
            local: LocalDirectoryStrategy,
            source_roots,
        }
    }

    pub fn select<'r>(&self, reference: &'r str) -> (&dyn SearchStrategy, &'r str) {
        let trimmed = reference.trim();
        for prefix in CLASSPATH_PREFIXES {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                return (&self.source_roots, rest);
            }
        }
        (&self.local, trimmed)
    }
}
