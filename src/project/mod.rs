//! Import resolution across configuration files.
//!
//! The engine itself never touches the file system; this module is the one
//! place that checks paths on disk and asks the host to load documents.

mod import_resolver;
mod search_strategy;

#[cfg(feature = "xml")]
pub use import_resolver::XmlFileLoader;
pub use import_resolver::{
    DocumentLoader, collect_import_closure, import_candidates, import_resources, resolve_imports,
};
pub use search_strategy::{
    CLASSPATH_PREFIXES, LocalDirectoryStrategy, SearchStrategy, SourceRootsStrategy,
    StrategySelector,
};
