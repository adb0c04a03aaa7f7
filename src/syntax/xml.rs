//! Loading [`MemoryDocument`]s from XML text.
//!
//! Element and attribute prefixes are resolved to namespace URIs so that
//! `p:name` and `<bean>` under a default `xmlns` come out the same way the
//! engine expects them. Text content, comments and processing instructions
//! are dropped.

use std::borrow::Cow;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;
use thiserror::Error;

use super::memory::{DocumentBuilder, MemoryDocument};

/// Errors raised while reading a document from disk or text.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error while reading the file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed XML.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// Parse XML text into a document.
pub fn parse_document(text: &str) -> Result<MemoryDocument, LoadError> {
    let mut reader = NsReader::from_str(text);
    let mut builder = DocumentBuilder::new("");

    loop {
        let (resolved, event) = reader.read_resolved_event()?;
        let namespace = namespace_uri(&resolved);
        match event {
            Event::Start(start) => {
                builder = open_element(&reader, builder, &namespace, &start)?;
            }
            Event::Empty(start) => {
                builder = open_element(&reader, builder, &namespace, &start)?.close();
            }
            Event::End(_) => builder = builder.close(),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(builder.build())
}

/// Read and parse the XML file at `path`, recording the path as its location.
pub fn load_document(path: &Path) -> Result<MemoryDocument, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let document = parse_document(&text)?;
    tracing::debug!("Loaded document {}", path.display());
    Ok(document.with_location(path))
}

fn open_element(
    reader: &NsReader<&[u8]>,
    builder: DocumentBuilder,
    namespace: &str,
    start: &BytesStart<'_>,
) -> Result<DocumentBuilder, LoadError> {
    let local_name = start.local_name();
    let mut builder = builder.open_ns(namespace, &String::from_utf8_lossy(local_name.as_ref()));

    for attr in start.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (resolved, local) = reader.resolve_attribute(attr.key);
        let attr_namespace = namespace_uri(&resolved);
        let value = attr.unescape_value()?;
        builder = builder.attr_ns(
            &attr_namespace,
            &String::from_utf8_lossy(local.as_ref()),
            &value,
        );
    }

    Ok(builder)
}

fn namespace_uri(resolved: &ResolveResult<'_>) -> String {
    match resolved {
        ResolveResult::Bound(namespace) => {
            let uri: Cow<'_, str> = String::from_utf8_lossy(namespace.as_ref());
            uri.into_owned()
        }
        ResolveResult::Unbound | ResolveResult::Unknown(_) => String::new(),
    }
}
