//! Assertion helpers for resolution and completion results.

use beanref::Resolution;
use beanref::ide::CompletionItem;

/// Labels of completion items, in order.
pub fn labels(items: &[CompletionItem]) -> Vec<&str> {
    items.iter().map(|item| item.label.as_ref()).collect()
}

/// Qualified name of a `Resolution::Class`, or of the class owning a
/// resolved method.
pub fn class_of(resolution: &Resolution<'_>) -> Option<String> {
    match resolution {
        Resolution::Class(class) => Some(class.qualified_name.to_string()),
        Resolution::Method(method) => Some(method.class().qualified_name.to_string()),
        _ => None,
    }
}

/// Name of the method a resolution points at.
pub fn method_name(resolution: &Resolution<'_>) -> Option<String> {
    resolution.method().map(|method| method.name.to_string())
}

/// `id` of the bean a resolution points at.
pub fn bean_id(resolution: &Resolution<'_>) -> Option<String> {
    resolution
        .bean()
        .and_then(|bean| bean.id())
        .map(str::to_string)
}
