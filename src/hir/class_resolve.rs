//! Class inference for bean declarations.
//!
//! The class a bean exposes is found by the first applicable branch:
//!
//! 1. an explicit `class` attribute,
//! 2. the class of the bean named by `factory-bean`,
//! 3. the class of the bean named by `parent`.
//!
//! A `factory-method` then narrows the result to that method's return type,
//! unless the query is about the `factory-method` attribute itself.

use std::sync::Arc;

use rustc_hash::FxHashSet;

use super::reference::ReferenceSite;
use super::registry::{BeanDeclaration, DeclarationKey};
use super::resolve::BeanResolver;
use crate::metadata::{ClassDescriptor, MethodFilter};

/// Per-query inference state.
struct Inference {
    visited: FxHashSet<DeclarationKey>,
    max_depth: usize,
}

impl<'a> BeanResolver<'a> {
    /// Infer the class `bean` instantiates or exposes.
    ///
    /// `context` is the attribute the caller is resolving. When it is the
    /// bean's own `factory-method`, the factory method's return type is not
    /// applied, so the method is looked up on the class that declares it.
    pub fn resolve_class(
        &self,
        bean: BeanDeclaration<'_>,
        context: Option<&ReferenceSite<'_>>,
    ) -> Option<Arc<ClassDescriptor>> {
        let mut inference = Inference {
            visited: FxHashSet::default(),
            max_depth: self.config().max_inference_depth,
        };
        let suppress_narrowing = context.is_some_and(|site| site.is_factory_method_of(bean.node()));
        self.infer_class(bean, suppress_narrowing, &mut inference, 0)
    }

    /// Resolve a factory method's declared return type.
    ///
    /// The first accessible method named `method_name` wins; overloads are
    /// not told apart. `void` and non-class returns cannot be narrowed.
    pub fn narrow_by_factory_method(
        &self,
        class: &ClassDescriptor,
        method_name: &str,
    ) -> Option<Arc<ClassDescriptor>> {
        let method = class
            .public_methods()
            .iter()
            .find(|m| MethodFilter::METHOD.matches(m) && m.name.as_ref() == method_name)?;

        match method.return_kind.class_name() {
            Some(returned) => {
                tracing::trace!(
                    "factory method {}.{} returns {}",
                    class.simple_name(),
                    method_name,
                    returned
                );
                self.types.resolve_type(returned)
            }
            None => {
                tracing::trace!(
                    "factory method {}.{} has no class return",
                    class.simple_name(),
                    method_name
                );
                None
            }
        }
    }

    fn infer_class(
        &self,
        bean: BeanDeclaration<'_>,
        suppress_narrowing: bool,
        inference: &mut Inference,
        depth: usize,
    ) -> Option<Arc<ClassDescriptor>> {
        if depth > inference.max_depth {
            tracing::trace!("inference depth {} exceeded at {:?}", depth, bean);
            return None;
        }
        if !inference.visited.insert(bean.key()) {
            tracing::trace!("inference cycle cut at {:?}", bean);
            return None;
        }

        let base = if let Some(class_name) = bean.class_name() {
            tracing::trace!("explicit class {}", class_name);
            self.types.resolve_type(class_name)?
        } else if let Some(factory) = bean.factory_bean() {
            tracing::trace!("following factory-bean {}", factory);
            let target = self.lookup_bean(factory)?;
            self.infer_class(target, false, inference, depth + 1)?
        } else if let Some(parent) = bean.parent_name() {
            tracing::trace!("following parent {}", parent);
            let target = self.lookup_bean(parent)?;
            self.infer_class(target, false, inference, depth + 1)?
        } else {
            return None;
        };

        match bean.factory_method() {
            Some(method) if !suppress_narrowing => self.narrow_by_factory_method(&base, method),
            _ => Some(base),
        }
    }

    fn lookup_bean(&self, name: &str) -> Option<BeanDeclaration<'a>> {
        self.registry
            .lookup_reference(name, self.config().follow_alias_chains)
            .map(|found| found.bean)
    }
}
