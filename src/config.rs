//! Resolver configuration.

use crate::base::constants::{BEANS_NAMESPACE, P_NAMESPACE};

/// Options shared by every resolution and completion query.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverConfig {
    /// Namespace of `<beans>`, `<bean>`, `<property>` and friends.
    /// Elements with an empty namespace are accepted as well.
    pub bean_namespace: String,
    /// Namespace of shorthand property attributes.
    pub p_namespace: String,
    /// Follow alias → alias → bean chains instead of stopping after one hop.
    pub follow_alias_chains: bool,
    /// Maximum number of factory-bean/parent hops during class inference.
    pub max_inference_depth: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            bean_namespace: BEANS_NAMESPACE.to_string(),
            p_namespace: P_NAMESPACE.to_string(),
            follow_alias_chains: false,
            max_inference_depth: 32,
        }
    }
}

impl ResolverConfig {
    /// Set the bean vocabulary namespace.
    pub fn with_bean_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.bean_namespace = namespace.into();
        self
    }

    /// Set the shorthand property namespace.
    pub fn with_p_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.p_namespace = namespace.into();
        self
    }

    /// Enable or disable transitive alias chains.
    pub fn with_alias_chains(mut self, follow: bool) -> Self {
        self.follow_alias_chains = follow;
        self
    }

    /// Set the class inference depth limit.
    pub fn with_max_inference_depth(mut self, depth: usize) -> Self {
        self.max_inference_depth = depth;
        self
    }

    /// Whether `namespace` denotes the bean vocabulary.
    pub fn is_bean_namespace(&self, namespace: &str) -> bool {
        namespace.is_empty() || namespace == self.bean_namespace
    }

    /// Whether `namespace` denotes shorthand property attributes.
    pub fn is_p_namespace(&self, namespace: &str) -> bool {
        namespace == self.p_namespace
    }
}
