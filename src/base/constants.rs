//! Vocabulary of bean-registry documents.

// ============================================================================
// NAMESPACES
// ============================================================================

/// Namespace of the core bean vocabulary (`<beans>`, `<bean>`, `<property>`, ...).
pub const BEANS_NAMESPACE: &str = "http://www.springframework.org/schema/beans";

/// Namespace of shorthand property attributes (`p:name="..."`).
pub const P_NAMESPACE: &str = "http://www.springframework.org/schema/p";

// ============================================================================
// ELEMENTS
// ============================================================================

pub const BEANS: &str = "beans";
pub const BEAN: &str = "bean";
pub const ALIAS: &str = "alias";
pub const PROPERTY: &str = "property";
pub const CONSTRUCTOR_ARG: &str = "constructor-arg";
pub const REF: &str = "ref";
pub const IMPORT: &str = "import";

// ============================================================================
// ATTRIBUTES
// ============================================================================

pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const CLASS: &str = "class";
pub const FACTORY_BEAN: &str = "factory-bean";
pub const FACTORY_METHOD: &str = "factory-method";
pub const PARENT: &str = "parent";
pub const INIT_METHOD: &str = "init-method";
pub const DESTROY_METHOD: &str = "destroy-method";
pub const VALUE: &str = "value";
pub const VALUE_REF: &str = "value-ref";
pub const BEAN_REF: &str = "bean-ref";
pub const INDEX: &str = "index";
pub const TYPE: &str = "type";
pub const RESOURCE: &str = "resource";

// ============================================================================
// NAMING
// ============================================================================

/// Prefix of mutator method names (`name` ↔ `setName`).
pub const SETTER_PREFIX: &str = "set";

/// Suffix marking the by-reference variant of a shorthand attribute.
pub const REF_SUFFIX: &str = "-ref";
