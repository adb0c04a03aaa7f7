//! HIR tests
//!
//! Tests for:
//! - Naming transforms
//! - Registry lookup and aliases
//! - Class inference
//! - Symbol resolution

pub mod tests_symbol_resolution;
