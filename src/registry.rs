//! The injected view of the host's live node-type registry.
//!
//! The engine never owns type knowledge; it asks an injected [`TypeRegistry`]
//! two questions per node: is this class installed, and in which order does it
//! serialize its literal parameters. The second lookup is allowed to fail (in
//! a live host it is answered by introspecting a transient instance of the
//! class, which can throw) - the resolver catches the failure and falls back
//! to declared literal order for that node alone.

use crate::error::RegistryError;
use ahash::AHashMap;

/// Capability queries the conversion pipeline makes against the host runtime.
pub trait TypeRegistry {
    /// Whether `class_type` is currently installed in the host.
    fn has(&self, class_type: &str) -> bool;

    /// The canonical order in which `class_type` serializes its literal
    /// parameters (widget values).
    ///
    /// # Errors
    ///
    /// Implementations may fail (e.g. instantiating the class for
    /// introspection throws). Callers must treat an error as "no declared
    /// order" and fall back to insertion order.
    fn widget_order(&self, class_type: &str) -> Result<Vec<String>, RegistryError>;
}

/// A map-backed [`TypeRegistry`] for hosts that know their node catalog
/// statically, and for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticTypeRegistry {
    widget_orders: AHashMap<String, Vec<String>>,
}

impl StaticTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a class together with its widget order. An empty order is
    /// valid: the class is known but declares no literal parameters.
    pub fn register<I, S>(&mut self, class_type: impl Into<String>, widget_order: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.widget_orders.insert(
            class_type.into(),
            widget_order.into_iter().map(Into::into).collect(),
        );
    }

    pub fn len(&self) -> usize {
        self.widget_orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widget_orders.is_empty()
    }
}

impl TypeRegistry for StaticTypeRegistry {
    fn has(&self, class_type: &str) -> bool {
        self.widget_orders.contains_key(class_type)
    }

    fn widget_order(&self, class_type: &str) -> Result<Vec<String>, RegistryError> {
        self.widget_orders
            .get(class_type)
            .cloned()
            .ok_or_else(|| RegistryError::UnknownClass(class_type.to_string()))
    }
}
