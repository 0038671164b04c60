use thiserror::Error;

/// Errors that can occur while loading a dataflow map.
///
/// These are the only hard failures in the engine: once a map has parsed, the
/// conversion itself always produces a graph (unknown types and unresolvable
/// edges are tolerated structurally, see the crate docs).
#[derive(Error, Debug, Clone)]
pub enum ConvertError {
    #[error("Failed to parse dataflow JSON: {0}")]
    JsonParse(String),

    #[error("Failed to parse pack metadata JSON: {0}")]
    MetadataParse(String),
}

/// Errors a [`TypeRegistry`](crate::registry::TypeRegistry) may report when
/// asked for the widget order of a node class.
///
/// The resolver catches these per node and falls back to the declared literal
/// order; they never abort a conversion.
#[derive(Error, Debug, Clone)]
pub enum RegistryError {
    #[error("Failed to introspect widget order for node class '{class_type}': {message}")]
    IntrospectionFailed { class_type: String, message: String },

    #[error("Node class '{0}' is not registered")]
    UnknownClass(String),
}
