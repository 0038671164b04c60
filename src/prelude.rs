//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! fukugen crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use fukugen::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let json = std::fs::read_to_string("path/to/dataflow.json")?;
//! let map = DataflowMap::from_json_str(&json)?;
//!
//! let registry = StaticTypeRegistry::new();
//! let graph = convert(map, &registry);
//!
//! println!("{} nodes, {} links", graph.nodes.len(), graph.links.len());
//! # Ok(())
//! # }
//! ```

// Conversion pipeline
pub use crate::convert::{
    ConversionArtifacts, Converter, ConverterBuilder, PackIndex, PackMetadata, convert,
};

// Input and output models
pub use crate::dataflow::{DataflowMap, DataflowNode, EdgeRef, InputValue, NodeMeta, OrderedInputs};
pub use crate::graph::{
    InputPort, LinkRecord, NodeMode, NodeRecord, OutputPort, RenderGraph, UNKNOWN_TYPE,
};

// Host boundary
pub use crate::host::{HostLoader, LoadFlags, convert_and_load};
pub use crate::registry::{StaticTypeRegistry, TypeRegistry};

// Error types
pub use crate::error::{ConvertError, RegistryError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
