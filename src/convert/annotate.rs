//! Registry-identifier annotation for nodes whose class the host is missing.
//!
//! A caller that knows where missing node packs live (an external metadata
//! table mapping class names to installable pack ids) can have the pipeline
//! stamp that information onto matching nodes, so the host can offer an
//! "install missing node" suggestion. The pass is purely additive and
//! idempotent; nodes without a metadata entry are left untouched.

use crate::error::ConvertError;
use crate::graph::RenderGraph;
use ahash::AHashMap;
use serde::Deserialize;
use serde_json::Value;

/// Property key carrying the installable pack id.
pub const PROP_REGISTRY_ID: &str = "cnr_id";
/// Property key carrying the suggested pack version.
pub const PROP_VERSION: &str = "ver";
/// The host's rename property: preserving the original class name here lets
/// the host match renamed or relocated classes to the right suggestion.
pub const PROP_ORIGINAL_NAME: &str = "Node name for S&R";

/// Installable-pack metadata for a single node class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackMetadata {
    #[serde(alias = "registryId")]
    pub registry_id: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// An externally supplied table of `class name -> pack metadata`.
#[derive(Debug, Clone, Default)]
pub struct PackIndex {
    entries: AHashMap<String, PackMetadata>,
}

impl PackIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, class_type: impl Into<String>, metadata: PackMetadata) {
        self.entries.insert(class_type.into(), metadata);
    }

    pub fn get(&self, class_type: &str) -> Option<&PackMetadata> {
        self.entries.get(class_type)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parses a metadata table from JSON text. Malformed entries (anything
    /// without a registry id) are skipped rather than rejected, so one bad
    /// entry never prevents annotating the rest.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::MetadataParse`] if the text is not a JSON
    /// object keyed by class name.
    pub fn from_json_str(json: &str) -> Result<Self, ConvertError> {
        let raw: AHashMap<String, Value> =
            serde_json::from_str(json).map_err(|e| ConvertError::MetadataParse(e.to_string()))?;

        let mut index = Self::new();
        for (class_type, value) in raw {
            if let Ok(metadata) = serde_json::from_value::<PackMetadata>(value) {
                index.entries.insert(class_type, metadata);
            }
        }
        Ok(index)
    }
}

pub(super) struct MissingNodeAnnotator<'a> {
    index: &'a PackIndex,
}

impl<'a> MissingNodeAnnotator<'a> {
    pub(super) fn new(index: &'a PackIndex) -> Self {
        Self { index }
    }

    pub(super) fn annotate(&self, graph: &mut RenderGraph) {
        for node in &mut graph.nodes {
            let Some(metadata) = self.index.get(&node.declared_type) else {
                continue;
            };

            node.properties.insert(
                PROP_REGISTRY_ID.to_string(),
                Value::String(metadata.registry_id.clone()),
            );
            if let Some(version) = &metadata.version {
                node.properties
                    .insert(PROP_VERSION.to_string(), Value::String(version.clone()));
            }
            node.properties.insert(
                PROP_ORIGINAL_NAME.to_string(),
                Value::String(node.declared_type.clone()),
            );
        }
    }
}
