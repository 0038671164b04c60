//! The four-stage reconstruction pipeline.
//!
//! [`GraphBuilder`](builder) turns the dataflow map into skeleton node records,
//! [`ConnectionResolver`](resolver) classifies inputs and synthesizes
//! ports/links, [`LayoutEngine`](layout) assigns deterministic positions, and
//! [`MissingNodeAnnotator`](annotate) optionally stamps installable-pack
//! metadata onto matching nodes. All stages are synchronous, in-memory and
//! allocate fresh state per conversion, so concurrent conversions of
//! independent maps need no locking.

use crate::dataflow::DataflowMap;
use crate::graph::RenderGraph;
use crate::registry::TypeRegistry;
use tracing::debug;

mod annotate;
mod builder;
pub mod layout;
mod resolver;

pub use annotate::{PROP_ORIGINAL_NAME, PROP_REGISTRY_ID, PROP_VERSION, PackIndex, PackMetadata};

use annotate::MissingNodeAnnotator;
use builder::GraphBuilder;
use layout::LayoutEngine;
use resolver::ConnectionResolver;

/// The result of a conversion: the reconstructed graph plus diagnostics that
/// do not appear in the graph itself.
pub struct ConversionArtifacts {
    pub graph: RenderGraph,
    /// Edge references whose source id resolved to no node. Such edges are
    /// dropped without affecting the rest of the conversion; the count is
    /// surfaced here so callers can warn or assert on it.
    pub dropped_edges: usize,
}

pub struct Converter<'a> {
    map: DataflowMap,
    registry: &'a dyn TypeRegistry,
    pack_index: Option<&'a PackIndex>,
}

pub struct ConverterBuilder<'a> {
    map: DataflowMap,
    registry: &'a dyn TypeRegistry,
    pack_index: Option<&'a PackIndex>,
}

impl<'a> ConverterBuilder<'a> {
    pub fn new(map: DataflowMap, registry: &'a dyn TypeRegistry) -> Self {
        Self {
            map,
            registry,
            pack_index: None,
        }
    }

    /// Enables the missing-node annotation pass with the given metadata table.
    pub fn with_pack_index(mut self, pack_index: &'a PackIndex) -> Self {
        self.pack_index = Some(pack_index);
        self
    }

    pub fn build(self) -> Converter<'a> {
        Converter {
            map: self.map,
            registry: self.registry,
            pack_index: self.pack_index,
        }
    }
}

impl<'a> Converter<'a> {
    pub fn builder(map: DataflowMap, registry: &'a dyn TypeRegistry) -> ConverterBuilder<'a> {
        ConverterBuilder::new(map, registry)
    }

    /// Runs the full pipeline. Infallible by design: every tolerated anomaly
    /// (unknown class, dangling edge) is absorbed structurally, and the input
    /// contract was already enforced when the [`DataflowMap`] was parsed.
    pub fn convert(self) -> ConversionArtifacts {
        let mut skeleton = GraphBuilder::new(self.registry).build(&self.map);
        debug!(nodes = skeleton.nodes.len(), "built graph skeleton");

        let outcome = ConnectionResolver::new(self.registry).resolve(&self.map, &mut skeleton);
        debug!(
            links = outcome.links.len(),
            dropped = outcome.dropped_edges,
            "resolved connections"
        );

        LayoutEngine::assign(&mut skeleton.nodes);

        let mut graph = RenderGraph::new(skeleton.nodes, outcome.links, skeleton.max_node_id);

        if let Some(index) = self.pack_index {
            MissingNodeAnnotator::new(index).annotate(&mut graph);
        }

        ConversionArtifacts {
            graph,
            dropped_edges: outcome.dropped_edges,
        }
    }
}

/// One-call conversion without the annotation pass or diagnostics.
pub fn convert(map: DataflowMap, registry: &dyn TypeRegistry) -> RenderGraph {
    Converter::builder(map, registry).build().convert().graph
}
