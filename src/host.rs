//! The hand-off boundary to the host editor runtime.
//!
//! The engine treats the host purely as an output sink: it never reads from
//! the live canvas, it only produces a [`RenderGraph`] value and pushes it
//! through a [`HostLoader`]. The call is fire-and-forget; nothing in the core
//! depends on its result.

use crate::convert::{Converter, PackIndex};
use crate::dataflow::DataflowMap;
use crate::graph::RenderGraph;
use crate::registry::TypeRegistry;

/// Dialog requests attached to a graph hand-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadFlags {
    pub show_missing_nodes_dialog: bool,
    pub show_missing_models_dialog: bool,
}

impl Default for LoadFlags {
    /// A reconstructed graph may reference node packs and model files the
    /// host does not have, so both dialogs are requested by default.
    fn default() -> Self {
        Self {
            show_missing_nodes_dialog: true,
            show_missing_models_dialog: true,
        }
    }
}

/// The host's graph loader.
pub trait HostLoader {
    fn load(&self, graph: &RenderGraph, flags: LoadFlags);
}

/// Runs the full pipeline and hands the result to the host with the default
/// dialog flags. Returns the diagnostics-free graph for callers that also
/// want to inspect it.
pub fn convert_and_load(
    map: DataflowMap,
    registry: &dyn TypeRegistry,
    pack_index: Option<&PackIndex>,
    host: &dyn HostLoader,
) -> RenderGraph {
    let mut converter = Converter::builder(map, registry);
    if let Some(index) = pack_index {
        converter = converter.with_pack_index(index);
    }
    let artifacts = converter.build().convert();
    host.load(&artifacts.graph, LoadFlags::default());
    artifacts.graph
}
