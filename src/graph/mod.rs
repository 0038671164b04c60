pub mod link;
pub mod node;

pub use link::*;
pub use node::*;

use serde::Serialize;
use serde_json::Value;

/// Schema version of the serialized graph, expected by the host loader.
pub const GRAPH_VERSION: f64 = 0.4;

/// The fully reconstructed node-link graph, ready to hand to the host editor.
///
/// Invariants upheld by the conversion pipeline:
/// - `last_node_id == max(node.id) + 1` (0 for an empty graph)
/// - `last_link_id == links.len()`
/// - link ids are a dense sequence starting at 0
#[derive(Debug, Clone, Serialize)]
pub struct RenderGraph {
    pub last_node_id: i64,
    pub last_link_id: i64,
    pub nodes: Vec<NodeRecord>,
    pub links: Vec<LinkRecord>,
    pub groups: Vec<Value>,
    pub config: serde_json::Map<String, Value>,
    pub extra: serde_json::Map<String, Value>,
    pub version: f64,
}

impl RenderGraph {
    pub(crate) fn new(nodes: Vec<NodeRecord>, links: Vec<LinkRecord>, max_node_id: i64) -> Self {
        let last_link_id = links.len() as i64;
        Self {
            last_node_id: max_node_id + 1,
            last_link_id,
            nodes,
            links,
            groups: Vec::new(),
            config: serde_json::Map::new(),
            extra: serde_json::Map::new(),
            version: GRAPH_VERSION,
        }
    }
}
