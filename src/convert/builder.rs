use crate::dataflow::DataflowMap;
use crate::graph::NodeRecord;
use crate::registry::TypeRegistry;
use ahash::AHashMap;

/// The skeleton graph produced by the first pipeline stage: node records in
/// creation order with no ports or widget values yet, plus the lookup the
/// resolver needs to follow edge references.
pub(super) struct GraphSkeleton {
    pub(super) nodes: Vec<NodeRecord>,
    /// Original map key -> index into `nodes`. Edge references carry the map
    /// key verbatim, so resolution goes through the key rather than the
    /// parsed numeric id.
    pub(super) index_of: AHashMap<String, usize>,
    /// Highest node id observed, parsed or assigned. `-1` when the map is
    /// empty, so `max_node_id + 1` is always the correct `last_node_id`.
    pub(super) max_node_id: i64,
}

/// Converts the dataflow map into skeleton node records.
///
/// Id assignment: a map key that parses as a number becomes the node id;
/// any other key gets the node's creation-order index. Classes the registry
/// does not recognize are kept and marked disabled - never an error. This is
/// the engine's primary tolerance mechanism for node packs the host does not
/// have installed.
pub(super) struct GraphBuilder<'a> {
    registry: &'a dyn TypeRegistry,
}

impl<'a> GraphBuilder<'a> {
    pub(super) fn new(registry: &'a dyn TypeRegistry) -> Self {
        Self { registry }
    }

    pub(super) fn build(&self, map: &DataflowMap) -> GraphSkeleton {
        let mut nodes = Vec::with_capacity(map.len());
        let mut index_of = AHashMap::with_capacity(map.len());
        let mut max_node_id: i64 = -1;

        for (order, (key, decl)) in map.entries.iter().enumerate() {
            let id = key.parse::<i64>().unwrap_or(order as i64);
            max_node_id = max_node_id.max(id);

            let is_known = self.registry.has(&decl.class_type);
            let mut node = NodeRecord::new(id, decl.class_type.clone(), is_known, order);
            node.title = decl.title().map(str::to_string);

            index_of.insert(key.clone(), order);
            nodes.push(node);
        }

        GraphSkeleton {
            nodes,
            index_of,
            max_node_id,
        }
    }
}
