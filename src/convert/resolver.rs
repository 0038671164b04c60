use super::builder::GraphSkeleton;
use crate::dataflow::{DataflowMap, InputValue};
use crate::graph::{InputPort, LinkRecord, NodeRecord, OutputPort, UNKNOWN_TYPE};
use crate::registry::TypeRegistry;
use serde_json::Value;
use tracing::warn;

/// What connection resolution produced besides the mutated skeleton.
pub(super) struct ResolutionOutcome {
    pub(super) links: Vec<LinkRecord>,
    /// Edge references whose source key did not resolve. Dropping them is
    /// deliberate and does not change the shape of the rest of the graph;
    /// the counter lets callers and tests observe it.
    pub(super) dropped_edges: usize,
}

/// Classifies every declared input of every node as a widget value or a graph
/// edge, synthesizing input ports, output ports and link records as it goes.
pub(super) struct ConnectionResolver<'a> {
    registry: &'a dyn TypeRegistry,
}

impl<'a> ConnectionResolver<'a> {
    pub(super) fn new(registry: &'a dyn TypeRegistry) -> Self {
        Self { registry }
    }

    pub(super) fn resolve(
        &self,
        map: &DataflowMap,
        skeleton: &mut GraphSkeleton,
    ) -> ResolutionOutcome {
        let mut links: Vec<LinkRecord> = Vec::new();
        let mut dropped_edges = 0;

        for (node_idx, (_, decl)) in map.entries.iter().enumerate() {
            let mut literals: Vec<(&str, &Value)> = Vec::new();

            for (field, value) in decl.inputs.iter() {
                match value {
                    InputValue::Literal(literal) => literals.push((field, literal)),
                    InputValue::Edge(edge) => {
                        let Some(&source_idx) = skeleton.index_of.get(&edge.source_key) else {
                            warn!(
                                source = %edge.source_key,
                                field,
                                class = %decl.class_type,
                                "dropping edge with unresolvable source id"
                            );
                            dropped_edges += 1;
                            continue;
                        };

                        let link_id = links.len() as i64;
                        let target = &mut skeleton.nodes[node_idx];
                        let target_id = target.id;
                        let target_slot = target.inputs.len() as u32;
                        target.inputs.push(InputPort {
                            name: field.to_string(),
                            type_tag: UNKNOWN_TYPE.to_string(),
                            link: link_id,
                        });

                        let source = &mut skeleton.nodes[source_idx];
                        let slot = edge.source_slot as usize;
                        while source.outputs.len() <= slot {
                            let next = source.outputs.len();
                            source
                                .outputs
                                .push(OutputPort::placeholder(&source.declared_type, next));
                        }
                        source.outputs[slot].links.push(link_id);

                        links.push(LinkRecord {
                            id: link_id,
                            source_id: source.id,
                            source_slot: edge.source_slot,
                            target_id,
                            target_slot,
                            type_tag: UNKNOWN_TYPE.to_string(),
                        });
                    }
                }
            }

            self.order_widget_values(&mut skeleton.nodes[node_idx], literals);
        }

        ResolutionOutcome {
            links,
            dropped_edges,
        }
    }

    /// Appends the node's literal inputs to `widgets_values`, following the
    /// class's declared widget order when one is available and falling back to
    /// declared (document) order for the remainder.
    fn order_widget_values(&self, node: &mut NodeRecord, mut pending: Vec<(&str, &Value)>) {
        if node.is_known_type {
            match self.registry.widget_order(&node.declared_type) {
                Ok(order) => {
                    for name in &order {
                        if let Some(pos) = pending.iter().position(|(field, _)| field == name) {
                            let (_, value) = pending.remove(pos);
                            node.widgets_values.push(unbox_literal(value));
                        }
                    }
                }
                Err(e) => {
                    warn!(
                        class = %node.declared_type,
                        error = %e,
                        "widget order lookup failed, keeping declared literal order"
                    );
                }
            }
        }

        for (_, value) in pending {
            node.widgets_values.push(value.clone());
        }
    }
}

/// Unwraps the `{ "__value__": X }` boxed-literal convention some producers
/// use for widget values.
fn unbox_literal(value: &Value) -> Value {
    if let Value::Object(fields) = value {
        if let Some(inner) = fields.get("__value__") {
            return inner.clone();
        }
    }
    value.clone()
}
