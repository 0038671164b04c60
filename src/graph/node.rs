use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// Port/link type tag used throughout the reconstruction: the source format
/// carries no type information, so every synthesized port and link is tagged
/// `"unknown"` and downstream consumers re-infer or tolerate it.
pub const UNKNOWN_TYPE: &str = "unknown";

/// Execution mode of a node in the host editor.
///
/// The host convention is `0` for a normal node and `4` for a node that is
/// present but non-executable - the rendering for a class the host does not
/// have installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMode {
    Active = 0,
    Disabled = 4,
}

impl Serialize for NodeMode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

/// An input port synthesized for a resolved edge. One entry per edge, in the
/// order edges were resolved for the node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputPort {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub link: i64,
}

/// An output port, grown lazily: slot `k` exists iff some edge referenced slot
/// `k` or a higher slot forced padding down to `k`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputPort {
    pub name: String,
    #[serde(rename = "type")]
    pub type_tag: String,
    pub slot_index: usize,
    pub links: Vec<i64>,
}

impl OutputPort {
    /// A padding port for a slot nothing has named yet. The placeholder name
    /// combines the owning node's class with the slot index.
    pub(crate) fn placeholder(class_type: &str, slot_index: usize) -> Self {
        Self {
            name: format!("{class_type}_{slot_index}"),
            type_tag: UNKNOWN_TYPE.to_string(),
            slot_index,
            links: Vec::new(),
        }
    }
}

/// A single reconstructed node, as the host editor expects it.
///
/// Invariant: `mode == Disabled` iff `is_known_type == false`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub id: i64,
    pub declared_type: String,
    /// Whether the host's type registry recognized `declared_type`. Not part
    /// of the wire format; `mode` carries it to the host.
    pub is_known_type: bool,
    /// Creation-order index within the conversion.
    pub order: usize,
    pub mode: NodeMode,
    pub pos: [f32; 2],
    pub size: [f32; 2],
    pub inputs: Vec<InputPort>,
    pub outputs: Vec<OutputPort>,
    pub title: Option<String>,
    pub properties: serde_json::Map<String, Value>,
    pub widgets_values: Vec<Value>,
}

impl NodeRecord {
    pub(crate) fn new(id: i64, declared_type: String, is_known_type: bool, order: usize) -> Self {
        let mode = if is_known_type {
            NodeMode::Active
        } else {
            NodeMode::Disabled
        };
        Self {
            id,
            declared_type,
            is_known_type,
            order,
            mode,
            pos: [0.0, 0.0],
            size: [0.0, 0.0],
            inputs: Vec::new(),
            outputs: Vec::new(),
            title: None,
            properties: serde_json::Map::new(),
            widgets_values: Vec::new(),
        }
    }
}

impl Serialize for NodeRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Field order follows the host's serialization of a graph node.
        let mut len = 11;
        if self.title.is_some() {
            len += 1;
        }
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("type", &self.declared_type)?;
        if let Some(title) = &self.title {
            map.serialize_entry("title", title)?;
        }
        map.serialize_entry("pos", &self.pos)?;
        map.serialize_entry("size", &self.size)?;
        map.serialize_entry("flags", &serde_json::Map::new())?;
        map.serialize_entry("order", &self.order)?;
        map.serialize_entry("mode", &self.mode)?;
        map.serialize_entry("inputs", &self.inputs)?;
        map.serialize_entry("outputs", &self.outputs)?;
        map.serialize_entry("properties", &self.properties)?;
        map.serialize_entry("widgets_values", &self.widgets_values)?;
        map.end()
    }
}
