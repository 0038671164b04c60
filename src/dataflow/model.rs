//! Canonical input model for the flat dataflow format.
//!
//! The source format is a JSON object keyed by node id, where each node
//! declares its class name and a map of resolved input values. An input value
//! is either a literal (widget value) or an edge reference
//! `[source_id, source_slot]`. No port objects exist at this stage; the
//! conversion pipeline synthesizes them.
//!
//! Both the node map and each node's `inputs` map are modelled as *ordered*
//! pair lists rather than hash maps: node creation order drives id assignment
//! and layout, and declared input order is the documented fallback for widget
//! values whose class has no (or a failing) widget-order lookup.

use crate::error::ConvertError;
use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde_json::Value;
use std::fmt;

/// A reference to another node's output slot, i.e. a graph edge in source form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRef {
    /// The map key of the source node, verbatim from the document.
    pub source_key: String,
    pub source_slot: u32,
}

/// A single declared input of a dataflow node.
#[derive(Debug, Clone, PartialEq)]
pub enum InputValue {
    /// A literal configuration value (widget value).
    Literal(Value),
    /// A connection to another node's output.
    Edge(EdgeRef),
}

impl InputValue {
    /// Classifies a raw JSON value as an edge reference or a literal.
    ///
    /// The rule is structural and exact: a value is an edge iff it is a
    /// 2-element array whose second element is a number. Every other shape -
    /// scalar, string, object, or a pair with a non-numeric second element -
    /// is a literal.
    pub fn classify(value: Value) -> Self {
        if let Value::Array(items) = &value {
            if items.len() == 2 {
                if let Some(slot) = items[1].as_f64() {
                    let source_key = match &items[0] {
                        Value::String(key) => key.clone(),
                        other => other.to_string(),
                    };
                    return InputValue::Edge(EdgeRef {
                        source_key,
                        source_slot: slot as u32,
                    });
                }
            }
        }
        InputValue::Literal(value)
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, InputValue::Edge(_))
    }
}

impl<'de> Deserialize<'de> for InputValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(InputValue::classify(Value::deserialize(deserializer)?))
    }
}

/// The declared inputs of a node, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedInputs(Vec<(String, InputValue)>);

impl OrderedInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, value: InputValue) {
        self.0.push((field.into(), value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputValue)> {
        self.0.iter().map(|(field, value)| (field.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(String, InputValue)>> for OrderedInputs {
    fn from(entries: Vec<(String, InputValue)>) -> Self {
        Self(entries)
    }
}

impl<'de> Deserialize<'de> for OrderedInputs {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct InputsVisitor;

        impl<'de> Visitor<'de> for InputsVisitor {
            type Value = OrderedInputs;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of input field names to values")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((field, value)) = access.next_entry::<String, InputValue>()? {
                    entries.push((field, value));
                }
                Ok(OrderedInputs(entries))
            }
        }

        deserializer.deserialize_map(InputsVisitor)
    }
}

/// Optional node metadata carried alongside the execution data.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NodeMeta {
    pub title: Option<String>,
}

/// A single node declaration from the dataflow map.
#[derive(Debug, Clone, Deserialize)]
pub struct DataflowNode {
    pub class_type: String,
    #[serde(default)]
    pub inputs: OrderedInputs,
    #[serde(rename = "_meta", default)]
    pub meta: Option<NodeMeta>,
}

impl DataflowNode {
    pub fn new(class_type: impl Into<String>) -> Self {
        Self {
            class_type: class_type.into(),
            inputs: OrderedInputs::new(),
            meta: None,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|meta| meta.title.as_deref())
    }
}

/// The complete dataflow map, with nodes in document order.
#[derive(Debug, Clone, Default)]
pub struct DataflowMap {
    pub entries: Vec<(String, DataflowNode)>,
}

impl DataflowMap {
    /// Parses a dataflow map from JSON text, preserving document order of both
    /// nodes and each node's inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::JsonParse`] if the text is not valid JSON or
    /// the top-level value is not an object of node declarations. This is the
    /// only structural contract the engine enforces; everything inside a node
    /// (unknown classes, dangling edge references) is tolerated later.
    pub fn from_json_str(json: &str) -> Result<Self, ConvertError> {
        serde_json::from_str(json).map_err(|e| ConvertError::JsonParse(e.to_string()))
    }

    pub fn insert(&mut self, key: impl Into<String>, node: DataflowNode) {
        self.entries.push((key.into(), node));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for DataflowMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MapVisitor;

        impl<'de> Visitor<'de> for MapVisitor {
            type Value = DataflowMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of node ids to node declarations")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, node)) = access.next_entry::<String, DataflowNode>()? {
                    entries.push((key, node));
                }
                Ok(DataflowMap { entries })
            }
        }

        deserializer.deserialize_map(MapVisitor)
    }
}
