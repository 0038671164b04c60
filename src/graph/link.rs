use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

/// A synthesized connection between two node ports.
///
/// Link ids are a dense sequence starting at 0, assigned in the order edges
/// are discovered: nodes in creation order, and within a node its declared
/// inputs in document order.
///
/// The wire format is the host's 6-element array
/// `[id, source_id, source_slot, target_id, target_slot, type]`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    pub id: i64,
    pub source_id: i64,
    pub source_slot: u32,
    pub target_id: i64,
    pub target_slot: u32,
    pub type_tag: String,
}

impl Serialize for LinkRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut tuple = serializer.serialize_tuple(6)?;
        tuple.serialize_element(&self.id)?;
        tuple.serialize_element(&self.source_id)?;
        tuple.serialize_element(&self.source_slot)?;
        tuple.serialize_element(&self.target_id)?;
        tuple.serialize_element(&self.target_slot)?;
        tuple.serialize_element(&self.type_tag)?;
        tuple.end()
    }
}
