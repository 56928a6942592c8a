//! Protocol messages for subset creation.

use crate::error::{ProtocolError, ProtocolResult};
use crate::key::SubsetKey;
use serde_json::{Map, Value};

/// Selects which JSON key names the identifier list in a creation body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubsetListType {
    /// Identifiers are machine ids (`machine_ids`).
    MachineIds,
    /// Identifiers are leaf ids (`leaf_ids`). The default.
    #[default]
    LeafIds,
}

impl SubsetListType {
    /// Returns the JSON key used for the identifier list.
    pub fn as_key(&self) -> &'static str {
        match self {
            SubsetListType::MachineIds => "machine_ids",
            SubsetListType::LeafIds => "leaf_ids",
        }
    }
}

/// Request body for materializing a subset on the server.
///
/// Posted to the subset base URL when a fetch reports the key as not yet
/// created.
#[derive(Debug, Clone, PartialEq)]
pub struct SubsetCreateBody {
    /// The derived subset key the server should materialize.
    pub hash: SubsetKey,
    /// Branch id scoping the key.
    pub branch_id: String,
    /// Which key names the identifier list.
    pub list_type: SubsetListType,
    /// The full current machine identifier list, in caller order.
    pub ids: Vec<String>,
}

impl SubsetCreateBody {
    /// Creates a new creation body.
    pub fn new(
        hash: SubsetKey,
        branch_id: impl Into<String>,
        list_type: SubsetListType,
        ids: Vec<String>,
    ) -> Self {
        Self {
            hash,
            branch_id: branch_id.into(),
            list_type,
            ids,
        }
    }

    /// Encodes to the wire JSON value.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        map.insert("hash".into(), Value::String(self.hash.as_str().to_owned()));
        map.insert("branch_id".into(), Value::String(self.branch_id.clone()));
        map.insert(
            self.list_type.as_key().into(),
            Value::Array(self.ids.iter().cloned().map(Value::String).collect()),
        );
        Value::Object(map)
    }

    /// Encodes to wire bytes.
    pub fn to_body(&self) -> ProtocolResult<Vec<u8>> {
        serde_json::to_vec(&self.to_json()).map_err(|e| ProtocolError::Encode(e.to_string()))
    }
}
