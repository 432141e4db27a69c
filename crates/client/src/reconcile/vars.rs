//! Variable-set transformations.
//!
//! Two representations of a variable set coexist: the wire form, where each
//! value is wrapped in a metadata record (`{"value": ..., "type": ...}`),
//! and the flat form holding bare values. The server also fills in
//! variables the user never declared; surfacing those as state would create
//! permanent drift, so reads filter the observed set down to the declared
//! key set ("declared keys win" visibility).

use serde_json::{Map, Value};

use crate::error::{FleetError, Result};

/// Keep exactly the entries of `observed` whose key exists in `declared`,
/// with values taken from `observed`.
pub fn retain_declared(
    declared: &Map<String, Value>,
    observed: &Map<String, Value>,
) -> Map<String, Value> {
    observed
        .iter()
        .filter(|(key, _)| declared.contains_key(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// String-level wrapper around [`retain_declared`] for JSON-encoded
/// variable attributes. Fails with a decode error when either side is not
/// a JSON object.
pub fn filter_unspecified_keys(declared_json: &str, observed_json: &str) -> Result<String> {
    let declared: Map<String, Value> = serde_json::from_str(declared_json)
        .map_err(|e| FleetError::decode("declared vars_json", e))?;
    let observed: Map<String, Value> = serde_json::from_str(observed_json)
        .map_err(|e| FleetError::decode("observed vars_json", e))?;

    let filtered = retain_declared(&declared, &observed);
    serde_json::to_string(&Value::Object(filtered))
        .map_err(|e| FleetError::decode("filtered vars_json", e))
}

/// Unwrap wire-form variable records to the flat form.
///
/// Records without a `value` field are omitted; entries that are not
/// records at all pass through unchanged.
pub fn flatten_wire_vars(wire: &Map<String, Value>) -> Map<String, Value> {
    let mut flat = Map::new();
    for (name, value) in wire {
        match value {
            Value::Object(record) => {
                if let Some(inner) = record.get("value") {
                    flat.insert(name.clone(), inner.clone());
                }
            }
            other => {
                flat.insert(name.clone(), other.clone());
            }
        }
    }
    flat
}
