//! Input/stream flattening between configuration records and the wire
//! format.
//!
//! Direction A ([`build_inputs`]) turns ordered configuration records into
//! the composite-keyed request maps. Direction B
//! ([`flatten_policy_inputs`]) turns an API response back into
//! configuration-shaped records, dropping disabled inputs and streams and
//! hiding server-defaulted variables.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{FleetError, Result};
use crate::models::{
    PackagePolicy, PackagePolicyInput, PackagePolicyRequestInput, PackagePolicyRequestStream,
};
use crate::reconcile::keys::{InputKey, StreamKey};
use crate::reconcile::vars::{filter_unspecified_keys, flatten_wire_vars};
use crate::tree::TreeAccess;

/// Declared configuration of one stream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamConfig {
    /// Data stream name within the integration (e.g. `"security"`).
    pub data_stream: String,
    /// Defaults to enabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// JSON-encoded flat variable object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars_json: Option<String>,
}

/// Declared configuration of one input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Policy template containing the input (see the integration's
    /// manifest).
    pub policy_template: String,
    /// Input type.
    #[serde(rename = "type")]
    pub input_type: String,
    /// Defaults to enabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// JSON-encoded flat variable object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vars_json: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub streams: Vec<StreamConfig>,
}

impl InputConfig {
    fn key(&self) -> InputKey {
        InputKey::new(&self.policy_template, &self.input_type)
    }
}

/// State produced for one stream from an API response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StreamState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_stream: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Raw wire-form variable object, as used by Fleet (merged with the
    /// package manifest defaults).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars: Option<String>,
    /// Flat variable object restricted to the declared key set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars_json: Option<String>,
}

/// State produced for one input from an API response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InputState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_template: Option<String>,
    #[serde(rename = "type")]
    pub input_type: String,
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vars_json: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub streams: Vec<StreamState>,
}

/// Decode a JSON-encoded variable attribute into the open map form.
pub(crate) fn decode_vars(
    raw: Option<&str>,
    context: impl FnOnce() -> String,
) -> Result<Option<Map<String, Value>>> {
    match raw {
        None | Some("") => Ok(None),
        Some(text) => serde_json::from_str(text)
            .map(Some)
            .map_err(|e| FleetError::decode(context(), e)),
    }
}

/// Direction A: build the composite-keyed request maps from ordered
/// configuration records. `package` is the integration package name used in
/// stream keys.
pub fn build_inputs(
    package: &str,
    inputs: &[InputConfig],
) -> Result<BTreeMap<String, PackagePolicyRequestInput>> {
    let mut wire = BTreeMap::new();

    for (i, input) in inputs.iter().enumerate() {
        let vars = decode_vars(input.vars_json.as_deref(), || {
            format!("input.{i}.vars_json")
        })?;

        let mut streams = BTreeMap::new();
        for (j, stream) in input.streams.iter().enumerate() {
            let stream_vars = decode_vars(stream.vars_json.as_deref(), || {
                format!("input.{i}.stream.{j}.vars_json")
            })?;
            streams.insert(
                StreamKey::new(package, &stream.data_stream).to_string(),
                PackagePolicyRequestStream {
                    enabled: Some(stream.enabled.unwrap_or(true)),
                    vars: stream_vars,
                },
            );
        }

        wire.insert(
            input.key().to_string(),
            PackagePolicyRequestInput {
                enabled: Some(input.enabled.unwrap_or(true)),
                vars,
                streams: Some(streams),
            },
        );
    }

    Ok(wire)
}

/// Direction B: produce configuration-shaped input records from an API
/// response.
///
/// Disabled inputs are dropped entirely, as are streams whose `enabled`
/// field is present and false. Observed variables are flattened from the
/// wire form and restricted to the declared key set when a matching
/// declared record exists (matched by composite key, so server-side
/// reordering does not break the correlation).
pub fn flatten_policy_inputs(
    policy: &PackagePolicy,
    declared: &[InputConfig],
) -> Result<Vec<InputState>> {
    let mut states = Vec::new();

    for input in &policy.inputs {
        if !input.enabled {
            continue;
        }

        let declared_input = declared.iter().find(|config| {
            config.input_type == input.input_type
                && input.policy_template.as_deref() == Some(config.policy_template.as_str())
        });

        let vars_json = flatten_input_vars(input, declared_input)?;
        let streams = flatten_streams(input, declared_input)?;

        states.push(InputState {
            policy_template: input.policy_template.clone(),
            input_type: input.input_type.clone(),
            enabled: input.enabled,
            vars_json,
            streams,
        });
    }

    Ok(states)
}

fn flatten_input_vars(
    input: &PackagePolicyInput,
    declared: Option<&InputConfig>,
) -> Result<Option<String>> {
    let Some(wire_vars) = &input.vars else {
        return Ok(None);
    };

    let flat = flatten_wire_vars(wire_vars);
    let mut flat_json = serde_json::to_string(&Value::Object(flat))
        .map_err(|e| FleetError::decode("input vars", e))?;

    if let Some(declared_json) = declared.and_then(|config| config.vars_json.as_deref()) {
        flat_json = filter_unspecified_keys(declared_json, &flat_json)?;
    }

    Ok(Some(flat_json))
}

fn flatten_streams(
    input: &PackagePolicyInput,
    declared_input: Option<&InputConfig>,
) -> Result<Vec<StreamState>> {
    let mut streams = Vec::new();

    let Some(wire_streams) = &input.streams else {
        return Ok(streams);
    };

    for (key, entry) in wire_streams {
        let Some(record) = entry.as_object() else {
            debug!(stream = %key, "Skipping non-object stream entry");
            continue;
        };

        let mut state = StreamState::default();

        if let Some(enabled) = record.get_path("enabled").and_then(Value::as_bool) {
            state.enabled = Some(enabled);
            if !enabled {
                continue;
            }
        }

        match record.get_path("data_stream.dataset").and_then(Value::as_str) {
            Some(dataset) => match dataset.split_once('.') {
                Some((_, name)) => state.data_stream = Some(name.to_string()),
                None => debug!(stream = %key, dataset, "Dataset has no package prefix"),
            },
            None => debug!(stream = %key, "Stream carries no data_stream.dataset"),
        }

        if let Some(wire_vars) = record.get_object_path("vars") {
            state.vars = Some(
                serde_json::to_string(&Value::Object(wire_vars.clone()))
                    .map_err(|e| FleetError::decode("stream vars", e))?,
            );

            let flat = flatten_wire_vars(wire_vars);
            let mut flat_json = serde_json::to_string(&Value::Object(flat))
                .map_err(|e| FleetError::decode("stream vars", e))?;

            let declared_stream = declared_input.and_then(|config| {
                config
                    .streams
                    .iter()
                    .find(|s| state.data_stream.as_deref() == Some(s.data_stream.as_str()))
            });
            if let Some(declared_json) = declared_stream.and_then(|s| s.vars_json.as_deref()) {
                flat_json = filter_unspecified_keys(declared_json, &flat_json)?;
            }

            state.vars_json = Some(flat_json);
        }

        streams.push(state);
    }

    Ok(streams)
}
