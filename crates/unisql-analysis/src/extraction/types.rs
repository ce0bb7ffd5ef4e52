//! Extraction result types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A data source read by a script: table or object name plus its columns.
///
/// Model-generated; names may repeat or carry free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputDescriptor {
    pub source: String,
    pub columns: Vec<String>,
}

/// A table or object written by a script and the declared operation label
/// (e.g. "INSERT", "UPDATE"). The label is free-form model output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDescriptor {
    pub destination: String,
    pub operation: String,
}

impl InputDescriptor {
    /// Lenient conversion: missing or mistyped fields become empty, non-string
    /// columns are dropped. Returns `None` when `value` is not an object.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            source: string_field(obj, "source"),
            columns: string_list(obj.get("columns")),
        })
    }
}

impl OutputDescriptor {
    /// Lenient conversion; see [`InputDescriptor::from_value`].
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        Some(Self {
            destination: string_field(obj, "destination"),
            operation: string_field(obj, "operation"),
        })
    }
}

/// Inputs, outputs, and related tables inferred for one script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticExtraction {
    pub inputs: Vec<InputDescriptor>,
    pub outputs: Vec<OutputDescriptor>,
    pub combinable_with: Vec<String>,
    /// Object entries of `inputs` exactly as the model returned them,
    /// extra keys and non-string values included.
    #[serde(skip)]
    pub raw_inputs: Vec<Value>,
    /// Object entries of `outputs` exactly as returned.
    #[serde(skip)]
    pub raw_outputs: Vec<Value>,
}

impl SemanticExtraction {
    /// The neutral result used whenever extraction fails.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Read the three keys from a parsed response object.
    ///
    /// Missing keys, non-array values, and malformed entries all read as
    /// empty, so partial objects from the model are accepted.
    pub fn from_object(obj: &Map<String, Value>) -> Self {
        Self {
            inputs: entries(obj, "inputs")
                .iter()
                .filter_map(InputDescriptor::from_value)
                .collect(),
            outputs: entries(obj, "outputs")
                .iter()
                .filter_map(OutputDescriptor::from_value)
                .collect(),
            combinable_with: string_list(obj.get("combinable_with")),
            raw_inputs: raw_objects(obj, "inputs"),
            raw_outputs: raw_objects(obj, "outputs"),
        }
    }
}

/// Whether a script's model-inferred fields came from a usable response.
///
/// Kept in memory only: the persisted report does not distinguish an empty
/// inference from a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionOutcome {
    /// The response parsed; the fields are whatever the model returned.
    Inferred,
    /// The call or parsing failed; the fields are empty.
    Failed { reason: String },
}

impl ExtractionOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

fn entries<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn raw_objects(obj: &Map<String, Value>, key: &str) -> Vec<Value> {
    entries(obj, key)
        .iter()
        .filter(|v| v.is_object())
        .cloned()
        .collect()
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
