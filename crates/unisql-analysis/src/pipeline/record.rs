//! Per-script analysis record.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use unisql_core::errors::ScanError;

use crate::extraction::{
    extract_connections, ConnectionMap, ExtractionOutcome, InputDescriptor, OutputDescriptor,
    SemanticExtractor,
};
use crate::scanner::read_script;

/// Everything learned about one discovered script.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptRecord {
    /// File name without directories.
    pub name: String,
    pub path: PathBuf,
    pub code: String,
    pub connections: ConnectionMap,
    pub inputs: Vec<InputDescriptor>,
    pub outputs: Vec<OutputDescriptor>,
    pub combinable_with: Vec<String>,
    /// Untyped `inputs`/`outputs` entries, embedded in the synthesis prompt.
    #[serde(skip)]
    pub raw_inputs: Vec<Value>,
    #[serde(skip)]
    pub raw_outputs: Vec<Value>,
    #[serde(skip)]
    pub extraction: ExtractionOutcome,
}

impl ScriptRecord {
    /// Read `path`, run the connection patterns and the semantic extractor,
    /// and assemble the record.
    ///
    /// Only an unreadable file is an error; undecodable bytes are dropped and
    /// extraction failures leave the inferred fields empty.
    pub fn build(path: &Path, extractor: &SemanticExtractor) -> Result<Self, ScanError> {
        let code = read_script(path)?;
        Ok(Self::from_code(path, code, extractor))
    }

    /// Assemble a record from already-read text.
    pub fn from_code(path: &Path, code: String, extractor: &SemanticExtractor) -> Self {
        let connections = extract_connections(&code);
        let (semantic, extraction) = extractor.extract(&code);
        Self {
            name: display_name(path),
            path: path.to_path_buf(),
            code,
            connections,
            inputs: semantic.inputs,
            outputs: semantic.outputs,
            combinable_with: semantic.combinable_with,
            raw_inputs: semantic.raw_inputs,
            raw_outputs: semantic.raw_outputs,
            extraction,
        }
    }
}

/// The final path component, lossily converted.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
