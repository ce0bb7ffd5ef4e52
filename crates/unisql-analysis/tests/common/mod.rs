//! Shared test helpers: deterministic text generators and fixture trees.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use unisql_core::errors::GenerationError;
use unisql_core::traits::TextGenerator;

/// Returns the same text for every prompt.
pub struct FixedGenerator(pub String);

impl FixedGenerator {
    pub fn new(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl TextGenerator for FixedGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

/// Fails every call, as an unreachable service would.
pub struct FailingGenerator;

impl TextGenerator for FailingGenerator {
    fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Http {
            reason: "connection refused".into(),
        })
    }

    fn name(&self) -> &str {
        "failing"
    }
}

/// Answers extraction prompts and synthesis prompts with separate closures
/// and records every prompt it receives.
pub struct ScriptedGenerator<E, S> {
    extract: E,
    synthesize: S,
    pub prompts: Mutex<Vec<String>>,
}

impl<E, S> ScriptedGenerator<E, S>
where
    E: Fn(&str) -> Result<String, GenerationError> + Send + Sync,
    S: Fn(&str) -> Result<String, GenerationError> + Send + Sync,
{
    pub fn new(extract: E, synthesize: S) -> Self {
        Self {
            extract,
            synthesize,
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl<E, S> TextGenerator for ScriptedGenerator<E, S>
where
    E: Fn(&str) -> Result<String, GenerationError> + Send + Sync,
    S: Fn(&str) -> Result<String, GenerationError> + Send + Sync,
{
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if prompt.contains("```python") {
            (self.extract)(prompt)
        } else {
            (self.synthesize)(prompt)
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// JSON extraction answer declaring a single output table.
pub fn writes_to(table: &str) -> String {
    format!(
        "```json\n{{\"inputs\": [], \"outputs\": [{{\"destination\": \"{table}\", \"operation\": \"INSERT\"}}], \"combinable_with\": []}}\n```"
    )
}

/// Write `files` (relative path, content) under `root`, creating directories.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) -> Vec<PathBuf> {
    files
        .iter()
        .map(|(rel, content)| {
            let path = root.join(rel);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).unwrap();
            }
            std::fs::write(&path, content).unwrap();
            path
        })
        .collect()
}
