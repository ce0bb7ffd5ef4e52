//! The persisted aggregate of one run.

use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use unisql_core::errors::ReportError;

use crate::combination::CombinationCandidate;

/// Top-level result of a run and the only structure written to disk.
///
/// Serializes to exactly `{"scripts", "combinations", "unified_sql"}`.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct AnalysisReport {
    /// Number of scripts analyzed.
    pub scripts: usize,
    pub combinations: Vec<CombinationCandidate>,
    pub unified_sql: UnifiedSql,
}

/// Table name to synthesized SQL (or placeholder), in combination order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnifiedSql(Vec<(String, String)>);

impl UnifiedSql {
    /// Store `sql` for `table`, replacing any previous entry for it.
    pub fn insert(&mut self, table: String, sql: String) {
        match self.0.iter_mut().find(|(t, _)| *t == table) {
            Some(entry) => entry.1 = sql,
            None => self.0.push((table, sql)),
        }
    }

    pub fn get(&self, table: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(t, _)| t == table)
            .map(|(_, sql)| sql.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(t, s)| (t.as_str(), s.as_str()))
    }
}

impl Serialize for UnifiedSql {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (table, sql) in &self.0 {
            map.serialize_entry(table, sql)?;
        }
        map.end()
    }
}

impl AnalysisReport {
    /// Render as indented JSON. Non-ASCII characters are written as-is.
    pub fn to_json_pretty(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report to `path`, replacing any previous content.
    pub fn save(&self, path: &Path) -> Result<(), ReportError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}
