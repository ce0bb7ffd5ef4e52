//! Grouping of scripts by declared output table.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::pipeline::record::ScriptRecord;

/// A table written by two or more scripts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinationCandidate {
    pub table: String,
    /// Display names of the contributing scripts, in first-seen order.
    pub scripts: Vec<String>,
}

/// Group `records` by output destination and keep tables touched by at least
/// two scripts.
///
/// Destinations are compared by exact text, case-sensitive, with no
/// normalization. Empty destinations are ignored. A script counts once per
/// table even if it declares the same destination more than once. Candidates
/// are ordered by the first time their table was seen.
pub fn find_combinations(records: &[ScriptRecord]) -> Vec<CombinationCandidate> {
    // table -> (record indices, in first-seen order)
    let mut index: FxHashMap<&str, usize> = FxHashMap::default();
    let mut groups: Vec<(&str, Vec<usize>)> = Vec::new();

    for (record_idx, record) in records.iter().enumerate() {
        for output in &record.outputs {
            let table = output.destination.as_str();
            if table.is_empty() {
                continue;
            }
            let slot = *index.entry(table).or_insert_with(|| {
                groups.push((table, Vec::new()));
                groups.len() - 1
            });
            let members = &mut groups[slot].1;
            if members.last() != Some(&record_idx) {
                members.push(record_idx);
            }
        }
    }

    groups
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .map(|(table, members)| CombinationCandidate {
            table: table.to_string(),
            scripts: members
                .into_iter()
                .map(|i| records[i].name.clone())
                .collect(),
        })
        .collect()
}
