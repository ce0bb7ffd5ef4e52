//! Combination subsystem: grouping scripts by output table and synthesizing
//! one unified SQL statement per group.

pub mod finder;
pub mod synthesizer;

pub use finder::{find_combinations, CombinationCandidate};
pub use synthesizer::{fallback_sql, SqlSynthesizer, SynthesisOutcome, SynthesizedSql};
