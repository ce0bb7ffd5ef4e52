//! Analysis pipeline for unisql.
//!
//! Discovers scripts under a root directory, extracts their database
//! connections with fixed patterns, asks a text generation service for each
//! script's inputs and outputs, groups scripts writing to the same table, and
//! asks the service for one unified SQL statement per group.

pub mod combination;
pub mod extraction;
pub mod pipeline;
pub mod providers;
pub mod scanner;

pub use pipeline::{AnalysisReport, ScriptAnalyzer, ScriptRecord};
