//! Extraction subsystem: static connection patterns and model-assisted
//! inference of each script's data inputs and outputs.

pub mod connections;
pub mod fenced;
pub mod prompts;
pub mod semantic;
pub mod types;

pub use connections::{extract_connections, ConnectionMap, Dialect};
pub use fenced::{extract_fenced, Fence};
pub use semantic::SemanticExtractor;
pub use types::{ExtractionOutcome, InputDescriptor, OutputDescriptor, SemanticExtraction};
