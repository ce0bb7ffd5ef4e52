//! Capability traits injected into the analysis pipeline.

pub mod text_generator;

pub use text_generator::TextGenerator;
