//! Core types, traits, errors, config, events, and tracing shared by the
//! unisql analysis pipeline and its CLI.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
