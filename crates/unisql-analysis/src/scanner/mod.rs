//! Scanner subsystem: recursive script discovery and permissive file reading.

pub mod decode;
pub mod walker;

pub use decode::{decode_permissive, read_script};
pub use walker::{discover_scripts, Discovery};
