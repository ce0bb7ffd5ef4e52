//! Configuration system for unisql.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod model_config;
pub mod output_config;
pub mod scan_config;
pub mod unisql_config;

pub use analysis_config::AnalysisConfig;
pub use model_config::ModelConfig;
pub use output_config::OutputConfig;
pub use scan_config::ScanConfig;
pub use unisql_config::{CliOverrides, UnisqlConfig};
