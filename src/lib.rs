pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    converter::{convert, NumeralConverter},
    engine::{BatchEngine, BatchReport},
    pipeline::BatchPipeline,
};
pub use domain::model::{ConversionMode, ErrorPolicy, OutputFormat};
pub use utils::error::{Result, RomanError};
