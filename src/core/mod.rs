pub mod converter;
pub mod engine;
pub mod pipeline;

pub use crate::domain::model::{BatchSummary, NumeralRecord, OutputFormat, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
