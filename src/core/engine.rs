use crate::core::{BatchSummary, Pipeline, TransformResult};
use crate::utils::error::Result;

/// Outcome of one batch run.
#[derive(Debug, Clone)]
pub struct BatchReport {
    pub summary: BatchSummary,
    pub outputs: Vec<String>,
}

pub struct BatchEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> BatchEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract and transform without loading; nothing is written.
    pub async fn preview(&self) -> Result<TransformResult> {
        tracing::debug!("Previewing batch conversion...");
        let raw_data = self.pipeline.extract().await?;
        self.pipeline.transform(raw_data).await
    }

    pub async fn run(&self) -> Result<BatchReport> {
        tracing::info!("Starting batch conversion...");

        // Extract
        tracing::debug!("Extracting values...");
        let raw_data = self.pipeline.extract().await?;

        // Transform
        tracing::debug!("Converting values...");
        let transformed = self.pipeline.transform(raw_data).await?;
        let summary = transformed.summary.clone();

        // Load
        tracing::debug!("Writing outputs...");
        let outputs = self.pipeline.load(transformed).await?;
        tracing::info!(
            "Batch '{}' finished: {}/{} converted, {} output file(s)",
            summary.job,
            summary.converted,
            summary.total,
            outputs.len()
        );

        Ok(BatchReport { summary, outputs })
    }
}
