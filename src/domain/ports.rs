use crate::domain::model::{
    ConversionMode, ErrorPolicy, NumeralRecord, OutputFormat, TransformResult,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn job_name(&self) -> &str;
    fn input_path(&self) -> Option<&str>;
    fn inline_values(&self) -> &[i64];
    fn mode(&self) -> ConversionMode;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];
    fn error_policy(&self) -> ErrorPolicy;

    /// ZIP archive name when outputs should be bundled, `None` to write plain files.
    fn archive_name(&self) -> Option<&str> {
        None
    }

    fn output_filename(&self, format: OutputFormat) -> String {
        format.default_filename().to_string()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<NumeralRecord>>;
    async fn transform(&self, data: Vec<NumeralRecord>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<Vec<String>>;
}
