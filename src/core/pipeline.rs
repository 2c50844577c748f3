use crate::core::converter::NumeralConverter;
use crate::core::{
    BatchSummary, ConfigProvider, NumeralRecord, OutputFormat, Pipeline, Storage, TransformResult,
};
use crate::domain::model::ErrorPolicy;
use crate::utils::error::{Result, RomanError};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

const HEADER: [&str; 4] = ["line", "input", "numeral", "error"];

pub struct BatchPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    converter: NumeralConverter,
}

impl<S: Storage, C: ConfigProvider> BatchPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let converter = NumeralConverter::new(config.mode());
        Self {
            storage,
            config,
            converter,
        }
    }

    fn output_location(&self, filename: &str) -> String {
        format!(
            "{}/{}",
            self.config.output_path().trim_end_matches('/'),
            filename
        )
    }
}

/// Parse input text: one integer per line, blank lines and `#` comments ignored.
pub fn parse_lines(content: &str) -> Vec<NumeralRecord> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                return None;
            }
            let line = index + 1;
            Some(match trimmed.parse::<i64>() {
                Ok(value) => NumeralRecord::parsed(line, trimmed, value),
                Err(e) => NumeralRecord::unparsed(line, trimmed, e.to_string()),
            })
        })
        .collect()
}

fn render_table(records: &[NumeralRecord], delimiter: u8) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in records {
        let line = record.line.to_string();
        writer.write_record([
            line.as_str(),
            record.input.as_str(),
            record.numeral.as_deref().unwrap_or(""),
            record.error.as_deref().unwrap_or(""),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| RomanError::ProcessingError {
            message: format!("Failed to flush table writer: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| RomanError::ProcessingError {
        message: format!("Table output is not UTF-8: {}", e),
    })
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for BatchPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<NumeralRecord>> {
        let records = if let Some(input) = self.config.input_path() {
            tracing::debug!("Reading values from: {}", input);
            let data = self.storage.read_file(input).await?;
            let content = String::from_utf8(data).map_err(|e| RomanError::ParseError {
                line: 0,
                input: input.to_string(),
                reason: format!("Input file is not UTF-8: {}", e),
            })?;
            parse_lines(&content)
        } else if !self.config.inline_values().is_empty() {
            self.config
                .inline_values()
                .iter()
                .enumerate()
                .map(|(index, value)| NumeralRecord::parsed(index + 1, value.to_string(), *value))
                .collect()
        } else {
            return Err(RomanError::MissingConfigError {
                field: "source.input or source.values".to_string(),
            });
        };

        tracing::info!("📊 Extracted {} values", records.len());
        Ok(records)
    }

    async fn transform(&self, data: Vec<NumeralRecord>) -> Result<TransformResult> {
        tracing::info!(
            "🔧 Converting {} values in {} mode",
            data.len(),
            self.converter.mode()
        );
        let policy = self.config.error_policy();
        let mut records = Vec::with_capacity(data.len());

        for mut record in data {
            match record.value {
                Some(value) => match self.converter.convert(value) {
                    Ok(numeral) => {
                        tracing::debug!("{} -> {}", value, numeral);
                        record.numeral = Some(numeral);
                    }
                    Err(e) => {
                        if policy == ErrorPolicy::Fail {
                            return Err(e);
                        }
                        tracing::warn!("Line {}: {}", record.line, e);
                        record.error = Some(e.to_string());
                    }
                },
                None => {
                    if policy == ErrorPolicy::Fail {
                        return Err(RomanError::ParseError {
                            line: record.line,
                            input: record.input.clone(),
                            reason: record.error.clone().unwrap_or_default(),
                        });
                    }
                    tracing::warn!("Line {}: skipping '{}'", record.line, record.input);
                }
            }
            records.push(record);
        }

        let converted = records.iter().filter(|r| r.is_converted()).count();
        let summary = BatchSummary {
            job: self.config.job_name().to_string(),
            mode: self.converter.mode(),
            total: records.len(),
            converted,
            failed: records.len() - converted,
            generated_at: chrono::Utc::now(),
        };

        tracing::info!(
            "✅ Transform complete: {} converted, {} failed",
            summary.converted,
            summary.failed
        );
        Ok(TransformResult {
            csv_output: render_table(&records, b',')?,
            tsv_output: render_table(&records, b'\t')?,
            records,
            summary,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<Vec<String>> {
        let mut files: Vec<(String, Vec<u8>)> = Vec::new();
        for format in self.config.output_formats() {
            let body = match format {
                OutputFormat::Csv => result.csv_output.clone().into_bytes(),
                OutputFormat::Tsv => result.tsv_output.clone().into_bytes(),
                OutputFormat::Json => serde_json::to_vec_pretty(&serde_json::json!({
                    "summary": result.summary,
                    "records": result.records,
                }))?,
            };
            files.push((self.config.output_filename(*format), body));
        }

        if let Some(archive) = self.config.archive_name() {
            tracing::debug!("Creating ZIP file with {} files", files.len());

            let zip_data = {
                let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
                for (name, body) in &files {
                    zip.start_file::<_, ()>(name.as_str(), FileOptions::default())?;
                    zip.write_all(body)?;
                }
                let cursor = zip.finish()?;
                cursor.into_inner()
            };

            let location = self.output_location(archive);
            tracing::debug!("Writing ZIP file ({} bytes) to {}", zip_data.len(), location);
            self.storage.write_file(&location, &zip_data).await?;
            tracing::info!("📦 Output saved: {}", location);
            return Ok(vec![location]);
        }

        let mut written = Vec::with_capacity(files.len());
        for (name, body) in files {
            let location = self.output_location(&name);
            self.storage.write_file(&location, &body).await?;
            tracing::info!("💾 Output saved: {}", location);
            written.push(location);
        }
        Ok(written)
    }
}
