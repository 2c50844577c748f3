use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 轉換模式：決定超出 1..=10 的輸入如何處理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ConversionMode {
    /// Reference routine, 1..=10 only; anything else is an error.
    #[default]
    Strict,
    /// Reference routine with its out-of-range output reproduced as-is.
    Legacy,
    /// Table-driven subtractive notation, 1..=3999.
    Standard,
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConversionMode::Strict => "strict",
            ConversionMode::Legacy => "legacy",
            ConversionMode::Standard => "standard",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn default_filename(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "numerals.csv",
            OutputFormat::Tsv => "numerals.tsv",
            OutputFormat::Json => "numerals.json",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Keep failed rows in the output with their error message.
    #[default]
    Skip,
    /// Abort the batch on the first failed row.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumeralRecord {
    pub line: usize,
    pub input: String,
    pub value: Option<i64>,
    pub numeral: Option<String>,
    pub error: Option<String>,
}

impl NumeralRecord {
    pub fn parsed(line: usize, input: impl Into<String>, value: i64) -> Self {
        Self {
            line,
            input: input.into(),
            value: Some(value),
            numeral: None,
            error: None,
        }
    }

    pub fn unparsed(line: usize, input: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            line,
            input: input.into(),
            value: None,
            numeral: None,
            error: Some(error.into()),
        }
    }

    pub fn is_converted(&self) -> bool {
        self.numeral.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchSummary {
    pub job: String,
    pub mode: ConversionMode,
    pub total: usize,
    pub converted: usize,
    pub failed: usize,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<NumeralRecord>,
    pub csv_output: String,
    pub tsv_output: String,
    pub summary: BatchSummary,
}
