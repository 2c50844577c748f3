use crate::core::{ConfigProvider, OutputFormat};
use crate::domain::model::{ConversionMode, ErrorPolicy};
use crate::utils::error::{Result, RomanError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub job: JobConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub convert: ConvertConfig,
    pub load: LoadConfig,
    pub error_handling: Option<ErrorHandlingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub input: Option<String>,
    #[serde(default)]
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub mode: ConversionMode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<OutputFormat>,
    pub compression: Option<CompressionConfig>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    #[serde(default = "default_archive_name")]
    pub filename: String,
}

fn default_archive_name() -> String {
    "numerals.zip".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub csv: Option<String>,
    pub tsv: Option<String>,
    pub json: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorHandlingConfig {
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RomanError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RomanError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RomanError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("job.name", &self.job.name)?;

        if let Some(input) = &self.source.input {
            validation::validate_path("source.input", input)?;
            if !self.source.values.is_empty() {
                return Err(RomanError::InvalidConfigValueError {
                    field: "source.values".to_string(),
                    value: format!("{:?}", self.source.values),
                    reason: "Set either source.input or source.values, not both".to_string(),
                });
            }
        } else if self.source.values.is_empty() {
            return Err(RomanError::MissingConfigError {
                field: "source.input or source.values".to_string(),
            });
        }

        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_non_empty_list("load.output_formats", &self.load.output_formats)?;
        validation::validate_unique("load.output_formats", &self.load.output_formats)?;

        if let Some(compression) = self.load.compression.as_ref().filter(|c| c.enabled) {
            validation::validate_file_extensions(
                "load.compression.filename",
                std::slice::from_ref(&compression.filename),
                &["zip"],
            )?;
        }

        if let Some(filenames) = &self.load.filenames {
            for (field, name, extension) in [
                ("load.filenames.csv", &filenames.csv, "csv"),
                ("load.filenames.tsv", &filenames.tsv, "tsv"),
                ("load.filenames.json", &filenames.json, "json"),
            ] {
                if let Some(name) = name {
                    validation::validate_file_extensions(
                        field,
                        std::slice::from_ref(name),
                        &[extension],
                    )?;
                }
            }
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn job_name(&self) -> &str {
        &self.job.name
    }

    fn input_path(&self) -> Option<&str> {
        self.source.input.as_deref()
    }

    fn inline_values(&self) -> &[i64] {
        &self.source.values
    }

    fn mode(&self) -> ConversionMode {
        self.convert.mode
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.load.output_formats
    }

    fn error_policy(&self) -> ErrorPolicy {
        self.error_handling
            .as_ref()
            .map(|eh| eh.on_error)
            .unwrap_or_default()
    }

    fn archive_name(&self) -> Option<&str> {
        self.load
            .compression
            .as_ref()
            .filter(|c| c.enabled)
            .map(|c| c.filename.as_str())
    }

    fn output_filename(&self, format: OutputFormat) -> String {
        let custom = self.load.filenames.as_ref().and_then(|f| match format {
            OutputFormat::Csv => f.csv.clone(),
            OutputFormat::Tsv => f.tsv.clone(),
            OutputFormat::Json => f.json.clone(),
        });
        custom.unwrap_or_else(|| format.default_filename().to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
