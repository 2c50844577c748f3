pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::args::CliConfig;

#[cfg(feature = "cli")]
mod args {
    use crate::core::{ConfigProvider, OutputFormat};
    use crate::domain::model::{ConversionMode, ErrorPolicy};
    use crate::utils::error::{Result, RomanError};
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "roman-batch")]
    #[command(about = "Convert integers to Roman numerals, one-off or in batches")]
    pub struct CliConfig {
        /// Values to convert
        #[arg(allow_negative_numbers = true)]
        pub numbers: Vec<i64>,

        /// Read values from a file (one per line) and write batch outputs
        #[arg(long)]
        pub input: Option<String>,

        #[arg(long, default_value = "./output")]
        pub output_path: String,

        #[arg(long, value_enum, default_value_t = ConversionMode::Strict)]
        pub mode: ConversionMode,

        #[arg(long, value_enum, value_delimiter = ',', default_value = "csv")]
        pub formats: Vec<OutputFormat>,

        /// Bundle batch outputs into numerals.zip
        #[arg(long)]
        pub zip: bool,

        #[arg(long, value_enum, default_value_t = ErrorPolicy::Skip)]
        pub on_error: ErrorPolicy,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        /// True when results go to stdout instead of output files.
        pub fn is_interactive(&self) -> bool {
            self.input.is_none()
        }
    }

    impl ConfigProvider for CliConfig {
        fn job_name(&self) -> &str {
            "cli"
        }

        fn input_path(&self) -> Option<&str> {
            self.input.as_deref()
        }

        fn inline_values(&self) -> &[i64] {
            &self.numbers
        }

        fn mode(&self) -> ConversionMode {
            self.mode
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[OutputFormat] {
            &self.formats
        }

        fn error_policy(&self) -> ErrorPolicy {
            self.on_error
        }

        fn archive_name(&self) -> Option<&str> {
            self.zip.then_some("numerals.zip")
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            match &self.input {
                Some(input) => {
                    validation::validate_path("input", input)?;
                    validation::validate_path("output_path", &self.output_path)?;
                    validation::validate_non_empty_list("formats", &self.formats)?;
                    validation::validate_unique("formats", &self.formats)?;
                    if !self.numbers.is_empty() {
                        return Err(RomanError::InvalidConfigValueError {
                            field: "numbers".to_string(),
                            value: format!("{:?}", self.numbers),
                            reason: "Positional values cannot be combined with --input"
                                .to_string(),
                        });
                    }
                }
                None if self.numbers.is_empty() => {
                    return Err(RomanError::MissingConfigError {
                        field: "numbers or --input".to_string(),
                    });
                }
                None => {}
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_positional_values_with_negatives() {
            let config = CliConfig::parse_from(["roman-batch", "4", "-3", "9"]);
            assert_eq!(config.numbers, vec![4, -3, 9]);
            assert_eq!(config.mode, ConversionMode::Strict);
            assert!(config.is_interactive());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_parse_batch_flags() {
            let config = CliConfig::parse_from([
                "roman-batch",
                "--input",
                "numbers.txt",
                "--mode",
                "standard",
                "--formats",
                "csv,json",
                "--zip",
                "--on-error",
                "fail",
            ]);
            assert_eq!(config.input_path(), Some("numbers.txt"));
            assert_eq!(config.mode(), ConversionMode::Standard);
            assert_eq!(
                config.output_formats(),
                &[OutputFormat::Csv, OutputFormat::Json]
            );
            assert_eq!(config.archive_name(), Some("numerals.zip"));
            assert_eq!(config.error_policy(), ErrorPolicy::Fail);
            assert!(!config.is_interactive());
        }

        #[test]
        fn test_validate_rejects_duplicate_formats() {
            let config = CliConfig::parse_from([
                "roman-batch",
                "--input",
                "numbers.txt",
                "--formats",
                "csv,csv",
                "--zip",
            ]);
            assert!(matches!(
                config.validate(),
                Err(RomanError::InvalidConfigValueError { ref field, .. }) if field == "formats"
            ));
        }

        #[test]
        fn test_validate_rejects_values_with_input() {
            let config = CliConfig::parse_from(["roman-batch", "5", "--input", "f.txt"]);
            assert!(matches!(
                config.validate(),
                Err(RomanError::InvalidConfigValueError { ref field, .. }) if field == "numbers"
            ));
        }

        #[test]
        fn test_validate_requires_some_input() {
            let config = CliConfig::parse_from(["roman-batch"]);
            assert!(matches!(
                config.validate(),
                Err(RomanError::MissingConfigError { .. })
            ));
        }
    }
}
