use thiserror::Error;

#[derive(Error, Debug)]
pub enum RomanError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Line {line}: cannot parse '{input}': {reason}")]
    ParseError {
        line: usize,
        input: String,
        reason: String,
    },

    #[error("{}", describe_range(*value, *min, *max))]
    OutOfRange { value: i64, min: i64, max: i64 },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

// Legacy mode has no lower bound, so only its ceiling is worth printing.
fn describe_range(value: i64, min: i64, max: i64) -> String {
    if min == i64::MIN {
        format!("{} is above the supported maximum {}", value, max)
    } else {
        format!("{} is outside the supported range {}..={}", value, min, max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
    Input,
    Conversion,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RomanError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RomanError::IoError(_) => ErrorCategory::Io,
            RomanError::ConfigError { .. }
            | RomanError::ConfigValidationError { .. }
            | RomanError::InvalidConfigValueError { .. }
            | RomanError::MissingConfigError { .. } => ErrorCategory::Configuration,
            RomanError::ParseError { .. } => ErrorCategory::Input,
            RomanError::OutOfRange { .. } | RomanError::ProcessingError { .. } => {
                ErrorCategory::Conversion
            }
            RomanError::ZipError(_)
            | RomanError::CsvError(_)
            | RomanError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 單筆資料錯誤，修正輸入後重跑即可
            ErrorCategory::Input | ErrorCategory::Conversion => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for a batch that stopped on this error.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// Log the error, print the user-facing message and hint, then exit
    /// with [`RomanError::exit_code`] unless the severity is `Low`.
    pub fn report_and_exit(&self) {
        tracing::error!(
            "❌ Batch failed: {} (Category: {:?}, Severity: {:?})",
            self,
            self.category(),
            self.severity()
        );
        eprintln!("❌ {}", self.user_friendly_message());
        eprintln!("💡 {}", self.recovery_suggestion());

        let exit_code = self.exit_code();
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RomanError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            RomanError::ConfigError { .. } | RomanError::ConfigValidationError { .. } => {
                "Review the configuration file syntax and field names".to_string()
            }
            RomanError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and try again", field)
            }
            RomanError::MissingConfigError { field } => {
                format!("Provide a value for '{}'", field)
            }
            RomanError::ParseError { line, .. } => {
                format!("Make line {} a plain integer, or run with --on-error skip", line)
            }
            RomanError::OutOfRange { .. } => {
                "Use --mode standard for values up to 3999, or --on-error skip to keep going"
                    .to_string()
            }
            RomanError::ProcessingError { .. } => {
                "Re-run with --verbose to see which record failed".to_string()
            }
            RomanError::ZipError(_)
            | RomanError::CsvError(_)
            | RomanError::SerializationError(_) => {
                "Check free disk space and permissions on the output path".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RomanError::OutOfRange { value, min, max } if *min == i64::MIN => {
                format!("Cannot convert {}: only values up to {} are supported", value, max)
            }
            RomanError::OutOfRange { value, min, max } => {
                format!("Cannot convert {}: only {} to {} is supported", value, min, max)
            }
            RomanError::ParseError { line, input, .. } => {
                format!("Line {} ('{}') is not a whole number", line, input)
            }
            RomanError::MissingConfigError { field } => {
                format!("Nothing to do: '{}' is missing", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RomanError>;
