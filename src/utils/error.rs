use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContrastError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV report error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Report,
    Configuration,
    Validation,
}

impl ContrastError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContrastError::IoError(_) => ErrorCategory::Io,
            ContrastError::CsvError(_) | ContrastError::SerializationError(_) => {
                ErrorCategory::Report
            }
            ContrastError::ConfigError { .. }
            | ContrastError::MissingConfigError { .. }
            | ContrastError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ContrastError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ContrastError::IoError(e) => format!("Could not read or write a file: {}", e),
            ContrastError::CsvError(_) | ContrastError::SerializationError(_) => {
                "Failed to render the contrast report".to_string()
            }
            ContrastError::ConfigError { message } => format!("Palette file problem: {}", message),
            ContrastError::MissingConfigError { field } => {
                format!("Palette file is missing '{}'", field)
            }
            ContrastError::InvalidConfigValueError { field, value, .. } => {
                format!("'{}' is not a valid value for {}", value, field)
            }
            ContrastError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the path exists and is writable",
            ErrorCategory::Report => "Re-run with --verbose to see which pair broke the report",
            ErrorCategory::Configuration => {
                "Fix the palette TOML file; colors are written as #RRGGBB"
            }
            ErrorCategory::Validation => "Give every pair a unique, non-empty name",
        }
    }
}

pub type Result<T> = std::result::Result<T, ContrastError>;
