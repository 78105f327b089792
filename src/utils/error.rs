use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoxError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParseError(#[from] toml::de::Error),

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

    #[error("Volume of {width} x {length} x {height} does not fit in a 32-bit integer")]
    VolumeOverflowError { width: i32, length: i32, height: i32 },

    #[error("Total volume overflowed after {entries} boxes")]
    TotalOverflowError { entries: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Arithmetic,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BoxError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BoxError::TomlParseError(_)
            | BoxError::ConfigError { .. }
            | BoxError::MissingConfigError { .. }
            | BoxError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BoxError::VolumeOverflowError { .. } | BoxError::TotalOverflowError { .. } => {
                ErrorCategory::Arithmetic
            }
            BoxError::IoError(_) | BoxError::CsvError(_) | BoxError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BoxError::VolumeOverflowError { .. } | BoxError::TotalOverflowError { .. } => {
                ErrorSeverity::Medium
            }
            BoxError::TomlParseError(_)
            | BoxError::ConfigError { .. }
            | BoxError::MissingConfigError { .. }
            | BoxError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            BoxError::IoError(_) | BoxError::CsvError(_) | BoxError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BoxError::IoError(_) => "Check that the file exists and is readable".to_string(),
            BoxError::CsvError(_) | BoxError::SerializationError(_) => {
                "Try a different --format".to_string()
            }
            BoxError::TomlParseError(_) => {
                "Make sure the config file is valid TOML".to_string()
            }
            BoxError::ConfigError { .. } => "Review the configuration file".to_string(),
            BoxError::MissingConfigError { field } => {
                format!("Add the '{}' field to the configuration", field)
            }
            BoxError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            BoxError::VolumeOverflowError { .. } => {
                "Use smaller dimensions or run with --overflow wrap|saturate".to_string()
            }
            BoxError::TotalOverflowError { .. } => {
                "Split the boxes across several runs".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Arithmetic => format!("Cannot compute volume: {}", self),
            ErrorCategory::Output => format!("Failed to produce output: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoxError>;
