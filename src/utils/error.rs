use thiserror::Error;

#[derive(Error, Debug)]
pub enum DateError {
    #[error("Invalid day offset: {days}")]
    InvalidDayOffset { days: f64 },

    #[error("Invalid UTC offset '{value}': expected a value like +12:00 or -05:30")]
    InvalidUtcOffset { value: String },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Template error: {0}")]
    TemplateError(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Template,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DateError::InvalidDayOffset { .. }
            | DateError::InvalidUtcOffset { .. }
            | DateError::InvalidTimestamp { .. } => ErrorCategory::Input,
            DateError::TemplateError(_) => ErrorCategory::Template,
            DateError::IoError(_) | DateError::SerializationError(_) => ErrorCategory::System,
            DateError::ConfigValidationError { .. }
            | DateError::InvalidConfigValueError { .. }
            | DateError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Template => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DateError::InvalidDayOffset { .. } => {
                "Use a finite number of days within a few thousand years of today"
            }
            DateError::InvalidUtcOffset { .. } => "Write offsets as ±hh:mm, for example +12:00",
            DateError::InvalidTimestamp { .. } => {
                "Write timestamps in RFC 3339 form, for example 2017-07-29T16:01:02+12:00"
            }
            DateError::TemplateError(_) => "Check the placeholder pattern used by the template",
            DateError::IoError(_) => "Check that the file exists and is readable/writable",
            DateError::SerializationError(_) => "Retry with --json disabled",
            DateError::ConfigValidationError { .. }
            | DateError::InvalidConfigValueError { .. }
            | DateError::MissingConfigError { .. } => {
                "Fix the configuration file or command line flags and try again"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DateError::IoError(e) => format!("Could not access a file: {}", e),
            DateError::MissingConfigError { field } => {
                format!("Setting '{}' is required but was not provided", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DateError>;
