use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Invalid JSON: {message}")]
    MalformedInput { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

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
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl DirectoryError {
    /// JSON 解析失敗時使用，保留 serde_json 的行列資訊
    pub fn malformed(err: &serde_json::Error) -> Self {
        DirectoryError::MalformedInput {
            message: err.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            DirectoryError::MalformedInput { .. } => ErrorCategory::Input,
            DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. }
            | DirectoryError::MissingConfigError { .. } => ErrorCategory::Configuration,
            DirectoryError::IoError(_)
            | DirectoryError::CsvError(_)
            | DirectoryError::SerializationError(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DirectoryError::MalformedInput { message } => {
                format!("The input is not valid JSON: {}", message)
            }
            DirectoryError::IoError(e) => format!("Could not read or write a file: {}", e),
            DirectoryError::MissingConfigError { field } => {
                format!("Required setting '{}' was not provided", field)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DirectoryError::MalformedInput { .. } => {
                "Check the payload for trailing commas, unquoted keys or truncated content"
            }
            DirectoryError::IoError(_) => {
                "Make sure the input file exists and the output directory is writable"
            }
            DirectoryError::CsvError(_) | DirectoryError::SerializationError(_) => {
                "Retry without --table / --pretty-json to isolate the failing output"
            }
            DirectoryError::MissingConfigError { .. } => {
                "Pass --input <PATH> or set [input].path in the config file"
            }
            DirectoryError::ConfigValidationError { .. }
            | DirectoryError::InvalidConfigValueError { .. } => {
                "Review the command line flags and the TOML config file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
