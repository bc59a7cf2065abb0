use thiserror::Error;

#[derive(Error, Debug)]
pub enum PruneError {
    #[error("YAML parse error in document {document}: {message}")]
    ParseError { document: usize, message: String },

    #[error("YAML serialization error: {0}")]
    SerializationError(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    ReportError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Lookup path is empty")]
    EmptyPath,

    #[error("Value at '{path}' is not a mapping")]
    NotAMapping { path: String },

    #[error("Key '{path}' not found")]
    KeyNotFound { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Lookup,
    Configuration,
    Processing,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PruneError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PruneError::ParseError { .. } | PruneError::SerializationError(_) => {
                ErrorCategory::Parse
            }
            PruneError::EmptyPath
            | PruneError::NotAMapping { .. }
            | PruneError::KeyNotFound { .. } => ErrorCategory::Lookup,
            PruneError::ConfigError { .. }
            | PruneError::ConfigValidationError { .. }
            | PruneError::MissingConfigError { .. }
            | PruneError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PruneError::ProcessingError { .. } | PruneError::ReportError(_) => {
                ErrorCategory::Processing
            }
            PruneError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 查找失敗只代表指令不適用
            ErrorCategory::Lookup => ErrorSeverity::Low,
            ErrorCategory::Processing => ErrorSeverity::Medium,
            ErrorCategory::Parse | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PruneError::ParseError { .. } => {
                "Check that the manifest is valid YAML and documents are separated by '---'"
            }
            PruneError::SerializationError(_) | PruneError::ReportError(_) => {
                "The manifest contains values that cannot be re-serialized; inspect the input"
            }
            PruneError::IoError(_) => "Verify the input file exists and the output directory is writable",
            PruneError::ConfigError { .. } | PruneError::ConfigValidationError { .. } => {
                "Check the directive file syntax against the documented TOML layout"
            }
            PruneError::MissingConfigError { .. } => {
                "Provide directives with --config or --keys"
            }
            PruneError::InvalidConfigValueError { .. } => {
                "Fix the reported field and run again"
            }
            PruneError::ProcessingError { .. } => "Make sure the manifest is UTF-8 text",
            PruneError::EmptyPath | PruneError::NotAMapping { .. } | PruneError::KeyNotFound { .. } => {
                "The directive does not apply to this document; no action needed"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PruneError::ParseError { document, .. } => {
                format!("Manifest document #{} is not valid YAML", document + 1)
            }
            PruneError::IoError(e) => format!("File access failed: {}", e),
            PruneError::MissingConfigError { field } => {
                format!("No removal directives were given ({})", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PruneError>;
