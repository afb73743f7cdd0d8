use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unsupported manifest format: {path} (expected .toml or .json)")]
    UnsupportedManifestFormat { path: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Parsing,
    Configuration,
    Output,
}

impl AnalyzerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AnalyzerError::IoError(_) => ErrorCategory::Io,
            AnalyzerError::SerializationError(_) | AnalyzerError::TomlError(_) => {
                ErrorCategory::Parsing
            }
            AnalyzerError::CsvError(_) => ErrorCategory::Output,
            AnalyzerError::InvalidPattern { .. }
            | AnalyzerError::InvalidConfigValueError { .. }
            | AnalyzerError::MissingConfigError { .. }
            | AnalyzerError::UnsupportedManifestFormat { .. } => ErrorCategory::Configuration,
        }
    }

    /// 給使用者的修復建議
    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Io => "Check that the manifest and settings paths exist and are readable",
            ErrorCategory::Parsing => {
                "Check the manifest syntax; each entry needs at least a service_type"
            }
            ErrorCategory::Configuration => "Run with --help to review the accepted options",
            ErrorCategory::Output => "Check that standard output is writable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            AnalyzerError::IoError(e) => format!("Could not read input: {}", e),
            AnalyzerError::SerializationError(e) => format!("Manifest is not valid JSON: {}", e),
            AnalyzerError::TomlError(e) => format!("File is not valid TOML: {}", e),
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Configuration => 2,
            ErrorCategory::Io | ErrorCategory::Parsing | ErrorCategory::Output => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
