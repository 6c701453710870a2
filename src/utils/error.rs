use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("Network request failed: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Maps lookup for '{query}' failed: missing field '{field}'")]
    LookupError { query: String, field: String },

    #[error("No encyclopedia article found for '{query}'")]
    NotFoundError { query: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration value: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid configuration value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::NetworkError(_) => ErrorCategory::Network,
            EtlError::LookupError { .. } | EtlError::NotFoundError { .. } => ErrorCategory::Data,
            EtlError::SerializationError(_) | EtlError::IoError(_) => ErrorCategory::Output,
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// Medium 代表重跑可能成功，Critical 代表需要修正設定
    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Output => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::NetworkError(e) if e.is_timeout() => {
                "The remote service timed out; raise --timeout-seconds or retry later".to_string()
            }
            EtlError::NetworkError(e) if e.is_status() => {
                "Check the API credentials and the service quota".to_string()
            }
            EtlError::NetworkError(_) => "Check network connectivity and retry".to_string(),
            EtlError::LookupError { query, .. } => format!(
                "Refine the search term '{}' so the maps service returns a complete place",
                query
            ),
            EtlError::NotFoundError { query } => {
                format!("Use a search term closer to the article title than '{}'", query)
            }
            EtlError::SerializationError(_) | EtlError::IoError(_) => {
                "Make sure the output directory is writable".to_string()
            }
            EtlError::ConfigError { .. }
            | EtlError::MissingConfigError { .. }
            | EtlError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or the SERPAPI_API_KEY, GEONAMES_USERNAME and WIKIMEDIA_ACCESS_TOKEN variables".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach a remote service: {}", self),
            ErrorCategory::Data => format!("A landmark could not be resolved: {}", self),
            ErrorCategory::Output => format!("Could not write the results: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
