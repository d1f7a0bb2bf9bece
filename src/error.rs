use std::fmt;

/// Custom error type for TikHub operations
#[derive(Debug)]
pub enum TikHubError {
    /// HTTP request failed before a response was received
    Http(reqwest::Error),
    /// API returned a non-success response
    Api {
        status: u16,
        method: String,
        path: String,
        message: String,
    },
    /// A required item parameter is missing or malformed
    Validation(String),
    /// No operation with this name exists for the resource
    UnknownOperation { resource: String, operation: String },
    /// API key not found in any source
    ApiKeyNotFound(String),
    /// Interactive API key prompt failed or was refused
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Failed to read or parse item input
    Input(String),
}

impl fmt::Display for TikHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TikHubError::Http(e) => write!(f, "TikHub API request failed: {}", e),
            TikHubError::Api {
                status,
                method,
                path,
                message,
            } => write!(
                f,
                "TikHub API Error: {} (status {}, endpoint: {} {})",
                message, status, method, path
            ),
            TikHubError::Validation(msg) => write!(f, "Invalid parameters: {}", msg),
            TikHubError::UnknownOperation {
                resource,
                operation,
            } => write!(
                f,
                "Unknown operation '{}' for resource '{}' (see 'tikhubctl ops {}')",
                operation, resource, resource
            ),
            TikHubError::ApiKeyNotFound(msg) => write!(f, "{}", msg),
            TikHubError::Credentials(msg) => write!(f, "{}", msg),
            TikHubError::Json(msg) => write!(f, "JSON error: {}", msg),
            TikHubError::Config(msg) => write!(f, "Configuration error: {}", msg),
            TikHubError::Input(msg) => write!(f, "Input error: {}", msg),
        }
    }
}

impl std::error::Error for TikHubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TikHubError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TikHubError {
    fn from(err: reqwest::Error) -> Self {
        TikHubError::Http(err)
    }
}

impl From<serde_json::Error> for TikHubError {
    fn from(err: serde_json::Error) -> Self {
        TikHubError::Json(err.to_string())
    }
}

impl From<std::io::Error> for TikHubError {
    fn from(err: std::io::Error) -> Self {
        TikHubError::Input(err.to_string())
    }
}

/// Result type alias for TikHub operations
pub type Result<T> = std::result::Result<T, TikHubError>;
