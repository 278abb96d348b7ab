use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Network request failed before a response was received
    NetworkError(String),
    /// Service replied with a non-success status
    ApiError {
        status: u16,
        endpoint: String,
        body: String,
    },
    /// Login was rejected or the client has not logged in yet
    AuthError(String),
    /// Response body did not match the expected JSON shape
    ParseError(String),
    /// Invalid URL format
    UrlError(String),
    /// Cash-ledger category name is not one of the known categories
    UnknownCategory { name: String, known: String },
    /// Invalid input format
    InvalidInput(String),
    /// IO operation failed
    IoError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network error: {msg}"),
            AppError::ApiError {
                status,
                endpoint,
                body,
            } => {
                write!(f, "Error [{status}] calling [{endpoint}]: {body}")
            }
            AppError::AuthError(msg) => write!(f, "Authentication error: {msg}"),
            AppError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            AppError::UrlError(msg) => write!(f, "Invalid URL: {msg}"),
            AppError::UnknownCategory { name, known } => {
                write!(
                    f,
                    "Unknown ledger category '{name}'. Known categories: {known}"
                )
            }
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            AppError::IoError(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

// Conversion implementations for common errors
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::NetworkError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::UrlError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
