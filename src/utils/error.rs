use thiserror::Error;

/// Message shown when an error carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "An error occurred while processing your request";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{message}")]
    ValidationError { message: String },

    #[error("HTTP error! status: {status}")]
    HttpStatusError { status: u16 },

    #[error("{0}")]
    TransportError(#[from] reqwest::Error),

    #[error("{0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("Unexpected response shape: {reason}")]
    ResponseShapeError { reason: String },

    #[error("Clipboard error: {message}")]
    ClipboardError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Remote,
    Response,
    Local,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError {
            message: message.into(),
        }
    }

    pub fn response_shape(reason: impl Into<String>) -> Self {
        AppError::ResponseShapeError {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            AppError::ValidationError { .. } => ErrorCategory::Validation,
            AppError::HttpStatusError { .. } | AppError::TransportError(_) => ErrorCategory::Remote,
            AppError::DecodeError(_) | AppError::ResponseShapeError { .. } => {
                ErrorCategory::Response
            }
            AppError::ClipboardError { .. } | AppError::IoError(_) | AppError::CsvError(_) => {
                ErrorCategory::Local
            }
            AppError::ConfigValidationError { .. }
            | AppError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Remote => ErrorSeverity::Medium,
            ErrorCategory::Response => ErrorSeverity::High,
            ErrorCategory::Local | ErrorCategory::Configuration => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Validation => 1,
            ErrorCategory::Remote => 2,
            ErrorCategory::Response => 3,
            ErrorCategory::Local | ErrorCategory::Configuration => 4,
        }
    }

    /// The single line shown in the error slot.
    pub fn user_friendly_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AppError::ValidationError { .. } => {
                "Provide a CSV/PDF file with --file or a product ASIN with --asin"
            }
            AppError::HttpStatusError { .. } => {
                "Check that the webhook workflow is active and accepts POST requests"
            }
            AppError::TransportError(_) => {
                "Check that the webhook endpoint is reachable from this machine"
            }
            AppError::DecodeError(_) | AppError::ResponseShapeError { .. } => {
                "Check that the webhook responds with the analysis JSON document"
            }
            AppError::ClipboardError { .. } => "Copy the text manually from the output above",
            AppError::IoError(_) | AppError::CsvError(_) => {
                "Check that the file exists and is readable"
            }
            AppError::ConfigValidationError { .. } | AppError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or pass --endpoint explicitly"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
