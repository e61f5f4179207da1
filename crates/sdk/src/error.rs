//! SDK error types
//!
//! This module defines the error types used throughout the SDK.

use crate::transport::Response;
use thiserror::Error;

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Client configuration is invalid (empty base URL or token, bad URL)
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Error message
        message: String,
    },

    /// A mandatory identifier was empty or zero
    #[error("parameter {param} is required")]
    RequiredParameter {
        /// Name of the missing parameter
        param: &'static str,
    },

    /// The transport failed before a response was received
    #[error("Network error: {message}")]
    NetworkError {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The server answered with a status code of 400 or above
    #[error("HTTP error ({status_code}): {message}")]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Server provided message, or the canonical reason phrase
        message: String,
        /// Full response, kept so callers can inspect status and headers
        response: Box<Response>,
    },

    /// The server returned an error envelope with an unexpected success status
    #[error("{name}: {message}")]
    ApiError {
        /// Error name reported by the server (e.g. `NotFoundError`)
        name: String,
        /// Error message reported by the server
        message: String,
        /// Response the envelope was read from
        response: Box<Response>,
    },

    /// The response body could not be decoded into the expected shape
    #[error("Invalid API response: {message}")]
    DecodeError {
        /// Error message
        message: String,
        /// Response whose body failed to decode
        response: Box<Response>,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A request body or query could not be encoded
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SdkError {
    /// Create a required-parameter error
    pub fn required(param: &'static str) -> Self {
        SdkError::RequiredParameter { param }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        SdkError::ConfigError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code if a response was received
    pub fn status_code(&self) -> Option<u16> {
        self.response().map(|r| r.status().as_u16())
    }

    /// The response the error was derived from, if any
    ///
    /// Transport, configuration and required-parameter errors never carry a
    /// response.
    pub fn response(&self) -> Option<&Response> {
        match self {
            SdkError::HttpError { response, .. }
            | SdkError::ApiError { response, .. }
            | SdkError::DecodeError { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Check whether the server reported 404
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }
}

/// Convert from reqwest errors
impl From<reqwest::Error> for SdkError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "Request timed out".to_string()
        } else if err.is_connect() {
            "Connection failed".to_string()
        } else {
            err.to_string()
        };
        SdkError::NetworkError {
            message,
            source: Some(Box::new(err)),
        }
    }
}

/// Convert from JSON errors
impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::SerializationError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_urlencoded::ser::Error> for SdkError {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        SdkError::SerializationError {
            message: format!("Failed to encode query: {}", err),
            source: Some(Box::new(err)),
        }
    }
}
