//! Error types and handling for the `EcoRoute` application

use thiserror::Error;

/// Main error type for the `EcoRoute` application
#[derive(Error, Debug)]
pub enum EcoRouteError {
    /// Input validation errors (empty origin/destination, bad coordinates)
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// The model call succeeded transport-wise but returned no candidates
    #[error("No route suggestions found")]
    EmptyResponse,

    /// Any transport or service failure from the model call
    #[error("Route service unavailable")]
    RouteUnavailable,

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl EcoRouteError {
    /// Create a new input validation error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    ///
    /// Service failures are mapped to a fixed message that never echoes
    /// raw provider error text (credentials, stack traces).
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            EcoRouteError::InvalidInput { message } => {
                format!("Invalid input: {message}")
            }
            EcoRouteError::EmptyResponse => "No route suggestions found.".to_string(),
            EcoRouteError::RouteUnavailable => {
                "Unable to calculate route. Please verify your API key and connection."
                    .to_string()
            }
            EcoRouteError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            EcoRouteError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
