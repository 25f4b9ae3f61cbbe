//! Error types for the fctask CLI

use thiserror::Error;

/// Result type alias for fctask operations
pub type Result<T> = std::result::Result<T, Error>;

/// Result of a remote operation
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Message surfaced whenever the server could not be reached at all
pub const UNREACHABLE_MESSAGE: &str = "Failed to reach server";

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not logged in. Run `fctask login` to sign in.")]
    NotAuthenticated,
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Failure of a remote operation.
///
/// Every variant displays as a single human-readable message; callers that
/// only want to show the failure can use [`ApiError::message`] without
/// matching on the kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response was received from the server
    #[error("{}", UNREACHABLE_MESSAGE)]
    Unreachable,

    /// The server answered with an error, or with a body we could not read
    #[error("{0}")]
    Rejected(String),

    /// The request was refused locally before anything was sent
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// The user-facing message for this failure
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `fctask login` to create one.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_message_is_fixed() {
        assert_eq!(ApiError::Unreachable.to_string(), UNREACHABLE_MESSAGE);
        assert_eq!(ApiError::Unreachable.message(), "Failed to reach server");
    }

    #[test]
    fn test_rejected_displays_message_only() {
        let err = ApiError::Rejected("Username already taken".to_string());
        assert_eq!(err.to_string(), "Username already taken");
    }

    #[test]
    fn test_validation_displays_message_only() {
        let err = ApiError::Validation("Missing task ID".to_string());
        assert_eq!(err.message(), "Missing task ID");
    }

    #[test]
    fn test_error_from_api_error_is_transparent() {
        let err: Error = ApiError::Rejected("Login failed".to_string()).into();
        assert_eq!(err.to_string(), "Login failed");

        match err {
            Error::Api(ApiError::Rejected(_)) => (),
            _ => panic!("Expected Error::Api(ApiError::Rejected)"),
        }
    }

    #[test]
    fn test_error_from_config_error() {
        let err: Error = ConfigError::NotFound.into();

        match err {
            Error::Config(ConfigError::NotFound) => (),
            _ => panic!("Expected Error::Config(ConfigError::NotFound)"),
        }
    }

    #[test]
    fn test_not_authenticated_points_to_login() {
        assert!(Error::NotAuthenticated.to_string().contains("fctask login"));
    }

    #[test]
    fn test_config_error_parse() {
        let err = ConfigError::ParseError("unexpected key".to_string());
        assert!(err.to_string().contains("unexpected key"));
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
