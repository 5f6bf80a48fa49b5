// Error types module

use thiserror::Error;

/// Errors raised while applying commands to a builder
///
/// Only the dynamic dispatch adapter can produce these. The typed
/// `Builder` API is total: argument ranges are never validated here and
/// are left to the remote proxy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// The requested operation name is not part of the command set
    #[error("Method \"{method}\" not found for {target}")]
    MethodNotFound { method: String, target: String },

    /// The operation exists but its arguments could not be interpreted
    #[error("Invalid arguments for \"{method}\": {message}")]
    InvalidArgument { method: String, message: String },
}

impl BuilderError {
    pub fn method_not_found(method: impl Into<String>, target: impl Into<String>) -> Self {
        BuilderError::MethodNotFound {
            method: method.into(),
            target: target.into(),
        }
    }

    pub fn invalid_argument(method: impl Into<String>, message: impl Into<String>) -> Self {
        BuilderError::InvalidArgument {
            method: method.into(),
            message: message.into(),
        }
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Environment variable '{0}' is referenced but not set")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
