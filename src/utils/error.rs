use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Server responded {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Server,
    Config,
    Validation,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ApiError(_) => ErrorCategory::Network,
            Self::ServerError { .. } => ErrorCategory::Server,
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::System,
            Self::MissingConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Config
            }
            Self::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ValidationError { .. } => ErrorSeverity::Low,
            Self::ApiError(_) | Self::ServerError { .. } => ErrorSeverity::Medium,
            Self::SerializationError(_)
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ApiError(e) => format!("Could not reach the billing server: {}", e),
            Self::ServerError { message, .. } => message.clone(),
            Self::SerializationError(_) => {
                "The server returned data the client could not understand".to_string()
            }
            Self::IoError(e) => format!("Could not write output files: {}", e),
            Self::MissingConfigError { field } => format!("Configuration is missing '{}'", field),
            Self::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            Self::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::ApiError(_) => {
                "Check that the billing server is running and --api-base points at it".to_string()
            }
            Self::ServerError { status, .. } if *status == 401 || *status == 403 => {
                "Log in again with --username/--password for an account with the right role"
                    .to_string()
            }
            Self::ServerError { .. } => "Check the request data and retry".to_string(),
            Self::SerializationError(_) => {
                "Verify the server version matches this client".to_string()
            }
            Self::IoError(_) => "Check that the output directory is writable".to_string(),
            Self::MissingConfigError { field } => {
                format!("Provide '{}' on the command line or in the profile file", field)
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
            Self::ValidationError { .. } => "Fix the form input and retry".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_keeps_message() {
        let err = ClientError::ServerError {
            status: 400,
            message: "Email already registered: a@b.c".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Email already registered: a@b.c");
        assert_eq!(err.category(), ErrorCategory::Server);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn auth_failure_suggests_login() {
        let err = ClientError::ServerError {
            status: 401,
            message: "No active session.".to_string(),
        };
        assert!(err.recovery_suggestion().contains("Log in"));
    }

    #[test]
    fn validation_is_low_severity() {
        let err = ClientError::ValidationError {
            message: "Please select a customer".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Low);
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
