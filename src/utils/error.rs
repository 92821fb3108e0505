use crate::utils::output::OutputStyle;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppError {
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("Operation '{operation}' requires field '{field}'")]
    MissingField { operation: String, field: String },

    #[error("Remote service error: {0}")]
    RemoteService(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for consistent error handling across the application
pub type AppResult<T> = Result<T, AppError>;

pub fn report_error(err: &AppError) {
    match err {
        AppError::MissingCredential(msg) => {
            eprintln!("🔑 {}", OutputStyle::error(&format!("Failed to initialize AI agent: {}", msg)));
            eprintln!(
                "💡 {}",
                OutputStyle::info("Set GOOGLE_API_KEY in your environment or in a .env file in the working directory.")
            );
        }
        AppError::UnknownOperation(name) => {
            eprintln!("❌ {}", OutputStyle::error(&format!("Unknown operation '{}'", name)));
            eprintln!(
                "💡 {}",
                OutputStyle::muted("Run `artisan-ai operations` to list the available operations.")
            );
        }
        AppError::MissingField { .. } => {
            eprintln!("❌ {}", OutputStyle::error(&err.to_string()));
        }
        AppError::RemoteService(msg) => {
            eprintln!("🌐 {}", OutputStyle::error(&format!("Remote service: {}", msg)));
            eprintln!("{}", OutputStyle::muted("You can resubmit the request to try again."));
        }
        AppError::Config(msg) => {
            eprintln!("⚙️  {}", OutputStyle::warning(msg));
        }
        AppError::Io(msg) => {
            eprintln!("❌ {}", OutputStyle::error(msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message_names_operation_and_field() {
        let err = AppError::MissingField {
            operation: "generate_listing".to_string(),
            field: "material".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Operation 'generate_listing' requires field 'material'"
        );
    }

    #[test]
    fn test_remote_service_message_is_preserved() {
        let err = AppError::RemoteService("quota exceeded".to_string());
        assert!(err.to_string().contains("quota exceeded"));
    }
}
