pub mod gemini;

pub use crate::core::traits::CompletionClient;
pub use gemini::{GeminiClient, GeminiSettings};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::utils::error::{AppError, AppResult};

pub const GOOGLE_API_KEY_ENV: &str = "GOOGLE_API_KEY";

pub fn get_google_api_key() -> Option<String> {
    std::env::var(GOOGLE_API_KEY_ENV).ok()
}

/// Load a `.env` file from the working directory or one of its parents.
/// Variables already present in the environment keep their values.
pub fn load_env_file() -> Option<PathBuf> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!(path = %path.display(), "loaded .env file");
            Some(path)
        }
        Err(err) if err.not_found() => None,
        Err(err) => {
            warn!(%err, "ignoring unreadable .env file");
            None
        }
    }
}

/// Load a specific env file into the environment
pub fn load_env_file_from(path: &Path) -> AppResult<()> {
    dotenvy::from_path(path)
        .map_err(|e| AppError::Config(format!("Failed to read {}: {}", path.display(), e)))
}

/// Pick the credential: config file value first, then the environment.
/// Blank values count as unset.
pub fn resolve_credential(configured: Option<String>, env: Option<String>) -> Option<String> {
    configured
        .filter(|key| !key.trim().is_empty())
        .or_else(|| env.filter(|key| !key.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_credential_prefers_config() {
        assert_eq!(
            resolve_credential(Some("from-config".into()), Some("from-env".into())),
            Some("from-config".to_string())
        );
    }

    #[test]
    fn test_resolve_credential_falls_back_to_env() {
        assert_eq!(
            resolve_credential(None, Some("from-env".into())),
            Some("from-env".to_string())
        );
        assert_eq!(
            resolve_credential(Some("  ".into()), Some("from-env".into())),
            Some("from-env".to_string())
        );
    }

    #[test]
    fn test_resolve_credential_absent() {
        assert_eq!(resolve_credential(None, None), None);
        assert_eq!(resolve_credential(Some(String::new()), Some(String::new())), None);
    }

    #[test]
    fn test_env_file_populates_environment() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "ARTISAN_AI_ENV_FILE_CHECK=from-env-file\n").unwrap();

        load_env_file_from(&path).unwrap();

        assert_eq!(
            std::env::var("ARTISAN_AI_ENV_FILE_CHECK").as_deref(),
            Ok("from-env-file")
        );
    }

    #[test]
    fn test_env_file_missing_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_env_file_from(&dir.path().join(".env")).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
