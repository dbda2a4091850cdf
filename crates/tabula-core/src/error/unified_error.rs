//! UnifiedError trait implementation for TabulaError

use super::types::{TabulaError, UnifiedError};

impl UnifiedError for TabulaError {
    fn error_code(&self) -> &str {
        match self {
            TabulaError::Config { .. } => "TABULA_CONFIG",
            TabulaError::Io { .. } => "TABULA_IO",
        }
    }

    fn message(&self) -> &str {
        match self {
            TabulaError::Config { message, .. } | TabulaError::Io { message, .. } => message,
        }
    }

    fn context(&self) -> Option<&str> {
        match self {
            TabulaError::Config { context, .. } => context.as_deref(),
            TabulaError::Io { path, .. } => Some(path),
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, TabulaError::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(TabulaError::config("x").error_code(), "TABULA_CONFIG");
        assert_eq!(TabulaError::io("x", "tabula.toml").error_code(), "TABULA_IO");
    }

    #[test]
    fn test_message_and_context() {
        let err = TabulaError::config_with_context("bad path", "Loading 'tabula.toml'");
        assert_eq!(err.message(), "bad path");
        assert_eq!(err.context(), Some("Loading 'tabula.toml'"));
        assert_eq!(err.to_string(), "Configuration error: bad path");

        let err = TabulaError::io("permission denied", "/etc/tabula.toml");
        assert_eq!(err.context(), Some("/etc/tabula.toml"));
    }

    #[test]
    fn test_retryable() {
        assert!(TabulaError::io("disk", "tabula.toml").is_retryable());
        assert!(!TabulaError::config("x").is_retryable());
    }
}
