use thiserror::Error;

#[derive(Debug, Error)]
pub enum KillchainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl KillchainError {
    /// Process exit code reported by the CLI for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            KillchainError::Config(_) | KillchainError::Yaml(_) => 2,
            KillchainError::InvalidInput(_) | KillchainError::Json(_) => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(KillchainError::Config("bad".into()).exit_code(), 2);
        assert_eq!(KillchainError::InvalidInput("bad".into()).exit_code(), 5);
        assert_eq!(KillchainError::Internal("boom".into()).exit_code(), 1);
    }

    #[test]
    fn test_json_error_is_invalid_input() {
        let err: KillchainError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.exit_code(), 5);
        assert!(err.to_string().starts_with("JSON error"));
    }
}
