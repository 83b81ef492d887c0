use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("missing environment variable: {0}")]
    MissingEnv(String),
}

#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("ai error: {0}")]
    Ai(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("provider.temperature out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: provider.temperature out of range"
        );

        let err = ConfigError::MissingEnv("GROQ_API_KEY".into());
        assert_eq!(err.to_string(), "missing environment variable: GROQ_API_KEY");
    }

    #[test]
    fn folio_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let folio_err: FolioError = config_err.into();
        assert!(matches!(folio_err, FolioError::Config(_)));
        assert!(folio_err.to_string().contains("bad toml"));
    }

    #[test]
    fn folio_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let folio_err: FolioError = io_err.into();
        assert!(matches!(folio_err, FolioError::Io(_)));
        assert!(folio_err.to_string().contains("file missing"));
    }

    #[test]
    fn folio_error_other_variants() {
        let err = FolioError::Ai("GROQ_API_KEY is not set".into());
        assert_eq!(err.to_string(), "ai error: GROQ_API_KEY is not set");

        let err = FolioError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
