use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to initialize database: {0}")]
    DatabaseInitError(String),
    #[error("Failed to start server: {0}")]
    ServerError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_name_the_failure() {
        let err = ApplicationError::ServerError("failed to bind 0.0.0.0:3000: in use".into());
        assert_eq!(
            err.to_string(),
            "Failed to start server: failed to bind 0.0.0.0:3000: in use"
        );
    }
}
