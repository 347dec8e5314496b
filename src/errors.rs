use thiserror::Error;

/// Error type for benchvault operations.
#[derive(Debug, Error)]
pub enum BenchVaultError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("comparison error: {0}")]
    Comparison(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("connection error: {0}")]
    ConnectionError(String),
    #[error("schema error: {0}")]
    SchemaError(String),
    #[error("query error: {0}")]
    QueryError(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
}

impl BenchVaultError {
    pub fn parse<T: Into<String>>(msg: T) -> Self {
        BenchVaultError::Parse(msg.into())
    }

    pub fn comparison<T: Into<String>>(msg: T) -> Self {
        BenchVaultError::Comparison(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        BenchVaultError::NotFound(msg.into())
    }

    pub fn connection<T: Into<String>>(msg: T) -> Self {
        BenchVaultError::ConnectionError(msg.into())
    }

    pub fn schema<T: Into<String>>(msg: T) -> Self {
        BenchVaultError::SchemaError(msg.into())
    }

    pub fn query<T: Into<String>>(msg: T) -> Self {
        BenchVaultError::QueryError(msg.into())
    }

    pub fn invalid_input<T: Into<String>>(msg: T) -> Self {
        BenchVaultError::InvalidInput(msg.into())
    }

    pub fn unauthorized<T: Into<String>>(msg: T) -> Self {
        BenchVaultError::Unauthorized(msg.into())
    }

    /// True when the error is the collaborator-reported missing-entity kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BenchVaultError::NotFound(_))
    }
}
