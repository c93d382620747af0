use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Control '{name}' is a {kind} and cannot {operation}")]
    ControlKind {
        name: String,
        kind: &'static str,
        operation: &'static str,
    },

    #[error("Malformed results summary: {0:?}")]
    MalformedSummary(String),
}

pub type Result<T> = std::result::Result<T, Error>;
