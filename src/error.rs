use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to fetch users: {code} {status_text}")]
    HttpStatus { code: u16, status_text: String },
}

#[derive(Debug, Clone, Error)]
pub enum QueryError {
    #[error(transparent)]
    Fetch(#[from] ApiError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
