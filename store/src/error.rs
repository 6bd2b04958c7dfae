use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("key not found: {0}")]
    NotFound(String),

    #[error("rejected by backend: {0}")]
    Rejected(String),

    #[error("storage backend error: {0}")]
    Backend(String),
}
