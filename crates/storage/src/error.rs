use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store could not be reached or rejected the write.
    /// Fatal for the request it occurs in.
    #[error("persistence unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}
