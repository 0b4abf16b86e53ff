use crate::Algorithm;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The name did not resolve to a real algorithm.
    #[error("unknown hash algorithm")]
    UnknownAlgorithm,

    /// The identifier is known but the compiled-in backend cannot compute it.
    #[error("hash algorithm {0} is not supported by this backend")]
    Unsupported(Algorithm),

    /// The backend reported an internal failure.
    #[error("hash backend failure: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, Error>;
