use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Digest(#[from] hashline_digest::Error),

    /// Requested range extends past the end of the file. Checked before any
    /// byte is read.
    #[error("invalid range: offset {offset} + length {length} exceeds file size {size}")]
    InvalidRange { offset: u64, length: u64, size: u64 },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
