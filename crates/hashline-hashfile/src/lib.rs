//! File hashing on top of [`hashline_digest`].
//!
//! Hashes a byte range of a file and renders the digest as lowercase hex.
//! The range is mapped into memory and digested in a single pass when the
//! platform allows it; otherwise a bounded read loop feeds a streaming
//! context, with byte-identical results.
//!
//! # Example
//!
//! ```
//! use hashline_hashfile::hash_path;
//!
//! let dir = tempfile::tempdir()?;
//! let path = dir.path().join("data.bin");
//! std::fs::write(&path, b"hello world")?;
//!
//! let digest = hash_path(&path, "sha256")?.expect("file exists");
//! assert_eq!(
//!     digest,
//!     "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
//! );
//!
//! // A path that cannot be opened is a dedicated outcome, not an error.
//! assert_eq!(hash_path(dir.path().join("missing"), "sha256")?, None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::error::{Error, Result};
pub use self::hashfile::{
    Options, hash_file_range, hash_file_range_with, hash_path, hash_path_range,
    hash_path_range_with,
};

mod error;
mod hashfile;
