//! Streaming digest contexts over interchangeable cryptographic backends.
//!
//! Callers name a hash algorithm by string, get back an [`Algorithm`]
//! identifier, and drive a [`DigestContext`] through init → update → finalize,
//! or use [`digest`] for a single buffer. The actual hashing is delegated to
//! exactly one compiled-in provider (RustCrypto by default, OpenSSL behind the
//! `openssl` feature); swapping providers never changes the digest bytes.
//!
//! # Example
//!
//! ```
//! use hashline_digest::{digest, Algorithm, DigestContext};
//!
//! let alg = Algorithm::from_name("SHA-256");
//! assert_eq!(alg, Algorithm::Sha256);
//!
//! let mut ctx = DigestContext::new(alg)?;
//! ctx.update(b"hello ")?;
//! ctx.update(b"world")?;
//! assert_eq!(ctx.finalize()?, digest(alg, b"hello world")?);
//! # Ok::<(), hashline_digest::Error>(())
//! ```

pub use self::algorithm::Algorithm;
pub use self::context::{DigestContext, digest};
pub use self::error::{Error, Result};

mod algorithm;
mod backend;
mod context;
mod error;
