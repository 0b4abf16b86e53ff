//! Backend provider selection.
//!
//! Exactly one provider is compiled in. The `openssl` feature takes
//! precedence over the default `rustcrypto` so that enabling it does not
//! require `default-features = false`. Providers only differ in resource and
//! performance characteristics; the digest bytes are identical.

use crate::{Algorithm, Result};

#[cfg(not(any(feature = "rustcrypto", feature = "openssl")))]
compile_error!("hashline-digest needs a provider: enable the `rustcrypto` or `openssl` feature");

#[cfg(feature = "openssl")]
mod openssl;
#[cfg(feature = "openssl")]
use self::openssl as imp;

#[cfg(all(feature = "rustcrypto", not(feature = "openssl")))]
mod rustcrypto;
#[cfg(all(feature = "rustcrypto", not(feature = "openssl")))]
use self::rustcrypto as imp;

pub(crate) use imp::{Context, digest_len};

/// The contract every provider satisfies.
///
/// `open` must not leave any backend state behind on failure, and a context
/// dropped before `finalize` must release whatever it allocated.
pub(crate) trait Provider: Sized {
    fn open(algorithm: Algorithm) -> Result<Self>;
    fn update(&mut self, data: &[u8]) -> Result<()>;
    fn finalize(self) -> Result<Vec<u8>>;
}
