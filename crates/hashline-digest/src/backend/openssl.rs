//! OpenSSL provider: a single EVP hasher handle owns all backend state, so
//! dropping the context before `finalize` still frees it through the binding.

use openssl::hash::{Hasher, MessageDigest};

use super::Provider;
use crate::{Algorithm, Error, Result};

pub(crate) struct Context(Hasher);

/// Descriptor lookup. `None` means the identifier is not available under
/// this provider: libcrypto no longer ships MD2, and the bindings do not
/// expose it.
fn message_digest(algorithm: Algorithm) -> Option<MessageDigest> {
    match algorithm {
        Algorithm::Md5 => Some(MessageDigest::md5()),
        #[cfg(feature = "rmd160")]
        Algorithm::Rmd160 => Some(MessageDigest::ripemd160()),
        Algorithm::Sha1 => Some(MessageDigest::sha1()),
        Algorithm::Sha224 => Some(MessageDigest::sha224()),
        Algorithm::Sha256 => Some(MessageDigest::sha256()),
        Algorithm::Sha384 => Some(MessageDigest::sha384()),
        Algorithm::Sha512 => Some(MessageDigest::sha512()),
        _ => None,
    }
}

impl Provider for Context {
    fn open(algorithm: Algorithm) -> Result<Self> {
        let md = message_digest(algorithm).ok_or(Error::Unsupported(algorithm))?;
        let hasher = Hasher::new(md).map_err(|e| Error::Backend(e.to_string()))?;
        Ok(Context(hasher))
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        self.0.update(data).map_err(|e| Error::Backend(e.to_string()))
    }

    fn finalize(mut self) -> Result<Vec<u8>> {
        let digest = self.0.finish().map_err(|e| Error::Backend(e.to_string()))?;
        Ok(digest.to_vec())
    }
}

pub(crate) fn digest_len(algorithm: Algorithm) -> usize {
    message_digest(algorithm).map_or(0, |md| md.size())
}
