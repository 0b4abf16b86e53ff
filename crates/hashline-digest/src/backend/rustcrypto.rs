//! RustCrypto provider: one pure-Rust digest crate per algorithm, dispatched
//! through an enum so the context stays a plain value with no allocation
//! beyond the digest state itself.

use sha1::Sha1;
use sha2::{Digest, Sha224, Sha256, Sha384, Sha512};

use super::Provider;
use crate::{Algorithm, Error, Result};

/// Streaming state. Gated variants disappear together with their crates, and
/// the identifiers they served become `Unsupported` at `open`.
pub(crate) enum Context {
    #[cfg(feature = "md2")]
    Md2(md2::Md2),
    Md5(md5::Md5),
    #[cfg(feature = "rmd160")]
    Rmd160(ripemd::Ripemd160),
    Sha1(Sha1),
    Sha224(Sha224),
    Sha256(Sha256),
    Sha384(Sha384),
    Sha512(Sha512),
}

impl Provider for Context {
    fn open(algorithm: Algorithm) -> Result<Self> {
        let ctx = match algorithm {
            #[cfg(feature = "md2")]
            Algorithm::Md2 => Context::Md2(md2::Md2::new()),
            Algorithm::Md5 => Context::Md5(md5::Md5::new()),
            #[cfg(feature = "rmd160")]
            Algorithm::Rmd160 => Context::Rmd160(ripemd::Ripemd160::new()),
            Algorithm::Sha1 => Context::Sha1(Sha1::new()),
            Algorithm::Sha224 => Context::Sha224(Sha224::new()),
            Algorithm::Sha256 => Context::Sha256(Sha256::new()),
            Algorithm::Sha384 => Context::Sha384(Sha384::new()),
            Algorithm::Sha512 => Context::Sha512(Sha512::new()),
            _ => return Err(Error::Unsupported(algorithm)),
        };
        Ok(ctx)
    }

    fn update(&mut self, data: &[u8]) -> Result<()> {
        match self {
            #[cfg(feature = "md2")]
            Context::Md2(d) => d.update(data),
            Context::Md5(d) => d.update(data),
            #[cfg(feature = "rmd160")]
            Context::Rmd160(d) => d.update(data),
            Context::Sha1(d) => d.update(data),
            Context::Sha224(d) => d.update(data),
            Context::Sha256(d) => d.update(data),
            Context::Sha384(d) => d.update(data),
            Context::Sha512(d) => d.update(data),
        }
        Ok(())
    }

    fn finalize(self) -> Result<Vec<u8>> {
        let digest = match self {
            #[cfg(feature = "md2")]
            Context::Md2(d) => d.finalize().to_vec(),
            Context::Md5(d) => d.finalize().to_vec(),
            #[cfg(feature = "rmd160")]
            Context::Rmd160(d) => d.finalize().to_vec(),
            Context::Sha1(d) => d.finalize().to_vec(),
            Context::Sha224(d) => d.finalize().to_vec(),
            Context::Sha256(d) => d.finalize().to_vec(),
            Context::Sha384(d) => d.finalize().to_vec(),
            Context::Sha512(d) => d.finalize().to_vec(),
        };
        Ok(digest)
    }
}

pub(crate) fn digest_len(algorithm: Algorithm) -> usize {
    match algorithm {
        #[cfg(feature = "md2")]
        Algorithm::Md2 => md2::Md2::output_size(),
        Algorithm::Md5 => md5::Md5::output_size(),
        #[cfg(feature = "rmd160")]
        Algorithm::Rmd160 => ripemd::Ripemd160::output_size(),
        Algorithm::Sha1 => Sha1::output_size(),
        Algorithm::Sha224 => Sha224::output_size(),
        Algorithm::Sha256 => Sha256::output_size(),
        Algorithm::Sha384 => Sha384::output_size(),
        Algorithm::Sha512 => Sha512::output_size(),
        _ => 0,
    }
}
