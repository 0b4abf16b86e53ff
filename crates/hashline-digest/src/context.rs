use std::fmt;

use crate::backend::{self, Provider};
use crate::{Algorithm, Error, Result};

/// A hash computation in progress.
///
/// Created by [`DigestContext::new`], fed through [`update`] any number of
/// times with any chunking, and consumed by [`finalize`]. Because `finalize`
/// takes the context by value, feeding a finished computation cannot compile;
/// a context dropped early releases its backend state through ownership.
///
/// [`update`]: DigestContext::update
/// [`finalize`]: DigestContext::finalize
pub struct DigestContext {
    algorithm: Algorithm,
    inner: backend::Context,
}

impl DigestContext {
    /// Open a streaming context for `algorithm`.
    ///
    /// `Unknown` fails with [`Error::UnknownAlgorithm`] before any backend
    /// state is allocated; identifiers the compiled-in provider was built
    /// without fail with [`Error::Unsupported`].
    pub fn new(algorithm: Algorithm) -> Result<DigestContext> {
        if algorithm == Algorithm::Unknown {
            return Err(Error::UnknownAlgorithm);
        }
        Ok(DigestContext {
            algorithm,
            inner: backend::Context::open(algorithm)?,
        })
    }

    /// The algorithm this context was opened with.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Feed more input. Splitting the input differently never changes the
    /// final digest.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.inner.update(data)
    }

    /// Apply final padding and return the digest, releasing backend state.
    ///
    /// The output length is fixed per algorithm; see
    /// [`Algorithm::output_len`].
    pub fn finalize(self) -> Result<Vec<u8>> {
        self.inner.finalize()
    }
}

impl fmt::Debug for DigestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DigestContext")
            .field("algorithm", &self.algorithm)
            .finish_non_exhaustive()
    }
}

/// Digest a single buffer. Behaviorally identical to
/// `new` → `update` → `finalize`.
pub fn digest(algorithm: Algorithm, data: &[u8]) -> Result<Vec<u8>> {
    let mut ctx = DigestContext::new(algorithm)?;
    ctx.update(data)?;
    ctx.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Algorithms the current build can actually compute.
    fn compiled_in() -> Vec<Algorithm> {
        Algorithm::SUPPORTED
            .into_iter()
            .filter(|alg| alg.output_len() > 0)
            .collect()
    }

    fn vectors() -> Vec<(Algorithm, &'static [u8], &'static str)> {
        let mut v: Vec<(Algorithm, &'static [u8], &'static str)> = vec![
            (Algorithm::Md5, b"", "d41d8cd98f00b204e9800998ecf8427e"),
            (Algorithm::Md5, b"abc", "900150983cd24fb0d6963f7d28e17f72"),
            (Algorithm::Sha1, b"abc", "a9993e364706816aba3e25717850c26c9cd0d89d"),
            (
                Algorithm::Sha224,
                b"abc",
                "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
            ),
            (
                Algorithm::Sha256,
                b"",
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            ),
            (
                Algorithm::Sha256,
                b"abc",
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
            (
                Algorithm::Sha384,
                b"abc",
                "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
                 8086072ba1e7cc2358baeca134c825a7",
            ),
            (
                Algorithm::Sha512,
                b"abc",
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
                 2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
            ),
        ];
        #[cfg(all(feature = "md2", not(feature = "openssl")))]
        v.push((Algorithm::Md2, b"abc", "da853b0d3f88d99b30283a69e6ded6bb"));
        #[cfg(feature = "rmd160")]
        v.push((
            Algorithm::Rmd160,
            b"abc",
            "8eb208f7e05d987a9b044a8e98c6b087f15a0bfc",
        ));
        v
    }

    #[test]
    fn known_vectors() {
        for (alg, input, expected) in vectors() {
            let out = digest(alg, input).unwrap();
            assert_eq!(hex::encode(out), expected, "{alg} over {input:?}");
        }
    }

    #[test]
    fn streaming_matches_one_shot() {
        let data: Vec<u8> = (0..3000u32).map(|i| (i % 251) as u8).collect();
        for alg in compiled_in() {
            let expected = digest(alg, &data).unwrap();
            for chunk_size in [1, 3, 7, 64, 1000, data.len()] {
                let mut ctx = DigestContext::new(alg).unwrap();
                for chunk in data.chunks(chunk_size) {
                    ctx.update(chunk).unwrap();
                }
                let out = ctx.finalize().unwrap();
                assert_eq!(out, expected, "{alg} chunked by {chunk_size}");
            }
        }
    }

    #[test]
    fn output_len_matches_digest() {
        for alg in compiled_in() {
            let out = digest(alg, b"x").unwrap();
            assert_eq!(out.len(), alg.output_len(), "{alg}");
        }
    }

    #[test]
    fn output_len_constants() {
        let expected = [
            (Algorithm::Md2, 16),
            (Algorithm::Md5, 16),
            (Algorithm::Rmd160, 20),
            (Algorithm::Sha1, 20),
            (Algorithm::Sha224, 28),
            (Algorithm::Sha256, 32),
            (Algorithm::Sha384, 48),
            (Algorithm::Sha512, 64),
        ];
        for (alg, len) in expected {
            if alg.output_len() > 0 {
                assert_eq!(alg.output_len(), len, "{alg}");
            }
        }
        assert_eq!(Algorithm::Unknown.output_len(), 0);
    }

    #[test]
    fn unknown_never_opens() {
        assert!(matches!(
            DigestContext::new(Algorithm::Unknown),
            Err(Error::UnknownAlgorithm)
        ));
        assert!(matches!(
            digest(Algorithm::Unknown, b"data"),
            Err(Error::UnknownAlgorithm)
        ));
    }

    #[cfg(feature = "openssl")]
    #[test]
    fn md2_unsupported_under_openssl() {
        assert!(matches!(
            DigestContext::new(Algorithm::Md2),
            Err(Error::Unsupported(Algorithm::Md2))
        ));
    }

    #[test]
    fn context_reports_algorithm() {
        let ctx = DigestContext::new(Algorithm::Sha256).unwrap();
        assert_eq!(ctx.algorithm(), Algorithm::Sha256);
    }
}
