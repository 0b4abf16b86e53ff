use std::fmt;

/// Identifier for a hash algorithm known to this crate.
///
/// The set is closed: name resolution can only produce one of these values,
/// and every downstream operation consumes them. `Unknown` is a real member
/// so that lookups stay infallible; callers must check for it before opening
/// a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Unknown,
    Md2,
    Md5,
    Rmd160,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Every real identifier, in declaration order. Excludes `Unknown`.
    ///
    /// Being listed here does not mean the compiled-in backend can compute
    /// it; check [`Algorithm::output_len`] for that.
    pub const SUPPORTED: [Algorithm; 8] = [
        Algorithm::Md2,
        Algorithm::Md5,
        Algorithm::Rmd160,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Look up an algorithm by name.
    ///
    /// Matching is case-insensitive, and the SHA family accepts both the
    /// hyphenated ("sha-256") and the compact ("sha256") spelling. Anything
    /// else resolves to [`Algorithm::Unknown`], which is a normal outcome,
    /// not an error.
    pub fn from_name(name: &str) -> Algorithm {
        // First-byte check keeps SHA lookups, by far the most common, from
        // walking the md5/md2/rmd160 comparisons.
        if name.as_bytes().first().is_some_and(|b| b.eq_ignore_ascii_case(&b's')) {
            if name.eq_ignore_ascii_case("sha-1") || name.eq_ignore_ascii_case("sha1") {
                return Algorithm::Sha1;
            }
            if name.eq_ignore_ascii_case("sha-256") || name.eq_ignore_ascii_case("sha256") {
                return Algorithm::Sha256;
            }
            if name.eq_ignore_ascii_case("sha-512") || name.eq_ignore_ascii_case("sha512") {
                return Algorithm::Sha512;
            }
            if name.eq_ignore_ascii_case("sha-224") || name.eq_ignore_ascii_case("sha224") {
                return Algorithm::Sha224;
            }
            if name.eq_ignore_ascii_case("sha-384") || name.eq_ignore_ascii_case("sha384") {
                return Algorithm::Sha384;
            }
        } else if name.eq_ignore_ascii_case("md5") {
            return Algorithm::Md5;
        } else if name.eq_ignore_ascii_case("md2") {
            return Algorithm::Md2;
        } else if name.eq_ignore_ascii_case("rmd160") {
            return Algorithm::Rmd160;
        }

        tracing::debug!(name, "unknown hash algorithm");
        Algorithm::Unknown
    }

    /// Canonical compact lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Unknown => "unknown",
            Algorithm::Md2 => "md2",
            Algorithm::Md5 => "md5",
            Algorithm::Rmd160 => "rmd160",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha224 => "sha224",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha384 => "sha384",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes under the compiled-in backend.
    ///
    /// Returns 0 for `Unknown` and for identifiers the backend was built
    /// without, rather than failing.
    pub fn output_len(self) -> usize {
        crate::backend::digest_len(self)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
