use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use hashline_digest::{Algorithm, DigestContext, digest};

use crate::{Error, Result};

/// Read size for the buffered fallback.
const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Tuning knobs for the range hasher.
#[derive(Clone, Copy, Debug)]
pub struct Options {
    mmap: bool,
    chunk_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    pub fn new() -> Self {
        Self {
            mmap: true,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Allow mapping the range into memory. On by default; turning it off
    /// forces the buffered read path.
    pub fn mmap(mut self, mmap: bool) -> Self {
        self.mmap = mmap;
        self
    }

    /// Read size for the buffered path.
    pub fn chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

/// Hash `length` bytes of `file` starting at `offset`, returning the digest
/// as a lowercase hex string.
///
/// `length == 0` means up to the end of the file. The range is validated
/// against the file size before any byte is read. When possible the range is
/// mapped into memory and digested in one pass; otherwise a read loop feeds a
/// streaming context. Hitting end of file before `length` bytes is a normal
/// short completion; a failed read aborts.
pub fn hash_file_range_with(
    file: &File,
    algorithm_name: &str,
    offset: u64,
    mut length: u64,
    options: Options,
) -> Result<String> {
    let algorithm = Algorithm::from_name(algorithm_name);
    if algorithm == Algorithm::Unknown {
        return Err(Error::Digest(hashline_digest::Error::UnknownAlgorithm));
    }

    let size = file.metadata()?.len();
    if length == 0 {
        length = size.saturating_sub(offset);
    }
    match offset.checked_add(length) {
        Some(end) if end <= size => {}
        _ => return Err(Error::InvalidRange { offset, length, size }),
    }

    tracing::debug!(%algorithm, offset, length, "hashing file range");

    if options.mmap {
        if let Ok(map_len) = usize::try_from(length) {
            // SAFETY: the mapping is read-only and dropped before this
            // function returns on every path. The file must not be truncated
            // while the map is alive, the usual contract of a mapped read.
            let mapped = unsafe {
                memmap2::MmapOptions::new()
                    .offset(offset)
                    .len(map_len)
                    .map(file)
            };
            match mapped {
                Ok(map) => return Ok(hex::encode(digest(algorithm, &map)?)),
                Err(err) => {
                    tracing::debug!(%err, "mmap failed, falling back to buffered reads");
                }
            }
        }
    }

    hash_range_buffered(file, algorithm, offset, length, options.chunk_size)
}

/// [`hash_file_range_with`] with default [`Options`].
pub fn hash_file_range(
    file: &File,
    algorithm_name: &str,
    offset: u64,
    length: u64,
) -> Result<String> {
    hash_file_range_with(file, algorithm_name, offset, length, Options::new())
}

fn hash_range_buffered(
    mut file: &File,
    algorithm: Algorithm,
    offset: u64,
    length: u64,
    chunk_size: usize,
) -> Result<String> {
    file.seek(SeekFrom::Start(offset))?;

    let mut ctx = DigestContext::new(algorithm)?;
    let mut buf = vec![0u8; chunk_size.max(1)];
    let mut remaining = length;
    while remaining > 0 {
        let want = remaining.min(buf.len() as u64) as usize;
        let n = file.read(&mut buf[..want])?;
        if n == 0 {
            // Short file: hash whatever was there.
            break;
        }
        ctx.update(&buf[..n])?;
        remaining -= n as u64;
    }
    Ok(hex::encode(ctx.finalize()?))
}

/// Hash a byte range of the file at `path`.
///
/// `Ok(None)` means the path could not be opened — the "absent optional file"
/// outcome — so probing callers never mistake a missing file for a digest or
/// for a hard failure. Everything else that goes wrong is an error.
pub fn hash_path_range_with(
    path: impl AsRef<Path>,
    algorithm_name: &str,
    offset: u64,
    length: u64,
    options: Options,
) -> Result<Option<String>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "cannot open file, treating as absent");
            return Ok(None);
        }
    };
    hash_file_range_with(&file, algorithm_name, offset, length, options).map(Some)
}

/// [`hash_path_range_with`] with default [`Options`].
pub fn hash_path_range(
    path: impl AsRef<Path>,
    algorithm_name: &str,
    offset: u64,
    length: u64,
) -> Result<Option<String>> {
    hash_path_range_with(path, algorithm_name, offset, length, Options::new())
}

/// Hash a whole file by path. See [`hash_path_range_with`] for the absent
/// file behavior.
pub fn hash_path(path: impl AsRef<Path>, algorithm_name: &str) -> Result<Option<String>> {
    hash_path_range(path, algorithm_name, 0, 0)
}
