//! Byte-for-byte file comparison and diff generation
//!
//! The disposition of a file pair depends only on content. Size is used
//! as a fast path (differing sizes cannot have identical bytes), never
//! modification time.

mod diff;

pub use diff::DiffGenerator;

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::Context;

use crate::error::Result;

const CHUNK_SIZE: usize = 8192;

/// Streaming file comparator
pub struct FileComparator;

impl FileComparator {
    /// Compare two files byte for byte
    ///
    /// # Errors
    ///
    /// Returns an error if either file cannot be opened or read.
    pub fn identical(a: &Path, b: &Path) -> Result<bool> {
        let len_a = fs::metadata(a)
            .with_context(|| format!("Failed to stat {}", a.display()))?
            .len();
        let len_b = fs::metadata(b)
            .with_context(|| format!("Failed to stat {}", b.display()))?
            .len();

        if len_a != len_b {
            return Ok(false);
        }

        let mut reader_a = BufReader::new(
            File::open(a).with_context(|| format!("Failed to open {}", a.display()))?,
        );
        let mut reader_b = BufReader::new(
            File::open(b).with_context(|| format!("Failed to open {}", b.display()))?,
        );

        let mut chunk_a = [0u8; CHUNK_SIZE];
        let mut chunk_b = [0u8; CHUNK_SIZE];

        loop {
            let read_a = read_chunk(&mut reader_a, &mut chunk_a)
                .with_context(|| format!("Failed to read {}", a.display()))?;
            let read_b = read_chunk(&mut reader_b, &mut chunk_b)
                .with_context(|| format!("Failed to read {}", b.display()))?;

            if read_a != read_b || chunk_a[..read_a] != chunk_b[..read_b] {
                return Ok(false);
            }
            if read_a == 0 {
                return Ok(true);
            }
        }
    }
}

/// Fill as much of the buffer as the reader allows; 0 means EOF
fn read_chunk(reader: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;

    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }

    Ok(filled)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use filetime::FileTime;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_identical_files() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.rs");
        let b = tmp.path().join("b.rs");

        fs::write(&a, "same content").unwrap();
        fs::write(&b, "same content").unwrap();

        assert!(FileComparator::identical(&a, &b).unwrap());
    }

    #[test]
    fn test_different_files_same_size() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.rs");
        let b = tmp.path().join("b.rs");

        fs::write(&a, "content 1").unwrap();
        fs::write(&b, "content 2").unwrap();

        assert!(!FileComparator::identical(&a, &b).unwrap());
    }

    #[test]
    fn test_different_sizes() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.rs");
        let b = tmp.path().join("b.rs");

        fs::write(&a, "short").unwrap();
        fs::write(&b, "much longer content").unwrap();

        assert!(!FileComparator::identical(&a, &b).unwrap());
    }

    #[test]
    fn test_mtime_does_not_affect_verdict() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.rs");
        let b = tmp.path().join("b.rs");

        fs::write(&a, "same content").unwrap();
        fs::write(&b, "same content").unwrap();
        filetime::set_file_mtime(&b, FileTime::from_unix_time(1_000_000, 0)).unwrap();

        assert!(FileComparator::identical(&a, &b).unwrap());
    }

    #[test]
    fn test_empty_files_are_identical() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.rs");
        let b = tmp.path().join("b.rs");

        fs::write(&a, "").unwrap();
        fs::write(&b, "").unwrap();

        assert!(FileComparator::identical(&a, &b).unwrap());
    }

    #[test]
    fn test_large_files_beyond_one_chunk() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.bin");
        let b = tmp.path().join("b.bin");

        let mut content = vec![0xAB_u8; CHUNK_SIZE * 3 + 17];
        fs::write(&a, &content).unwrap();
        // Flip a byte in the last partial chunk
        let last = content.len() - 1;
        content[last] = 0xCD;
        fs::write(&b, &content).unwrap();

        assert!(!FileComparator::identical(&a, &b).unwrap());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.rs");
        fs::write(&a, "x").unwrap();

        let result = FileComparator::identical(&a, &tmp.path().join("missing.rs"));
        assert!(result.is_err());
    }
}
