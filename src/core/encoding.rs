//! Encoding detection for input files
//!
//! A short prefix of the file is enough for the detector: a byte-order
//! mark settles the question immediately, and otherwise the prefix is
//! handed to chardetng's statistical detector.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

use crate::core::reader::ReadError;

/// Number of bytes sniffed from the start of a file.
pub const SNIFF_LEN: usize = 24;

/// Guess the text encoding of the file at `path`.
///
/// The file is opened, its first [`SNIFF_LEN`] bytes are read, and the
/// handle is dropped again before the caller reopens the file for the
/// actual decode pass.
pub fn detect(path: &Path) -> Result<&'static Encoding, ReadError> {
    let mut file = File::open(path).map_err(|e| ReadError::from_io(path, e))?;
    let mut prefix = [0u8; SNIFF_LEN];
    let mut filled = 0;
    while filled < SNIFF_LEN {
        let n = file
            .read(&mut prefix[filled..])
            .map_err(|e| ReadError::from_io(path, e))?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(sniff(&prefix[..filled]))
}

/// Guess the encoding of a byte prefix.
pub fn sniff(prefix: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(prefix) {
        return encoding;
    }
    let mut detector = EncodingDetector::new();
    detector.feed(prefix, true);
    detector.guess(None, true)
}
