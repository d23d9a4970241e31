//! Chunked decoding reader
//!
//! Opens a file with its sniffed encoding and yields the contents as
//! decoded text chunks. The decoder is stateful, so multi-byte sequences
//! that straddle a chunk boundary come out intact.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use encoding_rs::{Decoder, Encoding};
use thiserror::Error;

use crate::core::encoding;

/// Number of raw bytes read per chunk.
pub const CHUNK_SIZE: usize = 1024;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ReadError {
    pub(crate) fn from_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            ReadError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ReadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// A file being streamed through an [`encoding_rs::Decoder`].
///
/// The file handle is the only resource held; it closes on drop.
pub struct EncodedReader {
    path: PathBuf,
    file: File,
    decoder: Decoder,
    buf: [u8; CHUNK_SIZE],
    eof: bool,
}

impl std::fmt::Debug for EncodedReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncodedReader")
            .field("path", &self.path)
            .field("file", &self.file)
            .field("encoding", &self.decoder.encoding())
            .field("eof", &self.eof)
            .finish_non_exhaustive()
    }
}

impl EncodedReader {
    /// Sniff the encoding of the file at `path` and open it for decoding.
    pub fn open(path: &Path) -> Result<Self, ReadError> {
        let encoding = encoding::detect(path)?;
        let file = File::open(path).map_err(|e| ReadError::from_io(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
            decoder: encoding.new_decoder(),
            buf: [0; CHUNK_SIZE],
            eof: false,
        })
    }

    /// The encoding the sniffer settled on.
    pub fn encoding(&self) -> &'static Encoding {
        self.decoder.encoding()
    }

    /// Read and decode the next chunk. Returns `None` once the file is
    /// exhausted.
    pub fn next_chunk(&mut self) -> Result<Option<String>, ReadError> {
        loop {
            if self.eof {
                return Ok(None);
            }
            let n = self
                .file
                .read(&mut self.buf)
                .map_err(|e| ReadError::from_io(&self.path, e))?;
            let last = n == 0;
            // Sized so decode_to_string always consumes the whole input.
            let mut decoded = String::with_capacity(
                self.decoder
                    .max_utf8_buffer_length(n)
                    .unwrap_or(CHUNK_SIZE * 3),
            );
            let (_result, _read, _had_errors) =
                self.decoder.decode_to_string(&self.buf[..n], &mut decoded, last);
            if last {
                self.eof = true;
            }
            if decoded.is_empty() {
                if last {
                    return Ok(None);
                }
                // Every byte went into decoder state (split sequence).
                continue;
            }
            return Ok(Some(decoded));
        }
    }
}
