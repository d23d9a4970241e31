//! Core module - encoding sniffing, chunked reading, line formatting

pub mod encoding;
pub mod printer;
pub mod reader;

pub use printer::LinePrinter;
pub use reader::{EncodedReader, ReadError, CHUNK_SIZE};
