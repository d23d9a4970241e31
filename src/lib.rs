//! catr: an encoding-aware cat clone
//!
//! Reads one or more text files, sniffs each file's encoding before
//! opening it, and prints the decoded contents to stdout with optional
//! line numbering and end-of-line markers.

pub mod cli;
pub mod core;
