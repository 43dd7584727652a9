use alloc::string::String;

use thiserror::Error;

/// The first malformed or truncated sequence in a buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid UTF-8 character in JSON at offset {offset}")]
pub struct Utf8Error {
    /// Byte index of the lead byte of the offending sequence.
    pub offset: usize,
}

/// A parse failure reported by a [`DocumentEmitter`](crate::DocumentEmitter).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} at line {line} column {column} offset {offset}")]
pub struct ParseFailure {
    /// Human readable description from the parser.
    pub message: String,
    /// Line of the failure.
    pub line: usize,
    /// Column of the failure.
    pub column: usize,
    /// Byte offset of the failure in the parsed document.
    pub offset: usize,
}

/// Why a document was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The document could not be parsed.
    #[error("{0}")]
    Parse(#[from] ParseFailure),
    /// The re-serialized document is not well-formed UTF-8.
    #[error("{0}")]
    Encoding(#[from] Utf8Error),
}
