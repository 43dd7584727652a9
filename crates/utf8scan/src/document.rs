//! Checking and converting documents that an external parser re-serializes
//! to JSON.
//!
//! Parsing is delegated to a [`DocumentEmitter`]. A failed parse comes back
//! as an ordinary [`ParseFailure`] value and travels up as
//! [`CheckError::Parse`]; the emitted JSON is then validated here, and a
//! malformed byte travels up as [`CheckError::Encoding`] carrying an offset
//! into the emitted JSON.

use alloc::{string::String, vec::Vec};

use crate::{
    error::{CheckError, ParseFailure},
    escape::escape_bytes_to_json,
    options::Options,
    validator::validate_with,
};

const DOCUMENT_MARKER: &[u8] = b"---";

/// Parses a document and re-serializes it as JSON text.
pub trait DocumentEmitter {
    /// Returns the JSON rendering of `document`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseFailure`] locating the first syntax error.
    fn emit_json(&mut self, document: &[u8]) -> Result<Vec<u8>, ParseFailure>;
}

impl<F> DocumentEmitter for F
where
    F: FnMut(&[u8]) -> Result<Vec<u8>, ParseFailure>,
{
    fn emit_json(&mut self, document: &[u8]) -> Result<Vec<u8>, ParseFailure> {
        self(document)
    }
}

/// Drops a leading `---` start-of-document marker.
///
/// The marker alone (exactly three bytes) is left as is.
///
/// ```rust
/// use utf8scan::strip_document_marker;
///
/// assert_eq!(strip_document_marker(b"--- !tag\na: 1"), b" !tag\na: 1");
/// assert_eq!(strip_document_marker(b"---"), b"---");
/// assert_eq!(strip_document_marker(b"a: 1"), b"a: 1");
/// ```
#[must_use]
pub fn strip_document_marker(input: &[u8]) -> &[u8] {
    match input.strip_prefix(DOCUMENT_MARKER) {
        Some(rest) if !rest.is_empty() => rest,
        _ => input,
    }
}

/// Parses `input` and verifies that its JSON rendering is well-formed UTF-8.
///
/// # Errors
///
/// [`CheckError::Parse`] if the emitter rejects the document,
/// [`CheckError::Encoding`] if the emitted JSON is malformed.
pub fn check_document<E>(emitter: &mut E, input: &[u8]) -> Result<(), CheckError>
where
    E: DocumentEmitter + ?Sized,
{
    emit_validated(emitter, input, &Options::default()).map(drop)
}

/// Parses `input` and returns its JSON rendering with every non-ASCII code
/// point escaped.
///
/// # Errors
///
/// As [`check_document`].
pub fn transform_document<E>(
    emitter: &mut E,
    input: &[u8],
    options: &Options,
) -> Result<String, CheckError>
where
    E: DocumentEmitter + ?Sized,
{
    let json = emit_validated(emitter, input, options)?;
    let escaped = escape_bytes_to_json(&json, options);
    tracing::trace!(
        input_len = input.len(),
        json_len = json.len(),
        escaped_len = escaped.len(),
        "document transformed"
    );
    Ok(escaped)
}

fn emit_validated<E>(
    emitter: &mut E,
    input: &[u8],
    options: &Options,
) -> Result<Vec<u8>, CheckError>
where
    E: DocumentEmitter + ?Sized,
{
    let json = emitter
        .emit_json(strip_document_marker(input))
        .inspect_err(|failure| {
            tracing::debug!(
                line = failure.line,
                column = failure.column,
                offset = failure.offset,
                "document rejected by parser"
            );
        })?;

    validate_with(&json, options).into_result().inspect_err(|err| {
        tracing::debug!(offset = err.offset, "document rejected: emitted JSON is not UTF-8");
    })?;

    Ok(json)
}
