//! Bounds-exact UTF-8 validation for JSON text of unknown provenance.
//!
//! The crate answers three questions about a byte buffer:
//!
//! - is it well-formed UTF-8, and if not, where does the first malformed
//!   sequence start ([`validate`]);
//! - how many code points does it hold ([`count_codepoints`]);
//! - what does it look like with every non-ASCII code point written as a JSON
//!   `\uXXXX` escape ([`escape_to_json`]).
//!
//! ```rust
//! use utf8scan::{Validation, count_codepoints, escape_to_json, validate};
//!
//! assert_eq!(validate("AB".as_bytes()), Validation::Valid);
//! assert_eq!(validate(&[0xC3, 0x28]), Validation::Invalid { offset: 0 });
//! assert_eq!(count_codepoints("h\u{e9}llo".as_bytes()).count, 5);
//! assert_eq!(escape_to_json("\u{20AC}"), "\\u20AC");
//! ```
//!
//! All operations are pure functions of their input: nothing is cached and
//! nothing is shared between calls, so any number of threads may validate
//! independent buffers at once.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod ascii;
mod buffer;
mod count;
mod decoder;
mod document;
mod error;
mod escape;
mod options;
mod validator;

#[cfg(test)]
mod tests;

pub use ascii::{scan_ascii, scan_ascii_scalar};
pub use buffer::HostBuffer;
pub use count::{CodepointCount, count_codepoints, count_codepoints_with};
pub use decoder::{Decoder, State, decode};
pub use document::{DocumentEmitter, check_document, strip_document_marker, transform_document};
pub use error::{CheckError, ParseFailure, Utf8Error};
pub use escape::{escape_bytes_to_json, escape_to_json};
pub use options::{AstralEscape, NulHandling, Options};
pub use validator::{Validation, validate, validate_with};
