//! Full-buffer validation with precise failure offsets.
//!
//! ASCII runs are skipped with [`scan_ascii`]. Every other lead byte is looked
//! up in [`SEQUENCES`], which gives the sequence length and the legal range of
//! the first continuation byte (the only one the grammar ever restricts). The
//! remaining continuation bytes just have to be `80..BF`.
//!
//! On any failed check the cursor is left on the lead byte, so the reported
//! offset is the start of the offending sequence, never a byte inside or past
//! it. Truncation at the end of the buffer is reported the same way.

use crate::{ascii::scan_ascii, error::Utf8Error, options::NulHandling, options::Options};

/// Shape of a well-formed sequence starting with a given lead byte.
#[derive(Debug, Clone, Copy)]
struct Sequence {
    /// Total length including the lead byte; 0 if the byte cannot lead.
    len: u8,
    /// Inclusive range of the first continuation byte.
    first: (u8, u8),
}

const NEVER: Sequence = Sequence {
    len: 0,
    first: (0, 0),
};

const fn sequence(len: u8, lo: u8, hi: u8) -> Sequence {
    Sequence {
        len,
        first: (lo, hi),
    }
}

const SEQUENCES: [Sequence; 256] = {
    let mut table = [NEVER; 256];
    let mut byte = 0;
    while byte < 256 {
        #[allow(clippy::cast_possible_truncation)]
        let lead = byte as u8;
        table[byte] = match lead {
            0x00..=0x7F => sequence(1, 0, 0),
            0xC2..=0xDF | 0xE1..=0xEC | 0xEE..=0xEF | 0xF1..=0xF3 => {
                sequence(utf8_len(lead), 0x80, 0xBF)
            }
            0xE0 => sequence(3, 0xA0, 0xBF),
            0xED => sequence(3, 0x80, 0x9F),
            0xF0 => sequence(4, 0x90, 0xBF),
            0xF4 => sequence(4, 0x80, 0x8F),
            _ => NEVER,
        };
        byte += 1;
    }
    table
};

const fn utf8_len(lead: u8) -> u8 {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    }
}

#[inline]
const fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation {
    /// The buffer is well-formed UTF-8.
    Valid,
    /// The sequence starting at `offset` is malformed or truncated.
    Invalid {
        /// Byte index of the offending sequence's lead byte.
        offset: usize,
    },
}

impl Validation {
    /// Whether the buffer is well-formed.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Validation::Valid)
    }

    /// Offset of the first malformed sequence, if any.
    #[must_use]
    pub const fn offset(self) -> Option<usize> {
        match self {
            Validation::Valid => None,
            Validation::Invalid { offset } => Some(offset),
        }
    }

    /// Converts the outcome into a `Result` for use with `?`.
    ///
    /// # Errors
    ///
    /// Returns [`Utf8Error`] carrying the offset when the buffer is invalid.
    pub const fn into_result(self) -> Result<(), Utf8Error> {
        match self {
            Validation::Valid => Ok(()),
            Validation::Invalid { offset } => Err(Utf8Error { offset }),
        }
    }
}

/// Checks that `bytes` is well-formed UTF-8, stopping at the first NUL.
///
/// ```rust
/// use utf8scan::{Validation, validate};
///
/// assert!(validate(b"").is_valid());
/// assert!(validate("\u{20AC}".as_bytes()).is_valid());
/// // truncated four-byte sequence
/// assert_eq!(validate(&[0xF0, 0x90, 0x80]), Validation::Invalid { offset: 0 });
/// // an encoded surrogate
/// assert_eq!(validate(&[0xED, 0xA0, 0x80]), Validation::Invalid { offset: 0 });
/// ```
#[must_use]
pub fn validate(bytes: &[u8]) -> Validation {
    validate_with(bytes, &Options::default())
}

/// Checks that `bytes` is well-formed UTF-8 under `options`.
#[must_use]
pub fn validate_with(bytes: &[u8], options: &Options) -> Validation {
    let result = match first_invalid(bytes, options.nul) {
        None => Validation::Valid,
        Some(offset) => Validation::Invalid { offset },
    };
    if let Validation::Invalid { offset } = result {
        tracing::debug!(offset, len = bytes.len(), "invalid UTF-8");
    }
    result
}

fn first_invalid(bytes: &[u8], nul: NulHandling) -> Option<usize> {
    let len = bytes.len();
    let mut pos = 0;

    while pos < len {
        let lead = bytes[pos];
        if lead == 0 {
            match nul {
                NulHandling::Terminate => return None,
                NulHandling::Validate => {
                    pos += 1;
                    continue;
                }
            }
        }
        if lead < 0x80 {
            pos += scan_ascii(&bytes[pos..]);
            continue;
        }

        let Sequence {
            len: seq_len,
            first: (lo, hi),
        } = SEQUENCES[usize::from(lead)];
        let seq_len = usize::from(seq_len);
        if seq_len == 0 || len - pos < seq_len {
            return Some(pos);
        }
        let second = bytes[pos + 1];
        if second < lo || second > hi {
            return Some(pos);
        }
        if !bytes[pos + 2..pos + seq_len].iter().all(|&b| is_continuation(b)) {
            return Some(pos);
        }
        pos += seq_len;
    }

    None
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    use super::*;
    use crate::decoder::Decoder;

    #[rstest]
    #[case::empty(b"", Validation::Valid)]
    #[case::ascii(b"AB", Validation::Valid)]
    #[case::bad_continuation(b"\xC3\x28", Validation::Invalid { offset: 0 })]
    #[case::euro(b"\xE2\x82\xAC", Validation::Valid)]
    #[case::truncated_four(b"\xF0\x90\x80", Validation::Invalid { offset: 0 })]
    #[case::surrogate(b"\xED\xA0\x80", Validation::Invalid { offset: 0 })]
    #[case::after_ascii(b"abc\xC3\x28", Validation::Invalid { offset: 3 })]
    #[case::after_multibyte(b"\xC3\xA9\xE2\x82\xAC\xFF", Validation::Invalid { offset: 5 })]
    #[case::lone_continuation(b"a\x80", Validation::Invalid { offset: 1 })]
    #[case::overlong_c0(b"\xC0\xAF", Validation::Invalid { offset: 0 })]
    #[case::overlong_e0(b"\xE0\x80\xAF", Validation::Invalid { offset: 0 })]
    #[case::overlong_f0(b"\xF0\x80\x80\xAF", Validation::Invalid { offset: 0 })]
    #[case::above_max(b"\xF4\x90\x80\x80", Validation::Invalid { offset: 0 })]
    #[case::f5(b"\xF5\x80\x80\x80", Validation::Invalid { offset: 0 })]
    #[case::third_byte_bad(b"xx\xE2\x82\x41", Validation::Invalid { offset: 2 })]
    #[case::fourth_byte_bad(b"\xF0\x9D\x84\x41", Validation::Invalid { offset: 0 })]
    #[case::max(b"\xF4\x8F\xBF\xBF", Validation::Valid)]
    #[case::truncated_at_end(b"ok\xE2\x82", Validation::Invalid { offset: 2 })]
    #[case::nul_terminates(b"ok\0\xFF", Validation::Valid)]
    #[case::nul_inside_sequence(b"\xC3\0", Validation::Invalid { offset: 0 })]
    fn validates(#[case] input: &[u8], #[case] expected: Validation) {
        assert_eq!(validate(input), expected);
    }

    #[rstest]
    #[case(b"ok\0\xFF", Validation::Invalid { offset: 3 })]
    #[case(b"\0\0\0", Validation::Valid)]
    #[case(b"\0\xC3\xA9\0", Validation::Valid)]
    fn nul_validated_through_when_configured(#[case] input: &[u8], #[case] expected: Validation) {
        let options = Options {
            nul: NulHandling::Validate,
            ..Options::default()
        };
        assert_eq!(validate_with(input, &options), expected);
    }

    #[test]
    fn lead_table_covers_the_unicode_grammar() {
        for lead in 0u8..=0xFF {
            let seq = SEQUENCES[usize::from(lead)];
            let expected_len = match lead {
                0x00..=0x7F => 1,
                0xC2..=0xDF => 2,
                0xE0..=0xEF => 3,
                0xF0..=0xF4 => 4,
                _ => 0,
            };
            assert_eq!(usize::from(seq.len), expected_len, "lead {lead:#04X}");
        }
        assert_eq!(SEQUENCES[0xE0].first, (0xA0, 0xBF));
        assert_eq!(SEQUENCES[0xED].first, (0x80, 0x9F));
        assert_eq!(SEQUENCES[0xF0].first, (0x90, 0xBF));
        assert_eq!(SEQUENCES[0xF4].first, (0x80, 0x8F));
    }

    #[test]
    fn into_result_carries_offset() {
        assert_eq!(validate(b"fine").into_result(), Ok(()));
        assert_eq!(
            validate(b"bad \xFF").into_result(),
            Err(Utf8Error { offset: 4 })
        );
        assert_eq!(validate(b"bad \xFF").offset(), Some(4));
        assert_eq!(validate(b"fine").offset(), None);
    }

    fn decoder_accepts(bytes: &[u8]) -> bool {
        let mut decoder = Decoder::new();
        for &b in bytes {
            decoder.feed(b);
        }
        decoder.is_accept()
    }

    #[quickcheck]
    fn agrees_with_decoder_when_nul_is_ordinary(bytes: Vec<u8>) -> bool {
        let options = Options {
            nul: NulHandling::Validate,
            ..Options::default()
        };
        validate_with(&bytes, &options).is_valid() == decoder_accepts(&bytes)
    }

    #[quickcheck]
    fn offset_is_where_core_stops(bytes: Vec<u8>) -> bool {
        let options = Options {
            nul: NulHandling::Validate,
            ..Options::default()
        };
        let expected = core::str::from_utf8(&bytes).err().map(|e| e.valid_up_to());
        validate_with(&bytes, &options).offset() == expected
    }

    #[quickcheck]
    fn prefix_before_offset_is_valid(bytes: Vec<u8>) -> bool {
        match validate(&bytes) {
            Validation::Valid => true,
            Validation::Invalid { offset } => {
                offset < bytes.len() && validate(&bytes[..offset]).is_valid()
            }
        }
    }
}
