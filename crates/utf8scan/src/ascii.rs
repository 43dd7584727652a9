//! Skipping runs of printable 7-bit bytes.
//!
//! A run ends at the first byte that is either `0x00` (the host's end of
//! string) or `>= 0x80` (the start of a multi-byte sequence or garbage). Both
//! entry points return the length of the run; callers add it to their cursor.
//!
//! With the `word-scan` feature, [`scan_ascii`] tests a pair of machine words
//! per step once the cursor is word aligned. A word `w` holds only bytes in
//! `1..=0x7F` iff `((w - LOW_BITS) | w) & HIGH_BITS == 0`. The test may flag a
//! word that is in fact clean (a borrow can only be produced by a zero byte,
//! which stops the run anyway), and on a flag the flagged words are walked byte
//! by byte, so the result is always identical to [`scan_ascii_scalar`].

#[cfg(feature = "word-scan")]
const WORD: usize = size_of::<usize>();

/// The low bit of every byte: `0x0101…01`.
#[cfg(feature = "word-scan")]
const LOW_BITS: usize = usize::MAX / 0xFF;

/// The high bit of every byte: `0x8080…80`.
#[cfg(feature = "word-scan")]
const HIGH_BITS: usize = LOW_BITS << 7;

#[inline]
const fn ends_run(byte: u8) -> bool {
    byte == 0 || byte >= 0x80
}

#[cfg(feature = "word-scan")]
#[inline]
const fn word_is_ascii(word: usize) -> bool {
    (word.wrapping_sub(LOW_BITS) | word) & HIGH_BITS == 0
}

#[cfg(feature = "word-scan")]
#[inline]
fn load_word(chunk: &[u8]) -> usize {
    let mut word = [0u8; WORD];
    word.copy_from_slice(chunk);
    usize::from_ne_bytes(word)
}

/// Returns the length of the leading run of bytes in `1..=0x7F`, one byte at a
/// time.
#[must_use]
pub fn scan_ascii_scalar(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|&b| ends_run(b))
        .unwrap_or(bytes.len())
}

/// Returns the length of the leading run of bytes in `1..=0x7F`.
///
/// Observably identical to [`scan_ascii_scalar`]; with the `word-scan` feature
/// it consumes aligned input two machine words at a time.
///
/// ```rust
/// use utf8scan::scan_ascii;
///
/// assert_eq!(scan_ascii(b"plain ascii"), 11);
/// assert_eq!(scan_ascii(b"caf\xC3\xA9"), 3);
/// assert_eq!(scan_ascii(b"\0after nul"), 0);
/// ```
#[cfg(feature = "word-scan")]
#[must_use]
pub fn scan_ascii(bytes: &[u8]) -> usize {
    let head = bytes.as_ptr().align_offset(WORD).min(bytes.len());
    let mut pos = scan_ascii_scalar(&bytes[..head]);
    if pos < head {
        return pos;
    }

    for pair in bytes[head..].chunks_exact(2 * WORD) {
        let (lo, hi) = pair.split_at(WORD);
        if !word_is_ascii(load_word(lo)) || !word_is_ascii(load_word(hi)) {
            break;
        }
        pos += 2 * WORD;
    }

    pos + scan_ascii_scalar(&bytes[pos..])
}

/// Returns the length of the leading run of bytes in `1..=0x7F`.
#[cfg(not(feature = "word-scan"))]
#[must_use]
#[inline]
pub fn scan_ascii(bytes: &[u8]) -> usize {
    scan_ascii_scalar(bytes)
}
