use alloc::{boxed::Box, vec};
use core::fmt;

use bstr::BStr;

/// Fixed-length owned byte buffer with a trailing NUL.
///
/// This is the shape in which text crosses the host boundary: `len` payload
/// bytes followed by a terminator that is never part of the payload. The
/// length is fixed at creation; the storage is released on drop.
///
/// ```rust
/// use utf8scan::{HostBuffer, count_codepoints};
///
/// let buf = HostBuffer::from_bytes("h\u{e9}".as_bytes());
/// assert_eq!(buf.len(), 3);
/// assert_eq!(buf.as_bytes_with_nul(), b"h\xC3\xA9\0");
/// assert_eq!(count_codepoints(buf.as_bytes_with_nul()).count, 2);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct HostBuffer {
    /// Payload plus terminator; never empty.
    bytes: Box<[u8]>,
}

impl HostBuffer {
    /// Allocates a zero-filled buffer of `len` payload bytes.
    ///
    /// # Panics
    ///
    /// Panics if `len` is `usize::MAX`, leaving no room for the terminator.
    #[must_use]
    pub fn new(len: usize) -> Self {
        let with_nul = len
            .checked_add(1)
            .expect("HostBuffer length leaves no room for the terminator");
        Self {
            bytes: vec![0; with_nul].into_boxed_slice(),
        }
    }

    /// Allocates a buffer holding a copy of `data`.
    #[must_use]
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut buf = Self::new(data.len());
        buf.as_mut_bytes().copy_from_slice(data);
        buf
    }

    /// Number of payload bytes, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Whether the payload is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The payload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The payload followed by the terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// The payload, writable. The terminator stays out of reach.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.bytes[..len]
    }
}

impl From<&[u8]> for HostBuffer {
    fn from(data: &[u8]) -> Self {
        Self::from_bytes(data)
    }
}

impl From<&str> for HostBuffer {
    fn from(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }
}

impl fmt::Debug for HostBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBuffer")
            .field("len", &self.len())
            .field("bytes", &BStr::new(self.as_bytes()))
            .finish()
    }
}
