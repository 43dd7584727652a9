//! Table-driven UTF-8 decoder.
//!
//! A deterministic automaton over nine states: [`State::ACCEPT`],
//! [`State::REJECT`] and seven states for "continuation bytes still owed,
//! possibly restricted to a sub-range". Each input byte is first mapped to one
//! of twelve classes; the class and the current state select the next state
//! from [`TRANSITIONS`]. The grammar lives entirely in the two tables.
//!
//! | class | bytes                 | meaning                                  |
//! |-------|-----------------------|------------------------------------------|
//! | 0     | `00..7F`              | ASCII                                    |
//! | 1     | `80..8F`              | continuation, low quarter                |
//! | 2     | `C2..DF`              | lead of a 2-byte sequence                |
//! | 3     | `E1..EC`, `EE..EF`    | lead of an unrestricted 3-byte sequence  |
//! | 4     | `ED`                  | lead, next byte `80..9F` (no surrogates) |
//! | 5     | `F4`                  | lead, next byte `80..8F` (max U+10FFFF)  |
//! | 6     | `F1..F3`              | lead of an unrestricted 4-byte sequence  |
//! | 7     | `A0..BF`              | continuation, upper half                 |
//! | 8     | `C0`, `C1`, `F5..FF`  | never valid                              |
//! | 9     | `90..9F`              | continuation, second quarter             |
//! | 10    | `E0`                  | lead, next byte `A0..BF` (no overlongs)  |
//! | 11    | `F0`                  | lead, next byte `90..BF` (no overlongs)  |
//!
//! The reject state is absorbing. Resuming after an error means starting again
//! from [`State::ACCEPT`]; the decoder never recovers on its own.

const CLASSES: usize = 12;
const STATES: usize = 9;

/// Byte class for every possible input byte.
#[rustfmt::skip]
const BYTE_CLASS: [u8; 256] = [
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, // 00..1F
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, // 20..3F
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, // 40..5F
    0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0, // 60..7F
    1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9, // 80..9F
    7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7, // A0..BF
    8,8,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2, // C0..DF
    10,3,3,3,3,3,3,3,3,3,3,3,3,4,3,3,                                 // E0..EF
    11,6,6,6,5,8,8,8,8,8,8,8,8,8,8,8,                                 // F0..FF
];

/// Next state, indexed by `state * CLASSES + class`.
///
/// States: 0 accept, 1 reject, 2 one byte owed, 3 two owed, 4 two owed after
/// `E0`, 5 two owed after `ED`, 6 three owed after `F0`, 7 three owed,
/// 8 three owed after `F4`.
#[rustfmt::skip]
const TRANSITIONS: [u8; STATES * CLASSES] = [
//  0  1  2  3  4  5  6  7  8  9 10 11   class
    0, 1, 2, 3, 5, 8, 7, 1, 1, 1, 4, 6, // accept
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // reject
    1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1, 1, // 1 owed
    1, 2, 1, 1, 1, 1, 1, 2, 1, 2, 1, 1, // 2 owed
    1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, // 2 owed, A0..BF
    1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, 1, // 2 owed, 80..9F
    1, 1, 1, 1, 1, 1, 1, 3, 1, 3, 1, 1, // 3 owed, 90..BF
    1, 3, 1, 1, 1, 1, 1, 3, 1, 3, 1, 1, // 3 owed
    1, 3, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, // 3 owed, 80..8F
];

/// Decoder state threaded between calls to [`decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State(u8);

impl State {
    /// No sequence is pending; the last byte completed a code point.
    pub const ACCEPT: State = State(0);
    /// The input is malformed. Absorbing.
    pub const REJECT: State = State(1);

    /// Whether no partial sequence is pending.
    #[must_use]
    pub const fn is_accept(self) -> bool {
        self.0 == Self::ACCEPT.0
    }

    /// Whether the input seen so far is malformed.
    #[must_use]
    pub const fn is_reject(self) -> bool {
        self.0 == Self::REJECT.0
    }
}

impl Default for State {
    fn default() -> Self {
        Self::ACCEPT
    }
}

/// Feeds one byte to the automaton.
///
/// Returns the next state and the partially assembled code point. When the
/// returned state is [`State::ACCEPT`] the code point is complete. A lead byte
/// contributes the payload bits its class leaves unmasked; a continuation byte
/// always contributes six.
///
/// ```rust
/// use utf8scan::{State, decode};
///
/// let (state, cp) = decode(State::ACCEPT, 0, 0xE2);
/// let (state, cp) = decode(state, cp, 0x82);
/// let (state, cp) = decode(state, cp, 0xAC);
/// assert_eq!((state, cp), (State::ACCEPT, 0x20AC));
/// ```
#[inline]
#[must_use]
pub const fn decode(state: State, codepoint: u32, byte: u8) -> (State, u32) {
    let class = BYTE_CLASS[byte as usize];
    let codepoint = if state.is_accept() {
        (0xFF >> class) & byte as u32
    } else {
        (byte as u32 & 0x3F) | (codepoint << 6)
    };
    let next = TRANSITIONS[state.0 as usize * CLASSES + class as usize];
    (State(next), codepoint)
}

/// Incremental wrapper around [`decode`] that owns its state.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    state: State,
    codepoint: u32,
}

impl Decoder {
    /// Creates a decoder in the accept state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one byte. Returns the code point it completes, if any.
    pub fn feed(&mut self, byte: u8) -> Option<u32> {
        let (state, codepoint) = decode(self.state, self.codepoint, byte);
        self.state = state;
        self.codepoint = codepoint;
        state.is_accept().then_some(codepoint)
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Whether the bytes fed so far form complete, well-formed UTF-8.
    #[must_use]
    pub fn is_accept(&self) -> bool {
        self.state.is_accept()
    }

    /// Whether the bytes fed so far are malformed.
    #[must_use]
    pub fn is_reject(&self) -> bool {
        self.state.is_reject()
    }

    /// Returns to the accept state, dropping any partial sequence.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
