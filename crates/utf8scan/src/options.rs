/// Configuration shared by validation, counting and escaping.
///
/// # Examples
///
/// ```rust
/// use utf8scan::{NulHandling, Options, Validation, validate_with};
///
/// let options = Options {
///     nul: NulHandling::Validate,
///     ..Default::default()
/// };
/// // With `Validate`, bytes after a NUL are still inspected.
/// assert_eq!(
///     validate_with(b"ok\0\xFF", &options),
///     Validation::Invalid { offset: 3 }
/// );
/// ```
///
/// # Default
///
/// Terminates at the first NUL, escapes astral code points as surrogate pairs
/// and passes all ASCII through unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Options {
    /// How a `0x00` byte is treated.
    ///
    /// # Default
    ///
    /// [`NulHandling::Terminate`]
    pub nul: NulHandling,

    /// How code points above U+FFFF are escaped.
    ///
    /// # Default
    ///
    /// [`AstralEscape::SurrogatePair`]
    pub astral: AstralEscape,

    /// Whether to also escape `"`, `\` and control characters below U+0020.
    ///
    /// Leave this off when escaping a whole serialized JSON document (its
    /// quotes are structural). Turn it on when escaping the contents of a
    /// single string value.
    ///
    /// # Default
    ///
    /// `false`
    pub escape_json_specials: bool,
}

impl Options {
    /// The exact behavior of the historical host: terminate at NUL, keep only
    /// the low 16 bits of astral code points, no special-character escaping.
    #[must_use]
    pub const fn legacy() -> Self {
        Self {
            nul: NulHandling::Terminate,
            astral: AstralEscape::Truncate,
            escape_json_specials: false,
        }
    }

    /// Returns the bytes an operation should look at under this
    /// configuration.
    pub(crate) fn effective<'a>(&self, bytes: &'a [u8]) -> &'a [u8] {
        match self.nul {
            NulHandling::Terminate => match bytes.iter().position(|&b| b == 0) {
                Some(end) => &bytes[..end],
                None => bytes,
            },
            NulHandling::Validate => bytes,
        }
    }
}

/// Treatment of `0x00` bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NulHandling {
    /// The first NUL ends the string; nothing after it is inspected.
    #[default]
    Terminate,
    /// NUL is an ordinary code point.
    Validate,
}

/// Rendering of code points above U+FFFF by the JSON escaper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AstralEscape {
    /// `\uD834\uDD1E` for U+1D11E: a UTF-16 surrogate pair, valid JSON.
    #[default]
    SurrogatePair,
    /// `\uD11E` for U+1D11E: only the low 16 bits. Lossy; kept for
    /// byte-compatible output.
    Truncate,
}
