use crate::{decoder::Decoder, options::Options};

/// Result of [`count_codepoints`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CodepointCount {
    /// Number of complete code points decoded.
    pub count: usize,
    /// Whether the decoder ended in the accept state.
    pub well_formed: bool,
}

/// Counts the code points in `bytes`, stopping at the first NUL.
///
/// Once the input turns malformed no further code points are counted.
///
/// ```rust
/// use utf8scan::{CodepointCount, count_codepoints};
///
/// assert_eq!(
///     count_codepoints("\u{e1}rv\u{ed}z".as_bytes()),
///     CodepointCount { count: 5, well_formed: true }
/// );
/// assert_eq!(
///     count_codepoints(b""),
///     CodepointCount { count: 0, well_formed: true }
/// );
/// ```
#[must_use]
pub fn count_codepoints(bytes: &[u8]) -> CodepointCount {
    count_codepoints_with(bytes, &Options::default())
}

/// Counts the code points in `bytes` under `options`.
#[must_use]
pub fn count_codepoints_with(bytes: &[u8], options: &Options) -> CodepointCount {
    let mut decoder = Decoder::new();
    let count = options
        .effective(bytes)
        .iter()
        .filter(|&&b| decoder.feed(b).is_some())
        .count();
    CodepointCount {
        count,
        well_formed: decoder.is_accept(),
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use quickcheck_macros::quickcheck;
    use rstest::rstest;

    use super::*;
    use crate::options::NulHandling;

    #[rstest]
    #[case::empty(b"", 0, true)]
    #[case::ascii(b"AB", 2, true)]
    #[case::mixed(b"a\xC3\xA9\xE2\x82\xAC\xF0\x9D\x84\x9E", 4, true)]
    #[case::stops_at_nul(b"ab\0cd", 2, true)]
    #[case::truncated(b"ab\xE2\x82", 2, false)]
    #[case::reject_stops_counting(b"a\xFFbc", 1, false)]
    fn counts(#[case] input: &[u8], #[case] count: usize, #[case] well_formed: bool) {
        assert_eq!(
            count_codepoints(input),
            CodepointCount { count, well_formed }
        );
    }

    #[test]
    fn nul_counted_when_configured() {
        let options = Options {
            nul: NulHandling::Validate,
            ..Options::default()
        };
        assert_eq!(
            count_codepoints_with(b"ab\0cd", &options),
            CodepointCount {
                count: 5,
                well_formed: true
            }
        );
    }

    #[quickcheck]
    fn matches_char_count(text: String) -> bool {
        let text: String = text.chars().filter(|&c| c != '\0').collect();
        count_codepoints(text.as_bytes())
            == CodepointCount {
                count: text.chars().count(),
                well_formed: true,
            }
    }

    #[quickcheck]
    fn well_formedness_matches_validation_without_nul(bytes: Vec<u8>) -> bool {
        let bytes: Vec<u8> = bytes.into_iter().filter(|&b| b != 0).collect();
        count_codepoints(&bytes).well_formed == crate::validate(&bytes).is_valid()
    }

    #[test]
    fn every_bmp_code_point_counts_once() {
        let mut buf = [0u8; 4];
        for c in (0x01..=0xFFFF).filter_map(char::from_u32) {
            let encoded = c.encode_utf8(&mut buf);
            assert_eq!(
                count_codepoints(encoded.as_bytes()),
                CodepointCount {
                    count: 1,
                    well_formed: true
                },
                "U+{:04X}",
                u32::from(c)
            );
        }
    }
}
