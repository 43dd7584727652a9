#![no_main]
use libfuzzer_sys::fuzz_target;
use utf8scan::{
    NulHandling, Options, Validation, count_codepoints_with, escape_bytes_to_json, scan_ascii,
    scan_ascii_scalar, validate_with,
};

fn check(data: &[u8]) {
    let options = Options {
        nul: NulHandling::Validate,
        ..Options::default()
    };

    // The validator must agree with core, down to the offset.
    let expected = match std::str::from_utf8(data) {
        Ok(_) => Validation::Valid,
        Err(e) => Validation::Invalid {
            offset: e.valid_up_to(),
        },
    };
    assert_eq!(validate_with(data, &options), expected, "data={data:?}");

    // The word-wide ASCII scan must be indistinguishable from the scalar one,
    // whatever the alignment of the slice.
    for start in 0..data.len().min(8) {
        assert_eq!(scan_ascii(&data[start..]), scan_ascii_scalar(&data[start..]));
    }

    let count = count_codepoints_with(data, &options);
    assert_eq!(count.well_formed, expected == Validation::Valid);

    if let Ok(text) = std::str::from_utf8(data) {
        assert_eq!(count.count, text.chars().count());
        let escaped = escape_bytes_to_json(data, &options);
        assert!(escaped.is_ascii());
    }
}

fuzz_target!(|data: &[u8]| check(data));
