use alloc::{string::String, vec::Vec};
use std::thread;

use crate::{Validation, count_codepoints, escape_to_json, validate};

#[test]
fn independent_buffers_validate_in_parallel() {
    let inputs: Vec<String> = (0..8)
        .map(|i| {
            let mut s = String::new();
            for _ in 0..1_000 {
                s.push_str("plain ascii, ");
                s.push(char::from_u32(0x100 + i).unwrap_or('?'));
                s.push('\u{1F600}');
            }
            s
        })
        .collect();

    thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .iter()
            .map(|text| {
                scope.spawn(move || {
                    (
                        validate(text.as_bytes()),
                        count_codepoints(text.as_bytes()).count,
                        escape_to_json(text).is_ascii(),
                    )
                })
            })
            .collect();
        for (handle, text) in handles.into_iter().zip(&inputs) {
            let (validation, count, ascii) = handle.join().unwrap();
            assert_eq!(validation, Validation::Valid);
            assert_eq!(count, text.chars().count());
            assert!(ascii);
        }
    });
}
