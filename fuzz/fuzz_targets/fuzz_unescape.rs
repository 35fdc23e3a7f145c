#![no_main]

use arbitrary::Arbitrary;
use jsontext::{
    probe_escaping, transcode_utf16, transcoding_details, unescape_utf8, unescaped_eq,
};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    view: &'a [u8],
    escaped_hint: bool,
    candidate: &'a [u8],
}

fuzz_target!(|input: Input| {
    let Input {
        view,
        escaped_hint,
        candidate,
    } = input;

    let probe = probe_escaping(view, escaped_hint);
    if let Some(i) = probe.first_escape {
        assert_eq!(view[i], b'\\');
        assert_eq!(probe.min_unescaped_len, view.len());
    }

    // The probed size never under-allocates: with a correctly sized
    // destination, unescaping either succeeds within bounds or rejects the
    // input as malformed; it never reports a short destination.
    let mut bytes = vec![0u8; view.len()];
    match unescape_utf8(view, probe.first_escape, &mut bytes) {
        Ok(n) => {
            assert!(n <= view.len());
            assert_eq!(
                unescaped_eq(view, probe.first_escape, &bytes[..n]),
                Ok(true)
            );
        }
        Err(e) => assert!(!matches!(e, jsontext::TextError::DestinationTooSmall { .. })),
    }

    let details = transcoding_details(view, escaped_hint);
    assert_eq!(details.min_utf16_len, view.len());
    let mut units = vec![0u16; details.min_utf16_len];
    if let Ok(n) = transcode_utf16(view, details.first_escape, &mut units) {
        assert!(n <= details.min_utf16_len);
    }

    // Arbitrary candidates must never panic the comparison.
    let _ = unescaped_eq(view, probe.first_escape, candidate);
});
