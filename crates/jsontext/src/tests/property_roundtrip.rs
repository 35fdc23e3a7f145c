//! Property tests: escape/unescape round trips, sizing bounds, and
//! equality-vs-materialization agreement.

use alloc::{format, string::String, vec, vec::Vec};

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use crate::{
    probe_escaping, transcode_utf16, transcoding_details, unescape_utf8, unescaped_eq,
};

/// Escapes every UTF-16 code unit of `s` as `\uXXXX`; scalars above U+FFFF
/// become the surrogate-pair escape form JSON mandates.
fn escape_all(s: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for unit in s.encode_utf16() {
        out.extend_from_slice(format!(r"\u{unit:04x}").as_bytes());
    }
    out
}

/// Escapes only what JSON requires, leaving everything else verbatim.
fn escape_minimal(s: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for ch in s.chars() {
        match ch {
            '"' => out.extend_from_slice(br#"\""#),
            '\\' => out.extend_from_slice(br"\\"),
            '\n' => out.extend_from_slice(br"\n"),
            '\r' => out.extend_from_slice(br"\r"),
            '\t' => out.extend_from_slice(br"\t"),
            '\u{0008}' => out.extend_from_slice(br"\b"),
            '\u{000C}' => out.extend_from_slice(br"\f"),
            c if (c as u32) < 0x20 => {
                out.extend_from_slice(format!(r"\u{:04x}", c as u32).as_bytes());
            }
            c => {
                let mut tmp = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut tmp).as_bytes());
            }
        }
    }
    out
}

/// Probes, sizes, and runs both unescapers, asserting the sizing contract
/// along the way; returns (utf8 bytes, utf16 units).
fn materialize(view: &[u8]) -> (Vec<u8>, Vec<u16>) {
    let probe = probe_escaping(view, true);
    let mut bytes = vec![0u8; view.len()];
    let n = unescape_utf8(view, probe.first_escape, &mut bytes).expect("unescape failed");
    if probe.requires_unescaping() {
        assert!(n <= probe.min_unescaped_len);
    }
    bytes.truncate(n);

    let details = transcoding_details(view, true);
    assert_eq!(details.first_escape, probe.first_escape);
    let mut units = vec![0u16; details.min_utf16_len];
    let m = transcode_utf16(view, details.first_escape, &mut units).expect("transcode failed");
    assert!(m <= details.min_utf16_len);
    units.truncate(m);

    (bytes, units)
}

#[test]
fn fully_escaped_strings_round_trip() {
    fn prop(s: String) -> bool {
        let view = escape_all(&s);
        let (bytes, units) = materialize(&view);
        bytes == s.as_bytes() && units == s.encode_utf16().collect::<Vec<u16>>()
    }
    QuickCheck::new()
        .tests(400)
        .quickcheck(prop as fn(String) -> bool);
}

#[quickcheck]
fn minimally_escaped_strings_round_trip(s: String) -> bool {
    let view = escape_minimal(&s);
    let (bytes, units) = materialize(&view);
    bytes == s.as_bytes() && units == s.encode_utf16().collect::<Vec<u16>>()
}

#[quickcheck]
fn pure_transcoding_matches_std(s: String) -> bool {
    let view = s.as_bytes();
    let details = transcoding_details(view, false);
    let mut units = vec![0u16; details.min_utf16_len];
    let n = transcode_utf16(view, None, &mut units).expect("transcode failed");
    units.truncate(n);
    units == s.encode_utf16().collect::<Vec<u16>>()
}

#[quickcheck]
fn equality_agrees_with_materialization(s: String, other: String) -> bool {
    let view = escape_minimal(&s);
    let probe = probe_escaping(&view, true);
    let self_eq = unescaped_eq(&view, probe.first_escape, s.as_bytes()).expect("well-formed");
    let other_eq = unescaped_eq(&view, probe.first_escape, other.as_bytes()).expect("well-formed");
    self_eq && other_eq == (s == other)
}

#[test]
fn unescaping_escape_free_output_is_identity() {
    fn prop(s: String) -> bool {
        // Literal backslashes would re-read as escapes on the second pass;
        // the property is about escape-free content.
        let clean: String = s.chars().filter(|&c| c != '\\').collect();
        let view = escape_all(&clean);
        let (bytes, _) = materialize(&view);
        // The first pass removed every escape; a second pass with a stale
        // `true` hint must be a no-op.
        let (again, _) = materialize(&bytes);
        again == bytes && bytes == clean.as_bytes()
    }
    QuickCheck::new()
        .tests(200)
        .quickcheck(prop as fn(String) -> bool);
}
