//! Escape presence and sizing queries over raw string-token bytes.
//!
//! Both queries are stateless forward scans. The caller passes the escape
//! flag the upstream parser recorded for the token; a `false` hint
//! short-circuits the scan entirely, so the common escape-free case is O(1).
//! A `true` hint is treated as conservative: if the scan finds no backslash
//! after all, the result is the same as for an escape-free token.
//!
//! Neither query validates escape well-formedness. A trailing lone `\` is
//! reported as presence; the unescapers in [`crate::unescape`] reject it.

/// Result of scanning a raw token view for JSON escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeProbe {
    /// Byte offset of the first `\` within the view, or `None` when the
    /// view requires no unescaping.
    pub first_escape: Option<usize>,
    /// Minimum destination size in bytes for [`crate::unescape_utf8`].
    ///
    /// Equal to the view's byte length when unescaping is required (every
    /// escape sequence decodes to no more bytes than its source encoding),
    /// `0` otherwise.
    pub min_unescaped_len: usize,
}

impl EscapeProbe {
    const ESCAPE_FREE: Self = Self {
        first_escape: None,
        min_unescaped_len: 0,
    };

    /// Whether the view contains at least one escape sequence.
    #[must_use]
    pub const fn requires_unescaping(&self) -> bool {
        self.first_escape.is_some()
    }
}

/// Sizing result for UTF-16 transcoding of a raw token view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranscodeDetails {
    /// Byte offset of the first `\` within the view, or `None`. Pass this
    /// to [`crate::transcode_utf16`]; `None` selects the pure-transcode
    /// fast path.
    pub first_escape: Option<usize>,
    /// Minimum destination size in UTF-16 code units.
    ///
    /// Always the view's byte length: no decoded UTF-16 form is longer than
    /// the source byte count. Conservative, never under-allocates.
    pub min_utf16_len: usize,
}

/// Scans `view` for the first JSON escape sequence and reports the
/// destination size needed to unescape it.
///
/// `escaped_hint` is the upstream parser's classification of the token.
/// `false` is trusted without scanning.
#[must_use]
pub fn probe_escaping(view: &[u8], escaped_hint: bool) -> EscapeProbe {
    if !escaped_hint {
        return EscapeProbe::ESCAPE_FREE;
    }
    match view.iter().position(|&b| b == b'\\') {
        Some(i) => EscapeProbe {
            first_escape: Some(i),
            min_unescaped_len: view.len(),
        },
        None => EscapeProbe::ESCAPE_FREE,
    }
}

/// Companion sizing query for [`crate::transcode_utf16`].
///
/// Reports the same `first_escape` as [`probe_escaping`] and the UTF-16
/// destination bound for the view.
#[must_use]
pub fn transcoding_details(view: &[u8], escaped_hint: bool) -> TranscodeDetails {
    TranscodeDetails {
        first_escape: probe_escaping(view, escaped_hint).first_escape,
        min_utf16_len: view.len(),
    }
}
