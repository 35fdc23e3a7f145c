//! Document container and string-token descriptors.
//!
//! A [`Document`] owns the contiguous UTF-8 buffer an upstream parser
//! produced, and is the only thing that can turn a [`StringToken`] into a
//! view of actual bytes. Views borrow from the document, so the borrow
//! checker enforces the validity window that the pooled-buffer design
//! otherwise leaves to discipline: [`Document::release`] takes `&mut self`
//! and therefore cannot be called while any view is alive.
//!
//! The methods here add only liveness and bounds checks on top of the free
//! functions in [`crate::escape`] and [`crate::unescape`]; the algorithms
//! themselves have no document dependency.

use alloc::{borrow::Cow, string::String, vec, vec::Vec};

use crate::{
    error::TextError,
    escape::{EscapeProbe, TranscodeDetails, probe_escaping, transcoding_details},
    unescape::{transcode_utf16, unescape_utf8, unescaped_eq},
};

/// Descriptor of one string token's content inside a document's backing
/// buffer.
///
/// The upstream tokenizer records, for every string value and property name,
/// the byte offset and length of the content (quotes excluded) and whether
/// it saw any escape sequence while scanning it. The descriptor carries no
/// reference to the document; it is plain coordinates, cheap to copy and
/// store in token tables.
///
/// Invariant (maintained by the tokenizer, checked defensively by every
/// accessor): `offset + len` does not exceed the backing buffer's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringToken {
    offset: usize,
    len: usize,
    escaped: bool,
}

impl StringToken {
    /// Creates a descriptor from tokenizer-recorded coordinates.
    ///
    /// `escaped` may be conservative: a stale `true` costs one scan, never
    /// correctness. A stale `false` is trusted and must not be wrong.
    #[must_use]
    pub const fn new(offset: usize, len: usize, escaped: bool) -> Self {
        Self {
            offset,
            len,
            escaped,
        }
    }

    /// Byte offset of the content within the backing buffer.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Byte length of the content.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the content is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The tokenizer's escape classification for this token.
    #[must_use]
    pub const fn is_escaped(&self) -> bool {
        self.escaped
    }
}

/// An immutable, pre-parsed JSON document's backing storage.
///
/// The document starts live and stays live until [`release`](Self::release)
/// hands the buffer back for reuse. Every accessor checks liveness first and
/// fails with [`TextError::InvalidState`] on a released document, so a
/// handle that outlives its storage degrades into errors instead of reads
/// of recycled memory.
///
/// All accessors take `&self`; a live document can be read from any number
/// of threads concurrently.
#[derive(Debug)]
pub struct Document {
    storage: Option<Vec<u8>>,
}

impl Document {
    /// Adopts a parsed document's backing buffer.
    #[must_use]
    pub const fn new(bytes: Vec<u8>) -> Self {
        Self {
            storage: Some(bytes),
        }
    }

    /// Best-effort liveness probe: `true` until [`release`](Self::release)
    /// is called.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.storage.is_some()
    }

    /// Releases the backing buffer for pool reuse, leaving the document in
    /// the released state. Idempotent: later calls return `None`.
    pub fn release(&mut self) -> Option<Vec<u8>> {
        self.storage.take()
    }

    /// The live backing buffer window a token describes.
    fn view(&self, token: StringToken) -> Result<&[u8], TextError> {
        let Some(storage) = &self.storage else {
            return Err(TextError::InvalidState);
        };
        let out_of_bounds = TextError::TokenOutOfBounds {
            offset: token.offset,
            len: token.len,
            doc_len: storage.len(),
        };
        let end = token.offset.checked_add(token.len).ok_or(out_of_bounds)?;
        storage.get(token.offset..end).ok_or(out_of_bounds)
    }

    fn text(&self, token: StringToken) -> Result<Cow<'_, str>, TextError> {
        let view = self.view(token)?;
        let probe = probe_escaping(view, token.escaped);
        let Some(first) = probe.first_escape else {
            return core::str::from_utf8(view)
                .map(Cow::Borrowed)
                .map_err(|e| TextError::InvalidUtf8Sequence(e.valid_up_to()));
        };
        let mut buf = vec![0u8; probe.min_unescaped_len];
        let written = unescape_utf8(view, Some(first), &mut buf)?;
        buf.truncate(written);
        String::from_utf8(buf)
            .map(Cow::Owned)
            .map_err(|e| TextError::InvalidUtf8Sequence(e.utf8_error().valid_up_to()))
    }

    fn text_equals(&self, token: StringToken, candidate: &str) -> Result<bool, TextError> {
        let view = self.view(token)?;
        let probe = probe_escaping(view, token.escaped);
        unescaped_eq(view, probe.first_escape, candidate.as_bytes())
    }

    /// The exact bytes a string value occupied in the source buffer, with no
    /// copy and no validation.
    ///
    /// # Errors
    ///
    /// [`TextError::InvalidState`] on a released document,
    /// [`TextError::TokenOutOfBounds`] for a descriptor outside the buffer.
    pub fn raw_value_view(&self, token: StringToken) -> Result<&[u8], TextError> {
        self.view(token)
    }

    /// The exact bytes a property name occupied in the source buffer.
    ///
    /// # Errors
    ///
    /// As for [`raw_value_view`](Self::raw_value_view).
    pub fn raw_name_view(&self, token: StringToken) -> Result<&[u8], TextError> {
        self.view(token)
    }

    /// Probes a string value for escape sequences and reports the UTF-8
    /// destination size needed to unescape it. O(1) when the token was
    /// classified escape-free.
    ///
    /// # Errors
    ///
    /// As for [`raw_value_view`](Self::raw_value_view).
    pub fn probe_value_escaping(&self, token: StringToken) -> Result<EscapeProbe, TextError> {
        Ok(probe_escaping(self.view(token)?, token.escaped))
    }

    /// Probes a property name for escape sequences.
    ///
    /// # Errors
    ///
    /// As for [`raw_value_view`](Self::raw_value_view).
    pub fn probe_name_escaping(&self, token: StringToken) -> Result<EscapeProbe, TextError> {
        Ok(probe_escaping(self.view(token)?, token.escaped))
    }

    /// Unescapes a string value into `destination` as UTF-8 bytes, returning
    /// the byte count written. `first_escape` comes from
    /// [`probe_value_escaping`](Self::probe_value_escaping); `None` copies
    /// verbatim.
    ///
    /// # Errors
    ///
    /// Those of [`raw_value_view`](Self::raw_value_view) and
    /// [`crate::unescape_utf8`].
    pub fn unescape_value_to_utf8(
        &self,
        token: StringToken,
        first_escape: Option<usize>,
        destination: &mut [u8],
    ) -> Result<usize, TextError> {
        unescape_utf8(self.view(token)?, first_escape, destination)
    }

    /// Unescapes a property name into `destination` as UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// As for [`unescape_value_to_utf8`](Self::unescape_value_to_utf8).
    pub fn unescape_name_to_utf8(
        &self,
        token: StringToken,
        first_escape: Option<usize>,
        destination: &mut [u8],
    ) -> Result<usize, TextError> {
        unescape_utf8(self.view(token)?, first_escape, destination)
    }

    /// Sizing query for transcoding a string value to UTF-16: the first
    /// escape position to pass to
    /// [`transcode_value_to_utf16`](Self::transcode_value_to_utf16) and the
    /// code-unit capacity the destination needs.
    ///
    /// # Errors
    ///
    /// As for [`raw_value_view`](Self::raw_value_view).
    pub fn value_transcoding_details(
        &self,
        token: StringToken,
    ) -> Result<TranscodeDetails, TextError> {
        Ok(transcoding_details(self.view(token)?, token.escaped))
    }

    /// Sizing query for transcoding a property name to UTF-16.
    ///
    /// # Errors
    ///
    /// As for [`raw_value_view`](Self::raw_value_view).
    pub fn name_transcoding_details(
        &self,
        token: StringToken,
    ) -> Result<TranscodeDetails, TextError> {
        Ok(transcoding_details(self.view(token)?, token.escaped))
    }

    /// Unescapes and transcodes a string value into `destination` as UTF-16
    /// code units, returning the unit count written. `None` for
    /// `first_escape` is the pure-transcode fast path.
    ///
    /// # Errors
    ///
    /// Those of [`raw_value_view`](Self::raw_value_view) and
    /// [`crate::transcode_utf16`].
    pub fn transcode_value_to_utf16(
        &self,
        token: StringToken,
        first_escape: Option<usize>,
        destination: &mut [u16],
    ) -> Result<usize, TextError> {
        transcode_utf16(self.view(token)?, first_escape, destination)
    }

    /// Unescapes and transcodes a property name into `destination` as UTF-16
    /// code units.
    ///
    /// # Errors
    ///
    /// As for [`transcode_value_to_utf16`](Self::transcode_value_to_utf16).
    pub fn transcode_name_to_utf16(
        &self,
        token: StringToken,
        first_escape: Option<usize>,
        destination: &mut [u16],
    ) -> Result<usize, TextError> {
        transcode_utf16(self.view(token)?, first_escape, destination)
    }

    /// The unescaped text of a string value, borrowed straight from the
    /// buffer when the token is escape-free and owned otherwise.
    ///
    /// # Errors
    ///
    /// Those of [`unescape_value_to_utf8`](Self::unescape_value_to_utf8),
    /// plus [`TextError::InvalidUtf8Sequence`] if the content is not valid
    /// UTF-8 (the `str` contract is validated here even on the borrowed
    /// path).
    pub fn value_text(&self, token: StringToken) -> Result<Cow<'_, str>, TextError> {
        self.text(token)
    }

    /// The unescaped text of a property name.
    ///
    /// # Errors
    ///
    /// As for [`value_text`](Self::value_text).
    pub fn name_text(&self, token: StringToken) -> Result<Cow<'_, str>, TextError> {
        self.text(token)
    }

    /// Whether a string value's unescaped text equals `candidate`, decided
    /// without allocating.
    ///
    /// # Errors
    ///
    /// Those of [`raw_value_view`](Self::raw_value_view) and
    /// [`crate::unescaped_eq`].
    pub fn value_text_equals(
        &self,
        token: StringToken,
        candidate: &str,
    ) -> Result<bool, TextError> {
        self.text_equals(token, candidate)
    }

    /// Whether a property name's unescaped text equals `candidate`.
    ///
    /// # Errors
    ///
    /// As for [`value_text_equals`](Self::value_text_equals).
    pub fn name_text_equals(
        &self,
        token: StringToken,
        candidate: &str,
    ) -> Result<bool, TextError> {
        self.text_equals(token, candidate)
    }
}
