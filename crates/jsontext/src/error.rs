use thiserror::Error;

/// Failures reported by view extraction, escape scanning, and unescaping.
///
/// Every failure is synchronous and local to the call that produced it;
/// nothing is retried internally. Callers recover by re-querying sizes,
/// rejecting the token as malformed, or dropping the document handle.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// The document's storage has been released back to its pool; no views
    /// can be produced from it any more.
    #[error("document storage has been released")]
    InvalidState,

    /// The token descriptor does not lie within the document's backing
    /// buffer. Upstream token tables maintain `offset + len <= doc_len`;
    /// a descriptor that violates it is rejected rather than read.
    #[error("token at {offset}+{len} exceeds document length {doc_len}")]
    TokenOutOfBounds {
        /// Byte offset the descriptor claims.
        offset: usize,
        /// Byte length the descriptor claims.
        len: usize,
        /// Length of the live backing buffer.
        doc_len: usize,
    },

    /// An invalid escape selector, a truncated `\uXXXX`, an unpaired
    /// surrogate, or a dangling `\` at the end of the token. The payload is
    /// the byte offset of the offending backslash within the view.
    #[error("malformed escape sequence at byte {0}")]
    MalformedEscapeSequence(usize),

    /// Malformed multi-byte UTF-8 outside any escape sequence. The payload
    /// is the byte offset at which the offending sequence starts in the
    /// text being decoded.
    #[error("invalid UTF-8 sequence at byte {0}")]
    InvalidUtf8Sequence(usize),

    /// The destination buffer cannot hold the decoded output. `needed` is a
    /// lower bound on the required capacity in destination units (bytes for
    /// UTF-8, code units for UTF-16).
    #[error("destination holds {capacity} units but at least {needed} are required")]
    DestinationTooSmall {
        /// Lower bound on the required destination capacity.
        needed: usize,
        /// Capacity the caller actually supplied.
        capacity: usize,
    },
}
