//! Raw, unescaped, and transcoded views over string tokens in parsed JSON
//! documents.
//!
//! A [`Document`] owns the contiguous UTF-8 buffer an upstream parser already
//! tokenized. For every string-valued token (a value or a property name) the
//! parser recorded a byte offset, a byte length, and whether the content
//! contains escape sequences; that triple is a [`StringToken`]. This crate
//! turns those descriptors into three kinds of views without re-parsing:
//!
//! - the exact source bytes, borrowed with no copy ([`Document::raw_value_view`]),
//! - a cheap escape probe with the destination size needed to unescape
//!   ([`Document::probe_value_escaping`]),
//! - the unescaped content, materialized as UTF-8 bytes or UTF-16 code units
//!   into a caller-supplied buffer ([`Document::unescape_value_to_utf8`],
//!   [`Document::transcode_value_to_utf16`]).
//!
//! The scanning and unescaping algorithms are free functions over byte
//! slices ([`probe_escaping`], [`unescape_utf8`], [`transcode_utf16`]), so
//! they can be used and tested without constructing a document.
//!
//! ```
//! use jsontext::{Document, StringToken};
//!
//! // Source text: {"greeting":"He said \"hi\""}, tokenized upstream.
//! let doc = Document::new(br#"{"greeting":"He said \"hi\""}"#.to_vec());
//! let value = StringToken::new(13, 14, true);
//!
//! let probe = doc.probe_value_escaping(value).unwrap();
//! assert_eq!(probe.first_escape, Some(8));
//!
//! let mut buf = vec![0u8; probe.min_unescaped_len];
//! let n = doc.unescape_value_to_utf8(value, probe.first_escape, &mut buf).unwrap();
//! assert_eq!(&buf[..n], b"He said \"hi\"");
//! ```
//!
//! Every operation is synchronous and stateless; concurrent reads of a live
//! document are safe. The buffer a released document hands back (see
//! [`Document::release`]) can be reused by a pool; the borrow checker
//! guarantees no raw view outlives that release.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod document;
mod error;
mod escape;
mod unescape;

#[cfg(test)]
mod tests;

pub use document::{Document, StringToken};
pub use error::TextError;
pub use escape::{EscapeProbe, TranscodeDetails, probe_escaping, transcoding_details};
pub use unescape::{transcode_utf16, unescape_utf8, unescaped_eq};
