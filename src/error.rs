//! Contains the Error and Result type used by the decoder and encoder.
use std::fmt::Display;

use crate::Tag;

/// An error from decoding or encoding NBT. Every error is fatal to the call
/// that produced it. Nothing is retried internally and no partially decoded
/// value is returned.
#[derive(Debug, Clone)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A tag id outside 0..=12, a Compound with no End tag, a VarInt with too
    /// many groups, a negative length, or a payload for `TAG_End`.
    MalformedTag,

    /// Lists and Compounds nested deeper than [`Options::max_depth`][crate::Options::max_depth].
    DepthExceeded,

    /// More bytes were needed than [`Options::max_read_bytes`][crate::Options::max_read_bytes] allows.
    ReadLimitExceeded,

    /// The source ran out part way through a value.
    TruncatedInput,

    /// The value cannot be represented on the wire, for example a List holding
    /// an element that doesn't match its declared tag.
    UnsupportedRuntimeType,

    /// The root was `TAG_End`, or the writer requires a Compound root and got
    /// something else.
    InvalidRoot,

    /// String bytes were invalid for the encoding's charset, or a string was
    /// too long for its length prefix.
    InvalidString,

    /// Any other error from the underlying reader or writer.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Whether the stream this error came from can be used any further. It
    /// never can, decode and encode are all-or-nothing.
    pub fn is_fatal(&self) -> bool {
        true
    }

    fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind,
        }
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        Self::new(
            ErrorKind::MalformedTag,
            format!("invalid nbt tag value: {}", tag),
        )
    }

    pub(crate) fn unterminated_compound() -> Self {
        Self::new(
            ErrorKind::MalformedTag,
            "compound ended without a TAG_End",
        )
    }

    pub(crate) fn end_payload(len: usize) -> Self {
        Self::new(
            ErrorKind::MalformedTag,
            format!("list of TAG_End cannot hold {} elements", len),
        )
    }

    pub(crate) fn negative_len(len: i64) -> Self {
        Self::new(
            ErrorKind::MalformedTag,
            format!("length was negative: {}", len),
        )
    }

    pub(crate) fn size_too_large(len: usize) -> Self {
        Self::new(
            ErrorKind::MalformedTag,
            format!("array of {} elements is too large", len),
        )
    }

    pub(crate) fn varint_too_large(bits: u32) -> Self {
        Self::new(
            ErrorKind::MalformedTag,
            format!("VarInt too large for {} bits", bits),
        )
    }

    pub(crate) fn depth_exceeded(depth: u32, max: u32) -> Self {
        Self::new(
            ErrorKind::DepthExceeded,
            format!("nbt nested too deeply: depth {} exceeds {}", depth, max),
        )
    }

    pub(crate) fn read_limit_exceeded(read: u64, limit: u64) -> Self {
        Self::new(
            ErrorKind::ReadLimitExceeded,
            format!("read size exceeded limit: read={}, limit={}", read, limit),
        )
    }

    pub(crate) fn unexpected_eof() -> Self {
        Self::new(
            ErrorKind::TruncatedInput,
            "eof: unexpectedly ran out of input",
        )
    }

    pub(crate) fn list_element(expected: Tag, found: Tag) -> Self {
        Self::new(
            ErrorKind::UnsupportedRuntimeType,
            format!("list of {} cannot hold a {}", expected, found),
        )
    }

    pub(crate) fn len_too_large(len: usize) -> Self {
        Self::new(
            ErrorKind::UnsupportedRuntimeType,
            format!("length {} does not fit in an i32", len),
        )
    }

    pub(crate) fn end_root() -> Self {
        Self::new(ErrorKind::InvalidRoot, "found a TAG_End as the root tag")
    }

    pub(crate) fn no_root_compound(found: Tag) -> Self {
        Self::new(
            ErrorKind::InvalidRoot,
            format!("invalid nbt: root must be a compound, found {}", found),
        )
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Self {
        Self::new(
            ErrorKind::InvalidString,
            format!(
                "invalid nbt string: nonunicode: {}",
                String::from_utf8_lossy(data)
            ),
        )
    }

    pub(crate) fn string_too_long(len: usize) -> Self {
        Self::new(
            ErrorKind::InvalidString,
            format!("string of {} bytes does not fit a u16 length", len),
        )
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::unexpected_eof(),
            _ => Self::new(ErrorKind::Io, format!("io error: {}", e)),
        }
    }
}
