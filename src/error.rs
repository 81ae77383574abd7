/*
This code is part of the shapefile_codec library.
Created: 11/02/2026
Last Modified: 19/05/2026
License: MIT

Notes: The single error type shared by every codec in the crate.
*/
use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from the underlying stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value failed its construction-time validation.
    #[error("invalid {what}: {message}")]
    InvalidInput {
        what: &'static str,
        message: String,
    },

    /// A read needed more bytes than the stream could supply.
    #[error("stream truncated: expected {expected} bytes but only {actual} were available")]
    StreamTruncated { expected: usize, actual: usize },

    /// A shape content tag did not match any known or expected ShapeType.
    #[error("unexpected shape type code {0}")]
    UnexpectedShapeType(i32),

    /// A well-known binary buffer did not conform to the extended WKB layout.
    #[error("malformed well-known binary: {0}")]
    MalformedWellKnownBinary(String),

    /// `RecordNumber::next` was called at the maximum representable value.
    #[error("record number overflow")]
    RecordNumberOverflow,
}

impl Error {
    pub(crate) fn invalid(what: &'static str, message: impl Into<String>) -> Error {
        Error::InvalidInput {
            what,
            message: message.into(),
        }
    }
}

/// A convenience `Result` type alias using the crate's `Error` type.
pub type Result<T> = std::result::Result<T, Error>;
