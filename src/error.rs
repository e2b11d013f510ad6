//! Protocol error types with stable numeric codes.
//!
//! [`DecodeError`] is returned whenever an inbound payload does not match
//! the expected wire shape. The external dispatcher decides what to do with
//! it (close the socket, reply with an error frame, or drop the message).
//! [`EncodeError`] exists for completeness; serializing the in-memory
//! records does not fail in practice.

use serde::Serialize;

/// Structured JSON error frame body.
///
/// Error frames follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "malformed payload: expected value at line 1 column 1"
///   }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Numeric error code (see [`DecodeError::error_code`]).
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
}

/// Failure to turn a received payload into a protocol record.
///
/// # Error Code Ranges
///
/// | Range     | Category                                   |
/// |-----------|--------------------------------------------|
/// | 1000–1999 | Wire: the frame or JSON could not be read  |
/// | 2000–2999 | Contract: JSON parsed but the shape is off |
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not valid JSON or has fields of the wrong type.
    #[error("malformed payload: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The payload exceeds the configured size limit.
    #[error("payload of {len} bytes exceeds limit of {max} bytes")]
    TooLarge {
        /// Length of the rejected payload in bytes.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The frame kind cannot carry a protocol message.
    #[error("unsupported frame: {0}")]
    UnsupportedFrame(&'static str),

    /// A binary frame did not contain UTF-8 text.
    #[error("binary frame is not valid utf-8")]
    InvalidUtf8,

    /// The action tag is not part of the known vocabulary.
    #[error("unknown action: {0:?}")]
    UnknownAction(String),

    /// The payload field matching the action tag is absent.
    #[error("action {action} requires the {field:?} field")]
    MissingPayload {
        /// Action tag of the message.
        action: String,
        /// Wire name of the missing field.
        field: &'static str,
    },

    /// More than one payload field is populated.
    #[error("action {action} carries more than one payload field")]
    ConflictingPayloads {
        /// Action tag of the message.
        action: String,
    },
}

impl DecodeError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Malformed(_) => 1001,
            Self::TooLarge { .. } => 1002,
            Self::UnsupportedFrame(_) => 1003,
            Self::InvalidUtf8 => 1004,
            Self::UnknownAction(_) => 2001,
            Self::MissingPayload { .. } => 2002,
            Self::ConflictingPayloads { .. } => 2003,
        }
    }

    /// Builds the JSON error body for this error.
    #[must_use]
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
            },
        }
    }
}

/// Failure to serialize a protocol record.
#[derive(Debug, thiserror::Error)]
#[error("failed to encode message: {0}")]
pub struct EncodeError(#[from] pub serde_json::Error);
