use base64::DecodeError;
use thiserror::Error;

/// Errors that can occur when unwrapping PEM text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// No `-----BEGIN <label>-----` line was found
    #[error("missing a pre encapsulation boundary")]
    MissingPreEncapsulationBoundary,

    /// The block was never closed with `-----END <label>-----`
    #[error("missing a post encapsulation boundary")]
    MissingPostEncapsulationBoundary,

    #[error("missing PEM data")]
    MissingData,

    /// BEGIN and END lines carry different labels
    #[error("label doesn't match: BEGIN {begin}, END {end}")]
    LabelMismatch { begin: String, end: String },

    #[error("invalid encapsulation boundary")]
    InvalidEncapsulationBoundary,

    #[error("base64 decode: {0}")]
    Base64Decode(DecodeError),
}
