//! Codec-level errors for payment-code processing
//!
//! Provides a closed error taxonomy for the Pix payment-code codec. Every
//! failure corresponds to a concretely checkable precondition (length,
//! numeric format, truncation, hex mismatch), so there is deliberately no
//! generic catch-all variant: route handlers one layer up map each kind
//! deterministically to a status code.

use thiserror::Error;

/// Payment-code codec errors with diagnostic context
///
/// Each variant carries the specific values that failed validation so the
/// caller can surface an actionable message without re-parsing anything.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Field identifier is not exactly 2 ASCII digits
    #[error("Invalid field id {id:?}: expected exactly 2 ASCII digits")]
    InvalidId { id: String },

    /// Field value exceeds the 99-character TLV length limit
    #[error("Value too long for field {id}: {len} characters exceeds limit {limit}")]
    ValueTooLong { id: String, len: usize, limit: usize },

    /// Amount is not a parseable non-negative decimal
    #[error("Invalid amount {input:?}: {reason}")]
    InvalidAmount { input: String, reason: String },

    /// Payload declares more value characters than remain in the buffer
    #[error("Truncated payload at offset {offset}: need {need} characters, {remaining} remain")]
    TruncatedPayload {
        offset: usize,
        need: usize,
        remaining: usize,
    },

    /// The 2-digit length segment is not numeric
    #[error("Invalid length segment {segment:?} at offset {offset}: expected 2 decimal digits")]
    InvalidLength { offset: usize, segment: String },

    /// Trailing checksum disagrees with the recomputed CRC-16
    #[error("Checksum mismatch: code carries {claimed}, calculated {calculated}")]
    ChecksumMismatch { claimed: String, calculated: String },

    /// Code string is too short (or not splittable) to carry a checksum
    #[error("Malformed payload: {reason} (length: {len} characters)")]
    MalformedPayload { len: usize, reason: String },
}

impl CodecError {
    /// Create an InvalidId error for the offending identifier
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    /// Create a ValueTooLong error against the fixed 99-character limit
    pub fn value_too_long(id: impl Into<String>, len: usize) -> Self {
        Self::ValueTooLong {
            id: id.into(),
            len,
            limit: crate::constants::MAX_VALUE_LEN,
        }
    }

    /// Create an InvalidAmount error with a parse diagnosis
    pub fn invalid_amount(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidAmount {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a TruncatedPayload error from parser state
    pub fn truncated_payload(offset: usize, need: usize, remaining: usize) -> Self {
        Self::TruncatedPayload {
            offset,
            need,
            remaining,
        }
    }

    /// Create an InvalidLength error for a non-numeric length segment
    pub fn invalid_length(offset: usize, segment: impl Into<String>) -> Self {
        Self::InvalidLength {
            offset,
            segment: segment.into(),
        }
    }

    /// Create a ChecksumMismatch error carrying both hex renderings
    pub fn checksum_mismatch(claimed: impl Into<String>, calculated: impl Into<String>) -> Self {
        Self::ChecksumMismatch {
            claimed: claimed.into(),
            calculated: calculated.into(),
        }
    }

    /// Create a MalformedPayload error
    pub fn malformed_payload(len: usize, reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            len,
            reason: reason.into(),
        }
    }
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = CodecError::value_too_long("59", 120);
        assert_eq!(
            err.to_string(),
            "Value too long for field 59: 120 characters exceeds limit 99"
        );

        let err = CodecError::truncated_payload(8, 25, 3);
        assert!(err.to_string().contains("offset 8"));
        assert!(err.to_string().contains("need 25"));
    }

    #[test]
    fn test_errors_are_comparable() {
        // Handlers match on the variant to pick a status code.
        assert_eq!(
            CodecError::invalid_id("6"),
            CodecError::InvalidId { id: "6".to_string() }
        );
        assert_ne!(
            CodecError::invalid_id("6"),
            CodecError::invalid_id("666")
        );
    }
}
