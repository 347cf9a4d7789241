//! # Payment-Code Parser - Strict TLV Decoding and Verification
//!
//! ## Purpose
//!
//! Strict left-to-right decoder for MPM TLV payloads and the checksum
//! verifier for complete payment codes. Decoding is off the generation hot
//! path — it exists for round-trip validation and for checking externally
//! supplied codes — so it favors exhaustive validation over speed: every id
//! and length segment is checked, every declared length is bounds-checked
//! against the remaining input, and malformed input is reported with the
//! character offset where parsing stopped.
//!
//! Offsets and lengths are counted in characters, matching the encoder; the
//! checksum itself operates on UTF-8 bytes.

use crate::checksum::checksum_hex;
use crate::constants::{CRC_HEX_LEN, ID_LEN, LENGTH_LEN};
use crate::error::{CodecError, CodecResult};
use types::Field;

const HEADER_LEN: usize = ID_LEN + LENGTH_LEN;

/// Decode a TLV payload into its flat sequence of leaf fields.
///
/// Parses strictly left-to-right: 2 digits of id, 2 digits of length, then
/// exactly `length` characters of value. Nesting is not interpreted — a
/// template's children come back by decoding its value again. The empty
/// payload decodes to an empty sequence.
pub fn decode(payload: &str) -> CodecResult<Vec<Field>> {
    let chars: Vec<char> = payload.chars().collect();
    let mut fields = Vec::new();
    let mut offset = 0;

    while offset < chars.len() {
        let remaining = chars.len() - offset;
        if remaining < HEADER_LEN {
            return Err(CodecError::truncated_payload(offset, HEADER_LEN, remaining));
        }

        let id: String = chars[offset..offset + ID_LEN].iter().collect();
        if !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::invalid_id(id));
        }

        let length_segment: String = chars[offset + ID_LEN..offset + HEADER_LEN].iter().collect();
        let declared: usize = length_segment
            .parse()
            .map_err(|_| CodecError::invalid_length(offset + ID_LEN, &length_segment))?;

        let value_offset = offset + HEADER_LEN;
        let remaining = chars.len() - value_offset;
        if remaining < declared {
            return Err(CodecError::truncated_payload(value_offset, declared, remaining));
        }

        let value: String = chars[value_offset..value_offset + declared].iter().collect();
        fields.push(Field::leaf(id, value));
        offset = value_offset + declared;
    }

    Ok(fields)
}

/// Verify the trailing CRC-16 of a complete payment code.
///
/// Splits the last 4 characters off as the claimed checksum, recomputes the
/// CRC over everything before them (the `"6304"` prefix is required to
/// already be embedded there), and compares case-insensitively. Inputs too
/// short to carry a checksum report `MalformedPayload`; this function never
/// panics on arbitrary input.
pub fn verify_payment_code(code: &str) -> CodecResult<()> {
    let total = code.chars().count();
    if total < CRC_HEX_LEN {
        return Err(CodecError::malformed_payload(
            total,
            "too short to carry a 4-character checksum",
        ));
    }

    // Split on a character boundary; byte-indexed split_at could panic on
    // multi-byte input.
    let split = code
        .char_indices()
        .nth(total - CRC_HEX_LEN)
        .map(|(i, _)| i)
        .unwrap_or(code.len());
    let (body, claimed) = code.split_at(split);

    let calculated = checksum_hex(body);
    if claimed.eq_ignore_ascii_case(&calculated) {
        Ok(())
    } else {
        Err(CodecError::checksum_mismatch(claimed, calculated))
    }
}
