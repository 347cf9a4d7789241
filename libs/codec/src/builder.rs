//! # Payment-Code Builder - MPM Payload Construction
//!
//! ## Purpose
//!
//! TLV encoding primitives and the payload assembler that turns one
//! `PaymentRequest` into a complete, checksum-terminated Pix "BR Code"
//! string. Construction is a pure function from validated input to output:
//! no I/O, no shared state, no partial results — any failure aborts with a
//! typed [`CodecError`] before anything is produced.
//!
//! ## Architecture
//!
//! ```text
//! PaymentRequest → [PayloadBuilder] → body + "6304" + CRC16 → QR renderer
//!      ↑                 ↓                    ↓                 (external)
//! Validated        Ordered TLV          Trailing
//! HTTP input       encoding             checksum
//! ```
//!
//! Field order is fixed by the arrangement's MPM profile and is part of the
//! format; the builder emits fields strictly in insertion order.

use crate::checksum::checksum_hex;
use crate::constants::*;
use crate::error::{CodecError, CodecResult};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use types::{Field, PaymentRequest};

/// Encode a single leaf field as `id + length(2 digits) + value`.
///
/// The length segment counts characters, matching the original string-based
/// wire format; the checksum downstream operates on UTF-8 bytes.
pub fn encode_field(id: &str, value: &str) -> CodecResult<String> {
    if id.len() != ID_LEN || !id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CodecError::invalid_id(id));
    }
    let len = value.chars().count();
    if len > MAX_VALUE_LEN {
        return Err(CodecError::value_too_long(id, len));
    }
    Ok(format!("{id}{len:02}{value}"))
}

/// Encode a field, collapsing leaves and nested templates into one pass.
///
/// A nested field's value is the concatenation of its children's encodings;
/// its own length is computed after the children are encoded, so an inner
/// concatenation over 99 characters surfaces as `ValueTooLong` on the
/// parent id. Child errors propagate unchanged.
pub fn encode(field: &Field) -> CodecResult<String> {
    match field {
        Field::Leaf { id, value } => encode_field(id, value),
        Field::Nested { id, children } => {
            let mut inner = String::new();
            for child in children {
                inner.push_str(&encode(child)?);
            }
            encode_field(id, &inner)
        }
    }
}

/// Validate and normalize an amount to exactly 2 fractional digits.
///
/// Accepts any non-negative decimal `rust_decimal` can parse; rounds
/// half-up on the 3rd fractional digit. No thousands separators, no
/// currency symbol.
pub fn format_amount(input: &str) -> CodecResult<String> {
    let amount = Decimal::from_str(input.trim())
        .map_err(|e| CodecError::invalid_amount(input, e.to_string()))?;
    if amount.is_sign_negative() {
        return Err(CodecError::invalid_amount(input, "amount must be non-negative"));
    }
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Ok(format!("{rounded:.2}"))
}

/// Ordered payload assembler.
///
/// Collects fields in insertion order and terminates the encoding with the
/// CRC field on [`build`](Self::build). The checksum field is never pushed
/// by callers: its tag and length (`"6304"`) are appended automatically and
/// the CRC is computed over everything before its value.
#[derive(Debug, Default)]
pub struct PayloadBuilder {
    fields: Vec<Field>,
}

impl PayloadBuilder {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a field. Order is preserved; it is part of the format.
    pub fn push(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Encode all fields, append the checksum tag/length prefix, and
    /// terminate with the CRC-16 rendered as 4 uppercase hex digits.
    pub fn build(self) -> CodecResult<String> {
        let mut body = String::new();
        for field in &self.fields {
            body.push_str(&encode(field)?);
        }
        body.push_str(CRC_PREFIX);
        let crc = checksum_hex(&body);
        body.push_str(&crc);
        Ok(body)
    }
}

/// Generate the complete static payment code for one request.
///
/// Emits the fixed MPM field sequence: payload format indicator, nested
/// merchant-account template (Pix GUI + recipient key), category code,
/// currency, amount, country, name, city, nested additional-data template,
/// and the trailing checksum. Deterministic: identical input yields
/// byte-identical output.
pub fn generate_payment_code(request: &PaymentRequest) -> CodecResult<String> {
    let amount = format_amount(&request.amount)?;

    PayloadBuilder::new()
        .push(Field::leaf(ID_PAYLOAD_FORMAT_INDICATOR, PAYLOAD_FORMAT))
        .push(Field::nested(
            ID_MERCHANT_ACCOUNT_INFO,
            vec![
                Field::leaf(ID_ACCOUNT_GUI, PIX_GUI),
                Field::leaf(ID_ACCOUNT_KEY, request.recipient_key.clone()),
            ],
        ))
        .push(Field::leaf(ID_MERCHANT_CATEGORY_CODE, MERCHANT_CATEGORY))
        .push(Field::leaf(ID_TRANSACTION_CURRENCY, CURRENCY_BRL))
        .push(Field::leaf(ID_TRANSACTION_AMOUNT, amount))
        .push(Field::leaf(ID_COUNTRY_CODE, COUNTRY_BR))
        .push(Field::leaf(ID_MERCHANT_NAME, request.merchant_name.clone()))
        .push(Field::leaf(ID_MERCHANT_CITY, request.merchant_city.clone()))
        .push(Field::nested(
            ID_ADDITIONAL_DATA,
            vec![Field::leaf(ID_REFERENCE_LABEL, REFERENCE_LABEL_NONE)],
        ))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_field_exactness() {
        // 7-character value must encode a "07" length segment.
        let encoded = encode_field("26", "abcdefg").unwrap();
        assert_eq!(encoded, "2607abcdefg");
        assert!(encoded.starts_with("2607"));
    }

    #[test]
    fn test_zero_padded_length() {
        assert_eq!(encode_field("00", "01").unwrap(), "000201");
        assert_eq!(encode_field("62", "").unwrap(), "6200");
    }

    #[test]
    fn test_boundary_99_accepted_100_rejected() {
        let ok = "x".repeat(99);
        assert_eq!(encode_field("59", &ok).unwrap().len(), 4 + 99);

        let too_long = "x".repeat(100);
        assert_eq!(
            encode_field("59", &too_long),
            Err(CodecError::ValueTooLong {
                id: "59".to_string(),
                len: 100,
                limit: 99
            })
        );
    }

    #[test]
    fn test_invalid_id_rejected() {
        assert!(matches!(encode_field("6", "x"), Err(CodecError::InvalidId { .. })));
        assert!(matches!(encode_field("632", "x"), Err(CodecError::InvalidId { .. })));
        assert!(matches!(encode_field("6a", "x"), Err(CodecError::InvalidId { .. })));
        assert!(matches!(encode_field("", "x"), Err(CodecError::InvalidId { .. })));
    }

    #[test]
    fn test_nested_encoding_computes_length_after_children() {
        let field = Field::nested(
            "62",
            vec![Field::leaf("05", "***")],
        );
        // Child encodes to "0503***" (7 chars), so the parent length is 07.
        assert_eq!(encode(&field).unwrap(), "62070503***");
    }

    #[test]
    fn test_nested_inner_over_99_rejected_on_parent() {
        let field = Field::nested(
            "26",
            vec![
                Field::leaf("00", "a".repeat(50)),
                Field::leaf("01", "b".repeat(50)),
            ],
        );
        // Inner is 2 * (4 + 50) = 108 characters.
        assert_eq!(
            encode(&field),
            Err(CodecError::ValueTooLong {
                id: "26".to_string(),
                len: 108,
                limit: 99
            })
        );
    }

    #[test]
    fn test_nested_child_error_propagates() {
        let field = Field::nested("26", vec![Field::leaf("0", "x")]);
        assert!(matches!(encode(&field), Err(CodecError::InvalidId { .. })));
    }

    #[test]
    fn test_amount_formatting() {
        assert_eq!(format_amount("10").unwrap(), "10.00");
        assert_eq!(format_amount("10.5").unwrap(), "10.50");
        assert_eq!(format_amount("0").unwrap(), "0.00");
        // Round-half-up on the 3rd fractional digit.
        assert_eq!(format_amount("10.005").unwrap(), "10.01");
        assert_eq!(format_amount("10.004").unwrap(), "10.00");
        assert_eq!(format_amount(" 1234.56 ").unwrap(), "1234.56");
    }

    #[test]
    fn test_amount_rejections() {
        assert!(matches!(format_amount("abc"), Err(CodecError::InvalidAmount { .. })));
        assert!(matches!(format_amount(""), Err(CodecError::InvalidAmount { .. })));
        assert!(matches!(format_amount("-1.00"), Err(CodecError::InvalidAmount { .. })));
        assert!(matches!(format_amount("R$ 10"), Err(CodecError::InvalidAmount { .. })));
    }

    #[test]
    fn test_generated_code_shape() {
        let request = PaymentRequest::new("10.00", "x@example.com", "Test", "Sao Paulo");
        let code = generate_payment_code(&request).unwrap();

        // Fixed leading fields.
        assert!(code.starts_with("000201"));
        // Merchant account template carries the GUI and the key.
        assert!(code.contains("0014br.gov.bcb.pix"));
        assert!(code.contains("0113x@example.com"));
        // Fixed mid-payload fields.
        assert!(code.contains("52040000"));
        assert!(code.contains("5303986"));
        assert!(code.contains("540510.00"));
        assert!(code.contains("5802BR"));
        assert!(code.contains("5904Test"));
        assert!(code.contains("6009Sao Paulo"));
        assert!(code.contains("62070503***"));
        // Checksum prefix sits 8 characters from the end.
        assert_eq!(&code[code.len() - 8..code.len() - 4], "6304");
        assert!(code[code.len() - 4..]
            .bytes()
            .all(|b| b.is_ascii_hexdigit() && !b.is_ascii_lowercase()));
    }

    #[test]
    fn test_generation_is_idempotent() {
        let request = PaymentRequest::new("99.90", "+5511999999999", "Loja", "Recife");
        assert_eq!(
            generate_payment_code(&request).unwrap(),
            generate_payment_code(&request).unwrap()
        );
    }

    #[test]
    fn test_oversized_name_rejected_not_truncated() {
        let request = PaymentRequest::new("1.00", "x@example.com", "N".repeat(100), "Recife");
        assert!(matches!(
            generate_payment_code(&request),
            Err(CodecError::ValueTooLong { .. })
        ));
    }
}
