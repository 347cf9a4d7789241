//! # MPM Field Registry - Payment-Code Constants
//!
//! ## Purpose
//!
//! Central registry of the EMV Merchant Presented Mode field identifiers and
//! fixed values used by the Pix payment-code assembler. These values define
//! the wire layout of every generated code and must remain stable: scanners
//! in the field validate the exact tags and fixed contents below.
//!
//! ## Integration Points
//!
//! - **Payload Assembly**: the builder emits fields in the documented order
//!   using these tags
//! - **Verification**: the parser recognizes the checksum prefix when
//!   re-validating externally supplied codes
//!
//! The field order is part of the format. Tags are listed here in the
//! sequence the assembler emits them.

/// Tag 00 - payload format indicator, always first.
pub const ID_PAYLOAD_FORMAT_INDICATOR: &str = "00";
/// Tag 26 - merchant account information template (nested).
pub const ID_MERCHANT_ACCOUNT_INFO: &str = "26";
/// Tag 52 - merchant category code.
pub const ID_MERCHANT_CATEGORY_CODE: &str = "52";
/// Tag 53 - transaction currency (ISO 4217 numeric).
pub const ID_TRANSACTION_CURRENCY: &str = "53";
/// Tag 54 - transaction amount.
pub const ID_TRANSACTION_AMOUNT: &str = "54";
/// Tag 58 - country code (ISO 3166-1 alpha-2).
pub const ID_COUNTRY_CODE: &str = "58";
/// Tag 59 - recipient display name.
pub const ID_MERCHANT_NAME: &str = "59";
/// Tag 60 - recipient city.
pub const ID_MERCHANT_CITY: &str = "60";
/// Tag 62 - additional data field template (nested).
pub const ID_ADDITIONAL_DATA: &str = "62";
/// Tag 63 - CRC-16 checksum, always last.
pub const ID_CRC: &str = "63";

/// Sub-tag 00 inside tag 26 - globally unique identifier of the scheme.
pub const ID_ACCOUNT_GUI: &str = "00";
/// Sub-tag 01 inside tag 26 - the recipient's Pix key.
pub const ID_ACCOUNT_KEY: &str = "01";
/// Sub-tag 05 inside tag 62 - reference label.
pub const ID_REFERENCE_LABEL: &str = "05";

/// Fixed payload format indicator value.
pub const PAYLOAD_FORMAT: &str = "01";
/// Domestic Pix arrangement GUI carried in tag 26 sub-field 00.
pub const PIX_GUI: &str = "br.gov.bcb.pix";
/// Fixed merchant category code (unspecified category).
pub const MERCHANT_CATEGORY: &str = "0000";
/// ISO 4217 numeric code for the Brazilian real.
pub const CURRENCY_BRL: &str = "986";
/// ISO 3166-1 alpha-2 country code.
pub const COUNTRY_BR: &str = "BR";
/// Placeholder reference label for static codes.
pub const REFERENCE_LABEL_NONE: &str = "***";

/// Tag + length prefix of the trailing checksum field (`"63"` + `"04"`).
/// The CRC is computed over the body *including* this prefix.
pub const CRC_PREFIX: &str = "6304";

/// Maximum encodable value length: the 2-digit decimal length field cannot
/// represent 100 or more characters.
pub const MAX_VALUE_LEN: usize = 99;

/// Exact width of a TLV field id.
pub const ID_LEN: usize = 2;

/// Width of the encoded length segment.
pub const LENGTH_LEN: usize = 2;

/// Width of the rendered checksum (4 uppercase hex digits).
pub const CRC_HEX_LEN: usize = 4;
